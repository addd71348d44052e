/*!
Graph traversal iterators.

This module provides:
- A generic traversal iterator ([`TraversalSearch`]) that becomes a BFS or a DFS depending
  on its frontier, with or without predecessor tracking.
- [`TraversalTree`] to turn a traversal with predecessors into a parent array.
- The [`Traversal`] trait exposing `bfs`/`dfs` directly on every [`Adjacency`].

A vertex is marked `Discovered` when it is pushed onto the frontier, so every vertex is
handed out at most once, and `Finalized` when it is popped. Neighbors are pushed in the
backend's adjacency order.
*/

use std::marker::PhantomData;

use super::*;

/// Abstraction for items yielded by a traversal iterator.
///
/// Two implementations are provided:
/// - [`VertexId`] stores only the vertex (no predecessor information).
/// - [`PredecessorOfVertex`] stores `(predecessor, vertex)` pairs.
pub trait SequencedItem: Clone + Copy {
    /// Constructs a new item with a predecessor.
    fn new_with_predecessor(predecessor: VertexId, item: VertexId) -> Self;

    /// Constructs a new item without predecessor information.
    fn new_without_predecessor(item: VertexId) -> Self;

    /// Returns the vertex represented by this item.
    fn item(&self) -> VertexId;

    /// Returns the predecessor of this vertex, if any.
    fn predecessor(&self) -> Option<VertexId>;
}

impl SequencedItem for VertexId {
    fn new_with_predecessor(_: VertexId, item: VertexId) -> Self {
        item
    }
    fn new_without_predecessor(item: VertexId) -> Self {
        item
    }
    fn item(&self) -> VertexId {
        *self
    }
    fn predecessor(&self) -> Option<VertexId> {
        None
    }
}

/// `(predecessor, vertex)`; a root is encoded as its own predecessor.
pub type PredecessorOfVertex = (VertexId, VertexId);

impl SequencedItem for PredecessorOfVertex {
    fn new_with_predecessor(predecessor: VertexId, item: VertexId) -> Self {
        (predecessor, item)
    }
    fn new_without_predecessor(item: VertexId) -> Self {
        (item, item)
    }
    fn item(&self) -> VertexId {
        self.1
    }
    fn predecessor(&self) -> Option<VertexId> {
        if self.0 == self.1 { None } else { Some(self.0) }
    }
}

/// Generic traversal iterator supporting BFS and DFS variants.
///
/// Keeps a frontier (queue or stack) and a [`VisitState`] per vertex id. The table is
/// owned by the iterator and dropped with it.
pub struct TraversalSearch<'a, G, S, I>
where
    G: Adjacency,
    S: Sequencer<I>,
    I: SequencedItem,
{
    graph: &'a G,
    states: Vec<VisitState>,
    sequencer: S,
    finalized: usize,
    stop_at: Option<VertexId>,
    _item: PhantomData<I>,
}

/// A BFS traversal iterator, visiting vertices in breadth-first order.
pub type BFS<'a, G> = TraversalSearch<'a, G, Queue<VertexId>, VertexId>;

/// A DFS traversal iterator, visiting vertices in depth-first order.
pub type DFS<'a, G> = TraversalSearch<'a, G, Stack<VertexId>, VertexId>;

/// A BFS traversal iterator that records predecessor information.
pub type BFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Queue<PredecessorOfVertex>, PredecessorOfVertex>;

/// A DFS traversal iterator that records predecessor information.
pub type DFSWithPredecessor<'a, G> =
    TraversalSearch<'a, G, Stack<PredecessorOfVertex>, PredecessorOfVertex>;

impl<G, S, I> Iterator for TraversalSearch<'_, G, S, I>
where
    G: Adjacency,
    S: Sequencer<I>,
    I: SequencedItem,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        let popped = self.sequencer.pop()?;
        let u = popped.item();
        self.states[u as usize] = VisitState::Finalized;
        self.finalized += 1;

        if self.stop_at == Some(u) {
            while self.sequencer.pop().is_some() {} // drop all
        } else {
            for (v, _) in self.graph.neighbors_of(u) {
                if self.states[v as usize] == VisitState::Unvisited {
                    self.sequencer.push(I::new_with_predecessor(u, v));
                    self.states[v as usize] = VisitState::Discovered;
                }
            }
        }

        Some(popped)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (
            self.sequencer.cardinality(),
            Some(self.graph.len().saturating_sub(self.finalized)),
        )
    }
}

impl<'a, G, S, I> TraversalSearch<'a, G, S, I>
where
    G: Adjacency,
    S: Sequencer<I>,
    I: SequencedItem,
{
    /// Creates a new traversal iterator starting from `start`.
    /// ** Panics if `start >= graph.id_bound()` **
    pub fn new(graph: &'a G, start: VertexId) -> Self {
        let mut states = vec![VisitState::Unvisited; graph.id_bound()];
        states[start as usize] = VisitState::Discovered;
        Self {
            graph,
            states,
            sequencer: S::init(I::new_without_predecessor(start)),
            finalized: 0,
            stop_at: None,
            _item: PhantomData,
        }
    }

    /// Returns the marker of `u` at the current point of the traversal
    pub fn state_of(&self, u: VertexId) -> VisitState {
        self.states.get(u as usize).copied().unwrap_or_default()
    }

    /// Returns *true* if `u` was pushed onto the frontier at some point
    pub fn did_visit_vertex(&self, u: VertexId) -> bool {
        self.state_of(u).is_reached()
    }

    /// Tries to restart the search at a yet unvisited vertex and returns
    /// true iff successful. Requires that search came to a hold earlier,
    /// i.e. self.next() returned None
    pub fn try_restart_at_unvisited(&mut self) -> bool {
        assert!(self.sequencer.is_exhausted());
        let vertex = self
            .graph
            .vertices()
            .find(|&u| self.states[u as usize] == VisitState::Unvisited);
        match vertex {
            None => false,
            Some(x) => {
                self.states[x as usize] = VisitState::Discovered;
                self.sequencer.push(I::new_without_predecessor(x));
                true
            }
        }
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn set_stop_at(&mut self, stopper: VertexId) {
        self.stop_at = Some(stopper);
    }

    /// Sets a stopper vertex. If this vertex is reached, the iterator returns it and afterwards only None.
    pub fn stop_at(mut self, stopper: VertexId) -> Self {
        self.set_stop_at(stopper);
        self
    }

    /// Consumes the traversal search and returns true iff the requested vertex can be visited,
    /// i.e. if there exists a (directed) path from the start vertex to `u`.
    pub fn is_vertex_reachable(mut self, u: VertexId) -> bool {
        self.any(|v| v.item() == u)
    }
}

/// Extension trait for traversal iterators that return [`PredecessorOfVertex`],
/// enabling extraction of the implied traversal tree.
pub trait TraversalTree: Iterator<Item = PredecessorOfVertex> + Sized {
    /// Exclusive bound on the ids the iterator can yield
    fn id_bound(&self) -> usize;

    /// Consumes the iterator and returns `parents[v] = Some(p)` for every visited vertex `v`
    /// with predecessor `p`. Roots and unvisited vertices are `None`.
    fn parent_array(mut self) -> Vec<Option<VertexId>> {
        let mut tree = vec![None; self.id_bound()];
        for pred_with_item in self.by_ref() {
            tree[pred_with_item.item() as usize] = pred_with_item.predecessor();
        }
        tree
    }
}

impl<G, S> TraversalTree for TraversalSearch<'_, G, S, PredecessorOfVertex>
where
    G: Adjacency,
    S: Sequencer<PredecessorOfVertex>,
{
    fn id_bound(&self) -> usize {
        self.states.len()
    }
}

/// Provides convenient traversal methods (BFS, DFS)
pub trait Traversal: Adjacency + Sized {
    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **breadth-first search (BFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new(GraphConfig::list(), NaturalOrder);
    /// for c in ['a', 'b', 'c', 'd'] {
    ///     g.insert(c).unwrap();
    /// }
    /// g.add_connection(&'a', &'c', 1).unwrap();
    /// g.add_connection(&'a', &'b', 1).unwrap();
    /// g.add_connection(&'b', &'d', 1).unwrap();
    ///
    /// let a = g.id_of(&'a').unwrap();
    /// let order: String = g.bfs(a).map(|u| *g.data_of(u).unwrap()).collect();
    /// assert_eq!(order, "abcd");
    /// ```
    fn bfs(&self, start: VertexId) -> BFS<'_, Self> {
        BFS::new(self, start)
    }

    /// Returns an iterator that traverses vertices reachable from `start`
    /// in **depth-first search (DFS) order**.
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new(GraphConfig::matrix(4), NaturalOrder);
    /// for c in ['a', 'b', 'c', 'd'] {
    ///     g.insert(c).unwrap();
    /// }
    /// g.add_connection(&'a', &'b', 1).unwrap();
    /// g.add_connection(&'a', &'c', 1).unwrap();
    /// g.add_connection(&'b', &'d', 1).unwrap();
    ///
    /// let order: String = g.dfs(0).map(|u| *g.data_of(u).unwrap()).collect();
    /// assert_eq!(order, "acbd");
    /// ```
    fn dfs(&self, start: VertexId) -> DFS<'_, Self> {
        DFS::new(self, start)
    }

    /// Returns a BFS iterator starting from `start` that additionally
    /// yields the predecessor relation (connections traversed).
    fn bfs_with_predecessor(&self, start: VertexId) -> BFSWithPredecessor<'_, Self> {
        BFSWithPredecessor::new(self, start)
    }

    /// Returns a DFS iterator starting from `start` that additionally
    /// yields the predecessor relation (connections traversed).
    fn dfs_with_predecessor(&self, start: VertexId) -> DFSWithPredecessor<'_, Self> {
        DFSWithPredecessor::new(self, start)
    }

    /// Returns *true* if there is a (directed) path from `u` to `v`
    fn is_reachable(&self, u: VertexId, v: VertexId) -> bool {
        self.bfs(u).is_vertex_reachable(v)
    }
}

impl<G: Adjacency> Traversal for G {}
