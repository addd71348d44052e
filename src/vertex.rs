/*!
# Vertex Representation

Vertices are addressed by `VertexId = u32`, an index into the vertex arena of the backend
that owns them. In the matrix backend this index doubles as the row/column of the weight
matrix; in the list backend it is a stable arena slot that survives unrelated insertions
and deletions.

The [`Vertex`] record holds the application data together with its degree counters.
Per-traversal bookkeeping (visit markers, distances, predecessors) is kept in tables owned
by the running algorithm and indexed by `VertexId`, see [`VisitState`].
*/

use crate::edge::NumEdges;

/// Vertices are addressed by an unsigned index from `0` to `VertexId::MAX - 1`
pub type VertexId = u32;

/// VertexId-Value that is considered invalid
pub const INVALID_VERTEX: VertexId = VertexId::MAX;

/// There can be at most `2^32 - 1` vertices in a graph!
pub type NumVertices = u32;

/// Marker of a vertex during a traversal or a shortest-path search.
///
/// A vertex moves strictly forward: `Unvisited -> Discovered -> Finalized`.
/// - In DFS/BFS a vertex is `Discovered` once it was pushed onto the stack/queue and
///   `Finalized` once it was popped and handed to the visitor.
/// - In Dijkstra a vertex is `Discovered` once it has a finite distance estimate and
///   `Finalized` once it was extracted as the minimum of the priority queue.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VisitState {
    #[default]
    Unvisited,
    Discovered,
    Finalized,
}

impl VisitState {
    /// Returns *true* if the vertex was reached in any way
    pub fn is_reached(self) -> bool {
        self != VisitState::Unvisited
    }
}

/// A vertex of a graph: application data plus degree counters.
///
/// For directed graphs, `in_degree` and `out_degree` count incoming and outgoing arcs and
/// `degree` is their sum. For undirected graphs all three counters equal the number of
/// incident edges (a self-loop counts once).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<T> {
    data: T,
    in_degree: NumEdges,
    out_degree: NumEdges,
    degree: NumEdges,
}

impl<T> Vertex<T> {
    pub(crate) fn new(data: T) -> Self {
        Self {
            data,
            in_degree: 0,
            out_degree: 0,
            degree: 0,
        }
    }

    /// Returns a reference to the application data
    pub fn data(&self) -> &T {
        &self.data
    }

    /// Number of incoming arcs (incident edges if undirected)
    pub fn in_degree(&self) -> NumEdges {
        self.in_degree
    }

    /// Number of outgoing arcs (incident edges if undirected)
    pub fn out_degree(&self) -> NumEdges {
        self.out_degree
    }

    /// Total number of incident connections
    pub fn degree(&self) -> NumEdges {
        self.degree
    }

    /// Returns *true* if no connection touches this vertex
    pub fn is_isolated(&self) -> bool {
        self.in_degree == 0 && self.out_degree == 0
    }

    pub(crate) fn into_data(self) -> T {
        self.data
    }

    pub(crate) fn attach_out_arc(&mut self) {
        self.out_degree += 1;
        self.degree = self.in_degree + self.out_degree;
    }

    pub(crate) fn attach_in_arc(&mut self) {
        self.in_degree += 1;
        self.degree = self.in_degree + self.out_degree;
    }

    pub(crate) fn detach_out_arc(&mut self) {
        debug_assert!(self.out_degree > 0);
        self.out_degree -= 1;
        self.degree = self.in_degree + self.out_degree;
    }

    pub(crate) fn detach_in_arc(&mut self) {
        debug_assert!(self.in_degree > 0);
        self.in_degree -= 1;
        self.degree = self.in_degree + self.out_degree;
    }

    pub(crate) fn attach_edge(&mut self) {
        self.degree += 1;
        self.in_degree = self.degree;
        self.out_degree = self.degree;
    }

    pub(crate) fn detach_edge(&mut self) {
        debug_assert!(self.degree > 0);
        self.degree -= 1;
        self.in_degree = self.degree;
        self.out_degree = self.degree;
    }
}
