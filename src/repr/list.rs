use std::{
    cmp::Ordering,
    fmt::{self, Display},
    iter,
};

use smallvec::SmallVec;
use tracing::debug;

use super::*;

/// An adjacency entry: the neighbor and the weight of the connection to it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Link {
    pub target: VertexId,
    pub weight: Weight,
}

#[derive(Debug, Clone)]
struct ListVertex<T> {
    vertex: Vertex<T>,
    next: Option<VertexId>,
    links: SmallVec<[Link; 4]>,
}

/// Sparse representation: vertices are stored in an arena and threaded into a singly linked
/// chain ordered by the comparator. Every vertex owns its adjacency list (arcs if directed,
/// edges if undirected) sorted by the comparator order of the neighbor.
///
/// Undirected edges are stored as a mirrored pair of links that is created and destroyed
/// together; a self-loop is stored once.
#[derive(Debug, Clone)]
pub struct ListBackend<T, C> {
    arena: Vec<Option<ListVertex<T>>>,
    free: Vec<VertexId>,
    head: Option<VertexId>,
    num_vertices: NumVertices,
    num_connections: NumEdges,
    directedness: Directedness,
    weighted: bool,
    comparator: C,
}

impl<T, C> ListBackend<T, C> {
    pub fn new(directedness: Directedness, weighted: bool, comparator: C) -> Self {
        Self::with_capacity(0, directedness, weighted, comparator)
    }

    /// Reserves room for `capacity` vertices; the backend still grows past it
    pub fn with_capacity(
        capacity: NumVertices,
        directedness: Directedness,
        weighted: bool,
        comparator: C,
    ) -> Self {
        Self {
            arena: Vec::with_capacity(capacity as usize),
            free: Vec::new(),
            head: None,
            num_vertices: 0,
            num_connections: 0,
            directedness,
            weighted,
            comparator,
        }
    }

    fn node(&self, u: VertexId) -> Option<&ListVertex<T>> {
        self.arena.get(u as usize)?.as_ref()
    }

    fn node_mut(&mut self, u: VertexId) -> Option<&mut ListVertex<T>> {
        self.arena.get_mut(u as usize)?.as_mut()
    }

    fn is_live(&self, u: VertexId) -> bool {
        self.node(u).is_some()
    }

    /// Returns the adjacency list of `u`.
    /// ** Panics if `u` is not a live vertex **
    pub fn links_of(&self, u: VertexId) -> &[Link] {
        match self.node(u) {
            Some(node) => &node.links,
            None => panic!("vertex {u} is not live"),
        }
    }

    fn link_position(&self, u: VertexId, v: VertexId) -> Option<usize> {
        self.node(u)?.links.iter().position(|l| l.target == v)
    }
}

impl<T, C: Compare<T>> ListBackend<T, C> {
    /// Walks the chain and returns the last vertex comparing less than `data`
    /// together with the first vertex not comparing less
    fn chain_position(&self, data: &T) -> (Option<VertexId>, Option<VertexId>) {
        let mut pred = None;
        let mut cur = self.head;
        while let Some(u) = cur {
            let Some(node) = self.node(u) else { break };
            if self.comparator.compare(node.vertex.data(), data) != Ordering::Less {
                break;
            }
            pred = Some(u);
            cur = node.next;
        }
        (pred, cur)
    }

    /// Index at which a link to `target` keeps the adjacency list of `u` sorted
    fn sorted_link_position(&self, u: VertexId, target: VertexId) -> usize {
        let (Some(node), Some(target_vertex)) = (self.node(u), self.node(target)) else {
            return 0;
        };
        let key = target_vertex.vertex.data();
        node.links.partition_point(|l| {
            self.node(l.target).is_some_and(|n| {
                self.comparator.compare(n.vertex.data(), key) == Ordering::Less
            })
        })
    }

    fn insert_link(&mut self, u: VertexId, link: Link) {
        let pos = self.sorted_link_position(u, link.target);
        if let Some(node) = self.node_mut(u) {
            node.links.insert(pos, link);
        }
    }
}

impl<T, C> DegreeBook<T> for ListBackend<T, C> {
    fn record_mut(&mut self, u: VertexId) -> &mut Vertex<T> {
        &mut self
            .node_mut(u)
            .expect("degree update on a removed vertex")
            .vertex
    }
}

impl<T, C> GraphOrder for ListBackend<T, C> {
    fn number_of_vertices(&self) -> NumVertices {
        self.num_vertices
    }

    fn number_of_connections(&self) -> NumEdges {
        self.num_connections
    }

    fn id_bound(&self) -> usize {
        self.arena.len()
    }

    fn directedness(&self) -> Directedness {
        self.directedness
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        iter::successors(self.head, move |&u| self.node(u).and_then(|n| n.next))
    }
}

impl<T, C> Adjacency for ListBackend<T, C> {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.links_of(u).iter().map(|l| (l.target, l.weight))
    }

    fn weight_of(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        let pos = self.link_position(u, v)?;
        Some(self.links_of(u)[pos].weight)
    }
}

impl<T, C: Compare<T>> VertexStore<T> for ListBackend<T, C> {
    fn vertex(&self, u: VertexId) -> Option<&Vertex<T>> {
        self.node(u).map(|n| &n.vertex)
    }

    fn find(&self, data: &T) -> Option<VertexId> {
        let (_, cur) = self.chain_position(data);
        cur.filter(|&u| {
            self.node(u)
                .is_some_and(|n| self.comparator.equal(n.vertex.data(), data))
        })
    }
}

impl<T, C: Compare<T>> VertexEditing<T> for ListBackend<T, C> {
    fn insert_vertex(&mut self, data: T) -> Result<VertexId> {
        let (pred, cur) = self.chain_position(&data);
        if cur.is_some_and(|u| {
            self.node(u)
                .is_some_and(|n| self.comparator.equal(n.vertex.data(), &data))
        }) {
            return Err(GraphError::DuplicateVertex);
        }

        let node = ListVertex {
            vertex: Vertex::new(data),
            next: cur,
            links: SmallVec::new(),
        };
        let u = match self.free.pop() {
            Some(u) => {
                self.arena[u as usize] = Some(node);
                u
            }
            None => {
                self.arena.push(Some(node));
                (self.arena.len() - 1) as VertexId
            }
        };

        match pred.and_then(|p| self.node_mut(p)) {
            Some(p) => p.next = Some(u),
            None => self.head = Some(u),
        }

        self.num_vertices += 1;
        debug!(id = u, vertices = self.num_vertices, "list vertex inserted");
        Ok(u)
    }

    fn remove_vertex(&mut self, u: VertexId) -> Result<T> {
        let node = self.node(u).ok_or(GraphError::VertexNotFound)?;
        ensure_isolated(&node.vertex)?;
        let next = node.next;

        if self.head == Some(u) {
            self.head = next;
        } else {
            let pred = self
                .vertices()
                .find(|&p| self.node(p).is_some_and(|n| n.next == Some(u)))
                .ok_or(GraphError::VertexNotFound)?;
            if let Some(p) = self.node_mut(pred) {
                p.next = next;
            }
        }

        let node = self.arena[u as usize]
            .take()
            .ok_or(GraphError::VertexNotFound)?;
        self.free.push(u);
        self.num_vertices -= 1;
        debug!(id = u, vertices = self.num_vertices, "list vertex removed");
        Ok(node.vertex.into_data())
    }

    fn drain_vertices(&mut self) -> Vec<T> {
        let order: Vec<VertexId> = self.vertices().collect();
        let data = order
            .into_iter()
            .filter_map(|u| self.arena[u as usize].take())
            .map(|n| n.vertex.into_data())
            .collect();

        self.arena.clear();
        self.free.clear();
        self.head = None;
        self.num_vertices = 0;
        self.num_connections = 0;
        data
    }
}

impl<T, C: Compare<T>> ConnectionEditing for ListBackend<T, C> {
    fn try_add_connection(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<Option<Weight>> {
        if !self.is_live(u) {
            return Err(GraphError::SourceNotFound);
        }
        if !self.is_live(v) {
            return Err(GraphError::DestinationNotFound);
        }
        let weight = stored_weight(self.weighted, weight)?.get();
        let mirrored = !self.directedness.is_directed() && u != v;

        if let Some(pos) = self.link_position(u, v) {
            let previous = self
                .node_mut(u)
                .map(|n| std::mem::replace(&mut n.links[pos].weight, weight));
            if mirrored {
                if let (Some(mirror), Some(n)) = (self.link_position(v, u), self.node_mut(v)) {
                    n.links[mirror].weight = weight;
                }
            }
            return Ok(previous);
        }

        self.insert_link(u, Link { target: v, weight });
        if mirrored {
            self.insert_link(v, Link { target: u, weight });
        }
        self.attach_connection(self.directedness, u, v);
        self.num_connections += 1;
        Ok(None)
    }

    fn try_remove_connection(&mut self, u: VertexId, v: VertexId) -> Option<Weight> {
        let pos = self.link_position(u, v)?;
        let removed = self.node_mut(u)?.links.remove(pos);

        if !self.directedness.is_directed() && u != v {
            let mirror = self.link_position(v, u);
            debug_assert!(mirror.is_some(), "undirected edge without mirror");
            if let (Some(mirror), Some(n)) = (mirror, self.node_mut(v)) {
                n.links.remove(mirror);
            }
        }

        self.detach_connection(self.directedness, u, v);
        self.num_connections -= 1;
        Some(removed.weight)
    }
}

/// Prints one line `(u): v(w) x(w) ...` per vertex in chain order.
/// Weights are omitted for unweighted graphs.
impl<T: Display, C> Display for ListBackend<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for u in self.vertices() {
            let Some(node) = self.node(u) else { continue };
            write!(f, "({}):", node.vertex.data())?;
            for link in node.links.iter() {
                let Some(target) = self.node(link.target) else {
                    continue;
                };
                if self.weighted {
                    write!(f, " {}({})", target.vertex.data(), link.weight)?;
                } else {
                    write!(f, " {}", target.vertex.data())?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
