use itertools::Itertools;

use crate::*;

/// Provides getters pertaining to the vertex-size of a graph
pub trait GraphOrder {
    /// Returns the number of (live) vertices of the graph
    fn number_of_vertices(&self) -> NumVertices;

    /// Returns the number of connections: arcs if directed, edges if undirected
    fn number_of_connections(&self) -> NumEdges;

    /// Returns an exclusive upper bound on every `VertexId` the graph hands out.
    /// Algorithms size their per-vertex tables by it.
    fn id_bound(&self) -> usize;

    /// Returns whether connections are read as arcs or as edges
    fn directedness(&self) -> Directedness;

    /// Returns an iterator over all live vertices in backend order
    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_;

    /// Returns the vertex traversals start from if no start is given
    fn first_vertex(&self) -> Option<VertexId> {
        self.vertices().next()
    }

    /// Return the number of vertices as usize
    fn len(&self) -> usize {
        self.number_of_vertices() as usize
    }

    /// Returns *true* if the graph has no vertices (and thus no connections)
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Traits pertaining getters for neighborhoods & connections
pub trait Adjacency: GraphOrder + Sized {
    /// Returns an iterator over the (outgoing) neighbors of `u` with the connecting weight,
    /// in the backend's adjacency order.
    /// ** Panics if `u` is not a live vertex **
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_;

    /// Returns the weight of the connection `u -> v` if present
    fn weight_of(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.neighbors_of(u).find_map(|(x, w)| (x == v).then_some(w))
    }

    /// Returns *true* if the connection `u -> v` exists
    fn has_connection(&self, u: VertexId, v: VertexId) -> bool {
        self.weight_of(u, v).is_some()
    }

    /// Returns an iterator over all adjacency entries of `u`
    fn connections_of(&self, u: VertexId) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.neighbors_of(u)
            .map(move |(v, w)| WeightedEdge::new(u, v, w))
    }

    /// Returns an iterator over every adjacency entry of the graph.
    /// For undirected graphs each edge appears once per direction (a self-loop once).
    fn connections(&self) -> impl Iterator<Item = WeightedEdge> + '_ {
        self.vertices().flat_map(|u| self.connections_of(u))
    }

    /// Returns every adjacency entry sorted ascending by weight.
    /// Entries of equal weight keep their discovery order.
    fn sorted_connections(&self) -> Vec<WeightedEdge> {
        self.connections().sorted_by_key(|e| e.weight).collect()
    }
}

/// Access to the vertex records of a graph
pub trait VertexStore<T>: GraphOrder {
    /// Returns the vertex record of `u` if `u` is live
    fn vertex(&self, u: VertexId) -> Option<&Vertex<T>>;

    /// Returns the id of the vertex comparing equal to `data`
    fn find(&self, data: &T) -> Option<VertexId>;

    /// Returns the application data of `u` if `u` is live
    fn data_of(&self, u: VertexId) -> Option<&T> {
        self.vertex(u).map(|v| v.data())
    }
}

/// Trait for creating and removing vertices
pub trait VertexEditing<T>: VertexStore<T> {
    /// Inserts `data` as a new isolated vertex and returns its id.
    /// Fails if a vertex comparing equal exists or no slot is left.
    fn insert_vertex(&mut self, data: T) -> Result<VertexId>;

    /// Removes the isolated vertex `u` and returns its data.
    /// Fails if `u` is not live or still has connections.
    fn remove_vertex(&mut self, u: VertexId) -> Result<T>;

    /// Removes all vertices and returns their data in backend order
    fn drain_vertices(&mut self) -> Vec<T>;
}

/// Trait for creating and removing connections
pub trait ConnectionEditing: Adjacency {
    /// Adds the connection `u -> v` (and `v -> u` if undirected) with weight `weight`.
    /// Unweighted graphs store `UNIT_WEIGHT` instead.
    /// Returns the replaced weight if the connection already existed; degrees are then kept.
    fn try_add_connection(&mut self, u: VertexId, v: VertexId, weight: Weight)
    -> Result<Option<Weight>>;

    /// Removes the connection `u -> v` (and its mirror if undirected).
    /// Returns its weight or `None` if there was no such connection.
    /// Also returns `None` if `u` or `v` is not a live vertex.
    fn try_remove_connection(&mut self, u: VertexId, v: VertexId) -> Option<Weight>;
}
