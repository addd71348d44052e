/*!
# Graph Facade

[`Graph`] is the data-addressed entry point of the crate: vertices are named by their
application data (identity decided by the graph's comparator) and every call is forwarded
to the backend selected by the [`GraphConfig`].

```
use adjgraphs::prelude::*;

let mut net = Graph::new(GraphConfig::list(), NaturalOrder);
for router in ['u', 'v', 'x', 'y', 'z'] {
    net.insert(router).unwrap();
}
for (a, b, w) in [('u', 'v', 1), ('u', 'y', 2), ('y', 'x', 3), ('x', 'v', 3), ('x', 'z', 2), ('z', 'v', 6)] {
    net.add_connection(&a, &b, w).unwrap();
}

let mst = net.minimum_spanning_tree();
assert_eq!(mst.cost(), 8);

let paths = net.shortest_paths(&'u').unwrap();
assert_eq!(paths.distance_to(net.id_of(&'z').unwrap()), Some(6));

let mut order = String::new();
net.breadth_first(|router| order.push(*router));
assert_eq!(order, "uvyxz");
```
*/

use std::fmt::{self, Display};

use tracing::debug;

use crate::{algo::*, ops::*, repr::*, *};

/// One step of [`Graph::traverse`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visit<'a, T> {
    /// A vertex, reported before its connections
    Vertex(&'a T),
    /// An adjacency entry of the most recently reported vertex
    Connection { to: &'a T, weight: Weight },
}

/// A labelled, optionally weighted and directed graph
#[derive(Debug, Clone)]
pub struct Graph<T, C = NaturalOrder> {
    config: GraphConfig,
    repr: Repr<T, C>,
}

impl<T, C> Graph<T, C> {
    /// Returns the configuration the graph was created with
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Returns the backend
    pub fn repr(&self) -> &Repr<T, C> {
        &self.repr
    }

    /// Maximum number of vertices; `None` for list graphs, which grow on demand
    pub fn capacity(&self) -> Option<NumVertices> {
        match &self.repr {
            Repr::Matrix(m) => Some(m.capacity()),
            Repr::List(_) => None,
        }
    }

    /// Tears the graph down and returns the data of all vertices in backend order
    pub fn destroy(self) -> Vec<T>
    where
        C: Compare<T>,
    {
        let mut repr = self.repr;
        repr.drain_vertices()
    }
}

impl<T, C: Compare<T>> Graph<T, C> {
    /// Creates an empty graph with the representation, directedness, weighting and capacity
    /// of `config`. `comparator` decides vertex identity and the order of list backends.
    pub fn new(config: GraphConfig, comparator: C) -> Self {
        Self {
            repr: Repr::new(&config, comparator),
            config,
        }
    }

    /// Returns the id of the vertex comparing equal to `data`
    pub fn id_of(&self, data: &T) -> Option<VertexId> {
        self.repr.find(data)
    }

    /// Inserts a new isolated vertex and returns its id.
    /// Fails with `DuplicateVertex` or, for matrix graphs, `CapacityExhausted`.
    pub fn insert(&mut self, data: T) -> Result<VertexId> {
        self.repr.insert_vertex(data)
    }

    /// Removes the vertex comparing equal to `data` and returns the stored data.
    /// Fails with `VertexNotFound` or `DegreeNotZero`.
    pub fn delete(&mut self, data: &T) -> Result<T> {
        let u = self.id_of(data).ok_or(GraphError::VertexNotFound)?;
        self.repr.remove_vertex(u)
    }

    /// Returns *true* if a vertex comparing equal to `data` exists
    pub fn search(&self, data: &T) -> bool {
        self.id_of(data).is_some()
    }

    /// Returns the stored data of the vertex comparing equal to `data`
    pub fn retrieve(&self, data: &T) -> Option<&T> {
        self.repr.data_of(self.id_of(data)?)
    }

    fn endpoints(&self, from: &T, to: &T) -> Result<(VertexId, VertexId)> {
        let u = self.id_of(from).ok_or(GraphError::SourceNotFound)?;
        let v = self.id_of(to).ok_or(GraphError::DestinationNotFound)?;
        Ok((u, v))
    }

    /// Connects `from` to `to` (both ways if undirected) and returns the replaced weight if
    /// the connection already existed. Unweighted graphs ignore `weight`.
    pub fn add_connection(&mut self, from: &T, to: &T, weight: Weight) -> Result<Option<Weight>> {
        let (u, v) = self.endpoints(from, to)?;
        let previous = self.repr.try_add_connection(u, v, weight)?;
        debug!(
            from = u,
            to = v,
            weight,
            replaced = previous.is_some(),
            "connection added"
        );
        Ok(previous)
    }

    /// Removes the connection between `from` and `to` and returns its weight
    pub fn remove_connection(&mut self, from: &T, to: &T) -> Result<Weight> {
        let (u, v) = self.endpoints(from, to)?;
        let weight = self
            .repr
            .try_remove_connection(u, v)
            .ok_or(GraphError::ConnectionNotFound)?;
        debug!(from = u, to = v, weight, "connection removed");
        Ok(weight)
    }

    /// Returns the weight of the connection `from -> to` if present
    pub fn connection(&self, from: &T, to: &T) -> Option<Weight> {
        let (u, v) = self.endpoints(from, to).ok()?;
        self.repr.weight_of(u, v)
    }

    /// Reports every vertex in backend order, each followed by its adjacency entries
    pub fn traverse<F>(&self, mut printer: F)
    where
        F: FnMut(Visit<'_, T>),
    {
        for u in self.repr.vertices() {
            let Some(data) = self.repr.data_of(u) else {
                continue;
            };
            printer(Visit::Vertex(data));
            for (v, weight) in self.repr.neighbors_of(u) {
                if let Some(to) = self.repr.data_of(v) {
                    printer(Visit::Connection { to, weight });
                }
            }
        }
    }

    fn report<I, F>(&self, order: I, mut printer: F)
    where
        I: Iterator<Item = VertexId>,
        F: FnMut(&T),
    {
        for u in order {
            if let Some(data) = self.repr.data_of(u) {
                printer(data);
            }
        }
    }

    /// Visits every vertex reachable from the first vertex in depth-first order
    pub fn depth_first<F: FnMut(&T)>(&self, printer: F) {
        if let Some(start) = self.first_vertex() {
            self.report(self.dfs(start), printer);
        }
    }

    /// Visits every vertex reachable from the first vertex in breadth-first order
    pub fn breadth_first<F: FnMut(&T)>(&self, printer: F) {
        if let Some(start) = self.first_vertex() {
            self.report(self.bfs(start), printer);
        }
    }

    /// Visits every vertex reachable from `start` in depth-first order
    pub fn depth_first_from<F: FnMut(&T)>(&self, start: &T, printer: F) -> Result<()> {
        let s = self.id_of(start).ok_or(GraphError::VertexNotFound)?;
        self.report(self.dfs(s), printer);
        Ok(())
    }

    /// Visits every vertex reachable from `start` in breadth-first order
    pub fn breadth_first_from<F: FnMut(&T)>(&self, start: &T, printer: F) -> Result<()> {
        let s = self.id_of(start).ok_or(GraphError::VertexNotFound)?;
        self.report(self.bfs(s), printer);
        Ok(())
    }

    /// Runs Kruskal's algorithm; see [`Kruskal`]
    pub fn minimum_spanning_tree(&self) -> MinimumSpanningTree {
        self.kruskal()
    }

    /// Runs Dijkstra's algorithm from the vertex comparing equal to `source`
    pub fn shortest_paths(&self, source: &T) -> Result<ShortestPaths> {
        let s = self.id_of(source).ok_or(GraphError::VertexNotFound)?;
        Ok(self.dijkstra(s))
    }
}

impl<T, C> GraphOrder for Graph<T, C> {
    fn number_of_vertices(&self) -> NumVertices {
        self.repr.number_of_vertices()
    }

    fn number_of_connections(&self) -> NumEdges {
        self.repr.number_of_connections()
    }

    fn id_bound(&self) -> usize {
        self.repr.id_bound()
    }

    fn directedness(&self) -> Directedness {
        self.repr.directedness()
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.repr.vertices()
    }
}

impl<T, C> Adjacency for Graph<T, C> {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.repr.neighbors_of(u)
    }

    fn weight_of(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        self.repr.weight_of(u, v)
    }
}

impl<T, C: Compare<T>> VertexStore<T> for Graph<T, C> {
    fn vertex(&self, u: VertexId) -> Option<&Vertex<T>> {
        self.repr.vertex(u)
    }

    fn find(&self, data: &T) -> Option<VertexId> {
        self.repr.find(data)
    }
}

/// Matrix graphs print as a weight matrix, list graphs as one adjacency line per vertex
impl<T: Display, C> Display for Graph<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.repr {
            Repr::Matrix(m) => m.fmt(f),
            Repr::List(l) => l.fmt(f),
        }
    }
}
