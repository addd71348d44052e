/*!
# Graph Representations

Two interchangeable backends store vertices and connections:
- [`MatrixBackend`]: a fixed number of vertex slots and a dense `capacity x capacity`
  weight matrix. Lookups by data scan the slots; connection queries are `O(1)`.
- [`ListBackend`]: an arena of vertices threaded into a chain ordered by the comparator,
  each vertex owning an adjacency list sorted by the same order.

[`Repr`] dispatches between both so that the graph facade and every algorithm is written
once against the traits of [`crate::ops`].
*/

use itertools::Either;

use crate::{ops::*, *};

mod list;
mod matrix;

pub use list::*;
pub use matrix::*;

/// Maps the weight passed by the caller to the one stored in a connection
pub(crate) fn stored_weight(weighted: bool, weight: Weight) -> Result<OptionalWeight> {
    let weight = if weighted { weight } else { UNIT_WEIGHT };
    OptionalWeight::new(weight).ok_or(GraphError::InvalidWeight(weight))
}

/// Degree bookkeeping shared by both backends
pub(crate) trait DegreeBook<T> {
    fn record_mut(&mut self, u: VertexId) -> &mut Vertex<T>;

    fn attach_connection(&mut self, directedness: Directedness, u: VertexId, v: VertexId) {
        match directedness {
            Directedness::Directed => {
                self.record_mut(u).attach_out_arc();
                self.record_mut(v).attach_in_arc();
            }
            Directedness::Undirected => {
                self.record_mut(u).attach_edge();
                if u != v {
                    self.record_mut(v).attach_edge();
                }
            }
        }
    }

    fn detach_connection(&mut self, directedness: Directedness, u: VertexId, v: VertexId) {
        match directedness {
            Directedness::Directed => {
                self.record_mut(u).detach_out_arc();
                self.record_mut(v).detach_in_arc();
            }
            Directedness::Undirected => {
                self.record_mut(u).detach_edge();
                if u != v {
                    self.record_mut(v).detach_edge();
                }
            }
        }
    }
}

/// Fails with `DegreeNotZero` if the vertex still has connections
pub(crate) fn ensure_isolated<T>(vertex: &Vertex<T>) -> Result<()> {
    if vertex.is_isolated() {
        Ok(())
    } else {
        Err(GraphError::DegreeNotZero {
            in_degree: vertex.in_degree(),
            out_degree: vertex.out_degree(),
        })
    }
}

/// A graph store using one of the two backends
#[derive(Debug, Clone)]
pub enum Repr<T, C> {
    Matrix(MatrixBackend<T, C>),
    List(ListBackend<T, C>),
}

impl<T, C> Repr<T, C> {
    /// Creates the backend selected by `config`
    pub fn new(config: &GraphConfig, comparator: C) -> Self {
        match config.representation() {
            Representation::Matrix => Repr::Matrix(MatrixBackend::new(
                config.capacity(),
                config.directedness(),
                config.is_weighted(),
                comparator,
            )),
            Representation::List => Repr::List(ListBackend::with_capacity(
                config.capacity(),
                config.directedness(),
                config.is_weighted(),
                comparator,
            )),
        }
    }

    pub fn representation(&self) -> Representation {
        match self {
            Repr::Matrix(_) => Representation::Matrix,
            Repr::List(_) => Representation::List,
        }
    }
}

macro_rules! dispatch {
    ($self:ident, $backend:ident => $body:expr) => {
        match $self {
            Repr::Matrix($backend) => $body,
            Repr::List($backend) => $body,
        }
    };
}

macro_rules! dispatch_iter {
    ($self:ident, $backend:ident => $body:expr) => {
        match $self {
            Repr::Matrix($backend) => Either::Left($body),
            Repr::List($backend) => Either::Right($body),
        }
    };
}

impl<T, C> GraphOrder for Repr<T, C> {
    fn number_of_vertices(&self) -> NumVertices {
        dispatch!(self, b => b.number_of_vertices())
    }

    fn number_of_connections(&self) -> NumEdges {
        dispatch!(self, b => b.number_of_connections())
    }

    fn id_bound(&self) -> usize {
        dispatch!(self, b => b.id_bound())
    }

    fn directedness(&self) -> Directedness {
        dispatch!(self, b => b.directedness())
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        dispatch_iter!(self, b => b.vertices())
    }
}

impl<T, C> Adjacency for Repr<T, C> {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        dispatch_iter!(self, b => b.neighbors_of(u))
    }

    fn weight_of(&self, u: VertexId, v: VertexId) -> Option<Weight> {
        dispatch!(self, b => b.weight_of(u, v))
    }
}

impl<T, C: Compare<T>> VertexStore<T> for Repr<T, C> {
    fn vertex(&self, u: VertexId) -> Option<&Vertex<T>> {
        dispatch!(self, b => b.vertex(u))
    }

    fn find(&self, data: &T) -> Option<VertexId> {
        dispatch!(self, b => b.find(data))
    }
}

impl<T, C: Compare<T>> VertexEditing<T> for Repr<T, C> {
    fn insert_vertex(&mut self, data: T) -> Result<VertexId> {
        dispatch!(self, b => b.insert_vertex(data))
    }

    fn remove_vertex(&mut self, u: VertexId) -> Result<T> {
        dispatch!(self, b => b.remove_vertex(u))
    }

    fn drain_vertices(&mut self) -> Vec<T> {
        dispatch!(self, b => b.drain_vertices())
    }
}

impl<T, C: Compare<T>> ConnectionEditing for Repr<T, C> {
    fn try_add_connection(
        &mut self,
        u: VertexId,
        v: VertexId,
        weight: Weight,
    ) -> Result<Option<Weight>> {
        dispatch!(self, b => b.try_add_connection(u, v, weight))
    }

    fn try_remove_connection(&mut self, u: VertexId, v: VertexId) -> Option<Weight> {
        dispatch!(self, b => b.try_remove_connection(u, v))
    }
}
