use thiserror::Error;

use crate::{edge::NumEdges, edge::Weight, vertex::NumVertices};

/// Errors raised by graph mutations and algorithm entry points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("vertex not found")]
    VertexNotFound,

    #[error("source vertex not found")]
    SourceNotFound,

    #[error("destination vertex not found")]
    DestinationNotFound,

    #[error("connection not found")]
    ConnectionNotFound,

    #[error("a vertex comparing equal is already present")]
    DuplicateVertex,

    #[error("vertex still has {in_degree} incoming and {out_degree} outgoing connections")]
    DegreeNotZero {
        in_degree: NumEdges,
        out_degree: NumEdges,
    },

    #[error("all {capacity} vertex slots are occupied")]
    CapacityExhausted { capacity: NumVertices },

    #[error("weight {0} is reserved and cannot be stored")]
    InvalidWeight(Weight),
}

pub type Result<T> = std::result::Result<T, GraphError>;
