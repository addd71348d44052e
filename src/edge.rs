use std::{
    fmt::{Debug, Display},
    num::NonZero,
};

use crate::VertexId;

/// Connection weights are non-negative integers.
pub type Weight = u32;

/// Weight stored for every connection of an unweighted graph
pub const UNIT_WEIGHT: Weight = 1;

/// Accumulated path lengths; wide enough to never overflow on sums of `Weight`s.
pub type Distance = u64;

/// Distance of a vertex that is not (yet) known to be reachable
pub const INFINITE_DISTANCE: Distance = Distance::MAX;

/// We limit the number of connections to `2^32 - 1`.
pub type NumEdges = u32;

/// As `Option<Weight>` uses additional bytes for padding, a dense weight matrix of them
/// wastes half its memory. This instead uses the `NonZero`-Wrapper so that
/// `Option<OptionalWeightImpl<N>>` has the size of a `Weight`; the value `N` itself is
/// not representable and serves as the niche.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalWeightImpl<const N: Weight>(NonZero<Weight>);

/// `Weight::MAX` is reserved as the "no connection" value of matrix cells
pub type OptionalWeight = OptionalWeightImpl<{ Weight::MAX }>;

impl<const N: Weight> OptionalWeightImpl<N> {
    /// Returns `Some(OptionalWeightImpl)` if `w != N` and `None` otherwise
    pub const fn new(w: Weight) -> Option<Self> {
        match NonZero::new(w ^ N) {
            Some(inner) => Some(OptionalWeightImpl(inner)),
            None => None,
        }
    }

    /// Gets the underlying Weight-Value
    pub const fn get(&self) -> Weight {
        self.0.get() ^ N
    }
}

/// A weighted connection between two vertices.
/// It is up to the graph whether it is read as an arc `src -> dst` or an edge `{src, dst}`.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeightedEdge {
    pub src: VertexId,
    pub dst: VertexId,
    pub weight: Weight,
}

impl Display for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{}:{})", self.src, self.dst, self.weight)
    }
}

impl Debug for WeightedEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl WeightedEdge {
    pub fn new(src: VertexId, dst: VertexId, weight: Weight) -> Self {
        Self { src, dst, weight }
    }

    /// Returns both endpoints
    pub fn endpoints(&self) -> (VertexId, VertexId) {
        (self.src, self.dst)
    }

    /// Normalizes the edge such that the endpoint with smaller id comes first
    pub fn normalized(&self) -> Self {
        Self::new(self.src.min(self.dst), self.src.max(self.dst), self.weight)
    }

    /// Returns true if the endpoint with smaller id comes first
    pub fn is_normalized(&self) -> bool {
        self.src <= self.dst
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.src == self.dst
    }

    /// Reverses the edge by switching the endpoints
    pub fn reverse(&self) -> Self {
        Self::new(self.dst, self.src, self.weight)
    }
}

impl From<(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from(value: (VertexId, VertexId, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

impl From<&(VertexId, VertexId, Weight)> for WeightedEdge {
    fn from(value: &(VertexId, VertexId, Weight)) -> Self {
        Self::new(value.0, value.1, value.2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_weight_niche() {
        assert_eq!(size_of::<Option<OptionalWeight>>(), size_of::<Weight>());

        for w in [0, 1, 17, Weight::MAX - 1] {
            assert_eq!(OptionalWeight::new(w).map(|x| x.get()), Some(w));
        }
        assert!(OptionalWeight::new(Weight::MAX).is_none());
    }

    #[test]
    fn normalize_and_reverse() {
        let e = WeightedEdge::new(4, 1, 9);
        assert!(!e.is_normalized());
        assert_eq!(e.normalized(), WeightedEdge::new(1, 4, 9));
        assert_eq!(e.reverse(), WeightedEdge::new(1, 4, 9));
        assert_eq!(e.endpoints(), (4, 1));
        assert!(WeightedEdge::from((3, 3, 0)).is_loop());
        assert_eq!(format!("{e}"), "(4,1:9)");
    }
}
