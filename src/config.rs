use crate::vertex::NumVertices;

/// Physical layout used to store a graph
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Fixed-capacity slot array plus a `capacity x capacity` weight matrix
    Matrix,
    /// Comparator-ordered vertex chain with one sorted adjacency list per vertex
    #[default]
    List,
}

/// Whether connections are arcs (`u -> v`) or edges (`{u, v}`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directedness {
    Directed,
    #[default]
    Undirected,
}

impl Directedness {
    pub fn is_directed(self) -> bool {
        self == Directedness::Directed
    }
}

/// Construction parameters of a [`Graph`](crate::graph::Graph).
///
/// ```
/// use adjgraphs::config::*;
///
/// let config = GraphConfig::matrix(16).directed().unweighted();
/// assert_eq!(config.representation(), Representation::Matrix);
/// assert!(config.is_directed());
/// assert!(!config.is_weighted());
/// assert_eq!(config.capacity(), 16);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphConfig {
    representation: Representation,
    directedness: Directedness,
    weighted: bool,
    capacity: NumVertices,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            representation: Representation::List,
            directedness: Directedness::Undirected,
            weighted: true,
            capacity: 0,
        }
    }
}

impl GraphConfig {
    /// Undirected, weighted adjacency-list graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Undirected, weighted adjacency-matrix graph holding at most `capacity` vertices
    pub fn matrix(capacity: NumVertices) -> Self {
        Self::default()
            .with_representation(Representation::Matrix)
            .with_capacity(capacity)
    }

    /// Undirected, weighted adjacency-list graph
    pub fn list() -> Self {
        Self::default()
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn directedness(&self) -> Directedness {
        self.directedness
    }

    pub fn is_directed(&self) -> bool {
        self.directedness.is_directed()
    }

    pub fn is_weighted(&self) -> bool {
        self.weighted
    }

    /// Maximum number of vertices of a matrix graph.
    /// List graphs grow on demand and only use this as an allocation hint.
    pub fn capacity(&self) -> NumVertices {
        self.capacity
    }

    pub fn set_representation(&mut self, representation: Representation) {
        self.representation = representation;
    }

    pub fn with_representation(mut self, representation: Representation) -> Self {
        self.set_representation(representation);
        self
    }

    pub fn set_directedness(&mut self, directedness: Directedness) {
        self.directedness = directedness;
    }

    pub fn directed(mut self) -> Self {
        self.set_directedness(Directedness::Directed);
        self
    }

    pub fn undirected(mut self) -> Self {
        self.set_directedness(Directedness::Undirected);
        self
    }

    /// Connections of unweighted graphs always carry [`UNIT_WEIGHT`](crate::edge::UNIT_WEIGHT)
    pub fn set_weighted(&mut self, weighted: bool) {
        self.weighted = weighted;
    }

    pub fn weighted(mut self) -> Self {
        self.set_weighted(true);
        self
    }

    pub fn unweighted(mut self) -> Self {
        self.set_weighted(false);
        self
    }

    pub fn set_capacity(&mut self, capacity: NumVertices) {
        self.capacity = capacity;
    }

    pub fn with_capacity(mut self, capacity: NumVertices) -> Self {
        self.set_capacity(capacity);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = GraphConfig::new();
        assert_eq!(config, GraphConfig::list());
        assert_eq!(config.representation(), Representation::List);
        assert_eq!(config.directedness(), Directedness::Undirected);
        assert!(config.is_weighted());
        assert_eq!(config.capacity(), 0);
    }

    #[test]
    fn setters_and_builders_agree() {
        let mut a = GraphConfig::list();
        a.set_representation(Representation::Matrix);
        a.set_directedness(Directedness::Directed);
        a.set_weighted(false);
        a.set_capacity(5);

        let b = GraphConfig::matrix(5).directed().unweighted();
        assert_eq!(a, b);
        assert_eq!(b.undirected().weighted().directedness(), Directedness::Undirected);
    }
}
