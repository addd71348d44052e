/*!
# Minimum Spanning Tree

Kruskal's algorithm over any [`Adjacency`]: every adjacency entry is read as an undirected
edge, all entries are sorted ascending by weight (stable, so equal weights keep the order
in which the backend lists them) and then merged into a [`DisjointForest`] until a single
tree remains. Directed graphs are treated as their underlying undirected multigraph.

Disconnected graphs yield a minimum spanning *forest*: [`MinimumSpanningTree::is_spanning`]
is *false* and [`MinimumSpanningTree::number_of_trees`] reports how many components remain.
*/

use tracing::trace;

use super::*;

/// Result of Kruskal's algorithm.
///
/// The tree implements [`Adjacency`], so the traversal iterators walk the chosen edges:
/// `mst.bfs(root)` lists the solution tree by tree.
#[derive(Debug, Clone)]
pub struct MinimumSpanningTree {
    forest: DisjointForest,
}

impl MinimumSpanningTree {
    /// Sum of the weights of all chosen edges
    pub fn cost(&self) -> u64 {
        self.forest.cost()
    }

    /// Chosen edges in the order they were added
    pub fn edges(&self) -> &[WeightedEdge] {
        self.forest.unions()
    }

    /// Number of remaining components; `1` for a connected (non-empty) graph
    pub fn number_of_trees(&self) -> usize {
        self.forest.number_of_trees()
    }

    /// Returns *true* if the chosen edges connect all vertices
    pub fn is_spanning(&self) -> bool {
        self.forest.is_spanning()
    }

    /// Returns the chosen edges incident to `u`
    pub fn branches_of(&self, u: VertexId) -> &[Branch] {
        self.forest.branches_of(u)
    }

    /// Returns the underlying forest
    pub fn forest(&self) -> &DisjointForest {
        &self.forest
    }
}

impl GraphOrder for MinimumSpanningTree {
    fn number_of_vertices(&self) -> NumVertices {
        self.forest.number_of_members() as NumVertices
    }

    fn number_of_connections(&self) -> NumEdges {
        self.forest.unions().len() as NumEdges
    }

    fn id_bound(&self) -> usize {
        self.forest.id_bound()
    }

    fn directedness(&self) -> Directedness {
        Directedness::Undirected
    }

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.forest.members().iter().copied()
    }
}

impl Adjacency for MinimumSpanningTree {
    fn neighbors_of(&self, u: VertexId) -> impl Iterator<Item = (VertexId, Weight)> + '_ {
        self.forest
            .branches_of(u)
            .iter()
            .map(|b| (b.to, b.weight))
    }
}

/// Provides Kruskal's algorithm on every [`Adjacency`]
pub trait Kruskal: Adjacency + Sized {
    /// Computes a minimum spanning tree (or forest, if disconnected).
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new(GraphConfig::list(), NaturalOrder);
    /// for c in ['a', 'b', 'c'] {
    ///     g.insert(c).unwrap();
    /// }
    /// g.add_connection(&'a', &'b', 4).unwrap();
    /// g.add_connection(&'b', &'c', 1).unwrap();
    /// g.add_connection(&'a', &'c', 2).unwrap();
    ///
    /// let mst = g.kruskal();
    /// assert!(mst.is_spanning());
    /// assert_eq!(mst.cost(), 3);
    /// assert_eq!(mst.edges().len(), 2);
    /// ```
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(vertices = self.number_of_vertices(), connections = self.number_of_connections())
    )]
    fn kruskal(&self) -> MinimumSpanningTree {
        let mut forest = DisjointForest::new(self.id_bound(), self.vertices());

        for edge in self.sorted_connections() {
            if forest.number_of_trees() <= 1 {
                break;
            }
            if forest.union(edge.src, edge.dst, edge.weight) {
                trace!(%edge, trees = forest.number_of_trees(), "branch added");
            }
        }

        tracing::debug!(
            cost = forest.cost(),
            trees = forest.number_of_trees(),
            "kruskal finished"
        );
        MinimumSpanningTree { forest }
    }
}

impl<G: Adjacency> Kruskal for G {}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn disconnected_graph_yields_forest() {
        let mut g = Graph::new(GraphConfig::matrix(5), NaturalOrder);
        for u in 0..5u32 {
            g.insert(u).unwrap();
        }
        g.add_connection(&0, &1, 3).unwrap();
        g.add_connection(&1, &2, 1).unwrap();
        g.add_connection(&0, &2, 2).unwrap();
        g.add_connection(&3, &4, 7).unwrap();

        let mst = g.kruskal();
        assert!(!mst.is_spanning());
        assert_eq!(mst.number_of_trees(), 2);
        assert_eq!(mst.cost(), 10);
        assert_eq!(
            mst.edges().iter().map(|e| e.normalized()).collect_vec(),
            vec![
                WeightedEdge::new(1, 2, 1),
                WeightedEdge::new(0, 2, 2),
                WeightedEdge::new(3, 4, 7)
            ]
        );
    }

    #[test]
    fn empty_and_single_vertex() {
        let mut g: Graph<u32> = Graph::new(GraphConfig::list(), NaturalOrder);
        let mst = g.kruskal();
        assert_eq!(mst.number_of_trees(), 0);
        assert_eq!(mst.cost(), 0);

        g.insert(1).unwrap();
        let mst = g.kruskal();
        assert!(mst.is_spanning());
        assert!(mst.edges().is_empty());
    }

    #[test]
    fn tree_can_be_traversed() {
        let mut g = Graph::new(GraphConfig::list().directed(), NaturalOrder);
        for u in 0..4u32 {
            g.insert(u).unwrap();
        }
        g.add_connection(&0, &1, 5).unwrap();
        g.add_connection(&2, &1, 1).unwrap();
        g.add_connection(&3, &2, 1).unwrap();
        g.add_connection(&0, &3, 9).unwrap();

        let mst = g.kruskal();
        assert!(mst.is_spanning());
        assert_eq!(mst.cost(), 7);
        assert_eq!(mst.number_of_connections(), 3);

        // arcs pointing away from the root are walked in both directions
        let order = mst.bfs(0).collect_vec();
        assert_eq!(order, vec![0, 1, 2, 3]);
        assert_eq!(mst.branches_of(2).len(), 2);
    }
}
