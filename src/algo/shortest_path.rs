/*!
# Single-Source Shortest Paths

Dijkstra's algorithm on non-negative integer weights. Every vertex starts `Unvisited` at
[`INFINITE_DISTANCE`], the source at distance `0`; all vertices are placed into a
[`PriorityQueue`] and extracted in order of their tentative distance. An extracted vertex
is `Finalized` and relaxes its outgoing connections, lowering the key of improved
neighbors (which become `Discovered`). Vertices extracted at infinite distance are
unreachable and are finalized without relaxation.
*/

use tracing::trace;

use super::*;

/// Per-vertex result of a shortest-path search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathEntry {
    pub distance: Distance,
    pub predecessor: Option<VertexId>,
    pub state: VisitState,
}

impl PathEntry {
    const UNREACHED: Self = Self {
        distance: INFINITE_DISTANCE,
        predecessor: None,
        state: VisitState::Unvisited,
    };
}

/// Distances and predecessors from a single source
#[derive(Debug, Clone)]
pub struct ShortestPaths {
    source: VertexId,
    entries: Vec<PathEntry>,
}

impl ShortestPaths {
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the full record of `v`
    pub fn entry(&self, v: VertexId) -> Option<&PathEntry> {
        self.entries.get(v as usize)
    }

    /// Length of a shortest path to `v` or `None` if `v` is unreachable
    pub fn distance_to(&self, v: VertexId) -> Option<Distance> {
        self.entry(v)
            .map(|e| e.distance)
            .filter(|&d| d != INFINITE_DISTANCE)
    }

    /// Length of a shortest path to `v` with [`INFINITE_DISTANCE`] for unreachable vertices
    pub fn raw_distance(&self, v: VertexId) -> Distance {
        self.entry(v).map_or(INFINITE_DISTANCE, |e| e.distance)
    }

    /// Returns the vertex preceding `v` on a shortest path (`None` for the source)
    pub fn predecessor_of(&self, v: VertexId) -> Option<VertexId> {
        self.entry(v)?.predecessor
    }

    pub fn is_reachable(&self, v: VertexId) -> bool {
        self.distance_to(v).is_some()
    }

    /// Reconstructs a shortest path `source, ..., v` or returns `None` if `v` is unreachable
    pub fn path_to(&self, v: VertexId) -> Option<Vec<VertexId>> {
        if !self.is_reachable(v) {
            return None;
        }
        let mut path: Vec<VertexId> =
            std::iter::successors(Some(v), |&u| self.predecessor_of(u)).collect();
        path.reverse();
        Some(path)
    }

    /// Returns all reachable vertices with their distance, ordered by id
    pub fn reachable(&self) -> impl Iterator<Item = (VertexId, Distance)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.distance != INFINITE_DISTANCE)
            .map(|(v, e)| (v as VertexId, e.distance))
    }
}

/// Provides Dijkstra's algorithm on every [`Adjacency`]
pub trait Dijkstra: Adjacency + Sized {
    /// Computes shortest paths from `source` along outgoing connections.
    /// ** Panics if `source >= self.id_bound()` **
    ///
    /// # Examples
    /// ```
    /// use adjgraphs::{prelude::*, algo::*};
    ///
    /// let mut g = Graph::new(GraphConfig::matrix(4).directed(), NaturalOrder);
    /// for c in ['s', 'a', 'b', 't'] {
    ///     g.insert(c).unwrap();
    /// }
    /// g.add_connection(&'s', &'a', 1).unwrap();
    /// g.add_connection(&'s', &'b', 5).unwrap();
    /// g.add_connection(&'a', &'b', 2).unwrap();
    ///
    /// let paths = g.dijkstra(0);
    /// assert_eq!(paths.distance_to(2), Some(3));
    /// assert_eq!(paths.path_to(2), Some(vec![0, 1, 2]));
    /// assert_eq!(paths.distance_to(3), None);
    /// ```
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(source = source, vertices = self.number_of_vertices())
    )]
    fn dijkstra(&self, source: VertexId) -> ShortestPaths {
        let mut entries = vec![PathEntry::UNREACHED; self.id_bound()];
        entries[source as usize].distance = 0;
        entries[source as usize].state = VisitState::Discovered;

        let mut queue = PriorityQueue::from_entries(
            self.id_bound(),
            self.vertices().map(|u| (u, entries[u as usize].distance)),
        );

        while let Some((u, d_u)) = queue.pop() {
            entries[u as usize].state = VisitState::Finalized;
            if d_u == INFINITE_DISTANCE {
                continue;
            }

            for (v, w) in self.neighbors_of(u) {
                let entry = &mut entries[v as usize];
                if entry.state == VisitState::Finalized {
                    continue;
                }

                let candidate = d_u.saturating_add(w as Distance);
                if candidate < entry.distance {
                    entry.distance = candidate;
                    entry.predecessor = Some(u);
                    entry.state = VisitState::Discovered;
                    queue.decrease_key(v, candidate);
                    trace!(from = u, to = v, distance = candidate, "relaxed");
                }
            }
        }

        ShortestPaths { source, entries }
    }
}

impl<G: Adjacency> Dijkstra for G {}
