/*!
# Utilities

Containers the algorithms are built on:
- [`Sequencer`]: the frontier of DFS ([`Stack`]) and BFS ([`Queue`]),
- [`PriorityQueue`]: an indexed binary min-heap used by Dijkstra,
- [`DisjointForest`]: the union-find forest used by Kruskal.
*/

pub mod forest;
pub mod priority_queue;
pub mod sequencer;

pub use forest::{Branch, DisjointForest};
pub use priority_queue::PriorityQueue;
pub use sequencer::{Queue, Sequencer, Stack};
