/*!
`adjgraphs` is a graph data structure & algorithms library for graphs whose vertices carry
application data and whose connections carry non-negative integer weights.

# Representation

Vertices are addressed by `VertexId = u32`, an index into the vertex arena of the backend.
Application code rarely sees these ids: the [`Graph`](graph::Graph) facade names vertices by
their data and decides identity with a comparator (any `Fn(&T, &T) -> Ordering` or
[`NaturalOrder`](compare::NaturalOrder)).

Two backends are available (see [`repr`]):
- **Matrix**: a fixed number of vertex slots and a dense weight matrix, `O(1)` connection queries,
- **List**: a comparator-ordered vertex chain with sorted adjacency lists, growing on demand.

Both can be **directed** (connections are arcs) or **undirected** (connections are edges,
stored mirrored) and **weighted** or **unweighted** (every connection weighs `1`); the choice is
made at runtime through a [`GraphConfig`](config::GraphConfig).

# Usage

There are *3* core submodules you probably want to interact with:
- [`prelude`] includes the facade, configuration, comparators, errors, vertex/edge types and
  the basic graph operation traits,
- [`algo`] includes algorithm traits that are implemented on every graph such as BFS/DFS
  (`graph.bfs(start)`), Kruskal (`graph.kruskal()`) and Dijkstra (`graph.dijkstra(source)`),
- [`utils`] includes the stack/queue frontier, the indexed priority queue and the disjoint
  forest the algorithms are built on.

In most use-cases, `use adjgraphs::{prelude::*, algo::*};` suffices for your needs.

```
use adjgraphs::{prelude::*, algo::*};

let mut g = Graph::new(GraphConfig::matrix(3).directed(), NaturalOrder);
for city in ["berlin", "hamburg", "munich"] {
    g.insert(city).unwrap();
}
g.add_connection(&"berlin", &"hamburg", 289).unwrap();
g.add_connection(&"hamburg", &"munich", 792).unwrap();

let berlin = g.id_of(&"berlin").unwrap();
let munich = g.id_of(&"munich").unwrap();
assert_eq!(g.dijkstra(berlin).distance_to(munich), Some(1081));
assert!(!g.is_reachable(munich, berlin));
```

# Logging

Mutations emit `tracing` events at `debug` level and the algorithms open `debug` spans with
`trace` events per union/relaxation. The library never installs a subscriber.
*/

pub mod algo;
pub mod compare;
pub mod config;
pub mod edge;
pub mod error;
pub mod graph;
pub mod ops;
pub mod repr;
#[cfg(test)]
pub(crate) mod testing;
pub mod utils;
pub mod vertex;

pub use compare::*;
pub use config::*;
pub use edge::*;
pub use error::*;
pub use vertex::*;

/// `adjgraphs::prelude` includes the graph facade, its configuration, comparators, errors,
/// definitions for vertices and edges as well as all basic graph operation traits.
pub mod prelude {
    pub use super::{
        compare::*, config::*, edge::*, error::*, graph::*, ops::*, vertex::*,
    };
}
