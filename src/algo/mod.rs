/*!
# Graph Algorithms

Algorithms are written once against the traits of [`crate::ops`] and are available on every
graph representation, the [`Graph`](crate::graph::Graph) facade and the resulting
[`MinimumSpanningTree`]. All of them are re-exported here, so
```rust
use adjgraphs::algo::*;
```
gives access to `bfs`/`dfs`, `kruskal` and `dijkstra` as methods.
Traversals are provided as lazy **iterators**.
*/

mod mst;
mod shortest_path;
mod traversal;

use crate::{prelude::*, utils::*};

pub use mst::*;
pub use shortest_path::*;
pub use traversal::*;
