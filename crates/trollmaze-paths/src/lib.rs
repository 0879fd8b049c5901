//! Shortest-path search for the trollmaze grid.
//!
//! - **Dijkstra** single-pair search ([`PathFinder::find_path`], [`find_path`])
//!   driven by an indexed binary min-heap ([`IndexedMinHeap`])
//! - **BFS** unweighted distance maps ([`bfs_map`], [`bfs_distance`])
//!
//! [`PathFinder`] owns its search nodes and reuses them across queries, so
//! repeated searches on the same maze incur no allocations after warm-up.
//! A successful search yields a [`Path`]: a sequence of directional steps
//! consumed one at a time by its owner.

mod bfs;
mod dijkstra;
mod distance;
mod finder;
mod heap;
mod path;
mod traits;

pub use bfs::{bfs_distance, bfs_map};
pub use dijkstra::find_path;
pub use distance::manhattan;
pub use finder::{INFINITY, PathFinder};
pub use heap::IndexedMinHeap;
pub use path::Path;
pub use traits::Pather;
