//! TSP instance data.
//!
//! Everything the evolutionary engine needs from the problem itself:
//!
//! - [`Points`]: the coordinate set, indexed `1..=N` by tours
//! - [`DistanceMatrix`]: pairwise Euclidean edge weights of the complete graph
//! - [`load_points`] / [`parse_points`]: the two-row plain-text input format
//! - [`closed_path`] / [`write_path`]: the reordered, cycle-closed coordinate
//!   sequence consumed by plotting tools

mod distance;
mod input;
mod path;

pub use distance::{build_distance_matrix, DistanceMatrix};
pub use input::{load_points, parse_points, Points};
pub use path::{closed_path, write_path};
