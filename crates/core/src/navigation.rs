//! Read-only navigation queries over a finished maze.
//! Agents use these to chase a target inside one layer and to pick fixed
//! patrol routes. Nothing here mutates the grid.

pub mod patrol;
pub mod routing;

pub use patrol::{PatrolRoute, longest_paths, random_path, tile_to_world};
pub use routing::{next_step, reachable_distances};
