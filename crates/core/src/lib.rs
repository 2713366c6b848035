pub mod config;
pub mod level;
pub mod maze;
pub mod navigation;
pub mod types;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, LevelConfig};
pub use level::Level;
pub use maze::{Grid, LevelGeometry, MazeGenerator, Rect, Tile, generate, generate_maze};
pub use navigation::{PatrolRoute, next_step, random_path};
pub use types::*;
