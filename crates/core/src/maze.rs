//! Layered maze generation: the tile grid, its spanning-tree generator and the
//! collision geometry derived from it.

pub mod geometry;
pub mod progression;

mod generator;
mod grid;
mod seed;
mod tile;

use rand_chacha::rand_core::Rng;

use crate::config::LevelConfig;

pub use generator::{GenerationStats, MazeGenerator};
pub use geometry::{LevelGeometry, Rect, derive_geometry};
pub use grid::Grid;
pub use progression::{STARTING_LEVEL_INDEX, level_config};
pub use seed::{derive_level_seed, level_rng};
pub use tile::Tile;

pub(crate) use seed::{PATROL_STREAM, mix_seed_stream, random_index};

/// Builds a `width × height × layers` maze with at most `max_cross_layer_edges` pads.
///
/// Panics on zero dimensions, on stacked layers of a single cell, and on a
/// budget too small to join every layer.
///
/// The bottom-right cell never carries a pad on any layer, which is why a
/// stacked maze needs a second cell per layer to join its layers through.
pub fn generate<R: Rng + ?Sized>(
    width: usize,
    height: usize,
    layers: usize,
    max_cross_layer_edges: usize,
    rng: &mut R,
) -> Grid {
    let config =
        LevelConfig { width, height, layers, max_cross_layer_edges, ..LevelConfig::default() };
    MazeGenerator::new(&config).generate(rng)
}

pub fn generate_maze(config: &LevelConfig, run_seed: u64, level_index: u32) -> Grid {
    MazeGenerator::new(config).generate(&mut level_rng(run_seed, level_index))
}
