//! Everything built once when a level loads: the maze, its collision
//! geometry, the dead ends of every layer and the random stream patrols draw from.

use std::collections::BTreeSet;

use log::debug;
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

use crate::config::LevelConfig;
use crate::maze::{
    Grid, LevelGeometry, PATROL_STREAM, derive_level_seed, generate_maze, level_config,
    mix_seed_stream,
};
use crate::navigation::{self, PatrolRoute};
use crate::types::{NextStep, Pos, WorldPoint};

pub struct Level {
    config: LevelConfig,
    level_index: u32,
    grid: Grid,
    geometry: LevelGeometry,
    dead_ends: Vec<BTreeSet<Pos>>,
    patrol_rng: ChaCha8Rng,
}

impl Level {
    /// Panics when `config` fails [`LevelConfig::validate`].
    pub fn build(config: &LevelConfig, run_seed: u64, level_index: u32) -> Self {
        let grid = generate_maze(config, run_seed, level_index);
        let geometry = LevelGeometry::derive(&grid);
        let dead_ends: Vec<BTreeSet<Pos>> =
            (0..grid.layers()).map(|layer| grid.dead_ends(layer)).collect();
        let patrol_seed = mix_seed_stream(derive_level_seed(run_seed, level_index), PATROL_STREAM);

        debug!(
            "level {level_index}: {}x{}x{} maze, {} pads, {} dead ends, fingerprint {:016x}",
            grid.width(),
            grid.height(),
            grid.layers(),
            grid.cross_layer_edge_count(),
            dead_ends.iter().map(BTreeSet::len).sum::<usize>(),
            grid.fingerprint()
        );

        Self {
            config: config.clone(),
            level_index,
            grid,
            geometry,
            dead_ends,
            patrol_rng: ChaCha8Rng::seed_from_u64(patrol_seed),
        }
    }

    /// Builds `level_index` of a run using the progression schedule.
    pub fn for_run(run_seed: u64, level_index: u32) -> Self {
        Self::build(&level_config(level_index), run_seed, level_index)
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    pub fn level_index(&self) -> u32 {
        self.level_index
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn geometry(&self) -> &LevelGeometry {
        &self.geometry
    }

    pub fn dead_ends(&self, layer: usize) -> &BTreeSet<Pos> {
        &self.dead_ends[layer]
    }

    /// Applies the view scroll to every derived rectangle.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.geometry.translate(dx, dy);
    }

    pub fn next_step(&self, layer: usize, start: Pos, goal: Pos) -> NextStep {
        navigation::next_step(&self.grid, layer, start, goal)
    }

    pub fn random_path(
        &mut self,
        layer: usize,
        start: Pos,
        desired_length: usize,
    ) -> Vec<WorldPoint> {
        navigation::random_path(&self.grid, layer, start, desired_length, &mut self.patrol_rng)
    }

    pub fn patrol_route(
        &mut self,
        layer: usize,
        start: Pos,
        desired_length: usize,
    ) -> PatrolRoute {
        PatrolRoute::new(self.random_path(layer, start, desired_length))
    }
}
