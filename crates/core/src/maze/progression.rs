//! Level-size schedule used when a run advances to the next maze.

use crate::config::LevelConfig;

pub const STARTING_LEVEL_INDEX: u32 = 1;
pub const THIRD_LAYER_FROM_LEVEL: u32 = 4;

const BASE_SIDE: usize = 10;
const MAX_SIDE: usize = 24;
const PADS_PER_LAYER_GAP: usize = 11;
const MIN_LATERAL_RUN: usize = 2;

pub fn level_config(level_index: u32) -> LevelConfig {
    let side = (BASE_SIDE + level_slot(level_index)).min(MAX_SIDE);
    let layers = if level_index >= THIRD_LAYER_FROM_LEVEL { 3 } else { 2 };
    LevelConfig {
        width: side,
        height: side,
        layers,
        max_cross_layer_edges: PADS_PER_LAYER_GAP * (layers - 1),
        min_lateral_run: MIN_LATERAL_RUN,
    }
}

fn level_slot(level_index: u32) -> usize {
    level_index.saturating_sub(STARTING_LEVEL_INDEX) as usize
}
