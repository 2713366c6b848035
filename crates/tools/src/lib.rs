//! Shared helpers for the developer binaries: config loading, text rendering
//! and the invariant checks the fuzzer runs against every generated level.

use std::collections::{BTreeSet, VecDeque};
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail, ensure};
use maze_core::navigation::{longest_paths, reachable_distances};
use maze_core::{Direction, Grid, Level, LevelConfig, NextStep, Pos};
use serde::Serialize;

/// Reads a TOML level config; missing fields fall back to [`LevelConfig::default`].
pub fn load_config(path: &Path) -> Result<LevelConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: LevelConfig = toml::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
    config.validate().with_context(|| format!("Invalid level config in {}", path.display()))?;
    Ok(config)
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct LevelSummary {
    pub level_index: u32,
    pub width: usize,
    pub height: usize,
    pub layers: usize,
    pub edges: usize,
    pub pads: usize,
    pub dead_ends: Vec<usize>,
    pub fingerprint: String,
}

impl LevelSummary {
    pub fn of(level: &Level) -> Self {
        let grid = level.grid();
        Self {
            level_index: level.level_index(),
            width: grid.width(),
            height: grid.height(),
            layers: grid.layers(),
            edges: grid.edge_count(),
            pads: grid.cross_layer_edge_count(),
            dead_ends: (0..grid.layers()).map(|layer| level.dead_ends(layer).len()).collect(),
            fingerprint: format!("{:016x}", grid.fingerprint()),
        }
    }
}

/// Draws one layer as box-drawing text. `P` marks a pad, `G` the goal.
pub fn render_layer(grid: &Grid, layer: usize) -> String {
    let mut out = String::from("+");
    for _ in 0..grid.width() {
        out.push_str("---+");
    }
    out.push('\n');

    for y in 0..grid.height() {
        let mut row = String::from("|");
        let mut below = String::from("+");
        for x in 0..grid.width() {
            let pos = Pos { y, x };
            let tile = grid.tile(layer, pos);
            let mark = if layer == 0 && pos == grid.goal_pos() {
                'G'
            } else if tile.has_pad() {
                'P'
            } else {
                ' '
            };
            row.push(' ');
            row.push(mark);
            row.push(' ');
            row.push(if tile.is_connected(Direction::East) { ' ' } else { '|' });
            below.push_str(if tile.is_connected(Direction::South) { "   +" } else { "---+" });
        }
        out.push_str(&row);
        out.push('\n');
        out.push_str(&below);
        out.push('\n');
    }
    out
}

/// Fails unless `grid` is a mirrored spanning tree that respects `config`.
pub fn check_maze(grid: &Grid, config: &LevelConfig) -> Result<()> {
    ensure!(
        (grid.width(), grid.height(), grid.layers())
            == (config.width, config.height, config.layers),
        "grid is {}x{}x{}, config asked for {}x{}x{}",
        grid.width(),
        grid.height(),
        grid.layers(),
        config.width,
        config.height,
        config.layers
    );

    let origin = (0, Pos { y: 0, x: 0 });
    let mut seen = BTreeSet::from([origin]);
    let mut open = VecDeque::from([origin]);
    while let Some((layer, pos)) = open.pop_front() {
        for direction in Direction::ALL {
            if !grid.tile(layer, pos).is_connected(direction) {
                continue;
            }
            let Some((next_layer, next)) = grid.neighbor(layer, pos, direction) else {
                bail!("{pos:?} on layer {layer} opens {direction:?} off the grid");
            };
            ensure!(
                grid.tile(next_layer, next).is_connected(direction.opposite()),
                "{pos:?} on layer {layer} has a one-sided {direction:?} connection"
            );
            if seen.insert((next_layer, next)) {
                open.push_back((next_layer, next));
            }
        }
    }

    ensure!(
        seen.len() == grid.cell_count(),
        "only {} of {} cells are connected",
        seen.len(),
        grid.cell_count()
    );
    ensure!(
        grid.edge_count() == grid.cell_count() - 1,
        "{} edges over {} cells is not a tree",
        grid.edge_count(),
        grid.cell_count()
    );
    ensure!(
        grid.cross_layer_edge_count() <= config.max_cross_layer_edges,
        "{} pads exceed the budget of {}",
        grid.cross_layer_edge_count(),
        config.max_cross_layer_edges
    );
    for layer in 0..grid.layers() {
        ensure!(
            !grid.tile(layer, grid.goal_pos()).has_pad(),
            "goal cell carries a pad on layer {layer}"
        );
    }
    Ok(())
}

/// Checks router and patrol answers from `start` against plain breadth-first distances.
pub fn check_navigation(
    level: &Level,
    layer: usize,
    start: Pos,
    patrol_length: usize,
) -> Result<()> {
    let grid = level.grid();
    let distances = reachable_distances(grid, layer, start);

    for y in 0..grid.height() {
        for x in 0..grid.width() {
            let goal = Pos { y, x };
            let from_goal = reachable_distances(grid, layer, goal);
            match (level.next_step(layer, start, goal), distances.get(&goal)) {
                (NextStep::Step(step), Some(_)) if start == goal => {
                    ensure!(step == start, "standing on the goal should not move");
                }
                (NextStep::Step(step), Some(&distance)) => {
                    ensure!(
                        from_goal.get(&step) == Some(&(distance - 1)),
                        "step {step:?} from {start:?} does not close in on {goal:?}"
                    );
                }
                (NextStep::Unreachable, None) => {}
                (answer, distance) => bail!(
                    "router answered {answer:?} for {start:?}->{goal:?} at distance {distance:?}"
                ),
            }
        }
    }

    let farthest = distances.values().copied().max().unwrap_or(0);
    for path in longest_paths(grid, layer, start, patrol_length) {
        ensure!(path.first() == Some(&start), "patrol path does not begin at {start:?}");
        ensure!(
            path.len() - 1 == patrol_length.min(farthest),
            "patrol path of {} steps from {start:?}, expected {}",
            path.len() - 1,
            patrol_length.min(farthest)
        );
    }
    Ok(())
}
