//! Loop-erased random walk (Wilson's algorithm) over a layered grid.
//!
//! Walks start from the lowest-indexed cell not yet in the tree and wander
//! until they touch the tree, at which point every step of the walk is spliced
//! in. A walk that runs into itself is discarded whole and restarted from its
//! start cell rather than having only the loop erased.
//!
//! A cross-layer step needs a run of lateral steps since the last layer change
//! and is never taken from the goal cell. It must also leave enough of the pad
//! budget to reach every layer the tree has not touched yet.

use log::{debug, trace};
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use super::seed::random_index;
use crate::config::LevelConfig;
use crate::types::{Direction, Pos};

/// Discarded walks from one start cell before the lateral-run rule is waived for it.
const STALLED_WALK_LIMIT: usize = 64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GenerationStats {
    pub walks: usize,
    pub discarded_walks: usize,
}

pub struct MazeGenerator {
    width: usize,
    height: usize,
    layers: usize,
    max_cross_layer_edges: usize,
    min_lateral_run: usize,
}

impl MazeGenerator {
    /// Panics when `config` cannot produce a connected maze; see [`LevelConfig::validate`].
    pub fn new(config: &LevelConfig) -> Self {
        if let Err(error) = config.validate() {
            panic!("invalid level config {config:?}: {error}");
        }
        Self {
            width: config.width,
            height: config.height,
            layers: config.layers,
            max_cross_layer_edges: config.max_cross_layer_edges,
            min_lateral_run: config.min_lateral_run,
        }
    }

    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Grid {
        self.generate_with_stats(rng).0
    }

    pub fn generate_with_stats<R: Rng + ?Sized>(&self, rng: &mut R) -> (Grid, GenerationStats) {
        let mut grid = Grid::new(self.width, self.height, self.layers);
        let mut tree = Tree::new(grid.cell_count());
        let mut walk = Walk::new(grid.cell_count());
        let mut stats = GenerationStats::default();

        tree.insert(grid.index(0, Pos { y: self.height / 2, x: self.width / 2 }));

        let mut cursor = 0;
        while tree.size < grid.cell_count() {
            while tree.contains[cursor] {
                cursor += 1;
            }
            stats.walks += 1;
            self.walk_to_tree(&grid, &tree, &mut walk, cursor, rng, &mut stats);

            for &(from, direction) in &walk.steps {
                grid.connect(from, direction);
            }
            for &cell in &walk.cells {
                tree.insert(cell);
            }
            tree.pads += walk.pads;
            tree.highest_layer = tree.highest_layer.max(walk.highest_layer);
            walk.reset();
        }

        debug!(
            "generated {}x{}x{} maze: {} walks ({} discarded), {} edges, {} pads",
            self.width,
            self.height,
            self.layers,
            stats.walks,
            stats.discarded_walks,
            grid.edge_count(),
            tree.pads
        );
        (grid, stats)
    }

    fn walk_to_tree<R: Rng + ?Sized>(
        &self,
        grid: &Grid,
        tree: &Tree,
        walk: &mut Walk,
        start: usize,
        rng: &mut R,
        stats: &mut GenerationStats,
    ) {
        let start_layer = grid.cell_at(start).0;
        let joins_new_layer = start_layer > tree.highest_layer;
        let mut discarded_here = 0_usize;
        walk.begin(start, start_layer);
        let mut current = start;

        loop {
            let context = StepContext {
                grid,
                tree,
                walk: &*walk,
                waive_run: joins_new_layer && discarded_here >= STALLED_WALK_LIMIT,
            };
            let chosen = self.choose_direction(&context, current, rng);
            let (direction, next) = resolve_move(grid, current, chosen);

            walk.steps.push((current, direction));
            walk.previous = Some(direction);
            if direction.is_cross_layer() {
                walk.pads += 1;
                walk.lateral_run = 0;
                walk.highest_layer = walk.highest_layer.max(grid.cell_at(next).0);
            } else {
                walk.lateral_run += 1;
            }

            if tree.contains[next] {
                return;
            }
            if walk.on_walk[next] {
                stats.discarded_walks += 1;
                discarded_here += 1;
                trace!("walk from cell {start} looped after {} steps", walk.steps.len());
                walk.begin(start, start_layer);
                current = start;
                continue;
            }
            walk.on_walk[next] = true;
            walk.cells.push(next);
            current = next;
        }
    }

    fn choose_direction<R: Rng + ?Sized>(
        &self,
        context: &StepContext<'_>,
        current: usize,
        rng: &mut R,
    ) -> Direction {
        let (layer, pos) = context.grid.cell_at(current);
        let mut candidates = [Direction::North; 6];
        let mut count = 0;
        for direction in Direction::ALL {
            if context.walk.previous == Some(direction.opposite()) {
                continue;
            }
            let eligible = if direction.is_cross_layer() {
                self.may_change_layer(context, layer, pos, direction)
            } else {
                self.axis_is_open(direction)
            };
            if eligible {
                candidates[count] = direction;
                count += 1;
            }
        }
        candidates[random_index(rng, count)]
    }

    fn axis_is_open(&self, direction: Direction) -> bool {
        match direction {
            Direction::North | Direction::South => self.height > 1,
            Direction::West | Direction::East => self.width > 1,
            Direction::Down | Direction::Up => self.layers > 1,
        }
    }

    fn may_change_layer(
        &self,
        context: &StepContext<'_>,
        layer: usize,
        pos: Pos,
        direction: Direction,
    ) -> bool {
        let StepContext { grid, tree, walk, waive_run } = *context;
        if !self.axis_is_open(direction) || pos == grid.goal_pos() {
            return false;
        }
        if !waive_run && walk.lateral_run <= self.min_lateral_run {
            return false;
        }
        let target_layer = match resolved_layer_direction(layer, self.layers, direction) {
            Direction::Down => layer - 1,
            _ => layer + 1,
        };
        let reached = tree.highest_layer.max(walk.highest_layer).max(target_layer);
        let unreached_layers = self.layers - 1 - reached;
        tree.pads + walk.pads + 1 + unreached_layers <= self.max_cross_layer_edges
    }
}

/// Read-only view of the generator state used to pick the next step.
#[derive(Clone, Copy)]
struct StepContext<'a> {
    grid: &'a Grid,
    tree: &'a Tree,
    walk: &'a Walk,
    /// Set once a walk that must join a new layer keeps looping; tiny layers
    /// may never allow the full lateral run outside the goal column.
    waive_run: bool,
}

/// Cells already spliced into the spanning tree.
struct Tree {
    contains: Vec<bool>,
    size: usize,
    pads: usize,
    /// Layers `0..=highest_layer` all hold tree cells; walks only ever start one layer above.
    highest_layer: usize,
}

impl Tree {
    fn new(cell_count: usize) -> Self {
        Self { contains: vec![false; cell_count], size: 0, pads: 0, highest_layer: 0 }
    }

    fn insert(&mut self, cell: usize) {
        if !self.contains[cell] {
            self.contains[cell] = true;
            self.size += 1;
        }
    }
}

/// The tentative walk; nothing here touches the grid until the walk reaches the tree.
struct Walk {
    on_walk: Vec<bool>,
    cells: Vec<usize>,
    steps: Vec<(usize, Direction)>,
    pads: usize,
    lateral_run: usize,
    previous: Option<Direction>,
    highest_layer: usize,
}

impl Walk {
    fn new(cell_count: usize) -> Self {
        Self {
            on_walk: vec![false; cell_count],
            cells: Vec::new(),
            steps: Vec::new(),
            pads: 0,
            lateral_run: 0,
            previous: None,
            highest_layer: 0,
        }
    }

    fn begin(&mut self, start: usize, start_layer: usize) {
        self.reset();
        self.on_walk[start] = true;
        self.cells.push(start);
        self.highest_layer = start_layer;
    }

    fn reset(&mut self) {
        for &cell in &self.cells {
            self.on_walk[cell] = false;
        }
        self.cells.clear();
        self.steps.clear();
        self.pads = 0;
        self.lateral_run = 0;
        self.previous = None;
        self.highest_layer = 0;
    }
}

/// Steps off a grid edge bounce back the opposite way.
fn resolve_move(grid: &Grid, current: usize, direction: Direction) -> (Direction, usize) {
    if let Some(next) = grid.neighbor_index(current, direction) {
        return (direction, next);
    }
    let flipped = direction.opposite();
    let next = grid
        .neighbor_index(current, flipped)
        .expect("an open axis has a neighbour on at least one side");
    (flipped, next)
}

fn resolved_layer_direction(layer: usize, layers: usize, direction: Direction) -> Direction {
    match direction {
        Direction::Down if layer == 0 => Direction::Up,
        Direction::Up if layer + 1 == layers => Direction::Down,
        other => other,
    }
}
