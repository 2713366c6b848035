//! Patrol route selection for wandering agents.
//! Routes are enumerated with an explicit stack so long corridors cannot
//! exhaust the call stack.

use rand_chacha::rand_core::Rng;

use super::routing::lateral_moves;
use crate::maze::Grid;
use crate::maze::geometry::{TILE_SIZE, VERTICAL_WALL_THICKNESS};
use crate::maze::random_index;
use crate::types::{Direction, Pos, WorldPoint};

#[derive(Clone, Copy, Debug)]
struct PathNode {
    pos: Pos,
    parent: Option<usize>,
    depth: usize,
    entered_by: Option<Direction>,
}

/// Every longest non-backtracking path of at most `desired_length` steps from `start`.
///
/// A path ends when it reaches `desired_length` steps or when its last cell has
/// no onward in-layer connection other than the one it arrived through. Only
/// the paths whose length equals the longest such ending are returned, in
/// North, South, West, East exploration order. Each path begins with `start`.
pub fn longest_paths(
    grid: &Grid,
    layer: usize,
    start: Pos,
    desired_length: usize,
) -> Vec<Vec<Pos>> {
    assert!(grid.contains(layer, start), "patrol start {start:?} outside layer {layer}");
    let mut arena = vec![PathNode { pos: start, parent: None, depth: 0, entered_by: None }];
    let mut stack = vec![0];
    let mut endings = Vec::new();

    while let Some(id) = stack.pop() {
        let node = arena[id];
        if node.depth == desired_length {
            endings.push(id);
            continue;
        }

        let first_child = arena.len();
        for (direction, next) in lateral_moves(grid, layer, node.pos) {
            if node.entered_by.is_some_and(|entered| entered.opposite() == direction) {
                continue;
            }
            arena.push(PathNode {
                pos: next,
                parent: Some(id),
                depth: node.depth + 1,
                entered_by: Some(direction),
            });
        }

        if arena.len() == first_child {
            endings.push(id);
        } else {
            stack.extend((first_child..arena.len()).rev());
        }
    }

    let longest = endings.iter().map(|&id| arena[id].depth).max().unwrap_or(0);
    endings
        .into_iter()
        .filter(|&id| arena[id].depth == longest)
        .map(|id| {
            let mut path = Vec::with_capacity(longest + 1);
            let mut cursor = Some(id);
            while let Some(current) = cursor {
                path.push(arena[current].pos);
                cursor = arena[current].parent;
            }
            path.reverse();
            path
        })
        .collect()
}

/// One of the [`longest_paths`] from `start`, chosen uniformly and mapped to
/// world waypoints. Never empty: a boxed-in start yields just its own waypoint.
pub fn random_path<R: Rng + ?Sized>(
    grid: &Grid,
    layer: usize,
    start: Pos,
    desired_length: usize,
    rng: &mut R,
) -> Vec<WorldPoint> {
    let mut candidates = longest_paths(grid, layer, start, desired_length);
    let chosen = random_index(rng, candidates.len());
    candidates.swap_remove(chosen).into_iter().map(tile_to_world).collect()
}

/// Anchor point agents patrol through: inset from the west wall, halfway down the tile.
pub fn tile_to_world(pos: Pos) -> WorldPoint {
    WorldPoint {
        x: pos.x as i32 * TILE_SIZE + VERTICAL_WALL_THICKNESS / 2,
        y: pos.y as i32 * TILE_SIZE + TILE_SIZE / 2,
    }
}

/// Walks a waypoint list forward to its end, then back to its start, forever.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PatrolRoute {
    waypoints: Vec<WorldPoint>,
    target: usize,
    forward: bool,
}

impl PatrolRoute {
    /// The agent starts on the first waypoint and heads for the second.
    pub fn new(waypoints: Vec<WorldPoint>) -> Self {
        assert!(!waypoints.is_empty(), "a patrol route needs at least one waypoint");
        let target = usize::from(waypoints.len() > 1);
        Self { waypoints, target, forward: true }
    }

    pub fn waypoints(&self) -> &[WorldPoint] {
        &self.waypoints
    }

    pub fn start(&self) -> WorldPoint {
        self.waypoints[0]
    }

    pub fn target(&self) -> WorldPoint {
        self.waypoints[self.target]
    }

    /// Call once the agent reaches [`PatrolRoute::target`]; returns the next target.
    pub fn advance(&mut self) -> WorldPoint {
        let last = self.waypoints.len() - 1;
        if last > 0 {
            if self.forward && self.target == last {
                self.forward = false;
            } else if !self.forward && self.target == 0 {
                self.forward = true;
            }
            if self.forward {
                self.target += 1;
            } else {
                self.target -= 1;
            }
        }
        self.target()
    }
}
