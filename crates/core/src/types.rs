use serde::{Deserialize, Serialize};

/// A cell position within one layer of the maze.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub y: usize,
    pub x: usize,
}

/// Connection directions of a tile.
///
/// Opposite directions differ only in the lowest bit of their discriminant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Direction {
    North = 0,
    South = 1,
    West = 2,
    East = 3,
    Down = 4,
    Up = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::Down,
        Direction::Up,
    ];

    /// In-layer directions, in the order the router breaks ties.
    pub const LATERAL: [Direction; 4] =
        [Direction::North, Direction::South, Direction::West, Direction::East];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Direction {
        Self::ALL[index]
    }

    pub fn opposite(self) -> Direction {
        Self::from_index(self.index() ^ 1)
    }

    pub fn is_cross_layer(self) -> bool {
        matches!(self, Direction::Down | Direction::Up)
    }
}

/// A position in world pixel space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WorldPoint {
    pub x: i32,
    pub y: i32,
}

/// Result of a single-layer routing query.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextStep {
    /// The neighbouring cell to move into next. Equals the start when already at the goal.
    Step(Pos),
    /// No path exists inside the layer; callers should abandon pursuit.
    Unreachable,
}
