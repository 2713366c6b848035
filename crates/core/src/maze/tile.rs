//! Per-cell connectivity records.

use crate::types::Direction;

/// Connection flags of a single cell, indexed by [`Direction`].
///
/// Tiles carry no coordinates; a tile's identity is its slot in the grid.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Tile {
    connections: [bool; 6],
}

impl Tile {
    pub fn is_connected(&self, direction: Direction) -> bool {
        self.connections[direction.index()]
    }

    pub(crate) fn connect(&mut self, direction: Direction) {
        self.connections[direction.index()] = true;
    }

    pub fn connection_count(&self) -> usize {
        self.connections.iter().filter(|&&open| open).count()
    }

    pub fn is_dead_end(&self) -> bool {
        self.connection_count() == 1
    }

    /// True when the tile carries a teleportation pad to an adjacent layer.
    pub fn has_pad(&self) -> bool {
        self.is_connected(Direction::Down) || self.is_connected(Direction::Up)
    }

    pub(crate) fn bits(&self) -> u8 {
        self.connections
            .iter()
            .enumerate()
            .fold(0_u8, |bits, (index, &open)| bits | (u8::from(open) << index))
    }
}
