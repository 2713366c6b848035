//! The three-dimensional tile grid and its cell-addressing primitives.

use std::collections::BTreeSet;

use xxhash_rust::xxh3::xxh3_64;

use super::tile::Tile;
use crate::types::{Direction, Pos};

/// A `width × height × layers` block of tiles.
///
/// Cells are stored layer-major, then row-major, so flat indices ascend with
/// `(layer, y, x)`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    layers: usize,
    tiles: Vec<Tile>,
}

impl Grid {
    pub(crate) fn new(width: usize, height: usize, layers: usize) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive: {width}x{height}");
        assert!(layers > 0, "grid needs at least one layer");
        Self { width, height, layers, tiles: vec![Tile::default(); width * height * layers] }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn layers(&self) -> usize {
        self.layers
    }

    pub fn cell_count(&self) -> usize {
        self.tiles.len()
    }

    /// The level goal sits in the bottom-right cell of layer 0.
    pub fn goal_pos(&self) -> Pos {
        Pos { y: self.height - 1, x: self.width - 1 }
    }

    pub fn contains(&self, layer: usize, pos: Pos) -> bool {
        layer < self.layers && pos.y < self.height && pos.x < self.width
    }

    pub fn tile(&self, layer: usize, pos: Pos) -> &Tile {
        &self.tiles[self.index(layer, pos)]
    }

    /// The cell reached by leaving `pos` in `direction`, or `None` past the grid edge.
    pub fn neighbor(&self, layer: usize, pos: Pos, direction: Direction) -> Option<(usize, Pos)> {
        let Pos { y, x } = pos;
        let (layer, next) = match direction {
            Direction::North => (layer, Pos { y: y.checked_sub(1)?, x }),
            Direction::South => (layer, Pos { y: y + 1, x }),
            Direction::West => (layer, Pos { y, x: x.checked_sub(1)? }),
            Direction::East => (layer, Pos { y, x: x + 1 }),
            Direction::Down => (layer.checked_sub(1)?, pos),
            Direction::Up => (layer + 1, pos),
        };
        self.contains(layer, next).then_some((layer, next))
    }

    /// Number of undirected edges; each connection is recorded on both of its cells.
    pub fn edge_count(&self) -> usize {
        self.tiles.iter().map(Tile::connection_count).sum::<usize>() / 2
    }

    pub fn cross_layer_edge_count(&self) -> usize {
        self.tiles.iter().filter(|tile| tile.is_connected(Direction::Up)).count()
    }

    /// Every cell of `layer` with exactly one connection, counting cross-layer edges.
    pub fn dead_ends(&self, layer: usize) -> BTreeSet<Pos> {
        assert!(layer < self.layers, "layer {layer} out of range");
        let mut dead_ends = BTreeSet::new();
        for y in 0..self.height {
            for x in 0..self.width {
                let pos = Pos { y, x };
                if self.tile(layer, pos).is_dead_end() {
                    dead_ends.insert(pos);
                }
            }
        }
        dead_ends
    }

    /// Dimensions as little-endian `u64`s, then one connection byte per tile in index order.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(24 + self.tiles.len());
        bytes.extend((self.width as u64).to_le_bytes());
        bytes.extend((self.height as u64).to_le_bytes());
        bytes.extend((self.layers as u64).to_le_bytes());
        bytes.extend(self.tiles.iter().map(Tile::bits));
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    pub(crate) fn index(&self, layer: usize, pos: Pos) -> usize {
        assert!(self.contains(layer, pos), "cell {pos:?} on layer {layer} is outside the grid");
        (layer * self.height + pos.y) * self.width + pos.x
    }

    pub(crate) fn cell_at(&self, index: usize) -> (usize, Pos) {
        let layer_size = self.width * self.height;
        let within_layer = index % layer_size;
        (index / layer_size, Pos { y: within_layer / self.width, x: within_layer % self.width })
    }

    pub(crate) fn neighbor_index(&self, index: usize, direction: Direction) -> Option<usize> {
        let (layer, pos) = self.cell_at(index);
        self.neighbor(layer, pos, direction).map(|(layer, next)| self.index(layer, next))
    }

    /// Records an edge on both of its cells.
    pub(crate) fn connect(&mut self, from: usize, direction: Direction) {
        let to = self
            .neighbor_index(from, direction)
            .expect("connections only join cells inside the grid");
        self.tiles[from].connect(direction);
        self.tiles[to].connect(direction.opposite());
    }

    #[cfg(test)]
    pub(crate) fn tile_at(&self, index: usize) -> &Tile {
        &self.tiles[index]
    }
}
