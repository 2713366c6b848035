//! Collision geometry derived from tile connectivity.
//!
//! The rectangles here use the same tile and wall measurements as the
//! renderer, so what the player sees and what they collide with agree.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use crate::types::{Direction, Pos, WorldPoint};

/// Edge length of one tile in world pixels.
pub const TILE_SIZE: i32 = 128;
/// Thickness of walls running along the x axis.
pub const HORIZONTAL_WALL_THICKNESS: i32 = 20;
/// Thickness of walls running along the y axis.
pub const VERTICAL_WALL_THICKNESS: i32 = 32;
/// Edge length of the square pad and goal markers.
pub const PAD_SIZE: i32 = 100;

const PAD_INSET: i32 = (TILE_SIZE - PAD_SIZE) / 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.x += dx;
        self.y += dy;
    }

    /// Overlap test; rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        other.x < self.right()
            && self.x < other.right()
            && other.y < self.bottom()
            && self.y < other.bottom()
    }

    pub fn contains(&self, point: WorldPoint) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }
}

/// Walls, pads and the goal marker of one maze, in world pixels.
///
/// The only mutation after derivation is [`LevelGeometry::translate`], which
/// shifts every rectangle together when the view scrolls.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelGeometry {
    walls: Vec<Vec<Rect>>,
    pads: Vec<Vec<Rect>>,
    goal: Rect,
    extent: WorldPoint,
    offset: WorldPoint,
}

impl LevelGeometry {
    pub fn derive(grid: &Grid) -> Self {
        let extent =
            WorldPoint { x: grid.width() as i32 * TILE_SIZE, y: grid.height() as i32 * TILE_SIZE };
        let mut walls = Vec::with_capacity(grid.layers());
        let mut pads = Vec::with_capacity(grid.layers());

        for layer in 0..grid.layers() {
            let mut layer_walls = vec![
                Rect { x: 0, y: 0, width: extent.x, height: HORIZONTAL_WALL_THICKNESS },
                Rect { x: 0, y: 0, width: VERTICAL_WALL_THICKNESS, height: extent.y },
            ];
            let mut layer_pads = Vec::new();

            for x in 0..grid.width() {
                for y in 0..grid.height() {
                    let pos = Pos { y, x };
                    let tile = grid.tile(layer, pos);
                    let origin = cell_origin(pos);
                    if !tile.is_connected(Direction::South) {
                        layer_walls.push(Rect {
                            x: origin.x,
                            y: origin.y + TILE_SIZE,
                            width: TILE_SIZE,
                            height: HORIZONTAL_WALL_THICKNESS,
                        });
                    }
                    if !tile.is_connected(Direction::East) {
                        layer_walls.push(Rect {
                            x: origin.x + TILE_SIZE - VERTICAL_WALL_THICKNESS,
                            y: origin.y,
                            width: VERTICAL_WALL_THICKNESS,
                            height: TILE_SIZE + HORIZONTAL_WALL_THICKNESS,
                        });
                    }
                    if tile.has_pad() {
                        layer_pads.push(centered_marker(pos));
                    }
                }
            }

            walls.push(layer_walls);
            pads.push(layer_pads);
        }

        Self {
            walls,
            pads,
            goal: centered_marker(grid.goal_pos()),
            extent,
            offset: WorldPoint { x: 0, y: 0 },
        }
    }

    pub fn layers(&self) -> usize {
        self.walls.len()
    }

    pub fn walls(&self, layer: usize) -> &[Rect] {
        &self.walls[layer]
    }

    pub fn pads(&self, layer: usize) -> &[Rect] {
        &self.pads[layer]
    }

    pub fn goal(&self) -> Rect {
        self.goal
    }

    /// Pixel extent of the maze before any scrolling.
    pub fn world_size(&self) -> WorldPoint {
        self.extent
    }

    /// Total translation applied since derivation.
    pub fn offset(&self) -> WorldPoint {
        self.offset
    }

    /// Shifts every wall, pad and the goal by the same amount.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for rect in self.walls.iter_mut().chain(self.pads.iter_mut()).flatten() {
            rect.translate(dx, dy);
        }
        self.goal.translate(dx, dy);
        self.offset.x += dx;
        self.offset.y += dy;
    }

    pub fn wall_hit(&self, layer: usize, body: &Rect) -> bool {
        self.walls[layer].iter().any(|wall| wall.intersects(body))
    }

    /// The first pad on `layer` overlapping `body`, if any.
    pub fn pad_under(&self, layer: usize, body: &Rect) -> Option<Rect> {
        self.pads[layer].iter().copied().find(|pad| pad.intersects(body))
    }

    /// The goal only exists on layer 0.
    pub fn reaches_goal(&self, layer: usize, body: &Rect) -> bool {
        layer == 0 && self.goal.intersects(body)
    }
}

pub fn derive_geometry(grid: &Grid) -> LevelGeometry {
    LevelGeometry::derive(grid)
}

fn cell_origin(pos: Pos) -> WorldPoint {
    WorldPoint { x: pos.x as i32 * TILE_SIZE, y: pos.y as i32 * TILE_SIZE }
}

fn centered_marker(pos: Pos) -> Rect {
    let origin = cell_origin(pos);
    Rect { x: origin.x + PAD_INSET, y: origin.y + PAD_INSET, width: PAD_SIZE, height: PAD_SIZE }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn isolated_cell_is_boxed_in_by_four_walls() {
        let grid = Grid::new(1, 1, 1);
        let geometry = LevelGeometry::derive(&grid);

        assert_eq!(
            geometry.walls(0),
            &[
                Rect { x: 0, y: 0, width: 128, height: 20 },
                Rect { x: 0, y: 0, width: 32, height: 128 },
                Rect { x: 0, y: 128, width: 128, height: 20 },
                Rect { x: 96, y: 0, width: 32, height: 148 },
            ]
        );
        assert!(geometry.pads(0).is_empty());
        assert_eq!(geometry.goal(), Rect { x: 14, y: 14, width: 100, height: 100 });
    }

    #[test]
    fn open_connections_remove_walls_and_pads_mark_both_layers() {
        let mut grid = Grid::new(2, 1, 2);
        let left = grid.index(0, Pos { y: 0, x: 0 });
        grid.connect(left, Direction::East);
        grid.connect(left, Direction::Up);
        let geometry = LevelGeometry::derive(&grid);

        let interior_east_wall = Rect { x: 96, y: 0, width: 32, height: 148 };
        assert!(!geometry.walls(0).contains(&interior_east_wall));
        assert!(geometry.walls(1).contains(&interior_east_wall));

        let pad = Rect { x: 14, y: 14, width: 100, height: 100 };
        assert_eq!(geometry.pads(0), &[pad]);
        assert_eq!(geometry.pads(1), &[pad]);
    }

    #[test]
    fn goal_marks_the_bottom_right_cell() {
        let grid = Grid::new(3, 2, 1);
        let geometry = LevelGeometry::derive(&grid);
        assert_eq!(geometry.goal(), Rect { x: 270, y: 142, width: 100, height: 100 });
        assert_eq!(geometry.world_size(), WorldPoint { x: 384, y: 256 });
    }

    #[test]
    fn translate_moves_everything_together() {
        let mut grid = Grid::new(2, 2, 2);
        let origin = grid.index(0, Pos { y: 0, x: 0 });
        grid.connect(origin, Direction::Up);
        let original = LevelGeometry::derive(&grid);
        let mut scrolled = original.clone();

        scrolled.translate(-5, 12);
        scrolled.translate(2, -2);

        assert_eq!(scrolled.offset(), WorldPoint { x: -3, y: 10 });
        for layer in 0..original.layers() {
            for (before, after) in original.walls(layer).iter().zip(scrolled.walls(layer)) {
                assert_eq!((after.x - before.x, after.y - before.y), (-3, 10));
            }
            for (before, after) in original.pads(layer).iter().zip(scrolled.pads(layer)) {
                assert_eq!((after.x - before.x, after.y - before.y), (-3, 10));
            }
        }
        assert_eq!(scrolled.goal().x - original.goal().x, -3);
        assert_eq!(scrolled.world_size(), original.world_size());
    }

    #[test]
    fn touching_edges_do_not_intersect() {
        let wall = Rect { x: 0, y: 0, width: 10, height: 10 };
        assert!(!wall.intersects(&Rect { x: 10, y: 0, width: 5, height: 5 }));
        assert!(wall.intersects(&Rect { x: 9, y: 9, width: 5, height: 5 }));
        assert!(wall.contains(WorldPoint { x: 0, y: 9 }));
        assert!(!wall.contains(WorldPoint { x: 10, y: 0 }));
    }

    #[test]
    fn collision_queries_respect_layers() {
        let mut grid = Grid::new(2, 2, 2);
        let origin = grid.index(0, Pos { y: 0, x: 0 });
        grid.connect(origin, Direction::Up);
        let geometry = LevelGeometry::derive(&grid);

        let body_on_pad = Rect { x: 40, y: 40, width: 20, height: 20 };
        assert!(!geometry.wall_hit(0, &body_on_pad));
        assert!(geometry.pad_under(1, &body_on_pad).is_some());

        let body_on_goal = Rect { x: 180, y: 180, width: 20, height: 20 };
        assert!(geometry.reaches_goal(0, &body_on_goal));
        assert!(!geometry.reaches_goal(1, &body_on_goal));
        assert!(geometry.pad_under(0, &body_on_goal).is_none());
    }
}
