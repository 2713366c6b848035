//! Shared fixtures and invariant checks for the unit test suites.

use std::collections::VecDeque;

use crate::maze::Grid;
use crate::types::{Direction, Pos};

/// Builds a grid whose only connections are the listed `(layer, cell, direction)` edges.
pub(crate) fn grid_with_edges(
    width: usize,
    height: usize,
    layers: usize,
    edges: &[(usize, Pos, Direction)],
) -> Grid {
    let mut grid = Grid::new(width, height, layers);
    for &(layer, pos, direction) in edges {
        let from = grid.index(layer, pos);
        grid.connect(from, direction);
    }
    grid
}

/// Panics unless every connection is mirrored and the edges form one spanning tree.
pub(crate) fn assert_spanning_tree(grid: &Grid) {
    for index in 0..grid.cell_count() {
        for direction in Direction::ALL {
            if !grid.tile_at(index).is_connected(direction) {
                continue;
            }
            let neighbor = grid
                .neighbor_index(index, direction)
                .unwrap_or_else(|| panic!("cell {index} connects {direction:?} off the grid"));
            assert!(
                grid.tile_at(neighbor).is_connected(direction.opposite()),
                "cell {index} {direction:?} is not mirrored by cell {neighbor}"
            );
        }
    }

    assert_eq!(grid.edge_count(), grid.cell_count() - 1, "edge count of a spanning tree");

    let mut seen = vec![false; grid.cell_count()];
    let mut open = VecDeque::from([0]);
    seen[0] = true;
    let mut reached = 1;
    while let Some(index) = open.pop_front() {
        for direction in Direction::ALL {
            if !grid.tile_at(index).is_connected(direction) {
                continue;
            }
            if let Some(neighbor) = grid.neighbor_index(index, direction)
                && !seen[neighbor]
            {
                seen[neighbor] = true;
                reached += 1;
                open.push_back(neighbor);
            }
        }
    }
    assert_eq!(reached, grid.cell_count(), "every cell is reachable from cell 0");
}
