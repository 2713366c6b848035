//! Breadth-first shortest-path routing confined to a single layer.

use std::collections::{BTreeMap, VecDeque};

use crate::maze::Grid;
use crate::types::{Direction, NextStep, Pos};

/// First step of a shortest path from `start` to `goal` that never leaves `layer`.
///
/// Neighbours are expanded North, South, West, East, so among equally short
/// paths the one leaving `start` earliest in that order wins. Returns
/// `Step(start)` when `start == goal`.
pub fn next_step(grid: &Grid, layer: usize, start: Pos, goal: Pos) -> NextStep {
    assert!(grid.contains(layer, start), "start {start:?} outside layer {layer}");
    assert!(grid.contains(layer, goal), "goal {goal:?} outside layer {layer}");
    if start == goal {
        return NextStep::Step(start);
    }

    let mut visited = vec![false; grid.width() * grid.height()];
    let mut open = VecDeque::new();
    visited[layer_slot(grid, start)] = true;
    for (_, neighbor) in lateral_moves(grid, layer, start) {
        visited[layer_slot(grid, neighbor)] = true;
        open.push_back((neighbor, neighbor));
    }

    while let Some((current, first_step)) = open.pop_front() {
        if current == goal {
            return NextStep::Step(first_step);
        }
        for (_, neighbor) in lateral_moves(grid, layer, current) {
            let slot = layer_slot(grid, neighbor);
            if !visited[slot] {
                visited[slot] = true;
                open.push_back((neighbor, first_step));
            }
        }
    }

    NextStep::Unreachable
}

/// Breadth-first step counts from `from` to every cell it can reach without leaving `layer`.
pub fn reachable_distances(grid: &Grid, layer: usize, from: Pos) -> BTreeMap<Pos, usize> {
    assert!(grid.contains(layer, from), "cell {from:?} outside layer {layer}");
    let mut distances = BTreeMap::from([(from, 0)]);
    let mut open = VecDeque::from([from]);
    while let Some(current) = open.pop_front() {
        let distance = distances[&current];
        for (_, neighbor) in lateral_moves(grid, layer, current) {
            distances.entry(neighbor).or_insert_with(|| {
                open.push_back(neighbor);
                distance + 1
            });
        }
    }
    distances
}

/// Open in-layer connections of `pos`, in North, South, West, East order.
pub(crate) fn lateral_moves(
    grid: &Grid,
    layer: usize,
    pos: Pos,
) -> impl Iterator<Item = (Direction, Pos)> + '_ {
    let tile = *grid.tile(layer, pos);
    Direction::LATERAL
        .into_iter()
        .filter(move |&direction| tile.is_connected(direction))
        .filter_map(move |direction| {
            grid.neighbor(layer, pos, direction).map(|(_, neighbor)| (direction, neighbor))
        })
}

fn layer_slot(grid: &Grid, pos: Pos) -> usize {
    pos.y * grid.width() + pos.x
}
