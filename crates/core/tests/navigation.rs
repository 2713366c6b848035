use maze_core::navigation::{longest_paths, reachable_distances, tile_to_world};
use maze_core::{Level, NextStep, PatrolRoute, Pos, WorldPoint, next_step, random_path};
use rand_chacha::{ChaCha8Rng, rand_core::SeedableRng};

#[test]
fn test_chaser_reaches_the_goal_by_repeated_steps() {
    let level = Level::for_run(4242, 2);
    let grid = level.grid();
    let goal = grid.goal_pos();

    for layer in 0..grid.layers() {
        for (&start, &distance) in &reachable_distances(grid, layer, goal) {
            let mut current = start;
            for _ in 0..distance {
                match level.next_step(layer, current, goal) {
                    NextStep::Step(step) => current = step,
                    NextStep::Unreachable => panic!("{start:?} lost its route on layer {layer}"),
                }
            }
            assert_eq!(current, goal, "{start:?} on layer {layer} took {distance} steps");
        }
    }
}

#[test]
fn test_cells_split_across_layers_report_unreachable() {
    let level = Level::for_run(8, 1);
    let grid = level.grid();
    let goal = grid.goal_pos();
    let reachable = reachable_distances(grid, 0, goal);

    let stranded: Vec<Pos> = (0..grid.height())
        .flat_map(|y| (0..grid.width()).map(move |x| Pos { y, x }))
        .filter(|pos| !reachable.contains_key(pos))
        .collect();
    for start in stranded {
        assert_eq!(next_step(grid, 0, start, goal), NextStep::Unreachable);
    }
}

#[test]
fn test_patrol_from_a_dead_end_walks_out_and_back() {
    let mut level = Level::for_run(55, 1);
    let dead_end = *level.dead_ends(0).iter().next().expect("a tree always has leaves");
    let mut route = level.patrol_route(0, dead_end, 5);
    let waypoints = route.waypoints().to_vec();
    assert_eq!(route.start(), tile_to_world(dead_end));

    let mut seen = vec![route.start(), route.target()];
    for _ in 0..(waypoints.len() * 2) {
        seen.push(route.advance());
    }
    assert!(seen.iter().all(|point| waypoints.contains(point)));
    if waypoints.len() > 1 {
        assert!(seen.contains(waypoints.last().expect("non-empty route")));
    }
}

#[test]
fn test_zero_length_patrol_is_the_start_tile() {
    let level = Level::for_run(1, 1);
    let start = Pos { y: 4, x: 7 };
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let path = random_path(level.grid(), 1, start, 0, &mut rng);
    assert_eq!(path, vec![WorldPoint { x: 7 * 128 + 16, y: 4 * 128 + 64 }]);
    assert_eq!(PatrolRoute::new(path).target(), WorldPoint { x: 912, y: 576 });
}

#[test]
fn test_longest_paths_reach_the_requested_length_when_possible() {
    let level = Level::for_run(600, 1);
    let grid = level.grid();
    let start = Pos { y: 0, x: 0 };
    let farthest = reachable_distances(grid, 0, start).into_values().max().unwrap_or(0);

    for desired in 0..=farthest {
        let paths = longest_paths(grid, 0, start, desired);
        assert!(paths.iter().all(|path| path.len() == desired + 1), "desired {desired}");
    }
}
