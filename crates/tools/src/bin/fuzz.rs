use anyhow::{Context, Result};
use clap::Parser;
use maze_core::{Level, LevelConfig, Pos};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};
use tools::{check_maze, check_navigation};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 500)]
    cases: u32,
}

fn pick(rng: &mut ChaCha8Rng, low: usize, high: usize) -> usize {
    low + rng.next_u64() as usize % (high - low + 1)
}

fn random_config(rng: &mut ChaCha8Rng) -> LevelConfig {
    let layers = pick(rng, 1, 4);
    LevelConfig {
        width: pick(rng, 1, 16),
        height: pick(rng, 2, 16),
        layers,
        max_cross_layer_edges: layers - 1 + pick(rng, 0, 12),
        min_lateral_run: pick(rng, 0, 4),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    println!("Starting maze fuzz harness on seed {} for {} cases...", args.seed, args.cases);
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    for case in 0..args.cases {
        let config = random_config(&mut rng);
        let run_seed = rng.next_u64();
        let level = Level::build(&config, run_seed, case);
        let context = || format!("case {case}: run seed {run_seed}, {config:?}");

        check_maze(level.grid(), &config).with_context(context)?;

        let layer = pick(&mut rng, 0, config.layers - 1);
        let y = pick(&mut rng, 0, config.height - 1);
        let x = pick(&mut rng, 0, config.width - 1);
        let patrol_length = pick(&mut rng, 0, 12);
        check_navigation(&level, layer, Pos { y, x }, patrol_length).with_context(context)?;
    }

    println!("Fuzzing completed successfully.");
    Ok(())
}
