use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use maze_core::Level;
use maze_core::maze::{STARTING_LEVEL_INDEX, level_config};
use tools::{LevelSummary, load_config, render_layer};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run seed the level is derived from
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Level index; also picks the size schedule unless --config is given
    #[arg(short, long, default_value_t = STARTING_LEVEL_INDEX)]
    level: u32,
    /// TOML file overriding the level size and cross-layer budget
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Print every layer as text
    #[arg(long)]
    ascii: bool,
    /// Print the collision geometry as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => level_config(args.level),
    };
    let level = Level::build(&config, args.seed, args.level);
    let summary = LevelSummary::of(&level);

    println!("Level {} (seed {})", summary.level_index, args.seed);
    println!("Size: {}x{}x{}", summary.width, summary.height, summary.layers);
    println!("Edges: {}", summary.edges);
    println!("Pads: {}", summary.pads);
    println!("Dead ends per layer: {:?}", summary.dead_ends);
    println!("Fingerprint: {}", summary.fingerprint);

    if args.ascii {
        for layer in 0..level.grid().layers() {
            println!("\nLayer {layer}");
            print!("{}", render_layer(level.grid(), layer));
        }
    }

    if args.json {
        let json = serde_json::to_string_pretty(level.geometry())
            .with_context(|| "Failed to serialize level geometry")?;
        println!("{json}");
    }

    Ok(())
}
