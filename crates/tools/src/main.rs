use anyhow::{Context, Result};
use cavegen_core::{MapConfig, generate_map};
use clap::Parser;
use std::fs;

mod render;
mod seed;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON map configuration file; missing fields use defaults
    #[arg(short, long)]
    config: Option<String>,
    /// Deterministic seed; overrides the config file
    #[arg(long)]
    seed: Option<u64>,
    /// Derive a fresh time-based seed instead of the configured one
    #[arg(long, default_value_t = false)]
    random_seed: bool,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Interior wall fill percent (0-100)
    #[arg(long)]
    fill: Option<u32>,
    /// Number of smoothing iterations
    #[arg(long)]
    smooth: Option<u32>,
    /// Minimum size for a wall region to survive pruning
    #[arg(long)]
    wall_threshold: Option<usize>,
    /// Minimum size for an open region to survive pruning
    #[arg(long)]
    room_threshold: Option<usize>,
    /// Radius of the passage-carving brush
    #[arg(long)]
    brush: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => {
            let data = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {path}"))?;
            serde_json::from_str(&data).with_context(|| "Failed to deserialize config JSON")?
        }
        None => MapConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(fill) = args.fill {
        config.random_fill_percent = fill;
    }
    if let Some(smooth) = args.smooth {
        config.smoothing_iterations = smooth;
    }
    if let Some(wall_threshold) = args.wall_threshold {
        config.wall_region_threshold = wall_threshold;
    }
    if let Some(room_threshold) = args.room_threshold {
        config.room_region_threshold = room_threshold;
    }
    if let Some(brush) = args.brush {
        config.passage_brush_radius = brush;
    }
    if args.random_seed {
        config.seed = seed::generate_runtime_seed();
    } else if let Some(seed) = args.seed {
        config.seed = seed;
    }

    let map = generate_map(&config).map_err(|e| anyhow::anyhow!("Map generation failed: {e}"))?;

    print!("{}", render::ascii(&map));
    println!("Seed: {}", config.seed);
    println!("Entry: ({}, {})", map.entry.x, map.entry.y);
    println!("Exit: ({}, {})", map.exit.x, map.exit.y);
    println!("Fingerprint: {:016x}", map.fingerprint());

    Ok(())
}
