//! Seed-sweep harness: generates a run of consecutive seeds and checks the
//! connectivity contract on every map that completes.

use anyhow::Result;
use cavegen_core::{GeneratedMap, MapConfig, MapGenError, Pos, generate_map};
use clap::Parser;
use std::collections::{BTreeSet, VecDeque};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// First seed of the sweep
    #[arg(long, default_value_t = 0)]
    start: u64,
    /// Number of consecutive seeds to generate
    #[arg(short, long, default_value_t = 100)]
    seeds: u64,
    #[arg(long, default_value_t = 64)]
    width: usize,
    #[arg(long, default_value_t = 48)]
    height: usize,
}

fn main() -> Result<()> {
    let args = Args::parse();
    println!(
        "Sweeping {} seeds from {} on a {}x{} map...",
        args.seeds, args.start, args.width, args.height
    );

    let mut generated = 0_usize;
    let mut empty = 0_usize;
    let mut no_warp = 0_usize;

    for seed in args.start..args.start + args.seeds {
        let config =
            MapConfig { width: args.width, height: args.height, seed, ..MapConfig::default() };
        match generate_map(&config) {
            Ok(map) => {
                if !all_open_cells_connected(&map) {
                    anyhow::bail!("seed {seed} produced a disconnected map");
                }
                generated += 1;
            }
            Err(MapGenError::EmptyMap) => empty += 1,
            Err(MapGenError::NoWarpCandidate) => no_warp += 1,
            Err(other) => anyhow::bail!("seed {seed} failed unexpectedly: {other}"),
        }
    }

    println!("Generated: {generated}");
    println!("Empty maps: {empty}");
    println!("No warp candidate: {no_warp}");
    Ok(())
}

fn all_open_cells_connected(map: &GeneratedMap) -> bool {
    let mut open = Vec::new();
    for y in 0..map.height {
        for x in 0..map.width {
            let pos = Pos { y: y as i32, x: x as i32 };
            if map.cell_at(pos).is_walkable() {
                open.push(pos);
            }
        }
    }

    let Some(&start) = open.first() else {
        return true;
    };

    let mut seen = BTreeSet::from([start]);
    let mut queue = VecDeque::from([start]);
    while let Some(pos) = queue.pop_front() {
        for next in [
            Pos { y: pos.y - 1, x: pos.x },
            Pos { y: pos.y, x: pos.x + 1 },
            Pos { y: pos.y + 1, x: pos.x },
            Pos { y: pos.y, x: pos.x - 1 },
        ] {
            if !map.cell_at(next).is_walkable() || seen.contains(&next) {
                continue;
            }
            seen.insert(next);
            queue.push_back(next);
        }
    }
    seen.len() == open.len()
}
