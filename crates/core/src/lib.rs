pub mod config;
pub mod mapgen;
pub mod types;

pub use config::MapConfig;
pub use mapgen::{GeneratedMap, MapGenerator, generate_map};
pub use types::*;
