//! Cave generation pipeline split into coherent submodules.

pub mod model;

mod generator;
mod grid;
mod noise;
mod passage;
mod points;
mod regions;
mod rooms;
mod smooth;

pub use generator::MapGenerator;
pub use model::GeneratedMap;

use crate::config::MapConfig;
use crate::types::MapGenError;

pub fn generate_map(config: &MapConfig) -> Result<GeneratedMap, MapGenError> {
    MapGenerator::new(*config).generate()
}
