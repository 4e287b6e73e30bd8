//! Caller-facing generation options, validated once at generation entry.

use serde::{Deserialize, Serialize};

use crate::types::MapGenError;

/// Smallest axis that still leaves a bordered interior worth carving.
pub const MIN_MAP_AXIS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: usize,
    pub height: usize,
    pub seed: u64,
    /// Probability (0..=100) that an interior cell starts as wall.
    pub random_fill_percent: u32,
    pub smoothing_iterations: u32,
    /// Wall regions smaller than this are reclassified to open space.
    pub wall_region_threshold: usize,
    /// Open regions smaller than this are reclassified to wall.
    pub room_region_threshold: usize,
    /// Radius of the circular brush used when carving connecting passages.
    pub passage_brush_radius: u32,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: 64,
            height: 48,
            seed: 0,
            random_fill_percent: 45,
            smoothing_iterations: 5,
            wall_region_threshold: 50,
            room_region_threshold: 50,
            passage_brush_radius: 2,
        }
    }
}

impl MapConfig {
    pub fn validate(&self) -> Result<(), MapGenError> {
        if self.width < MIN_MAP_AXIS || self.height < MIN_MAP_AXIS {
            return Err(MapGenError::InvalidDimensions { width: self.width, height: self.height });
        }
        if self.random_fill_percent > 100 {
            return Err(MapGenError::InvalidFillPercent { value: self.random_fill_percent });
        }
        Ok(())
    }
}
