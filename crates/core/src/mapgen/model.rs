//! Public data model for a generated cave map.

use xxhash_rust::xxh3::xxh3_64;

use crate::types::{CellState, Pos};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratedMap {
    pub width: usize,
    pub height: usize,
    /// Row-major cell states, exactly `width * height` entries.
    pub cells: Vec<CellState>,
    pub entry: Pos,
    pub exit: Pos,
}

impl GeneratedMap {
    /// Stable little-endian encoding of the full map. Two runs with the same
    /// configuration must produce identical bytes.
    pub fn canonical_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();
        bytes.extend((self.width as u32).to_le_bytes());
        bytes.extend((self.height as u32).to_le_bytes());
        for cell in &self.cells {
            bytes.push(match cell {
                CellState::Wall => 0,
                CellState::Open => 1,
                CellState::Entry => 2,
                CellState::Exit => 3,
            });
        }
        bytes.extend(self.entry.y.to_le_bytes());
        bytes.extend(self.entry.x.to_le_bytes());
        bytes.extend(self.exit.y.to_le_bytes());
        bytes.extend(self.exit.x.to_le_bytes());
        bytes
    }

    pub fn fingerprint(&self) -> u64 {
        xxh3_64(&self.canonical_bytes())
    }

    /// Out-of-bounds positions read as wall.
    pub fn cell_at(&self, pos: Pos) -> CellState {
        if pos.x < 0 || pos.y < 0 {
            return CellState::Wall;
        }
        let x = pos.x as usize;
        let y = pos.y as usize;
        if x >= self.width || y >= self.height {
            return CellState::Wall;
        }
        self.cells[y * self.width + x]
    }
}
