//! Cellular-automaton relaxation that turns noise into organic caverns.

use super::grid::Grid;
use crate::types::{CellState, Pos};

/// Majority rule over the 8-neighbourhood: more than four wall neighbours
/// turns a cell to wall, fewer than four turns it open, exactly four leaves
/// it as-is. Cells beyond the map edge count as wall.
pub(super) fn smooth(grid: Grid, iterations: u32) -> Grid {
    let mut current = grid;
    for _ in 0..iterations {
        current = smooth_once(&current);
    }
    current
}

/// Every cell is decided from the same read-only snapshot of the previous
/// pass; writes go to a fresh buffer so scan order cannot leak into results.
fn smooth_once(snapshot: &Grid) -> Grid {
    let mut next = snapshot.clone();
    for pos in snapshot.positions() {
        let walls = surrounding_wall_count(snapshot, pos);
        if walls > 4 {
            next.set(pos, CellState::Wall);
        } else if walls < 4 {
            next.set(pos, CellState::Open);
        }
    }
    next
}

fn surrounding_wall_count(grid: &Grid, pos: Pos) -> u32 {
    let mut count = 0;
    for dy in -1..=1 {
        for dx in -1..=1 {
            if dy == 0 && dx == 0 {
                continue;
            }
            let neighbour = Pos { y: pos.y + dy, x: pos.x + dx };
            if grid.get_or_wall(neighbour) == CellState::Wall {
                count += 1;
            }
        }
    }
    count
}
