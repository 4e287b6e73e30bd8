//! Seeded noise fill that produces the initial bordered wall/open grid.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::grid::Grid;
use crate::types::{CellState, Pos};

/// One draw per interior cell in row-major order, so a given seed always
/// lands the same noise on the same cells. The border ring stays wall.
pub(super) fn random_fill(
    width: usize,
    height: usize,
    fill_percent: u32,
    rng: &mut ChaCha8Rng,
) -> Grid {
    let mut grid = Grid::filled(width, height, CellState::Wall);
    for y in 1..(height - 1) {
        for x in 1..(width - 1) {
            let roll = (rng.next_u64() % 100) as u32;
            let state = if roll < fill_percent { CellState::Wall } else { CellState::Open };
            grid.set(Pos { y: y as i32, x: x as i32 }, state);
        }
    }
    grid
}
