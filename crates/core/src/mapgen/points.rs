//! Entry and warp-exit placement inside the final connected open space.

use std::collections::VecDeque;

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::Rng;

use super::grid::{Grid, ORTHOGONAL_STEPS, squared_distance};
use crate::types::{CellState, MapGenError, Pos};

/// Fraction of the longer map axis that the exit must sit away from the
/// entry.
const WARP_RADIUS_FACTOR: f64 = 0.55;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct PlacedPoints {
    pub(super) entry: Pos,
    pub(super) exit: Pos,
}

/// Picks the entry uniformly from the open component found by a row-major
/// seeded flood, then the exit uniformly from the reachable cells at warp
/// distance. A map whose open space offers no cell at that distance fails
/// with `NoWarpCandidate` rather than degrading the constraint; the caller
/// decides whether to regenerate with another seed. The grid is only marked
/// once both picks succeeded.
pub(super) fn place_points(
    grid: &mut Grid,
    rng: &mut ChaCha8Rng,
) -> Result<PlacedPoints, MapGenError> {
    let reachable = reachable_open_cells(grid);
    if reachable.is_empty() {
        return Err(MapGenError::NoWarpCandidate);
    }

    let entry = reachable[(rng.next_u64() % reachable.len() as u64) as usize];

    let radius = WARP_RADIUS_FACTOR * grid.width().max(grid.height()) as f64;
    let threshold = radius * radius;
    let candidates: Vec<Pos> = reachable
        .iter()
        .copied()
        .filter(|&pos| squared_distance(entry, pos) as f64 >= threshold)
        .collect();
    if candidates.is_empty() {
        return Err(MapGenError::NoWarpCandidate);
    }
    let exit = candidates[(rng.next_u64() % candidates.len() as u64) as usize];

    grid.set(entry, CellState::Entry);
    grid.set(exit, CellState::Exit);
    Ok(PlacedPoints { entry, exit })
}

/// 4-connected flood from the first open cell in row-major order. When the
/// connectivity phase upheld its guarantee this enumerates every open cell
/// in the grid.
fn reachable_open_cells(grid: &Grid) -> Vec<Pos> {
    let Some(seed) = grid.positions().find(|&pos| grid.get(pos) == CellState::Open) else {
        return Vec::new();
    };

    let mut visited = vec![false; grid.width() * grid.height()];
    let mut reachable = Vec::new();
    let mut queue = VecDeque::from([seed]);
    visited[(seed.y as usize) * grid.width() + (seed.x as usize)] = true;

    while let Some(pos) = queue.pop_front() {
        reachable.push(pos);
        for (dy, dx) in ORTHOGONAL_STEPS {
            let next = Pos { y: pos.y + dy, x: pos.x + dx };
            if !grid.in_bounds(next) || grid.get(next) != CellState::Open {
                continue;
            }
            let index = (next.y as usize) * grid.width() + (next.x as usize);
            if visited[index] {
                continue;
            }
            visited[index] = true;
            queue.push_back(next);
        }
    }
    reachable
}
