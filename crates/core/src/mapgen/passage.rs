//! Line rasterization and the circular brush that carves passages.

use super::grid::Grid;
use crate::types::{CellState, Pos};

/// Integer incremental rasterization between two cells. Steps one cell per
/// iteration along the major axis, accumulating error on the minor axis.
/// Includes the start cell, excludes the endpoint, so the sequence length is
/// max(|dx|, |dy|) and tracing a cell to itself yields nothing.
pub(super) fn trace_line(from: Pos, to: Pos) -> Vec<Pos> {
    let mut line = Vec::new();

    let mut x = from.x;
    let mut y = from.y;
    let dx = to.x - from.x;
    let dy = to.y - from.y;

    let mut step = dx.signum();
    let mut gradient_step = dy.signum();
    let mut longest = dx.abs();
    let mut shortest = dy.abs();

    let inverted = longest < shortest;
    if inverted {
        std::mem::swap(&mut longest, &mut shortest);
        std::mem::swap(&mut step, &mut gradient_step);
    }

    let mut gradient_accumulation = longest / 2;
    for _ in 0..longest {
        line.push(Pos { y, x });
        if inverted {
            y += step;
        } else {
            x += step;
        }
        gradient_accumulation += shortest;
        if gradient_accumulation >= longest {
            if inverted {
                x += gradient_step;
            } else {
                y += gradient_step;
            }
            gradient_accumulation -= longest;
        }
    }
    line
}

/// Stamps a filled disk of the brush radius onto every cell of the line,
/// opening a tunnel roughly 2r+1 cells wide between the endpoints.
pub(super) fn carve_passage(grid: &mut Grid, from: Pos, to: Pos, radius: i32) {
    for pos in trace_line(from, to) {
        carve_disk(grid, pos, radius);
    }
}

fn carve_disk(grid: &mut Grid, center: Pos, radius: i32) {
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dx * dx + dy * dy > radius * radius {
                continue;
            }
            let target = Pos { y: center.y + dy, x: center.x + dx };
            if grid.in_bounds(target) {
                grid.set(target, CellState::Open);
            }
        }
    }
}
