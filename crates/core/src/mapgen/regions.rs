//! Connected-region analysis: extraction and small-region pruning.

use std::collections::VecDeque;

use super::grid::{Grid, ORTHOGONAL_STEPS};
use crate::types::{CellState, Pos};

/// Maximal 4-connected component of same-state cells. Transient analysis
/// artifact, recomputed whenever a pass needs it.
pub(super) type Region = Vec<Pos>;

/// Every cell of the target state lands in exactly one region. Seeds are
/// scanned row-major so the region order is deterministic for a fixed grid.
pub(super) fn extract_regions(grid: &Grid, target: CellState) -> Vec<Region> {
    let mut visited = vec![false; grid.width() * grid.height()];
    let mut regions = Vec::new();

    for pos in grid.positions() {
        let index = (pos.y as usize) * grid.width() + (pos.x as usize);
        if visited[index] || grid.get(pos) != target {
            continue;
        }
        regions.push(flood_region(grid, target, pos, &mut visited));
    }
    regions
}

fn flood_region(grid: &Grid, target: CellState, seed: Pos, visited: &mut [bool]) -> Region {
    let mut region = Vec::new();
    let mut queue = VecDeque::from([seed]);
    visited[(seed.y as usize) * grid.width() + (seed.x as usize)] = true;

    while let Some(pos) = queue.pop_front() {
        region.push(pos);
        for (dy, dx) in ORTHOGONAL_STEPS {
            let next = Pos { y: pos.y + dy, x: pos.x + dx };
            if !grid.in_bounds(next) || grid.get(next) != target {
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
    region
}

/// Reclassifies undersized regions into the opposite state. The wall pass is
/// fully applied before open regions are extracted, because dissolving small
/// wall pockets changes which cells can join an open region.
pub(super) fn prune_regions(
    mut grid: Grid,
    wall_threshold: usize,
    room_threshold: usize,
) -> (Grid, Vec<Region>) {
    for region in extract_regions(&grid, CellState::Wall) {
        if region.len() < wall_threshold {
            for pos in region {
                grid.set(pos, CellState::Open);
            }
        }
    }

    let mut surviving = Vec::new();
    for region in extract_regions(&grid, CellState::Open) {
        if region.len() < room_threshold {
            for pos in region {
                grid.set(pos, CellState::Wall);
            }
        } else {
            surviving.push(region);
        }
    }
    (grid, surviving)
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use super::*;

    fn open_cells(grid: &mut Grid, cells: &[(i32, i32)]) {
        for &(y, x) in cells {
            grid.set(Pos { y, x }, CellState::Open);
        }
    }

    #[test]
    fn regions_partition_the_cells_of_the_queried_state() {
        let mut grid = Grid::filled(7, 5, CellState::Wall);
        // Two open pockets separated by a wall column, plus a lone cell.
        open_cells(&mut grid, &[(1, 1), (1, 2), (2, 1), (2, 2), (1, 4), (2, 4), (3, 6)]);

        let regions = extract_regions(&grid, CellState::Open);
        assert_eq!(regions.len(), 3);

        let mut union = BTreeSet::new();
        let mut total = 0;
        for region in &regions {
            total += region.len();
            union.extend(region.iter().copied());
        }
        assert_eq!(total, union.len(), "regions must be pairwise disjoint");

        let open_count = grid.positions().filter(|&p| grid.get(p) == CellState::Open).count();
        assert_eq!(union.len(), open_count, "regions must cover every open cell");
        assert!(union.iter().all(|&p| grid.get(p) == CellState::Open));
    }

    #[test]
    fn diagonal_contact_does_not_merge_regions() {
        let mut grid = Grid::filled(5, 5, CellState::Wall);
        open_cells(&mut grid, &[(1, 1), (2, 2)]);
        assert_eq!(extract_regions(&grid, CellState::Open).len(), 2);
    }

    #[test]
    fn small_wall_pockets_dissolve_into_open_space() {
        let mut grid = Grid::filled(8, 8, CellState::Wall);
        for y in 1..7 {
            for x in 1..7 {
                grid.set(Pos { y, x }, CellState::Open);
            }
        }
        // A 2x2 wall island inside the open interior.
        for &(y, x) in &[(3, 3), (3, 4), (4, 3), (4, 4)] {
            grid.set(Pos { y, x }, CellState::Wall);
        }

        let (pruned, surviving) = prune_regions(grid, 5, 5);
        assert_eq!(pruned.get(Pos { y: 3, x: 3 }), CellState::Open);
        assert_eq!(pruned.get(Pos { y: 4, x: 4 }), CellState::Open);
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].len(), 36);
    }

    #[test]
    fn small_open_pockets_fill_back_in() {
        let mut grid = Grid::filled(9, 5, CellState::Wall);
        // A large pocket (6 cells) and a small one (2 cells).
        open_cells(&mut grid, &[(1, 1), (1, 2), (1, 3), (2, 1), (2, 2), (2, 3)]);
        open_cells(&mut grid, &[(1, 6), (1, 7)]);

        let (pruned, surviving) = prune_regions(grid, 1, 4);
        assert_eq!(pruned.get(Pos { y: 1, x: 6 }), CellState::Wall);
        assert_eq!(pruned.get(Pos { y: 1, x: 7 }), CellState::Wall);
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].len(), 6);
        assert!(surviving.iter().all(|region| region.len() >= 4));
    }

    #[test]
    fn wall_pass_applies_before_the_open_pass() {
        // An 8-cell wall ring isolates the centre cell from the outer open
        // area. Dissolving the ring first merges everything into one 25-cell
        // region that clears the room threshold; an open-first order would
        // have seen a 16-cell and a 1-cell region and culled both.
        let mut grid = Grid::filled(7, 7, CellState::Wall);
        for y in 1..6 {
            for x in 1..6 {
                grid.set(Pos { y, x }, CellState::Open);
            }
        }
        for &(y, x) in &[(2, 2), (2, 3), (2, 4), (3, 2), (3, 4), (4, 2), (4, 3), (4, 4)] {
            grid.set(Pos { y, x }, CellState::Wall);
        }

        let (pruned, surviving) = prune_regions(grid, 9, 20);
        assert_eq!(pruned.get(Pos { y: 2, x: 3 }), CellState::Open);
        assert_eq!(pruned.get(Pos { y: 3, x: 3 }), CellState::Open);
        assert_eq!(surviving.len(), 1);
        assert_eq!(surviving[0].len(), 25);
    }
}
