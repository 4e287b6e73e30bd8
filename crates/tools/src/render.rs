//! ASCII dump of a generated map for terminal inspection.

use cavegen_core::{CellState, GeneratedMap, Pos};

pub fn ascii(map: &GeneratedMap) -> String {
    let mut out = String::with_capacity((map.width + 1) * map.height);
    for y in 0..map.height {
        for x in 0..map.width {
            let cell = map.cell_at(Pos { y: y as i32, x: x as i32 });
            out.push(match cell {
                CellState::Wall => '#',
                CellState::Open => '.',
                CellState::Entry => '@',
                CellState::Exit => '>',
            });
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_one_row_per_grid_line_with_markers() {
        let map = GeneratedMap {
            width: 3,
            height: 2,
            cells: vec![
                CellState::Wall,
                CellState::Entry,
                CellState::Open,
                CellState::Open,
                CellState::Exit,
                CellState::Wall,
            ],
            entry: Pos { y: 0, x: 1 },
            exit: Pos { y: 1, x: 1 },
        };

        assert_eq!(ascii(&map), "#@.\n.>#\n");
    }
}
