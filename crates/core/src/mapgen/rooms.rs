//! Room table construction and the passage network that links every room to
//! the main cavern.

use std::collections::{BTreeSet, VecDeque};

use super::grid::{Grid, ORTHOGONAL_STEPS, squared_distance};
use super::passage::carve_passage;
use super::regions::Region;
use crate::types::{CellState, Pos};

/// A surviving open region promoted to a connectivity-graph node. Rooms are
/// addressed by index into the room table; `connections` holds peer indices
/// rather than references, so the graph carries no ownership cycles.
pub(super) struct Room {
    pub(super) tiles: Vec<Pos>,
    /// Member tiles with at least one orthogonal wall neighbour; passage
    /// endpoints are chosen among these. Each tile appears once even when
    /// walled on several sides.
    pub(super) edge_tiles: Vec<Pos>,
    pub(super) connections: BTreeSet<usize>,
    pub(super) is_main: bool,
    pub(super) accessible_from_main: bool,
}

impl Room {
    fn from_region(grid: &Grid, tiles: Region) -> Self {
        let edge_tiles = tiles
            .iter()
            .copied()
            .filter(|&tile| {
                ORTHOGONAL_STEPS.iter().any(|&(dy, dx)| {
                    grid.get_or_wall(Pos { y: tile.y + dy, x: tile.x + dx }) == CellState::Wall
                })
            })
            .collect();
        Self {
            tiles,
            edge_tiles,
            connections: BTreeSet::new(),
            is_main: false,
            accessible_from_main: false,
        }
    }

    pub(super) fn size(&self) -> usize {
        self.tiles.len()
    }
}

/// Builds the room table from surviving open regions, largest room first.
/// The sort is stable, so equally sized rooms keep their extraction order
/// and the main-room choice stays deterministic.
pub(super) fn build_rooms(grid: &Grid, regions: Vec<Region>) -> Vec<Room> {
    let mut rooms: Vec<Room> =
        regions.into_iter().map(|region| Room::from_region(grid, region)).collect();
    rooms.sort_by(|a, b| b.size().cmp(&a.size()));
    if let Some(main_room) = rooms.first_mut() {
        main_room.is_main = true;
        main_room.accessible_from_main = true;
    }
    rooms
}

/// Guarantees every room is reachable from the main room.
///
/// Two passes. The pairwise pass gives each still-isolated room a passage to
/// its nearest neighbour. The main-flood pass then repeatedly joins the
/// closest inaccessible/accessible room pair until no room is cut off; the
/// pairwise pass alone cannot promise that every cluster touches main.
pub(super) fn connect_rooms(rooms: &mut [Room], grid: &mut Grid, brush_radius: i32) {
    debug_assert!(
        rooms.is_empty() || rooms.iter().filter(|room| room.is_main).count() == 1,
        "room table must carry exactly one main room"
    );

    for room_index in 0..rooms.len() {
        if !rooms[room_index].connections.is_empty() {
            continue;
        }
        let others: Vec<usize> = (0..rooms.len()).filter(|&other| other != room_index).collect();
        if let Some(pick) = closest_edge_pair(rooms, &[room_index], &others) {
            join_rooms(rooms, grid, pick, brush_radius);
        }
    }

    loop {
        let inaccessible: Vec<usize> =
            (0..rooms.len()).filter(|&index| !rooms[index].accessible_from_main).collect();
        if inaccessible.is_empty() {
            break;
        }
        let accessible: Vec<usize> =
            (0..rooms.len()).filter(|&index| rooms[index].accessible_from_main).collect();
        let Some(pick) = closest_edge_pair(rooms, &inaccessible, &accessible) else {
            break;
        };
        join_rooms(rooms, grid, pick, brush_radius);
    }
}

struct PassagePick {
    room_a: usize,
    room_b: usize,
    tile_a: Pos,
    tile_b: Pos,
}

/// Globally closest edge-tile pair between the two candidate sets, by
/// squared Euclidean distance. Strictly-smaller comparison keeps the first
/// pair found in scan order, which pins tie-breaks for determinism.
fn closest_edge_pair(rooms: &[Room], from: &[usize], to: &[usize]) -> Option<PassagePick> {
    let mut best: Option<(i64, PassagePick)> = None;
    for &room_a in from {
        for &room_b in to {
            if room_a == room_b || rooms[room_a].connections.contains(&room_b) {
                continue;
            }
            for &tile_a in &rooms[room_a].edge_tiles {
                for &tile_b in &rooms[room_b].edge_tiles {
                    let distance = squared_distance(tile_a, tile_b);
                    if best.as_ref().is_none_or(|&(best_distance, _)| distance < best_distance) {
                        best = Some((distance, PassagePick { room_a, room_b, tile_a, tile_b }));
                    }
                }
            }
        }
    }
    best.map(|(_, pick)| pick)
}

fn join_rooms(rooms: &mut [Room], grid: &mut Grid, pick: PassagePick, brush_radius: i32) {
    carve_passage(grid, pick.tile_a, pick.tile_b, brush_radius);

    rooms[pick.room_a].connections.insert(pick.room_b);
    rooms[pick.room_b].connections.insert(pick.room_a);

    if rooms[pick.room_a].accessible_from_main {
        mark_accessible(rooms, pick.room_b);
    } else if rooms[pick.room_b].accessible_from_main {
        mark_accessible(rooms, pick.room_a);
    }
}

/// Worklist flood over the connection graph; only not-yet-marked rooms are
/// enqueued, so cycles terminate and the stack stays flat no matter how
/// large the graph grows.
fn mark_accessible(rooms: &mut [Room], start: usize) {
    let mut queue = VecDeque::from([start]);
    while let Some(index) = queue.pop_front() {
        if rooms[index].accessible_from_main {
            continue;
        }
        rooms[index].accessible_from_main = true;
        for &neighbour in &rooms[index].connections {
            if !rooms[neighbour].accessible_from_main {
                queue.push_back(neighbour);
            }
        }
    }
}
