use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum CellState {
    Wall,
    Open,
    Entry,
    Exit,
}

impl CellState {
    /// Entry and Exit are markers stamped onto open cells after analysis,
    /// so walkability treats them as open space.
    pub fn is_walkable(self) -> bool {
        self != Self::Wall
    }
}

/// Describes why a generation run was aborted. A failed run leaves no
/// partially built map behind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MapGenError {
    /// Either axis is too small to hold a bordered interior worth carving.
    InvalidDimensions { width: usize, height: usize },
    /// Fill percent must stay within 0..=100.
    InvalidFillPercent { value: u32 },
    /// Pruning removed every open region, so no main cavern exists.
    EmptyMap,
    /// No exit cell satisfies the warp distance constraint, even relaxed.
    NoWarpCandidate,
}

impl fmt::Display for MapGenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimensions { width, height } => {
                write!(f, "map dimensions {width}x{height} leave no usable interior")
            }
            Self::InvalidFillPercent { value } => {
                write!(f, "random fill percent {value} is outside 0..=100")
            }
            Self::EmptyMap => write!(f, "no open region survived pruning"),
            Self::NoWarpCandidate => {
                write!(f, "no reachable cell satisfies the warp distance constraint")
            }
        }
    }
}
