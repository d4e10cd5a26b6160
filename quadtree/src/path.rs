//! Board coordinates to quadtree paths

use std::error::Error;
use std::fmt::Display;
use std::ops::Deref;

use itertools::Itertools;

use crate::Direction;

/// cells along one side of the board
pub const BOARD_WIDTH: i32 = 8;

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
/// The directions to take from the root of a tree to reach a single cell
///
/// Always exactly [`Path::LEN`] long, so a path can't stop short of a leaf.
pub struct Path([Direction; Path::LEN]);
impl Path {
    pub const LEN: usize = 3;

    pub const fn new(directions: [Direction; Path::LEN]) -> Self {
        Self(directions)
    }
    /// path to a 0 based board cell, same as `encode(x + 1, y + 1)`
    pub fn from_board(x: u8, y: u8) -> Result<Self, OutOfRange> {
        encode(i32::from(x) + 1, i32::from(y) + 1)
    }
    pub fn directions(&self) -> [Direction; Path::LEN] {
        self.0
    }
    /// the first `len` directions, all of them if `len` is too large
    pub fn prefix(&self, len: usize) -> &[Direction] {
        &self.0[..len.min(Path::LEN)]
    }
}
impl Deref for Path {
    type Target = [Direction];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl From<[Direction; Path::LEN]> for Path {
    fn from(directions: [Direction; Path::LEN]) -> Self {
        Self(directions)
    }
}
impl Display for Path {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.iter().join(","))
    }
}

/// Converts a 1 based board coordinate (1-8 for both axes, x is A-H) into a path
///
/// Each level compares against the middle of the current quadrant and halves it.
/// Going north-east resets the y offset to 0 rather than keeping it,
/// so (3,5)/(3,6), (4,5)/(4,6), (7,5)/(7,6) and (8,5)/(8,6) share a path.
pub fn encode(x: i32, y: i32) -> Result<Path, OutOfRange> {
    if x < 1 || x > BOARD_WIDTH || y < 1 || y > BOARD_WIDTH {
        return Err(OutOfRange { x, y });
    }
    let mut size = BOARD_WIDTH / 2;
    let mut offset_x = 0;
    let mut offset_y = 0;
    let directions = std::array::from_fn(|_| {
        let east = x > size + offset_x;
        let south = y > size + offset_y;
        let direction = match (east, south) {
            (false, false) => Direction::NorthWest,
            (true, false) => {
                offset_x += size;
                offset_y = 0;
                Direction::NorthEast
            }
            (true, true) => {
                offset_x += size;
                offset_y += size;
                Direction::SouthEast
            }
            (false, true) => {
                offset_y += size;
                Direction::SouthWest
            }
        };
        size /= 2;
        direction
    });
    debug_assert_eq!(size, 0, "board width must be 2^Path::LEN");
    Ok(Path(directions))
}

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct OutOfRange {
    pub x: i32,
    pub y: i32,
}
impl Display for OutOfRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self { x, y } = self;
        write!(
            f,
            "board position {x},{y} is outside of 1..={BOARD_WIDTH} x 1..={BOARD_WIDTH}"
        )
    }
}
impl Error for OutOfRange {}
