//! Raw types to name indicies to what would otherwise be fixed length arrays

use std::fmt::Display;
use std::iter::FusedIterator;
use std::ops::{Index, IndexMut};

/// One of the four quadrants of a square region
///
/// The order of the variants is part of the path encoding,
/// `index` and `iter_all` both follow it.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Direction {
    NorthWest,
    NorthEast,
    SouthEast,
    SouthWest,
}
impl Direction {
    pub const ALL: [Direction; 4] = [
        Self::NorthWest,
        Self::NorthEast,
        Self::SouthEast,
        Self::SouthWest,
    ];

    pub fn index(self) -> usize {
        self as usize
    }
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    pub fn is_north(self) -> bool {
        matches!(self, Self::NorthWest | Self::NorthEast)
    }
    pub fn is_west(self) -> bool {
        matches!(self, Self::NorthWest | Self::SouthWest)
    }

    pub fn abbreviation(self) -> &'static str {
        match self {
            Self::NorthWest => "NW",
            Self::NorthEast => "NE",
            Self::SouthEast => "SE",
            Self::SouthWest => "SW",
        }
    }

    /// case insensitive, accepts the abbreviation or the direction index
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "nw" | "northwest" | "0" => Some(Self::NorthWest),
            "ne" | "northeast" | "1" => Some(Self::NorthEast),
            "se" | "southeast" | "2" => Some(Self::SouthEast),
            "sw" | "southwest" | "3" => Some(Self::SouthWest),
            _ => None,
        }
    }

    pub fn iter_all() -> impl ExactSizeIterator<Item = Direction> + FusedIterator {
        DirectionIter::new()
    }
}
impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.abbreviation())
    }
}

struct DirectionIter {
    next: Option<Direction>,
}
impl DirectionIter {
    fn new() -> Self {
        DirectionIter {
            next: Some(Direction::NorthWest),
        }
    }
}
impl Iterator for DirectionIter {
    type Item = Direction;

    fn next(&mut self) -> Option<Self::Item> {
        let curr = self.next;
        let next = match curr {
            Some(Direction::NorthWest) => Some(Direction::NorthEast),
            Some(Direction::NorthEast) => Some(Direction::SouthEast),
            Some(Direction::SouthEast) => Some(Direction::SouthWest),
            _ => None,
        };
        self.next = next;
        curr
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.len();
        (size, Some(size))
    }
}
impl FusedIterator for DirectionIter {}
impl ExactSizeIterator for DirectionIter {
    fn len(&self) -> usize {
        match self.next {
            Some(Direction::NorthWest) => 4,
            Some(Direction::NorthEast) => 3,
            Some(Direction::SouthEast) => 2,
            Some(Direction::SouthWest) => 1,
            None => 0,
        }
    }
}

/// Four values, one per [`Direction`]
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Quad<T> {
    pub nw: T,
    pub ne: T,
    pub se: T,
    pub sw: T,
}
impl<T> Quad<T> {
    pub fn from_fn(mut f: impl FnMut(Direction) -> T) -> Self {
        Quad {
            nw: f(Direction::NorthWest),
            ne: f(Direction::NorthEast),
            se: f(Direction::SouthEast),
            sw: f(Direction::SouthWest),
        }
    }
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Direction::iter_all().map(|d| &self[d])
    }
    pub fn iter_dirs(&self) -> impl Iterator<Item = (Direction, &T)> {
        Direction::iter_all().map(|d| (d, &self[d]))
    }
}
impl<T> IntoIterator for Quad<T> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, 4>;
    fn into_iter(self) -> Self::IntoIter {
        [self.nw, self.ne, self.se, self.sw].into_iter()
    }
}
impl<T> Index<Direction> for Quad<T> {
    type Output = T;
    fn index(&self, index: Direction) -> &Self::Output {
        match index {
            Direction::NorthWest => &self.nw,
            Direction::NorthEast => &self.ne,
            Direction::SouthEast => &self.se,
            Direction::SouthWest => &self.sw,
        }
    }
}
impl<T> IndexMut<Direction> for Quad<T> {
    fn index_mut(&mut self, index: Direction) -> &mut Self::Output {
        match index {
            Direction::NorthWest => &mut self.nw,
            Direction::NorthEast => &mut self.ne,
            Direction::SouthEast => &mut self.se,
            Direction::SouthWest => &mut self.sw,
        }
    }
}
