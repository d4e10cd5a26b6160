//! Narrowing down the board one quadrant at a time

use tracing::trace;

use crate::{Direction, Item, Path, Tree, BOARD_WIDTH};

/// A square of board cells, 0 based
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Region {
    pub x: u8,
    pub y: u8,
    pub width: u8,
}
impl Region {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // BOARD_WIDTH is 8
    pub const BOARD: Self = Self {
        x: 0,
        y: 0,
        width: BOARD_WIDTH as u8,
    };

    /// the quarter of `self` in direction `dir`
    pub fn quadrant(self, dir: Direction) -> Self {
        let width = self.width / 2;
        Self {
            x: if dir.is_west() { self.x } else { self.x + width },
            y: if dir.is_north() { self.y } else { self.y + width },
            width,
        }
    }
    pub fn contains(self, x: u8, y: u8) -> bool {
        x >= self.x && y >= self.y && x < self.x + self.width && y < self.y + self.width
    }
}

/// What the border should show for the current search area
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Indicator<'t> {
    /// nothing inside, red border
    Vacant,
    /// something inside, green border
    Occupied,
    /// reached a leaf with an item in it
    Found(&'t Item),
}
impl Indicator<'_> {
    pub fn is_occupied(&self) -> bool {
        !matches!(self, Self::Vacant)
    }
}

/// The directions chosen so far while searching a tree
#[derive(Clone, Debug)]
pub struct Search<'t> {
    tree: &'t Tree,
    path: Vec<Direction>,
}
impl<'t> Search<'t> {
    pub fn new(tree: &'t Tree) -> Self {
        Self {
            tree,
            path: Vec::with_capacity(Path::LEN),
        }
    }
    pub fn tree(&self) -> &'t Tree {
        self.tree
    }
    pub fn depth(&self) -> usize {
        self.path.len()
    }
    pub fn path(&self) -> &[Direction] {
        &self.path
    }
    /// the border, which halves towards every chosen direction
    pub fn region(&self) -> Region {
        self.path
            .iter()
            .fold(Region::BOARD, |region, &dir| region.quadrant(dir))
    }

    /// steps down into `dir`, does nothing at the maximum depth
    pub fn push(&mut self, dir: Direction) -> Option<Indicator<'t>> {
        if self.path.len() >= Path::LEN {
            return None;
        }
        self.path.push(dir);
        trace!(path = ?self.path, "push");
        Some(self.indicator())
    }
    /// steps back up, does nothing at the root
    pub fn back(&mut self) -> Option<Indicator<'t>> {
        let dir = self.path.pop()?;
        trace!(path = ?self.path, back = %dir, "back");
        Some(self.indicator())
    }
    pub fn reset(&mut self) {
        self.path.clear();
    }

    pub fn indicator(&self) -> Indicator<'t> {
        // the whole board is searched without a path, which always has an item
        let path = (!self.path.is_empty()).then_some(self.path.as_slice());
        if !self.tree.contains_item(path) {
            return Indicator::Vacant;
        }
        match <[Direction; Path::LEN]>::try_from(self.path.as_slice()) {
            Ok(full) => self
                .tree
                .get(&Path::new(full))
                .map_or(Indicator::Occupied, Indicator::Found),
            Err(_) => Indicator::Occupied,
        }
    }
}
