use std::fmt::{Debug, Display};

use glam::Vec2;

use crate::path::{OutOfRange, Path};

/// The kinds of chess pieces that can be hidden on the board
///
/// The discriminant is the digit used in setup lines.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Piece {
    Pawn,
    Bishop,
    King,
    Queen,
    Knight,
    Rook,
}
impl Piece {
    pub const ALL: [Piece; 6] = [
        Self::Pawn,
        Self::Bishop,
        Self::King,
        Self::Queen,
        Self::Knight,
        Self::Rook,
    ];

    pub fn digit(self) -> u8 {
        self as u8
    }
    pub fn from_digit(digit: u8) -> Option<Self> {
        Self::ALL.get(usize::from(digit)).copied()
    }
    /// single letter used by boards in tests and the terminal
    pub fn symbol(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Bishop => 'B',
            Self::King => 'K',
            Self::Queen => 'Q',
            Self::Knight => 'N',
            Self::Rook => 'R',
        }
    }
    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|piece| piece.symbol() == symbol)
    }
}
impl Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Debug::fmt(self, f)
    }
}

/// Resolution of the screen the board is shown on, in px
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Screen {
    pub width: f32,
    pub height: f32,
}
impl Screen {
    // the board image covers a fixed fraction of the screen
    const BOARD_LEFT: f32 = 0.195;
    const BOARD_TOP: f32 = 0.8;
    const CELL_WIDTH: f32 = 0.0493;
    const CELL_HEIGHT: f32 = 0.0875;

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
    /// where a piece on the 0 based board cell is drawn
    ///
    /// (0,0) (A1) is the top left cell, y grows down the board but up the screen.
    pub fn cell_position(&self, x: u8, y: u8) -> Vec2 {
        let left = self.width * Screen::BOARD_LEFT;
        let top = self.height * Screen::BOARD_TOP;
        Vec2::new(
            left + self.width * Screen::CELL_WIDTH * f32::from(x),
            top - self.height * Screen::CELL_HEIGHT * f32::from(y),
        )
    }
}
impl Default for Screen {
    fn default() -> Self {
        Self::new(1920.0, 1080.0)
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
/// A piece placed on the board
///
/// Both the path and the display position are derived once from the board cell.
pub struct Item {
    piece: Piece,
    path: Path,
    position: Vec2,
}
impl Item {
    /// places `piece` on the 0 based board cell
    pub fn new(piece: Piece, x: u8, y: u8, screen: &Screen) -> Result<Self, OutOfRange> {
        Ok(Self {
            piece,
            path: Path::from_board(x, y)?,
            position: screen.cell_position(x, y),
        })
    }
    pub fn from_path(piece: Piece, path: Path, position: Vec2) -> Self {
        Self {
            piece,
            path,
            position,
        }
    }
    pub fn piece(&self) -> Piece {
        self.piece
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn position(&self) -> Vec2 {
        self.position
    }
}

#[cfg(test)]
mod test {
    use glam::Vec2;

    use crate::Direction::{NorthWest as NW, SouthEast as SE};
    use crate::{encode, Item, OutOfRange, Path, Piece, Screen};

    #[test]
    fn digits() {
        for (i, piece) in Piece::ALL.into_iter().enumerate() {
            assert_eq!(usize::from(piece.digit()), i);
            assert_eq!(Some(piece), Piece::from_digit(piece.digit()));
            assert_eq!(Some(piece), Piece::from_symbol(piece.symbol()));
        }
        assert_eq!(None, Piece::from_digit(6));
        assert_eq!(None, Piece::from_symbol('x'));
        assert_eq!(Piece::Knight.to_string(), "Knight");
    }

    #[test]
    fn position() {
        let screen = Screen::new(1000.0, 100.0);
        let near = screen.cell_position(0, 0);
        assert!(near.abs_diff_eq(Vec2::new(195.0, 80.0), 1e-3), "{near}");
        let far = screen.cell_position(7, 7);
        let expected = Vec2::new(195.0 + 49.3 * 7.0, 80.0 - 8.75 * 7.0);
        assert!(far.abs_diff_eq(expected, 1e-3), "{far}");
    }

    #[test]
    fn new() {
        let screen = Screen::default();
        let item = Item::new(Piece::Queen, 7, 7, &screen).expect("on the board");
        assert_eq!(Piece::Queen, item.piece());
        assert_eq!(&Path::new([SE, SE, SE]), item.path());
        assert_eq!(screen.cell_position(7, 7), item.position());

        let item = Item::new(Piece::Pawn, 0, 0, &screen).expect("on the board");
        assert_eq!(&Path::new([NW, NW, NW]), item.path());
        assert_eq!(encode(1, 1).as_ref(), Ok(item.path()));
    }

    #[test]
    fn off_board() {
        assert_eq!(
            Err(OutOfRange { x: 9, y: 4 }),
            Item::new(Piece::Rook, 8, 3, &Screen::default())
        );
    }
}
