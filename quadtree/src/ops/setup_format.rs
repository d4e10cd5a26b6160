//! the one line setup format, e.g. `015,230`
//!
//! Each comma separated group is 3 digits: piece, x, y.
//! Board digits are 0 based, so `015` is a pawn on B6.

use std::error::Error;
use std::fmt::{Debug, Display};

use itertools::Itertools;

use crate::{Item, OutOfRange, Path, Piece, Screen, Tree};

#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Placement {
    piece: Piece,
    x: u8,
    y: u8,
    path: Path,
}
impl Placement {
    /// `x` and `y` are 0 based
    pub fn new(piece: Piece, x: u8, y: u8) -> Result<Self, OutOfRange> {
        Ok(Self {
            piece,
            x,
            y,
            path: Path::from_board(x, y)?,
        })
    }
    pub fn piece(&self) -> Piece {
        self.piece
    }
    pub fn x(&self) -> u8 {
        self.x
    }
    pub fn y(&self) -> u8 {
        self.y
    }
    pub fn path(&self) -> &Path {
        &self.path
    }
    pub fn item(&self, screen: &Screen) -> Item {
        Item::from_path(self.piece, self.path, screen.cell_position(self.x, self.y))
    }
}
impl Display for Placement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.piece.digit(), self.x, self.y)
    }
}

/// Between 1 and [`Setup::MAX_PIECES`] placed pieces
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Setup {
    placements: Vec<Placement>,
}
impl Setup {
    pub const MAX_PIECES: usize = 6;

    pub fn from_placements(placements: Vec<Placement>) -> Option<Self> {
        if placements.is_empty() || placements.len() > Setup::MAX_PIECES {
            None
        } else {
            Some(Self { placements })
        }
    }
    pub fn parse(line: &str) -> Result<Self, SetupError> {
        SetupReader::new(line.trim_end()).read()
    }
    pub fn to_line(&self) -> String {
        self.to_string()
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }
    pub fn len(&self) -> usize {
        self.placements.len()
    }
    /// never `true`, there is always at least one placement
    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
    /// `false` if there are already [`Setup::MAX_PIECES`]
    pub fn push(&mut self, placement: Placement) -> bool {
        if self.placements.len() < Setup::MAX_PIECES {
            self.placements.push(placement);
            true
        } else {
            false
        }
    }
    /// removes the last placement, keeping at least one
    pub fn pop(&mut self) -> Option<Placement> {
        if self.placements.len() > 1 {
            self.placements.pop()
        } else {
            None
        }
    }

    pub fn items(&self, screen: &Screen) -> Vec<Item> {
        self.placements.iter().map(|p| p.item(screen)).collect()
    }
    pub fn build_tree(&self, screen: &Screen) -> Tree {
        Tree::build(self.placements.iter().map(|p| p.item(screen)))
    }
}
impl Default for Setup {
    /// a single pawn in the top left corner
    fn default() -> Self {
        Self {
            placements: vec![Placement {
                piece: Piece::Pawn,
                x: 0,
                y: 0,
                path: Path::new([crate::Direction::NorthWest; Path::LEN]),
            }],
        }
    }
}
impl Display for Setup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.placements.iter().join(","))
    }
}

// parsing

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SetupErrorKind {
    Empty,
    InvalidGroup,
    InvalidPiece,
    OutOfRange,
    TooManyPieces,
}
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SetupErrorHint {
    Empty,
    ShortGroup,
    LongGroup,
    InvalidChar,
    InvalidPiece,
    OutOfRange,
    TooManyPieces,
}

#[derive(Clone)]
struct SetupErrorData {
    line: String,
    column: usize,
    hint: SetupErrorHint,
}
#[derive(Clone)]
pub struct SetupError(Box<SetupErrorData>);
impl SetupError {
    fn new(line: &str, column: usize, hint: SetupErrorHint) -> Self {
        Self(Box::new(SetupErrorData {
            line: line.to_owned(),
            column,
            hint,
        }))
    }
    pub fn kind(&self) -> SetupErrorKind {
        match self.0.hint {
            SetupErrorHint::Empty => SetupErrorKind::Empty,
            SetupErrorHint::ShortGroup | SetupErrorHint::LongGroup | SetupErrorHint::InvalidChar => {
                SetupErrorKind::InvalidGroup
            }
            SetupErrorHint::InvalidPiece => SetupErrorKind::InvalidPiece,
            SetupErrorHint::OutOfRange => SetupErrorKind::OutOfRange,
            SetupErrorHint::TooManyPieces => SetupErrorKind::TooManyPieces,
        }
    }
    pub fn line_src(&self) -> &str {
        &self.0.line
    }
    /// 0 based column index
    pub fn column(&self) -> usize {
        self.0.column
    }
    pub fn hint(&self) -> &'static str {
        match self.0.hint {
            SetupErrorHint::Empty => "Setup needs at least one piece, e.g. 015",
            SetupErrorHint::ShortGroup => "Each piece needs exactly 3 digits: piece, x, y",
            SetupErrorHint::LongGroup => "Pieces must be separated by ','",
            SetupErrorHint::InvalidChar => "Invalid character",
            SetupErrorHint::InvalidPiece => {
                "Piece must be 0-5 (pawn, bishop, king, queen, knight, rook)"
            }
            SetupErrorHint::OutOfRange => "Board positions must be 0-7",
            SetupErrorHint::TooManyPieces => "Can't have more than 6 pieces",
        }
    }
}
impl Debug for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SetupError")
            .field("column", &self.column())
            .field("line_src", &self.line_src())
            .field("hint", &self.0.hint)
            .finish()
    }
}
impl Display for SetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let line_src = self.line_src();
        let column = self.column() + 1;
        let mark = "^";
        let hint = self.hint();
        write!(
            f,
            "Failed to parse setup at column {column}:\n{line_src}\n{mark:>column$}\n{hint}"
        )
    }
}
impl Error for SetupError {}

type SetupResult<T> = Result<T, SetupError>;

struct SetupReader<'src> {
    src: &'src str,
    at: usize,
}
impl<'src> SetupReader<'src> {
    fn new(src: &'src str) -> Self {
        Self { src, at: 0 }
    }

    fn read(mut self) -> SetupResult<Setup> {
        if self.src.is_empty() {
            return self.fail(SetupErrorHint::Empty);
        }
        let mut placements = Vec::new();
        loop {
            let pos = self.at;
            let placement = self.read_group()?;
            if placements.len() == Setup::MAX_PIECES {
                return self.fail_at(pos, SetupErrorHint::TooManyPieces);
            }
            placements.push(placement);
            match self.peak() {
                None => return Ok(Setup { placements }),
                Some(b',') => self.consume(),
                Some(b'0'..=b'9') => return self.fail(SetupErrorHint::LongGroup),
                Some(_) => return self.fail(SetupErrorHint::InvalidChar),
            }
        }
    }

    fn read_group(&mut self) -> SetupResult<Placement> {
        let pos = self.at;
        let piece = self.consume_digit()?;
        let piece = match Piece::from_digit(piece) {
            Some(piece) => piece,
            None => return self.fail_at(pos, SetupErrorHint::InvalidPiece),
        };
        let pos = self.at;
        let x = self.consume_digit()?;
        let y = self.consume_digit()?;
        match Placement::new(piece, x, y) {
            Ok(placement) => Ok(placement),
            Err(OutOfRange { x, .. }) if x > 8 => self.fail_at(pos, SetupErrorHint::OutOfRange),
            Err(_) => self.fail_at(pos + 1, SetupErrorHint::OutOfRange),
        }
    }
    fn consume_digit(&mut self) -> SetupResult<u8> {
        match self.peak() {
            Some(b @ b'0'..=b'9') => {
                self.consume();
                Ok(b - b'0')
            }
            None | Some(b',') => self.fail(SetupErrorHint::ShortGroup),
            Some(_) => self.fail(SetupErrorHint::InvalidChar),
        }
    }

    fn peak(&self) -> Option<u8> {
        self.src.as_bytes().get(self.at).copied()
    }
    fn consume(&mut self) {
        self.at += 1;
    }

    fn fail<T>(&self, hint: SetupErrorHint) -> SetupResult<T> {
        self.fail_at(self.at, hint)
    }
    fn fail_at<T>(&self, at: usize, hint: SetupErrorHint) -> SetupResult<T> {
        Err(SetupError::new(self.src, at, hint))
    }
}
