use crate::{Item, Piece, Screen, Tree, BOARD_WIDTH};

/// this has very little error handling, must be 8 rows of 8 cells
#[macro_export]
macro_rules! test_tree {
    {$s:literal} => {
        $crate::Tree::from_test_format($s)
    };
}

impl Tree {
    /// expects 8 rows of '.'s (empty) and piece letters (see `Piece::symbol`)
    ///
    /// The first row is y = 0, leading/trailing spaces are ignored.
    /// Items are placed row by row, so a later cell wins if two cells share a path.
    pub fn from_test_format(s: &str) -> Tree {
        Tree::build(items_from_test_format(s, &Screen::default()))
    }
}

fn items_from_test_format(s: &str, screen: &Screen) -> Vec<Item> {
    let rows: Vec<&str> = s.split_ascii_whitespace().collect();
    assert_eq!(rows.len(), BOARD_WIDTH as usize, "8 rows");
    let mut items = Vec::new();
    for (y, row) in (0_u8..).zip(rows) {
        assert_eq!(row.len(), BOARD_WIDTH as usize, "8 cells in row {y}");
        for (x, cell) in (0_u8..).zip(row.chars()) {
            if let Some(piece) = parse_cell(cell) {
                items.push(Item::new(piece, x, y, screen).expect("on the board"));
            }
        }
    }
    items
}

fn parse_cell(c: char) -> Option<Piece> {
    match c {
        '.' => None,
        _ => Some(Piece::from_symbol(c).unwrap_or_else(|| panic!("Invalid cell {c:?}"))),
    }
}
