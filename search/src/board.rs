//! text rendering of the board, row 1 on top

use std::fmt::Write;

use quadtree::{Indicator, Search, Setup};

const WIDTH: usize = 8;
const COLUMNS: &str = "ABCDEFGH";

type Cells = [[char; WIDTH]; WIDTH];

fn render(cells: &Cells) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "  {COLUMNS}");
    for (y, row) in cells.iter().enumerate() {
        let row: String = row.iter().collect();
        let _ = writeln!(out, "{} {row}", y + 1);
    }
    out
}

/// every piece of `setup`, later pieces cover earlier ones on the same cell
pub fn render_setup(setup: &Setup) -> String {
    let mut cells = [['.'; WIDTH]; WIDTH];
    for placement in setup.placements() {
        cells[usize::from(placement.y())][usize::from(placement.x())] = placement.piece().symbol();
    }
    render(&cells)
}

/// the current search area, `o` if something is in it, `x` if not
///
/// Pieces stay hidden until a single cell is reached.
#[allow(clippy::cast_possible_truncation)] // x, y < 8
pub fn render_search(search: &Search) -> String {
    let region = search.region();
    let mark = match search.indicator() {
        Indicator::Vacant => 'x',
        Indicator::Occupied => 'o',
        Indicator::Found(item) => item.piece().symbol(),
    };
    let mut cells = [['.'; WIDTH]; WIDTH];
    for (y, row) in cells.iter_mut().enumerate() {
        for (x, cell) in row.iter_mut().enumerate() {
            if region.contains(x as u8, y as u8) {
                *cell = mark;
            }
        }
    }
    render(&cells)
}

#[cfg(test)]
mod test {
    use quadtree::Direction::{NorthEast as NE, NorthWest as NW, SouthEast as SE};
    use quadtree::{Screen, Search, Setup};
    use unindent::unindent;

    use super::{render_search, render_setup};

    #[test]
    fn setup() {
        let setup = Setup::parse("015,230,577,177").expect("valid input");
        assert_eq!(
            render_setup(&setup),
            unindent(
                "
                  ABCDEFGH
                1 ...K....
                2 ........
                3 ........
                4 ........
                5 ........
                6 .P......
                7 ........
                8 .......B
                "
            )
        );
    }

    #[test]
    fn search() {
        let setup = Setup::parse("340").expect("valid input");
        let tree = setup.build_tree(&Screen::default());
        let mut search = Search::new(&tree);
        search.push(NE);
        assert_eq!(
            render_search(&search),
            unindent(
                "
                  ABCDEFGH
                1 ....oooo
                2 ....oooo
                3 ....oooo
                4 ....oooo
                5 ........
                6 ........
                7 ........
                8 ........
                "
            )
        );

        search.push(NW);
        search.push(NW);
        let found = render_search(&search);
        assert_eq!(found.lines().nth(1), Some("1 ....Q..."));
        assert_eq!(1, found.matches('Q').count());

        search.back();
        search.back();
        search.push(SE);
        let vacant = render_search(&search);
        assert_eq!(vacant.lines().nth(3), Some("3 ......xx"));
        assert_eq!(4, vacant.matches('x').count());
    }
}
