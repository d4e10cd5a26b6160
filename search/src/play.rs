use std::io::{BufRead, Write};

use anyhow::Result;
use itertools::Itertools;
use quadtree::{Direction, Indicator, Screen, Search, Setup};
use tracing::{debug, info, info_span};

use crate::board;

const HELP: &str = "nw ne se sw (or 0-3) to move, back to go up, board to draw, quit to stop";

enum Input {
    Move(Direction),
    Back,
    Reset,
    Board,
    Quit,
}
impl Input {
    fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if let Some(dir) = Direction::parse(line) {
            return Some(Self::Move(dir));
        }
        match line.to_ascii_lowercase().as_str() {
            "back" | "b" => Some(Self::Back),
            "reset" | "r" => Some(Self::Reset),
            "board" => Some(Self::Board),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

/// runs one search session until `quit` or the end of `input`
pub fn run(setup: &Setup, screen: &Screen, input: impl BufRead, mut out: impl Write) -> Result<()> {
    let _span = info_span!("play", setup = %setup).entered();
    let tree = setup.build_tree(screen);
    let mut search = Search::new(&tree);

    writeln!(out, "{HELP}")?;
    print_state(&mut out, &search, search.indicator())?;
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let indicator = match Input::parse(&line) {
            Some(Input::Move(dir)) => match search.push(dir) {
                Some(indicator) => indicator,
                None => {
                    writeln!(out, "can't go any deeper, go back first")?;
                    continue;
                }
            },
            Some(Input::Back) => match search.back() {
                Some(indicator) => indicator,
                None => {
                    writeln!(out, "already searching the whole board")?;
                    continue;
                }
            },
            Some(Input::Reset) => {
                search.reset();
                search.indicator()
            }
            Some(Input::Board) => {
                write!(out, "{}", board::render_search(&search))?;
                continue;
            }
            Some(Input::Quit) => break,
            None => {
                debug!(%line, "unknown command");
                writeln!(out, "{HELP}")?;
                continue;
            }
        };
        print_state(&mut out, &search, indicator)?;
        if let Indicator::Found(item) = indicator {
            info!(piece = %item.piece(), path = %item.path(), "found");
        }
    }
    out.flush()?;
    Ok(())
}

fn print_state(out: &mut impl Write, search: &Search, indicator: Indicator) -> Result<()> {
    let region = search.region();
    let path = if search.path().is_empty() {
        "board".to_owned()
    } else {
        search.path().iter().map(|dir| dir.abbreviation()).join(" ")
    };
    let status = match indicator {
        Indicator::Vacant => "empty".to_owned(),
        Indicator::Occupied => "occupied".to_owned(),
        Indicator::Found(item) => {
            let position = item.position();
            format!("found {} at ({:.1}, {:.1})", item.piece(), position.x, position.y)
        }
    };
    writeln!(
        out,
        "[{path}] {}x{} at {},{}: {status}",
        region.width, region.width, region.x, region.y
    )?;
    Ok(())
}
