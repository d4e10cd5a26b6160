// lints
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod board;
mod play;
mod setup_file;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use quadtree::{Screen, Setup};
use tracing::debug;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(about = "Find the hidden chess pieces one quadrant at a time")]
struct Args {
    /// file holding the setup line, e.g. `015,230`
    #[arg(long, default_value = "setup.txt")]
    setup: PathBuf,
    /// screen width in px, used for piece positions
    #[arg(long, default_value_t = 1920.0)]
    width: f32,
    /// screen height in px, used for piece positions
    #[arg(long, default_value_t = 1080.0)]
    height: f32,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
enum Command {
    /// search the board, reads nw/ne/se/sw/back/board/quit from stdin
    Play,
    /// show where every piece is
    Show,
    /// replace the setup
    Save { line: String },
    /// add a piece given as a 3 digit group (piece, x, y)
    Add { group: String },
    /// remove the last piece
    Remove,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(true)
        .with_writer(io::stderr)
        .with_env_filter(EnvFilter::from_default_env())
        .with_span_events(FmtSpan::CLOSE)
        .init();

    let args = Args::parse();
    debug!(?args, "starting");
    let screen = Screen::new(args.width, args.height);

    match args.command.clone().unwrap_or(Command::Play) {
        Command::Play => {
            let setup = setup_file::load_or_default(&args.setup);
            play::run(&setup, &screen, io::stdin().lock(), io::stdout().lock())
        }
        Command::Show => {
            let setup = setup_file::load_or_default(&args.setup);
            let tree = setup.build_tree(&screen);
            println!("{setup}");
            print!("{}", board::render_setup(&setup));
            print!("{}", tree.outline());
            Ok(())
        }
        Command::Save { line } => {
            let setup = Setup::parse(&line)?;
            setup_file::save(&args.setup, &setup)
        }
        Command::Add { group } => {
            let added = Setup::parse(&group)?;
            let mut setup = setup_file::load_or_default(&args.setup);
            for placement in added.placements() {
                if !setup.push(*placement) {
                    bail!("can't have more than {} pieces", Setup::MAX_PIECES);
                }
            }
            setup_file::save(&args.setup, &setup)
        }
        Command::Remove => {
            let mut setup = setup_file::load_or_default(&args.setup);
            if setup.pop().is_none() {
                bail!("the last piece can't be removed");
            }
            setup_file::save(&args.setup, &setup)
        }
    }
}
