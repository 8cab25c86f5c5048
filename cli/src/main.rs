use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use twenty48_core::{Direction, MoveOutcome, PlayEngine};

/// Play 2048 in the terminal.
///
/// Type w/a/s/d (or up/left/down/right) and Enter to move, n for a new game, q to quit.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Move(Direction),
    NewGame,
    Quit,
}

impl Command {
    fn parse(input: &str) -> Option<Self> {
        use Direction::*;
        match input.trim().to_ascii_lowercase().as_str() {
            "w" => Some(Self::Move(Up)),
            "a" => Some(Self::Move(Left)),
            "s" => Some(Self::Move(Down)),
            "d" => Some(Self::Move(Right)),
            "n" | "new" => Some(Self::NewGame),
            "q" | "quit" => Some(Self::Quit),
            other => other.parse().ok().map(Self::Move),
        }
    }
}

fn print_engine(out: &mut impl Write, engine: &PlayEngine) -> io::Result<()> {
    writeln!(out, "{}", engine.board())?;
    writeln!(out, "score: {}", engine.score())?;
    if engine.is_over() {
        writeln!(out, "GAME OVER (n for a new game, q to quit)")?;
    }
    writeln!(out, "---------")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    env_logger::Builder::new()
        .filter_level(cli.verbose.log_level_filter())
        .init();

    let seed = cli.seed.unwrap_or_else(rand::random);
    log::info!("seed: {}", seed);

    let mut engine = PlayEngine::with_seed(seed);
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    writeln!(stdout, "GAME START")?;
    print_engine(&mut stdout, &engine)?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        match Command::parse(&line) {
            Some(Command::Quit) => break,
            Some(Command::NewGame) => {
                engine.new_game();
            }
            Some(Command::Move(direction)) => {
                if engine.make_move(direction) == MoveOutcome::NoChange {
                    log::debug!("{} does not move anything", direction);
                }
            }
            None => {
                writeln!(stdout, "unknown command {:?}, use w/a/s/d, n or q", line.trim())?;
                continue;
            }
        }
        print_engine(&mut stdout, &engine)?;
    }

    Ok(())
}
