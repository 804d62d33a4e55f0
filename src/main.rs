//! Goban: place stones on a Go board and watch groups live and die.
//!
//! ## Usage
//!
//! - `goban` - Show a demo
//! - `goban gtp` - Start a GTP-style command loop on stdin/stdout
//! - `goban random` - Play a random game and print the final board

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use goban::constants::{DEFAULT_RANDOM_MOVES, DEFAULT_SIZE};
use goban::goban::Board;
use goban::gtp::GtpEngine;
use goban::playout::random_game;
use goban::stone::Color;

/// Goban: stone placement, liberties and captures on a Go board
#[derive(Parser)]
#[command(name = "goban")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the GTP-style command loop
    Gtp {
        /// Initial board size (odd, at most 35)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
    },
    /// Play random legal moves and print the result
    Random {
        /// Board size (odd, at most 35)
        #[arg(long, default_value_t = DEFAULT_SIZE)]
        size: usize,
        /// Maximum number of stones to place
        #[arg(long, default_value_t = DEFAULT_RANDOM_MOVES)]
        moves: usize,
        /// Seed for reproducible games
        #[arg(long)]
        seed: Option<u64>,
        /// Print every move to stderr
        #[arg(short, long)]
        verbose: bool,
    },
    /// Run a short demo of placement and capture
    Demo,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Gtp { size }) => {
            let mut engine = GtpEngine::new(size).context("cannot start GTP engine")?;
            engine.run().context("GTP session failed")?;
        }
        Some(Commands::Random {
            size,
            moves,
            seed,
            verbose,
        }) => run_random(size, moves, seed, verbose)?,
        Some(Commands::Demo) | None => run_demo()?,
    }
    Ok(())
}

fn run_demo() -> Result<()> {
    println!("Goban: stone placement and capture\n");

    println!("=== Placement ===");
    let mut board = Board::new(DEFAULT_SIZE)?;
    board.place(Color::Black, "11".parse()?)?;
    board.place(Color::White, "22".parse()?)?;
    println!("{board}");

    println!("=== Capture ===");
    let mut board = Board::new(DEFAULT_SIZE)?;
    board.place(Color::White, "44".parse()?)?;
    for p in ["43", "34", "54"] {
        board.place(Color::Black, p.parse()?)?;
    }
    let white = board
        .group_at("44".parse()?)?
        .context("white stone missing")?;
    println!("White at 44 has {} liberty left", board.liberties(white));
    board.highlight("44".parse()?)?;
    println!("{board}");
    board.place(Color::Black, "45".parse()?)?;
    println!("Black plays 45 and captures:");
    println!("{board}");
    Ok(())
}

fn run_random(size: usize, moves: usize, seed: Option<u64>, verbose: bool) -> Result<()> {
    let mut board = Board::new(size)?;
    let mut rng = match seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };

    let summary = random_game(&mut board, &mut rng, moves, |board, color, position| {
        if verbose {
            match position {
                Some(p) => eprintln!("{color:?} {p} ({} stones)", board.stone_count()),
                None => eprintln!("{color:?} pass"),
            }
        }
    });

    println!("{board}");
    println!(
        "{} placements, {} passes, {} black and {} white stones captured",
        summary.placements, summary.passes, summary.black_captured, summary.white_captured
    );
    Ok(())
}
