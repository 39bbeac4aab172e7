//! Tilegrid CLI - inspect scene files and drive a pawn around them.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tilegrid::Coordinates;

/// Tilegrid - layered tile maps and pawn movement
#[derive(Parser, Debug)]
#[command(name = "tilegrid")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Log more (-v for info, -vv for debug). `RUST_LOG` takes precedence.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the resolved grid of a scene, or one tile
    Inspect {
        /// Scene description (JSON)
        #[arg(required = true)]
        scene: PathBuf,

        /// Only show the tile at x,y
        #[arg(long)]
        at: Option<Coordinates>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Apply a sequence of moves to the scene's pawn
    Walk {
        /// Scene description (JSON)
        #[arg(required = true)]
        scene: PathBuf,

        /// Moves: up, down, left, right, x,y (direct) or @x,y (path walk)
        #[arg(required = true, num_args = 1..)]
        moves: Vec<cli::walk::Move>,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },
}

fn main() -> ExitCode {
    let args = Args::parse();
    cli::init_logging(args.verbose);

    let result = match args.command {
        Commands::Inspect { scene, at, format } => cli::inspect::execute(&scene, at, format),
        Commands::Walk {
            scene,
            moves,
            format,
        } => cli::walk::execute(&scene, &moves, format),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
