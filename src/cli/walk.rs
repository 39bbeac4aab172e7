//! Pawn movement command implementation.

use super::output::{JsonMove, JsonWalk};
use super::{load_engine, CliError, OutputFormat};
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use tilegrid::render::render_ascii;
use tilegrid::{Coordinates, Direction, Engine, MoveError};

/// One movement command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    /// One cell in a direction.
    Step(Direction),
    /// Jump straight to a cell.
    To(Coordinates),
    /// Walk a shortest path to a cell.
    Walk(Coordinates),
}

impl Move {
    fn apply(self, engine: &mut Engine) -> Result<(), MoveError> {
        match self {
            Move::Step(direction) => engine.step(direction),
            Move::To(at) => engine.move_to(at),
            Move::Walk(at) => engine.walk_to(at).map(|_| ()),
        }
    }
}

impl FromStr for Move {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let parsed = match s.to_ascii_lowercase().as_str() {
            "up" | "u" => Move::Step(Direction::Up),
            "down" | "d" => Move::Step(Direction::Down),
            "left" | "l" => Move::Step(Direction::Left),
            "right" | "r" => Move::Step(Direction::Right),
            _ => match s.strip_prefix('@') {
                Some(rest) => Move::Walk(rest.parse().map_err(invalid)?),
                None => Move::To(s.parse().map_err(invalid)?),
            },
        };
        Ok(parsed)
    }
}

fn invalid(e: tilegrid::error::ParseCoordinatesError) -> CliError {
    CliError::new(format!("invalid move: {e}"))
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Step(Direction::Up) => write!(f, "up"),
            Move::Step(Direction::Down) => write!(f, "down"),
            Move::Step(Direction::Left) => write!(f, "left"),
            Move::Step(Direction::Right) => write!(f, "right"),
            Move::To(at) => write!(f, "{},{}", at.x, at.y),
            Move::Walk(at) => write!(f, "@{},{}", at.x, at.y),
        }
    }
}

/// Execute the walk command.
///
/// Failed moves are reported and the remaining moves still run.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded.
pub(crate) fn execute(scene: &Path, moves: &[Move], format: OutputFormat) -> Result<(), CliError> {
    let mut engine = load_engine(scene)?;

    let mut report = Vec::with_capacity(moves.len());
    for &mv in moves {
        let outcome = mv.apply(&mut engine);
        report.push(JsonMove {
            command: mv.to_string(),
            ok: outcome.is_ok(),
            position: engine.pawn_position(),
            error: outcome.err().map(|e| e.to_string()),
        });
    }

    match format {
        OutputFormat::Text => {
            for entry in &report {
                match &entry.error {
                    None => println!("{:<10} -> {}", entry.command, entry.position),
                    Some(e) => println!("{:<10} !! {e}", entry.command),
                }
            }
            println!();
            print!("{}", render_ascii(&engine));
        }
        OutputFormat::Json => {
            let walk = JsonWalk {
                moves: report,
                position: engine.pawn_position(),
            };
            println!("{}", serde_json::to_string_pretty(&walk)?);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_moves() {
        assert_eq!("up".parse::<Move>().unwrap(), Move::Step(Direction::Up));
        assert_eq!("R".parse::<Move>().unwrap(), Move::Step(Direction::Right));
        assert_eq!(
            "3,4".parse::<Move>().unwrap(),
            Move::To(Coordinates::new(3, 4))
        );
        assert_eq!(
            "@5,0".parse::<Move>().unwrap(),
            Move::Walk(Coordinates::new(5, 0))
        );
        assert!("sideways".parse::<Move>().is_err());
        assert!("@x".parse::<Move>().is_err());
    }

    #[test]
    fn test_move_display() {
        assert_eq!(Move::Step(Direction::Left).to_string(), "left");
        assert_eq!(Move::Walk(Coordinates::new(1, 2)).to_string(), "@1,2");
    }
}
