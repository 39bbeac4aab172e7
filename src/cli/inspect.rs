//! Scene inspection command implementation.

use super::output::{format_tile, JsonScene, JsonTile};
use super::{load_engine, CliError, OutputFormat};
use std::path::Path;
use tilegrid::render::render_ascii;
use tilegrid::Coordinates;

/// Execute the inspect command.
///
/// # Errors
///
/// Returns an error if the scene cannot be loaded.
pub(crate) fn execute(
    scene: &Path,
    at: Option<Coordinates>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let engine = load_engine(scene)?;

    match (format, at) {
        (OutputFormat::Text, Some(at)) => print!("{}", format_tile(&engine, at)),
        (OutputFormat::Text, None) => print!("{}", render_ascii(&engine)),
        (OutputFormat::Json, Some(at)) => {
            println!("{}", serde_json::to_string_pretty(&JsonTile::new(&engine, at))?);
        }
        (OutputFormat::Json, None) => {
            println!("{}", serde_json::to_string_pretty(&JsonScene::new(&engine))?);
        }
    }

    Ok(())
}
