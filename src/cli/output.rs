//! Output formatting utilities for CLI.

use std::fmt::Write;

use serde::Serialize;
use tilegrid::{Coordinates, Effect, Engine, ResourceId, ResourceLibrary};

/// JSON-serializable tile state.
#[derive(Debug, Serialize)]
pub(super) struct JsonTile {
    /// Queried cell.
    pub(super) at: Coordinates,
    /// Whether any layer reaches the cell.
    pub(super) in_map: bool,
    /// Texture key (null if none).
    pub(super) texture: Option<String>,
    /// Action key (null if none).
    pub(super) action: Option<String>,
    /// Whether the pawn may not enter.
    pub(super) blocks_movement: bool,
    /// Whether interaction is blocked.
    pub(super) blocks_interaction: bool,
    /// Names of the layers contributing, lowest priority first.
    pub(super) layers: Vec<String>,
}

impl JsonTile {
    /// Describe the resolved tile at `at`.
    pub(super) fn new(engine: &Engine, at: Coordinates) -> Self {
        let effect = engine.tile_state(at).unwrap_or_default();
        let key = |id: Option<ResourceId>| key_name(engine.library(), id);
        Self {
            at,
            in_map: engine.map().contains(at),
            texture: key(effect.texture_key),
            action: key(effect.action_key),
            blocks_movement: effect.blocks_movement,
            blocks_interaction: effect.blocks_interaction,
            layers: engine
                .map()
                .effects_at(at)
                .map(|(layer, _)| layer.name().to_string())
                .collect(),
        }
    }
}

/// JSON-serializable scene summary.
#[derive(Debug, Serialize)]
pub(super) struct JsonScene {
    /// Scene name.
    pub(super) scene: String,
    /// Map name.
    pub(super) map: String,
    /// Pawn anchor.
    pub(super) pawn: Coordinates,
    /// Every non-empty tile in the map extent, row-major.
    pub(super) tiles: Vec<JsonTile>,
}

impl JsonScene {
    /// Summarize the engine's scene.
    pub(super) fn new(engine: &Engine) -> Self {
        let tiles = engine
            .map()
            .extent()
            .into_iter()
            .flatten()
            .filter(|&at| engine.tile_state(at).is_some_and(|e| !e.is_empty()))
            .map(|at| JsonTile::new(engine, at))
            .collect();
        Self {
            scene: engine.scene().name().to_string(),
            map: engine.map().name().to_string(),
            pawn: engine.pawn_position(),
            tiles,
        }
    }
}

/// JSON-serializable outcome of one move.
#[derive(Debug, Serialize)]
pub(super) struct JsonMove {
    /// The move as given on the command line.
    pub(super) command: String,
    /// Whether the move completed without error.
    pub(super) ok: bool,
    /// Pawn anchor after the move.
    pub(super) position: Coordinates,
    /// Error message (null on success).
    pub(super) error: Option<String>,
}

/// JSON-serializable walk report.
#[derive(Debug, Serialize)]
pub(super) struct JsonWalk {
    /// Per-move outcomes.
    pub(super) moves: Vec<JsonMove>,
    /// Final pawn anchor.
    pub(super) position: Coordinates,
}

/// Resolve an id to its library key, falling back to the raw id.
pub(super) fn key_name(library: Option<&ResourceLibrary>, id: Option<ResourceId>) -> Option<String> {
    let id = id?;
    Some(
        library
            .and_then(|library| library.key(id))
            .map_or_else(|| id.to_string(), str::to_string),
    )
}

/// Format a resolved tile as human-readable text.
pub(super) fn format_tile(engine: &Engine, at: Coordinates) -> String {
    let mut output = String::new();
    let _ = writeln!(output, "Tile {at}");
    if !engine.map().contains(at) {
        let _ = writeln!(output, "  outside the map");
        return output;
    }

    let effect: Effect = engine.tile_state(at).unwrap_or_default();
    let library = engine.library();
    let show = |id| key_name(library, id).unwrap_or_else(|| "-".to_string());
    let _ = writeln!(output, "  texture:            {}", show(effect.texture_key));
    let _ = writeln!(output, "  action:             {}", show(effect.action_key));
    let _ = writeln!(output, "  blocks movement:    {}", effect.blocks_movement);
    let _ = writeln!(output, "  blocks interaction: {}", effect.blocks_interaction);

    let layers: Vec<_> = engine.map().effects_at(at).map(|(l, _)| l.name()).collect();
    let layers = if layers.is_empty() {
        "-".to_string()
    } else {
        layers.join(", ")
    };
    let _ = writeln!(output, "  layers:             {layers}");
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use tilegrid::{Layer, LayerKind, Map, Mask, Pawn, Scene, Selector, Shape};

    fn engine() -> Engine {
        let rock = Mask::new(
            "rock",
            Selector::single(Coordinates::new(1, 0)),
            Effect::NONE.blocking_movement(),
        );
        let layer = Layer::new(
            "floor",
            LayerKind::Block,
            Shape::new(3, 1).unwrap(),
            vec![rock],
            0,
        )
        .unwrap();
        let map = Map::new("strip", vec![layer], Coordinates::new(0, 0));
        Engine::new(Scene::new("strip", map, Pawn::new(Coordinates::new(0, 0))).unwrap())
    }

    #[test]
    fn test_format_tile_lines() {
        let text = format_tile(&engine(), Coordinates::new(1, 0));
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines[0], "Tile (1, 0)");
        assert_eq!(lines[1], "  texture:            -");
        assert_eq!(lines[3], "  blocks movement:    true");
        assert_eq!(lines[5], "  layers:             floor");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_format_tile_outside_and_empty() {
        let engine = engine();
        assert_eq!(
            format_tile(&engine, Coordinates::new(5, 0)),
            "Tile (5, 0)\n  outside the map\n"
        );
        let text = format_tile(&engine, Coordinates::new(2, 0));
        assert!(text.contains("  layers:             -\n"));
    }
}
