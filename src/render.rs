//! Plain-text dump of resolved tile states.

use std::fmt::Write;

use crate::engine::Engine;
use crate::grid::Coordinates;
use crate::map::Map;

/// Glyph legend, in precedence order.
pub const LEGEND: &str = "Legend: @=Pawn  #=Blocked  !=Action  ~=No interaction  T=Texture  .=Empty";

/// Render the engine's map with the pawn on top.
///
/// Output format:
/// ```text
/// Scene yard, map yard, pawn at (1, 0)
/// ┌─────────┐
/// │ T @ T T │
/// │ T T # T │
/// └─────────┘
/// Legend: @=Pawn  #=Blocked  !=Action  ~=No interaction  T=Texture  .=Empty
/// ```
#[must_use]
pub fn render_ascii(engine: &Engine) -> String {
    let scene = engine.scene();
    let map = scene.map();
    let mut output = String::new();
    let _ = writeln!(
        output,
        "Scene {}, map {}, pawn at {}",
        scene.name(),
        map.name(),
        engine.pawn_position()
    );

    let Some(extent) = map.extent() else {
        output.push_str("(empty map)\n");
        return output;
    };
    let pawn = scene.pawn().occupied();
    let rule = "─".repeat(extent.shape().width() as usize * 2 + 1);

    let _ = writeln!(output, "┌{rule}┐");
    for y in extent.min().y..=extent.max().y {
        output.push_str("│ ");
        for x in extent.min().x..=extent.max().x {
            let at = Coordinates::new(x, y);
            output.push(if pawn.contains(at) { '@' } else { render_tile(map, at) });
            output.push(' ');
        }
        output.push_str("│\n");
    }
    let _ = writeln!(output, "└{rule}┘");
    output.push_str(LEGEND);
    output.push('\n');
    output
}

/// Glyph for one resolved tile; a space where no layer reaches.
#[must_use]
pub fn render_tile(map: &Map, at: Coordinates) -> char {
    if !map.contains(at) {
        return ' ';
    }
    match map.effect_at(at) {
        Some(e) if e.blocks_movement => '#',
        Some(e) if e.action_key.is_some() => '!',
        Some(e) if e.blocks_interaction => '~',
        Some(e) if e.texture_key.is_some() => 'T',
        _ => '.',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{Pawn, Scene};
    use crate::grid::{Selector, Shape};
    use crate::map::{Effect, Layer, LayerKind, Mask, ResourceId};

    fn at(x: u32, y: u32) -> Coordinates {
        Coordinates::new(x, y)
    }

    fn engine() -> Engine {
        let ground = Layer::new(
            "ground",
            LayerKind::Texture,
            Shape::new(3, 2).unwrap(),
            vec![Mask::new(
                "grass",
                Selector::block(at(0, 0), at(2, 0)),
                Effect::NONE.with_texture(ResourceId::new(1)),
            )],
            0,
        )
        .unwrap();
        let props = Layer::new(
            "props",
            LayerKind::Action,
            Shape::new(3, 2).unwrap(),
            vec![
                Mask::new(
                    "rock",
                    Selector::single(at(2, 1)),
                    Effect::NONE.blocking_movement(),
                ),
                Mask::new(
                    "sign",
                    Selector::single(at(1, 1)),
                    Effect::NONE.with_action(ResourceId::new(2)),
                ),
            ],
            1,
        )
        .unwrap();
        let map = Map::new("yard", vec![ground, props], at(0, 0));
        Engine::new(Scene::new("yard", map, Pawn::new(at(0, 1))).unwrap())
    }

    #[test]
    fn test_render_tile_glyphs() {
        let engine = engine();
        let map = engine.map();
        assert_eq!(render_tile(map, at(0, 0)), 'T');
        assert_eq!(render_tile(map, at(1, 1)), '!');
        assert_eq!(render_tile(map, at(2, 1)), '#');
        assert_eq!(render_tile(map, at(0, 1)), '.');
        assert_eq!(render_tile(map, at(5, 5)), ' ');
    }

    #[test]
    fn test_render_ascii_grid() {
        let output = render_ascii(&engine());
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines[0], "Scene yard, map yard, pawn at (0, 1)");
        assert_eq!(lines[1], "┌───────┐");
        assert_eq!(lines[2], "│ T T T │");
        assert_eq!(lines[3], "│ @ ! # │");
        assert_eq!(lines[4], "└───────┘");
        assert_eq!(lines[5], LEGEND);
    }
}
