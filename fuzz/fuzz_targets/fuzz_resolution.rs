#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilegrid::{Coordinates, Effect, Layer, LayerKind, Map, Mask, ResourceId, Selector, Shape};

/// One mask: a cell or a block, with raw effect bits.
#[derive(Arbitrary, Debug)]
struct MaskInput {
    a: (u8, u8),
    b: Option<(u8, u8)>,
    texture: Option<u8>,
    action: Option<u8>,
    blocks_movement: bool,
    blocks_interaction: bool,
}

/// One layer placed somewhere in the map.
#[derive(Arbitrary, Debug)]
struct LayerInput {
    width: u8,
    height: u8,
    offset: (u8, u8),
    priority: i8,
    masks: Vec<MaskInput>,
}

#[derive(Arbitrary, Debug)]
struct ResolutionInput {
    origin: (u16, u16),
    layers: Vec<LayerInput>,
    queries: Vec<(u16, u16)>,
}

fn coord((x, y): (u8, u8)) -> Coordinates {
    Coordinates::new(u32::from(x), u32::from(y))
}

fuzz_target!(|input: ResolutionInput| {
    let mut layers = Vec::new();
    for (i, layer) in input.layers.iter().take(8).enumerate() {
        // Zero dimensions must be rejected, never clamped.
        let Ok(bounds) = Shape::new(u32::from(layer.width), u32::from(layer.height)) else {
            assert!(layer.width == 0 || layer.height == 0);
            continue;
        };
        let masks = layer
            .masks
            .iter()
            .take(16)
            .enumerate()
            .map(|(j, m)| {
                let selector = match m.b {
                    Some(b) => Selector::block(coord(m.a), coord(b)),
                    None => Selector::single(coord(m.a)),
                };
                let effect = Effect {
                    texture_key: m.texture.map(|t| ResourceId::new(u32::from(t))),
                    action_key: m.action.map(|a| ResourceId::new(u32::from(a))),
                    blocks_movement: m.blocks_movement,
                    blocks_interaction: m.blocks_interaction,
                };
                Mask::new(format!("m{j}"), selector, effect)
            })
            .collect();
        let Ok(built) = Layer::new(format!("l{i}"), LayerKind::Default, bounds, masks, i32::from(layer.priority)) else {
            return;
        };
        layers.push(built.with_offset(coord(layer.offset)));
    }

    let origin = Coordinates::new(u32::from(input.origin.0), u32::from(input.origin.1));
    let map = Map::new("fuzz", layers, origin);

    for &(x, y) in input.queries.iter().take(64) {
        let at = Coordinates::new(u32::from(x), u32::from(y));
        let resolved = map.effect_at(at);
        let contributions: Vec<_> = map.effects_at(at).map(|(_, e)| e).collect();

        // Nothing resolves outside the map, and blocking is OR-accumulated.
        if !map.contains(at) {
            assert!(resolved.is_none());
        }
        assert_eq!(resolved.is_some(), !contributions.is_empty());
        if let Some(effect) = resolved {
            assert_eq!(
                effect.blocks_movement,
                contributions.iter().any(|e| e.blocks_movement)
            );
            assert_eq!(
                effect.blocks_interaction,
                contributions.iter().any(|e| e.blocks_interaction)
            );
        }
    }
});
