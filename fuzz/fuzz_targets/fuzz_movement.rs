#![no_main]

use std::rc::Rc;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use tilegrid::{
    Coordinates, Direction, Effect, Engine, Layer, LayerKind, Map, Mask, MoveError, Pawn,
    RejectReason, ResourceLibrary, Scene, Selector, Shape,
};

#[derive(Arbitrary, Debug)]
enum Command {
    MoveTo(u8, u8),
    Step(u8),
    WalkTo(u8, u8),
    Undo,
}

#[derive(Arbitrary, Debug)]
struct MovementInput {
    walls: Vec<(u8, u8)>,
    bells: Vec<(u8, u8)>,
    footprint: (u8, u8),
    commands: Vec<Command>,
}

const SIDE: u32 = 16;

fn cell(x: u8, y: u8) -> Coordinates {
    Coordinates::new(u32::from(x) % (SIDE + 2), u32::from(y) % (SIDE + 2))
}

fuzz_target!(|input: MovementInput| {
    let mut library = ResourceLibrary::new();
    let bell = library.insert_action("bell", || {});

    let mut masks = Vec::new();
    for (i, &(x, y)) in input.walls.iter().take(32).enumerate() {
        masks.push(Mask::new(
            format!("wall{i}"),
            Selector::single(cell(x, y)),
            Effect::NONE.blocking_movement(),
        ));
    }
    for (i, &(x, y)) in input.bells.iter().take(8).enumerate() {
        masks.push(Mask::new(
            format!("bell{i}"),
            Selector::single(cell(x, y)),
            Effect::NONE.with_action(bell),
        ));
    }
    let bounds = Shape::square(SIDE).unwrap_or(Shape::UNIT);
    let Ok(layer) = Layer::new("floor", LayerKind::Default, bounds, masks, 0) else {
        return;
    };
    let map = Map::new("fuzz", vec![layer], Coordinates::new(0, 0));

    let footprint = Shape::new(
        u32::from(input.footprint.0 % 3) + 1,
        u32::from(input.footprint.1 % 3) + 1,
    )
    .unwrap_or(Shape::UNIT);
    let pawn = Pawn::new(Coordinates::new(0, 0)).with_footprint(footprint);
    let Ok(scene) = Scene::new("fuzz", map, pawn) else {
        return;
    };
    let mut engine = Engine::new(scene).with_library(Rc::new(library));

    for command in input.commands.iter().take(64) {
        let before = engine.pawn_position();
        let result = match *command {
            Command::MoveTo(x, y) => engine.move_to(cell(x, y)),
            Command::Step(d) => engine.step(Direction::ALL[usize::from(d % 4)]),
            Command::WalkTo(x, y) => engine.walk_to(cell(x, y)).map(|_| ()),
            Command::Undo => {
                engine.undo();
                continue;
            }
        };

        match result {
            Ok(()) => {
                assert!(engine.map().admits(engine.pawn_position(), footprint).is_ok());
            }
            Err(MoveError::Rejected(rejected)) => {
                // A planned walk only fails before its first step.
                assert_eq!(engine.pawn_position(), before);
                if !matches!(command, Command::WalkTo(..)) {
                    assert_ne!(rejected.reason, RejectReason::Unreachable);
                }
            }
            Err(MoveError::Action(failure)) => panic!("bell is registered: {failure}"),
        }
    }
});
