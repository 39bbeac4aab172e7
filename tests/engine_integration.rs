//! End-to-end movement tests against the demo scene.
//!
//! Run with: cargo test engine_integration

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use tilegrid::{
    Coordinates, Direction, Effect, Engine, Layer, LayerKind, Map, Mask, MoveError,
    MovementRejected, Pawn, RejectReason, ResourceLibrary, Scene, SceneConfig, Selector, Shape,
};

fn at(x: u32, y: u32) -> Coordinates {
    Coordinates::new(x, y)
}

/// Load the demo yard with action handlers that record their key.
fn yard() -> (Engine, Rc<RefCell<Vec<String>>>) {
    let path = format!("{}/demos/yard.json", env!("CARGO_MANIFEST_DIR"));
    let config = SceneConfig::load(&path).unwrap();

    let fired = Rc::new(RefCell::new(Vec::new()));
    let mut library = ResourceLibrary::new();
    for key in &config.resources.actions {
        let log = Rc::clone(&fired);
        let name = key.clone();
        library.insert_action(key, move || log.borrow_mut().push(name.clone()));
    }
    let scene = config.build(&mut library).unwrap();
    let engine = Engine::new(scene)
        .with_library(Rc::new(library))
        .with_config(config.engine);
    (engine, fired)
}

#[test]
fn test_demo_scene_loads() {
    let (engine, _) = yard();
    assert_eq!(engine.pawn_position(), at(1, 1));
    assert_eq!(engine.config().history_limit, 64);
    assert_eq!(engine.config().max_walk_len, 4096);
    assert_eq!(engine.map().shape(), Some(Shape::new(10, 6).unwrap()));

    let library = engine.library().unwrap();
    let stone = library.get("stone").unwrap();
    assert_eq!(engine.tile_state(at(4, 3)).unwrap().texture_key, Some(stone));
    assert!(engine.tile_state(at(5, 2)).unwrap().blocks_movement);
    assert_eq!(engine.scene().pawn().appearance, library.get("hero"));
}

#[test]
fn test_fence_blocks_direct_moves() {
    let (mut engine, fired) = yard();
    engine.move_to(at(4, 1)).unwrap();

    let err = engine.step(Direction::Right).unwrap_err();
    assert_eq!(
        err,
        MoveError::Rejected(MovementRejected::new(at(5, 1), RejectReason::Blocked))
    );
    assert_eq!(engine.pawn_position(), at(4, 1));
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_walk_around_fence_rings_bell() {
    let (mut engine, fired) = yard();
    // Start below the chest so no shortest route crosses it.
    engine.move_to(at(1, 2)).unwrap();

    let plan = engine.steps_to(at(8, 1)).unwrap();
    assert_eq!(plan.len(), 14);
    assert!(plan.contains(&at(5, 5)));

    let taken = engine.walk_to(at(8, 1)).unwrap();
    assert_eq!(taken, 14);
    assert_eq!(engine.pawn_position(), at(8, 1));
    assert_eq!(*fired.borrow(), vec!["bell".to_string()]);
}

#[test]
fn test_chest_fires_on_every_entry() {
    let (mut engine, fired) = yard();
    engine.step(Direction::Right).unwrap();
    engine.step(Direction::Left).unwrap();
    engine.step(Direction::Right).unwrap();

    assert_eq!(engine.pawn_position(), at(2, 1));
    assert_eq!(fired.borrow().len(), 2);
    assert!(engine.tile_state(at(2, 1)).unwrap().blocks_interaction);
}

#[test]
fn test_undo_walk() {
    let (mut engine, fired) = yard();
    engine.walk_to(at(0, 4)).unwrap();
    let walked = engine.history().len();
    assert_eq!(walked, 4);

    for _ in 0..walked {
        engine.undo().unwrap();
    }
    assert_eq!(engine.pawn_position(), at(1, 1));
    assert_eq!(engine.undo(), None);
    assert!(fired.borrow().is_empty());
}

#[test]
fn test_unregistered_action_moves_then_fails() {
    let path = format!("{}/demos/yard.json", env!("CARGO_MANIFEST_DIR"));
    let config = SceneConfig::load(&path).unwrap();
    let mut library = ResourceLibrary::new();
    let scene = config.build(&mut library).unwrap();
    let mut engine = Engine::new(scene).with_library(Rc::new(library));

    let err = engine.move_to(at(2, 1)).unwrap_err();
    assert!(err.moved());
    match err {
        MoveError::Action(failure) => assert_eq!(failure.key.as_deref(), Some("chest")),
        MoveError::Rejected(_) => panic!("expected an action failure"),
    }
    assert_eq!(engine.pawn_position(), at(2, 1));
}

#[test]
fn test_large_pawn_respects_footprint() {
    let floor = Layer::new(
        "floor",
        LayerKind::Default,
        Shape::new(6, 6).unwrap(),
        vec![Mask::new(
            "pillar",
            Selector::single(at(3, 3)),
            Effect::NONE.blocking_movement(),
        )],
        0,
    )
    .unwrap();
    let map = Map::new("hall", vec![floor], at(0, 0));
    let pawn = Pawn::new(at(0, 0)).with_footprint(Shape::square(2).unwrap());
    let mut engine = Engine::new(Scene::new("hall", map, pawn).unwrap());

    assert_eq!(
        engine.move_to(at(2, 2)).unwrap_err(),
        MoveError::Rejected(MovementRejected::new(at(2, 2), RejectReason::Blocked))
    );
    assert_eq!(
        engine.move_to(at(5, 0)).unwrap_err(),
        MoveError::Rejected(MovementRejected::new(at(5, 0), RejectReason::OutOfBounds))
    );
    engine.move_to(at(4, 0)).unwrap();
    engine.walk_to(at(0, 4)).unwrap();
    assert_eq!(engine.pawn_position(), at(0, 4));
}

#[test]
fn test_identical_builds_resolve_identically() {
    let (a, _) = yard();
    let (b, _) = yard();
    let extent = a.map().extent().unwrap();
    for cell in extent {
        assert_eq!(a.tile_state(cell), b.tile_state(cell));
    }
}
