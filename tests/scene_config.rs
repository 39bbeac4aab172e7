//! Scene description loading tests.
//!
//! Run with: cargo test scene_config

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]

use std::fs;

use tempfile::tempdir;
use tilegrid::config::{LayerConfig, MaskConfig, SelectorConfig};
use tilegrid::{ConfigError, ConstructionError, Coordinates, ResourceLibrary, SceneConfig, Shape};

const MINIMAL: &str = r#"{
    "name": "tiny",
    "map": {
        "name": "tiny",
        "origin": { "x": 10, "y": 20 },
        "layers": [{ "name": "floor", "bounds": { "width": 2, "height": 2 } }]
    },
    "pawn": { "position": { "x": 11, "y": 21 } }
}"#;

#[test]
fn test_load_from_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("tiny.json");
    fs::write(&path, MINIMAL).unwrap();

    let config = SceneConfig::load(&path).unwrap();
    assert_eq!(config.name, "tiny");
    assert!(config.resources.textures.is_empty());

    let scene = config.build(&mut ResourceLibrary::new()).unwrap();
    assert!(scene.map().contains(Coordinates::new(10, 20)));
    assert!(!scene.map().contains(Coordinates::new(0, 0)));
    assert_eq!(scene.map().effect_at(Coordinates::new(11, 21)), None);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempdir().unwrap();
    let err = SceneConfig::load(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_malformed_file_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "{ \"name\": ").unwrap();

    let err = SceneConfig::load(&path).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
    assert!(err.to_string().starts_with("invalid scene description"));
}

#[test]
fn test_pawn_outside_map_fails_to_build() {
    let json = MINIMAL.replace(r#""x": 11, "y": 21"#, r#""x": 0, "y": 0"#);
    let config = SceneConfig::from_json(&json).unwrap();
    let err = config.build(&mut ResourceLibrary::new()).unwrap_err();
    assert_eq!(
        err,
        ConstructionError::PawnOutOfBounds {
            position: Coordinates::new(0, 0)
        }
    );
    assert!(matches!(ConfigError::from(err), ConfigError::Construction(_)));
}

#[test]
fn test_saved_config_reloads() {
    let mut config = SceneConfig::from_json(MINIMAL).unwrap();
    config.map.layers.push(LayerConfig {
        name: "rocks".to_string(),
        kind: tilegrid::LayerKind::Block,
        bounds: Shape::new(2, 2).unwrap(),
        offset: Coordinates::new(1, 0),
        priority: 3,
        masks: vec![MaskConfig {
            name: "rock".to_string(),
            selector: SelectorConfig::Block([Coordinates::new(0, 1), Coordinates::new(0, 0)]),
            effect: tilegrid::config::EffectConfig {
                blocks_movement: true,
                ..Default::default()
            },
        }],
    });

    let dir = tempdir().unwrap();
    let path = dir.path().join("saved.json");
    fs::write(&path, config.to_json().unwrap()).unwrap();
    let reloaded = SceneConfig::load(&path).unwrap();
    assert_eq!(reloaded, config);

    let scene = reloaded.build(&mut ResourceLibrary::new()).unwrap();
    let map = scene.map();
    assert_eq!(map.shape(), Some(Shape::new(3, 2).unwrap()));
    assert!(map.effect_at(Coordinates::new(11, 21)).unwrap().blocks_movement);
    assert!(map.effect_at(Coordinates::new(12, 20)).is_none());
}
