//! JSON scene descriptions.
//!
//! A [`SceneConfig`] is the serializable form of a [`Scene`] plus the
//! resources and engine settings it needs. Effects name resources by string
//! key; [`SceneConfig::build`] interns those keys so a scene may reference
//! actions whose handlers the host registers later.
//!
//! ```json
//! {
//!   "name": "yard",
//!   "resources": { "textures": { "grass": "tiles/grass.png" }, "actions": ["bell"] },
//!   "map": {
//!     "name": "yard",
//!     "layers": [{
//!       "name": "ground",
//!       "kind": "texture",
//!       "bounds": { "width": 8, "height": 6 },
//!       "masks": [
//!         { "name": "grass", "selector": { "block": [{ "x": 0, "y": 0 }, { "x": 7, "y": 5 }] },
//!           "effect": { "texture": "grass" } }
//!       ]
//!     }]
//!   },
//!   "pawn": { "position": { "x": 0, "y": 0 } }
//! }
//! ```

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::engine::{EngineConfig, Pawn, Scene};
use crate::error::{ConfigError, ConstructionError};
use crate::grid::{Coordinates, Selector, Shape};
use crate::library::ResourceLibrary;
use crate::map::{Effect, Layer, LayerKind, Map, Mask};

/// A complete scene description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SceneConfig {
    /// Scene name.
    pub name: String,
    /// Engine settings.
    #[serde(default)]
    pub engine: EngineConfig,
    /// Resources the scene registers or expects.
    #[serde(default)]
    pub resources: ResourcesConfig,
    /// The map.
    pub map: MapConfig,
    /// The pawn's starting state.
    pub pawn: PawnConfig,
}

/// Resources declared by a scene.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourcesConfig {
    /// Texture locations by key.
    pub textures: BTreeMap<String, String>,
    /// Keys of actions the host is expected to bind.
    pub actions: Vec<String>,
}

/// A map description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapConfig {
    /// Map name.
    pub name: String,
    /// Absolute position of the map's top-left cell.
    #[serde(default)]
    pub origin: Coordinates,
    /// Layers in insertion order.
    pub layers: Vec<LayerConfig>,
}

/// A layer description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayerConfig {
    /// Layer name.
    pub name: String,
    /// Classification.
    #[serde(default)]
    pub kind: LayerKind,
    /// Extent, measured from `offset`.
    pub bounds: Shape,
    /// Placement inside the map.
    #[serde(default)]
    pub offset: Coordinates,
    /// Z-order; higher overrides lower.
    #[serde(default)]
    pub priority: i32,
    /// Masks in declaration order.
    #[serde(default)]
    pub masks: Vec<MaskConfig>,
}

/// A mask description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskConfig {
    /// Mask name, unique within the layer.
    pub name: String,
    /// Covered cells, relative to the layer.
    pub selector: SelectorConfig,
    /// Applied effect.
    #[serde(default)]
    pub effect: EffectConfig,
}

/// Wire form of a [`Selector`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectorConfig {
    /// One cell.
    Single(Coordinates),
    /// Two opposite corners of a block, in any order.
    Block([Coordinates; 2]),
}

impl From<SelectorConfig> for Selector {
    fn from(config: SelectorConfig) -> Self {
        match config {
            SelectorConfig::Single(at) => Selector::single(at),
            SelectorConfig::Block([a, b]) => Selector::block(a, b),
        }
    }
}

/// Wire form of an [`Effect`], referencing resources by key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EffectConfig {
    /// Texture key.
    pub texture: Option<String>,
    /// Action key.
    pub action: Option<String>,
    /// Whether the pawn may not enter.
    pub blocks_movement: bool,
    /// Whether interaction is hidden or disabled.
    pub blocks_interaction: bool,
}

impl EffectConfig {
    fn build(&self, library: &mut ResourceLibrary) -> Effect {
        Effect {
            texture_key: self.texture.as_deref().map(|key| library.intern(key)),
            action_key: self.action.as_deref().map(|key| library.intern(key)),
            blocks_movement: self.blocks_movement,
            blocks_interaction: self.blocks_interaction,
        }
    }
}

/// A pawn description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PawnConfig {
    /// Starting anchor cell, absolute.
    pub position: Coordinates,
    /// Occupied cells.
    #[serde(default = "unit_footprint")]
    pub footprint: Shape,
    /// Appearance texture key.
    #[serde(default)]
    pub appearance: Option<String>,
}

const fn unit_footprint() -> Shape {
    Shape::UNIT
}

impl SceneConfig {
    /// Parse a scene description.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON or invalid shapes.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a scene description file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`SceneConfig::from_json`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize to pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if serialization fails.
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the scene, registering textures and interning every referenced
    /// key in `library`.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] for duplicate mask names or a pawn that
    /// does not fit inside the map.
    pub fn build(&self, library: &mut ResourceLibrary) -> Result<Scene, ConstructionError> {
        for (key, url) in &self.resources.textures {
            library.insert_texture(key, url.as_str());
        }
        for key in &self.resources.actions {
            library.intern(key);
        }

        let layers = self
            .map
            .layers
            .iter()
            .map(|layer| layer.build(library))
            .collect::<Result<Vec<_>, _>>()?;
        let map = Map::new(self.map.name.as_str(), layers, self.map.origin);

        let mut pawn = Pawn::new(self.pawn.position).with_footprint(self.pawn.footprint);
        if let Some(key) = &self.pawn.appearance {
            pawn = pawn.with_appearance(library.intern(key));
        }

        Scene::new(self.name.as_str(), map, pawn)
    }
}

impl LayerConfig {
    fn build(&self, library: &mut ResourceLibrary) -> Result<Layer, ConstructionError> {
        let masks = self
            .masks
            .iter()
            .map(|mask| {
                Mask::new(
                    mask.name.as_str(),
                    mask.selector.into(),
                    mask.effect.build(library),
                )
            })
            .collect();
        Ok(Layer::new(
            self.name.as_str(),
            self.kind,
            self.bounds,
            masks,
            self.priority,
        )?
        .with_offset(self.offset))
    }
}
