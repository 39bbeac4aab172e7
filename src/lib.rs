// Allow unwrap in tests (test code is not production)
#![cfg_attr(test, allow(clippy::unwrap_used))]
//! Tilegrid: a layered tile-grid composition and pawn movement engine.
//!
//! A [`Map`] is assembled from independently authored [`Layer`]s, each a
//! prioritized stack of [`Mask`]s binding a [`Selector`] to an [`Effect`].
//! The [`Engine`] resolves those layers into one effective tile state per cell
//! and moves a [`Pawn`] over the result, firing tile actions registered in a
//! [`ResourceLibrary`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────┐
//! │   Engine (moves, walks, history)    │
//! ├─────────────────────────────────────┤
//! │   Scene (Map + Pawn)                │
//! ├──────────────────┬──────────────────┤
//! │  Map / Layer /   │  ResourceLibrary │
//! │  Mask resolution │  (keys -> ids)   │
//! ├──────────────────┴──────────────────┤
//! │   Grid primitives                   │
//! └─────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```
//! use std::rc::Rc;
//! use tilegrid::{
//!     Coordinates, Effect, Engine, Layer, LayerKind, Map, Mask, Pawn, ResourceLibrary, Scene,
//!     Selector, Shape,
//! };
//!
//! let mut library = ResourceLibrary::new();
//! let bell = library.insert_action("bell", || {});
//!
//! let floor = Layer::new(
//!     "floor",
//!     LayerKind::Action,
//!     Shape::new(4, 4)?,
//!     vec![Mask::new("bell", Selector::single(Coordinates::new(2, 0)), Effect::NONE.with_action(bell))],
//!     0,
//! )?;
//! let map = Map::new("room", vec![floor], Coordinates::new(0, 0));
//! let scene = Scene::new("demo", map, Pawn::new(Coordinates::new(0, 0)))?;
//!
//! let mut engine = Engine::new(scene).with_library(Rc::new(library));
//! engine.walk_to(Coordinates::new(2, 0))?;
//! assert_eq!(engine.pawn_position(), Coordinates::new(2, 0));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod config;
pub mod engine;
pub mod error;
pub mod grid;
pub mod library;
pub mod map;
pub mod render;

pub use config::SceneConfig;
pub use engine::{Engine, EngineConfig, Pawn, Scene};
pub use error::{
    ActionInvocationFailure, ConfigError, ConstructionError, MoveError, MovementRejected,
    RejectReason,
};
pub use grid::{Coordinates, Direction, Rect, Selector, Shape};
pub use library::{Action, Resource, ResourceLibrary};
pub use map::{Effect, Layer, LayerKind, Map, Mask, ResourceId};
