//! Movement runtime.
//!
//! The [`Engine`] owns a [`Scene`] and is the only surface host code drives:
//! it answers tile-state queries and executes movement commands against the
//! map's resolved effects, firing tile actions through a shared
//! [`ResourceLibrary`].
//!
//! A move into a tile happens in two steps that are not transactional:
//! 1. The footprint is checked and the pawn is placed.
//! 2. The anchor tile's action, if any, is invoked.
//!
//! A failure in step 2 is reported as [`MoveError::Action`] and leaves the
//! pawn where step 1 put it.

mod pawn;
mod scene;

pub use pawn::Pawn;
pub use scene::Scene;

use std::collections::VecDeque;
use std::rc::Rc;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{ActionInvocationFailure, MoveError, MovementRejected, RejectReason};
use crate::grid::{Coordinates, Direction};
use crate::library::ResourceLibrary;
use crate::map::{Effect, Map, ResourceId};

/// Tunables for an [`Engine`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Number of past positions kept for [`Engine::undo`].
    pub history_limit: usize,
    /// Longest path, in steps, that [`Engine::walk_to`] will follow.
    pub max_walk_len: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            history_limit: 256,
            max_walk_len: 4096,
        }
    }
}

/// Runtime wrapping one scene.
#[derive(Debug)]
pub struct Engine {
    scene: Scene,
    library: Option<Rc<ResourceLibrary>>,
    config: EngineConfig,
    history: VecDeque<Coordinates>,
}

impl Engine {
    /// Create an engine with no resource library and default configuration.
    ///
    /// Without a library, entering a tile that carries an action reports
    /// [`MoveError::Action`].
    #[must_use]
    pub fn new(scene: Scene) -> Self {
        Self {
            scene,
            library: None,
            config: EngineConfig::default(),
            history: VecDeque::new(),
        }
    }

    /// Attach the library that action ids are resolved against.
    #[must_use]
    pub fn with_library(mut self, library: Rc<ResourceLibrary>) -> Self {
        self.library = Some(library);
        self
    }

    /// Replace the configuration.
    #[must_use]
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self.trim_history();
        self
    }

    /// Get the scene.
    #[must_use]
    pub const fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Get the scene's map.
    #[must_use]
    pub const fn map(&self) -> &Map {
        self.scene.map()
    }

    /// Get the attached library.
    #[must_use]
    pub fn library(&self) -> Option<&ResourceLibrary> {
        self.library.as_deref()
    }

    /// Get the configuration.
    #[must_use]
    pub const fn config(&self) -> EngineConfig {
        self.config
    }

    /// Current anchor cell of the pawn.
    #[must_use]
    pub const fn pawn_position(&self) -> Coordinates {
        self.scene.pawn().position
    }

    /// The resolved effect at a cell, `None` where nothing applies.
    #[must_use]
    pub fn tile_state(&self, at: Coordinates) -> Option<Effect> {
        self.map().effect_at(at)
    }

    /// Move the pawn's anchor to `target`.
    ///
    /// Moving onto the current position is a regular move and fires the
    /// tile's action again.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::Rejected`] if some footprint cell is outside the
    /// map or blocked; the pawn stays put. Returns [`MoveError::Action`] if the
    /// pawn moved but the target's action has no handler.
    pub fn move_to(&mut self, target: Coordinates) -> Result<(), MoveError> {
        let footprint = self.scene.pawn().footprint;
        if let Err(reason) = self.map().admits(target, footprint) {
            warn!("[Engine] Move to {target} rejected: {reason}");
            return Err(MovementRejected::new(target, reason).into());
        }

        let from = self.pawn_position();
        self.record(from);
        self.scene.pawn_mut().position = target;
        debug!("[Engine] Pawn moved {from} -> {target}");

        match self.tile_state(target).and_then(|effect| effect.action_key) {
            Some(action) => self.invoke(action).map_err(MoveError::from),
            None => Ok(()),
        }
    }

    /// Move one cell in `direction`.
    ///
    /// # Errors
    ///
    /// As [`Engine::move_to`]. A step off the non-negative grid is rejected
    /// as out of bounds.
    pub fn step(&mut self, direction: Direction) -> Result<(), MoveError> {
        let Some(target) = direction.step(self.pawn_position()) else {
            warn!("[Engine] Step {direction:?} leaves the grid");
            return Err(MovementRejected::off_grid().into());
        };
        self.move_to(target)
    }

    /// Plan a walk to `target`.
    ///
    /// The returned cells exclude the current position; walking to where the
    /// pawn already stands yields an empty plan.
    ///
    /// # Errors
    ///
    /// Returns [`MovementRejected`] with the reason the target itself is
    /// illegal, or [`RejectReason::Unreachable`] if no route exists or the
    /// route is longer than [`EngineConfig::max_walk_len`].
    pub fn steps_to(&self, target: Coordinates) -> Result<Vec<Coordinates>, MovementRejected> {
        let from = self.pawn_position();
        let footprint = self.scene.pawn().footprint;
        if from != target {
            self.map()
                .admits(target, footprint)
                .map_err(|reason| MovementRejected::new(target, reason))?;
        }

        let path = self
            .map()
            .find_path(from, target, footprint, self.config.max_walk_len)
            .ok_or_else(|| MovementRejected::new(target, RejectReason::Unreachable))?;
        Ok(path.into_iter().skip(1).collect())
    }

    /// Walk to `target` one cell at a time, firing each entered tile's action.
    ///
    /// Stops at the first failing step. Returns the number of steps taken.
    ///
    /// # Errors
    ///
    /// As [`Engine::steps_to`] before the walk starts, and as
    /// [`Engine::move_to`] for each step.
    pub fn walk_to(&mut self, target: Coordinates) -> Result<usize, MoveError> {
        let steps = self.steps_to(target).inspect_err(|e| warn!("[Engine] {e}"))?;
        debug!("[Engine] Walking {} steps to {target}", steps.len());
        for &cell in &steps {
            self.move_to(cell)?;
        }
        Ok(steps.len())
    }

    /// Return the pawn to its previous position without firing any action.
    ///
    /// Returns the restored position, or `None` if there is nothing to undo.
    pub fn undo(&mut self) -> Option<Coordinates> {
        let previous = self.history.pop_back()?;
        debug!("[Engine] Undo to {previous}");
        self.scene.pawn_mut().position = previous;
        Some(previous)
    }

    /// Past positions, oldest first.
    #[must_use]
    pub const fn history(&self) -> &VecDeque<Coordinates> {
        &self.history
    }

    fn record(&mut self, from: Coordinates) {
        self.history.push_back(from);
        self.trim_history();
    }

    fn trim_history(&mut self) {
        while self.history.len() > self.config.history_limit {
            self.history.pop_front();
        }
    }

    fn invoke(&self, action: ResourceId) -> Result<(), ActionInvocationFailure> {
        let Some(library) = self.library.as_deref() else {
            warn!("[Engine] No library attached for action {action}");
            return Err(ActionInvocationFailure { action, key: None });
        };
        info!(
            "[Engine] Invoking action `{}`",
            library.key(action).unwrap_or("?")
        );
        library
            .invoke(action)
            .inspect_err(|e| warn!("[Engine] {e}"))
    }
}
