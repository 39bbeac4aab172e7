//! Layers: bounded, prioritized stacks of masks.

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;
use crate::grid::{Coordinates, Rect, Shape};
use crate::map::{Effect, Mask};

/// Classification of a layer for the host. Does not affect resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerKind {
    /// Unclassified.
    #[default]
    Default,
    /// Ground and decoration textures.
    Texture,
    /// Structural obstacles.
    Block,
    /// Interactive triggers.
    Action,
}

/// An ordered set of masks sharing bounds and a priority.
///
/// A layer sits at `offset` inside its map's local space and only answers for
/// cells inside `offset + bounds`. Mask selectors are relative to `offset`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    name: String,
    kind: LayerKind,
    bounds: Shape,
    masks: Vec<Mask>,
    priority: i32,
    offset: Coordinates,
}

impl Layer {
    /// Create a new layer at the map's local origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::DuplicateMask`] if two masks share a name.
    pub fn new(
        name: impl Into<String>,
        kind: LayerKind,
        bounds: Shape,
        masks: Vec<Mask>,
        priority: i32,
    ) -> Result<Self, ConstructionError> {
        let mut layer = Self {
            name: name.into(),
            kind,
            bounds,
            masks: Vec::with_capacity(masks.len()),
            priority,
            offset: Coordinates::default(),
        };
        for mask in masks {
            layer.push_mask(mask)?;
        }
        Ok(layer)
    }

    /// Place the layer at `offset` inside the map's local space.
    #[must_use]
    pub const fn with_offset(mut self, offset: Coordinates) -> Self {
        self.offset = offset;
        self
    }

    /// Get the layer name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the layer kind.
    #[must_use]
    pub const fn kind(&self) -> LayerKind {
        self.kind
    }

    /// Get the layer bounds.
    #[must_use]
    pub const fn bounds(&self) -> Shape {
        self.bounds
    }

    /// Get the priority. Higher priorities override lower ones.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Get the layer's offset inside the map.
    #[must_use]
    pub const fn offset(&self) -> Coordinates {
        self.offset
    }

    /// Get the masks in declaration order.
    #[must_use]
    pub fn masks(&self) -> &[Mask] {
        &self.masks
    }

    /// Find a mask by name.
    #[must_use]
    pub fn mask(&self, name: &str) -> Option<&Mask> {
        self.masks.iter().find(|m| m.name == name)
    }

    /// Append a mask on top of the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::DuplicateMask`] if the name is taken.
    pub fn push_mask(&mut self, mask: Mask) -> Result<(), ConstructionError> {
        if self.mask(&mask.name).is_some() {
            return Err(ConstructionError::DuplicateMask {
                layer: self.name.clone(),
                mask: mask.name,
            });
        }
        self.masks.push(mask);
        Ok(())
    }

    /// Cells of map-local space this layer answers for.
    #[must_use]
    pub fn area(&self) -> Rect {
        Rect::from_origin(self.offset, self.bounds)
    }

    /// Check if a map-local cell falls inside the layer.
    #[must_use]
    pub fn contains(&self, local: Coordinates) -> bool {
        local.is_within(self.offset, self.bounds)
    }

    /// The layer's effect at a map-local cell.
    ///
    /// When several masks cover the cell, the last declared one wins.
    /// Returns `None` outside the bounds or where no mask applies.
    #[must_use]
    pub fn effect_at(&self, local: Coordinates) -> Option<Effect> {
        let rel = local.relative_to(self.offset)?;
        if !self.bounds.contains(rel) {
            return None;
        }
        self.masks
            .iter()
            .rev()
            .find(|mask| mask.covers(rel))
            .map(|mask| mask.effect)
    }

    /// A copy of this layer shifted by `by` inside the map.
    #[must_use]
    pub fn translated(&self, by: Coordinates) -> Self {
        let mut layer = self.clone();
        layer.offset = self.offset.translate(by);
        layer
    }
}
