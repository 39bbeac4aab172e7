//! Map composition and effect resolution.
//!
//! A [`Map`] is a stack of independently authored [`Layer`]s. The effective
//! state of a cell is found by:
//! - taking every layer whose bounds contain the cell
//! - ordering them by ascending priority (ties keep insertion order)
//! - taking each layer's last matching mask
//! - folding those effects bottom-up with [`Effect::overlaid_with`]

mod effect;
mod layer;
mod mask;
mod routing;

pub use effect::{Effect, ResourceId};
pub use layer::{Layer, LayerKind};
pub use mask::Mask;

use crate::error::RejectReason;
use crate::grid::{Coordinates, Rect, Shape};

/// A named stack of layers anchored at an origin.
///
/// Queries take absolute coordinates; layers and selectors live in the
/// map-local space that starts at `origin`.
#[derive(Debug, Clone)]
pub struct Map {
    name: String,
    layers: Vec<Layer>,
    origin: Coordinates,
    /// Indices into `layers` by ascending priority, stable for ties.
    order: Vec<usize>,
}

impl Map {
    /// Create a new map.
    #[must_use]
    pub fn new(name: impl Into<String>, layers: Vec<Layer>, origin: Coordinates) -> Self {
        let mut map = Self {
            name: name.into(),
            layers,
            origin,
            order: Vec::new(),
        };
        map.reorder();
        map
    }

    fn reorder(&mut self) {
        let layers = &self.layers;
        self.order = (0..layers.len()).collect();
        self.order.sort_by_key(|&idx| layers[idx].priority());
    }

    /// Get the map name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the origin.
    #[must_use]
    pub const fn origin(&self) -> Coordinates {
        self.origin
    }

    /// Get the layers in insertion order.
    #[must_use]
    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    /// Iterate over the layers by ascending priority.
    pub fn layers_by_priority(&self) -> impl Iterator<Item = &Layer> {
        self.order.iter().map(|&idx| &self.layers[idx])
    }

    /// Find the first layer with the given name.
    #[must_use]
    pub fn layer(&self, name: &str) -> Option<&Layer> {
        self.layers.iter().find(|l| l.name() == name)
    }

    /// Find the first layer with the given name, for appending masks.
    #[must_use]
    pub fn layer_mut(&mut self, name: &str) -> Option<&mut Layer> {
        self.layers.iter_mut().find(|l| l.name() == name)
    }

    /// Add a layer on top of the insertion order.
    pub fn push_layer(&mut self, layer: Layer) {
        self.layers.push(layer);
        self.reorder();
    }

    /// Append every layer of `other`, placed at `at` in this map's local space.
    ///
    /// Layers are never fused: a merged layer whose name is already taken
    /// sits beside the existing one, and [`Map::layer`] keeps returning the
    /// first.
    pub fn merge_at(&mut self, other: &Map, at: Coordinates) {
        self.layers
            .extend(other.layers.iter().map(|layer| layer.translated(at)));
        self.reorder();
    }

    /// Convert an absolute coordinate to map-local space.
    fn local(&self, at: Coordinates) -> Option<Coordinates> {
        at.relative_to(self.origin)
    }

    /// Bounding shape of every layer, measured from the origin.
    ///
    /// Returns `None` for a map without layers.
    #[must_use]
    pub fn shape(&self) -> Option<Shape> {
        self.layers
            .iter()
            .map(|layer| {
                let max = layer.area().max();
                Shape::from_positive(max.x.saturating_add(1), max.y.saturating_add(1))
            })
            .reduce(Shape::union)
    }

    /// Absolute rect covering [`Map::shape`].
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        self.shape()
            .map(|shape| Rect::from_origin(self.origin, shape))
    }

    /// Check if any layer contains the coordinate.
    #[must_use]
    pub fn contains(&self, at: Coordinates) -> bool {
        self.local(at)
            .is_some_and(|local| self.layers.iter().any(|layer| layer.contains(local)))
    }

    /// Per-layer contributions at a coordinate, by ascending priority.
    pub fn effects_at(&self, at: Coordinates) -> impl Iterator<Item = (&Layer, Effect)> {
        let local = self.local(at);
        self.layers_by_priority().filter_map(move |layer| {
            let effect = layer.effect_at(local?)?;
            Some((layer, effect))
        })
    }

    /// The effective effect at a coordinate.
    ///
    /// Returns `None` when no mask of any layer applies.
    #[must_use]
    pub fn effect_at(&self, at: Coordinates) -> Option<Effect> {
        self.effects_at(at)
            .map(|(_, effect)| effect)
            .reduce(Effect::overlaid_with)
    }

    /// Check whether a footprint anchored (top-left) at `anchor` may stand there.
    ///
    /// # Errors
    ///
    /// Returns [`RejectReason::OutOfBounds`] if a footprint cell is outside every
    /// layer, otherwise [`RejectReason::Blocked`] if a cell blocks movement.
    pub fn admits(&self, anchor: Coordinates, footprint: Shape) -> Result<(), RejectReason> {
        let cells = Rect::from_origin(anchor, footprint);
        if cells.shape() != footprint || !cells.iter().all(|c| self.contains(c)) {
            return Err(RejectReason::OutOfBounds);
        }
        if cells
            .iter()
            .any(|c| self.effect_at(c).is_some_and(|e| e.blocks_movement))
        {
            return Err(RejectReason::Blocked);
        }
        Ok(())
    }
}
