//! Masks: named selector/effect bindings.

use crate::grid::{Coordinates, Selector};
use crate::map::Effect;

/// Binds one [`Effect`] to the region picked by one [`Selector`].
///
/// Mask order inside a layer matters: where masks overlap, the later one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    /// Name, unique within the owning layer.
    pub name: String,
    /// Cells the mask applies to, in layer-local coordinates.
    pub selector: Selector,
    /// What the mask applies.
    pub effect: Effect,
}

impl Mask {
    /// Create a new mask.
    #[must_use]
    pub fn new(name: impl Into<String>, selector: Selector, effect: Effect) -> Self {
        Self {
            name: name.into(),
            selector,
            effect,
        }
    }

    /// Check if the mask applies to a layer-local cell.
    #[must_use]
    pub const fn covers(&self, local: Coordinates) -> bool {
        self.selector.covers(local)
    }
}
