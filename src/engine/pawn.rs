//! The movable entity.

use serde::{Deserialize, Serialize};

use crate::grid::{Coordinates, Rect, Shape};
use crate::map::ResourceId;

/// The token the engine moves around.
///
/// `position` is the top-left cell of the footprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pawn {
    /// Anchor cell.
    pub position: Coordinates,
    /// Cells occupied, anchored at `position`.
    pub footprint: Shape,
    /// Texture the host draws for the pawn.
    pub appearance: Option<ResourceId>,
}

impl Pawn {
    /// A one-cell pawn with no appearance.
    #[must_use]
    pub const fn new(position: Coordinates) -> Self {
        Self {
            position,
            footprint: Shape::UNIT,
            appearance: None,
        }
    }

    /// Set the footprint.
    #[must_use]
    pub const fn with_footprint(mut self, footprint: Shape) -> Self {
        self.footprint = footprint;
        self
    }

    /// Set the appearance.
    #[must_use]
    pub const fn with_appearance(mut self, appearance: ResourceId) -> Self {
        self.appearance = Some(appearance);
        self
    }

    /// Cells currently covered.
    #[must_use]
    pub fn occupied(&self) -> Rect {
        Rect::from_origin(self.position, self.footprint)
    }
}
