//! Positive two-dimensional extents.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ConstructionError;
use crate::grid::Coordinates;

/// Width and height of a region, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShape")]
pub struct Shape {
    width: u32,
    height: u32,
}

/// Unvalidated wire form of [`Shape`].
#[derive(Deserialize)]
struct RawShape {
    width: u32,
    height: u32,
}

impl TryFrom<RawShape> for Shape {
    type Error = ConstructionError;

    fn try_from(raw: RawShape) -> Result<Self, Self::Error> {
        Shape::new(raw.width, raw.height)
    }
}

impl Shape {
    /// A single cell.
    pub const UNIT: Shape = Shape {
        width: 1,
        height: 1,
    };

    /// Create a new shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroShape`] if either dimension is zero.
    pub fn new(width: u32, height: u32) -> Result<Self, ConstructionError> {
        if width == 0 || height == 0 {
            return Err(ConstructionError::ZeroShape { width, height });
        }
        Ok(Self { width, height })
    }

    /// Create a square shape.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::ZeroShape`] if `side` is zero.
    pub fn square(side: u32) -> Result<Self, ConstructionError> {
        Self::new(side, side)
    }

    /// Build from dimensions already known to be positive.
    pub(crate) const fn from_positive(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Get the width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Get the height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Check if a coordinate, relative to the shape's top-left, lies inside.
    #[must_use]
    pub const fn contains(&self, local: Coordinates) -> bool {
        local.x < self.width && local.y < self.height
    }

    /// Smallest shape covering both `self` and `other` when both share a top-left.
    #[must_use]
    pub fn union(self, other: Shape) -> Shape {
        Shape {
            width: self.width.max(other.width),
            height: self.height.max(other.height),
        }
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
