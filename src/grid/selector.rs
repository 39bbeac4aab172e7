//! Region selectors.

use crate::grid::{Coordinates, Rect, RectIter};

/// A region of a layer: one cell or an inclusive block of cells.
///
/// Selectors are not validated against any bounds; a layer decides at query
/// time which selected cells are inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector {
    /// Exactly one cell.
    Single(Coordinates),
    /// Every cell of a normalized block.
    Block(Rect),
}

impl Selector {
    /// Select one cell.
    #[must_use]
    pub const fn single(at: Coordinates) -> Self {
        Selector::Single(at)
    }

    /// Select the block spanned by two opposite corners, in either order.
    #[must_use]
    pub fn block(a: Coordinates, b: Coordinates) -> Self {
        Selector::Block(Rect::from_corners(a, b))
    }

    /// Check if the selector covers a cell.
    #[must_use]
    pub const fn covers(&self, c: Coordinates) -> bool {
        match self {
            Selector::Single(at) => at.x == c.x && at.y == c.y,
            Selector::Block(rect) => rect.contains(c),
        }
    }

    /// Smallest rect containing every selected cell.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        match self {
            Selector::Single(at) => Rect::cell(*at),
            Selector::Block(rect) => *rect,
        }
    }

    /// Iterate over every selected cell in row-major order.
    ///
    /// Each call starts a fresh iteration.
    #[must_use]
    pub const fn coordinates(&self) -> RectIter {
        self.bounds().iter()
    }

    /// Shift the selection by `by`.
    #[must_use]
    pub const fn translate(self, by: Coordinates) -> Self {
        match self {
            Selector::Single(at) => Selector::Single(at.translate(by)),
            Selector::Block(rect) => Selector::Block(rect.translate(by)),
        }
    }
}

impl From<Coordinates> for Selector {
    fn from(at: Coordinates) -> Self {
        Selector::Single(at)
    }
}

impl From<Rect> for Selector {
    fn from(rect: Rect) -> Self {
        Selector::Block(rect)
    }
}
