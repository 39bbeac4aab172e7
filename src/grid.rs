//! Grid primitives.
//!
//! Everything here is a small value type:
//! - [`Coordinates`] and [`Shape`] describe cells and extents
//! - [`Rect`] is a normalized inclusive block of cells
//! - [`Selector`] picks a region of a layer (one cell or a block)
//! - [`Direction`] names the four unit steps

mod coordinates;
mod direction;
mod rect;
mod selector;
mod shape;

pub use coordinates::Coordinates;
pub use direction::Direction;
pub use rect::{Rect, RectIter};
pub use selector::Selector;
pub use shape::Shape;
