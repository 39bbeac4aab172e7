//! Normalized inclusive rectangles of cells.

use std::iter::FusedIterator;

use crate::grid::{Coordinates, Shape};

/// An axis-aligned block of cells, inclusive on both corners.
///
/// Always stored as `(min_x, min_y)..=(max_x, max_y)`, whatever corner order
/// it was built from, so two rects covering the same cells compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    min: Coordinates,
    max: Coordinates,
}

impl Rect {
    /// Create a rect from any two opposite corners.
    #[must_use]
    pub fn from_corners(a: Coordinates, b: Coordinates) -> Self {
        Self {
            min: Coordinates::new(a.x.min(b.x), a.y.min(b.y)),
            max: Coordinates::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// Create a rect from its top-left cell and extent.
    ///
    /// Cells past the `u32` range are clipped.
    #[must_use]
    pub fn from_origin(origin: Coordinates, shape: Shape) -> Self {
        let max = Coordinates::new(
            origin.x.saturating_add(shape.width() - 1),
            origin.y.saturating_add(shape.height() - 1),
        );
        Self { min: origin, max }
    }

    /// A rect covering exactly one cell.
    #[must_use]
    pub const fn cell(at: Coordinates) -> Self {
        Self { min: at, max: at }
    }

    /// Top-left (minimum) corner.
    #[must_use]
    pub const fn min(&self) -> Coordinates {
        self.min
    }

    /// Bottom-right (maximum) corner, inclusive.
    #[must_use]
    pub const fn max(&self) -> Coordinates {
        self.max
    }

    /// Extent of the rect.
    ///
    /// A rect spanning the whole `u32` axis reports `u32::MAX` for that axis.
    #[must_use]
    pub const fn shape(&self) -> Shape {
        Shape::from_positive(
            (self.max.x - self.min.x).saturating_add(1),
            (self.max.y - self.min.y).saturating_add(1),
        )
    }

    /// Check if a cell lies inside the rect.
    #[must_use]
    pub const fn contains(&self, c: Coordinates) -> bool {
        c.x >= self.min.x && c.x <= self.max.x && c.y >= self.min.y && c.y <= self.max.y
    }

    /// Number of cells covered.
    #[must_use]
    pub const fn cell_count(&self) -> u64 {
        ((self.max.x - self.min.x) as u64 + 1) * ((self.max.y - self.min.y) as u64 + 1)
    }

    /// Shift the rect by `by`, saturating at the grid edge.
    #[must_use]
    pub const fn translate(self, by: Coordinates) -> Self {
        Self {
            min: self.min.translate(by),
            max: self.max.translate(by),
        }
    }

    /// Iterate over every covered cell in row-major order.
    #[must_use]
    pub const fn iter(&self) -> RectIter {
        RectIter {
            rect: *self,
            next: Some(self.min),
        }
    }
}

impl IntoIterator for Rect {
    type Item = Coordinates;
    type IntoIter = RectIter;

    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

impl IntoIterator for &Rect {
    type Item = Coordinates;
    type IntoIter = RectIter;

    fn into_iter(self) -> RectIter {
        self.iter()
    }
}

/// Row-major iterator over the cells of a [`Rect`].
#[derive(Debug, Clone)]
pub struct RectIter {
    rect: Rect,
    next: Option<Coordinates>,
}

impl RectIter {
    /// Cells not yet yielded.
    fn remaining(&self) -> u64 {
        let Some(next) = self.next else {
            return 0;
        };
        let width = u64::from(self.rect.max.x - self.rect.min.x) + 1;
        let full_rows = u64::from(self.rect.max.y - next.y);
        let in_row = u64::from(self.rect.max.x - next.x) + 1;
        full_rows * width + in_row
    }
}

impl Iterator for RectIter {
    type Item = Coordinates;

    fn next(&mut self) -> Option<Coordinates> {
        let current = self.next?;
        self.next = if current.x < self.rect.max.x {
            Some(Coordinates::new(current.x + 1, current.y))
        } else if current.y < self.rect.max.y {
            Some(Coordinates::new(self.rect.min.x, current.y + 1))
        } else {
            None
        };
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining()) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl FusedIterator for RectIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_corners_normalizes() {
        let a = Coordinates::new(4, 1);
        let b = Coordinates::new(2, 3);
        let rect = Rect::from_corners(a, b);
        assert_eq!(rect.min(), Coordinates::new(2, 1));
        assert_eq!(rect.max(), Coordinates::new(4, 3));
        assert_eq!(rect, Rect::from_corners(b, a));
    }

    #[test]
    fn test_from_origin() {
        let rect = Rect::from_origin(Coordinates::new(1, 2), Shape::new(3, 2).unwrap());
        assert_eq!(rect.max(), Coordinates::new(3, 3));
        assert_eq!(rect.shape(), Shape::new(3, 2).unwrap());
        assert_eq!(rect.cell_count(), 6);
    }

    #[test]
    fn test_iter_row_major() {
        let rect = Rect::from_corners(Coordinates::new(0, 0), Coordinates::new(1, 1));
        let cells: Vec<_> = rect.iter().collect();
        assert_eq!(
            cells,
            vec![
                Coordinates::new(0, 0),
                Coordinates::new(1, 0),
                Coordinates::new(0, 1),
                Coordinates::new(1, 1),
            ]
        );
    }

    #[test]
    fn test_iter_size_hint() {
        let rect = Rect::from_corners(Coordinates::new(2, 2), Coordinates::new(4, 5));
        let mut iter = rect.iter();
        assert_eq!(iter.size_hint(), (12, Some(12)));
        iter.next();
        iter.next();
        iter.next();
        assert_eq!(iter.size_hint(), (9, Some(9)));
        assert_eq!(iter.count(), 9);
    }

    #[test]
    fn test_iter_is_restartable() {
        let rect = Rect::from_corners(Coordinates::new(0, 0), Coordinates::new(2, 0));
        assert_eq!(rect.iter().count(), 3);
        assert_eq!(rect.iter().count(), 3);
    }

    #[test]
    fn test_single_cell() {
        let at = Coordinates::new(9, 9);
        let rect = Rect::cell(at);
        assert_eq!(rect.iter().collect::<Vec<_>>(), vec![at]);
        assert_eq!(rect, Rect::from_corners(at, at));
    }

    #[test]
    fn test_edge_of_grid() {
        let rect = Rect::from_corners(
            Coordinates::new(u32::MAX - 1, 0),
            Coordinates::new(u32::MAX, 0),
        );
        assert_eq!(rect.iter().count(), 2);
    }
}
