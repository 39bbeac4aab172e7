//! Cell coordinates.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseCoordinatesError;
use crate::grid::Shape;

/// A cell position on the grid.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct Coordinates {
    /// X coordinate (column).
    pub x: u32,
    /// Y coordinate (row).
    pub y: u32,
}

impl Coordinates {
    /// Create a new coordinate.
    #[must_use]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Shift by a signed delta.
    ///
    /// Returns `None` if either axis would leave the `u32` range.
    #[must_use]
    pub fn offset(self, dx: i64, dy: i64) -> Option<Self> {
        let x = u32::try_from(i64::from(self.x) + dx).ok()?;
        let y = u32::try_from(i64::from(self.y) + dy).ok()?;
        Some(Self::new(x, y))
    }

    /// Translate by another coordinate pair, saturating at the grid edge.
    #[must_use]
    pub const fn translate(self, by: Coordinates) -> Self {
        Self::new(self.x.saturating_add(by.x), self.y.saturating_add(by.y))
    }

    /// Express this coordinate relative to `origin`.
    ///
    /// Returns `None` if the coordinate lies above or left of the origin.
    #[must_use]
    pub fn relative_to(self, origin: Coordinates) -> Option<Self> {
        Some(Self::new(
            self.x.checked_sub(origin.x)?,
            self.y.checked_sub(origin.y)?,
        ))
    }

    /// Check if this coordinate lies in `[origin, origin + shape)`.
    #[must_use]
    pub fn is_within(self, origin: Coordinates, shape: Shape) -> bool {
        self.relative_to(origin)
            .is_some_and(|local| shape.contains(local))
    }

    /// Manhattan distance to another coordinate.
    #[must_use]
    pub fn manhattan(self, other: Coordinates) -> u64 {
        u64::from(self.x.abs_diff(other.x)) + u64::from(self.y.abs_diff(other.y))
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Parses `x,y`, optionally wrapped in parentheses.
impl FromStr for Coordinates {
    type Err = ParseCoordinatesError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let inner = s.trim();
        let inner = inner
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(inner);

        let (x, y) = inner
            .split_once(',')
            .ok_or_else(|| ParseCoordinatesError::new(s))?;
        let x = x.trim().parse().map_err(|_| ParseCoordinatesError::new(s))?;
        let y = y.trim().parse().map_err(|_| ParseCoordinatesError::new(s))?;

        Ok(Self::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset() {
        let c = Coordinates::new(1, 1);
        assert_eq!(c.offset(1, -1), Some(Coordinates::new(2, 0)));
        assert_eq!(c.offset(-2, 0), None);
        assert_eq!(Coordinates::new(u32::MAX, 0).offset(1, 0), None);
    }

    #[test]
    fn test_relative_to() {
        let origin = Coordinates::new(2, 3);
        assert_eq!(
            Coordinates::new(5, 3).relative_to(origin),
            Some(Coordinates::new(3, 0))
        );
        assert_eq!(Coordinates::new(1, 5).relative_to(origin), None);
    }

    #[test]
    fn test_is_within() {
        let shape = Shape::new(3, 2).unwrap();
        let origin = Coordinates::new(1, 1);
        assert!(Coordinates::new(1, 1).is_within(origin, shape));
        assert!(Coordinates::new(3, 2).is_within(origin, shape));
        assert!(!Coordinates::new(4, 1).is_within(origin, shape));
        assert!(!Coordinates::new(0, 1).is_within(origin, shape));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Coordinates::new(0, 0).manhattan(Coordinates::new(3, 4)), 7);
        assert_eq!(Coordinates::new(5, 1).manhattan(Coordinates::new(2, 1)), 3);
    }

    #[test]
    fn test_manhattan_across_whole_grid() {
        let corner = Coordinates::new(u32::MAX, u32::MAX);
        assert_eq!(
            Coordinates::new(0, 0).manhattan(corner),
            2 * u64::from(u32::MAX)
        );
        assert_eq!(
            corner.manhattan(Coordinates::new(0, 0)),
            2 * u64::from(u32::MAX)
        );
    }

    #[test]
    fn test_parse() {
        assert_eq!("3,4".parse(), Ok(Coordinates::new(3, 4)));
        assert_eq!(" ( 10 , 0 ) ".parse(), Ok(Coordinates::new(10, 0)));
        assert!("3".parse::<Coordinates>().is_err());
        assert!("-1,2".parse::<Coordinates>().is_err());
        assert!("a,b".parse::<Coordinates>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Coordinates::new(7, 2).to_string(), "(7, 2)");
    }
}
