//! Cardinal step directions.

use crate::grid::Coordinates;

/// One of the four unit steps on the grid. Up decreases `y`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards `y - 1`.
    Up,
    /// Towards `y + 1`.
    Down,
    /// Towards `x - 1`.
    Left,
    /// Towards `x + 1`.
    Right,
}

impl Direction {
    /// All directions, in a fixed order.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// The `(dx, dy)` unit delta of this direction.
    #[must_use]
    pub const fn delta(self) -> (i64, i64) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction whose delta is `(dx, dy)`, if any.
    #[must_use]
    pub const fn from_delta(dx: i64, dy: i64) -> Option<Self> {
        match (dx, dy) {
            (0, -1) => Some(Direction::Up),
            (0, 1) => Some(Direction::Down),
            (-1, 0) => Some(Direction::Left),
            (1, 0) => Some(Direction::Right),
            _ => None,
        }
    }

    /// The direction leading from `from` to an adjacent `to`.
    #[must_use]
    pub fn between(from: Coordinates, to: Coordinates) -> Option<Self> {
        Self::from_delta(
            i64::from(to.x) - i64::from(from.x),
            i64::from(to.y) - i64::from(from.y),
        )
    }

    /// The direction pointing the other way.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Take one step from `from`.
    ///
    /// Returns `None` if the step leaves the non-negative grid.
    #[must_use]
    pub fn step(self, from: Coordinates) -> Option<Coordinates> {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }

    /// Cells adjacent to `at`, skipping those off the grid.
    pub fn neighbors(at: Coordinates) -> impl Iterator<Item = Coordinates> {
        Self::ALL.into_iter().filter_map(move |d| d.step(at))
    }
}
