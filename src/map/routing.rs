//! Shortest walkable routes between cells.

use pathfinding::prelude::astar;

use crate::grid::{Coordinates, Direction, Shape};
use crate::map::Map;

impl Map {
    /// Find a shortest four-connected route for a footprint from `from` to `to`
    /// taking at most `max_len` steps.
    ///
    /// Every anchor on the route, `to` included, must pass [`Map::admits`].
    /// `from` itself is not checked. The returned path starts with `from` and
    /// ends with `to`; `None` means no such route exists.
    ///
    /// Cells that cannot lie on a route of `max_len` steps are never expanded,
    /// so the search visits at most `O(max_len²)` cells whatever the map size.
    #[must_use]
    pub fn find_path(
        &self,
        from: Coordinates,
        to: Coordinates,
        footprint: Shape,
        max_len: usize,
    ) -> Option<Vec<Coordinates>> {
        let max_len = u64::try_from(max_len).unwrap_or(u64::MAX);
        if from.manhattan(to) > max_len {
            return None;
        }
        if from != to && self.admits(to, footprint).is_err() {
            return None;
        }
        // Any route through `at` is at least as long as the two legs.
        let within_reach = |at: Coordinates| {
            from.manhattan(at).saturating_add(at.manhattan(to)) <= max_len
        };
        astar(
            &from,
            |&at| {
                Direction::neighbors(at)
                    .filter(|&next| within_reach(next))
                    .filter(|&next| self.admits(next, footprint).is_ok())
                    .map(|next| (next, 1u64))
                    .collect::<Vec<_>>()
            },
            |&at| at.manhattan(to),
            |&at| at == to,
        )
        .filter(|&(_, cost)| cost <= max_len)
        .map(|(path, _cost)| path)
    }
}
