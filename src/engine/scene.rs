//! A map paired with a pawn.

use crate::engine::Pawn;
use crate::error::{ConstructionError, RejectReason};
use crate::map::Map;

/// The active play context: one map and the pawn on it.
#[derive(Debug, Clone)]
pub struct Scene {
    name: String,
    map: Map,
    pawn: Pawn,
}

impl Scene {
    /// Create a new scene.
    ///
    /// The pawn may start on a blocked cell, but its footprint must lie
    /// inside the map.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError::PawnOutOfBounds`] if it does not.
    pub fn new(name: impl Into<String>, map: Map, pawn: Pawn) -> Result<Self, ConstructionError> {
        if map.admits(pawn.position, pawn.footprint) == Err(RejectReason::OutOfBounds) {
            return Err(ConstructionError::PawnOutOfBounds {
                position: pawn.position,
            });
        }
        Ok(Self {
            name: name.into(),
            map,
            pawn,
        })
    }

    /// Get the scene name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the map.
    #[must_use]
    pub const fn map(&self) -> &Map {
        &self.map
    }

    /// Get the pawn.
    #[must_use]
    pub const fn pawn(&self) -> &Pawn {
        &self.pawn
    }

    pub(crate) const fn pawn_mut(&mut self) -> &mut Pawn {
        &mut self.pawn
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{Coordinates, Selector, Shape};
    use crate::map::{Effect, Layer, LayerKind, Mask};

    fn map() -> Map {
        let layer = Layer::new(
            "floor",
            LayerKind::Default,
            Shape::new(4, 3).unwrap(),
            vec![Mask::new(
                "crate",
                Selector::single(Coordinates::new(1, 1)),
                Effect::NONE.blocking_movement(),
            )],
            0,
        )
        .unwrap();
        Map::new("room", vec![layer], Coordinates::new(0, 0))
    }

    #[test]
    fn test_pawn_must_fit() {
        assert!(Scene::new("ok", map(), Pawn::new(Coordinates::new(3, 2))).is_ok());

        let err = Scene::new("bad", map(), Pawn::new(Coordinates::new(4, 0))).unwrap_err();
        assert_eq!(
            err,
            ConstructionError::PawnOutOfBounds {
                position: Coordinates::new(4, 0)
            }
        );

        let wide = Pawn::new(Coordinates::new(3, 0)).with_footprint(Shape::new(2, 1).unwrap());
        assert!(Scene::new("wide", map(), wide).is_err());
    }

    #[test]
    fn test_pawn_may_start_blocked() {
        let scene = Scene::new("s", map(), Pawn::new(Coordinates::new(1, 1))).unwrap();
        assert_eq!(scene.pawn().position, Coordinates::new(1, 1));
        assert_eq!(scene.name(), "s");
        assert_eq!(scene.map().name(), "room");
    }
}
