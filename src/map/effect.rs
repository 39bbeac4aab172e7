//! Tile effects and resource ids.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque handle to an entry of a [`crate::library::ResourceLibrary`].
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ResourceId(u32);

impl ResourceId {
    /// Wrap a raw id.
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw id.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Payload a mask applies to the cells it selects.
///
/// Absent references are `None`; there is no other "no resource" value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Effect {
    /// Texture to draw on the tile.
    pub texture_key: Option<ResourceId>,
    /// Action to invoke when the pawn enters the tile.
    pub action_key: Option<ResourceId>,
    /// Whether the pawn may not enter the tile.
    pub blocks_movement: bool,
    /// Whether the tile hides or disables interaction.
    pub blocks_interaction: bool,
}

impl Effect {
    /// An effect that does nothing.
    pub const NONE: Effect = Effect {
        texture_key: None,
        action_key: None,
        blocks_movement: false,
        blocks_interaction: false,
    };

    /// Set the texture.
    #[must_use]
    pub const fn with_texture(mut self, texture: ResourceId) -> Self {
        self.texture_key = Some(texture);
        self
    }

    /// Set the action.
    #[must_use]
    pub const fn with_action(mut self, action: ResourceId) -> Self {
        self.action_key = Some(action);
        self
    }

    /// Mark the effect as blocking movement.
    #[must_use]
    pub const fn blocking_movement(mut self) -> Self {
        self.blocks_movement = true;
        self
    }

    /// Mark the effect as blocking interaction.
    #[must_use]
    pub const fn blocking_interaction(mut self) -> Self {
        self.blocks_interaction = true;
        self
    }

    /// Check if the effect carries nothing at all.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.texture_key.is_none()
            && self.action_key.is_none()
            && !self.blocks_movement
            && !self.blocks_interaction
    }

    /// Fold a higher-priority contribution over this one.
    ///
    /// References set in `upper` replace ours; unset ones fall through.
    /// Blocking flags accumulate: if either side blocks, the result blocks.
    #[must_use]
    pub const fn overlaid_with(self, upper: Effect) -> Effect {
        Effect {
            texture_key: match upper.texture_key {
                Some(id) => Some(id),
                None => self.texture_key,
            },
            action_key: match upper.action_key {
                Some(id) => Some(id),
                None => self.action_key,
            },
            blocks_movement: self.blocks_movement || upper.blocks_movement,
            blocks_interaction: self.blocks_interaction || upper.blocks_interaction,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(Effect::default().is_empty());
        assert_eq!(Effect::default(), Effect::NONE);
        assert!(!Effect::NONE.blocking_interaction().is_empty());
    }

    #[test]
    fn test_overlay_overrides_set_references() {
        let lower = Effect::NONE
            .with_texture(ResourceId::new(1))
            .with_action(ResourceId::new(2));
        let upper = Effect::NONE.with_texture(ResourceId::new(3));

        let merged = lower.overlaid_with(upper);
        assert_eq!(merged.texture_key, Some(ResourceId::new(3)));
        assert_eq!(merged.action_key, Some(ResourceId::new(2)));
    }

    #[test]
    fn test_overlay_accumulates_blocking() {
        let lower = Effect::NONE.blocking_movement();
        let upper = Effect::NONE.with_texture(ResourceId::new(9));

        let merged = lower.overlaid_with(upper);
        assert!(merged.blocks_movement);
        assert!(!merged.blocks_interaction);

        let merged = upper.overlaid_with(Effect::NONE.blocking_interaction());
        assert!(merged.blocks_interaction);
        assert_eq!(merged.texture_key, Some(ResourceId::new(9)));
    }

    #[test]
    fn test_resource_id_display() {
        assert_eq!(ResourceId::new(12).to_string(), "#12");
        assert_eq!(ResourceId::new(12).get(), 12);
    }
}
