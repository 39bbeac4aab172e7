//! Error types for grid construction, movement and scene loading.

use std::fmt;
use std::io;

use crate::grid::Coordinates;
use crate::map::ResourceId;

/// Malformed input rejected while building the grid model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConstructionError {
    /// A shape with a zero dimension.
    ZeroShape {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },
    /// Two masks in the same layer share a name.
    DuplicateMask {
        /// Layer holding the masks.
        layer: String,
        /// The repeated mask name.
        mask: String,
    },
    /// The pawn footprint does not fit inside the scene's map.
    PawnOutOfBounds {
        /// Where the pawn was placed.
        position: Coordinates,
    },
}

impl fmt::Display for ConstructionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstructionError::ZeroShape { width, height } => {
                write!(f, "shape dimensions must be positive, got {width}x{height}")
            }
            ConstructionError::DuplicateMask { layer, mask } => {
                write!(f, "layer `{layer}` already has a mask named `{mask}`")
            }
            ConstructionError::PawnOutOfBounds { position } => {
                write!(f, "pawn at {position} does not fit inside the map")
            }
        }
    }
}

impl std::error::Error for ConstructionError {}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Some cell of the destination lies outside every layer.
    OutOfBounds,
    /// Some cell of the destination resolves to a movement-blocking effect.
    Blocked,
    /// No walkable path leads to the destination.
    Unreachable,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::OutOfBounds => write!(f, "out of bounds"),
            RejectReason::Blocked => write!(f, "blocked"),
            RejectReason::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// A refused move. The pawn has not moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovementRejected {
    /// Requested destination, `None` when a step would leave the grid entirely.
    pub target: Option<Coordinates>,
    /// Why the move was refused.
    pub reason: RejectReason,
}

impl MovementRejected {
    /// Create a rejection for a concrete destination.
    #[must_use]
    pub const fn new(target: Coordinates, reason: RejectReason) -> Self {
        Self {
            target: Some(target),
            reason,
        }
    }

    /// Create a rejection for a step that leaves the non-negative grid.
    #[must_use]
    pub const fn off_grid() -> Self {
        Self {
            target: None,
            reason: RejectReason::OutOfBounds,
        }
    }
}

impl fmt::Display for MovementRejected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.target {
            Some(target) => write!(f, "move to {target} rejected: {}", self.reason),
            None => write!(f, "move rejected: {}", self.reason),
        }
    }
}

impl std::error::Error for MovementRejected {}

/// A tile referenced an action that has no registered handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionInvocationFailure {
    /// The unresolved action id.
    pub action: ResourceId,
    /// The library key behind the id, if the id is known at all.
    pub key: Option<String>,
}

impl fmt::Display for ActionInvocationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.key {
            Some(key) => write!(f, "no action handler registered for `{key}` ({})", self.action),
            None => write!(f, "no action handler registered for {}", self.action),
        }
    }
}

impl std::error::Error for ActionInvocationFailure {}

/// Outcome of a failed movement command.
///
/// `Rejected` means the pawn stayed put. `Action` means the pawn moved but the
/// entered tile's action could not be invoked; the move is not rolled back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// The move was refused.
    Rejected(MovementRejected),
    /// The move happened, its action did not.
    Action(ActionInvocationFailure),
}

impl MoveError {
    /// Whether the pawn's position changed despite the error.
    #[must_use]
    pub const fn moved(&self) -> bool {
        matches!(self, MoveError::Action(_))
    }
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::Rejected(e) => write!(f, "{e}"),
            MoveError::Action(e) => write!(f, "moved, but {e}"),
        }
    }
}

impl std::error::Error for MoveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            MoveError::Rejected(e) => Some(e),
            MoveError::Action(e) => Some(e),
        }
    }
}

impl From<MovementRejected> for MoveError {
    fn from(e: MovementRejected) -> Self {
        MoveError::Rejected(e)
    }
}

impl From<ActionInvocationFailure> for MoveError {
    fn from(e: ActionInvocationFailure) -> Self {
        MoveError::Action(e)
    }
}

/// Failure to load a scene description.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io(io::Error),
    /// The file is not a valid scene description.
    Parse(serde_json::Error),
    /// The description parsed but describes an invalid model.
    Construction(ConstructionError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "invalid scene description: {e}"),
            ConfigError::Construction(e) => write!(f, "invalid scene: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(e) => Some(e),
            ConfigError::Parse(e) => Some(e),
            ConfigError::Construction(e) => Some(e),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(e: io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

impl From<ConstructionError> for ConfigError {
    fn from(e: ConstructionError) -> Self {
        ConfigError::Construction(e)
    }
}

/// Text that is not an `x,y` coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseCoordinatesError {
    input: String,
}

impl ParseCoordinatesError {
    pub(crate) fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
        }
    }
}

impl fmt::Display for ParseCoordinatesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected coordinates as `x,y`, got `{}`", self.input)
    }
}

impl std::error::Error for ParseCoordinatesError {}
