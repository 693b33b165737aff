use serde::{Deserialize, Serialize};

use crate::grid::PointId;

/// Why a candidate segment may not be drawn.
///
/// Gameplay never returns these as `Err`; they travel inside
/// `Activation::SelectionCleared` and in logs.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum IllegalMove {
    #[error("{0} is not on the grid")]
    UnknownPoint(PointId),

    #[error("a segment needs two distinct points")]
    SamePoint,

    #[error("{0} is blocked")]
    BlockedEndpoint(PointId),

    #[error("{from} and {to} are already connected")]
    DuplicateSegment { from: PointId, to: PointId },

    #[error("{from} and {to} are not on a straight or diagonal line")]
    NotAligned { from: PointId, to: PointId },

    #[error("path passes through blocked {0}")]
    BlockedPath(PointId),

    #[error("connecting {from} and {to} would close a loop")]
    WouldCloseCycle { from: PointId, to: PointId },

    #[error("segment would cross segment #{index}")]
    CrossesSegment { index: usize },
}

/// Errors that can occur when validating match configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size {size} is too small (need at least 2)")]
    GridTooSmall { size: usize },

    #[error("grid size {size} exceeds the maximum of {max}")]
    GridTooLarge { size: usize, max: usize },

    #[error("search budget must be greater than zero")]
    ZeroSearchBudget,
}

/// Errors that can occur when encoding or decoding a match snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("bincode error: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("snapshot config is invalid: {0}")]
    Config(#[from] ConfigError),
}
