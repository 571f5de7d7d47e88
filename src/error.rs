//! Crate-wide error type.

use thiserror::Error;

use crate::view::ViewState;

/// Errors raised by the hub core.
///
/// Everything here is either a content defect caught at construction time
/// or a caller contract violation. None of them are recoverable by guessing.
#[derive(Debug, Error)]
pub enum HubError {
    /// An element's target table has no entry for a view state.
    #[error("element `{id}` has no layout target for {state:?}")]
    MissingTarget { id: String, state: ViewState },

    /// A target exists but cannot be used as a spring destination.
    #[error("element `{id}` has an invalid {state:?} target: {reason}")]
    InvalidTarget {
        id: String,
        state: ViewState,
        reason: &'static str,
    },

    #[error("duplicate element id `{0}`")]
    DuplicateId(String),

    #[error("element id must not be empty")]
    EmptyId,

    /// A tunable would make the springs diverge or the projection degenerate.
    #[error("config `{field}` {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// Projection was asked for a point that is not on the emblem surface.
    #[error("point is {distance:.4} from the emblem centre, expected {radius:.4} (±{tolerance})")]
    OffSurface {
        distance: f32,
        radius: f32,
        tolerance: f32,
    },

    /// Catalog or config JSON could not be parsed.
    #[error("malformed json: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HubError>;
