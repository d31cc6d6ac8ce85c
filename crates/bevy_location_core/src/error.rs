//! Errors that abort location generation.

use bevy::prelude::*;
use thiserror::Error;

/// Structural failure: generation stops before touching the destination hierarchy.
///
/// Per-node problems (missing vertices, unresolved images) are not errors; they are
/// logged and the node is generated with fallback values.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GenerateError {
    #[error("Destination container {0:?} does not exist")]
    MissingContainer(Entity),

    #[error("Pixels-to-units scale must be finite and > 0, got {0}")]
    InvalidScale(f32),
}
