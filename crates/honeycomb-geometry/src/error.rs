//! Error types for honeycomb-geometry.

use thiserror::Error;

/// Result type for geometry operations.
pub type Result<T> = std::result::Result<T, GeometryError>;

/// Errors raised by coordinate constructors and search configuration.
///
/// A rectangle that cannot hold the requested hexagons is not an error:
/// the optimizer reports it as `None`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    /// Cube components do not sum to zero.
    #[error("cube coordinate ({x}, {y}, {z}) violates x + y + z = 0")]
    CubeConstraint { x: i64, y: i64, z: i64 },

    /// Search step must be finite and positive.
    #[error("invalid search step: {0}")]
    InvalidStep(f64),

    /// Starting radius must be finite and positive.
    #[error("invalid starting radius: {0}")]
    InvalidStart(f64),
}
