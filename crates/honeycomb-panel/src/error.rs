//! Error types for honeycomb-panel.

use honeycomb_geometry::GeometryError;
use thiserror::Error;

/// Result type for panel operations.
pub type Result<T> = std::result::Result<T, PanelError>;

/// Errors that stop a panel from being composed at all.
///
/// A group that is too small for its hexagons is not an error; it is
/// reported as [`GroupContent::Unfit`](crate::GroupContent::Unfit).
#[derive(Debug, Error)]
pub enum PanelError {
    /// No value field selected and the frame has no numeric field to default to
    #[error("Select a value field")]
    MissingValueField,

    /// A field named in the options is not in the frame
    #[error("Field not found: {0}")]
    UnknownField(String),

    /// A field used for values, colors or sizes holds text
    #[error("Field is not numeric: {0}")]
    NotNumeric(String),

    /// An option is out of range
    #[error("Invalid option {name}: {reason}")]
    InvalidOption { name: &'static str, reason: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Search configuration error
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),
}
