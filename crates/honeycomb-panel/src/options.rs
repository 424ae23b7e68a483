//! Panel options as stored by the dashboard host.

use serde::{Deserialize, Serialize};

use crate::error::{PanelError, Result};

/// User-facing panel configuration.
///
/// Keys are camelCase to match the host's option paths. Missing keys take
/// their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PanelOptions {
    /// Field shown in the menu header. Defaults to the first numeric field.
    pub value_field_name: Option<String>,
    /// Field driving the fill color. Defaults to the value field.
    pub color_by_field: Option<String>,
    /// Scale hexagons by a field
    pub enable_size_by_field: bool,
    /// Field driving the size when enabled. Defaults to the value field.
    pub size_by_field: Option<String>,
    /// Split items into one honeycomb per distinct value
    pub group_by_field: Option<String>,
    /// Fraction of the hexagon radius left as a gap, in [0, 1)
    pub padding: f64,
    /// Draw a faint full-size hexagon behind each item
    pub background: bool,
    /// Draw bounding boxes of the layout areas
    pub guides: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            value_field_name: None,
            color_by_field: None,
            enable_size_by_field: false,
            size_by_field: None,
            group_by_field: None,
            padding: 0.1,
            background: true,
            guides: false,
        }
    }
}

impl PanelOptions {
    /// Parse options from the host's JSON and validate them.
    pub fn from_json(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Check value ranges serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if !(self.padding.is_finite() && (0.0..1.0).contains(&self.padding)) {
            return Err(PanelError::InvalidOption {
                name: "padding",
                reason: format!("{} is outside [0, 1)", self.padding),
            });
        }
        Ok(())
    }

    /// Padding presets offered by the host editor: 0%, 10%, ... 90%.
    pub fn padding_presets() -> impl Iterator<Item = f64> {
        (0..10).map(|i| i as f64 / 10.0)
    }
}
