//! Value formatting, coloring and data links.
//!
//! The host normally owns these; [`FieldDisplay`] is the seam where it plugs
//! in. [`PlainDisplay`] is a self-contained fallback.

use serde::{Deserialize, Serialize};

use crate::frame::Field;

/// A formatted value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayValue {
    pub text: String,
    pub suffix: Option<String>,
    /// CSS color
    pub color: String,
}

/// Where a link opens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkTarget {
    #[serde(rename = "_self")]
    SameTab,
    #[serde(rename = "_blank")]
    NewTab,
}

/// A resolved link for one row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataLink {
    pub title: String,
    pub href: String,
    pub target: LinkTarget,
}

/// Formats, colors and links field values.
pub trait FieldDisplay {
    fn display(&self, field: &Field, row: usize) -> DisplayValue;

    fn links(&self, _field: &Field, _row: usize) -> Vec<DataLink> {
        Vec::new()
    }
}

/// Green, yellow, red.
const GRADIENT: [(u8, u8, u8); 3] = [(115, 191, 105), (250, 222, 42), (242, 73, 92)];

/// Color for values that cannot be placed on the gradient.
pub const NEUTRAL_COLOR: &str = "rgb(115, 191, 105)";

/// Formatting without host support.
///
/// Numbers use the field's `decimals` when set, the unit becomes the suffix,
/// and the color follows a green-yellow-red gradient over the field range.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainDisplay;

impl PlainDisplay {
    fn text(field: &Field, row: usize) -> String {
        match (field.values.number(row), field.config.decimals) {
            (Some(v), Some(decimals)) => format!("{:.*}", decimals, v),
            _ => field.values.label(row).unwrap_or_default(),
        }
    }

    fn color(field: &Field, row: usize) -> String {
        let position = field
            .values
            .number(row)
            .zip(field.range())
            .and_then(|(v, (min, max))| normalize(v, min, max));

        match position {
            Some(t) => gradient(t.clamp(0.0, 1.0)),
            None => NEUTRAL_COLOR.to_string(),
        }
    }
}

impl FieldDisplay for PlainDisplay {
    fn display(&self, field: &Field, row: usize) -> DisplayValue {
        DisplayValue {
            text: Self::text(field, row),
            suffix: field.config.unit.clone(),
            color: Self::color(field, row),
        }
    }

    fn links(&self, field: &Field, row: usize) -> Vec<DataLink> {
        let raw = field.values.label(row).unwrap_or_default();
        let interpolate = |template: &str| {
            template
                .replace("${__value.raw}", &raw)
                .replace("${__field.name}", &field.name)
        };

        field
            .config
            .links
            .iter()
            .map(|link| DataLink {
                title: interpolate(&link.title),
                href: interpolate(&link.url),
                target: if link.target_blank {
                    LinkTarget::NewTab
                } else {
                    LinkTarget::SameTab
                },
            })
            .collect()
    }
}

/// Position of `value` between `min` and `max`.
///
/// `None` when the range is empty or anything is not finite.
pub fn normalize(value: f64, min: f64, max: f64) -> Option<f64> {
    let span = max - min;
    if !(value.is_finite() && span.is_finite()) || span <= 0.0 {
        return None;
    }
    Some((value - min) / span)
}

fn gradient(t: f64) -> String {
    let scaled = t * (GRADIENT.len() - 1) as f64;
    let lower = (scaled.floor() as usize).min(GRADIENT.len() - 2);
    let frac = scaled - lower as f64;

    let (r0, g0, b0) = GRADIENT[lower];
    let (r1, g1, b1) = GRADIENT[lower + 1];
    let mix = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;

    format!("rgb({}, {}, {})", mix(r0, r1), mix(g0, g1), mix(b0, b1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{FieldConfig, LinkTemplate};

    fn field() -> Field {
        Field::number("cpu", vec![0.0, 5.0, 10.0, f64::NAN]).with_config(FieldConfig {
            unit: Some("%".into()),
            links: vec![LinkTemplate {
                title: "Inspect ${__field.name}".into(),
                url: "/d/host?value=${__value.raw}".into(),
                target_blank: false,
            }],
            ..Default::default()
        })
    }

    #[test]
    fn text_and_suffix() {
        let value = PlainDisplay.display(&field(), 1);
        assert_eq!(value.text, "5");
        assert_eq!(value.suffix.as_deref(), Some("%"));
    }

    #[test]
    fn decimals_are_applied() {
        let mut field = field();
        field.config.decimals = Some(2);
        assert_eq!(PlainDisplay.display(&field, 1).text, "5.00");
    }

    #[test]
    fn gradient_ends_and_middle() {
        let field = field();
        assert_eq!(PlainDisplay.display(&field, 0).color, "rgb(115, 191, 105)");
        assert_eq!(PlainDisplay.display(&field, 1).color, "rgb(250, 222, 42)");
        assert_eq!(PlainDisplay.display(&field, 2).color, "rgb(242, 73, 92)");
        assert_eq!(PlainDisplay.display(&field, 3).color, NEUTRAL_COLOR);
    }

    #[test]
    fn links_are_interpolated() {
        let links = PlainDisplay.links(&field(), 2);
        assert_eq!(
            links,
            [DataLink {
                title: "Inspect cpu".into(),
                href: "/d/host?value=10".into(),
                target: LinkTarget::SameTab,
            }]
        );
    }

    #[test]
    fn normalize_handles_degenerate_ranges() {
        assert_eq!(normalize(5.0, 0.0, 10.0), Some(0.5));
        assert_eq!(normalize(5.0, 3.0, 3.0), None);
        assert_eq!(normalize(5.0, 10.0, 0.0), None);
        assert_eq!(normalize(f64::NAN, 0.0, 1.0), None);
    }

    #[test]
    fn link_target_wire_names() {
        assert_eq!(serde_json::to_string(&LinkTarget::SameTab).unwrap(), r#""_self""#);
        assert_eq!(serde_json::to_string(&LinkTarget::NewTab).unwrap(), r#""_blank""#);
    }
}
