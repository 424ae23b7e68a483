//! Columnar data handed over by the dashboard host.

use serde::{Deserialize, Serialize};

/// Kind of values a field holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Number,
    Text,
}

/// The values of one field, one per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "values", rename_all = "lowercase")]
pub enum FieldValues {
    Number(Vec<f64>),
    Text(Vec<String>),
}

impl FieldValues {
    pub fn len(&self) -> usize {
        match self {
            Self::Number(v) => v.len(),
            Self::Text(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Number(_) => FieldType::Number,
            Self::Text(_) => FieldType::Text,
        }
    }

    /// Numeric value at `row`, if the field is numeric.
    pub fn number(&self, row: usize) -> Option<f64> {
        match self {
            Self::Number(v) => v.get(row).copied(),
            Self::Text(_) => None,
        }
    }

    /// Value at `row` rendered as text.
    pub fn label(&self, row: usize) -> Option<String> {
        match self {
            Self::Number(v) => v.get(row).map(|n| n.to_string()),
            Self::Text(v) => v.get(row).cloned(),
        }
    }
}

/// A link template attached to a field.
///
/// `${__value.raw}` and `${__field.name}` in the title or URL are replaced
/// per row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkTemplate {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub target_blank: bool,
}

/// Per-field display configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FieldConfig {
    pub display_name: Option<String>,
    pub min: Option<f64>,
    pub max: Option<f64>,
    pub unit: Option<String>,
    pub decimals: Option<usize>,
    pub links: Vec<LinkTemplate>,
}

/// A named column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(flatten)]
    pub values: FieldValues,
    #[serde(default)]
    pub config: FieldConfig,
}

impl Field {
    pub fn number(name: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Number(values),
            config: FieldConfig::default(),
        }
    }

    pub fn text<S: Into<String>>(name: impl Into<String>, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            values: FieldValues::Text(values.into_iter().map(Into::into).collect()),
            config: FieldConfig::default(),
        }
    }

    pub fn with_config(mut self, config: FieldConfig) -> Self {
        self.config = config;
        self
    }

    /// Name shown to users: the configured display name, or the field name.
    pub fn display_name(&self) -> &str {
        self.config.display_name.as_deref().unwrap_or(&self.name)
    }

    pub fn is_numeric(&self) -> bool {
        self.values.field_type() == FieldType::Number
    }

    /// Value bounds used to normalize colors and sizes.
    ///
    /// Configured `min`/`max` win; a missing side falls back to the extent of
    /// the finite values. `None` for text fields or when no finite value exists.
    pub fn range(&self) -> Option<(f64, f64)> {
        let FieldValues::Number(values) = &self.values else {
            return None;
        };

        let finite = || values.iter().copied().filter(|v| v.is_finite());
        let min = self.config.min.or_else(|| finite().reduce(f64::min))?;
        let max = self.config.max.or_else(|| finite().reduce(f64::max))?;
        Some((min, max))
    }
}

/// A set of equally long fields.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DataFrame {
    pub fields: Vec<Field>,
}

impl DataFrame {
    pub fn new(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Parse a frame from JSON.
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Number of rows, taken from the first field.
    pub fn len(&self) -> usize {
        self.fields.first().map_or(0, |f| f.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn first_numeric(&self) -> Option<&Field> {
        self.fields.iter().find(|f| f.is_numeric())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> DataFrame {
        DataFrame::new(vec![
            Field::text("host", ["a", "b", "c"]),
            Field::number("cpu", vec![0.5, 2.0, 1.0]),
        ])
    }

    #[test]
    fn length_from_first_field() {
        assert_eq!(frame().len(), 3);
        assert!(DataFrame::default().is_empty());
    }

    #[test]
    fn lookup_by_name() {
        let frame = frame();
        assert!(frame.field("cpu").is_some());
        assert!(frame.field("mem").is_none());
        assert_eq!(frame.first_numeric().map(|f| f.name.as_str()), Some("cpu"));
    }

    #[test]
    fn labels_render_numbers_and_text() {
        let frame = frame();
        assert_eq!(frame.fields[0].values.label(1).as_deref(), Some("b"));
        assert_eq!(frame.fields[1].values.label(1).as_deref(), Some("2"));
        assert_eq!(frame.fields[1].values.label(0).as_deref(), Some("0.5"));
        assert_eq!(frame.fields[1].values.label(9), None);
        assert_eq!(frame.fields[0].values.number(0), None);
    }

    #[test]
    fn range_prefers_config() {
        let field = Field::number("v", vec![3.0, f64::NAN, -1.0, 7.0]);
        assert_eq!(field.range(), Some((-1.0, 7.0)));

        let field = field.with_config(FieldConfig {
            min: Some(0.0),
            ..Default::default()
        });
        assert_eq!(field.range(), Some((0.0, 7.0)));

        assert_eq!(Field::text("t", ["x"]).range(), None);
        assert_eq!(Field::number("e", vec![]).range(), None);
    }

    #[test]
    fn display_name_falls_back_to_name() {
        let field = Field::number("cpu", vec![]);
        assert_eq!(field.display_name(), "cpu");

        let field = field.with_config(FieldConfig {
            display_name: Some("CPU load".into()),
            ..Default::default()
        });
        assert_eq!(field.display_name(), "CPU load");
    }

    #[test]
    fn parses_json_frame() {
        let frame = DataFrame::from_json(
            r#"{"fields": [
                {"name": "region", "type": "text", "values": ["eu", "us"]},
                {"name": "load", "type": "number", "values": [1.5, 3],
                 "config": {"unit": "%", "max": 10}}
            ]}"#,
        )
        .unwrap();

        assert_eq!(frame.len(), 2);
        let load = frame.field("load").unwrap();
        assert!(load.is_numeric());
        assert_eq!(load.values.number(1), Some(3.0));
        assert_eq!(load.config.unit.as_deref(), Some("%"));
        assert_eq!(load.range(), Some((1.5, 10.0)));
    }
}
