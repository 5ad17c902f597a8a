//! Symbolic text faces, font tables and resolved text styles

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Symbolic face names used by the panel layouts.
///
/// The configuration maps each face to a font type and a pixel size; layout
/// code only ever refers to faces, never to fonts directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Face {
    PowerLarge,
    PowerDetailLabel,
    PowerDetailValue,
    UnitLarge,
    Place,
    Temp,
    Humi,
    Co2,
    Unit,
    Time,
    DateLarge,
    WdayLarge,
    ErrorTitle,
    ErrorDetail,
}

impl Face {
    pub fn name(&self) -> &'static str {
        match self {
            Face::PowerLarge => "POWER_LARGE",
            Face::PowerDetailLabel => "POWER_DETAIL_LABEL",
            Face::PowerDetailValue => "POWER_DETAIL_VALUE",
            Face::UnitLarge => "UNIT_LARGE",
            Face::Place => "PLACE",
            Face::Temp => "TEMP",
            Face::Humi => "HUMI",
            Face::Co2 => "CO2",
            Face::Unit => "UNIT",
            Face::Time => "TIME",
            Face::DateLarge => "DATE_LARGE",
            Face::WdayLarge => "WDAY_LARGE",
            Face::ErrorTitle => "ERROR_TITLE",
            Face::ErrorDetail => "ERROR_DETAIL",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One entry of the face table: which font type, at which pixel size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FaceConfig {
    #[serde(rename = "type")]
    pub font_type: String,
    pub size: f64,
}

impl FaceConfig {
    pub fn new(font_type: impl Into<String>, size: f64) -> Self {
        Self {
            font_type: font_type.into(),
            size,
        }
    }
}

/// Font types available to the face table.
///
/// Each value is a pango font description string such as
/// `"Futura Std Condensed Bold"`; the size is supplied by the face.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FontConfig {
    pub map: BTreeMap<String, String>,
}

/// Resolved text style: font description plus pixel size
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Style {
    pub family: String,
    pub size: f64,
}

impl Style {
    pub fn new(family: impl Into<String>, size: f64) -> Self {
        Self {
            family: family.into(),
            size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_face_serializes_as_table_key() {
        let mut faces = BTreeMap::new();
        faces.insert(Face::PowerDetailValue, FaceConfig::new("FUTURA_COND_BOLD", 80.0));
        let json = serde_json::to_string(&faces).unwrap();
        assert_eq!(json, r#"{"POWER_DETAIL_VALUE":{"type":"FUTURA_COND_BOLD","size":80.0}}"#);

        let parsed: BTreeMap<Face, FaceConfig> = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, faces);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        assert_eq!(Face::Co2.to_string(), "CO2");
        assert_eq!(
            serde_json::to_string(&Face::WdayLarge).unwrap(),
            format!("\"{}\"", Face::WdayLarge)
        );
    }
}
