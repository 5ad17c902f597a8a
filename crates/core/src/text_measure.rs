//! Glyph metrics: face table lookup and text measurement

use crate::error::ConfigError;
use sense_panel_types::{BoxSize, Face, FaceConfig, FontConfig, Style};
use std::collections::BTreeMap;
use unicode_width::UnicodeWidthStr;

/// Trait for all text measurers
///
/// `measure` must be a pure function of `(style, text)`: identical inputs
/// give identical sizes for the lifetime of the process.
pub trait TextMeasure {
    fn measure(&self, style: &Style, text: &str) -> BoxSize;
}

/// Resolved face table: symbolic face → text style
#[derive(Debug, Clone, Default)]
pub struct FaceTable {
    styles: BTreeMap<Face, Style>,
}

impl FaceTable {
    /// Resolve every configured face against the font map
    pub fn from_config(
        font: &FontConfig,
        faces: &BTreeMap<Face, FaceConfig>,
    ) -> Result<Self, ConfigError> {
        let mut styles = BTreeMap::new();
        for (face, face_config) in faces {
            let family = font.map.get(&face_config.font_type).ok_or_else(|| {
                ConfigError::UnknownFontType {
                    face: *face,
                    font_type: face_config.font_type.clone(),
                }
            })?;
            styles.insert(*face, Style::new(family.clone(), face_config.size));
        }
        Ok(Self { styles })
    }

    pub fn style(&self, face: Face) -> Result<&Style, ConfigError> {
        self.styles.get(&face).ok_or(ConfigError::UnknownFace(face))
    }

    pub fn contains(&self, face: Face) -> bool {
        self.styles.contains_key(&face)
    }
}

/// Measures text by face name
///
/// Borrows the face table and a measurer for the duration of one pass;
/// an unknown face is a configuration error, never a default style.
#[derive(Clone, Copy)]
pub struct FaceMetrics<'a> {
    faces: &'a FaceTable,
    measure: &'a dyn TextMeasure,
}

impl<'a> FaceMetrics<'a> {
    pub fn new(faces: &'a FaceTable, measure: &'a dyn TextMeasure) -> Self {
        Self { faces, measure }
    }

    pub fn style(&self, face: Face) -> Result<&'a Style, ConfigError> {
        self.faces.style(face)
    }

    pub fn measure(&self, face: Face, text: &str) -> Result<BoxSize, ConfigError> {
        let style = self.faces.style(face)?;
        Ok(self.measure.measure(style, text))
    }

    pub fn measure_style(&self, style: &Style, text: &str) -> BoxSize {
        self.measure.measure(style, text)
    }
}

/// Measurer with a fixed advance per display column.
///
/// Width is `round(size × advance_ratio) × columns` (CJK characters count as
/// two columns), height is `round(size × height_ratio)`. Needs no fonts, so
/// it is used for layout previews and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedAdvanceMeasure {
    pub advance_ratio: f64,
    pub height_ratio: f64,
}

impl Default for FixedAdvanceMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: 0.5,
            height_ratio: 1.0,
        }
    }
}

impl TextMeasure for FixedAdvanceMeasure {
    fn measure(&self, style: &Style, text: &str) -> BoxSize {
        let advance = (style.size * self.advance_ratio).round() as i32;
        let columns = text.width() as i32;
        let height = (style.size * self.height_ratio).round() as i32;
        BoxSize::new(advance * columns, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tables() -> (FontConfig, BTreeMap<Face, FaceConfig>) {
        let mut font = FontConfig::default();
        font.map.insert("FUTURA_COND_BOLD".to_string(), "Futura Std Condensed Bold".to_string());
        let mut faces = BTreeMap::new();
        faces.insert(Face::Temp, FaceConfig::new("FUTURA_COND_BOLD", 170.0));
        (font, faces)
    }

    #[test]
    fn test_face_table_resolves_styles() {
        let (font, faces) = tables();
        let table = FaceTable::from_config(&font, &faces).unwrap();
        let style = table.style(Face::Temp).unwrap();
        assert_eq!(style.family, "Futura Std Condensed Bold");
        assert_eq!(style.size, 170.0);
    }

    #[test]
    fn test_unknown_face_is_config_error() {
        let (font, faces) = tables();
        let table = FaceTable::from_config(&font, &faces).unwrap();
        let measure = FixedAdvanceMeasure::default();
        let metrics = FaceMetrics::new(&table, &measure);
        let err = metrics.measure(Face::Time, "2024-01-01 00:00").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownFace(Face::Time)));
    }

    #[test]
    fn test_unknown_font_type_is_config_error() {
        let (font, mut faces) = tables();
        faces.insert(Face::Unit, FaceConfig::new("SHINGO_REGULAR", 40.0));
        let err = FaceTable::from_config(&font, &faces).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::UnknownFontType { face: Face::Unit, .. }
        ));
    }

    #[test]
    fn test_fixed_advance_counts_columns() {
        let measure = FixedAdvanceMeasure::default();
        let style = Style::new("Sans", 40.0);
        assert_eq!(measure.measure(&style, "44.4"), BoxSize::new(80, 40));
        // wide characters take two columns
        assert_eq!(measure.measure(&style, "和室"), BoxSize::new(80, 40));
        assert_eq!(measure.measure(&style, ""), BoxSize::new(0, 40));
    }
}
