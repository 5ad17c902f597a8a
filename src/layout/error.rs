//! Error panel: a fixed title and the wrapped error report below it

use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, Face, Point};
use unicode_width::UnicodeWidthChar;

pub const REQUIRED_FACES: [Face; 2] = [Face::ErrorTitle, Face::ErrorDetail];

pub const TITLE: &str = "ERROR";
/// Error panel origin, independent of the configured margins
pub const ORIGIN: Point = Point::new(20.0, 20.0);
/// Gap between the title and the report
pub const TITLE_GAP: f64 = 40.0;
/// Report wrap width, in display columns
pub const WRAP_COLUMNS: usize = 45;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErrorLayout {
    pub title_left: Point,
    pub detail_left: Point,
}

impl ErrorLayout {
    pub fn compute(metrics: &FaceMetrics<'_>, origin: Point) -> Result<Self, ConfigError> {
        let title = metrics.measure(Face::ErrorTitle, TITLE)?;
        Ok(Self {
            title_left: origin,
            detail_left: origin.offset(0.0, title.h() + TITLE_GAP),
        })
    }

    pub fn named(&self) -> AnchorMap {
        AnchorMap::from([("title_left", self.title_left), ("detail_left", self.detail_left)])
    }
}

/// Wrap `text` to lines of at most `columns` display columns.
///
/// Breaks at spaces where possible and hard-splits words longer than a
/// line. Existing line breaks are kept; blank lines are dropped.
pub fn wrap(text: &str, columns: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width: usize = word.chars().filter_map(|c| c.width()).sum();

            if line_width > 0 && line_width + 1 + word_width <= columns {
                line.push(' ');
                line.push_str(word);
                line_width += 1 + word_width;
                continue;
            }
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }

            for c in word.chars() {
                let w = c.width().unwrap_or(0);
                if line_width + w > columns && line_width > 0 {
                    lines.push(std::mem::take(&mut line));
                    line_width = 0;
                }
                line.push(c);
                line_width += w;
            }
        }

        if !line.is_empty() {
            lines.push(line);
        }
    }

    lines
}
