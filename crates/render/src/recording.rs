//! Canvas that records draw operations instead of rasterizing them
//!
//! Used by `--dump-layout` to inspect where every element lands, and by the
//! integration tests, which check geometry without needing fonts.

use sense_panel_core::{Canvas, DrawError};
use sense_panel_types::{BoxSize, Color, Point, Style};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// One recorded draw call
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    Clear,
    Text {
        origin: Point,
        text: String,
        style: Style,
        color: Color,
    },
    Icon {
        origin: Point,
        path: PathBuf,
        size: BoxSize,
    },
}

/// Records every draw call in order
///
/// `clear` discards everything recorded so far, so after a render pass the
/// log only holds what is visible. A canvas that was never cleared has an
/// empty log.
#[derive(Debug, Clone)]
pub struct RecordingCanvas {
    size: BoxSize,
    /// Fixed icon size; `None` reads the real dimensions from the file
    icon_size: Option<BoxSize>,
    ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn new(size: BoxSize) -> Self {
        Self {
            size,
            icon_size: None,
            ops: Vec::new(),
        }
    }

    /// Report every icon with this size without touching the filesystem
    pub fn with_icon_size(mut self, size: BoxSize) -> Self {
        self.icon_size = Some(size);
        self
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Text strings in draw order
    pub fn texts(&self) -> impl Iterator<Item = (&str, Point)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, origin, .. } => Some((text.as_str(), *origin)),
            _ => None,
        })
    }

    pub fn find_text(&self, needle: &str) -> Option<Point> {
        self.texts()
            .find(|(text, _)| *text == needle)
            .map(|(_, origin)| origin)
    }

    fn icon_dimensions(&self, path: &Path) -> Result<BoxSize, DrawError> {
        if let Some(size) = self.icon_size {
            return Ok(size);
        }
        match image::image_dimensions(path) {
            Ok((width, height)) => Ok(BoxSize::new(width as i32, height as i32)),
            Err(image::ImageError::IoError(source)) => Err(DrawError::IconOpen {
                path: path.to_path_buf(),
                source,
            }),
            Err(e) => Err(DrawError::IconDecode {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }),
        }
    }
}

impl Canvas for RecordingCanvas {
    fn size(&self) -> BoxSize {
        self.size
    }

    fn clear(&mut self) -> Result<(), DrawError> {
        self.ops.clear();
        self.ops.push(DrawOp::Clear);
        Ok(())
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        style: &Style,
        color: Color,
    ) -> Result<(), DrawError> {
        self.ops.push(DrawOp::Text {
            origin,
            text: text.to_string(),
            style: style.clone(),
            color,
        });
        Ok(())
    }

    fn paste_icon(&mut self, origin: Point, path: &Path) -> Result<BoxSize, DrawError> {
        let size = self.icon_dimensions(path)?;
        self.ops.push(DrawOp::Icon {
            origin,
            path: path.to_path_buf(),
            size,
        });
        Ok(size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_discards_previous_ops() {
        let mut canvas = RecordingCanvas::new(BoxSize::new(100, 100));
        assert!(canvas.ops().is_empty());

        canvas
            .draw_text(Point::new(1.0, 2.0), "10min", &Style::new("Sans", 20.0), Color::BLACK)
            .unwrap();
        canvas.clear().unwrap();
        assert_eq!(canvas.ops(), &[DrawOp::Clear]);
    }

    #[test]
    fn test_fixed_icon_size_skips_file() {
        let mut canvas =
            RecordingCanvas::new(BoxSize::new(100, 100)).with_icon_size(BoxSize::new(64, 64));
        let size = canvas
            .paste_icon(Point::new(0.0, 10.0), Path::new("/nonexistent/power.png"))
            .unwrap();
        assert_eq!(size, BoxSize::new(64, 64));
    }

    #[test]
    fn test_missing_icon_file_is_open_error() {
        let mut canvas = RecordingCanvas::new(BoxSize::new(100, 100));
        let err = canvas
            .paste_icon(Point::new(0.0, 10.0), Path::new("/nonexistent/power.png"))
            .unwrap_err();
        assert!(matches!(err, DrawError::IconOpen { .. }));
        assert!(canvas.ops().is_empty());
    }

    #[test]
    fn test_json_dump_is_tagged() {
        let mut canvas = RecordingCanvas::new(BoxSize::new(100, 100));
        canvas.clear().unwrap();
        let json = serde_json::to_string_pretty(canvas.ops()).unwrap();
        assert!(json.contains(r#""op": "clear""#));
    }
}
