//! Panel renderer
//!
//! A panel owns a frame (origin and width) for one render pass, lays itself
//! out, draws its elements through a [`Painter`] and returns the y where the
//! next panel starts. Panels hold only borrowed configuration; nothing
//! survives the pass.

mod date;
mod detail;
mod error;
mod header;
mod update_time;

pub use date::DatePanel;
pub use detail::DetailPanel;
pub use error::ErrorPanel;
pub use header::HeaderPanel;
pub use update_time::UpdateTimePanel;

use crate::core::RenderError;
use sense_panel_core::{
    Canvas, ConfigError, FaceMetrics, BASELINE_OFFSET_RATIO, MUTED_GRAY, PLACEHOLDER,
};
use sense_panel_types::{AnchorMap, BoxSize, Color, Face, NumberFormat, Point};
use std::path::Path;

/// Primary text color
pub const PRIMARY: Color = Color::BLACK;

/// Secondary text color (date, update time)
pub fn muted() -> Color {
    Color::gray8(MUTED_GRAY)
}

/// Which edge of the text sits on the anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Where a panel sits on the canvas
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelFrame {
    /// Top-left corner, absolute canvas coordinates
    pub origin: Point,
    pub width: f64,
}

impl PanelFrame {
    pub fn new(origin: Point, width: f64) -> Self {
        Self { origin, width }
    }
}

/// Trait for all panels
pub trait Panel {
    /// Live data the panel draws
    type Data: ?Sized;

    fn name(&self) -> &'static str;

    /// Named anchors for `frame`, without drawing
    fn anchors(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<AnchorMap, ConfigError>;

    /// Draw into the painter's canvas and return the next panel's origin y
    fn draw(
        &self,
        painter: &mut Painter<'_, '_>,
        frame: PanelFrame,
        data: &Self::Data,
    ) -> Result<f64, RenderError>;
}

/// Draws text and icons by face name onto a borrowed canvas
pub struct Painter<'m, 'c> {
    metrics: FaceMetrics<'m>,
    canvas: &'c mut dyn Canvas,
}

impl<'m, 'c> Painter<'m, 'c> {
    pub fn new(metrics: FaceMetrics<'m>, canvas: &'c mut dyn Canvas) -> Self {
        Self { metrics, canvas }
    }

    pub fn metrics(&self) -> FaceMetrics<'m> {
        self.metrics
    }

    pub fn measure(&self, face: Face, text: &str) -> Result<BoxSize, ConfigError> {
        self.metrics.measure(face, text)
    }

    pub fn clear(&mut self) -> Result<(), RenderError> {
        Ok(self.canvas.clear()?)
    }

    /// Draw `text` with one edge on `anchor`.
    ///
    /// The baseline nudge (a fixed fraction of the text's own height) is
    /// applied here, never in layout. Returns the lowest y the text covers.
    pub fn text(
        &mut self,
        text: &str,
        anchor: Point,
        face: Face,
        align: Align,
        color: Color,
    ) -> Result<f64, RenderError> {
        let style = self.metrics.style(face)?;
        let size = self.metrics.measure_style(style, text);

        let x = match align {
            Align::Left => anchor.x,
            Align::Right => anchor.x - size.w(),
        };
        let y = anchor.y + size.h() * BASELINE_OFFSET_RATIO;

        self.canvas.draw_text(Point::new(x, y), text, style, color)?;
        Ok(y + size.h())
    }

    /// Paste an icon with its top-left corner on `anchor`; returns its bottom
    pub fn icon(&mut self, path: &Path, anchor: Point) -> Result<f64, RenderError> {
        let size = self.canvas.paste_icon(anchor, path)?;
        Ok(anchor.y + size.h())
    }
}

/// Lowest point drawn by one panel
#[derive(Debug, Clone, Copy)]
pub struct Extent {
    top: f64,
    bottom: Option<f64>,
}

impl Extent {
    pub fn new(frame: PanelFrame) -> Self {
        Self {
            top: frame.origin.y,
            bottom: None,
        }
    }

    pub fn add(&mut self, bottom: f64) {
        self.bottom = Some(self.bottom.map_or(bottom, |b| b.max(bottom)));
    }

    /// Origin y of the next panel: below everything drawn, plus `margin`.
    /// A panel that drew nothing hands on its own top.
    pub fn next_y(&self, margin: f64) -> f64 {
        self.bottom.unwrap_or(self.top).ceil() + margin
    }
}

/// A formatted reading, or the placeholder when there is none
pub fn value_text(format: &NumberFormat, value: Option<f64>) -> String {
    match value {
        Some(v) => format.format(v),
        None => PLACEHOLDER.to_string(),
    }
}
