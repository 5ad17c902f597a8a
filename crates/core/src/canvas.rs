//! Canvas trait: the raster surface panels draw onto

use crate::error::DrawError;
use sense_panel_types::{BoxSize, Color, Point, Style};
use std::path::Path;

/// Trait for all drawing surfaces
///
/// One canvas is owned by the composition pipeline for a whole render pass.
/// Text is drawn with its top-left corner at `origin`; alignment and the
/// baseline nudge are resolved by the caller.
pub trait Canvas {
    /// Pixel size of the surface
    fn size(&self) -> BoxSize;

    /// Fill the whole surface with white
    fn clear(&mut self) -> Result<(), DrawError>;

    /// Draw one line of text with its top-left corner at `origin`
    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        style: &Style,
        color: Color,
    ) -> Result<(), DrawError>;

    /// Paste a PNG icon with its top-left corner at `origin`.
    ///
    /// Returns the icon's pixel size.
    fn paste_icon(&mut self, origin: Point, path: &Path) -> Result<BoxSize, DrawError>;
}
