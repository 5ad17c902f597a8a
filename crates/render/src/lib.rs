//! sense-panel-render: Cairo/pango implementations of the canvas and
//! text-measurement seams, plus a recording canvas for layout dumps.

pub mod cairo_canvas;
pub mod pango_text;
pub mod recording;

pub use cairo_canvas::CairoCanvas;
pub use pango_text::PangoMeasure;
pub use recording::{DrawOp, RecordingCanvas};
