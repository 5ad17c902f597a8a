//! sense-panel-core: Core traits, errors and constants for sense-panel.
//!
//! This crate holds the seams the renderer is built around: measuring text
//! (`TextMeasure`, `FaceTable`, `FaceMetrics`), drawing (`Canvas`) and
//! reading metrics (`MetricsProvider`). Concrete cairo/pango and data-source
//! implementations live in their own crates.

pub mod constants;
mod canvas;
mod error;
mod metrics_provider;
mod text_measure;

pub use canvas::Canvas;
pub use constants::{BASELINE_OFFSET_RATIO, LINE_SPACING_RATIO, MUTED_GRAY, PLACEHOLDER};
pub use error::{ConfigError, DrawError};
pub use metrics_provider::{MetricQuery, MetricsProvider};
pub use text_measure::{FaceMetrics, FaceTable, FixedAdvanceMeasure, TextMeasure};

// Re-export types used in trait signatures for convenience
pub use sense_panel_types::{BoxSize, Color, Face, Point, Style};
