//! sense-panel: renders room sensor and power readings into a status image
//! for an e-ink panel.
//!
//! This library provides:
//! - Configuration loading and validation
//! - The layout engine (measured boxes → named anchors per panel)
//! - The panel renderer (header, detail, date, update time, error)
//! - The composition pipeline that stacks the panels on one canvas

pub mod config;
pub mod core;
pub mod layout;
pub mod panels;

// Re-export commonly used types
pub use config::AppConfig;
pub use crate::core::{render, PanelReport, RenderError, RenderOutcome};
