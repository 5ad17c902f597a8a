//! Composition pipeline and its error type

mod pipeline;

pub use pipeline::{error_report, render, PanelReport, RenderOutcome};

use sense_panel_core::{ConfigError, DrawError};
use thiserror::Error;

/// Failure while drawing a panel
#[derive(Debug, Error)]
pub enum RenderError {
    /// Broken deployment; stops the pass
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Turned into the error panel
    #[error(transparent)]
    Draw(#[from] DrawError),
}
