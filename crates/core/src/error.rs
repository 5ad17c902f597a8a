//! Error taxonomy of a render pass
//!
//! Missing data is not an error at all (it becomes a placeholder glyph).
//! `ConfigError` means the deployment is broken and stops the pass before
//! anything is drawn; `DrawError` is a rendering failure the pipeline turns
//! into an error panel.

use sense_panel_types::{Face, ParamKind};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown face `{0}`: not in the face table")]
    UnknownFace(Face),

    #[error("face `{face}` uses font type `{font_type}`, which is not in the font map")]
    UnknownFontType { face: Face, font_type: String },

    #[error("no display settings (unit/format) for parameter `{0}`")]
    MissingParam(ParamKind),

    #[error("invalid panel geometry: {0}")]
    Geometry(String),

    #[error("invalid setting `{key}`: {reason}")]
    InvalidSetting { key: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum DrawError {
    #[error("cairo: {0}")]
    Cairo(String),

    #[error("cannot open icon {path}")]
    IconOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot decode icon {path}: {reason}")]
    IconDecode { path: PathBuf, reason: String },

    #[error("image encoding failed: {0}")]
    Encode(String),
}
