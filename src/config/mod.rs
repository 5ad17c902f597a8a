//! Configuration management

mod defaults;
mod settings;

pub use settings::{AppConfig, IconConfig, LayoutConfig, Margin, CONFIG_VERSION};
