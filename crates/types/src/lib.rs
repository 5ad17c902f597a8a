//! sense-panel-types: Shared data types for the sense-panel renderer.
//!
//! This crate contains pure data types (colors, geometry, faces, readings and
//! the sensor/power/device configuration) shared across all sense-panel
//! crates. Nothing here depends on cairo or pango, so these types are the
//! foundation layer for layout code and tests alike.

pub mod color;
pub mod device;
pub mod face;
pub mod geometry;
pub mod param;
pub mod reading;
pub mod sensor;

// Re-export commonly used types at the crate root for convenience
pub use color::Color;
pub use device::{DeviceConfig, PixelFormat};
pub use face::{Face, FaceConfig, FontConfig, Style};
pub use geometry::{AnchorMap, BoxSize, Point};
pub use param::{NumberFormat, ParamConfig, ParamKind};
pub use reading::{PowerReadings, PowerWindow, Reading, RoomReading};
pub use sensor::{HostConfig, PowerConfig, RoomConfig, SensorConfig};
