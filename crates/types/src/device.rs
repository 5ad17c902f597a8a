//! Output device geometry and pixel format

use serde::{Deserialize, Serialize};

/// Pixel format of the encoded image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PixelFormat {
    /// 8-bit grayscale, what e-ink panels take
    #[default]
    Gray,
    Rgba,
}

/// The physical panel the image is rendered for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeviceConfig {
    pub width: i32,
    pub height: i32,
    #[serde(default)]
    pub pixel_format: PixelFormat,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            width: 1072,
            height: 1448,
            pixel_format: PixelFormat::Gray,
        }
    }
}
