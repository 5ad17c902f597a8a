//! Cairo image-surface canvas and PNG encoding

use crate::pango_text::{show_text_at, FontDescriptionCache};
use cairo::{Context, Format, ImageSurface};
use image::{DynamicImage, GrayImage, ImageFormat, RgbaImage};
use sense_panel_core::{Canvas, DrawError};
use sense_panel_types::{BoxSize, Color, PixelFormat, Point, Style};
use std::collections::HashMap;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};

fn cairo_err(e: cairo::Error) -> DrawError {
    DrawError::Cairo(e.to_string())
}

/// Canvas backed by an ARGB32 cairo image surface
pub struct CairoCanvas {
    surface: ImageSurface,
    context: Context,
    fonts: FontDescriptionCache,
    /// Decoded icons, keyed by path; loaded once per canvas
    icons: HashMap<PathBuf, ImageSurface>,
}

impl CairoCanvas {
    pub fn new(size: BoxSize) -> Result<Self, DrawError> {
        let surface =
            ImageSurface::create(Format::ARgb32, size.width, size.height).map_err(cairo_err)?;
        let context = Context::new(&surface).map_err(cairo_err)?;
        Ok(Self {
            surface,
            context,
            fonts: FontDescriptionCache::new(),
            icons: HashMap::new(),
        })
    }

    fn icon(&mut self, path: &Path) -> Result<ImageSurface, DrawError> {
        if let Some(icon) = self.icons.get(path) {
            return Ok(icon.clone());
        }

        let mut file = File::open(path).map_err(|source| DrawError::IconOpen {
            path: path.to_path_buf(),
            source,
        })?;
        let icon = ImageSurface::create_from_png(&mut file).map_err(|e| DrawError::IconDecode {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        log::debug!("loaded icon {} ({}x{})", path.display(), icon.width(), icon.height());

        self.icons.insert(path.to_path_buf(), icon.clone());
        Ok(icon)
    }

    /// Encode the current surface contents as PNG
    pub fn encode_png(&self, format: PixelFormat) -> Result<Vec<u8>, DrawError> {
        self.surface.flush();

        let width = self.surface.width() as usize;
        let height = self.surface.height() as usize;
        let stride = self.surface.stride() as usize;
        let channels = match format {
            PixelFormat::Gray => 1,
            PixelFormat::Rgba => 4,
        };
        let mut pixels = Vec::with_capacity(width * height * channels);

        self.surface
            .with_data(|data| {
                for row in data.chunks(stride).take(height) {
                    for px in row[..width * 4].chunks_exact(4) {
                        let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
                        let (r, g, b, a) = unpremultiply(argb);
                        match format {
                            PixelFormat::Gray => {
                                let luma = Color::from_rgba8(r, g, b, a).luma();
                                pixels.push((luma * 255.0).round() as u8);
                            }
                            PixelFormat::Rgba => pixels.extend_from_slice(&[r, g, b, a]),
                        }
                    }
                }
            })
            .map_err(|e| DrawError::Cairo(e.to_string()))?;

        let image = match format {
            PixelFormat::Gray => GrayImage::from_raw(width as u32, height as u32, pixels)
                .map(DynamicImage::ImageLuma8),
            PixelFormat::Rgba => RgbaImage::from_raw(width as u32, height as u32, pixels)
                .map(DynamicImage::ImageRgba8),
        }
        .ok_or_else(|| DrawError::Encode("pixel buffer does not match surface size".to_string()))?;

        let mut png = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut png), ImageFormat::Png)
            .map_err(|e| DrawError::Encode(e.to_string()))?;
        Ok(png)
    }
}

/// Split a premultiplied native-endian ARGB32 pixel into straight RGBA
fn unpremultiply(argb: u32) -> (u8, u8, u8, u8) {
    let a = (argb >> 24) & 0xff;
    let channel = |shift: u32| {
        let c = (argb >> shift) & 0xff;
        if a == 0 {
            0
        } else {
            ((c * 255 + a / 2) / a).min(255) as u8
        }
    };
    (channel(16), channel(8), channel(0), a as u8)
}

impl Canvas for CairoCanvas {
    fn size(&self) -> BoxSize {
        BoxSize::new(self.surface.width(), self.surface.height())
    }

    fn clear(&mut self) -> Result<(), DrawError> {
        let white = Color::WHITE;
        self.context.set_source_rgba(white.r, white.g, white.b, white.a);
        self.context.paint().map_err(cairo_err)
    }

    fn draw_text(
        &mut self,
        origin: Point,
        text: &str,
        style: &Style,
        color: Color,
    ) -> Result<(), DrawError> {
        let font_desc = self.fonts.get_or_create(style);
        self.context.set_source_rgba(color.r, color.g, color.b, color.a);
        show_text_at(&self.context, origin.x, origin.y, text, &font_desc);
        self.context.status().map_err(cairo_err)
    }

    fn paste_icon(&mut self, origin: Point, path: &Path) -> Result<BoxSize, DrawError> {
        let icon = self.icon(path)?;
        self.context.save().map_err(cairo_err)?;
        self.context
            .set_source_surface(&icon, origin.x, origin.y)
            .map_err(cairo_err)?;
        self.context.paint().map_err(cairo_err)?;
        self.context.restore().map_err(cairo_err)?;
        Ok(BoxSize::new(icon.width(), icon.height()))
    }
}
