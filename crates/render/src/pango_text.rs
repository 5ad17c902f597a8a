//! Pango-based text measurement and drawing
//!
//! Cairo's toy font API cannot load arbitrary font descriptions and leaks
//! its internal caches, so all text goes through pango layouts. Sizes are
//! absolute pixel sizes: a face configured with size 170 produces glyphs
//! 170 px tall on the panel regardless of the surface resolution.

use cairo::{Context, Format, ImageSurface};
use pango::{FontDescription, Layout};
use pangocairo::functions::{create_layout, show_layout};
use sense_panel_core::{DrawError, TextMeasure};
use sense_panel_types::{BoxSize, Style};
use std::cell::RefCell;
use std::collections::HashMap;

/// Cache for FontDescription objects to avoid re-parsing descriptions
pub(crate) struct FontDescriptionCache {
    cache: HashMap<FontKey, FontDescription>,
    max_entries: usize,
}

#[derive(Hash, Eq, PartialEq, Clone, Debug)]
struct FontKey {
    family: String,
    size_pango: i32, // Size in Pango units (pixels * PANGO_SCALE)
}

impl FontDescriptionCache {
    pub(crate) fn new() -> Self {
        Self {
            cache: HashMap::new(),
            max_entries: 64,
        }
    }

    pub(crate) fn get_or_create(&mut self, style: &Style) -> FontDescription {
        let size_pango = (style.size * pango::SCALE as f64) as i32;
        let key = FontKey {
            family: style.family.clone(),
            size_pango,
        };

        if let Some(desc) = self.cache.get(&key) {
            return desc.clone();
        }

        // Evict if full (simple eviction - just clear half)
        if self.cache.len() >= self.max_entries {
            let keys_to_remove: Vec<_> = self
                .cache
                .keys()
                .take(self.max_entries / 2)
                .cloned()
                .collect();
            for k in keys_to_remove {
                self.cache.remove(&k);
            }
        }

        let mut desc = FontDescription::from_string(&style.family);
        desc.set_absolute_size(size_pango as f64);

        self.cache.insert(key, desc.clone());
        desc
    }
}

/// Build a single-line layout for `text` on `cr`
pub(crate) fn text_layout(cr: &Context, text: &str, font_desc: &FontDescription) -> Layout {
    let layout = create_layout(cr);
    layout.set_font_description(Some(font_desc));
    layout.set_text(text);
    layout
}

/// Show text with the layout's top-left corner at `(x, y)`
pub(crate) fn show_text_at(cr: &Context, x: f64, y: f64, text: &str, font_desc: &FontDescription) {
    let layout = text_layout(cr, text, font_desc);
    cr.move_to(x, y);
    show_layout(cr, &layout);
}

/// Glyph metrics backed by pango
///
/// Measures on a private 1×1 surface so measuring never touches the canvas
/// being drawn. Returns the layout's logical pixel size, which includes the
/// font's ascent and descent, so equal-face strings share one height.
pub struct PangoMeasure {
    context: Context,
    fonts: RefCell<FontDescriptionCache>,
}

impl PangoMeasure {
    pub fn new() -> Result<Self, DrawError> {
        let surface = ImageSurface::create(Format::ARgb32, 1, 1)
            .map_err(|e| DrawError::Cairo(e.to_string()))?;
        let context = Context::new(&surface).map_err(|e| DrawError::Cairo(e.to_string()))?;
        Ok(Self {
            context,
            fonts: RefCell::new(FontDescriptionCache::new()),
        })
    }
}

impl TextMeasure for PangoMeasure {
    fn measure(&self, style: &Style, text: &str) -> BoxSize {
        let font_desc = self.fonts.borrow_mut().get_or_create(style);
        let layout = text_layout(&self.context, text, &font_desc);
        let (width, height) = layout.pixel_size();
        BoxSize::new(width, height)
    }
}
