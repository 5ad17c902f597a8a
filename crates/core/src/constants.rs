//! Shared rendering constants

/// Downward nudge applied to every drawn string, as a fraction of its own
/// measured height. Pango reports the logical box, not the baseline, so
/// mixed sizes on one row are aligned by this empirical offset instead.
pub const BASELINE_OFFSET_RATIO: f64 = 0.4;

/// Line pitch of multi-line text, as a multiple of the line height
pub const LINE_SPACING_RATIO: f64 = 1.4;

/// Drawn in place of a value that could not be read
pub const PLACEHOLDER: &str = "?  ";

/// Gray level of secondary text (date, update time)
pub const MUTED_GRAY: u8 = 0x66;
