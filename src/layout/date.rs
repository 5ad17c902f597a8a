//! Date panel: `M/D` with the weekday in parentheses, right-aligned

use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, BoxSize, Face, Point};

pub const REQUIRED_FACES: [Face; 2] = [Face::DateLarge, Face::WdayLarge];

/// Widest month/day rendering
const DATE_SAMPLE: &str = "12/31";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateBoxes {
    pub date: BoxSize,
    /// Widest `(weekday)` over all labels
    pub wday: BoxSize,
}

impl DateBoxes {
    pub fn measure(
        metrics: &FaceMetrics<'_>,
        weekday_labels: &[String],
    ) -> Result<Self, ConfigError> {
        let mut wday = BoxSize::default();
        for label in weekday_labels {
            wday = wday.max(metrics.measure(Face::WdayLarge, &weekday_text(label))?);
        }
        Ok(Self {
            date: metrics.measure(Face::DateLarge, DATE_SAMPLE)?,
            wday,
        })
    }
}

/// Weekday as drawn
pub fn weekday_text(label: &str) -> String {
    format!("({})", label)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateLayout {
    pub date_right: Point,
    pub wday_right: Point,
}

impl DateLayout {
    /// Weekday on the right boundary with its bottom on the date's bottom;
    /// the date ends where the widest weekday begins.
    pub fn compute(boxes: &DateBoxes, origin: Point, width: f64) -> Self {
        Self {
            date_right: origin.offset(width - boxes.wday.w(), 0.0),
            wday_right: origin.offset(width, boxes.date.h() - boxes.wday.h()),
        }
    }

    pub fn named(&self) -> AnchorMap {
        AnchorMap::from([("date_right", self.date_right), ("wday_right", self.wday_right)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_hangs_from_right_boundary() {
        let boxes = DateBoxes {
            date: BoxSize::new(325, 130),
            wday: BoxSize::new(120, 60),
        };
        let layout = DateLayout::compute(&boxes, Point::new(30.0, 900.0), 1012.0);
        assert_eq!(layout.date_right, Point::new(922.0, 900.0));
        assert_eq!(layout.wday_right, Point::new(1042.0, 970.0));
        assert_eq!(weekday_text("月"), "(月)");
    }
}
