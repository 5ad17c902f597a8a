//! Update-time panel: when the image was rendered, right-aligned

use sense_panel_types::{AnchorMap, Face, Point};

pub const REQUIRED_FACES: [Face; 1] = [Face::Time];

/// The time line is pulled up into the previous panel's trailing margin
pub const TIME_RISE: f64 = 20.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UpdateTimeLayout {
    pub time_right: Point,
}

impl UpdateTimeLayout {
    pub fn compute(origin: Point, width: f64) -> Self {
        Self {
            time_right: origin.offset(width, -TIME_RISE),
        }
    }

    pub fn named(&self) -> AnchorMap {
        AnchorMap::from([("time_right", self.time_right)])
    }
}
