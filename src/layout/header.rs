//! Header panel: the 3-minute power draw with its icon and unit, and the
//! 10/60/180-minute averages in a right-aligned column

use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, BoxSize, Face, ParamConfig, Point, PowerWindow};

pub const REQUIRED_FACES: [Face; 4] = [
    Face::PowerLarge,
    Face::PowerDetailLabel,
    Face::PowerDetailValue,
    Face::UnitLarge,
];

/// Vertical gap between detail rows
pub const ROW_GAP: f64 = 35.0;
/// Gap between a label and its value, and between the power value and its unit
pub const GUTTER: f64 = 10.0;
/// Gap between the power unit and the detail labels
pub const UNIT_GAP: f64 = 50.0;
pub const ICON_TOP: f64 = 10.0;

const POWER_UNIT_WIDTH_SCALE: f64 = 1.2;

const VALUE_NAMES: [&str; 3] = [
    "power_10min_value_right",
    "power_60min_value_right",
    "power_180min_value_right",
];
const LABEL_NAMES: [&str; 3] = [
    "power_10min_label_left",
    "power_60min_label_left",
    "power_180min_label_left",
];

/// Measured boxes of the header
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderBoxes {
    pub power: BoxSize,
    pub power_unit: BoxSize,
    /// Detail labels, in `PowerWindow::DETAIL` order
    pub labels: [BoxSize; 3],
    pub detail_value: BoxSize,
}

impl HeaderBoxes {
    pub fn measure(metrics: &FaceMetrics<'_>, power: &ParamConfig) -> Result<Self, ConfigError> {
        // "," has a descender; measuring "." keeps the box as tall as the digits
        let sample = |value: f64| power.format.format(value).replace(',', ".");

        let mut labels = [BoxSize::default(); 3];
        for (label, window) in labels.iter_mut().zip(PowerWindow::DETAIL) {
            *label = metrics.measure(Face::PowerDetailLabel, window.label())?;
        }

        Ok(Self {
            power: metrics.measure(Face::PowerLarge, &sample(1000.0))?,
            power_unit: metrics
                .measure(Face::UnitLarge, &power.unit)?
                .scale_width(POWER_UNIT_WIDTH_SCALE),
            labels,
            detail_value: metrics.measure(Face::PowerDetailValue, &sample(2444.0))?,
        })
    }
}

/// Anchors of the header, absolute canvas coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeaderLayout {
    pub power_icon_left: Point,
    /// Right edges of the detail values, top to bottom
    pub value_right: [Point; 3],
    /// Left edges of the detail labels, top to bottom
    pub label_left: [Point; 3],
    pub power_unit_right: Point,
    pub power_right: Point,
}

impl HeaderLayout {
    /// Derive the anchors, inside out:
    ///
    /// 1. icon, at the origin
    /// 2. detail values, right edge on the panel's right boundary
    /// 3. detail labels, left of their values, bottoms aligned
    /// 4. power unit, left of the top label, bottom on the power value's bottom
    /// 5. power value, left of the unit
    pub fn compute(boxes: &HeaderBoxes, origin: Point, width: f64) -> Self {
        let value = boxes.detail_value;

        let power_icon_left = origin.offset(0.0, ICON_TOP);

        let value_right: [Point; 3] =
            std::array::from_fn(|k| origin.offset(width, k as f64 * (value.h() + ROW_GAP)));

        let label_left: [Point; 3] = std::array::from_fn(|k| {
            let label = boxes.labels[k];
            value_right[k].offset(
                -value.w() - label.w() - GUTTER,
                value.h() - label.h(),
            )
        });

        let power_unit_right = Point::new(
            label_left[0].x - UNIT_GAP,
            value_right[0].y + boxes.power.h() - boxes.power_unit.h(),
        );

        let power_right = Point::new(
            power_unit_right.x - boxes.power_unit.w() - GUTTER,
            value_right[0].y,
        );

        Self {
            power_icon_left,
            value_right,
            label_left,
            power_unit_right,
            power_right,
        }
    }

    pub fn named(&self) -> AnchorMap {
        let mut anchors = AnchorMap::new();
        anchors.insert("power_icon_left", self.power_icon_left);
        for k in 0..3 {
            anchors.insert(VALUE_NAMES[k], self.value_right[k]);
            anchors.insert(LABEL_NAMES[k], self.label_left[k]);
        }
        anchors.insert("power_unit_right", self.power_unit_right);
        anchors.insert("power_right", self.power_right);
        anchors
    }
}
