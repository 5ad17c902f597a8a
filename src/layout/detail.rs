//! Detail panel: one row per room with temperature, humidity and CO2
//! columns spread across the panel width
//!
//! Each row is two lines: the place label on top, then the three value
//! columns with their units, bottoms aligned. The grid is fixed; a column a
//! room cannot measure leaves its slot empty and nothing shifts.

use sense_panel_core::{ConfigError, FaceMetrics, LINE_SPACING_RATIO};
use sense_panel_types::{AnchorMap, BoxSize, Face, ParamKind, Point};

pub const REQUIRED_FACES: [Face; 5] = [Face::Place, Face::Temp, Face::Humi, Face::Co2, Face::Unit];

/// Top of the value line, as a multiple of the place height
const ROW_TOP_RATIO: f64 = 1.2;
const CO2_UNIT_WIDTH_SCALE: f64 = 0.8;

const VALUE_NAMES: [&str; 3] = ["temp-right", "humi-right", "co2-right"];
const UNIT_NAMES: [&str; 3] = ["temp_unit-right", "humi_unit-right", "co2_unit-right"];

/// Face a room parameter's value is drawn in
pub fn value_face(param: ParamKind) -> Face {
    match param {
        ParamKind::Temp => Face::Temp,
        ParamKind::Humi => Face::Humi,
        ParamKind::Co2 => Face::Co2,
        ParamKind::Power => Face::PowerDetailValue,
    }
}

fn column_index(param: ParamKind) -> Option<usize> {
    ParamKind::ROOM.iter().position(|p| *p == param)
}

/// Measured value and unit of one column
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnBoxes {
    pub value: BoxSize,
    pub unit: BoxSize,
}

/// Measured boxes of the detail panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailBoxes {
    /// Widest place label plus one space
    pub place: BoxSize,
    /// Columns in `ParamKind::ROOM` order
    pub columns: [ColumnBoxes; 3],
}

impl DetailBoxes {
    /// Measure the panel for the given room labels and units
    /// (`units` in `ParamKind::ROOM` order).
    pub fn measure<'s>(
        metrics: &FaceMetrics<'_>,
        labels: impl IntoIterator<Item = &'s str>,
        units: [&str; 3],
    ) -> Result<Self, ConfigError> {
        let mut place = BoxSize::default();
        for label in labels {
            place = place.max(metrics.measure(Face::Place, label)?);
        }
        place.width += metrics.measure(Face::Place, " ")?.width;

        let temp = ColumnBoxes {
            value: metrics.measure(Face::Temp, "44.4")?,
            unit: metrics.measure(Face::Unit, units[0])?,
        };
        let humi = ColumnBoxes {
            value: metrics.measure(Face::Humi, "888.8")?,
            unit: metrics.measure(Face::Unit, units[1])?,
        };
        // width of the widest reading, height without the comma's descender
        let co2 = ColumnBoxes {
            value: BoxSize::new(
                metrics.measure(Face::Co2, "2,888")?.width,
                metrics.measure(Face::Co2, "4")?.height,
            ),
            unit: metrics
                .measure(Face::Unit, &"m".repeat(units[2].chars().count()))?
                .scale_width(CO2_UNIT_WIDTH_SCALE),
        };

        Ok(Self {
            place,
            columns: [temp, humi, co2],
        })
    }

    /// Sum of every measured width, place included
    pub fn total_width(&self) -> i32 {
        self.place.width
            + self
                .columns
                .iter()
                .map(|c| c.value.width + c.unit.width)
                .sum::<i32>()
    }

    /// Tallest measured box, place included
    pub fn max_height(&self) -> i32 {
        self.columns
            .iter()
            .flat_map(|c| [c.value.height, c.unit.height])
            .fold(self.place.height, i32::max)
    }
}

/// Right edges of one column's value and unit
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColumnAnchors {
    pub value_right: Point,
    pub unit_right: Point,
}

/// Anchors of the first row; row `i` is offset by `i × line_height`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailLayout {
    pub place_left: Point,
    pub columns: [ColumnAnchors; 3],
    /// Gap inserted before the humidity and CO2 columns
    pub col_gap: f64,
    pub line_height: f64,
}

impl DetailLayout {
    /// Derive the anchors:
    ///
    /// 1. `col_gap = (width + place.w − total_width) / 2`; place sits on its
    ///    own line, so it does not take part in the column split
    /// 2. value line top at `place.h × 1.2`, every box bottom-aligned to
    ///    the tallest one
    /// 3. columns left to right: value right edge after the previous unit
    ///    (plus the gap), unit right after its value
    ///
    /// The last unit's right edge lands on `origin.x + width`.
    pub fn compute(boxes: &DetailBoxes, origin: Point, width: f64) -> Self {
        let col_gap = (width + boxes.place.w() - f64::from(boxes.total_width())) / 2.0;
        let max_h = f64::from(boxes.max_height());
        let bottom = origin.y + boxes.place.h() * ROW_TOP_RATIO + max_h;

        let mut columns = [ColumnAnchors::default(); 3];
        let mut prev_right = origin.x;
        for (i, (column, anchors)) in boxes.columns.iter().zip(columns.iter_mut()).enumerate() {
            let gap = if i == 0 { 0.0 } else { col_gap };
            let value_right = Point::new(
                prev_right + gap + column.value.w(),
                bottom - column.value.h(),
            );
            let unit_right = Point::new(value_right.x + column.unit.w(), bottom - column.unit.h());
            *anchors = ColumnAnchors {
                value_right,
                unit_right,
            };
            prev_right = unit_right.x;
        }

        Self {
            place_left: origin,
            columns,
            col_gap,
            line_height: boxes.place.h() + max_h * LINE_SPACING_RATIO,
        }
    }

    pub fn column(&self, param: ParamKind) -> Option<&ColumnAnchors> {
        column_index(param).map(|i| &self.columns[i])
    }

    /// Offset of row `row` relative to the first
    pub fn row_offset(&self, row: usize) -> Point {
        Point::new(0.0, row as f64 * self.line_height)
    }

    pub fn named(&self) -> AnchorMap {
        let mut anchors = AnchorMap::new();
        anchors.insert("place-left", self.place_left);
        let names = VALUE_NAMES.into_iter().zip(UNIT_NAMES);
        for ((value_name, unit_name), column) in names.zip(&self.columns) {
            anchors.insert(value_name, column.value_right);
            anchors.insert(unit_name, column.unit_right);
        }
        anchors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_panel_core::{FaceTable, FixedAdvanceMeasure};
    use sense_panel_types::{FaceConfig, FontConfig};
    use std::collections::BTreeMap;

    fn boxes() -> DetailBoxes {
        DetailBoxes {
            place: BoxSize::new(180, 40),
            columns: [
                ColumnBoxes {
                    value: BoxSize::new(280, 170),
                    unit: BoxSize::new(40, 40),
                },
                ColumnBoxes {
                    value: BoxSize::new(350, 170),
                    unit: BoxSize::new(40, 40),
                },
                ColumnBoxes {
                    value: BoxSize::new(160, 80),
                    unit: BoxSize::new(48, 40),
                },
            ],
        }
    }

    #[test]
    fn test_columns_fill_the_width() {
        let layout = DetailLayout::compute(&boxes(), Point::new(30.0, 300.0), 1012.0);
        // 1012 - (280+40+350+40+160+48) = 94, split in two
        assert_eq!(layout.col_gap, 47.0);
        assert_eq!(layout.columns[2].unit_right.x, 1042.0);
        assert_eq!(layout.columns[0].value_right.x, 310.0);
        assert_eq!(layout.columns[1].value_right.x, 310.0 + 40.0 + 47.0 + 350.0);
    }

    #[test]
    fn test_value_line_is_bottom_aligned() {
        let layout = DetailLayout::compute(&boxes(), Point::new(30.0, 300.0), 1012.0);
        let bottom = 300.0 + 48.0 + 170.0;
        assert_eq!(layout.columns[0].value_right.y, bottom - 170.0);
        assert_eq!(layout.columns[0].unit_right.y, bottom - 40.0);
        assert_eq!(layout.columns[2].value_right.y, bottom - 80.0);
        assert_eq!(layout.line_height, 40.0 + 170.0 * 1.4);
        assert_eq!(layout.row_offset(3), Point::new(0.0, 3.0 * layout.line_height));
    }

    #[test]
    fn test_measure_takes_widest_label() {
        let mut font = FontConfig::default();
        font.map.insert("SANS".to_string(), "Sans".to_string());
        let faces: BTreeMap<Face, FaceConfig> = REQUIRED_FACES
            .iter()
            .map(|face| (*face, FaceConfig::new("SANS", 40.0)))
            .collect();
        let table = FaceTable::from_config(&font, &faces).unwrap();
        let measure = FixedAdvanceMeasure::default();
        let metrics = FaceMetrics::new(&table, &measure);

        let boxes =
            DetailBoxes::measure(&metrics, ["和室", "リビング"], ["℃", "％", "ppm"]).unwrap();
        // 8 columns for リビング plus a space, 20 px each
        assert_eq!(boxes.place, BoxSize::new(180, 40));
        // "mmm" scaled by 0.8
        assert_eq!(boxes.columns[2].unit, BoxSize::new(48, 40));
        assert_eq!(boxes.columns[2].value, BoxSize::new(100, 40));
    }

    #[test]
    fn test_named_uses_row_zero() {
        let layout = DetailLayout::compute(&boxes(), Point::new(30.0, 300.0), 1012.0);
        let named = layout.named();
        assert_eq!(named["place-left"], Point::new(30.0, 300.0));
        assert_eq!(named["co2_unit-right"], layout.columns[2].unit_right);
        assert_eq!(layout.column(ParamKind::Humi), Some(&layout.columns[1]));
        assert_eq!(layout.column(ParamKind::Power), None);
    }
}
