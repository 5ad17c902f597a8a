//! Update-time panel

use super::{muted, Align, Extent, Painter, Panel, PanelFrame};
use crate::core::RenderError;
use crate::layout::UpdateTimeLayout;
use chrono::NaiveDateTime;
use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, Face};

const TRAILING_MARGIN: f64 = 40.0;

pub struct UpdateTimePanel<'a> {
    marker: &'a str,
}

impl<'a> UpdateTimePanel<'a> {
    pub fn new(marker: &'a str) -> Self {
        Self { marker }
    }

    /// `YYYY-MM-DD HH:MM <marker>`
    pub fn text(&self, now: &NaiveDateTime) -> String {
        format!("{} {}", now.format("%Y-%m-%d %H:%M"), self.marker)
    }
}

impl Panel for UpdateTimePanel<'_> {
    type Data = NaiveDateTime;

    fn name(&self) -> &'static str {
        "update_time"
    }

    fn anchors(
        &self,
        _metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<AnchorMap, ConfigError> {
        Ok(UpdateTimeLayout::compute(frame.origin, frame.width).named())
    }

    fn draw(
        &self,
        painter: &mut Painter<'_, '_>,
        frame: PanelFrame,
        now: &NaiveDateTime,
    ) -> Result<f64, RenderError> {
        log::info!("draw update time");

        let layout = UpdateTimeLayout::compute(frame.origin, frame.width);
        let mut extent = Extent::new(frame);
        extent.add(painter.text(
            &self.text(now),
            layout.time_right,
            Face::Time,
            Align::Right,
            muted(),
        )?);

        Ok(extent.next_y(TRAILING_MARGIN))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_text_format() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(7, 5, 59)
            .unwrap();
        assert_eq!(UpdateTimePanel::new("更新").text(&now), "2024-03-09 07:05 更新");
    }
}
