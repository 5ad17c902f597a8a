//! Date panel

use super::{muted, Align, Extent, Painter, Panel, PanelFrame};
use crate::core::RenderError;
use crate::layout::date::weekday_text;
use crate::layout::{DateBoxes, DateLayout};
use chrono::{Datelike, NaiveDate};
use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, Face};

const TRAILING_MARGIN: f64 = 30.0;

pub struct DatePanel<'a> {
    /// Monday first
    weekday_labels: &'a [String],
}

impl<'a> DatePanel<'a> {
    pub fn new(weekday_labels: &'a [String]) -> Self {
        Self { weekday_labels }
    }

    fn layout(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<DateLayout, ConfigError> {
        let boxes = DateBoxes::measure(metrics, self.weekday_labels)?;
        Ok(DateLayout::compute(&boxes, frame.origin, frame.width))
    }

    fn weekday(&self, date: NaiveDate) -> Result<&str, ConfigError> {
        let index = date.weekday().num_days_from_monday() as usize;
        self.weekday_labels
            .get(index)
            .map(String::as_str)
            .ok_or_else(|| ConfigError::InvalidSetting {
                key: "layout.weekday_labels",
                reason: format!("no label for {}", date.weekday()),
            })
    }
}

impl Panel for DatePanel<'_> {
    type Data = NaiveDate;

    fn name(&self) -> &'static str {
        "date"
    }

    fn anchors(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<AnchorMap, ConfigError> {
        Ok(self.layout(metrics, frame)?.named())
    }

    fn draw(
        &self,
        painter: &mut Painter<'_, '_>,
        frame: PanelFrame,
        date: &NaiveDate,
    ) -> Result<f64, RenderError> {
        log::info!("draw date");

        let layout = self.layout(&painter.metrics(), frame)?;
        let mut extent = Extent::new(frame);

        let day = format!("{}/{}", date.month(), date.day());
        extent.add(painter.text(&day, layout.date_right, Face::DateLarge, Align::Right, muted())?);

        let wday = weekday_text(self.weekday(*date)?);
        extent.add(painter.text(&wday, layout.wday_right, Face::WdayLarge, Align::Right, muted())?);

        Ok(extent.next_y(TRAILING_MARGIN))
    }
}
