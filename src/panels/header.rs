//! Header panel: power draw

use super::{value_text, Align, Extent, Painter, Panel, PanelFrame, PRIMARY};
use crate::core::RenderError;
use crate::layout::{HeaderBoxes, HeaderLayout};
use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, Face, ParamConfig, PowerReadings, PowerWindow};
use std::path::Path;

const TRAILING_MARGIN: f64 = 10.0;

pub struct HeaderPanel<'a> {
    power: &'a ParamConfig,
    icon: &'a Path,
}

impl<'a> HeaderPanel<'a> {
    pub fn new(power: &'a ParamConfig, icon: &'a Path) -> Self {
        Self { power, icon }
    }

    fn layout(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<HeaderLayout, ConfigError> {
        let boxes = HeaderBoxes::measure(metrics, self.power)?;
        Ok(HeaderLayout::compute(&boxes, frame.origin, frame.width))
    }
}

impl Panel for HeaderPanel<'_> {
    type Data = PowerReadings;

    fn name(&self) -> &'static str {
        "header"
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
        data: &PowerReadings,
    ) -> Result<f64, RenderError> {
        log::info!("draw header");

        let layout = self.layout(&painter.metrics(), frame)?;
        let mut extent = Extent::new(frame);

        extent.add(painter.icon(self.icon, layout.power_icon_left)?);

        for (window, anchor) in PowerWindow::DETAIL.iter().zip(layout.label_left) {
            extent.add(painter.text(
                window.label(),
                anchor,
                Face::PowerDetailLabel,
                Align::Left,
                PRIMARY,
            )?);
        }
        for (window, anchor) in PowerWindow::DETAIL.iter().zip(layout.value_right) {
            let text = value_text(&self.power.format, data.get(*window));
            extent.add(painter.text(&text, anchor, Face::PowerDetailValue, Align::Right, PRIMARY)?);
        }

        extent.add(painter.text(
            &self.power.unit,
            layout.power_unit_right,
            Face::UnitLarge,
            Align::Right,
            PRIMARY,
        )?);
        let text = value_text(&self.power.format, data.min3);
        extent.add(painter.text(
            &text,
            layout.power_right,
            Face::PowerLarge,
            Align::Right,
            PRIMARY,
        )?);

        Ok(extent.next_y(TRAILING_MARGIN))
    }
}
