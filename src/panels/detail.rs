//! Detail panel: room readings

use super::{value_text, Align, Extent, Painter, Panel, PanelFrame, PRIMARY};
use crate::config::AppConfig;
use crate::core::RenderError;
use crate::layout::detail::value_face;
use crate::layout::{DetailBoxes, DetailLayout};
use sense_panel_core::{ConfigError, FaceMetrics};
use sense_panel_types::{AnchorMap, Face, ParamConfig, ParamKind, RoomReading};

const TRAILING_MARGIN: f64 = 30.0;

pub struct DetailPanel<'a> {
    /// Configured room labels; the place column is as wide as the widest
    labels: Vec<&'a str>,
    /// Column settings in `ParamKind::ROOM` order
    params: [&'a ParamConfig; 3],
}

impl<'a> DetailPanel<'a> {
    pub fn new(config: &'a AppConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            labels: config
                .sensor
                .room_list
                .iter()
                .map(|room| room.label.as_str())
                .collect(),
            params: [
                config.param(ParamKind::Temp)?,
                config.param(ParamKind::Humi)?,
                config.param(ParamKind::Co2)?,
            ],
        })
    }

    pub fn layout(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<DetailLayout, ConfigError> {
        let units = self.params.map(|p| p.unit.as_str());
        let boxes = DetailBoxes::measure(metrics, self.labels.iter().copied(), units)?;
        Ok(DetailLayout::compute(&boxes, frame.origin, frame.width))
    }
}

impl Panel for DetailPanel<'_> {
    type Data = [RoomReading];

    fn name(&self) -> &'static str {
        "detail"
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
        rooms: &[RoomReading],
    ) -> Result<f64, RenderError> {
        log::info!("draw detail");

        let layout = self.layout(&painter.metrics(), frame)?;
        let mut extent = Extent::new(frame);

        for (row, room) in rooms.iter().enumerate() {
            let offset = layout.row_offset(row);

            extent.add(painter.text(
                &room.place,
                layout.place_left + offset,
                Face::Place,
                Align::Left,
                PRIMARY,
            )?);

            for (param, anchors) in self.params.iter().zip(&layout.columns) {
                let reading = room.get(param.name);
                // no such sensor: the column stays empty, siblings keep their place
                if !reading.is_supported() {
                    continue;
                }
                let text = value_text(&param.format, reading.value());
                extent.add(painter.text(
                    &text,
                    anchors.value_right + offset,
                    value_face(param.name),
                    Align::Right,
                    PRIMARY,
                )?);
                extent.add(painter.text(
                    &param.unit,
                    anchors.unit_right + offset,
                    Face::Unit,
                    Align::Right,
                    PRIMARY,
                )?);
            }
        }

        Ok(extent.next_y(TRAILING_MARGIN))
    }
}
