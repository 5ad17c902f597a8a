//! Error panel: drawn on a cleared canvas when a render pass fails

use super::{Align, Extent, Painter, Panel, PanelFrame, PRIMARY};
use crate::core::RenderError;
use crate::layout::error::{wrap, TITLE, WRAP_COLUMNS};
use crate::layout::ErrorLayout;
use sense_panel_core::{ConfigError, FaceMetrics, LINE_SPACING_RATIO};
use sense_panel_types::{AnchorMap, Face, Point};

#[derive(Debug, Clone, Copy, Default)]
pub struct ErrorPanel;

impl Panel for ErrorPanel {
    /// The error report, one cause per line
    type Data = str;

    fn name(&self) -> &'static str {
        "error"
    }

    fn anchors(
        &self,
        metrics: &FaceMetrics<'_>,
        frame: PanelFrame,
    ) -> Result<AnchorMap, ConfigError> {
        Ok(ErrorLayout::compute(metrics, frame.origin)?.named())
    }

    fn draw(
        &self,
        painter: &mut Painter<'_, '_>,
        frame: PanelFrame,
        report: &str,
    ) -> Result<f64, RenderError> {
        log::info!("draw error");

        let layout = ErrorLayout::compute(&painter.metrics(), frame.origin)?;
        let mut extent = Extent::new(frame);

        extent.add(painter.text(TITLE, layout.title_left, Face::ErrorTitle, Align::Left, PRIMARY)?);

        let mut y = layout.detail_left.y;
        for line in wrap(report, WRAP_COLUMNS) {
            let height = painter.measure(Face::ErrorDetail, &line)?.h();
            extent.add(painter.text(
                &line,
                Point::new(layout.detail_left.x, y),
                Face::ErrorDetail,
                Align::Left,
                PRIMARY,
            )?);
            y += height * LINE_SPACING_RATIO;
        }

        Ok(extent.next_y(0.0))
    }
}
