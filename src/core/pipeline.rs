//! Composition pipeline
//!
//! One render pass: validate the configuration, assemble the readings, then
//! stack header → detail → (date) → update time down the canvas, each panel
//! starting where the previous one ended. Single-threaded; the canvas is
//! borrowed exclusively for the whole pass.

use super::RenderError;
use crate::config::AppConfig;
use crate::layout::error::ORIGIN as ERROR_ORIGIN;
use crate::panels::{
    DatePanel, DetailPanel, ErrorPanel, HeaderPanel, Painter, Panel, PanelFrame, UpdateTimePanel,
};
use chrono::NaiveDateTime;
use log::{debug, error, info};
use sense_panel_core::{Canvas, ConfigError, FaceMetrics, MetricsProvider, TextMeasure};
use sense_panel_sources::{collect_power, collect_rooms};
use sense_panel_types::{AnchorMap, BoxSize, Point};
use serde::Serialize;

/// Where one panel landed
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelReport {
    pub name: &'static str,
    pub origin: Point,
    pub next_y: f64,
    pub anchors: AnchorMap,
}

/// Result of a render pass that produced an image
#[derive(Debug, Clone, PartialEq)]
pub enum RenderOutcome {
    /// All panels drawn, top to bottom
    Rendered(Vec<PanelReport>),
    /// Drawing failed; the canvas holds the error panel
    Fallback { report: String },
}

impl RenderOutcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, RenderOutcome::Fallback { .. })
    }
}

/// Render one status image onto `canvas`.
///
/// Configuration errors, including a canvas whose size differs from the
/// configured device, are returned before the canvas is touched. Any
/// drawing failure afterwards replaces the image with the error panel, so
/// the caller always has something to display.
pub fn render(
    config: &AppConfig,
    measure: &dyn TextMeasure,
    provider: &dyn MetricsProvider,
    canvas: &mut dyn Canvas,
    now: NaiveDateTime,
) -> Result<RenderOutcome, ConfigError> {
    config.validate()?;
    let faces = config.face_table()?;
    let metrics = FaceMetrics::new(&faces, measure);

    let size = canvas.size();
    if size != BoxSize::new(config.panel.width, config.panel.height) {
        return Err(ConfigError::Geometry(format!(
            "canvas is {}x{}, device is {}x{}",
            size.width, size.height, config.panel.width, config.panel.height
        )));
    }

    let composed = match canvas.clear() {
        Ok(()) => compose(config, metrics, provider, canvas, now),
        Err(e) => Err(e.into()),
    };

    match composed {
        Ok(panels) => Ok(RenderOutcome::Rendered(panels)),
        Err(RenderError::Config(e)) => Err(e),
        Err(RenderError::Draw(e)) => {
            let report = error_report(&e);
            error!("render failed: {}", report);

            let mut painter = Painter::new(metrics, canvas);
            if let Err(e) = painter.clear() {
                error!("failed to clear canvas for error panel: {}", error_report(&e));
            }
            let frame = PanelFrame::new(ERROR_ORIGIN, config.panel_width());
            if let Err(e) = ErrorPanel.draw(&mut painter, frame, &report) {
                error!("failed to draw error panel: {}", error_report(&e));
            }
            Ok(RenderOutcome::Fallback { report })
        }
    }
}

fn compose(
    config: &AppConfig,
    metrics: FaceMetrics<'_>,
    provider: &dyn MetricsProvider,
    canvas: &mut dyn Canvas,
    now: NaiveDateTime,
) -> Result<Vec<PanelReport>, RenderError> {
    let rooms = collect_rooms(&config.sensor, provider);
    let power = collect_power(&config.power, provider);

    let mut painter = Painter::new(metrics, canvas);
    let mut panels = Vec::new();
    let origin = config.origin();
    let width = config.panel_width();

    let frame = |y: f64| PanelFrame::new(Point::new(origin.x, y), width);
    let icon = config.icon_path();
    let mut y = origin.y;

    let header = HeaderPanel::new(&config.power.param, &icon);
    y = place(&mut painter, &header, frame(y), &power, &mut panels)?;

    let detail = DetailPanel::new(config)?;
    y = place(&mut painter, &detail, frame(y), rooms.as_slice(), &mut panels)?;

    if config.layout.show_date {
        let date = DatePanel::new(&config.layout.weekday_labels);
        y = place(&mut painter, &date, frame(y), &now.date(), &mut panels)?;
    }

    let update_time = UpdateTimePanel::new(&config.layout.update_marker);
    y = place(&mut painter, &update_time, frame(y), &now, &mut panels)?;

    info!("rendered {} panels, bottom at {}", panels.len(), y);
    Ok(panels)
}

/// Draw one panel at `frame` and record where it landed
fn place<P: Panel + ?Sized>(
    painter: &mut Painter<'_, '_>,
    panel: &P,
    frame: PanelFrame,
    data: &P::Data,
    panels: &mut Vec<PanelReport>,
) -> Result<f64, RenderError> {
    let anchors = panel.anchors(&painter.metrics(), frame)?;
    let next_y = panel.draw(painter, frame, data)?;
    debug!("{} panel: y {} → {}", panel.name(), frame.origin.y, next_y);

    panels.push(PanelReport {
        name: panel.name(),
        origin: frame.origin,
        next_y,
        anchors,
    });
    Ok(next_y)
}

/// An error and its `caused by` chain, one per line
pub fn error_report(error: &dyn std::error::Error) -> String {
    let mut report = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        report.push_str("\ncaused by: ");
        report.push_str(&cause.to_string());
        source = cause.source();
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use sense_panel_core::DrawError;
    use std::io;
    use std::path::PathBuf;

    #[test]
    fn test_error_report_walks_the_chain() {
        let err = RenderError::Draw(DrawError::IconOpen {
            path: PathBuf::from("img/power.png"),
            source: io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        });
        assert_eq!(
            error_report(&err),
            "cannot open icon img/power.png\ncaused by: No such file or directory"
        );
    }
}
