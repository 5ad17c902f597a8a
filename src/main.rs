use anyhow::{Context, Result};
use chrono::{NaiveDateTime, Utc};
use clap::Parser;
use log::{error, info, warn};
use sense_panel::config::AppConfig;
use sense_panel::core::{render, PanelReport, RenderOutcome};
use sense_panel_core::BoxSize;
use sense_panel_render::{CairoCanvas, DrawOp, PangoMeasure, RecordingCanvas};
use sense_panel_sources::StaticProvider;
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};

/// sense-panel - Render sensor readings into an e-ink status image
#[derive(Parser, Debug, Clone)]
#[command(name = "sense-panel")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file (default: config.json in the platform config directory)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Readings to display: JSON array of {kind, host, param, window_min, value}
    #[arg(short = 'r', long = "readings", value_name = "FILE")]
    readings: Option<PathBuf>,

    /// Output file, or `-` for stdout
    #[arg(short = 'o', long = "output", value_name = "FILE", default_value = "-")]
    output: String,

    /// Print panel anchors and draw operations as JSON instead of a PNG
    #[arg(long = "dump-layout")]
    dump_layout: bool,

    /// Render for a fixed local time instead of now (e.g. --at="2024-03-09 07:05")
    #[arg(short = 'a', long = "at", value_name = "TIME", value_parser = parse_time)]
    at: Option<NaiveDateTime>,

    /// Debug verbosity level (0=quiet, 1=info, 2=debug, 3=trace)
    #[arg(short = 'd', long = "debug", value_name = "LEVEL", default_value = "0")]
    debug: u8,
}

/// Parse "YYYY-MM-DD HH:MM"
fn parse_time(s: &str) -> Result<NaiveDateTime, String> {
    NaiveDateTime::parse_from_str(s.trim(), "%Y-%m-%d %H:%M")
        .map_err(|e| format!("Expected format: YYYY-MM-DD HH:MM, got: {} ({})", s, e))
}

/// `--dump-layout` output
#[derive(Serialize)]
struct LayoutDump<'a> {
    panels: &'a [PanelReport],
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<&'a str>,
    ops: &'a [DrawOp],
}

fn main() {
    let cli = Cli::parse();

    // Level 0 (default): warn only
    // Level 1: info
    // Level 2: debug
    // Level 3+: trace
    let log_level = match cli.debug {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    // Allow RUST_LOG to override CLI setting
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    info!("Starting sense-panel v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(&cli) {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let provider = match &cli.readings {
        Some(path) => StaticProvider::load_from_path(path)?,
        None => {
            warn!("no readings file given, every value will be drawn as missing");
            StaticProvider::new()
        }
    };

    let now = match cli.at {
        Some(at) => at,
        None => Utc::now().with_timezone(&config.timezone()?).naive_local(),
    };

    let measure = PangoMeasure::new().context("failed to set up text measurement")?;
    let size = BoxSize::new(config.panel.width, config.panel.height);

    if cli.dump_layout {
        let mut canvas = RecordingCanvas::new(size);
        let outcome = render(&config, &measure, &provider, &mut canvas, now)?;

        let dump = match &outcome {
            RenderOutcome::Rendered(panels) => LayoutDump {
                panels,
                error: None,
                ops: canvas.ops(),
            },
            RenderOutcome::Fallback { report } => LayoutDump {
                panels: &[],
                error: Some(report.as_str()),
                ops: canvas.ops(),
            },
        };
        let json = serde_json::to_string_pretty(&dump)?;
        write_output(&cli.output, json.as_bytes())
    } else {
        let mut canvas = CairoCanvas::new(size).context("failed to create canvas")?;
        let outcome = render(&config, &measure, &provider, &mut canvas, now)?;
        if outcome.is_fallback() {
            warn!("render failed, writing the error panel instead");
        }

        let png = canvas.encode_png(config.panel.pixel_format)?;
        write_output(&cli.output, &png)
    }
}

fn write_output(output: &str, bytes: &[u8]) -> Result<()> {
    if output == "-" {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(bytes)?;
        stdout.flush()?;
        return Ok(());
    }

    let path = Path::new(output);
    std::fs::write(path, bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!("wrote {} bytes to {}", bytes.len(), path.display());
    Ok(())
}
