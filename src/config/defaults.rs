//! Built-in configuration
//!
//! The defaults describe a 1072×1448 grayscale e-ink panel with four rooms
//! and one power meter, the layout the renderer was originally tuned for.

use sense_panel_types::{
    DeviceConfig, Face, FaceConfig, FontConfig, HostConfig, NumberFormat, ParamConfig, ParamKind,
    PowerConfig, RoomConfig, SensorConfig,
};
use std::collections::BTreeMap;
use std::path::PathBuf;

use super::settings::{AppConfig, IconConfig, LayoutConfig, Margin, CONFIG_VERSION};

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            panel: DeviceConfig::default(),
            font: default_font(),
            layout: LayoutConfig::default(),
            icon: IconConfig::default(),
            sensor: default_sensor(),
            power: default_power(),
            base_dir: None,
        }
    }
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            width: 30,
            height: 20,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            margin: Margin::default(),
            faces: default_faces(),
            show_date: false,
            update_marker: "更新".to_string(),
            weekday_labels: ["月", "火", "水", "木", "金", "土", "日"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            timezone: "Asia/Tokyo".to_string(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("img"),
            power: "power.png".to_string(),
        }
    }
}

fn default_font() -> FontConfig {
    let mut map = BTreeMap::new();
    map.insert("FUTURA".to_string(), "Futura Std Medium".to_string());
    map.insert("FUTURA_BOLD".to_string(), "Futura Std Bold".to_string());
    map.insert(
        "FUTURA_COND_BOLD".to_string(),
        "Futura Std Condensed Bold".to_string(),
    );
    map.insert("SHINGO".to_string(), "A-OTF Shin Go Pro Medium".to_string());
    FontConfig { map }
}

fn default_faces() -> BTreeMap<Face, FaceConfig> {
    [
        (Face::PowerLarge, "FUTURA_COND_BOLD", 220.0),
        (Face::PowerDetailLabel, "FUTURA", 40.0),
        (Face::PowerDetailValue, "FUTURA_COND_BOLD", 80.0),
        (Face::UnitLarge, "FUTURA_BOLD", 80.0),
        (Face::Place, "SHINGO", 40.0),
        (Face::Temp, "FUTURA_COND_BOLD", 170.0),
        (Face::Humi, "FUTURA_COND_BOLD", 170.0),
        (Face::Co2, "FUTURA_COND_BOLD", 80.0),
        (Face::Unit, "SHINGO", 40.0),
        (Face::Time, "FUTURA", 20.0),
        (Face::DateLarge, "FUTURA_COND_BOLD", 130.0),
        (Face::WdayLarge, "SHINGO", 60.0),
        (Face::ErrorTitle, "FUTURA_BOLD", 100.0),
        (Face::ErrorDetail, "FUTURA", 30.0),
    ]
    .into_iter()
    .map(|(face, font_type, size)| (face, FaceConfig::new(font_type, size)))
    .collect()
}

fn default_sensor() -> SensorConfig {
    let room = |label: &str, host: &str, kind: &str| RoomConfig {
        label: label.to_string(),
        host: HostConfig::new(host, kind),
    };

    let mut host_capabilities = BTreeMap::new();
    // ESP32 boards carry no CO2 sensor
    host_capabilities.insert("esp32".to_string(), vec![ParamKind::Temp, ParamKind::Humi]);

    SensorConfig {
        room_list: vec![
            room("リビング", "rasp-meter-1", "rasp"),
            room("和室", "rasp-meter-2", "rasp"),
            room("家事室", "esp32-meter-3", "esp32"),
            room("書斎", "rasp-meter-4", "rasp"),
        ],
        param_list: vec![
            ParamConfig::new(ParamKind::Temp, "℃", NumberFormat::new(1, false)),
            ParamConfig::new(ParamKind::Humi, "％", NumberFormat::new(1, false)),
            ParamConfig::new(ParamKind::Co2, "ppm", NumberFormat::new(0, true)),
        ],
        host_capabilities,
        lookback_min: 60,
        window_min: 3,
    }
}

fn default_power() -> PowerConfig {
    PowerConfig {
        host: HostConfig::new("rasp-meter-5", "rasp"),
        param: ParamConfig::new(ParamKind::Power, "W", NumberFormat::new(0, true)),
        lookback_min: 360,
    }
}
