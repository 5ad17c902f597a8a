//! Sensor hosts, monitored rooms and the power meter

use crate::param::{ParamConfig, ParamKind};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A host that publishes readings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    pub name: String,
    /// Host kind; also the measurement the host writes to (`sensor.<kind>`)
    #[serde(rename = "type")]
    pub kind: String,
}

impl HostConfig {
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
        }
    }
}

/// One row of the detail panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomConfig {
    pub label: String,
    pub host: HostConfig,
}

/// Room sensors and how their readings are displayed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorConfig {
    pub room_list: Vec<RoomConfig>,
    pub param_list: Vec<ParamConfig>,
    /// Parameters a host kind can measure; kinds not listed measure everything
    #[serde(default)]
    pub host_capabilities: BTreeMap<String, Vec<ParamKind>>,
    #[serde(default = "default_sensor_lookback_min")]
    pub lookback_min: u32,
    #[serde(default = "default_sensor_window_min")]
    pub window_min: u32,
}

fn default_sensor_lookback_min() -> u32 {
    60
}

fn default_sensor_window_min() -> u32 {
    3
}

impl SensorConfig {
    pub fn supports(&self, kind: &str, param: ParamKind) -> bool {
        self.host_capabilities
            .get(kind)
            .map_or(true, |params| params.contains(&param))
    }

    pub fn param(&self, kind: ParamKind) -> Option<&ParamConfig> {
        self.param_list.iter().find(|p| p.name == kind)
    }
}

/// The power meter shown in the header
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PowerConfig {
    pub host: HostConfig,
    pub param: ParamConfig,
    #[serde(default = "default_power_lookback_min")]
    pub lookback_min: u32,
}

fn default_power_lookback_min() -> u32 {
    360
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::param::NumberFormat;

    fn sensor_config() -> SensorConfig {
        let mut host_capabilities = BTreeMap::new();
        host_capabilities.insert("esp32".to_string(), vec![ParamKind::Temp, ParamKind::Humi]);
        SensorConfig {
            room_list: vec![RoomConfig {
                label: "和室".to_string(),
                host: HostConfig::new("rasp-meter-2", "rasp"),
            }],
            param_list: vec![ParamConfig::new(ParamKind::Co2, "ppm", NumberFormat::new(0, true))],
            host_capabilities,
            lookback_min: 60,
            window_min: 3,
        }
    }

    #[test]
    fn test_capabilities_restrict_listed_kinds_only() {
        let config = sensor_config();
        assert!(!config.supports("esp32", ParamKind::Co2));
        assert!(config.supports("esp32", ParamKind::Temp));
        assert!(config.supports("rasp", ParamKind::Co2));
    }

    #[test]
    fn test_query_windows_default() {
        let json = r#"{
            "room_list": [],
            "param_list": [{"name": "temp", "unit": "℃", "format": {"precision": 1}}]
        }"#;
        let config: SensorConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.lookback_min, 60);
        assert_eq!(config.window_min, 3);
        assert_eq!(config.param(ParamKind::Temp).map(|p| p.unit.as_str()), Some("℃"));
        assert!(config.param(ParamKind::Co2).is_none());
    }
}
