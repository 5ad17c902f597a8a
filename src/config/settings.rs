//! Application configuration

use anyhow::{Context, Result};
use chrono_tz::Tz;
use log::info;
use sense_panel_core::{ConfigError, FaceTable};
use sense_panel_types::{
    DeviceConfig, Face, FaceConfig, FontConfig, ParamConfig, ParamKind, Point, PowerConfig,
    SensorConfig,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::layout;

/// Current config format version
pub const CONFIG_VERSION: u32 = 1;

/// Application-wide configuration
///
/// Passed by reference into every layout and draw call; nothing reads
/// configuration from global state.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Version of the config format
    pub version: u32,
    /// Output device geometry and pixel format
    pub panel: DeviceConfig,
    /// Font types → pango font descriptions
    pub font: FontConfig,
    pub layout: LayoutConfig,
    pub icon: IconConfig,
    pub sensor: SensorConfig,
    pub power: PowerConfig,
    /// Directory of the file this config was loaded from
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

/// Outer margins of the panel stack
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub width: i32,
    pub height: i32,
}

/// Face table and panel layout settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    pub margin: Margin,
    /// Symbolic face → font type and pixel size
    pub faces: BTreeMap<Face, FaceConfig>,
    /// Draw the date panel between the rooms and the update time
    pub show_date: bool,
    /// Appended to the update time
    pub update_marker: String,
    /// Weekday names, Monday first
    pub weekday_labels: Vec<String>,
    /// IANA timezone the panel clock runs in
    pub timezone: String,
}

/// Icon files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Directory holding the icons; a relative path is resolved against
    /// the config file's directory, or the working directory for the
    /// built-in defaults
    pub path: PathBuf,
    /// Power icon file name, relative to `path`
    pub power: String,
}

impl AppConfig {
    /// Load configuration from disk
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            info!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from_path(&config_path)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = directories::ProjectDirs::from("org", "sense-panel", "sense-panel")
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;

        Ok(dirs.config_dir().join("config.json"))
    }

    /// Load configuration from a specific file path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let mut config: Self = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config {}", path.display()))?;
        config.base_dir = path.parent().map(Path::to_path_buf);
        info!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save configuration to a specific file path
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("failed to write config {}", path.display()))?;
        Ok(())
    }

    /// Top-left corner of the first panel
    pub fn origin(&self) -> Point {
        Point::new(
            f64::from(self.layout.margin.width),
            f64::from(self.layout.margin.height),
        )
    }

    /// Width available to every panel
    pub fn panel_width(&self) -> f64 {
        (i64::from(self.panel.width) - 2 * i64::from(self.layout.margin.width)) as f64
    }

    /// Power icon file
    pub fn icon_path(&self) -> PathBuf {
        let icon = self.icon.path.join(&self.icon.power);
        match &self.base_dir {
            Some(dir) if icon.is_relative() => dir.join(icon),
            _ => icon,
        }
    }

    /// Display settings of a parameter; power comes from the power meter
    pub fn param(&self, kind: ParamKind) -> Result<&ParamConfig, ConfigError> {
        match kind {
            ParamKind::Power => Ok(&self.power.param),
            _ => self.sensor.param(kind).ok_or(ConfigError::MissingParam(kind)),
        }
    }

    pub fn timezone(&self) -> Result<Tz, ConfigError> {
        self.layout
            .timezone
            .parse::<Tz>()
            .map_err(|e| ConfigError::InvalidSetting {
                key: "layout.timezone",
                reason: e.to_string(),
            })
    }

    pub fn face_table(&self) -> Result<FaceTable, ConfigError> {
        FaceTable::from_config(&self.font, &self.layout.faces)
    }

    /// Faces the enabled panels draw with
    pub fn required_faces(&self) -> Vec<Face> {
        let mut faces = Vec::new();
        faces.extend(layout::header::REQUIRED_FACES);
        faces.extend(layout::detail::REQUIRED_FACES);
        if self.layout.show_date {
            faces.extend(layout::date::REQUIRED_FACES);
        }
        faces.extend(layout::update_time::REQUIRED_FACES);
        faces.extend(layout::error::REQUIRED_FACES);
        faces
    }

    /// Check everything a render pass depends on.
    ///
    /// Runs before the canvas is touched, so a broken deployment fails
    /// without producing a half-drawn image.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.panel.width <= 0 || self.panel.height <= 0 {
            return Err(ConfigError::Geometry(format!(
                "device size {}x{} is empty",
                self.panel.width, self.panel.height
            )));
        }
        if self.layout.margin.width < 0 || self.layout.margin.height < 0 {
            return Err(ConfigError::Geometry(format!(
                "margins {}x{} are negative",
                self.layout.margin.width, self.layout.margin.height
            )));
        }
        if self.panel_width() <= 0.0 || self.layout.margin.height >= self.panel.height {
            return Err(ConfigError::Geometry(format!(
                "margins {}x{} leave no room on a {}x{} panel",
                self.layout.margin.width,
                self.layout.margin.height,
                self.panel.width,
                self.panel.height
            )));
        }

        let faces = self.face_table()?;
        if let Some(face) = self
            .required_faces()
            .into_iter()
            .find(|face| !faces.contains(*face))
        {
            return Err(ConfigError::UnknownFace(face));
        }

        for kind in ParamKind::ROOM {
            self.param(kind)?;
        }
        if self.power.param.name != ParamKind::Power {
            return Err(ConfigError::InvalidSetting {
                key: "power.param.name",
                reason: format!("expected `power`, got `{}`", self.power.param.name),
            });
        }

        if self.layout.weekday_labels.len() != 7 {
            return Err(ConfigError::InvalidSetting {
                key: "layout.weekday_labels",
                reason: format!("need 7 labels, got {}", self.layout.weekday_labels.len()),
            });
        }

        self.timezone()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = AppConfig::default();
        config.validate().unwrap();
        assert_eq!(config.panel_width(), 1012.0);
        assert_eq!(config.origin(), Point::new(30.0, 20.0));
        assert_eq!(config.timezone().unwrap(), chrono_tz::Asia::Tokyo);
    }

    #[test]
    fn test_missing_face_is_rejected() {
        let mut config = AppConfig::default();
        config.layout.faces.remove(&Face::Time);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownFace(Face::Time))
        ));
    }

    #[test]
    fn test_date_faces_only_required_when_shown() {
        let mut config = AppConfig::default();
        config.layout.faces.remove(&Face::WdayLarge);
        config.layout.show_date = false;
        config.validate().unwrap();

        config.layout.show_date = true;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::UnknownFace(Face::WdayLarge))
        ));
    }

    #[test]
    fn test_missing_unit_is_rejected() {
        let mut config = AppConfig::default();
        config.sensor.param_list.retain(|p| p.name != ParamKind::Humi);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingParam(ParamKind::Humi))
        ));
    }

    #[test]
    fn test_bad_geometry_and_timezone() {
        let mut config = AppConfig::default();
        config.layout.margin.width = 600;
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));

        let mut config = AppConfig::default();
        config.layout.timezone = "Mars/Olympus".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidSetting { key: "layout.timezone", .. })
        ));
    }

    #[test]
    fn test_huge_margin_is_geometry_error() {
        let mut config = AppConfig::default();
        config.layout.margin.width = 1_200_000_000;
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));
        assert!(config.panel_width() < 0.0);

        config.layout.margin.width = i32::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));
    }

    #[test]
    fn test_negative_margin_is_rejected() {
        let mut config = AppConfig::default();
        config.layout.margin.width = -200;
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));

        let mut config = AppConfig::default();
        config.layout.margin.height = -1;
        assert!(matches!(config.validate(), Err(ConfigError::Geometry(_))));
    }

    #[test]
    fn test_power_param_comes_from_power_meter() {
        let config = AppConfig::default();
        assert_eq!(config.param(ParamKind::Power).unwrap().unit, "W");
        assert_eq!(config.param(ParamKind::Co2).unwrap().unit, "ppm");
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"layout": {"show_date": true}}"#).unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert!(config.layout.show_date);
        assert_eq!(config.layout.update_marker, "更新");
        assert_eq!(config.sensor.room_list.len(), 4);
        config.validate().unwrap();
    }

    #[test]
    fn test_relative_icon_path_follows_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"icon": {"path": "icons", "power": "bolt.png"}}"#).unwrap();

        let config = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(config.icon_path(), dir.path().join("icons").join("bolt.png"));

        let mut config = config;
        config.icon.path = PathBuf::from("/opt/sense-panel/img");
        assert_eq!(config.icon_path(), PathBuf::from("/opt/sense-panel/img/bolt.png"));
    }

    #[test]
    fn test_default_icon_is_shipped() {
        let config = AppConfig::default();
        assert_eq!(config.icon_path(), PathBuf::from("img/power.png"));
        assert!(config.icon_path().is_file());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.layout.update_marker = "updated".to_string();
        config.save_to_path(&path).unwrap();

        let loaded = AppConfig::load_from_path(&path).unwrap();
        assert_eq!(loaded.layout, config.layout);
        assert_eq!(loaded.sensor, config.sensor);
    }

    #[test]
    fn test_unreadable_file_reports_path() {
        let err = AppConfig::load_from_path(Path::new("/nonexistent/config.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/config.json"));
    }
}
