//! Sensor readings as handed to the panels

use crate::param::ParamKind;
use serde::{Deserialize, Serialize};

/// One field of a room reading.
///
/// `Missing` and `Unsupported` are different on the panel: a missing value
/// is drawn as the placeholder glyph, an unsupported one (the host has no
/// such sensor) leaves its column out entirely.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum Reading {
    Present(f64),
    Missing,
    Unsupported,
}

impl Reading {
    pub fn from_option(value: Option<f64>) -> Self {
        match value {
            Some(v) => Reading::Present(v),
            None => Reading::Missing,
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Present(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Reading::Unsupported)
    }
}

/// Latest readings of one monitored room
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomReading {
    pub place: String,
    pub temp: Reading,
    pub humi: Reading,
    pub co2: Reading,
}

impl RoomReading {
    /// A room with every field missing
    pub fn empty(place: impl Into<String>) -> Self {
        Self {
            place: place.into(),
            temp: Reading::Missing,
            humi: Reading::Missing,
            co2: Reading::Missing,
        }
    }

    pub fn get(&self, param: ParamKind) -> Reading {
        match param {
            ParamKind::Temp => self.temp,
            ParamKind::Humi => self.humi,
            ParamKind::Co2 => self.co2,
            ParamKind::Power => Reading::Unsupported,
        }
    }

    pub fn set(&mut self, param: ParamKind, reading: Reading) {
        match param {
            ParamKind::Temp => self.temp = reading,
            ParamKind::Humi => self.humi = reading,
            ParamKind::Co2 => self.co2 = reading,
            ParamKind::Power => {}
        }
    }
}

/// Rolling-average window of the power readings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PowerWindow {
    Min3,
    Min10,
    Min60,
    Min180,
}

impl PowerWindow {
    pub const ALL: [PowerWindow; 4] = [
        PowerWindow::Min3,
        PowerWindow::Min10,
        PowerWindow::Min60,
        PowerWindow::Min180,
    ];

    /// Windows listed in the header's detail column, top to bottom
    pub const DETAIL: [PowerWindow; 3] =
        [PowerWindow::Min10, PowerWindow::Min60, PowerWindow::Min180];

    pub fn minutes(&self) -> u32 {
        match self {
            PowerWindow::Min3 => 3,
            PowerWindow::Min10 => 10,
            PowerWindow::Min60 => 60,
            PowerWindow::Min180 => 180,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PowerWindow::Min3 => "3min",
            PowerWindow::Min10 => "10min",
            PowerWindow::Min60 => "60min",
            PowerWindow::Min180 => "180min",
        }
    }
}

/// Power draw averaged over the four windows
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PowerReadings {
    pub min3: Option<f64>,
    pub min10: Option<f64>,
    pub min60: Option<f64>,
    pub min180: Option<f64>,
}

impl PowerReadings {
    pub fn get(&self, window: PowerWindow) -> Option<f64> {
        match window {
            PowerWindow::Min3 => self.min3,
            PowerWindow::Min10 => self.min10,
            PowerWindow::Min60 => self.min60,
            PowerWindow::Min180 => self.min180,
        }
    }

    pub fn set(&mut self, window: PowerWindow, value: Option<f64>) {
        match window {
            PowerWindow::Min3 => self.min3 = value,
            PowerWindow::Min10 => self.min10 = value,
            PowerWindow::Min60 => self.min60 = value,
            PowerWindow::Min180 => self.min180 = value,
        }
    }

    /// Substitute the 10-minute value for a missing 3-minute value.
    ///
    /// One level only: a missing 10-minute value is not itself replaced.
    pub fn with_fallback(mut self) -> Self {
        if self.min3.is_none() {
            self.min3 = self.min10;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_takes_ten_minute_value() {
        let readings = PowerReadings {
            min3: None,
            min10: Some(42.0),
            min60: Some(500.0),
            min180: None,
        }
        .with_fallback();
        assert_eq!(readings.min3, Some(42.0));
        assert_eq!(readings.min180, None);
    }

    #[test]
    fn test_fallback_does_not_chain() {
        let readings = PowerReadings {
            min3: None,
            min10: None,
            min60: Some(500.0),
            min180: Some(480.0),
        }
        .with_fallback();
        assert_eq!(readings.min3, None);
    }

    #[test]
    fn test_fallback_keeps_present_value() {
        let readings = PowerReadings {
            min3: Some(1.0),
            min10: Some(42.0),
            ..Default::default()
        }
        .with_fallback();
        assert_eq!(readings.min3, Some(1.0));
    }

    #[test]
    fn test_reading_serialization() {
        let room = RoomReading {
            place: "書斎".to_string(),
            temp: Reading::Present(21.5),
            humi: Reading::Missing,
            co2: Reading::Unsupported,
        };
        let json = serde_json::to_string(&room).unwrap();
        assert!(json.contains(r#""temp":{"state":"present","value":21.5}"#));
        assert!(json.contains(r#""co2":{"state":"unsupported"}"#));

        let parsed: RoomReading = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, room);
    }
}
