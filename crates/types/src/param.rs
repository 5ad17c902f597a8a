//! Measured parameters, their display units and number formats

use serde::{Deserialize, Serialize};
use std::fmt;

/// A parameter a sensor host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamKind {
    Temp,
    Humi,
    Co2,
    Power,
}

impl ParamKind {
    /// Parameters shown per room, in column order
    pub const ROOM: [ParamKind; 3] = [ParamKind::Temp, ParamKind::Humi, ParamKind::Co2];

    /// Field name used in metric queries
    pub fn name(&self) -> &'static str {
        match self {
            ParamKind::Temp => "temp",
            ParamKind::Humi => "humi",
            ParamKind::Co2 => "co2",
            ParamKind::Power => "power",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fixed-point number format with optional thousands separators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NumberFormat {
    /// Digits after the decimal point
    pub precision: usize,
    /// Group integer digits with `,`
    #[serde(default)]
    pub thousands: bool,
}

impl NumberFormat {
    pub const fn new(precision: usize, thousands: bool) -> Self {
        Self {
            precision,
            thousands,
        }
    }

    pub fn format(&self, value: f64) -> String {
        let fixed = format!("{:.*}", self.precision, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (fixed.as_str(), None),
        };

        let mut out = String::with_capacity(fixed.len() + int_part.len() / 3 + 1);
        // "-0.0" style output is kept off the panel
        if value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
            out.push('-');
        }
        if self.thousands {
            for (i, digit) in int_part.chars().enumerate() {
                if i > 0 && (int_part.len() - i) % 3 == 0 {
                    out.push(',');
                }
                out.push(digit);
            }
        } else {
            out.push_str(int_part);
        }
        if let Some(frac_part) = frac_part {
            out.push('.');
            out.push_str(frac_part);
        }
        out
    }
}

/// Display settings of one parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParamConfig {
    pub name: ParamKind,
    pub unit: String,
    pub format: NumberFormat,
}

impl ParamConfig {
    pub fn new(name: ParamKind, unit: impl Into<String>, format: NumberFormat) -> Self {
        Self {
            name,
            unit: unit.into(),
            format,
        }
    }
}
