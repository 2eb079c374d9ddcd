use serde::{Deserialize, Serialize};
use std::fmt;

use crate::unit::number::format_number;

/// A value that may be rendered as a CSS dimension.
///
/// Absence is expressed with `Option<UnitValue>`, never as a variant.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum UnitValue {
    Number(f64),
    Text(String),
}

impl UnitValue {
    /// Textual form used for passthrough output
    pub fn to_text(&self) -> String {
        match self {
            UnitValue::Number(n) => format_number(*n),
            UnitValue::Text(s) => s.clone(),
        }
    }

    pub fn is_empty_text(&self) -> bool {
        matches!(self, UnitValue::Text(s) if s.is_empty())
    }
}

impl fmt::Display for UnitValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitValue::Number(n) => f.write_str(&format_number(*n)),
            UnitValue::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for UnitValue {
    fn from(n: f64) -> Self {
        UnitValue::Number(n)
    }
}

impl From<f32> for UnitValue {
    fn from(n: f32) -> Self {
        UnitValue::Number(f64::from(n))
    }
}

impl From<i32> for UnitValue {
    fn from(n: i32) -> Self {
        UnitValue::Number(f64::from(n))
    }
}

impl From<u32> for UnitValue {
    fn from(n: u32) -> Self {
        UnitValue::Number(f64::from(n))
    }
}

impl From<i64> for UnitValue {
    fn from(n: i64) -> Self {
        UnitValue::Number(n as f64)
    }
}

impl From<&str> for UnitValue {
    fn from(s: &str) -> Self {
        UnitValue::Text(s.to_string())
    }
}

impl From<String> for UnitValue {
    fn from(s: String) -> Self {
        UnitValue::Text(s)
    }
}

/// Outcome of converting a value, one variant per output shape
#[derive(Debug, Clone, PartialEq)]
pub enum Conversion {
    /// Nothing to render (unset input or empty text)
    Absent,
    /// Non-numeric input, returned unchanged
    Passthrough(String),
    /// Numeric input re-normalized and suffixed with a unit
    Dimension { magnitude: f64, unit: String },
}

impl Conversion {
    pub fn is_absent(&self) -> bool {
        matches!(self, Conversion::Absent)
    }

    pub fn into_option(self) -> Option<String> {
        match self {
            Conversion::Absent => None,
            Conversion::Passthrough(text) => Some(text),
            dimension => Some(dimension.to_string()),
        }
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::Absent => Ok(()),
            Conversion::Passthrough(text) => f.write_str(text),
            Conversion::Dimension { magnitude, unit } => {
                write!(f, "{}{}", format_number(*magnitude), unit)
            }
        }
    }
}
