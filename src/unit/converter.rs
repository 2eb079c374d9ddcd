use crate::unit::coerce::to_number;
use crate::unit::types::{Conversion, UnitValue};

/// Unit appended when the caller does not name one
pub const DEFAULT_UNIT: &str = "px";

/// Classify a value into one of the three output shapes.
///
/// Only an unset value or empty text is absent; numeric zero is a dimension.
pub fn classify(value: Option<&UnitValue>, unit: &str) -> Conversion {
    let value = match value {
        Some(v) if !v.is_empty_text() => v,
        _ => return Conversion::Absent,
    };

    let magnitude = match value {
        UnitValue::Number(n) if n.is_nan() => None,
        UnitValue::Number(n) => Some(*n),
        UnitValue::Text(s) => to_number(s),
    };

    match magnitude {
        Some(magnitude) => Conversion::Dimension {
            magnitude,
            unit: unit.to_string(),
        },
        None => {
            log::trace!("'{}' is not numeric, passing through", value);
            Conversion::Passthrough(value.to_text())
        }
    }
}

/// Convert a value to a CSS dimension string with the given unit
///
/// # Examples
/// ```
/// use cssunit::{convert_to_unit, UnitValue};
/// assert_eq!(convert_to_unit(Some(&UnitValue::from(10)), "%"), Some("10%".to_string()));
/// assert_eq!(convert_to_unit(Some(&UnitValue::from("10px")), "px"), Some("10px".to_string()));
/// assert_eq!(convert_to_unit(None, "px"), None);
/// ```
pub fn convert_to_unit(value: Option<&UnitValue>, unit: &str) -> Option<String> {
    classify(value, unit).into_option()
}

/// Convert a value to a CSS dimension string in pixels
pub fn convert(value: Option<&UnitValue>) -> Option<String> {
    convert_to_unit(value, DEFAULT_UNIT)
}

/// Converter bound to a default unit (typically from configuration)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitConverter {
    default_unit: String,
}

impl UnitConverter {
    pub fn new(default_unit: impl Into<String>) -> Self {
        Self {
            default_unit: default_unit.into(),
        }
    }

    pub fn default_unit(&self) -> &str {
        &self.default_unit
    }
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT)
    }
}

impl UnitConverter {
    /// Convert using the default unit
    pub fn convert(&self, value: Option<&UnitValue>) -> Option<String> {
        convert_to_unit(value, &self.default_unit)
    }

    /// Convert using an explicit unit, falling back to the default one
    pub fn convert_with(&self, value: Option<&UnitValue>, unit: Option<&str>) -> Option<String> {
        convert_to_unit(value, unit.unwrap_or(self.default_unit.as_str()))
    }

    /// Convert raw text such as a command-line argument
    /// Empty text is absent, everything else goes through coercion
    pub fn convert_str(&self, text: &str, unit: Option<&str>) -> Option<String> {
        let value = UnitValue::from(text);
        self.convert_with(Some(&value), unit)
    }
}
