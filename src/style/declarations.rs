use std::fmt;

use crate::unit::config::Config;
use crate::unit::converter::convert_to_unit;
use crate::unit::types::UnitValue;

/// A single `property: value` pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    pub property: String,
    pub value: String,
}

/// CSS declarations computed from loosely typed property values.
/// Properties whose value converts to nothing are omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDeclarations {
    declarations: Vec<Declaration>,
}

impl StyleDeclarations {
    /// Convert every property with its configured unit, preserving input order
    pub fn build<I, K>(properties: I, config: &Config) -> Self
    where
        I: IntoIterator<Item = (K, Option<UnitValue>)>,
        K: Into<String>,
    {
        let mut declarations = Vec::new();

        for (property, value) in properties {
            let property = property.into();
            let unit = config.unit_for(&property);

            match convert_to_unit(value.as_ref(), unit) {
                Some(value) => declarations.push(Declaration { property, value }),
                None => log::debug!("Omitting '{}': no value to render", property),
            }
        }

        Self { declarations }
    }

    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|d| d.property == property)
            .map(|d| d.value.as_str())
    }

    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Render as an inline style block: `width: 10px; height: auto;`
    pub fn to_css(&self) -> String {
        self.to_string()
    }

    /// Declarations as a JSON object keyed by property
    pub fn to_json(&self) -> serde_json::Value {
        let map: serde_json::Map<String, serde_json::Value> = self
            .declarations
            .iter()
            .map(|d| (d.property.clone(), serde_json::Value::String(d.value.clone())))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl fmt::Display for StyleDeclarations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, d) in self.declarations.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}: {};", d.property, d.value)?;
        }
        Ok(())
    }
}
