use serde_json::Value as JsonValue;
use std::path::Path;
use toml::Value as TomlValue;

use crate::unit::error::{Result, UnitError};
use crate::unit::types::UnitValue;

/// Property name paired with its (possibly absent) value, in document order
pub type StyleProperties = Vec<(String, Option<UnitValue>)>;

/// Read style properties from a JSON object
/// `null` is absent; numbers and strings are kept as-is
pub fn properties_from_json(content: &str) -> Result<StyleProperties> {
    let document: JsonValue = serde_json::from_str(content)?;
    let object = match document {
        JsonValue::Object(object) => object,
        other => {
            return Err(UnitError::InvalidDocument(format!(
                "expected a JSON object of style properties, got {}",
                json_kind(&other)
            )))
        }
    };

    object
        .into_iter()
        .map(|(property, value)| {
            let value = json_to_unit(&property, value)?;
            Ok::<_, UnitError>((property, value))
        })
        .collect()
}

/// Read style properties from a TOML table
/// TOML has no null, so empty strings are the only absent values
pub fn properties_from_toml(content: &str) -> Result<StyleProperties> {
    let table: toml::Table = toml::from_str(content)?;

    table
        .into_iter()
        .map(|(property, value)| {
            let value = toml_to_unit(&property, value)?;
            Ok::<_, UnitError>((property, value))
        })
        .collect()
}

/// Read a style file, choosing the format from its extension
pub fn properties_from_file<P: AsRef<Path>>(path: P) -> Result<StyleProperties> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        properties_from_json(&content)
    } else {
        properties_from_toml(&content)
    }
}

pub fn json_to_unit(property: &str, value: JsonValue) -> Result<Option<UnitValue>> {
    match value {
        JsonValue::Null => Ok(None),
        JsonValue::Number(n) => Ok(n.as_f64().map(UnitValue::Number)),
        JsonValue::String(s) => Ok(Some(UnitValue::Text(s))),
        other => Err(UnitError::UnsupportedValue {
            property: property.to_string(),
            kind: json_kind(&other).to_string(),
        }),
    }
}

pub fn toml_to_unit(property: &str, value: TomlValue) -> Result<Option<UnitValue>> {
    match value {
        TomlValue::Integer(i) => Ok(Some(UnitValue::Number(i as f64))),
        TomlValue::Float(f) => Ok(Some(UnitValue::Number(f))),
        TomlValue::String(s) => Ok(Some(UnitValue::Text(s))),
        other => Err(UnitError::UnsupportedValue {
            property: property.to_string(),
            kind: other.type_str().to_string(),
        }),
    }
}

fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(_) => "number",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_properties_keep_order() {
        let props = properties_from_json(
            r#"{"width": 320, "height": "auto", "min-width": null, "padding": "0"}"#,
        )
        .unwrap();

        let names: Vec<&str> = props.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["width", "height", "min-width", "padding"]);
        assert_eq!(props[0].1, Some(UnitValue::Number(320.0)));
        assert_eq!(props[1].1, Some(UnitValue::Text("auto".to_string())));
        assert_eq!(props[2].1, None);
    }

    #[test]
    fn test_json_rejects_booleans_and_nesting() {
        let err = properties_from_json(r#"{"width": true}"#).unwrap_err();
        match err {
            UnitError::UnsupportedValue { property, kind } => {
                assert_eq!(property, "width");
                assert_eq!(kind, "boolean");
            }
            other => panic!("Unexpected error: {}", other),
        }

        assert!(properties_from_json(r#"{"margin": [1, 2]}"#).is_err());
        assert!(matches!(
            properties_from_json("[1, 2]"),
            Err(UnitError::InvalidDocument(_))
        ));
        assert!(matches!(
            properties_from_json("{not json"),
            Err(UnitError::Json(_))
        ));
    }

    #[test]
    fn test_toml_properties() {
        let props = properties_from_toml(
            r#"
width = 320
line-height = 1.5
height = "auto"
max-height = ""
"#,
        )
        .unwrap();

        let names: Vec<&str> = props.iter().map(|(p, _)| p.as_str()).collect();
        assert_eq!(names, vec!["width", "line-height", "height", "max-height"]);
        assert_eq!(props[0].1, Some(UnitValue::Number(320.0)));
        assert_eq!(props[1].1, Some(UnitValue::Number(1.5)));
        assert_eq!(props[3].1, Some(UnitValue::Text(String::new())));
    }

    #[test]
    fn test_out_of_range_json_number_is_rejected() {
        // serde_json refuses literals outside f64 instead of saturating to infinity
        let err = properties_from_json(r#"{"width": 1e400}"#).unwrap_err();
        assert!(matches!(err, UnitError::Json(_)));
    }

    #[test]
    fn test_file_format_follows_extension() {
        use tempfile::TempDir;

        let temp_dir = TempDir::new().expect("failed to create temp dir");
        // Both documents parse only in their own format
        let json = r#"{"width": null, "height": 10}"#;
        let toml = "width = \"auto\"\nheight = 10\n";

        let json_path = temp_dir.path().join("style.json");
        std::fs::write(&json_path, json).unwrap();
        let props = properties_from_file(&json_path).unwrap();
        assert_eq!(props[0], ("width".to_string(), None));

        let upper_path = temp_dir.path().join("STYLE.JSON");
        std::fs::write(&upper_path, json).unwrap();
        let props = properties_from_file(&upper_path).unwrap();
        assert_eq!(props[0], ("width".to_string(), None));

        let toml_path = temp_dir.path().join("style.toml");
        std::fs::write(&toml_path, toml).unwrap();
        let props = properties_from_file(&toml_path).unwrap();
        assert_eq!(props[0], ("width".to_string(), Some(UnitValue::from("auto"))));

        // Anything that is not .json goes through the TOML parser
        let other_path = temp_dir.path().join("style.css");
        std::fs::write(&other_path, json).unwrap();
        assert!(matches!(
            properties_from_file(&other_path),
            Err(UnitError::Toml(_))
        ));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let temp_dir = tempfile::TempDir::new().expect("failed to create temp dir");
        let err = properties_from_file(temp_dir.path().join("missing.toml")).unwrap_err();
        assert!(matches!(err, UnitError::Io(_)));
    }

    #[test]
    fn test_toml_rejects_tables() {
        let err = properties_from_toml("[padding]\ntop = 4\n").unwrap_err();
        assert!(matches!(err, UnitError::UnsupportedValue { ref property, .. } if property == "padding"));
    }
}
