// WebAssembly bindings for JavaScript hosts
// The host provides its own UI framework; only conversion is exported
use crate::style;
use crate::unit;
use wasm_bindgen::prelude::*;

/// Convert a number or string to a CSS dimension string.
/// `null`, `undefined` and `""` give `undefined`; non-numeric text is returned unchanged.
/// Throws a `TypeError` for values that are neither numbers nor strings.
#[wasm_bindgen(js_name = convertToUnit)]
pub fn convert_to_unit(value: JsValue, unit: Option<String>) -> Result<Option<String>, JsValue> {
    let value = js_to_unit(&value)?;
    let unit = unit.as_deref().unwrap_or(unit::DEFAULT_UNIT);
    Ok(unit::convert_to_unit(value.as_ref(), unit))
}

/// Render a CSS declaration block from a JSON object of style properties
/// config_toml: optional configuration with `default_unit` and `[units]` overrides
#[wasm_bindgen(js_name = styleFromJson)]
pub fn style_from_json(json: &str, config_toml: Option<String>) -> Result<String, JsValue> {
    let config = match config_toml {
        Some(content) => unit::Config::load_from_str(&content)
            .map_err(|e| JsValue::from_str(&format!("Failed to load config: {}", e)))?,
        None => unit::Config::empty(),
    };

    let properties = style::properties_from_json(json)
        .map_err(|e| JsValue::from_str(&format!("Failed to read style: {}", e)))?;

    Ok(style::StyleDeclarations::build(properties, &config).to_css())
}

fn js_to_unit(value: &JsValue) -> Result<Option<unit::UnitValue>, JsValue> {
    if value.is_null() || value.is_undefined() {
        return Ok(None);
    }
    if let Some(n) = value.as_f64() {
        return Ok(Some(unit::UnitValue::Number(n)));
    }
    if let Some(s) = value.as_string() {
        return Ok(Some(unit::UnitValue::Text(s)));
    }

    let kind = value.js_typeof().as_string().unwrap_or_default();
    Err(js_sys::TypeError::new(&format!(
        "convertToUnit expects a number, a string, null or undefined, got {}",
        kind
    ))
    .into())
}
