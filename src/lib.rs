pub mod style;
pub mod unit;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use unit::{convert, convert_to_unit, Conversion, UnitConverter, UnitValue, DEFAULT_UNIT};
