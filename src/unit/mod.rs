// Conversion of loosely typed values into CSS dimension strings
// Numbers and numeric text get a unit suffix, other text passes through

pub mod coerce;
pub mod config;
pub mod converter;
pub mod error;
pub mod number;
pub mod types;


pub use coerce::{is_numeric, to_number};
pub use config::Config;
pub use converter::{classify, convert, convert_to_unit, UnitConverter, DEFAULT_UNIT};
pub use error::{Result, UnitError};
pub use number::format_number;
pub use types::{Conversion, UnitValue};
