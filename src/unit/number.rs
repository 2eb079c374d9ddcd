//! Number-to-text rendering.
//!
//! Renders an `f64` with the shortest digit string that round-trips, laid
//! out the way dynamic-language number printing does: plain notation for
//! decimal exponents in `-6..21`, exponent notation (`1e+21`, `1.5e-7`)
//! outside it, no trailing `.0`, and a single `0` for both zeros. Digit
//! generation is delegated to `ryu-js`.

/// Render a number as text
///
/// # Examples
/// ```
/// use cssunit::unit::number::format_number;
/// assert_eq!(format_number(7.0), "7");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e21), "1e+21");
/// ```
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    // Exact ties in the last significant digit round to even
    let mut buffer = ryu_js::Buffer::new();
    buffer.format_finite(value).to_string()
}
