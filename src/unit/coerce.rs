use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Signed decimal literal or `Infinity`
    /// Matches: "10", "-5", "+.5", "5.", "1e3", "2.5E-4", "-Infinity"
    static ref DECIMAL_LITERAL: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)$"
    ).unwrap();

    /// Unsigned prefixed integer literal: "0x1A", "0o17", "0b101"
    static ref PREFIXED_LITERAL: Regex = Regex::new(
        r"^0(?:[xX](?P<hex>[0-9a-fA-F]+)|[oO](?P<oct>[0-7]+)|[bB](?P<bin>[01]+))$"
    ).unwrap();
}

/// Whitespace and line terminators stripped around numeric text.
///
/// This is narrower than `char::is_whitespace` in one place (U+0085 is kept)
/// and wider in another (U+FEFF is stripped).
pub fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Coerce text to a number, treating the whole string as the literal.
///
/// Returns `None` where a dynamic "parse as number" would produce NaN.
/// Whitespace-only text coerces to zero.
pub fn to_number(text: &str) -> Option<f64> {
    let trimmed = text.trim_matches(is_js_whitespace);
    if trimmed.is_empty() {
        return Some(0.0);
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        return Some(parse_decimal(trimmed));
    }

    let caps = PREFIXED_LITERAL.captures(trimmed)?;
    let (digits, radix) = if let Some(m) = caps.name("hex") {
        (m.as_str(), 16)
    } else if let Some(m) = caps.name("oct") {
        (m.as_str(), 8)
    } else {
        (caps.name("bin")?.as_str(), 2)
    };
    Some(parse_radix(digits, radix))
}

/// Whether `text` coerces to a number (i.e. not NaN)
pub fn is_numeric(text: &str) -> bool {
    to_number(text).is_some()
}

fn parse_decimal(literal: &str) -> f64 {
    let (negative, unsigned) = match literal.as_bytes()[0] {
        b'-' => (true, &literal[1..]),
        b'+' => (false, &literal[1..]),
        _ => (false, literal),
    };

    let magnitude = if unsigned == "Infinity" {
        f64::INFINITY
    } else {
        // The regex already restricted the grammar to what `f64::from_str`
        // accepts, and out-of-range exponents saturate instead of failing.
        unsigned.parse::<f64>().unwrap_or(f64::NAN)
    };

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn parse_radix(digits: &str, radix: u32) -> f64 {
    if let Ok(v) = u64::from_str_radix(digits, radix) {
        return v as f64;
    }
    // Too wide for u64; accumulate in floating point
    digits
        .chars()
        .filter_map(|c| c.to_digit(radix))
        .fold(0.0, |acc, d| acc * f64::from(radix) + f64::from(d))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_decimals() {
        assert_eq!(to_number("10"), Some(10.0));
        assert_eq!(to_number("010"), Some(10.0));
        assert_eq!(to_number("-5"), Some(-5.0));
        assert_eq!(to_number("+5"), Some(5.0));
        assert_eq!(to_number("2.5"), Some(2.5));
        assert_eq!(to_number(".5"), Some(0.5));
        assert_eq!(to_number("5."), Some(5.0));
        assert_eq!(to_number("1e3"), Some(1000.0));
        assert_eq!(to_number("2.5E-1"), Some(0.25));
        assert_eq!(to_number("1e+2"), Some(100.0));
    }

    #[test]
    fn test_whitespace_is_tolerated() {
        assert_eq!(to_number("  42\t"), Some(42.0));
        assert_eq!(to_number("\u{00A0}7\u{FEFF}"), Some(7.0));
        assert_eq!(to_number("\n"), Some(0.0));
        assert_eq!(to_number("   "), Some(0.0));
        assert_eq!(to_number(""), Some(0.0));
        // NEL is not stripped
        assert_eq!(to_number("\u{0085}1"), None);
    }

    #[test]
    fn test_infinity_spellings() {
        assert_eq!(to_number("Infinity"), Some(f64::INFINITY));
        assert_eq!(to_number("-Infinity"), Some(f64::NEG_INFINITY));
        assert_eq!(to_number("+Infinity"), Some(f64::INFINITY));
        assert_eq!(to_number("inf"), None);
        assert_eq!(to_number("infinity"), None);
        assert_eq!(to_number("NaN"), None);
        assert_eq!(to_number("nan"), None);
    }

    #[test]
    fn test_prefixed_integers() {
        assert_eq!(to_number("0x1A"), Some(26.0));
        assert_eq!(to_number("0XfF"), Some(255.0));
        assert_eq!(to_number("0o17"), Some(15.0));
        assert_eq!(to_number("0b101"), Some(5.0));
        assert_eq!(to_number("-0x1A"), None);
        assert_eq!(to_number("+0b1"), None);
        assert_eq!(to_number("0x"), None);
        assert_eq!(to_number("0b2"), None);
        assert_eq!(to_number("0x10000000000000000"), Some(18446744073709551616.0));
    }

    #[test]
    fn test_rejects_partial_numbers() {
        assert_eq!(to_number("10px"), None);
        assert_eq!(to_number("auto"), None);
        assert_eq!(to_number("1_000"), None);
        assert_eq!(to_number("1 000"), None);
        assert_eq!(to_number("."), None);
        assert_eq!(to_number("e5"), None);
        assert_eq!(to_number("1e"), None);
        assert_eq!(to_number("--1"), None);
        assert_eq!(to_number("١٢"), None);
    }

    #[test]
    fn test_out_of_range_saturates() {
        assert_eq!(to_number("1e400"), Some(f64::INFINITY));
        assert_eq!(to_number("-1e400"), Some(f64::NEG_INFINITY));
        assert_eq!(to_number("1e-400"), Some(0.0));
    }

    #[test]
    fn test_is_numeric() {
        assert!(is_numeric("12.5"));
        assert!(is_numeric(" "));
        assert!(!is_numeric("50%"));
    }
}
