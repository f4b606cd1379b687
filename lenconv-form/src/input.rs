//! Input field validation and result display

use lenconv_core::InputError;

/// Unit both selectors fall back to
pub const DEFAULT_UNIT: &str = "m";

/// Text shown in both fields after a reset
pub const DEFAULT_TEXT: &str = "0.0";

/// Digits after the decimal point in the result field
pub const RESULT_DECIMALS: usize = 3;

/// Validate and parse the input field.
///
/// The negativity check looks at the first character of the raw text only,
/// before any trimming.
pub fn parse_input(text: &str) -> Result<f64, InputError> {
    match text.chars().next() {
        None => return Err(InputError::Empty),
        Some('-') => return Err(InputError::Negative),
        Some(_) => {}
    }

    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| InputError::Malformed(text.to_string()))?;

    if !value.is_finite() {
        return Err(InputError::NotFinite(text.to_string()));
    }
    Ok(value)
}

/// Format a converted value for the result field.
///
/// Rounds half-up on the shortest decimal form of the value, so `1.0005`
/// shows as `1.001` even though the nearest double is slightly below it.
pub fn format_result(value: f64) -> String {
    if !value.is_finite() {
        return format!("{}", value);
    }

    // Display for f64 never uses exponent notation
    let shortest = format!("{}", value.abs());
    let (int_part, frac_part) = shortest.split_once('.').unwrap_or((shortest.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let kept = frac_part.len().min(RESULT_DECIMALS);
    digits.extend(frac_part[..kept].bytes());
    digits.resize(int_part.len() + RESULT_DECIMALS, b'0');

    let round_up = frac_part
        .as_bytes()
        .get(RESULT_DECIMALS)
        .is_some_and(|d| *d >= b'5');
    if round_up && carry(&mut digits) {
        digits.insert(0, b'1');
    }

    let split = digits.len() - RESULT_DECIMALS;
    let sign = if value.is_sign_negative() { "-" } else { "" };
    format!(
        "{}{}.{}",
        sign,
        String::from_utf8_lossy(&digits[..split]),
        String::from_utf8_lossy(&digits[split..])
    )
}

/// Add one to the last digit. Returns true when the carry runs off the front.
fn carry(digits: &mut [u8]) -> bool {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_decimal() {
        assert_eq!(parse_input("12.5"), Ok(12.5));
        assert_eq!(parse_input("0.0"), Ok(0.0));
        assert_eq!(parse_input("1e3"), Ok(1000.0));
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(parse_input("  42 "), Ok(42.0));
    }

    #[test]
    fn test_leading_minus_rejected() {
        assert_eq!(parse_input("-5"), Err(InputError::Negative));
        assert_eq!(parse_input("-0"), Err(InputError::Negative));
        assert_eq!(parse_input("-abc"), Err(InputError::Negative));
    }

    #[test]
    fn test_trailing_minus_is_malformed_not_negative() {
        assert_eq!(parse_input("0-"), Err(InputError::Malformed("0-".to_string())));
    }

    #[test]
    fn test_only_first_character_is_checked() {
        // Whitespace in front hides the sign from the textual check
        assert_eq!(parse_input(" -5"), Ok(-5.0));
    }

    #[test]
    fn test_empty_rejected() {
        assert_eq!(parse_input(""), Err(InputError::Empty));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(parse_input("abc"), Err(InputError::Malformed(_))));
        assert!(matches!(parse_input("   "), Err(InputError::Malformed(_))));
        assert!(matches!(parse_input("1,5"), Err(InputError::Malformed(_))));
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(parse_input("inf"), Err(InputError::NotFinite(_))));
        assert!(matches!(parse_input("NaN"), Err(InputError::NotFinite(_))));
        assert!(matches!(parse_input("1e400"), Err(InputError::NotFinite(_))));
    }

    #[test]
    fn test_format_three_decimals() {
        assert_eq!(format_result(1.0), "1.000");
        assert_eq!(format_result(15840.0), "15840.000");
        assert_eq!(format_result(3.28084), "3.281");
        assert_eq!(format_result(1.0 / 3.28084), "0.305");
    }

    #[test]
    fn test_format_rounds_half_up_on_shortest_decimal() {
        assert_eq!(format_result(0.0625), "0.063");
        assert_eq!(format_result(1.0005), "1.001");
        assert_eq!(format_result(0.1235), "0.124");
        assert_eq!(format_result(15.0625), "15.063");
        assert_eq!(format_result(0.1234), "0.123");
    }

    #[test]
    fn test_format_carries_into_integer_part() {
        assert_eq!(format_result(0.9995), "1.000");
        assert_eq!(format_result(9.9996), "10.000");
        assert_eq!(format_result(999.9999), "1000.000");
    }

    #[test]
    fn test_format_small_and_negative() {
        assert_eq!(format_result(0.0), "0.000");
        assert_eq!(format_result(0.00001), "0.000");
        assert_eq!(format_result(-2.5), "-2.500");
    }
}
