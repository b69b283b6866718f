//! Utility functions for the wallet core
//!
//! Address validation and balance display helpers shared by the token
//! registry and its callers.

use lazy_static::lazy_static;
use regex::Regex;

use crate::shared::constants::{
    CONTRACT_ADDRESS_LENGTH, CONTRACT_ADDRESS_PREFIX, DEFAULT_BALANCE_DECIMALS,
    DUST_EXPONENT_DIGITS, DUST_THRESHOLD, EXACT_FRACTION_DIGITS, MAX_DISPLAY_DECIMALS,
    NATIVE_TOKEN_ADDRESS,
};
use crate::shared::error::WalletError;
use crate::shared::types::BalanceValue;

lazy_static! {
    static ref CONTRACT_ADDRESS_PATTERN: Regex =
        Regex::new(r"^C[A-Z2-7]{55}$").expect("contract address pattern is valid");
    static ref BASE32_PATTERN: Regex =
        Regex::new(r"^[A-Z2-7]*$").expect("base32 pattern is valid");
}

/// Syntactic check for a token address. No checksum is verified.
pub fn is_valid_address(address: &str) -> bool {
    if address == NATIVE_TOKEN_ADDRESS {
        return true;
    }
    CONTRACT_ADDRESS_PATTERN.is_match(address)
}

/// Validate a token address, reporting which rule it breaks
pub fn validate_contract_address(address: &str) -> Result<(), WalletError> {
    if address == NATIVE_TOKEN_ADDRESS {
        return Ok(());
    }

    if address.chars().count() != CONTRACT_ADDRESS_LENGTH {
        return Err(WalletError::validation(format!(
            "Address must be {} characters long",
            CONTRACT_ADDRESS_LENGTH
        )));
    }

    if !address.starts_with(CONTRACT_ADDRESS_PREFIX) {
        return Err(WalletError::validation(format!(
            "Address must start with {}",
            CONTRACT_ADDRESS_PREFIX
        )));
    }

    if !BASE32_PATTERN.is_match(address) {
        return Err(WalletError::validation(
            "Address contains characters outside the base32 alphabet",
        ));
    }

    Ok(())
}

/// Format a balance for display.
///
/// Non-numeric input renders as `"0"`. Positive values below the dust
/// threshold use exponential notation so they never collapse to zero; all
/// other values are comma-grouped with at most `min(decimals, 6)` fractional
/// digits and trailing zeros dropped. `decimals` defaults to 7.
pub fn format_balance(value: impl Into<BalanceValue>, decimals: Option<u32>) -> String {
    let num = match value.into() {
        BalanceValue::Number(n) => n,
        BalanceValue::Text(text) => match parse_float_prefix(&text) {
            Some(n) => n,
            None => return "0".to_string(),
        },
    };

    if num.is_nan() {
        return "0".to_string();
    }
    if num.is_infinite() {
        return if num > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    if num > 0.0 && num < DUST_THRESHOLD {
        return format!("{:.*e}", DUST_EXPONENT_DIGITS, num);
    }

    let max_fraction = decimals
        .unwrap_or(DEFAULT_BALANCE_DECIMALS)
        .min(MAX_DISPLAY_DECIMALS) as usize;
    let (whole, fraction) = round_half_away_from_zero(num, max_fraction);
    let fraction = fraction.trim_end_matches('0');

    let mut formatted = String::with_capacity(whole.len() + whole.len() / 3 + fraction.len() + 2);
    if num.is_sign_negative() {
        formatted.push('-');
    }
    formatted.push_str(&group_thousands(&whole));
    if !fraction.is_empty() {
        formatted.push('.');
        formatted.push_str(fraction);
    }
    formatted
}

/// Round `|value|` to `places` fractional digits, ties away from zero.
///
/// Works on the exact decimal expansion of the float, so a value like
/// 0.0078125 is a true tie while 12.3456 (stored just below) is not.
/// Returns the whole and fractional digit strings without sign.
fn round_half_away_from_zero(value: f64, places: usize) -> (String, String) {
    let exact = format!("{:.*}", EXACT_FRACTION_DIGITS, value.abs());
    let (whole, fraction) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut digits: Vec<u8> = whole
        .bytes()
        .chain(fraction.bytes().chain(std::iter::repeat(b'0')).take(places))
        .collect();

    if fraction.as_bytes().get(places).map_or(false, |d| *d >= b'5') {
        let mut i = digits.len();
        loop {
            if i == 0 {
                digits.insert(0, b'1');
                break;
            }
            i -= 1;
            if digits[i] == b'9' {
                digits[i] = b'0';
            } else {
                digits[i] += 1;
                break;
            }
        }
    }

    let whole_len = digits.len() - places;
    let whole: String = digits[..whole_len].iter().map(|&d| d as char).collect();
    let fraction: String = digits[whole_len..].iter().map(|&d| d as char).collect();
    (whole, fraction)
}

/// Insert `,` separators every three digits from the right
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Parse the longest numeric prefix of `input`, the way browsers' `parseFloat` does.
///
/// Leading whitespace is skipped, trailing garbage is ignored and `Infinity`
/// is accepted. Returns `None` when no digits can be read.
pub fn parse_float_prefix(input: &str) -> Option<f64> {
    let s = input.trim_start();
    let bytes = s.as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    if s[pos..].starts_with("Infinity") {
        return Some(if negative { f64::NEG_INFINITY } else { f64::INFINITY });
    }

    let int_start = pos;
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    let whole = &s[int_start..pos];

    let mut fraction = "";
    if pos < bytes.len() && bytes[pos] == b'.' {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        fraction = &s[frac_start..end];
        pos = end;
    }

    if whole.is_empty() && fraction.is_empty() {
        return None;
    }

    let mut exponent = "";
    if pos < bytes.len() && (bytes[pos] == b'e' || bytes[pos] == b'E') {
        let mut end = pos + 1;
        if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
            end += 1;
        }
        let digits_start = end;
        while end < bytes.len() && bytes[end].is_ascii_digit() {
            end += 1;
        }
        if end > digits_start {
            exponent = &s[pos..end];
        }
    }

    let normalized = format!(
        "{}{}.{}{}",
        if negative { "-" } else { "" },
        if whole.is_empty() { "0" } else { whole },
        if fraction.is_empty() { "0" } else { fraction },
        exponent
    );
    normalized.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn contract_address(fill: char) -> String {
        format!("C{}", fill.to_string().repeat(55))
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("NATIVE"));
        assert!(is_valid_address(&contract_address('A')));
        assert!(is_valid_address("CBIELTK6YBZJU5UP2WWQEUCYKLPU6AUNZ2BQ4WWFEIE3USCIHMXQDAMA"));

        assert!(!is_valid_address(&format!("c{}", "A".repeat(55)))); // Lowercase prefix
        assert!(!is_valid_address(&format!("C{}", "A".repeat(54)))); // 55 chars
        assert!(!is_valid_address(&format!("C{}", "A".repeat(56)))); // 57 chars
        assert!(!is_valid_address(&format!("G{}", "A".repeat(55)))); // Account, not contract
        assert!(!is_valid_address(&contract_address('1'))); // Outside base32
        assert!(!is_valid_address(&contract_address('a')));
        assert!(!is_valid_address("native"));
        assert!(!is_valid_address(""));
    }

    #[test]
    fn test_validate_contract_address() {
        assert!(validate_contract_address("NATIVE").is_ok());
        assert!(validate_contract_address(&contract_address('Z')).is_ok());

        let too_short = validate_contract_address("CABC").unwrap_err();
        assert!(too_short.to_string().contains("56 characters"));

        let bad_prefix = validate_contract_address(&format!("G{}", "A".repeat(55))).unwrap_err();
        assert!(bad_prefix.to_string().contains("start with C"));

        let bad_alphabet = validate_contract_address(&contract_address('8')).unwrap_err();
        assert!(matches!(bad_alphabet, WalletError::Validation(_)));
    }

    #[test]
    fn test_format_balance_non_numeric() {
        assert_eq!(format_balance("abc", None), "0");
        assert_eq!(format_balance("", None), "0");
        assert_eq!(format_balance(".", None), "0");
        assert_eq!(format_balance(f64::NAN, None), "0");
    }

    #[test]
    fn test_format_balance_dust() {
        assert_eq!(format_balance(0.00005, None), "5.00e-5");
        assert_eq!(format_balance("0.0000123", None), "1.23e-5");
        assert_eq!(format_balance(0.0000001, Some(7)), "1.00e-7");
    }

    #[test]
    fn test_format_balance_grouping() {
        assert_eq!(format_balance(1234.56789, Some(7)), "1,234.56789");
        assert_eq!(format_balance(1234567.1234567, Some(7)), "1,234,567.123457");
        assert_eq!(format_balance(1000, None), "1,000");
        assert_eq!(format_balance(999, None), "999");
        assert_eq!(format_balance(0, None), "0");
        assert_eq!(format_balance(0.0001, None), "0.0001");
        assert_eq!(format_balance(-1234.5, None), "-1,234.5");
    }

    #[test]
    fn test_format_balance_respects_decimals() {
        assert_eq!(format_balance(12.3456, Some(2)), "12.35");
        assert_eq!(format_balance(12.3456, Some(0)), "12");
        assert_eq!(format_balance("10.50", Some(7)), "10.5");
    }

    #[test]
    fn test_format_balance_rounds_ties_away_from_zero() {
        assert_eq!(format_balance(2.5, Some(0)), "3");
        assert_eq!(format_balance(0.5, Some(0)), "1");
        assert_eq!(format_balance(-2.5, Some(0)), "-3");
        assert_eq!(format_balance(0.125, Some(2)), "0.13");
        assert_eq!(format_balance(0.0078125, None), "0.007813");
        assert_eq!(format_balance(999.5, Some(0)), "1,000");
    }

    #[test]
    fn test_format_balance_edge_values() {
        assert_eq!(format_balance(-0.0, None), "-0");
        assert_eq!(format_balance(1e21, None), "1,000,000,000,000,000,000,000");
        assert_eq!(format_balance(0.0000625, None), "6.25e-5");
        assert_eq!(format_balance(0.0004999999, Some(3)), "0");
    }

    #[test]
    fn test_format_balance_infinity() {
        assert_eq!(format_balance("Infinity", None), "∞");
        assert_eq!(format_balance(f64::NEG_INFINITY, None), "-∞");
    }

    #[test]
    fn test_parse_float_prefix() {
        assert_eq!(parse_float_prefix("  42.5"), Some(42.5));
        assert_eq!(parse_float_prefix("12abc"), Some(12.0));
        assert_eq!(parse_float_prefix(".5"), Some(0.5));
        assert_eq!(parse_float_prefix("-3."), Some(-3.0));
        assert_eq!(parse_float_prefix("1e3"), Some(1000.0));
        assert_eq!(parse_float_prefix("2e"), Some(2.0));
        assert_eq!(parse_float_prefix("1,000"), Some(1.0));
        assert_eq!(parse_float_prefix("abc"), None);
        assert_eq!(parse_float_prefix("-"), None);
    }

    proptest! {
        #[test]
        fn prop_wrong_length_is_invalid(body in "[A-Z2-7]{0,80}") {
            let address = format!("C{}", body);
            prop_assert_eq!(is_valid_address(&address), body.len() == 55);
        }

        #[test]
        fn prop_grouped_output_has_at_most_six_fraction_digits(value in 0.0001f64..1.0e12) {
            let formatted = format_balance(value, Some(18));
            let fraction_len = formatted.split_once('.').map(|(_, f)| f.len()).unwrap_or(0);
            prop_assert!(fraction_len <= 6);
            prop_assert!(!formatted.ends_with('0') || !formatted.contains('.'));
        }
    }
}
