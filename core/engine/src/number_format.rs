//! FILENAME: core/engine/src/number_format.rs
//! PURPOSE: Display formatting for calculator values.
//! CONTEXT: Converts Decimal results into the grouped strings shown in the
//! input display and on the tape. Grouping and decimal separators follow
//! the system locale; values are rounded at the tenth fractional digit.

use rust_decimal::{Decimal, RoundingStrategy};

/// Sentinel shown when a value cannot be rendered as a plain decimal.
pub const ERROR_DISPLAY: &str = "Error";

/// Maximum number of fractional digits shown; rounding happens here.
pub const MAX_FRACTION_DIGITS: u32 = 10;

/// Grouping and decimal separators for one locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Separators {
    pub group: char,
    pub decimal: char,
}

impl Separators {
    /// Separators for the current system locale.
    pub fn detect() -> Self {
        let locale = sys_locale::get_locale().unwrap_or_default();
        Self::for_locale(&locale)
    }

    /// Separators for a BCP 47 locale tag such as "de-DE" or "en_US".
    /// Only the language subtag is consulted; unknown languages get the
    /// comma-grouped, dot-decimal convention.
    pub fn for_locale(tag: &str) -> Self {
        let language: String = tag
            .split(['-', '_'])
            .next()
            .unwrap_or("")
            .to_ascii_lowercase();
        match language.as_str() {
            "de" | "es" | "it" | "nl" | "pt" | "da" | "id" | "tr" => Separators {
                group: '.',
                decimal: ',',
            },
            "fr" | "sv" | "fi" | "nb" | "no" | "cs" | "pl" | "ru" => Separators {
                group: ' ',
                decimal: ',',
            },
            _ => Separators {
                group: ',',
                decimal: '.',
            },
        }
    }
}

/// Format a value for display using the system locale.
pub fn format_decimal(value: Decimal) -> String {
    format_with_separators(value, Separators::detect())
}

/// Format a value for display with explicit separators.
/// Falls back to the `"Error"` sentinel instead of failing.
pub fn format_with_separators(value: Decimal, separators: Separators) -> String {
    try_format(value, separators).unwrap_or_else(|| ERROR_DISPLAY.to_string())
}

fn try_format(value: Decimal, separators: Separators) -> Option<String> {
    let rounded = value
        .round_dp_with_strategy(MAX_FRACTION_DIGITS, RoundingStrategy::MidpointAwayFromZero)
        .normalize();

    // Normalized zero can still carry a sign; the display never shows "-0".
    if rounded.is_zero() {
        return Some("0".to_string());
    }

    let plain = rounded.to_string();
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (integer_part, fraction_part) = match unsigned.split_once('.') {
        Some((integer, fraction)) => (integer, Some(fraction)),
        None => (unsigned, None),
    };

    // Anything that is not a plain digit run cannot be grouped.
    if integer_part.is_empty() || !integer_part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut result = String::with_capacity(plain.len() + integer_part.len() / 3);
    result.push_str(sign);

    let len = integer_part.len();
    for (i, c) in integer_part.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separators.group);
        }
        result.push(c);
    }

    if let Some(fraction) = fraction_part {
        result.push(separators.decimal);
        result.push_str(fraction);
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const EN: Separators = Separators {
        group: ',',
        decimal: '.',
    };

    fn fmt(s: &str, separators: Separators) -> String {
        format_with_separators(Decimal::from_str(s).unwrap(), separators)
    }

    #[test]
    fn test_grouping() {
        assert_eq!(fmt("0", EN), "0");
        assert_eq!(fmt("123", EN), "123");
        assert_eq!(fmt("1234", EN), "1,234");
        assert_eq!(fmt("1234567", EN), "1,234,567");
        assert_eq!(fmt("-1234.56", EN), "-1,234.56");
    }

    #[test]
    fn test_locale_separators() {
        let de = Separators::for_locale("de-DE");
        assert_eq!(fmt("1234567.89", de), "1.234.567,89");

        let fr = Separators::for_locale("fr_FR");
        assert_eq!(fmt("1234567.89", fr), "1 234 567,89");

        // Unknown language falls back to the en convention.
        assert_eq!(Separators::for_locale("tlh"), EN);
        assert_eq!(Separators::for_locale(""), EN);
    }

    #[test]
    fn test_rounds_at_tenth_fraction_digit() {
        assert_eq!(fmt("0.12345678904", EN), "0.123456789");
        assert_eq!(fmt("0.12345678905", EN), "0.1234567891");
        assert_eq!(fmt("0.99999999995", EN), "1");
    }

    #[test]
    fn test_trims_trailing_zeros() {
        assert_eq!(fmt("1.5000", EN), "1.5");
        assert_eq!(fmt("2.000", EN), "2");
    }

    #[test]
    fn test_negative_zero_displays_as_zero() {
        assert_eq!(fmt("-0.0", EN), "0");
    }
}
