//! Locale-aware number formatting.
//!
//! Grouping, separators and signs come from the `num-format` locale data, so
//! Hindi gets Indian grouping, French and Russian get space-like separators,
//! and so on.

use crate::i18n::Language;
use num_format::{CustomFormat, Grouping, ToFormattedString};

/// Maximum number of fraction digits kept when formatting.
const MAX_FRACTION_DIGITS: usize = 3;

/// Resolve the number format for a language name.
///
/// Unsupported languages use the default (English) grouping.
fn number_format_for_language(language: &str) -> &'static CustomFormat {
    Language::from_name(language)
        .unwrap_or_else(Language::canonical)
        .number_format()
}

/// Formats a number for display using the specified language.
///
/// For example, 652230 in "Russian" is `"652 230"` (with a no-break space),
/// and in "Hindi" it is `"6,52,230"`.
pub fn format_number_for_language(number: f64, language: &str) -> String {
    format_with(number, number_format_for_language(language))
}

/// Formats a whole number (a count, such as a population) without going
/// through floating point.
pub fn format_count_for_language(count: u64, language: &str) -> String {
    count.to_formatted_string(number_format_for_language(language))
}

fn format_with(number: f64, format: &CustomFormat) -> String {
    if number.is_nan() {
        return format.nan().to_string();
    }

    let sign = if number.is_sign_negative() {
        format.minus_sign()
    } else {
        ""
    };
    if number.is_infinite() {
        return format!("{}{}", sign, format.infinity());
    }

    let abs = number.abs();
    let mut integer = abs.trunc();
    let mut fraction = ((abs - integer) * 1000.0).round() as u32;
    if fraction == 1000 {
        integer += 1.0;
        fraction = 0;
    }

    let mut formatted = format!("{}{}", sign, format_integer(integer, format));
    if fraction != 0 {
        let digits = format!("{:0width$}", fraction, width = MAX_FRACTION_DIGITS);
        formatted.push_str(format.decimal());
        formatted.push_str(digits.trim_end_matches('0'));
    }
    formatted
}

/// Group the shortest decimal digits of a whole, non-negative float.
fn format_integer(integer: f64, format: &CustomFormat) -> String {
    let digits = format!("{}", integer);
    match digits.parse::<u128>() {
        Ok(value) => value.to_formatted_string(format),
        // Beyond u128: apply the same grouping to the digit string
        Err(_) => group_digits(&digits, format),
    }
}

fn group_digits(digits: &str, format: &CustomFormat) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len * 2);
    for (i, digit) in digits.chars().enumerate() {
        let remaining = len - i;
        let boundary = match format.grouping() {
            Grouping::Standard => remaining % 3 == 0,
            Grouping::Indian => remaining == 3 || (remaining > 3 && remaining % 2 == 1),
            Grouping::Posix => false,
        };
        if i > 0 && boundary {
            grouped.push_str(format.separator());
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    const LANGUAGES: [&str; 8] = [
        "English", "Arabic", "Chinese", "French", "Hindi", "Japanese", "Korean", "Russian",
    ];

    // ==================== Grouping Tests ====================

    #[test]
    fn test_english_groups_by_three() {
        assert_eq!(format_number_for_language(652230.0, "English"), "652,230");
        assert_eq!(format_number_for_language(35530081.0, "English"), "35,530,081");
    }

    #[test]
    fn test_korean_groups_by_three() {
        assert_eq!(format_number_for_language(652230.0, "Korean"), "652,230");
        assert_eq!(format_number_for_language(35530081.0, "Korean"), "35,530,081");
    }

    #[test]
    fn test_japanese_and_chinese_group_by_three() {
        assert_eq!(format_number_for_language(9984670.0, "Japanese"), "9,984,670");
        assert_eq!(format_number_for_language(9984670.0, "Chinese"), "9,984,670");
    }

    #[test]
    fn test_hindi_uses_indian_grouping() {
        assert_eq!(format_number_for_language(652230.0, "Hindi"), "6,52,230");
        assert_eq!(format_number_for_language(35530081.0, "Hindi"), "3,55,30,081");
    }

    #[test]
    fn test_russian_separator_is_no_break_space() {
        assert_eq!(format_number_for_language(652230.0, "Russian"), "652\u{a0}230");
    }

    #[test]
    fn test_french_separator_is_narrow_no_break_space() {
        assert_eq!(
            format_number_for_language(1234567.0, "French"),
            "1\u{202f}234\u{202f}567"
        );
        assert_eq!(format_number_for_language(0.44, "French"), "0,44");
    }

    #[test]
    fn test_arabic_uses_latin_separators() {
        assert_eq!(format_number_for_language(35530081.4456, "Arabic"), "35,530,081.446");
        assert_eq!(format_number_for_language(-1500.0, "Arabic"), "\u{200e}-1,500");
    }

    #[test]
    fn test_small_numbers_have_no_separator() {
        assert_eq!(format_number_for_language(0.0, "English"), "0");
        assert_eq!(format_number_for_language(999.0, "Hindi"), "999");
    }

    // ==================== Large Number Tests ====================

    #[test]
    fn test_large_numbers_keep_every_digit() {
        assert_eq!(
            format_number_for_language(1e20, "English"),
            "100,000,000,000,000,000,000"
        );
        assert_eq!(
            format_number_for_language(1e25, "English"),
            "10,000,000,000,000,000,000,000,000"
        );
        assert_eq!(
            format_number_for_language(1e20, "Hindi"),
            "10,00,00,00,00,00,00,00,00,000"
        );
    }

    #[test]
    fn test_numbers_beyond_u128_are_grouped() {
        let expected = format!("10{}", ",000".repeat(13));
        assert_eq!(format_number_for_language(1e40, "English"), expected);
    }

    #[test]
    fn test_group_digits_matches_num_format() {
        for language in ["English", "Hindi", "French"] {
            let format = number_format_for_language(language);
            for value in [7u128, 1234, 123456, 35530081, 1339180127, 98765432109876543210] {
                assert_eq!(
                    group_digits(&value.to_string(), format),
                    value.to_formatted_string(format),
                    "{language} {value}"
                );
            }
        }
    }

    #[test]
    fn test_format_count_is_exact() {
        assert_eq!(
            format_count_for_language(u64::MAX, "English"),
            "18,446,744,073,709,551,615"
        );
        assert_eq!(format_count_for_language(35530081, "Hindi"), "3,55,30,081");
    }

    // ==================== Fallback Tests ====================

    #[test]
    fn test_unsupported_language_uses_default_grouping() {
        assert_eq!(format_number_for_language(35530081.0, "Klingon"), "35,530,081");
        assert_eq!(format_number_for_language(35530081.0, ""), "35,530,081");
    }

    // ==================== Fraction and Sign Tests ====================

    #[test]
    fn test_fraction_rounded_to_three_digits() {
        assert_eq!(format_number_for_language(0.44, "English"), "0.44");
        assert_eq!(format_number_for_language(1234.5678, "English"), "1,234.568");
        assert_eq!(format_number_for_language(2.0004, "English"), "2");
        assert_eq!(format_number_for_language(1.9999, "English"), "2");
    }

    #[test]
    fn test_negative_numbers_use_minus_sign() {
        assert_eq!(format_number_for_language(-1500.0, "English"), "-1,500");
    }

    #[test]
    fn test_negative_values_rounding_to_zero_keep_sign() {
        assert_eq!(format_number_for_language(-0.0001, "English"), "-0");
        assert_eq!(format_number_for_language(-0.0, "English"), "-0");
    }

    #[test]
    fn test_non_finite_values() {
        assert_eq!(format_number_for_language(f64::NAN, "English"), "NaN");
        assert_eq!(format_number_for_language(f64::INFINITY, "English"), "∞");
        assert_eq!(format_number_for_language(f64::NEG_INFINITY, "English"), "-∞");
    }

    // ==================== Determinism Tests ====================

    #[test]
    fn test_formatting_is_deterministic() {
        for language in LANGUAGES {
            let first = format_number_for_language(35530081.0, language);
            let second = format_number_for_language(35530081.0, language);
            assert_eq!(first, second, "{language}");
        }
    }
}
