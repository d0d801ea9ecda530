//! Parsing and formatting of Rupiah amounts.
//!
//! Amounts are stored as whole Rupiah. There is no fractional unit anywhere
//! in the app, so parsing and formatting never deal with decimal places.

use std::sync::OnceLock;

use numfmt::{Formatter, Precision};

/// Parse free-form amount input into a whole Rupiah value.
///
/// Every non-digit character is stripped, so the function accepts raw digit
/// strings ("150000"), display-formatted values ("Rp 150.000") and anything
/// in between. An input with no digits at all parses as zero.
pub fn parse_amount_input(raw: &str) -> u64 {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();

    if digits.is_empty() {
        return 0;
    }

    // Digit strings too long for u64 saturate rather than wrap.
    digits.parse().unwrap_or(u64::MAX)
}

/// Format a whole Rupiah value for display, e.g. `Rp 1.500.000`.
///
/// Digits are grouped by thousands with `.` as the separator, following the
/// Indonesian locale convention. Negative values render the sign after the
/// currency prefix: `Rp -4.850.000`.
pub fn format_rupiah(value: i64) -> String {
    if value < 0 {
        format!("Rp -{}", grouped_formatter().fmt_string(value.unsigned_abs()))
    } else {
        format_rupiah_amount(value.unsigned_abs())
    }
}

/// Format an unsigned transaction amount for display.
///
/// Amounts are stored as [u64] and never carry a sign, so this avoids any
/// signed conversion that could flip values in the upper half of the range.
pub fn format_rupiah_amount(value: u64) -> String {
    format!("Rp {}", grouped_formatter().fmt_string(value))
}

fn grouped_formatter() -> &'static Formatter {
    static FORMATTER: OnceLock<Formatter> = OnceLock::new();

    FORMATTER.get_or_init(|| {
        Formatter::new()
            .separator('.')
            .unwrap()
            .precision(Precision::Decimals(0))
    })
}

#[cfg(test)]
mod currency_tests {
    use super::{format_rupiah, format_rupiah_amount, parse_amount_input};

    #[test]
    fn parses_plain_digit_strings() {
        assert_eq!(parse_amount_input("150000"), 150_000);
    }

    #[test]
    fn strips_non_digit_characters() {
        assert_eq!(parse_amount_input("Rp 1.500.000"), 1_500_000);
        assert_eq!(parse_amount_input("1,500,000 IDR"), 1_500_000);
        assert_eq!(parse_amount_input("12abc34"), 1_234);
    }

    #[test]
    fn input_without_digits_parses_as_zero() {
        assert_eq!(parse_amount_input(""), 0);
        assert_eq!(parse_amount_input("abc"), 0);
        assert_eq!(parse_amount_input("Rp "), 0);
    }

    #[test]
    fn formats_with_thousands_separators() {
        assert_eq!(format_rupiah(1_500_000), "Rp 1.500.000");
        assert_eq!(format_rupiah(150_000), "Rp 150.000");
        assert_eq!(format_rupiah(999), "Rp 999");
        assert_eq!(format_rupiah(0), "Rp 0");
    }

    #[test]
    fn formats_negative_values_with_sign_after_prefix() {
        assert_eq!(format_rupiah(-4_850_000), "Rp -4.850.000");
    }

    #[test]
    fn amounts_above_i64_max_keep_their_sign() {
        let formatted = format_rupiah_amount(u64::MAX);

        assert!(formatted.starts_with("Rp 1"));
        assert!(!formatted.contains('-'));
    }

    #[test]
    fn formatting_round_trips_through_parsing() {
        for value in [0u64, 1, 999, 1_000, 10_000, 150_000, 1_500_000, 987_654_321] {
            assert_eq!(
                parse_amount_input(&format_rupiah(value as i64)),
                value,
                "round trip failed for {value}"
            );
        }
    }
}
