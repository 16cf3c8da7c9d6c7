//! Numeric label formatting.
//!
//! Labels are built from an integer mantissa and a power of ten so that a
//! run of ticks at multiples of one interval prints consistently. Large and
//! small magnitudes use `\times10^{n}` markup, which the text layer renders
//! as a superscript.

use std::fmt;
use std::fmt::Write as _;

/// Integer digits allowed before switching to exponential form in
/// [`NumberFormat::Auto`], and digits allowed before a decimal point in any mode.
const AUTO_DIGITS: i32 = 4;

/// Integer digits allowed before switching to exponential form in [`NumberFormat::Decimal`].
const DECIMAL_DIGITS: i32 = 10;

/// How numeric labels are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "config", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "config", serde(rename_all = "lowercase"))]
pub enum NumberFormat {
    /// Decimal for moderate magnitudes, exponential otherwise.
    #[default]
    Auto,
    /// Prefer decimal notation.
    Decimal,
    /// Always exponential notation.
    Exponential,
}

impl fmt::Display for NumberFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Auto => "auto",
            Self::Decimal => "decimal",
            Self::Exponential => "exponential",
        };
        f.write_str(name)
    }
}

/// Format `mantissa × 10^power` as a label.
///
/// ```
/// use giza::format::{format_number, NumberFormat};
///
/// assert_eq!(format_number(0, 0, NumberFormat::Auto), "0");
/// assert_eq!(format_number(25, -1, NumberFormat::Auto), "2.5");
/// assert_eq!(format_number(-5, -2, NumberFormat::Auto), "-0.05");
/// assert_eq!(format_number(3, 6, NumberFormat::Auto), "3\\times10^{6}");
/// ```
#[must_use]
pub fn format_number(mantissa: i64, power: i32, format: NumberFormat) -> String {
    if mantissa == 0 {
        return "0".to_string();
    }

    let negative = mantissa < 0;
    let mut digits = mantissa.unsigned_abs().to_string();
    let mut power = power;

    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
        power = power.saturating_add(1);
    }

    let num_digits = digits.len() as i32;
    let exponential = format == NumberFormat::Exponential;
    let limit = if format == NumberFormat::Decimal {
        DECIMAL_DIGITS
    } else {
        AUTO_DIGITS
    };
    let before_point = num_digits.saturating_add(power.min(0));

    let mut label = if !exponential && power >= 0 && num_digits.saturating_add(power) <= limit {
        digits.extend(std::iter::repeat('0').take(power as usize));
        digits
    } else if !exponential && (1..=AUTO_DIGITS).contains(&before_point) && before_point < num_digits {
        digits.insert(before_point as usize, '.');
        digits
    } else {
        let exponent = power.saturating_add(num_digits - 1);
        match exponent {
            -1 if !exponential => format!("0.{digits}"),
            -2 if !exponential => format!("0.0{digits}"),
            _ => {
                if num_digits > 1 {
                    digits.insert(1, '.');
                }
                if exponent != 0 {
                    let _ = write!(digits, "\\times10^{{{exponent}}}");
                }
                digits
            }
        }
    };

    if negative {
        label.insert(0, '-');
    }
    label
}

/// Format a label that must fit in `capacity` bytes.
///
/// Labels that do not fit are replaced by `"*"`.
#[must_use]
pub fn format_number_bounded(
    mantissa: i64,
    power: i32,
    format: NumberFormat,
    capacity: usize,
) -> String {
    let label = format_number(mantissa, power, format);
    if label.len() > capacity {
        tracing::warn!(
            label = %label,
            capacity,
            "formatted number does not fit; truncated to '*'"
        );
        return "*".to_string();
    }
    label
}

/// Label for the decade `10^exponent` on a logarithmic axis.
#[must_use]
pub fn decade_label(exponent: i64) -> String {
    match exponent {
        0 => "1".to_string(),
        1 => "10".to_string(),
        n => format!("10^{{{n}}}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_number(0, 0, NumberFormat::Auto), "0");
        assert_eq!(format_number(0, 7, NumberFormat::Exponential), "0");
    }

    #[test]
    fn test_small_integers() {
        assert_eq!(format_number(5, 0, NumberFormat::Auto), "5");
        assert_eq!(format_number(123, 0, NumberFormat::Auto), "123");
        assert_eq!(format_number(120, 0, NumberFormat::Auto), "120");
        assert_eq!(format_number(12, 2, NumberFormat::Auto), "1200");
        assert_eq!(format_number(9999, 0, NumberFormat::Auto), "9999");
    }

    #[test]
    fn test_auto_four_digit_threshold() {
        // Five total digits leaves the integer form in auto mode.
        assert_eq!(format_number(12, 3, NumberFormat::Auto), "1.2\\times10^{4}");
        assert_eq!(format_number(10000, 0, NumberFormat::Auto), "1\\times10^{4}");
        assert_eq!(format_number(12345, 0, NumberFormat::Auto), "1.2345\\times10^{4}");
    }

    #[test]
    fn test_decimal_ten_digit_threshold() {
        assert_eq!(format_number(12, 3, NumberFormat::Decimal), "12000");
        assert_eq!(format_number(1, 9, NumberFormat::Decimal), "1000000000");
        assert_eq!(format_number(1, 10, NumberFormat::Decimal), "1\\times10^{10}");
    }

    #[test]
    fn test_decimal_point_limit_is_mode_independent() {
        assert_eq!(format_number(123456, -1, NumberFormat::Decimal), "1.23456\\times10^{4}");
        assert_eq!(format_number(123456, -1, NumberFormat::Auto), "1.23456\\times10^{4}");
        assert_eq!(format_number(123456, -2, NumberFormat::Decimal), "1234.56");
    }

    #[test]
    fn test_extreme_power_saturates() {
        assert_eq!(format_number(10, i32::MAX, NumberFormat::Auto), format!("1\\times10^{{{}}}", i32::MAX));
        assert!(format_number(12, i32::MAX, NumberFormat::Decimal).ends_with(&format!("{}}}", i32::MAX)));
        assert_eq!(format_number(-3, i32::MIN, NumberFormat::Auto), format!("-3\\times10^{{{}}}", i32::MIN));
        assert!(format_number(123, i32::MIN, NumberFormat::Exponential).starts_with("1.23\\times10^{"));
    }

    #[test]
    fn test_decimal_point_inside_digits() {
        assert_eq!(format_number(25, -1, NumberFormat::Auto), "2.5");
        assert_eq!(format_number(1234, -2, NumberFormat::Auto), "12.34");
        assert_eq!(format_number(-15, -1, NumberFormat::Auto), "-1.5");
    }

    #[test]
    fn test_leading_zero_cases() {
        assert_eq!(format_number(5, -1, NumberFormat::Auto), "0.5");
        assert_eq!(format_number(5, -2, NumberFormat::Auto), "0.05");
        assert_eq!(format_number(25, -3, NumberFormat::Auto), "0.025");
        assert_eq!(format_number(-5, -2, NumberFormat::Auto), "-0.05");
    }

    #[test]
    fn test_small_magnitudes_use_exponent() {
        assert_eq!(format_number(5, -3, NumberFormat::Auto), "5\\times10^{-3}");
        assert_eq!(format_number(125, -5, NumberFormat::Auto), "1.25\\times10^{-3}");
    }

    #[test]
    fn test_forced_exponential() {
        let label = format_number(5, 10, NumberFormat::Exponential);
        assert!(label.contains("\\times10^{"));
        assert_eq!(label, "5\\times10^{10}");
        assert_eq!(format_number(5, -1, NumberFormat::Exponential), "5\\times10^{-1}");
        assert_eq!(format_number(25, 0, NumberFormat::Exponential), "2.5\\times10^{1}");
        assert_eq!(format_number(5, 0, NumberFormat::Exponential), "5");
    }

    #[test]
    fn test_trailing_zeros_normalised() {
        assert_eq!(format_number(500, -2, NumberFormat::Auto), "5");
        assert_eq!(format_number(-2000, -3, NumberFormat::Auto), "-2");
    }

    #[test]
    fn test_extreme_mantissa() {
        let label = format_number(i64::MIN, 0, NumberFormat::Auto);
        assert!(label.starts_with("-9.223372036854775808"));
        assert!(label.ends_with("\\times10^{18}"));
    }

    #[test]
    fn test_bounded() {
        assert_eq!(format_number_bounded(123, 0, NumberFormat::Auto, 8), "123");
        assert_eq!(format_number_bounded(125, -5, NumberFormat::Auto, 8), "*");
        assert_eq!(format_number_bounded(123, 0, NumberFormat::Auto, 3), "123");
    }

    #[test]
    fn test_decade_labels() {
        assert_eq!(decade_label(0), "1");
        assert_eq!(decade_label(1), "10");
        assert_eq!(decade_label(2), "10^{2}");
        assert_eq!(decade_label(-3), "10^{-3}");
    }

    #[test]
    fn test_display() {
        assert_eq!(NumberFormat::Exponential.to_string(), "exponential");
        assert_eq!(NumberFormat::default(), NumberFormat::Auto);
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// Parse a label back into a float (test helper).
    fn parse_label(label: &str) -> f64 {
        match label.split_once("\\times10^{") {
            Some((mantissa, rest)) => {
                let exponent: i32 = rest.trim_end_matches('}').parse().unwrap();
                mantissa.parse::<f64>().unwrap() * 10f64.powi(exponent)
            }
            None => label.parse().unwrap(),
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        /// Labels at consecutive tick indices preserve ordering.
        #[test]
        fn prop_labels_monotonic(
            nv in prop::sample::select(vec![1i64, 2, 5]),
            np in -6i32..7,
            start in -200i64..200,
            mode in prop::sample::select(vec![
                NumberFormat::Auto,
                NumberFormat::Decimal,
                NumberFormat::Exponential,
            ]),
        ) {
            let mut previous = f64::NEG_INFINITY;
            for i in start..start + 20 {
                let label = format_number(i * nv, np, mode);
                let value = parse_label(&label);
                prop_assert!(value >= previous, "{} after {}", label, previous);
                previous = value;
            }
        }

        /// The label always denotes the value it was built from.
        #[test]
        fn prop_label_value_round_trips(mantissa in -100_000i64..100_000, power in -8i32..8) {
            let label = format_number(mantissa, power, NumberFormat::Auto);
            let expected = mantissa as f64 * 10f64.powi(power);
            let value = parse_label(&label);
            prop_assert!((value - expected).abs() <= expected.abs() * 1e-12 + 1e-300,
                "{} parsed as {} expected {}", label, value, expected);
        }

        /// Negative labels are the positive label with a leading minus.
        #[test]
        fn prop_sign_prefix(mantissa in 1i64..1_000_000, power in -8i32..8) {
            let pos = format_number(mantissa, power, NumberFormat::Auto);
            let neg = format_number(-mantissa, power, NumberFormat::Auto);
            prop_assert_eq!(neg, format!("-{pos}"));
        }
    }
}
