//! Human-readable magnitude formatting for parameter counts.
//!
//! Converts raw counts into short strings like `"124.44 M"`. Magnitudes
//! are bucketed by powers of 1000 and rounded to two decimal places.

use crate::error::{ParamCountError, Result};

/// Magnitude suffixes for successive powers of 1000
const SUFFIXES: [&str; 9] = ["", "K", "M", "B", "T", "P", "E", "Z", "Y"];

/// Format a non-negative parameter count.
///
/// Returns `"0"` for zero. Negative or non-finite input is a domain
/// error: the magnitude logarithm is undefined there, and propagating a
/// NaN into the output string would render garbage.
///
/// # Example
///
/// ```
/// use paramcount::format_params;
///
/// assert_eq!(format_params(124_438_272.0).unwrap(), "124.44 M");
/// assert_eq!(format_params(0.0).unwrap(), "0");
/// assert!(format_params(-1.0).is_err());
/// ```
pub fn format_params(params: f64) -> Result<String> {
    if !params.is_finite() || params < 0.0 {
        return Err(ParamCountError::FormatDomain { value: params });
    }
    Ok(format_magnitude(params))
}

/// Format an integer parameter count.
///
/// Infallible companion to [`format_params`]: `u64` counts are always
/// in the formatter's domain.
pub fn format_count(params: u64) -> String {
    format_magnitude(params as f64)
}

fn format_magnitude(params: f64) -> String {
    if params == 0.0 {
        return "0".to_string();
    }

    // Values below 1000 (index 0) and above the yotta range (index 8)
    // clamp to the nearest supported suffix.
    let magnitude = (params.log(1000.0).floor() as i64).clamp(0, SUFFIXES.len() as i64 - 1);
    let magnitude = magnitude as usize;

    let scaled = params / 1000f64.powi(magnitude as i32);
    let rounded = (scaled * 100.0).round() / 100.0;

    match SUFFIXES[magnitude] {
        "" => format!("{rounded}"),
        suffix => format!("{rounded} {suffix}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_params(0.0).unwrap(), "0");
        assert_eq!(format_count(0), "0");
    }

    #[test]
    fn test_sub_thousand_has_no_suffix() {
        assert_eq!(format_count(1), "1");
        assert_eq!(format_count(512), "512");
        assert_eq!(format_count(999), "999");
    }

    #[test]
    fn test_magnitude_buckets() {
        assert_eq!(format_count(1_500), "1.5 K");
        assert_eq!(format_count(1_234_000), "1.23 M");
        assert_eq!(format_count(6_900_000_000), "6.9 B");
        assert_eq!(format_count(1_750_000_000_000), "1.75 T");
    }

    #[test]
    fn test_gpt2_small_total() {
        assert_eq!(format_count(124_438_272), "124.44 M");
    }

    #[test]
    fn test_two_decimal_rounding() {
        assert_eq!(format_count(38_597_376), "38.6 M");
        assert_eq!(format_count(28_311_552), "28.31 M");
    }

    #[test]
    fn test_fractional_input_below_one() {
        // log_1000 is negative here; the index clamps to the bare bucket
        assert_eq!(format_params(0.5).unwrap(), "0.5");
    }

    #[test]
    fn test_suffix_clamps_at_yotta() {
        let formatted = format_params(1e30).unwrap();
        assert!(formatted.ends_with(" Y"), "got {formatted}");
    }

    #[test]
    fn test_rejects_negative_and_non_finite() {
        assert!(format_params(-1.0).is_err());
        assert!(format_params(f64::NAN).is_err());
        assert!(format_params(f64::INFINITY).is_err());
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        for &params in &[1_001u64, 43_210, 7_654_321, 124_438_272, 9_876_543_210] {
            let formatted = format_count(params);
            let (number, suffix) = match formatted.split_once(' ') {
                Some((n, s)) => (n, s),
                None => (formatted.as_str(), ""),
            };
            let value: f64 = number.parse().unwrap();
            let index = SUFFIXES.iter().position(|&s| s == suffix).unwrap();
            let reconstructed = value * 1000f64.powi(index as i32);

            // 0.01 at two decimals of the scaled value
            let tolerance = 0.005 * 1000f64.powi(index as i32) + 1e-9;
            assert!(
                (reconstructed - params as f64).abs() <= tolerance,
                "{params} formatted as {formatted}, reconstructed {reconstructed}"
            );
        }
    }
}
