//! Canonical numeric formatting for feed measurement columns
//!
//! Measurement values render with up to four decimal places, trailing zeros
//! trimmed, and an invariant `.` separator. Negative, NaN, and infinite
//! values denote "unmeasured" and render as the empty string rather than `0`
//! or an error marker.

use crate::constants::MEASUREMENT_DECIMALS;

/// Format a measurement value for a `NET_*` feed column
///
/// Rounding is half-away-from-zero at the fourth decimal place, applied to
/// the value's shortest decimal representation. Rounding the decimal digits
/// rather than a scaled binary float keeps literal midpoints exact, so
/// `2.25065` formats as `"2.2507"` on every platform.
pub fn format_measurement(value: f64) -> String {
    if !value.is_finite() || value < 0.0 {
        return String::new();
    }

    // Covers negative zero, whose Display form is "-0"
    if value == 0.0 {
        return "0".to_string();
    }

    round_fraction_digits(&value.to_string(), MEASUREMENT_DECIMALS)
}

/// Round a non-negative decimal string to at most `places` fractional digits,
/// half-away-from-zero, trimming trailing zeros and a trailing point
fn round_fraction_digits(text: &str, places: usize) -> String {
    let Some((int_part, frac_part)) = text.split_once('.') else {
        return text.to_string();
    };

    if frac_part.len() <= places {
        return join_trimmed(int_part, frac_part);
    }

    let kept = &frac_part[..places];
    let round_up = frac_part.as_bytes()[places] >= b'5';

    let mut digits: Vec<u8> = int_part.bytes().chain(kept.bytes()).collect();
    if round_up {
        let mut index = digits.len();
        loop {
            if index == 0 {
                digits.insert(0, b'1');
                break;
            }
            index -= 1;
            if digits[index] == b'9' {
                digits[index] = b'0';
            } else {
                digits[index] += 1;
                break;
            }
        }
    }

    let (int_digits, frac_digits) = digits.split_at(digits.len() - places);
    let int_text: String = int_digits.iter().map(|&digit| digit as char).collect();
    let frac_text: String = frac_digits.iter().map(|&digit| digit as char).collect();
    join_trimmed(&int_text, &frac_text)
}

fn join_trimmed(int_part: &str, frac_part: &str) -> String {
    let trimmed = frac_part.trim_end_matches('0');
    if trimmed.is_empty() {
        int_part.to_string()
    } else {
        format!("{int_part}.{trimmed}")
    }
}
