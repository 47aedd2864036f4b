//! This file separates out the numeric side of reading and writing color declarations: scanning a
//! number off the front of a token, rounding components to their display precision, and printing
//! numbers in the shortest form that reads back to the same value.
//!
//! Scanning is deliberately lenient in the way browsers are when they read a number out of an
//! attribute: a token such as `"0.2abc"` yields `0.2`, and only a token with no numeric prefix at
//! all is rejected. Anything that is not finite is rejected as well, so `"1e999"` gives `None`
//! rather than infinity.

/// Number of decimal places kept for OKLCH lightness, given as a percentage.
pub(crate) const LIGHTNESS_DECIMALS: i32 = 1;
/// Number of decimal places kept for OKLCH chroma.
pub(crate) const CHROMA_DECIMALS: i32 = 3;
/// Number of decimal places kept for OKLCH hue, in degrees.
pub(crate) const HUE_DECIMALS: i32 = 0;

// Returns the byte length of the run of ASCII digits starting at `start`.
fn digit_run(bytes: &[u8], start: usize) -> usize {
    bytes[start..].iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Reads the longest prefix of `token` (after leading whitespace) that forms a decimal number, with
/// an optional sign, fractional part, and exponent. Returns `None` if there is no such prefix or if
/// the value is not finite.
pub(crate) fn parse_leading_number(token: &str) -> Option<f64> {
    let token = token.trim_start();
    let bytes = token.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let int_digits = digit_run(bytes, end);
    end += int_digits;
    let mut frac_digits = 0;
    if end < bytes.len() && bytes[end] == b'.' {
        frac_digits = digit_run(bytes, end + 1);
        // a lone '.' with no digits on either side is not a number
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return None;
    }
    // the exponent only counts if at least one digit follows it
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let exp_digits = digit_run(bytes, exp_end);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }
    let value: f64 = token[..end].parse().ok()?;
    if value.is_finite() {
        Some(value)
    } else {
        None
    }
}

/// Rounds to the given number of decimal places, with halves going towards positive infinity. A
/// value too large to scale is already coarser than the precision asked for, and comes back as is.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    let rounded = (scaled + 0.5).floor() / scale;
    // keep -0 out of the model so that it never prints as "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Rounds lightness, chroma, and hue to the precision the rest of the crate displays them with.
pub(crate) fn round_components(lightness: f64, chroma: f64, hue: f64) -> (f64, f64, f64) {
    (
        round_to(lightness, LIGHTNESS_DECIMALS),
        round_to(chroma, CHROMA_DECIMALS),
        round_to(hue, HUE_DECIMALS),
    )
}

/// Formats a number in its shortest round-trippable decimal form: `55.0` prints as `55` and `0.224`
/// as `0.224`. Negative zero prints as `0`.
pub(crate) fn format_number(value: f64) -> String {
    if value == 0.0 {
        "0".to_string()
    } else {
        format!("{}", value)
    }
}
