//! Number formatting for recommendation text.
//!
//! Amounts are shown with exactly two decimals, rounded from the exact decimal
//! value of the `f64`, with halves going away from zero:
//!
//! - `0.125 -> "0.13"` (an exact binary half)
//! - `0.15 * 0.1` is stored as `0.01499999…`, so it shows `0.01`
//! - `(10 - 7) * 0.05` is stored as `0.15000000000000002`, so it shows `0.15`
//!
//! Non-tie values go through `{:.2}`, which rounds the exact binary value.
//! A two-decimal tie is only representable when `x` is an odd multiple of
//! `1/8`, and those are rounded in integer cents.
//!
//! Magnitudes at or above `1e21` switch to exponent form (`6e+306`), the same
//! threshold the value echo uses.

/// Exponent form starts at this magnitude.
const EXPONENT_FROM: f64 = 1e21;
/// Exponent form is also used below this magnitude (non-zero only).
const EXPONENT_BELOW: f64 = 1e-6;
/// Odd integers above this cannot be represented, so `x * 8` is never a tie.
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// Format a computed amount with two decimals.
pub fn fmt_amount(x: f64) -> String {
    if !x.is_finite() || x.abs() >= EXPONENT_FROM {
        return fmt_exponent(x);
    }

    let eighths = x * 8.0;
    let formatted = if eighths.fract() == 0.0
        && eighths.abs() < MAX_EXACT_INT
        && (eighths as i64) % 2 != 0
    {
        fmt_cents_tie(eighths as i64)
    } else {
        format!("{x:.2}")
    };
    strip_negative_zero(formatted)
}

/// Format the user's measurement back into the sentence.
///
/// Uses the shortest decimal that round-trips (`10`, `7.5`, `0.1`), and
/// exponent form for very large or very small magnitudes (`1e+307`, `1e-7`).
pub fn fmt_value(v: f64) -> String {
    let v = if v == 0.0 { 0.0 } else { v };
    let magnitude = v.abs();
    if magnitude >= EXPONENT_FROM || (magnitude != 0.0 && magnitude < EXPONENT_BELOW) {
        return fmt_exponent(v);
    }
    format!("{v}")
}

// `x = eighths / 8` sits exactly on a half cent: cents = eighths * 12.5.
fn fmt_cents_tie(eighths: i64) -> String {
    let doubled = i128::from(eighths) * 25;
    let cents = (doubled + doubled.signum()) / 2;
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    format!("{sign}{}.{:02}", abs / 100, abs % 100)
}

// Shortest round-trip mantissa with an explicit exponent sign.
fn fmt_exponent(x: f64) -> String {
    let s = format!("{x:e}");
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
        _ => s,
    }
}

// `-0.004` formats as `-0.00`.
fn strip_negative_zero(s: String) -> String {
    match s.strip_prefix('-') {
        Some(rest) if rest.chars().all(|c| c == '0' || c == '.') => rest.to_string(),
        _ => s,
    }
}
