//! Float formatting for rendered estimates.
//!
//! Estimates are printed in the `%g` style: rounded to a fixed number of
//! significant digits with trailing zeros dropped, switching to exponent form
//! for very large or very small magnitudes. The output is compared
//! byte-for-byte by plan tests, so it must not depend on anything but the
//! value and the digit count.

use std::fmt::Write;

/// Formats `value` like `%.<significant_digits>g`.
///
/// Exponent form is used when the decimal exponent is below -4 or at least
/// `significant_digits`; the exponent always carries a sign and two digits
/// (`1e+09`). A digit count of zero is treated as one.
#[must_use]
pub fn format_general(value: f64, significant_digits: usize) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "+Inf" } else { "-Inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = significant_digits.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, mantissa),
    };

    let mut digits: String = mantissa.chars().filter(|c| *c != '.').collect();
    while digits.len() > 1 && digits.ends_with('0') {
        digits.pop();
    }

    let mut out = String::with_capacity(digits.len() + 8);
    if negative {
        out.push('-');
    }

    if exponent < -4 || exponent >= precision as i32 {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        let sign = if exponent < 0 { '-' } else { '+' };
        let _ = write!(out, "e{}{:02}", sign, exponent.unsigned_abs());
    } else if exponent < 0 {
        out.push_str("0.");
        for _ in 0..(-exponent - 1) {
            out.push('0');
        }
        out.push_str(&digits);
    } else {
        let int_len = exponent as usize + 1;
        if digits.len() <= int_len {
            out.push_str(&digits);
            for _ in digits.len()..int_len {
                out.push('0');
            }
        } else {
            out.push_str(&digits[..int_len]);
            out.push('.');
            out.push_str(&digits[int_len..]);
        }
    }
    out
}
