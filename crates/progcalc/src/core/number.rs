//! Number <-> text conversions used by the display
//!
//! Results print the way a browser prints a `Number`: `10`, `2.5`,
//! `0.30000000000000004`, `1e+21`, `Infinity`. Reading goes the other way
//! and is lenient, taking the longest numeric prefix, so that a display of
//! `+` or `Error` simply reads as `NaN`.

/// Largest exponent (exclusive, base 10) printed without exponent notation
const MAX_PLAIN_EXPONENT: i32 = 21;
/// Smallest exponent (exclusive, base 10) printed without exponent notation
const MIN_PLAIN_EXPONENT: i32 = -6;

/// Formats a number for the display and the history.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let sign = if value < 0.0 { "-" } else { "" };
    // `{:e}` yields the shortest round-trip digits, e.g. "1.2345e3"
    let scientific = format!("{:e}", value.abs());
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);
    let digits: String = mantissa.chars().filter(char::is_ascii_digit).collect();

    let k = digits.len() as i32;
    let n = exponent + 1;

    let body = if k <= n && n <= MAX_PLAIN_EXPONENT {
        format!("{digits}{}", "0".repeat((n - k) as usize))
    } else if 0 < n && n <= MAX_PLAIN_EXPONENT {
        let (int_part, frac_part) = digits.split_at(n as usize);
        format!("{int_part}.{frac_part}")
    } else if MIN_PLAIN_EXPONENT < n && n <= 0 {
        format!("0.{}{digits}", "0".repeat((-n) as usize))
    } else {
        let exp_sign = if n - 1 >= 0 { '+' } else { '-' };
        let (lead, rest) = digits.split_at(1);
        if rest.is_empty() {
            format!("{lead}e{exp_sign}{}", (n - 1).abs())
        } else {
            format!("{lead}.{rest}e{exp_sign}{}", (n - 1).abs())
        }
    };

    format!("{sign}{body}")
}

/// Reads the longest numeric prefix of `text`, or `NaN` if there is none.
///
/// Accepts leading whitespace, an optional sign, then either `Infinity` or
/// a decimal literal with optional fraction and exponent.
#[must_use]
pub fn parse_lenient(text: &str) -> f64 {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }

    if text[end..].starts_with("Infinity") {
        return if bytes.first() == Some(&b'-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let count_digits = |from: usize| {
        bytes[from..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count()
    };

    let int_digits = count_digits(end);
    end += int_digits;
    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(end + 1);
        if int_digits > 0 || frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }
    if int_digits == 0 && frac_digits == 0 {
        return f64::NAN;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let sign_len = usize::from(matches!(bytes.get(end + 1), Some(b'+' | b'-')));
        let exp_digits = count_digits(end + 1 + sign_len);
        if exp_digits > 0 {
            end += 1 + sign_len + exp_digits;
        }
    }

    text[..end].parse().unwrap_or(f64::NAN)
}
