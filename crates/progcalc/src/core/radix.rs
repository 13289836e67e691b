//! Programmer-mode readout: binary and hexadecimal views of the display
//!
//! The view is a pure function of the display string. The fractional part
//! is dropped (truncation toward zero) and the sign is kept as a leading
//! `-`. Conversion is exact for every finite double, however large.

use crate::core::number::parse_lenient;

/// Mantissa bits of an IEEE-754 double, excluding the hidden bit
const MANTISSA_BITS: u32 = 52;
const MANTISSA_MASK: u64 = (1 << MANTISSA_BITS) - 1;
const EXPONENT_BIAS: i32 = 1075;

/// Binary and hexadecimal renderings of the integer part of the display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadixView {
    /// Base-2 digits with optional leading `-`
    pub binary: String,
    /// Base-16 digits (uppercase) with optional leading `-`
    pub hex: String,
    /// True when the display shows a fractional number
    pub fraction_truncated: bool,
}

impl Default for RadixView {
    fn default() -> Self {
        Self {
            binary: "0".to_string(),
            hex: "0".to_string(),
            fraction_truncated: false,
        }
    }
}

impl RadixView {
    /// Derives the view from the display text
    #[must_use]
    pub fn from_display(display: &str) -> Self {
        let fraction_truncated = display.contains('.');
        let value = parse_lenient(display);
        if !value.is_finite() {
            return Self {
                fraction_truncated,
                ..Self::default()
            };
        }

        let int_part = value.trunc();
        let sign = if int_part < 0.0 { "-" } else { "" };
        let (binary, hex) = integer_digits(int_part.abs());

        Self {
            binary: format!("{sign}{binary}"),
            hex: format!("{sign}{hex}"),
            fraction_truncated,
        }
    }
}

/// Renders a non-negative, integral, finite double in base 2 and base 16.
///
/// The value is split into `m * 2^e` with `m` the 53-bit significand, so
/// the digits are exact even far beyond `u128` range.
fn integer_digits(value: f64) -> (String, String) {
    if value == 0.0 {
        return ("0".to_string(), "0".to_string());
    }

    let bits = value.to_bits();
    let biased = ((bits >> MANTISSA_BITS) & 0x7ff) as i32;
    let fraction = bits & MANTISSA_MASK;
    let (mut mantissa, mut exponent) = if biased == 0 {
        (fraction << 1, 1 - EXPONENT_BIAS)
    } else {
        (fraction | (1 << MANTISSA_BITS), biased - EXPONENT_BIAS)
    };

    // Integral values with a negative exponent only carry zero bits below 2^0
    if exponent < 0 {
        mantissa >>= exponent.unsigned_abs();
        exponent = 0;
    }
    let exponent = exponent as usize;

    let binary = format!("{mantissa:b}{}", "0".repeat(exponent));
    let hex = format!(
        "{:X}{}",
        mantissa << (exponent % 4),
        "0".repeat(exponent / 4)
    );
    (binary, hex)
}
