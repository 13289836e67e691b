//! Logical keys accepted by the controller

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::core::Operation;

/// Memory register directives
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MemoryOp {
    /// `M+`: add the display value to memory
    Add,
    /// `M-`: subtract the display value from memory
    Subtract,
    /// `MR`: recall memory into display and expression
    Recall,
    /// `MC`: reset memory to zero
    Clear,
}

impl MemoryOp {
    /// Keypad label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Add => "M+",
            Self::Subtract => "M-",
            Self::Recall => "MR",
            Self::Clear => "MC",
        }
    }
}

/// One logical calculator key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// A decimal digit, always `0..=9`
    Digit(u8),
    /// Decimal point
    Decimal,
    /// Binary operator
    Operator(Operation),
    /// Evaluate
    Equals,
    /// Reset expression and display
    Clear,
    /// Memory register directive
    Memory(MemoryOp),
}

impl Key {
    /// Builds a digit key, rejecting anything above 9
    #[must_use]
    pub const fn digit(d: u8) -> Option<Self> {
        if d <= 9 {
            Some(Self::Digit(d))
        } else {
            None
        }
    }

    /// Maps a single character to a key (`*` and `/` alias `×` and `÷`)
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '0'..='9' => Self::digit(c as u8 - b'0'),
            '.' => Some(Self::Decimal),
            '=' => Some(Self::Equals),
            'C' => Some(Self::Clear),
            _ => Operation::from_char(c).map(Self::Operator),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Digit(d) => write!(f, "{d}"),
            Self::Decimal => f.write_str("."),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Equals => f.write_str("="),
            Self::Clear => f.write_str("C"),
            Self::Memory(m) => f.write_str(m.label()),
        }
    }
}

/// A label that names no calculator key
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown calculator key: {0:?}")]
pub struct KeyParseError(pub String);

impl FromStr for Key {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let memory = match s {
            "M+" => Some(MemoryOp::Add),
            "M-" => Some(MemoryOp::Subtract),
            "MR" => Some(MemoryOp::Recall),
            "MC" => Some(MemoryOp::Clear),
            _ => None,
        };
        if let Some(op) = memory {
            return Ok(Self::Memory(op));
        }

        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::from_char(c),
            _ => None,
        }
        .ok_or_else(|| KeyParseError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== Construction tests =====

    #[test]
    fn test_digit_bounds() {
        assert_eq!(Key::digit(0), Some(Key::Digit(0)));
        assert_eq!(Key::digit(9), Some(Key::Digit(9)));
        assert_eq!(Key::digit(10), None);
    }

    #[test]
    fn test_from_char() {
        assert_eq!(Key::from_char('7'), Some(Key::Digit(7)));
        assert_eq!(Key::from_char('.'), Some(Key::Decimal));
        assert_eq!(Key::from_char('='), Some(Key::Equals));
        assert_eq!(Key::from_char('C'), Some(Key::Clear));
        assert_eq!(Key::from_char('*'), Some(Key::Operator(Operation::Multiply)));
        assert_eq!(Key::from_char('÷'), Some(Key::Operator(Operation::Divide)));
        assert_eq!(Key::from_char('c'), None);
        assert_eq!(Key::from_char('%'), None);
    }

    // ===== Label round trip tests =====

    #[test]
    fn test_display_labels() {
        assert_eq!(Key::Digit(5).to_string(), "5");
        assert_eq!(Key::Operator(Operation::Multiply).to_string(), "×");
        assert_eq!(Key::Memory(MemoryOp::Recall).to_string(), "MR");
        assert_eq!(Key::Clear.to_string(), "C");
    }

    #[test]
    fn test_parse_all_labels() {
        let labels = [
            "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", ".", "+", "-", "×", "÷", "=", "C",
            "M+", "M-", "MR", "MC",
        ];
        for label in labels {
            let key: Key = label.parse().unwrap();
            assert_eq!(key.to_string(), label);
        }
    }

    #[test]
    fn test_parse_ascii_aliases() {
        assert_eq!("*".parse(), Ok(Key::Operator(Operation::Multiply)));
        assert_eq!("/".parse(), Ok(Key::Operator(Operation::Divide)));
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert_eq!("".parse::<Key>(), Err(KeyParseError(String::new())));
        assert_eq!("12".parse::<Key>(), Err(KeyParseError("12".into())));
        assert!("MX".parse::<Key>().is_err());
        assert!("Enter".parse::<Key>().is_err());
    }

    #[test]
    fn test_parse_error_message() {
        let err = "?".parse::<Key>().unwrap_err();
        assert_eq!(err.to_string(), "unknown calculator key: \"?\"");
    }
}
