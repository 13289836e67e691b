//! The four binary operators
//!
//! Expressions store the keypad glyphs (`×`, `÷`); the evaluator works on
//! the ASCII forms (`*`, `/`). Both spellings map to the same variant.

use std::fmt;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (×)
    Multiply,
    /// Division (÷)
    Divide,
}

impl Operation {
    /// All operators in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// The character shown on the keypad and stored in expressions
    #[must_use]
    pub const fn glyph(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '×',
            Self::Divide => '÷',
        }
    }

    /// The ASCII spelling used by the evaluator
    #[must_use]
    pub const fn ascii(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Accepts either the glyph or the ASCII spelling
    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '×' | '*' => Some(Self::Multiply),
            '÷' | '/' => Some(Self::Divide),
            _ => None,
        }
    }

    /// True for the glyphs an expression may contain as operators
    #[must_use]
    pub const fn is_glyph(c: char) -> bool {
        matches!(c, '+' | '-' | '×' | '÷')
    }

    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero yields an infinity or NaN rather than an error.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}
