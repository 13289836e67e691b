//! Calculator core: key tokens, the state record and its transition
//! table, the expression evaluator and the derived radix view.
//!
//! Nothing in here knows about terminals. The shell in [`crate::tui`]
//! only reads a [`CalcState`] and feeds [`Key`]s back in.

mod controller;
pub mod evaluator;
pub mod history;
mod key;
pub mod keymap;
pub mod number;
mod operations;
pub mod parser;
pub mod radix;
pub mod state;

pub use controller::Controller;
pub use key::{Key, KeyParseError, MemoryOp};
pub use operations::Operation;
pub use radix::RadixView;
pub use state::{CalcState, Panels};

use thiserror::Error;

/// Result type for expression evaluation
pub type CalcResult<T> = Result<T, CalcError>;

/// Why an expression could not be evaluated.
///
/// Every variant is handled the same way by the controller (display shows
/// `Error`, expression is cleared); the variants exist for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalcError {
    /// Nothing to evaluate
    #[error("Empty expression")]
    EmptyExpression,
    /// A character outside the calculator alphabet
    #[error("Unexpected character '{ch}' at offset {offset}")]
    UnexpectedChar {
        /// The offending character
        ch: char,
        /// Byte offset into the sanitized expression
        offset: usize,
    },
    /// A numeric literal that does not parse, e.g. a lone `.`
    #[error("Invalid number: '{0}'")]
    InvalidNumber(String),
    /// A word other than `Infinity` or `NaN`
    #[error("Unknown identifier: '{0}'")]
    UnknownIdentifier(String),
    /// A token in a position the grammar does not allow
    #[error("Unexpected token: {0}")]
    UnexpectedToken(String),
    /// Input ended where an operand was required (e.g. trailing operator)
    #[error("Unexpected end of expression")]
    UnexpectedEnd,
}
