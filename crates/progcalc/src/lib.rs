//! progcalc - keypad calculator with a programmer-mode readout
//!
//! A flat infix calculator (`+ - × ÷`) with a memory register, a ten-entry
//! history and a live binary/hexadecimal view of the display. The core is a
//! pure state machine; the terminal shell only renders it and feeds keys in.
//!
//! # Example
//!
//! ```rust
//! use progcalc::prelude::*;
//!
//! let mut calc = Controller::new();
//! for label in ["7", "+", "3", "="] {
//!     calc.submit(label.parse().unwrap());
//! }
//! assert_eq!(calc.display(), "10");
//! assert_eq!(calc.state().history().lines(), vec!["7+3 = 10"]);
//! assert_eq!(calc.radix().binary, "1010");
//! ```

// Allow common test patterns in this crate
#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod clipboard;
pub mod config;
pub mod core;
pub mod driver;

#[cfg(feature = "tui")]
pub mod tui;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::clipboard::{Clipboard, MemoryClipboard};
    pub use crate::config::{ConfigError, ShellConfig};
    pub use crate::core::evaluator::Evaluator;
    pub use crate::core::history::{History, HistoryEntry};
    pub use crate::core::keymap::map_key_name;
    pub use crate::core::number::{format_number, parse_lenient};
    pub use crate::core::parser::{AstNode, Parser, Token, Tokenizer};
    pub use crate::core::{
        CalcError, CalcResult, CalcState, Controller, Key, KeyParseError, MemoryOp, Operation,
        Panels, RadixView,
    };
    pub use crate::driver::CalculatorDriver;

    #[cfg(feature = "system-clipboard")]
    pub use crate::clipboard::SystemClipboard;

    #[cfg(feature = "tui")]
    pub use crate::driver::TuiDriver;
    #[cfg(feature = "tui")]
    pub use crate::tui::{CalculatorApp, ShellAction};
}
