//! Unified calculator driver
//!
//! Scenario checks are written once against [`CalculatorDriver`] and run
//! against every front end: the bare [`Controller`] and, with the `tui`
//! feature, the terminal app driven through real key events.

use crate::core::{Controller, Key, KeyParseError};

/// Abstract driver for calculator interactions
///
/// # Example
///
/// ```rust
/// use progcalc::driver::{verify_addition, CalculatorDriver};
/// use progcalc::core::Controller;
///
/// let mut driver = Controller::new();
/// verify_addition(&mut driver);
/// assert_eq!(driver.display(), "10");
/// ```
pub trait CalculatorDriver {
    /// Presses one key
    fn press(&mut self, key: Key);

    /// Current display readout
    fn display(&self) -> String;

    /// Current expression
    fn expression(&self) -> String;

    /// History lines, newest first
    fn history(&self) -> Vec<String>;

    /// Binary readout of the display
    fn binary(&self) -> String;

    /// Hex readout of the display
    fn hex(&self) -> String;

    /// Presses `C`
    fn clear(&mut self) {
        self.press(Key::Clear);
    }

    /// Presses each key in order
    fn press_all(&mut self, keys: &[Key]) {
        for &key in keys {
            self.press(key);
        }
    }

    /// Presses a space-separated label script such as `"7 + 3 ="`.
    ///
    /// # Errors
    ///
    /// Returns the first unknown label; nothing is pressed in that case.
    fn press_labels(&mut self, labels: &str) -> Result<(), KeyParseError> {
        let keys = keys(labels)?;
        self.press_all(&keys);
        Ok(())
    }
}

impl CalculatorDriver for Controller {
    fn press(&mut self, key: Key) {
        self.submit(key);
    }

    fn display(&self) -> String {
        Controller::display(self).to_string()
    }

    fn expression(&self) -> String {
        Controller::expression(self).to_string()
    }

    fn history(&self) -> Vec<String> {
        self.state().history().lines()
    }

    fn binary(&self) -> String {
        self.radix().binary
    }

    fn hex(&self) -> String {
        self.radix().hex
    }
}

/// TUI driver implementation
#[cfg(feature = "tui")]
pub mod tui_driver {
    use super::CalculatorDriver;
    use crate::core::Key;
    use crate::tui::{CalculatorApp, InputHandler};

    /// Drives the terminal app with synthesized crossterm key events
    #[derive(Debug, Default)]
    pub struct TuiDriver {
        app: CalculatorApp,
    }

    impl TuiDriver {
        /// Creates a new TUI driver
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Creates a TUI driver with an existing app
        #[must_use]
        pub fn with_app(app: CalculatorApp) -> Self {
            Self { app }
        }

        /// Returns a reference to the underlying app
        #[must_use]
        pub fn app(&self) -> &CalculatorApp {
            &self.app
        }

        /// Returns a mutable reference to the underlying app
        pub fn app_mut(&mut self) -> &mut CalculatorApp {
            &mut self.app
        }
    }

    impl CalculatorDriver for TuiDriver {
        fn press(&mut self, key: Key) {
            self.app.handle_key_event(InputHandler::key_event_for(key));
        }

        fn display(&self) -> String {
            self.app.state().display().to_string()
        }

        fn expression(&self) -> String {
            self.app.state().expression().to_string()
        }

        fn history(&self) -> Vec<String> {
            self.app.state().history().lines()
        }

        fn binary(&self) -> String {
            self.app.state().radix().binary
        }

        fn hex(&self) -> String {
            self.app.state().radix().hex
        }
    }
}

#[cfg(feature = "tui")]
pub use tui_driver::TuiDriver;

/// Parses space-separated key labels such as `"7 + 3 ="`.
///
/// # Errors
///
/// Returns the first label that names no key.
pub fn keys(labels: &str) -> Result<Vec<Key>, KeyParseError> {
    labels.split_whitespace().map(str::parse).collect()
}

// ===== Unified Scenario Checks =====
// These work with ANY CalculatorDriver implementation

/// `7 + 3 =` shows 10 and records it
pub fn verify_addition<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("7 + 3 ="), Ok(()));
    assert_eq!(driver.display(), "10");
    assert_eq!(driver.expression(), "10");
    assert_eq!(driver.history().first().map(String::as_str), Some("7+3 = 10"));
}

/// A second operator replaces the first
pub fn verify_operator_replacement<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("5 + ×"), Ok(()));
    assert_eq!(driver.expression(), "5×");
    driver.clear();
    assert_eq!(driver.press_labels("5 + ÷ 2 ="), Ok(()));
    assert_eq!(driver.display(), "2.5");
}

/// A second `.` in one operand is ignored
pub fn verify_decimal_guard<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("1 . 5"), Ok(()));
    let before = driver.expression();
    driver.press(Key::Decimal);
    assert_eq!(driver.expression(), before);
}

/// `9 ÷ 0 =` is Infinity, not an error
pub fn verify_division_by_zero<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("9 ÷ 0 ="), Ok(()));
    assert_eq!(driver.display(), "Infinity");
    assert_eq!(driver.expression(), "Infinity");
}

/// An unevaluable expression shows `Error` and clears
pub fn verify_error<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    let before = driver.history();
    assert_eq!(driver.press_labels("+ ="), Ok(()));
    assert_eq!(driver.display(), "Error");
    assert_eq!(driver.expression(), "");
    assert_eq!(driver.history(), before);
}

/// `C` always resets display and expression
pub fn verify_clear<D: CalculatorDriver>(driver: &mut D) {
    assert_eq!(driver.press_labels("4 × 2"), Ok(()));
    driver.clear();
    assert_eq!(driver.display(), "0");
    assert_eq!(driver.expression(), "");
}

/// History keeps the ten newest evaluations, newest first
pub fn verify_history_cap<D: CalculatorDriver>(driver: &mut D) {
    for d in 0..=10u8 {
        driver.clear();
        driver.press_all(&[Key::Digit(d % 10), Key::Equals]);
    }
    let history = driver.history();
    assert_eq!(history.len(), 10);
    // the eleventh evaluation was "0", the tenth "9"
    assert_eq!(history[0], "0 = 0");
    assert_eq!(history[1], "9 = 9");
    assert_eq!(history[9], "1 = 1");
}

/// Radix readout of a negative fraction
pub fn verify_radix<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("0 - 1 0 . 7 ="), Ok(()));
    assert_eq!(driver.display(), "-10.7");
    assert_eq!(driver.binary(), "-1010");
    assert_eq!(driver.hex(), "-A");
}

/// Memory add, subtract, recall and clear
pub fn verify_memory<D: CalculatorDriver>(driver: &mut D) {
    driver.clear();
    assert_eq!(driver.press_labels("MC 8 M+ M+ C 3 M- C MR"), Ok(()));
    assert_eq!(driver.display(), "13");
    assert_eq!(driver.expression(), "13");
    assert_eq!(driver.press_labels("MC C MR"), Ok(()));
    assert_eq!(driver.display(), "0");
}

/// Runs every scenario in sequence on one driver
pub fn run_all_scenarios<D: CalculatorDriver>(driver: &mut D) {
    verify_addition(driver);
    verify_operator_replacement(driver);
    verify_decimal_guard(driver);
    verify_division_by_zero(driver);
    verify_error(driver);
    verify_clear(driver);
    verify_radix(driver);
    verify_memory(driver);
    verify_history_cap(driver);
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::core::Operation;

    // ===== Helper tests =====

    #[test]
    fn test_keys_parses_script() {
        assert_eq!(
            keys("7 + 3 ="),
            Ok(vec![
                Key::Digit(7),
                Key::Operator(Operation::Add),
                Key::Digit(3),
                Key::Equals
            ])
        );
        assert_eq!(keys("  "), Ok(Vec::new()));
    }

    #[test]
    fn test_keys_rejects_unknown_label() {
        assert_eq!(keys("7 % 3"), Err(KeyParseError("%".to_string())));
    }

    #[test]
    fn test_press_labels_is_all_or_nothing() {
        let mut driver = Controller::new();
        assert!(driver.press_labels("7 + %").is_err());
        assert_eq!(CalculatorDriver::expression(&driver), "");
        assert_eq!(driver.press_labels("7 + 3"), Ok(()));
        assert_eq!(CalculatorDriver::expression(&driver), "7+3");
    }

    // ===== Controller driver tests =====

    #[test]
    fn test_controller_driver_defaults() {
        let driver = Controller::new();
        assert_eq!(CalculatorDriver::display(&driver), "0");
        assert_eq!(CalculatorDriver::expression(&driver), "");
        assert!(driver.history().is_empty());
        assert_eq!(driver.binary(), "0");
        assert_eq!(driver.hex(), "0");
    }

    #[test]
    fn test_controller_full_run() {
        let mut driver = Controller::new();
        run_all_scenarios(&mut driver);
    }

    #[test]
    fn test_controller_memory() {
        let mut driver = Controller::new();
        verify_memory(&mut driver);
    }

    // ===== TUI Driver Tests =====

    #[cfg(feature = "tui")]
    mod tui_tests {
        use super::*;

        #[test]
        fn test_tui_driver_new() {
            let driver = TuiDriver::new();
            assert_eq!(driver.display(), "0");
            assert!(driver.expression().is_empty());
        }

        #[test]
        fn test_tui_driver_with_app() {
            let mut app = crate::tui::CalculatorApp::new();
            app.handle(crate::tui::ShellAction::Calculator(Key::Digit(4)));
            let driver = TuiDriver::with_app(app);
            assert_eq!(driver.expression(), "4");
        }

        #[test]
        fn test_tui_driver_app_access() {
            let mut driver = TuiDriver::new();
            driver.press(Key::Digit(2));
            assert_eq!(driver.app().state().display(), "2");
            driver.app_mut().handle(crate::tui::ShellAction::Quit);
            assert!(driver.app().should_quit());
        }

        #[test]
        fn test_tui_driver_highlights_keypad() {
            let mut driver = TuiDriver::new();
            driver.press(Key::Equals);
            assert_eq!(driver.app().keypad().pressed().unwrap().key, Key::Equals);
        }

        // ===== Unified Scenario Tests =====

        #[test]
        fn test_unified_addition() {
            verify_addition(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_operator_replacement() {
            verify_operator_replacement(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_decimal_guard() {
            verify_decimal_guard(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_division_by_zero() {
            verify_division_by_zero(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_error() {
            verify_error(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_radix() {
            verify_radix(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_memory() {
            verify_memory(&mut TuiDriver::new());
        }

        #[test]
        fn test_unified_history_cap() {
            verify_history_cap(&mut TuiDriver::new());
        }

        #[test]
        fn test_full_run() {
            run_all_scenarios(&mut TuiDriver::new());
        }

        #[test]
        fn test_drivers_agree() {
            let mut controller = Controller::new();
            let mut tui = TuiDriver::new();
            let script = keys("1 2 . 5 × 4 - 3 ÷ 2 = M+ C . 5 + MR =").unwrap();
            controller.press_all(&script);
            tui.press_all(&script);
            assert_eq!(CalculatorDriver::display(&controller), tui.display());
            assert_eq!(controller.history(), tui.history());
        }
    }
}
