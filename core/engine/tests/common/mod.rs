//! FILENAME: core/engine/tests/common/mod.rs
//! Test harness and fixtures for calculator engine integration tests.

use engine::{CalculatorSession, HistoryRow, Operator};

/// Drives a calculator session the way the keypad would.
pub struct SessionHarness {
    pub session: CalculatorSession,
}

impl SessionHarness {
    /// A fresh session with a tape of `capacity` blank rows.
    pub fn new(capacity: usize) -> Self {
        SessionHarness {
            session: CalculatorSession::new(capacity),
        }
    }

    /// Press one keypad key: a digit, ".", "00", "±", an operator symbol,
    /// "=", "C", or "AC".
    pub fn press(&mut self, key: &str) {
        match key {
            "±" => self.session.toggle_sign(),
            "=" => self.session.equals(),
            "C" => self.session.clear(),
            "AC" => self.session.all_clear(),
            _ => {
                if let Some(op) = Operator::from_symbol(key) {
                    self.session.operator(op);
                } else {
                    self.session.digit(key);
                }
            }
        }
    }

    pub fn press_all(&mut self, keys: &[&str]) {
        for key in keys {
            self.press(key);
        }
    }

    /// All tape rows, oldest first.
    pub fn rows(&self) -> Vec<HistoryRow> {
        self.session.rows().cloned().collect()
    }

    /// The non-blank tape rows as (operator, text) pairs.
    pub fn printed(&self) -> Vec<(String, String)> {
        self.session
            .rows()
            .filter(|row| !row.is_blank())
            .map(|row| (row.operator.clone(), row.text.clone()))
            .collect()
    }

    /// The (operator, input) pair currently on the display.
    pub fn display(&self) -> (&str, &str) {
        (
            self.session.display_operator(),
            self.session.display_input(),
        )
    }
}
