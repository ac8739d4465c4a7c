//! FILENAME: core/engine/src/arithmetic.rs
//! PURPOSE: The four binary operations over exact decimal values.
//! CONTEXT: Stateless-per-call evaluator used by the calculator session.
//! Every failure mode is absorbed here: division by zero yields zero and
//! overflow saturates, so callers never see a panic or an error value.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four keypad operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The symbol shown on the keypad and in the operator column of the tape.
    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Add => "+",
            Operator::Subtract => "-",
            Operator::Multiply => "×",
            Operator::Divide => "÷",
        }
    }

    /// Parse a keypad symbol. Returns None for anything that is not one of
    /// the four operator keys.
    pub fn from_symbol(symbol: &str) -> Option<Operator> {
        match symbol {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "×" => Some(Operator::Multiply),
            "÷" => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Apply a binary operation to two operands.
///
/// Division by zero is defined to yield zero rather than an error; the
/// session layer relies on this function never failing. Addition,
/// subtraction and multiplication saturate at the representable range.
pub fn apply(op: Operator, a: Decimal, b: Decimal) -> Decimal {
    match op {
        Operator::Add => a.saturating_add(b),
        Operator::Subtract => a.saturating_sub(b),
        Operator::Multiply => a.saturating_mul(b),
        Operator::Divide => {
            if b.is_zero() {
                Decimal::ZERO
            } else {
                a.checked_div(b).unwrap_or(Decimal::ZERO)
            }
        }
    }
}
