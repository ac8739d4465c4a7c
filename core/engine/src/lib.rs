//! FILENAME: core/engine/src/lib.rs
//! PURPOSE: Main library entry point for the calculator engine.
//! CONTEXT: Re-exports public types and modules for use by other crates.

pub mod arithmetic;
pub mod debounce;
pub mod history;
pub mod number_format;
pub mod session;

// Re-export commonly used types at the crate root
pub use arithmetic::{apply, Operator};
pub use debounce::{Debouncer, RESIZE_QUIET_WINDOW};
pub use history::{History, HistoryRow, RowStyle};
pub use number_format::{
    format_decimal, format_with_separators, Separators, ERROR_DISPLAY, MAX_FRACTION_DIGITS,
};
pub use session::{
    reduce, row_capacity_for_height, Action, CalculatorSession, SessionState, StateObserver,
    ROW_HEIGHT,
};
