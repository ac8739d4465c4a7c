//! FILENAME: core/engine/src/session.rs
//! PURPOSE: The calculator state machine.
//! CONTEXT: A pure reducer over `(SessionState, Action)` decides what the
//! display shows and how tape rows are produced, merged, or replaced.
//! `CalculatorSession` wraps the reducer, owns the state, and notifies an
//! observer exactly once per user action. Evaluation is sequential
//! left-to-right; there is no operator precedence.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::arithmetic::{apply, Operator};
use crate::history::{History, HistoryRow, RowStyle};
use crate::number_format::format_decimal;

/// Height of one tape row in points, as laid out by the presentation layer.
pub const ROW_HEIGHT: f64 = 41.0;

/// Number of tape rows needed to fill `height` points of visible area,
/// with two rows of headroom so the tape scrolls in from a full column.
pub fn row_capacity_for_height(height: f64) -> usize {
    (height / ROW_HEIGHT).max(0.0) as usize + 2
}

// ============================================================================
// ACTIONS
// ============================================================================

/// One discrete user action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "value")]
pub enum Action {
    /// A keypad digit: "0".."9", ".", or the double-zero key "00".
    Digit(String),
    /// The +/- key.
    ToggleSign,
    /// One of the four operator keys.
    Operator(Operator),
    /// The = key.
    Equals,
    /// Short press of the clear key.
    Clear,
    /// Long press of the clear key.
    AllClear,
    /// The visible tape area changed; the payload is the settled row count.
    Resize(usize),
}

// ============================================================================
// STATE
// ============================================================================

/// Complete state of one calculator instance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    /// The digit buffer as typed. Never shown directly; see `display_input`.
    pub current_input: String,
    /// What the number display shows: the buffer, or a formatted result
    /// right after an operator chained a computation or equals was pressed.
    pub display_input: String,
    /// The operator slot of the display: "", an operator symbol, or "=".
    pub display_operator: String,
    /// The next digit starts a fresh number.
    pub is_new_input: bool,
    pub is_equal_just_pressed: bool,
    /// The running operand an operator is waiting to combine with.
    pub previous_input: Option<Decimal>,
    /// The pending operator. Present iff `previous_input` is present,
    /// except in the post-equals terminal state where both are cleared.
    pub current_operator: Option<Operator>,
    /// Raw result stashed at equals so a following operator can chain on it
    /// while a following digit starts fresh.
    pub last_result: Option<Decimal>,
    pub history: History,
}

impl SessionState {
    /// Fresh state with a tape of `capacity` blank rows.
    pub fn with_capacity(capacity: usize) -> Self {
        SessionState {
            current_input: "0".to_string(),
            display_input: "0".to_string(),
            display_operator: String::new(),
            is_new_input: true,
            is_equal_just_pressed: false,
            previous_input: None,
            current_operator: None,
            last_result: None,
            history: History::with_capacity(capacity),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState::with_capacity(0)
    }
}

// ============================================================================
// REDUCER
// ============================================================================

/// Advance the state machine by one action. Pure: no I/O, no notification.
pub fn reduce(mut state: SessionState, action: Action) -> SessionState {
    match action {
        Action::Digit(digit) => add_digit(&mut state, &digit),
        Action::ToggleSign => toggle_sign(&mut state),
        Action::Operator(op) => set_operator(&mut state, op),
        Action::Equals => calculate(&mut state),
        Action::Clear => clear_current_input(&mut state),
        Action::AllClear => all_clear(&mut state),
        Action::Resize(capacity) => resize(&mut state, capacity),
    }
    state
}

/// Set the digit buffer and keep the display in step. An empty buffer is
/// displayed as "0".
fn set_input(state: &mut SessionState, text: impl Into<String>) {
    state.current_input = text.into();
    state.display_input = if state.current_input.is_empty() {
        "0".to_string()
    } else {
        state.current_input.clone()
    };
}

/// Parse the digit buffer. A trailing decimal point ("12.") is an
/// in-progress number and parses as if it were absent.
fn parse_buffer(input: &str) -> Option<Decimal> {
    let trimmed = input.strip_suffix('.').unwrap_or(input);
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed).ok()
}

/// Clear everything belonging to the calculation in flight. The tape is
/// untouched.
fn reset_transient(state: &mut SessionState) {
    set_input(state, "");
    state.display_operator.clear();
    state.current_operator = None;
    state.previous_input = None;
    state.last_result = None;
    state.is_equal_just_pressed = false;
    state.is_new_input = true;
}

fn add_digit(state: &mut SessionState, digit: &str) {
    // A digit right after "=" starts a fresh calculation.
    if state.is_equal_just_pressed {
        reset_transient(state);
    }
    if state.is_new_input {
        set_input(state, "");
        state.is_new_input = false;
    }
    match digit {
        "." => {
            if !state.current_input.contains('.') {
                let next = if state.current_input.is_empty() {
                    "0.".to_string()
                } else {
                    format!("{}.", state.current_input)
                };
                set_input(state, next);
            }
        }
        "00" => {
            if state.current_input == "0" || state.current_input.is_empty() {
                set_input(state, "0");
            } else {
                let next = format!("{}00", state.current_input);
                set_input(state, next);
            }
        }
        _ => {
            let next = if state.current_input == "0" {
                digit.to_string()
            } else {
                format!("{}{}", state.current_input, digit)
            };
            set_input(state, next);
        }
    }
}

fn toggle_sign(state: &mut SessionState) {
    if state.current_input == "0" {
        return;
    }
    let next = match state.current_input.strip_prefix('-') {
        Some(stripped) => stripped.to_string(),
        None => format!("-{}", state.current_input),
    };
    set_input(state, next);
}

fn set_operator(state: &mut SessionState, op: Operator) {
    // Nothing to operate on in the fresh/cleared state.
    if state.previous_input.is_none() && state.current_input == "0" {
        return;
    }

    if state.is_equal_just_pressed {
        // Chain on the result: carry it forward as the running operand and
        // put it on the tape as a highlighted row.
        let carried = state.last_result.take();
        state.previous_input = carried;
        let text = match carried {
            Some(value) => format_decimal(value),
            None => String::new(),
        };
        state.history.push(HistoryRow::new("", text, RowStyle::Result));
    } else if state.is_new_input && state.current_operator.is_some() {
        // Operator pressed again before any digit: swap the pending
        // operator in place. No new tape row.
        state.current_operator = Some(op);
        state.display_operator = op.symbol().to_string();
        state.history.swap_last_operator(op.symbol());
        return;
    } else if let (Some(previous), Some(current)) =
        (state.previous_input, parse_buffer(&state.current_input))
    {
        // Chained operation: fold the typed operand into the running value.
        // A buffer of exactly "0" skips the fold; only the pending operator
        // changes (matches the shipped behavior).
        if !state.current_input.is_empty() && state.current_input != "0" {
            if let Some(pending) = state.current_operator {
                let result = apply(pending, previous, current);
                state.history.push(HistoryRow::new(
                    pending.symbol(),
                    state.current_input.clone(),
                    RowStyle::Normal,
                ));
                state.previous_input = Some(result);
                state.display_input = format_decimal(result);
            }
        }
    } else if state.previous_input.is_none() {
        // First operand of a calculation.
        if let Some(value) = parse_buffer(&state.current_input) {
            state.previous_input = Some(value);
            state.history.push(HistoryRow::new(
                "",
                state.current_input.clone(),
                RowStyle::Normal,
            ));
        }
    }

    state.current_operator = Some(op);
    state.display_operator = op.symbol().to_string();
    state.is_new_input = true;
    state.is_equal_just_pressed = false;
}

fn calculate(state: &mut SessionState) {
    let (op, previous) = match (state.current_operator, state.previous_input) {
        (Some(op), Some(previous)) => (op, previous),
        _ => return,
    };
    let current = match parse_buffer(&state.current_input) {
        Some(value) => value,
        None => return,
    };

    let result = apply(op, previous, current);
    let formatted = format_decimal(result);

    state.history.push(HistoryRow::new(
        op.symbol(),
        state.current_input.clone(),
        RowStyle::Normal,
    ));
    state
        .history
        .push(HistoryRow::new("=", formatted.clone(), RowStyle::Result));
    // Spacer separating this equation from the next.
    state.history.push(HistoryRow::blank());

    state.display_operator = "=".to_string();
    state.display_input = formatted;
    state.last_result = Some(result);
    state.is_equal_just_pressed = true;
    state.is_new_input = true;
    state.previous_input = None;
    state.current_operator = None;
}

fn clear_current_input(state: &mut SessionState) {
    if state.display_operator == "=" {
        // Sitting at a just-computed result: drop all transient state but
        // keep the tape.
        state.display_operator.clear();
        set_input(state, "0");
        state.current_operator = None;
        state.previous_input = None;
        state.last_result = None;
        state.is_new_input = true;
        state.is_equal_just_pressed = false;
    } else {
        set_input(state, "0");
        state.is_new_input = true;
    }
}

fn all_clear(state: &mut SessionState) {
    set_input(state, "0");
    state.display_operator.clear();
    state.current_operator = None;
    state.previous_input = None;
    state.last_result = None;
    state.is_new_input = true;
    state.is_equal_just_pressed = false;
    state.history.reset();
}

fn resize(state: &mut SessionState, capacity: usize) {
    // Compared against the current row count, which can exceed the
    // configured capacity once the tape has grown. A capacity change is a
    // full reset, never a partial resize.
    if capacity == state.history.len() {
        return;
    }
    state.history.set_capacity(capacity);
    all_clear(state);
}

// ============================================================================
// SESSION
// ============================================================================

/// Receives the full state once per completed user action.
pub trait StateObserver {
    fn state_changed(&mut self, state: &SessionState);
}

/// Owns a `SessionState`, exposes one method per keypad action, and runs
/// the observer after every dispatch. Intended to be driven by a single
/// interaction component; it is not Sync and needs no locking.
pub struct CalculatorSession {
    state: SessionState,
    show_ac_tooltip: bool,
    observer: Option<Box<dyn StateObserver + Send>>,
}

impl CalculatorSession {
    /// A fresh session whose tape holds `capacity` rows, with the AC
    /// tooltip hint enabled (first launch).
    pub fn new(capacity: usize) -> Self {
        CalculatorSession {
            state: SessionState::with_capacity(capacity),
            show_ac_tooltip: true,
            observer: None,
        }
    }

    /// A fresh session with the tooltip hint seeded from a persisted
    /// preference.
    pub fn with_tooltip_hint(capacity: usize, show_ac_tooltip: bool) -> Self {
        CalculatorSession {
            show_ac_tooltip,
            ..CalculatorSession::new(capacity)
        }
    }

    pub fn set_observer(&mut self, observer: Box<dyn StateObserver + Send>) {
        self.observer = Some(observer);
    }

    /// Run one action through the reducer and notify the observer.
    pub fn dispatch(&mut self, action: Action) {
        log::debug!("dispatch {:?}", action);
        let state = std::mem::take(&mut self.state);
        self.state = reduce(state, action);
        if let Some(observer) = self.observer.as_mut() {
            observer.state_changed(&self.state);
        }
    }

    pub fn digit(&mut self, digit: &str) {
        self.dispatch(Action::Digit(digit.to_string()));
    }

    pub fn toggle_sign(&mut self) {
        self.dispatch(Action::ToggleSign);
    }

    pub fn operator(&mut self, op: Operator) {
        self.dispatch(Action::Operator(op));
    }

    pub fn equals(&mut self) {
        self.dispatch(Action::Equals);
    }

    pub fn clear(&mut self) {
        self.dispatch(Action::Clear);
    }

    pub fn all_clear(&mut self) {
        self.dispatch(Action::AllClear);
    }

    /// Apply a settled tape capacity (see `crate::debounce` for coalescing
    /// the raw resize stream).
    pub fn resize(&mut self, capacity: usize) {
        self.dispatch(Action::Resize(capacity));
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn display_input(&self) -> &str {
        &self.state.display_input
    }

    pub fn display_operator(&self) -> &str {
        &self.state.display_operator
    }

    pub fn rows(&self) -> impl Iterator<Item = &HistoryRow> {
        self.state.history.iter()
    }

    /// Whether the "long press for AC" tooltip should still be shown.
    pub fn should_show_ac_tooltip(&self) -> bool {
        self.show_ac_tooltip
    }

    /// Turn the tooltip hint off. The embedder persists the preference.
    pub fn dismiss_ac_tooltip(&mut self) {
        self.show_ac_tooltip = false;
    }
}
