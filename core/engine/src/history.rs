//! FILENAME: core/engine/src/history.rs
//! PURPOSE: The tape, a bounded log of past operations and results.
//! CONTEXT: The tape starts as a fixed block of blank placeholder rows
//! sized to the visible area. New rows consume placeholders front-to-back
//! (shift-then-overwrite, keeping the length fixed); once the padding is
//! gone the tape grows by appending.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visual treatment of a tape row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RowStyle {
    /// A typed operand.
    Normal,
    /// A computed or carried-forward result.
    Result,
    /// A placeholder or spacer row.
    Blank,
}

/// One entry on the tape.
///
/// `id` is stable for the lifetime of the row so the presentation layer can
/// update incrementally. Rows are immutable after insertion, with one
/// exception: the operator symbol of the most recent operator-bearing row
/// is rewritten in place when the user swaps the pending operator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryRow {
    pub id: Uuid,
    /// One of "", "+", "-", "×", "÷", "=".
    pub operator: String,
    /// The displayed operand or result; empty for blank rows.
    pub text: String,
    pub style: RowStyle,
}

impl HistoryRow {
    pub fn new(operator: impl Into<String>, text: impl Into<String>, style: RowStyle) -> Self {
        HistoryRow {
            id: Uuid::new_v4(),
            operator: operator.into(),
            text: text.into(),
            style,
        }
    }

    /// A blank row: initial placeholder padding, or the spacer appended
    /// after a completed equation.
    pub fn blank() -> Self {
        HistoryRow::new("", "", RowStyle::Blank)
    }

    pub fn is_blank(&self) -> bool {
        self.style == RowStyle::Blank
    }
}

/// The bounded tape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct History {
    rows: VecDeque<HistoryRow>,
    /// Initial blank padding not yet consumed by pushed rows.
    placeholders: usize,
    /// Row count the tape resets to.
    capacity: usize,
}

impl History {
    /// A tape of `capacity` blank placeholder rows.
    pub fn with_capacity(capacity: usize) -> Self {
        History {
            rows: (0..capacity).map(|_| HistoryRow::blank()).collect(),
            placeholders: capacity,
            capacity,
        }
    }

    /// Push a row onto the tape.
    ///
    /// While placeholder padding remains, the oldest row is dropped and the
    /// new row takes the last slot, so the tape keeps its fixed length.
    /// Afterwards the tape grows by one per push.
    pub fn push(&mut self, row: HistoryRow) {
        if self.placeholders > 0 {
            self.rows.pop_front();
            self.rows.push_back(row);
            self.placeholders -= 1;
        } else {
            self.rows.push_back(row);
        }
    }

    /// Rewrite the operator symbol of the most recent row that carries one.
    /// Returns false if no row on the tape has a non-empty operator slot.
    pub fn swap_last_operator(&mut self, symbol: &str) -> bool {
        for row in self.rows.iter_mut().rev() {
            if !row.operator.is_empty() {
                row.operator = symbol.to_string();
                return true;
            }
        }
        false
    }

    /// Clear the tape back to `capacity` blank placeholder rows.
    pub fn reset(&mut self) {
        *self = History::with_capacity(self.capacity);
    }

    pub(crate) fn set_capacity(&mut self, capacity: usize) {
        self.capacity = capacity;
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryRow> {
        self.rows.iter()
    }

    pub fn last(&self) -> Option<&HistoryRow> {
        self.rows.back()
    }
}
