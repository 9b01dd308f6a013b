//! Reminder List Utilities
//!
//! Pure projections of the reminder store: editor rows, the hidden
//! serialized field, and submit-time sanitization.

use crate::models::{Reminder, ReminderEntry, ReminderUnit};

/// One rendered editor row
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderRow {
    /// Stable until the list is structurally rebuilt
    pub key: (u32, usize),
    pub index: usize,
    pub amount_text: String,
    pub unit: String,
}

/// Project the store into editor rows, in display order
///
/// `revision` changes whenever rows are added, removed or reset, so keyed
/// lists rebuild then and keep focus while a value is being typed.
pub fn reminder_rows(revision: u32, entries: &[ReminderEntry]) -> Vec<ReminderRow> {
    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| ReminderRow {
            key: (revision, index),
            index,
            amount_text: format_amount(entry.amount),
            unit: entry.unit.clone(),
        })
        .collect()
}

/// Amount as shown in a number input (blank for NaN)
pub fn format_amount(amount: f64) -> String {
    if amount.is_nan() {
        String::new()
    } else {
        amount.to_string()
    }
}

/// JSON text kept in the hidden `remindersJson` field
pub fn serialize_reminders(entries: &[ReminderEntry]) -> String {
    serde_json::to_string(entries).unwrap_or_else(|e| {
        log::warn!("could not serialize reminders: {}", e);
        "[]".to_string()
    })
}

/// Keep only entries that can be sent to the API
///
/// An empty unit counts as minutes. Negative or non-finite amounts and
/// unknown units are dropped without a report.
pub fn sanitize(entries: &[ReminderEntry]) -> Vec<Reminder> {
    entries.iter().filter_map(sanitize_entry).collect()
}

fn sanitize_entry(entry: &ReminderEntry) -> Option<Reminder> {
    let unit = if entry.unit.is_empty() {
        ReminderUnit::Minutes
    } else {
        entry.unit.parse().ok()?
    };
    if !entry.amount.is_finite() || entry.amount < 0.0 {
        return None;
    }
    Some(Reminder { amount: entry.amount, unit })
}
