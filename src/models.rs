//! Frontend Models
//!
//! Data structures for the reminder form and the task API wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

// ========================
// Reminders
// ========================

/// Fixed set of units a reminder can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderUnit {
    Minutes,
    Hours,
    Days,
    Weeks,
}

impl ReminderUnit {
    pub const ALL: [ReminderUnit; 4] = [
        ReminderUnit::Minutes,
        ReminderUnit::Hours,
        ReminderUnit::Days,
        ReminderUnit::Weeks,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReminderUnit::Minutes => "minutes",
            ReminderUnit::Hours => "hours",
            ReminderUnit::Days => "days",
            ReminderUnit::Weeks => "weeks",
        }
    }
}

impl fmt::Display for ReminderUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReminderUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReminderUnit::ALL
            .into_iter()
            .find(|unit| unit.as_str() == s)
            .ok_or_else(|| format!("unknown reminder unit: {}", s))
    }
}

/// One editable reminder row as held by the form
///
/// Values are whatever the user last typed: the amount may be NaN or
/// negative and the unit may be any string. `sanitize` cleans them up at
/// submit time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawReminderEntry")]
pub struct ReminderEntry {
    pub amount: f64,
    pub unit: String,
}

pub const DEFAULT_REMINDER_AMOUNT: f64 = 10.0;

impl Default for ReminderEntry {
    fn default() -> Self {
        Self {
            amount: DEFAULT_REMINDER_AMOUNT,
            unit: ReminderUnit::Minutes.as_str().to_string(),
        }
    }
}

/// Loose JSON shape accepted when decoding entries
#[derive(Deserialize)]
struct RawReminderEntry {
    #[serde(default)]
    amount: Value,
    #[serde(default)]
    unit: Value,
}

impl From<RawReminderEntry> for ReminderEntry {
    fn from(raw: RawReminderEntry) -> Self {
        let amount = match raw.amount {
            Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
            Value::String(s) => parse_amount(&s),
            Value::Bool(b) => if b { 1.0 } else { 0.0 },
            // NaN is written as null, so null has to read back as NaN
            _ => f64::NAN,
        };
        let unit = match raw.unit {
            Value::String(s) => s,
            Value::Null => String::new(),
            other => other.to_string(),
        };
        Self { amount, unit }
    }
}

/// Coerce amount text the way a number input reports it
///
/// Blank text counts as zero; anything unparsable is NaN. Overflowing or
/// infinite input is NaN too, since the hidden field can only carry one
/// non-finite value (`null`).
pub fn parse_amount(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    trimmed
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite())
        .unwrap_or(f64::NAN)
}

/// A reminder that passed sanitization
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Reminder {
    pub amount: f64,
    pub unit: ReminderUnit,
}

impl From<Reminder> for ReminderEntry {
    fn from(reminder: Reminder) -> Self {
        Self {
            amount: reminder.amount,
            unit: reminder.unit.as_str().to_string(),
        }
    }
}

// ========================
// Form selections
// ========================

/// Reminder mode options (value, label)
pub const REMIND_TYPES: &[(&str, &str)] = &[
    ("simple", "Default reminders"),
    ("custom", "Custom..."),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RemindType {
    #[default]
    Simple,
    Custom,
}

impl RemindType {
    pub fn as_str(self) -> &'static str {
        match self {
            RemindType::Simple => "simple",
            RemindType::Custom => "custom",
        }
    }
}

impl FromStr for RemindType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "simple" => Ok(RemindType::Simple),
            "custom" => Ok(RemindType::Custom),
            other => Err(format!("unknown remind type: {}", other)),
        }
    }
}

/// Selector value that switches the target to free text
pub const CUSTOM_TARGET: &str = "other";

/// A selectable target preset
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetPreset {
    pub value: String,
    pub label: String,
}

/// Current state of the target selector
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSelection {
    pub preset: String,
    pub custom: String,
    /// Preset restored when the form resets
    pub initial: String,
}

impl TargetSelection {
    pub fn new(initial: impl Into<String>) -> Self {
        let initial = initial.into();
        Self {
            preset: initial.clone(),
            custom: String::new(),
            initial,
        }
    }

    pub fn is_custom(&self) -> bool {
        self.preset == CUSTOM_TARGET
    }

    /// Target value sent to the API
    pub fn resolve(&self) -> String {
        if self.is_custom() {
            self.custom.trim().to_string()
        } else {
            self.preset.clone()
        }
    }

    pub fn reset(&mut self) {
        self.preset = self.initial.clone();
        self.custom.clear();
    }
}

// ========================
// Task API
// ========================

/// Request body for task creation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskPayload {
    pub task: String,
    pub description: String,
    pub due_date: String,
    pub target: String,
    pub remind_type: RemindType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminders: Option<Vec<Reminder>>,
}

/// Successful outcome of a submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitReceipt {
    /// Created remotely; the server may omit the id
    Created { task_id: Option<String> },
    /// Local-only mode, nothing was sent
    SavedLocally,
}
