//! Form State Store
//!
//! All form state lives in one `reactive_stores` store. Components never
//! mutate it directly; they dispatch a `FormEvent` and `reduce` computes
//! the next state.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api::SubmitError;
use crate::models::{parse_amount, ReminderEntry, RemindType, SubmitReceipt, TargetSelection};

/// Text shown after a local-only submission
pub const LOCAL_CONFIRMATION: &str = "Task saved locally (no request sent).";

/// Placeholder when the server omits the task id
pub const MISSING_TASK_ID: &str = "(no id returned)";

/// Status line contents
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Submitted { task_id: Option<String> },
    Failed(String),
    SavedLocally,
}

impl SubmitStatus {
    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmitStatus::Submitting)
    }

    pub fn text(&self) -> String {
        match self {
            SubmitStatus::Idle => String::new(),
            SubmitStatus::Submitting => "Submitting...".to_string(),
            SubmitStatus::Submitted { task_id } => format!(
                "Submitted! Task ID: {}",
                task_id.as_deref().unwrap_or(MISSING_TASK_ID)
            ),
            SubmitStatus::Failed(message) => format!("Error: {}", message),
            SubmitStatus::SavedLocally => LOCAL_CONFIRMATION.to_string(),
        }
    }
}

/// Form state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct FormState {
    pub task: String,
    pub description: String,
    /// `YYYY-MM-DDTHH:mm` from the datetime picker, passed through as-is
    pub due_date: String,
    pub target: TargetSelection,
    pub remind_type: RemindType,
    pub reminders: Vec<ReminderEntry>,
    pub status: SubmitStatus,
    /// Bumped whenever the reminder rows need rebuilding
    pub revision: u32,
}

impl FormState {
    pub fn new(initial_target: impl Into<String>) -> Self {
        Self {
            target: TargetSelection::new(initial_target),
            ..Default::default()
        }
    }
}

/// Everything that can happen to the form
#[derive(Debug)]
pub enum FormEvent {
    TaskChanged(String),
    DescriptionChanged(String),
    DueDateChanged(String),
    TargetPresetChanged(String),
    TargetCustomChanged(String),
    RemindTypeChanged(RemindType),
    ReminderAdded,
    ReminderAmountChanged { index: usize, value: String },
    ReminderUnitChanged { index: usize, unit: String },
    ReminderRemoved(usize),
    SubmitStarted,
    SubmitFinished(Result<SubmitReceipt, SubmitError>),
}

/// Compute the state that follows `event`
///
/// Total: out-of-range reminder indices are ignored.
pub fn reduce(mut state: FormState, event: FormEvent) -> FormState {
    match event {
        FormEvent::TaskChanged(value) => state.task = value,
        FormEvent::DescriptionChanged(value) => state.description = value,
        FormEvent::DueDateChanged(value) => state.due_date = value,
        FormEvent::TargetPresetChanged(value) => state.target.preset = value,
        FormEvent::TargetCustomChanged(value) => state.target.custom = value,
        FormEvent::RemindTypeChanged(remind_type) => {
            state.remind_type = remind_type;
            seed_custom_reminders(&mut state);
        }
        FormEvent::ReminderAdded => {
            state.reminders.push(ReminderEntry::default());
            state.revision += 1;
        }
        FormEvent::ReminderAmountChanged { index, value } => {
            if let Some(entry) = state.reminders.get_mut(index) {
                entry.amount = parse_amount(&value);
            }
        }
        FormEvent::ReminderUnitChanged { index, unit } => {
            if let Some(entry) = state.reminders.get_mut(index) {
                entry.unit = unit;
            }
        }
        FormEvent::ReminderRemoved(index) => {
            if index < state.reminders.len() {
                state.reminders.remove(index);
                state.revision += 1;
            }
        }
        FormEvent::SubmitStarted => state.status = SubmitStatus::Submitting,
        FormEvent::SubmitFinished(Ok(receipt)) => {
            state.status = match receipt {
                SubmitReceipt::Created { task_id } => SubmitStatus::Submitted { task_id },
                SubmitReceipt::SavedLocally => SubmitStatus::SavedLocally,
            };
            reset_fields(&mut state);
        }
        FormEvent::SubmitFinished(Err(err)) => {
            state.status = SubmitStatus::Failed(err.to_string());
        }
    }
    state
}

// Custom mode never starts out empty
fn seed_custom_reminders(state: &mut FormState) {
    if state.remind_type == RemindType::Custom && state.reminders.is_empty() {
        state.reminders.push(ReminderEntry::default());
        state.revision += 1;
    }
}

fn reset_fields(state: &mut FormState) {
    state.task.clear();
    state.description.clear();
    state.due_date.clear();
    state.target.reset();
    state.remind_type = RemindType::default();
    state.reminders.clear();
    state.revision += 1;
    seed_custom_reminders(state);
}

/// Type alias for the store
pub type FormStore = Store<FormState>;

/// Apply an event to the store
pub fn dispatch(store: FormStore, event: FormEvent) {
    store.update(|state| *state = reduce(state.clone(), event));
}
