//! UI Components
//!
//! Leptos components for the task form.

mod task_form;
mod target_selector;
mod remind_type_selector;
mod reminder_editor;
mod reminder_item;
mod status_line;

pub use task_form::TaskForm;
pub use target_selector::TargetSelector;
pub use remind_type_selector::RemindTypeSelector;
pub use reminder_editor::ReminderEditor;
pub use reminder_item::ReminderItem;
pub use status_line::StatusLine;
