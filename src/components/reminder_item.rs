//! Reminder Item Component
//!
//! One "<amount> <unit> before" row.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::models::ReminderUnit;
use crate::reminders::ReminderRow;
use crate::store::FormEvent;

/// Inputs are uncontrolled: their values are only written when the row is
/// built, so an in-progress amount like "1." is not rewritten while typing.
#[component]
pub fn ReminderItem(row: ReminderRow) -> impl IntoView {
    let ctx = use_form_context();
    let index = row.index;
    let current_unit = row.unit;

    view! {
        <div class="reminder-row">
            <input
                class="reminder-amount"
                type="number"
                min="0"
                step="1"
                value=row.amount_text
                on:input=move |ev| ctx.dispatch(FormEvent::ReminderAmountChanged {
                    index,
                    value: event_target_value(&ev),
                })
            />
            <select
                class="reminder-unit"
                on:change=move |ev| ctx.dispatch(FormEvent::ReminderUnitChanged {
                    index,
                    unit: event_target_value(&ev),
                })
            >
                {ReminderUnit::ALL.into_iter().map(|unit| {
                    view! {
                        <option value=unit.as_str() selected={current_unit == unit.as_str()}>
                            {unit.as_str()}
                        </option>
                    }
                }).collect_view()}
            </select>
            <span>"before"</span>
            <button
                type="button"
                class="delete-btn"
                title="Remove notification"
                on:click=move |_| ctx.dispatch(FormEvent::ReminderRemoved(index))
            >
                "✕"
            </button>
        </div>
    }
}
