//! Reminder Editor Component
//!
//! Editable reminder rows plus the hidden field mirroring them as JSON.
//! Hidden rather than unmounted outside custom mode, so the field is
//! always part of the form.

use leptos::prelude::*;

use crate::components::ReminderItem;
use crate::context::use_form_context;
use crate::models::RemindType;
use crate::reminders::{reminder_rows, serialize_reminders};
use crate::store::{FormEvent, FormStateStoreFields};

#[component]
pub fn ReminderEditor() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;

    let is_custom = move || store.remind_type().get() == RemindType::Custom;

    // Keys only change on add/remove/reset, so typing does not rebuild rows
    let rows = move || {
        let revision = store.revision().get();
        store.reminders().with(|entries| reminder_rows(revision, entries))
    };

    view! {
        <div
            id="customRemindDiv"
            class="custom-remind"
            style:display=move || if is_custom() { "block" } else { "none" }
        >
            <div id="reminderList" class="reminder-list">
                <For
                    each=rows
                    key=|row| row.key
                    children=move |row| view! { <ReminderItem row=row /> }
                />
            </div>
            <button
                id="addReminder"
                type="button"
                on:click=move |_| ctx.dispatch(FormEvent::ReminderAdded)
            >
                "+ Add notification"
            </button>
            <input
                id="remindersJson"
                name="remindersJson"
                type="hidden"
                prop:value=move || store.reminders().with(|entries| serialize_reminders(entries))
            />
        </div>
    }
}
