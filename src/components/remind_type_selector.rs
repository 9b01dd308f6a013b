//! Reminder Mode Selector Component

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::models::{RemindType, REMIND_TYPES};
use crate::store::{FormEvent, FormStateStoreFields};

/// Default reminders vs. a custom list
#[component]
pub fn RemindTypeSelector() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;

    let on_change = move |ev: web_sys::Event| {
        match event_target_value(&ev).parse::<RemindType>() {
            Ok(remind_type) => ctx.dispatch(FormEvent::RemindTypeChanged(remind_type)),
            Err(e) => log::warn!("{}", e),
        }
    };

    view! {
        <label for="remind">"Reminders"</label>
        <select id="remind" name="remindSelect" on:change=on_change>
            {REMIND_TYPES.iter().map(|(value, label)| {
                let selected = move || store.remind_type().get().as_str() == *value;
                view! {
                    <option value={*value} prop:selected=selected>{*label}</option>
                }
            }).collect_view()}
        </select>
    }
}
