//! Task Form Component
//!
//! Task fields, target and reminder selectors, submit button and status.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ReminderEditor, RemindTypeSelector, StatusLine, TargetSelector};
use crate::context::use_form_context;
use crate::store::{FormEvent, FormStateStoreFields};
use crate::submit;

/// The task creation form
#[component]
pub fn TaskForm() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;

    let is_submitting = move || store.status().get().is_in_flight();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        // One request at a time
        let Some(payload) = submit::begin_submit(&store.get_untracked()) else {
            return;
        };
        ctx.dispatch(FormEvent::SubmitStarted);

        let api = ctx.task_api();
        spawn_local(async move {
            let result = submit::submit_payload(api.as_ref(), payload).await;
            ctx.dispatch(FormEvent::SubmitFinished(result));
        });
    };

    view! {
        <form id="infoForm" class="task-form" on:submit=on_submit>
            <label for="task">"Task"</label>
            <input
                id="task"
                name="task"
                type="text"
                required
                prop:value=move || store.task().get()
                on:input=move |ev| ctx.dispatch(FormEvent::TaskChanged(event_target_value(&ev)))
            />

            <label for="description">"Description"</label>
            <textarea
                id="description"
                name="description"
                rows="3"
                prop:value=move || store.description().get()
                on:input=move |ev| ctx.dispatch(FormEvent::DescriptionChanged(event_target_value(&ev)))
            ></textarea>

            <label for="dueDate">"Due"</label>
            <input
                id="dueDate"
                name="dueDate"
                type="datetime-local"
                required
                prop:value=move || store.due_date().get()
                on:input=move |ev| ctx.dispatch(FormEvent::DueDateChanged(event_target_value(&ev)))
            />

            <TargetSelector />

            <RemindTypeSelector />
            <ReminderEditor />

            <button type="submit" disabled=is_submitting>
                {move || if is_submitting() { "Submitting..." } else { "Create task" }}
            </button>

            <StatusLine />
        </form>
    }
}
