//! Target Selector Component
//!
//! Preset recipient dropdown with a free-text fallback.

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::models::CUSTOM_TARGET;
use crate::store::{FormEvent, FormStateStoreFields};

/// Target dropdown; "Other..." reveals a required text input
#[component]
pub fn TargetSelector() -> impl IntoView {
    let ctx = use_form_context();
    let store = ctx.store;
    let presets = ctx.config().target_presets;

    let is_custom = move || store.target().get().is_custom();

    view! {
        <label for="targetSelect">"Assign to"</label>
        <select
            id="targetSelect"
            name="targetSelect"
            on:change=move |ev| ctx.dispatch(FormEvent::TargetPresetChanged(event_target_value(&ev)))
        >
            {presets.into_iter().map(|preset| {
                let value = preset.value.clone();
                let selected = move || store.target().get().preset == value;
                view! {
                    <option value=preset.value prop:selected=selected>{preset.label}</option>
                }
            }).collect_view()}
            <option value=CUSTOM_TARGET prop:selected=is_custom>"Other..."</option>
        </select>

        <Show when=is_custom>
            <input
                id="targetCustom"
                name="targetCustom"
                type="text"
                required
                placeholder="Name or names"
                prop:value=move || store.target().get().custom
                on:input=move |ev| ctx.dispatch(FormEvent::TargetCustomChanged(event_target_value(&ev)))
            />
            <p id="targetHint" class="hint">"Separate multiple names with commas."</p>
        </Show>
    }
}
