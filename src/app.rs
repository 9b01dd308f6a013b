//! Task Reminder App
//!
//! Root component: owns the form store and provides it to the form.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::TaskForm;
use crate::config::AppConfig;
use crate::context::FormContext;
use crate::store::FormState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let store = Store::new(FormState::new(config.initial_target()));
    log::debug!(
        "form mounted: mode={:?} endpoint={} presets={}",
        config.mode,
        config.endpoint,
        config.target_presets.len()
    );

    provide_context(FormContext::new(store, config));

    view! {
        <main class="app-layout">
            <h1>"New Task"</h1>
            <TaskForm />
        </main>
    }
}
