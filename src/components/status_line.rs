//! Status Line Component

use leptos::prelude::*;

use crate::context::use_form_context;
use crate::store::FormStateStoreFields;

#[component]
pub fn StatusLine() -> impl IntoView {
    let store = use_form_context().store;

    view! {
        <p id="status" class="status" aria-live="polite">
            {move || store.status().get().text()}
        </p>
    }
}
