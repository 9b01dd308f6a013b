//! Application Context
//!
//! Shared form handle provided via Leptos Context API.

use std::rc::Rc;

use leptos::prelude::*;

use crate::api::TaskApi;
use crate::config::AppConfig;
use crate::store::{dispatch, FormEvent, FormStore};

/// Form-wide handles provided via context
#[derive(Clone, Copy)]
pub struct FormContext {
    /// Form state - read through field accessors, write through `dispatch`
    pub store: FormStore,
    config: StoredValue<AppConfig>,
    /// Built once per mount, shared by every submit
    api: StoredValue<Rc<dyn TaskApi>, LocalStorage>,
}

impl FormContext {
    pub fn new(store: FormStore, config: AppConfig) -> Self {
        let api: Rc<dyn TaskApi> = Rc::from(config.task_api());
        Self {
            store,
            config: StoredValue::new(config),
            api: StoredValue::new_local(api),
        }
    }

    /// Apply an event to the form state
    pub fn dispatch(&self, event: FormEvent) {
        dispatch(self.store, event);
    }

    pub fn config(&self) -> AppConfig {
        self.config.get_value()
    }

    pub fn task_api(&self) -> Rc<dyn TaskApi> {
        self.api.get_value()
    }
}

/// Get the form context
pub fn use_form_context() -> FormContext {
    expect_context::<FormContext>()
}
