//! Submit Controller
//!
//! Turns the form state into a `TaskPayload` and sends it through a
//! `TaskApi`. State transitions around the request are ordinary
//! `FormEvent`s so the same flow runs in the browser and in tests.

use crate::api::{SubmitError, TaskApi};
use crate::models::{RemindType, SubmitReceipt, TaskPayload};
use crate::reminders::sanitize;
use crate::store::FormState;

/// Assemble the request body from the current form
///
/// Reminders are only attached in custom mode, and only after sanitizing.
pub fn build_payload(state: &FormState) -> TaskPayload {
    let reminders = match state.remind_type {
        RemindType::Custom => Some(sanitize(&state.reminders)),
        RemindType::Simple => None,
    };

    TaskPayload {
        task: state.task.trim().to_string(),
        description: state.description.trim().to_string(),
        due_date: state.due_date.clone(),
        target: state.target.resolve(),
        remind_type: state.remind_type,
        reminders,
    }
}

/// Payload for a new submission, or `None` while one is still in flight
pub fn begin_submit(state: &FormState) -> Option<TaskPayload> {
    if state.status.is_in_flight() {
        log::debug!("submit ignored, request already in flight");
        return None;
    }
    Some(build_payload(state))
}

/// Send one payload and log the outcome
pub async fn submit_payload(
    api: &dyn TaskApi,
    payload: TaskPayload,
) -> Result<SubmitReceipt, SubmitError> {
    log::info!(
        "submitting task {:?} for {:?} ({} reminders)",
        payload.task,
        payload.target,
        payload.reminders.as_ref().map_or(0, Vec::len)
    );
    let result = api.create_task(&payload).await;
    match &result {
        Ok(SubmitReceipt::Created { task_id }) => log::info!("task created: {:?}", task_id),
        Ok(SubmitReceipt::SavedLocally) => log::info!("task kept locally"),
        Err(e) => log::warn!("submit failed: {}", e),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{parse_response, LocalTaskApi};
    use crate::models::{Reminder, ReminderEntry, ReminderUnit, CUSTOM_TARGET};
    use crate::store::{reduce, FormEvent, SubmitStatus, LOCAL_CONFIRMATION};
    use async_trait::async_trait;
    use std::cell::RefCell;

    /// Records payloads and answers with a canned HTTP response
    struct FakeApi {
        status: u16,
        body: &'static str,
        sent: RefCell<Vec<TaskPayload>>,
    }

    impl FakeApi {
        fn new(status: u16, body: &'static str) -> Self {
            Self { status, body, sent: RefCell::new(Vec::new()) }
        }
    }

    #[async_trait(?Send)]
    impl TaskApi for FakeApi {
        async fn create_task(&self, payload: &TaskPayload) -> Result<SubmitReceipt, SubmitError> {
            self.sent.borrow_mut().push(payload.clone());
            parse_response(self.status, self.body)
        }
    }

    struct OfflineApi;

    #[async_trait(?Send)]
    impl TaskApi for OfflineApi {
        async fn create_task(&self, _: &TaskPayload) -> Result<SubmitReceipt, SubmitError> {
            Err(SubmitError::Transport("Failed to fetch".into()))
        }
    }

    fn filled_form() -> FormState {
        [
            FormEvent::TaskChanged("  Release notes ".into()),
            FormEvent::DescriptionChanged("Draft them\n".into()),
            FormEvent::DueDateChanged("2026-10-20T17:30".into()),
        ]
        .into_iter()
        .fold(FormState::new("shao"), reduce)
    }

    /// Same sequence the form component runs
    async fn run(api: &dyn TaskApi, state: FormState) -> FormState {
        let Some(payload) = begin_submit(&state) else {
            return state;
        };
        let state = reduce(state, FormEvent::SubmitStarted);
        let result = submit_payload(api, payload).await;
        reduce(state, FormEvent::SubmitFinished(result))
    }

    #[test]
    fn test_simple_mode_has_no_reminders() {
        let mut state = filled_form();
        state.reminders = vec![ReminderEntry::default(), ReminderEntry::default()];

        let payload = build_payload(&state);
        assert_eq!(payload.task, "Release notes");
        assert_eq!(payload.description, "Draft them");
        assert_eq!(payload.due_date, "2026-10-20T17:30");
        assert_eq!(payload.target, "shao");
        assert_eq!(payload.reminders, None);

        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("reminders").is_none());
    }

    #[test]
    fn test_custom_mode_sanitizes_reminders() {
        let mut state = reduce(filled_form(), FormEvent::RemindTypeChanged(RemindType::Custom));
        state = reduce(state, FormEvent::ReminderAdded);
        state = reduce(state, FormEvent::ReminderAmountChanged { index: 1, value: "-2".into() });
        state = reduce(state, FormEvent::ReminderAdded);
        state = reduce(state, FormEvent::ReminderAmountChanged { index: 2, value: "1".into() });
        state = reduce(state, FormEvent::ReminderUnitChanged { index: 2, unit: "weeks".into() });

        let payload = build_payload(&state);
        assert_eq!(
            payload.reminders,
            Some(vec![
                Reminder { amount: 10.0, unit: ReminderUnit::Minutes },
                Reminder { amount: 1.0, unit: ReminderUnit::Weeks },
            ])
        );
    }

    #[test]
    fn test_custom_mode_keeps_empty_reminder_list() {
        let mut state = reduce(filled_form(), FormEvent::RemindTypeChanged(RemindType::Custom));
        state = reduce(state, FormEvent::ReminderAmountChanged { index: 0, value: "-5".into() });
        state = reduce(state, FormEvent::ReminderAdded);
        state = reduce(state, FormEvent::ReminderUnitChanged { index: 1, unit: "century".into() });

        let payload = build_payload(&state);
        assert_eq!(payload.reminders, Some(Vec::new()));

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["reminders"], serde_json::json!([]));
    }

    #[test]
    fn test_custom_target_is_trimmed() {
        let mut state = reduce(filled_form(), FormEvent::TargetPresetChanged(CUSTOM_TARGET.into()));
        state = reduce(state, FormEvent::TargetCustomChanged(" alice,bob ".into()));
        assert_eq!(build_payload(&state).target, "alice,bob");
    }

    #[test]
    fn test_in_flight_submit_is_ignored() {
        let state = reduce(filled_form(), FormEvent::SubmitStarted);
        assert!(begin_submit(&state).is_none());
    }

    #[tokio::test]
    async fn test_successful_submit_resets_form() {
        let api = FakeApi::new(200, r#"{"taskId":"abc123"}"#);
        let mut state = reduce(filled_form(), FormEvent::RemindTypeChanged(RemindType::Custom));
        state = reduce(state, FormEvent::TargetPresetChanged(CUSTOM_TARGET.into()));
        state = reduce(state, FormEvent::TargetCustomChanged("alice".into()));

        let state = run(&api, state).await;

        assert_eq!(state.status.text(), "Submitted! Task ID: abc123");
        assert_eq!(state.target.preset, "shao");
        assert!(!state.target.is_custom());
        assert_eq!(state.remind_type, RemindType::Simple);
        assert!(state.reminders.is_empty());
        assert!(state.task.is_empty());

        let sent = api.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].target, "alice");
        assert_eq!(sent[0].remind_type, RemindType::Custom);
    }

    #[tokio::test]
    async fn test_rejected_submit_reports_server_message() {
        let api = FakeApi::new(400, r#"{"message":"bad date"}"#);
        let state = run(&api, filled_form()).await;

        assert_eq!(state.status.text(), "Error: bad date");
        assert_eq!(state.task, "  Release notes ");
        assert_eq!(state.due_date, "2026-10-20T17:30");
    }

    #[tokio::test]
    async fn test_rejected_submit_without_message() {
        let api = FakeApi::new(500, "Internal Server Error");
        let state = run(&api, filled_form()).await;
        assert_eq!(state.status.text(), "Error: Request failed");
    }

    #[tokio::test]
    async fn test_transport_failure() {
        let state = run(&OfflineApi, filled_form()).await;
        assert_eq!(state.status.text(), "Error: Failed to fetch");
        assert!(!state.task.is_empty());
    }

    #[tokio::test]
    async fn test_success_without_task_id() {
        let api = FakeApi::new(200, "{}");
        let state = run(&api, filled_form()).await;
        assert_eq!(state.status, SubmitStatus::Submitted { task_id: None });
        assert_eq!(state.status.text(), "Submitted! Task ID: (no id returned)");
    }

    #[tokio::test]
    async fn test_local_mode_confirms_without_request() {
        let state = run(&LocalTaskApi, filled_form()).await;
        assert_eq!(state.status.text(), LOCAL_CONFIRMATION);
        assert!(state.task.is_empty());
    }
}
