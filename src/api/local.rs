//! Local-only Task API
//!
//! Logs the payload instead of sending it.

use async_trait::async_trait;

use super::{SubmitError, TaskApi};
use crate::models::{SubmitReceipt, TaskPayload};

/// The payload is logged at `info`, so it only shows up in the console when
/// `TASK_LOG_LEVEL` is `info` or more verbose.
pub struct LocalTaskApi;

#[async_trait(?Send)]
impl TaskApi for LocalTaskApi {
    async fn create_task(&self, payload: &TaskPayload) -> Result<SubmitReceipt, SubmitError> {
        match serde_json::to_string_pretty(payload) {
            Ok(json) => log::info!("local submit, no request sent:\n{}", json),
            Err(e) => log::warn!("local submit, payload not serializable: {}", e),
        }
        Ok(SubmitReceipt::SavedLocally)
    }
}
