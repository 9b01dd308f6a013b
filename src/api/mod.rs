//! Task API
//!
//! Frontend bindings to the task-creation endpoint, plus the local-only
//! stand-in used when no request should leave the page.

mod error;
mod http;
mod local;

use async_trait::async_trait;

use crate::models::{SubmitReceipt, TaskPayload};

pub use error::SubmitError;
pub use http::{parse_response, HttpTaskApi};
pub use local::LocalTaskApi;

/// Creates tasks from a submitted form
///
/// Futures are not `Send`: on wasm32 they wrap browser fetch promises.
#[async_trait(?Send)]
pub trait TaskApi {
    /// Send exactly one creation request for `payload`
    async fn create_task(&self, payload: &TaskPayload) -> Result<SubmitReceipt, SubmitError>;
}
