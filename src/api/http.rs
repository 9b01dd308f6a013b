//! HTTP Task API
//!
//! POSTs the payload as JSON and interprets the `{taskId}` / `{message}`
//! response bodies.

use async_trait::async_trait;
use serde_json::Value;

use super::{SubmitError, TaskApi};
use crate::models::{SubmitReceipt, TaskPayload};

/// Task API backed by a remote endpoint
pub struct HttpTaskApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpTaskApi {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait(?Send)]
impl TaskApi for HttpTaskApi {
    async fn create_task(&self, payload: &TaskPayload) -> Result<SubmitReceipt, SubmitError> {
        log::debug!("POST {}", self.endpoint);
        // `json` sets Content-Type: application/json
        let resp = self.client.post(&self.endpoint).json(payload).send().await?;
        let status = resp.status().as_u16();
        // An unreadable body is handled like an empty one
        let body = resp.text().await.unwrap_or_default();
        parse_response(status, &body)
    }
}

/// Interpret a task API response
///
/// Any non-2xx status is a rejection whatever the body says. A body that is
/// not a JSON object counts as `{}`.
pub fn parse_response(status: u16, body: &str) -> Result<SubmitReceipt, SubmitError> {
    let data = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(map)) => map,
        _ => Default::default(),
    };

    if !(200..300).contains(&status) {
        return Err(SubmitError::Rejected {
            status,
            message: data.get("message").and_then(field_text),
        });
    }

    Ok(SubmitReceipt::Created {
        task_id: data.get("taskId").and_then(field_text),
    })
}

// Empty strings and nulls count as absent
fn field_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_with_task_id() {
        let receipt = parse_response(200, r#"{"taskId":"abc123","messageTs":"1.2"}"#).unwrap();
        assert_eq!(receipt, SubmitReceipt::Created { task_id: Some("abc123".into()) });
    }

    #[test]
    fn test_success_without_body() {
        assert_eq!(parse_response(201, "").unwrap(), SubmitReceipt::Created { task_id: None });
        assert_eq!(
            parse_response(200, r#"{"taskId":""}"#).unwrap(),
            SubmitReceipt::Created { task_id: None }
        );
    }

    #[test]
    fn test_rejection_with_message() {
        let err = parse_response(400, r#"{"message":"bad date"}"#).unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 400, message: Some("bad date".into()) });
        assert_eq!(err.to_string(), "bad date");
    }

    #[test]
    fn test_rejection_ignores_task_id() {
        let err = parse_response(500, r#"{"taskId":"abc123"}"#).unwrap_err();
        assert_eq!(err.to_string(), "Request failed");
    }

    #[test]
    fn test_rejection_with_unparsable_body() {
        let err = parse_response(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, SubmitError::Rejected { status: 502, message: None });
    }

    #[test]
    fn test_non_object_body_is_empty() {
        let receipt = parse_response(200, r#"["abc123"]"#).unwrap();
        assert_eq!(receipt, SubmitReceipt::Created { task_id: None });
    }
}
