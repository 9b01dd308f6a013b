//! Submit Errors

use thiserror::Error;

/// Fallback when a rejection carries no server message
pub const DEFAULT_FAILURE: &str = "Request failed";

/// Why a submission did not produce a task
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The request never completed (offline, DNS, CORS, ...)
    #[error("{0}")]
    Transport(String),
    /// The server answered with a non-2xx status
    #[error("{}", .message.as_deref().unwrap_or(DEFAULT_FAILURE))]
    Rejected { status: u16, message: Option<String> },
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        SubmitError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejection_message() {
        let err = SubmitError::Rejected { status: 400, message: Some("bad date".into()) };
        assert_eq!(err.to_string(), "bad date");

        let err = SubmitError::Rejected { status: 502, message: None };
        assert_eq!(err.to_string(), DEFAULT_FAILURE);
    }

    #[test]
    fn test_transport_message() {
        let err = SubmitError::Transport("Failed to fetch".into());
        assert_eq!(err.to_string(), "Failed to fetch");
    }
}
