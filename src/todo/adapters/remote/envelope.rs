//! Request/response envelope shared by every remote endpoint.

use crate::todo::ports::{TodoRepositoryError, TodoRepositoryResult};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Response envelope returned by the remote todo service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    /// Whether the request succeeded.
    pub success: bool,
    /// Payload of a successful request.
    pub data: Option<T>,
    /// Failure description.
    pub error: Option<String>,
    /// Informational message.
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Converts the envelope into its payload.
    ///
    /// # Errors
    ///
    /// Returns [`TodoRepositoryError::Rejected`] when the envelope reports
    /// failure with an `error` or `message`, and
    /// [`TodoRepositoryError::Transport`] when it reports failure without
    /// either.
    pub fn into_result(self) -> TodoRepositoryResult<Option<T>> {
        if self.success {
            return Ok(self.data);
        }
        match self.error.or(self.message) {
            Some(reason) => Err(TodoRepositoryError::Rejected(reason)),
            None => Err(TodoRepositoryError::Transport(
                "remote service reported failure without a reason".to_owned(),
            )),
        }
    }
}

/// Decodes a response body into its payload according to the status code.
pub(super) fn decode<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> TodoRepositoryResult<Option<T>> {
    match serde_json::from_str::<ApiEnvelope<T>>(body) {
        Ok(envelope) if status.is_success() => envelope.into_result(),
        Ok(envelope) => match envelope.error.or(envelope.message) {
            Some(reason) => Err(TodoRepositoryError::Rejected(reason)),
            None => Err(TodoRepositoryError::Transport(format!(
                "unexpected status {status}"
            ))),
        },
        Err(err) if status.is_success() => Err(TodoRepositoryError::Transport(format!(
            "malformed response body: {err}"
        ))),
        Err(_) => Err(TodoRepositoryError::Transport(format!(
            "unexpected status {status}"
        ))),
    }
}

/// Decodes a response that must carry a payload.
pub(super) fn decode_required<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
) -> TodoRepositoryResult<T> {
    decode(status, body)?.ok_or_else(|| {
        TodoRepositoryError::Transport("response envelope is missing its data".to_owned())
    })
}
