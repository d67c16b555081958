use serde::{Deserialize, Serialize};

/// JSON payload returned by the ping/pong endpoints.
///
/// Built fresh for every request and serialized immediately. The `code`
/// field mirrors the HTTP status actually written; both are derived from
/// the same value at the construction site so they cannot diverge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponsePayload {
    /// Response message (`"pong"` for ping requests, `"ping"` for pong).
    pub message: String,
    /// HTTP status code, duplicated into the body.
    pub code: u16,
    /// API version tag. Only present in the versioned variant of the
    /// service; the base variant omits the key entirely.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
}

impl ResponsePayload {
    /// Build a payload carrying the given status code in the body.
    pub fn new(message: impl Into<String>, code: u16, api_version: Option<String>) -> Self {
        Self {
            message: message.into(),
            code,
            api_version,
        }
    }
}
