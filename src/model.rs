// Core structs: ApiResponse, ErrorInfo, payload types
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error code attached to failed analytics fetches.
pub const ANALYTICS_ERROR: &str = "ANALYTICS_ERROR";
/// Error code attached to failed content operations.
pub const SERVICE_ERROR: &str = "SERVICE_ERROR";

pub const ANALYTICS_FALLBACK_MESSAGE: &str = "Failed to fetch analytics data";
pub const CONTENT_FALLBACK_MESSAGE: &str = "Content service request failed";

/// Uniform envelope returned by every admin service call.
///
/// Exactly one of `data` / `error` is set, selected by `success`. The
/// timestamp is taken when the envelope is built, not when the remote call
/// started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorInfo>,
    pub timestamp: DateTime<Utc>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            timestamp: Utc::now(),
        }
    }

    pub fn failure(code: &str, err: &ApiError, fallback: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ErrorInfo::from_failure(code, err, fallback)),
            timestamp: Utc::now(),
        }
    }
}

/// Normalized error details carried inside a failure envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

impl ErrorInfo {
    /// Projects a remote-call failure into envelope error details.
    ///
    /// The message is diagnostic text, not meant to be parsed. Failures that
    /// carry no message of their own get the operation's fallback literal.
    pub fn from_failure(code: &str, err: &ApiError, fallback: &str) -> Self {
        let message = match err {
            ApiError::Http(msg) | ApiError::Decode(msg) => msg.clone(),
            ApiError::Status(status) => format!("unexpected status {}", status),
            ApiError::Timeout => fallback.to_string(),
        };
        Self {
            code: code.to_string(),
            message,
        }
    }
}

/// Opaque analytics payload. The backend owns its shape; this client only
/// carries it through.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalyticsData(pub serde_json::Value);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    pub status: String,
    pub updated_at: DateTime<Utc>,
}

/// Everything the remote call can do wrong, collapsed to the shapes the
/// envelope normalization cares about.
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("http error: {0}")]
    Http(String),
    #[error("unexpected status {0}")]
    Status(u16),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("request timed out")]
    Timeout,
}
