//! Per-attempt failure value.

use super::classify::classify_reqwest_error;
use super::policy::ErrorKind;

/// Why one attempt (or, after the last attempt, one name) failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FetchError {
    /// Status of the response this attempt received; `None` when no response arrived.
    pub status: Option<u16>,
    pub kind: ErrorKind,
    pub message: String,
}

impl FetchError {
    /// Response arrived with a status other than 200.
    pub fn http(status: u16) -> Self {
        Self {
            status: Some(status),
            kind: ErrorKind::Http(status),
            message: format!("HTTP error {}", status),
        }
    }

    /// Transport-level failure. `status` is set when the response line was
    /// already read (e.g. the body stream broke afterwards).
    pub fn transport(e: &reqwest::Error, status: Option<u16>) -> Self {
        Self {
            status: status.or_else(|| e.status().map(|s| s.as_u16())),
            kind: classify_reqwest_error(e),
            message: e.to_string(),
        }
    }

    /// 200 response whose body is not a JSON document.
    pub fn decode(e: &serde_json::Error, status: u16) -> Self {
        Self {
            status: Some(status),
            kind: ErrorKind::Decode,
            message: format!("invalid JSON body: {}", e),
        }
    }

    /// Writing the record to disk failed. Never retried.
    pub fn storage(e: &anyhow::Error) -> Self {
        Self {
            status: None,
            kind: ErrorKind::Storage,
            message: format!("{:#}", e),
        }
    }

    /// True when the registry answered 404, an expected and low-signal failure.
    pub fn is_not_found(&self) -> bool {
        self.status == Some(404)
    }
}
