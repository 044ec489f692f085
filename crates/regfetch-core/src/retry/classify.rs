//! Classify reqwest errors into retry policy error kinds.

use crate::retry::policy::ErrorKind;

/// Classify a reqwest error for retry decisions and reporting.
pub fn classify_reqwest_error(e: &reqwest::Error) -> ErrorKind {
    if e.is_timeout() {
        return ErrorKind::Timeout;
    }
    if e.is_connect() || e.is_request() {
        return ErrorKind::Connection;
    }
    if e.is_body() || e.is_decode() {
        return ErrorKind::Body;
    }
    ErrorKind::Other
}
