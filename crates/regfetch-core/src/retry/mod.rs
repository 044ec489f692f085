//! Retry policy and per-attempt error classification.
//!
//! Every failed attempt is turned into a [`FetchError`] value carrying the
//! HTTP status (if a response arrived), an [`ErrorKind`] and the error text.
//! The retry loop inspects that value; nothing is thrown or panicked.

mod classify;
mod error;
mod policy;
mod run;

pub use classify::classify_reqwest_error;
pub use error::FetchError;
pub use policy::{ErrorKind, RetryDecision, RetryPolicy};
pub use run::run_with_retry;
