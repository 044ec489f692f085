//! Retry loop: run an async attempt until success or policy says stop.

use std::future::Future;

use super::error::FetchError;
use super::policy::{RetryDecision, RetryPolicy};

/// Runs `attempt` until it succeeds or the retry policy says to stop.
/// On retryable failure, sleeps for the policy delay then tries again; the
/// sleep suspends only this task.
///
/// The closure receives the 1-based attempt number. On give-up the error of
/// the last attempt is returned together with the number of attempts made.
pub async fn run_with_retry<T, F, Fut>(
    policy: &RetryPolicy,
    mut attempt: F,
) -> Result<T, (FetchError, u32)>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = Result<T, FetchError>>,
{
    let mut n = 1u32;
    loop {
        match attempt(n).await {
            Ok(v) => return Ok(v),
            Err(e) => match policy.decide(n, e.kind) {
                RetryDecision::NoRetry => return Err((e, n)),
                RetryDecision::RetryAfter(d) => {
                    tracing::debug!(attempt = n, error = %e, "attempt failed, retrying");
                    tokio::time::sleep(d).await;
                    n += 1;
                }
            },
        }
    }
}
