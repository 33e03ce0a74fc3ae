//! Wall-clock budget for a whole submission.

use std::{future::Future, time::Duration};

use crate::server::error::submission::SubmissionError;

/// Runs `fut` to completion unless `budget` elapses first.
///
/// On expiry the future is dropped, abandoning any upload or insert still in flight.
///
/// # Returns
/// - `Ok(T)` / `Err(SubmissionError)` - Outcome of `fut` when it finished in time
/// - `Err(SubmissionError::Timeout)` - Budget elapsed first
pub async fn guard<F, T>(budget: Duration, fut: F) -> Result<T, SubmissionError>
where
    F: Future<Output = Result<T, SubmissionError>>,
{
    match tokio::time::timeout(budget, fut).await {
        Ok(result) => result,
        Err(_) => Err(SubmissionError::Timeout(budget)),
    }
}
