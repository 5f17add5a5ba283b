//! Fixed-delay retry for search page requests.
//!
//! Every error is treated as transient: network failures, non-2xx statuses
//! and unparseable bodies all get another attempt. The delay between attempts
//! is constant; there is no exponential growth and no jitter.

use std::future::Future;
use std::time::Duration;

use crate::error::ScraperError;

/// Executes `operation` up to `max_attempts` times in total, sleeping `delay`
/// between consecutive attempts.
///
/// On success the result is returned immediately. After the final failed
/// attempt the last error is returned. `max_attempts` of `0` is treated as `1`.
///
/// With `max_attempts = 5` and `delay = 1s`, a request that keeps failing is
/// sent five times and takes at least four seconds to give up.
pub(crate) async fn retry_fixed<T, F, Fut>(
    max_attempts: u32,
    delay: Duration,
    mut operation: F,
) -> Result<T, ScraperError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ScraperError>>,
{
    let max_attempts = max_attempts.max(1);
    let mut attempt = 1u32;

    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) => {
                if attempt >= max_attempts {
                    return Err(err);
                }
                tracing::warn!(
                    attempt,
                    max_attempts,
                    delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
                    error = %err,
                    "search request failed, retrying after fixed delay"
                );
            }
        }

        tokio::time::sleep(delay).await;
        attempt += 1;
    }
}
