//! Supervisory restart loop for the polling task.
//!
//! Each attempt runs in its own tokio task so a panic inside the dispatcher is caught via the
//! JoinHandle. A crashed attempt is logged and restarted after a fixed delay, with no upper bound
//! on restarts. An attempt that returns normally (e.g. Ctrl-C shutdown) ends supervision.

use std::future::Future;
use std::time::Duration;
use tracing::{error, info, warn};

/// Runs `make_attempt()` until one attempt completes normally; returns the number of attempts.
pub async fn supervise<F, Fut>(restart_delay: Duration, mut make_attempt: F) -> usize
where
    F: FnMut() -> Fut,
    Fut: Future<Output = ()> + Send + 'static,
{
    let mut attempt = 0usize;
    loop {
        attempt += 1;
        info!(attempt = attempt, "step: polling attempt started");

        match tokio::spawn(make_attempt()).await {
            Ok(()) => {
                info!(attempt = attempt, "Polling stopped, supervision finished");
                return attempt;
            }
            Err(join_err) if join_err.is_panic() => {
                error!(
                    attempt = attempt,
                    error = %join_err,
                    delay_ms = restart_delay.as_millis() as u64,
                    "Polling task panicked, restarting after delay"
                );
            }
            Err(join_err) => {
                warn!(
                    attempt = attempt,
                    error = %join_err,
                    delay_ms = restart_delay.as_millis() as u64,
                    "Polling task cancelled, restarting after delay"
                );
            }
        }

        tokio::time::sleep(restart_delay).await;
    }
}
