use std::future::Future;
use std::time::{Duration, Instant};

use tracing::{Level, Span};

/// Root span for one poll iteration.
pub fn poll_span(symbol: &str, iteration: u64) -> Span {
    tracing::span!(Level::INFO, "poll", symbol = %symbol, iteration)
}

/// Await `fut` and emit a warning on the `performance` target when it takes
/// longer than `max`.
pub async fn warn_if_slow<F, T>(label: &'static str, max: Duration, fut: F) -> T
where
    F: Future<Output = T>,
{
    let start = Instant::now();
    let out = fut.await;
    let elapsed = start.elapsed();
    if elapsed > max {
        tracing::warn!(
            target: "performance",
            label = label,
            elapsed_ms = elapsed.as_millis() as u64,
            "slow operation detected"
        );
    }
    out
}
