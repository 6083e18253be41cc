//! Exponential backoff.

use std::time::Duration;

/// Delay to wait after the `attempt`-th failed try (1-based).
///
/// Starts at `base_ms` and doubles per attempt. `max_ms` caps a single delay;
/// without it the doubling only stops at `u64::MAX` milliseconds.
pub fn backoff_delay(attempt: u32, base_ms: u64, max_ms: Option<u64>) -> Duration {
    if attempt == 0 {
        return Duration::from_millis(0);
    }

    let exponential_base = 2u64.saturating_pow(attempt - 1);
    let delay_ms = base_ms.saturating_mul(exponential_base);
    let capped_delay = match max_ms {
        Some(max) => delay_ms.min(max),
        None => delay_ms,
    };

    Duration::from_millis(capped_delay)
}
