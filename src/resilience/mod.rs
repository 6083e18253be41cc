//! Resilience helpers.
//!
//! # Data Flow
//! ```text
//! list load failure      → backoff.rs (delay before the next attempt)
//! status "Processing"    → backoff.rs (delay before the next check)
//! ```

pub mod backoff;

pub use backoff::backoff_delay;
