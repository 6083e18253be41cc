//! Observability subsystem.
//!
//! All subsystems emit `tracing` events with structured fields
//! (`operation_id`, `user_id`, `attempt`, `delay_ms`); `logging.rs` installs
//! the subscriber that renders them.

pub mod logging;

pub use logging::init_logging;
