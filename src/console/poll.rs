//! Operation status polling.

use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::sleep;

use crate::api::{OperationId, UsersApi};
use crate::console::UserConsole;
use crate::model::OperationStatus;
use crate::resilience::backoff_delay;

/// Why a poll loop stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PollEnd {
    /// The service reported a status other than `Processing`.
    Settled(OperationStatus),
    /// A status query failed; treated as terminal.
    QueryFailed,
    /// `poll.max_checks` was reached while still `Processing`.
    GaveUp,
}

/// What one poll cycle did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOutcome {
    pub end: PollEnd,
    /// Status queries issued.
    pub checks: u32,
    /// Waits performed between queries, in order.
    pub waits: Vec<Duration>,
}

impl<A: UsersApi> UserConsole<A> {
    /// Poll `operation_id` until it leaves `Processing`, then reload the list.
    ///
    /// Errors are never surfaced to the user; the reload runs however the
    /// loop ended.
    pub async fn poll_operation(&self, operation_id: &OperationId) -> PollOutcome {
        let mut checks = 0;
        let mut waits = Vec::new();

        let end = loop {
            checks += 1;
            match self.api.check_status(operation_id).await {
                Ok(status) if status.is_terminal() => {
                    tracing::info!(%operation_id, %status, checks, "Operation settled");
                    break PollEnd::Settled(status);
                }
                Ok(_) => {}
                Err(e) => {
                    tracing::warn!(%operation_id, error = %e, "Error checking status");
                    break PollEnd::QueryFailed;
                }
            }

            if self.poll.max_checks.is_some_and(|max| checks >= max) {
                tracing::warn!(%operation_id, checks, "Operation still processing, giving up");
                break PollEnd::GaveUp;
            }

            let delay = backoff_delay(checks, self.poll.initial_delay_ms, self.poll.max_delay_ms);
            tracing::debug!(%operation_id, delay_ms = delay.as_millis() as u64, "Operation processing");
            sleep(delay).await;
            waits.push(delay);
        };

        self.load_users().await;
        PollOutcome { end, checks, waits }
    }

    /// Run `poll_operation` as a detached task.
    ///
    /// Nothing awaits the handle inside the console; dropping it leaves the
    /// task running.
    pub fn spawn_poll(&self, operation_id: OperationId) -> JoinHandle<PollOutcome> {
        let console = self.clone();
        tokio::spawn(async move { console.poll_operation(&operation_id).await })
    }
}
