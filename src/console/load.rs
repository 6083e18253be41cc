//! Load controller: fetch the user list with a short retry.

use tokio::time::sleep;

use crate::api::UsersApi;
use crate::console::{UserConsole, LOAD_FAILED_MESSAGE};
use crate::resilience::backoff_delay;
use crate::state::Action;

impl<A: UsersApi> UserConsole<A> {
    /// Fetch the full list and replace the cached one.
    ///
    /// Retries up to `load.max_attempts` in total, doubling the delay from
    /// `load.initial_delay_ms`. Returns whether a list was stored.
    pub async fn load_users(&self) -> bool {
        let mut attempt = 1;
        loop {
            match self.api.list_users().await {
                Ok(users) => {
                    tracing::debug!(attempt, count = users.len(), "Users loaded");
                    self.dispatch(Action::LoadSucceeded(users)).await;
                    return true;
                }
                Err(e) => {
                    tracing::warn!(attempt, error = %e, "Error fetching users");
                    if attempt >= self.load.max_attempts {
                        self.notifier.error(LOAD_FAILED_MESSAGE);
                        self.dispatch(Action::LoadFailed).await;
                        return false;
                    }
                    let delay = backoff_delay(attempt, self.load.initial_delay_ms, None);
                    tracing::debug!(attempt, delay_ms = delay.as_millis() as u64, "Retrying user list");
                    sleep(delay).await;
                    attempt += 1;
                }
            }
        }
    }
}
