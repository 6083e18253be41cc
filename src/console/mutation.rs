//! Create and delete.

use tokio::task::JoinHandle;

use crate::api::{OperationId, UsersApi};
use crate::console::{
    ConsoleError, PollOutcome, UserConsole, CREATE_FAILED_MESSAGE, CREATE_OK_MESSAGE,
    DELETE_FAILED_MESSAGE, DELETE_OK_MESSAGE,
};
use crate::model::UserId;
use crate::state::Action;

/// An accepted create. The poll runs on its own; `poll` is only a handle.
#[derive(Debug)]
pub struct CreateOutcome {
    pub operation_id: OperationId,
    pub poll: JoinHandle<PollOutcome>,
}

impl<A: UsersApi> UserConsole<A> {
    /// Submit the current draft.
    ///
    /// Success is reported as soon as the service accepts the request; the
    /// status poll is detached and not waited on.
    pub async fn create_user(&self) -> Result<CreateOutcome, ConsoleError> {
        let new_user = {
            let mut state = self.state.write().await;
            if state.creating {
                return Err(ConsoleError::CreateInFlight);
            }
            let problems = state.draft.validate();
            if !problems.is_empty() {
                return Err(ConsoleError::InvalidDraft(problems));
            }
            state.apply(Action::CreateStarted);
            state.draft.to_new_user()
        };

        let result = match self.api.create_user(&new_user).await {
            Ok(operation_id) => {
                tracing::info!(%operation_id, email = %new_user.email, "Create accepted");
                let poll = self.spawn_poll(operation_id.clone());
                self.dispatch(Action::CreateSucceeded).await;
                self.notifier.success(CREATE_OK_MESSAGE);
                Ok(CreateOutcome { operation_id, poll })
            }
            Err(e) => {
                tracing::error!(error = %e, "Create failed");
                self.notifier
                    .error(e.backend_message().unwrap_or(CREATE_FAILED_MESSAGE));
                Err(ConsoleError::Api(e))
            }
        };

        self.dispatch(Action::CreateSettled).await;
        result
    }

    /// Delete `id` and wait for the operation to settle.
    ///
    /// The row is marked busy up front and removed at the end whatever
    /// happened in between.
    pub async fn delete_user(&self, id: &UserId) -> Result<PollOutcome, ConsoleError> {
        self.dispatch(Action::DeleteStarted(id.clone())).await;

        let result = match self.api.delete_user(id).await {
            Ok(operation_id) => {
                tracing::info!(%operation_id, user_id = %id, "Delete accepted");
                let outcome = self.poll_operation(&operation_id).await;
                self.notifier.success(DELETE_OK_MESSAGE);
                Ok(outcome)
            }
            Err(e) => {
                tracing::error!(user_id = %id, error = %e, "Delete failed");
                self.notifier
                    .error(e.backend_message().unwrap_or(DELETE_FAILED_MESSAGE));
                Err(ConsoleError::Api(e))
            }
        };

        self.dispatch(Action::RowRemoved(id.clone())).await;
        result
    }
}
