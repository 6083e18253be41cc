//! User management console.
//!
//! # Data Flow
//! ```text
//! start ──▶ load.rs (list, retry with backoff) ──▶ UsersState
//!
//! create ──▶ POST /users ──▶ operation id ──▶ spawn poll (detached)
//! delete ──▶ mark busy ──▶ DELETE /users/{id} ──▶ await poll ──▶ remove row
//!
//! poll.rs: GET /status/{id} while "Processing", doubling the wait,
//!          then reload the list once
//! ```
//!
//! State is shared behind an `RwLock`; overlapping reloads are
//! last-writer-wins.

mod load;
mod mutation;
pub mod notify;
mod poll;

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;

use crate::api::{ApiError, UsersApi};
use crate::config::{ConsoleConfig, LoadConfig, PollConfig};
use crate::model::{Field, FieldError};
use crate::state::{Action, UsersState};

pub use mutation::CreateOutcome;
pub use notify::{Level, Notification, Notifier};
pub use poll::{PollEnd, PollOutcome};

pub const LOAD_FAILED_MESSAGE: &str = "Server issues while loading users!";
pub const CREATE_OK_MESSAGE: &str = "User created successfully!";
pub const CREATE_FAILED_MESSAGE: &str = "Error creating user!";
pub const DELETE_OK_MESSAGE: &str = "User deleted successfully!";
pub const DELETE_FAILED_MESSAGE: &str = "Error deleting user!";

/// Errors returned by console actions.
#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Draft is invalid: {0:?}")]
    InvalidDraft(Vec<(Field, FieldError)>),

    #[error("A create request is already in flight")]
    CreateInFlight,

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Load and mutation/poll controllers over a shared `UsersState`.
pub struct UserConsole<A> {
    api: Arc<A>,
    state: Arc<RwLock<UsersState>>,
    notifier: Notifier,
    load: LoadConfig,
    poll: PollConfig,
}

impl<A> Clone for UserConsole<A> {
    fn clone(&self) -> Self {
        Self {
            api: Arc::clone(&self.api),
            state: Arc::clone(&self.state),
            notifier: self.notifier.clone(),
            load: self.load.clone(),
            poll: self.poll.clone(),
        }
    }
}

impl<A: UsersApi> UserConsole<A> {
    pub fn new(api: Arc<A>, config: &ConsoleConfig, notifier: Notifier) -> Self {
        Self {
            api,
            state: Arc::new(RwLock::new(UsersState::default())),
            notifier,
            load: config.load.clone(),
            poll: config.poll.clone(),
        }
    }

    /// Initial load, as done when the console comes up.
    pub async fn start(&self) -> bool {
        self.load_users().await
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> UsersState {
        self.state.read().await.clone()
    }

    pub async fn edit(&self, field: Field, value: impl Into<String>) {
        self.dispatch(Action::DraftEdited(field, value.into())).await;
    }

    pub async fn blur(&self, field: Field) {
        self.dispatch(Action::FieldBlurred(field)).await;
    }

    async fn dispatch(&self, action: Action) {
        self.state.write().await.apply(action);
    }
}
