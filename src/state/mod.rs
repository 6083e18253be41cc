//! Console state and its reducer.
//!
//! # Data Flow
//! ```text
//! controller step
//!     → Action
//!     → UsersState::apply (the only place state changes)
//!     → snapshot read by the CLI / tests
//! ```
//!
//! The user list is only ever replaced wholesale by `LoadSucceeded`; the
//! busy marker and the post-delete removal are the only local edits.

use crate::model::{Draft, Field, Touched, User, UserId, UserRow};

/// Everything the console keeps between actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersState {
    /// Cached users; `None` until a load succeeds.
    pub users: Option<Vec<UserRow>>,
    /// True until the first load attempt sequence settles.
    pub loading_users: bool,
    /// True while a create request is in flight.
    pub creating: bool,
    pub draft: Draft,
    pub touched: Touched,
}

impl Default for UsersState {
    fn default() -> Self {
        Self {
            users: None,
            loading_users: true,
            creating: false,
            draft: Draft::default(),
            touched: Touched::default(),
        }
    }
}

/// State transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    LoadSucceeded(Vec<User>),
    LoadFailed,
    DraftEdited(Field, String),
    FieldBlurred(Field),
    CreateStarted,
    CreateSucceeded,
    CreateSettled,
    DeleteStarted(UserId),
    RowRemoved(UserId),
}

impl UsersState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadSucceeded(users) => {
                self.users = Some(users.into_iter().map(UserRow::from).collect());
                self.loading_users = false;
            }
            Action::LoadFailed => {
                self.loading_users = false;
            }
            Action::DraftEdited(field, value) => {
                self.draft.set(field, value);
            }
            Action::FieldBlurred(field) => {
                self.touched.mark(field);
            }
            Action::CreateStarted => {
                self.creating = true;
            }
            Action::CreateSucceeded => {
                self.draft = Draft::default();
                self.touched = Touched::default();
            }
            Action::CreateSettled => {
                self.creating = false;
            }
            Action::DeleteStarted(id) => {
                if let Some(row) = self.row_mut(&id) {
                    row.busy = true;
                }
            }
            Action::RowRemoved(id) => {
                if let Some(users) = self.users.as_mut() {
                    users.retain(|row| row.user.id != id);
                }
            }
        }
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.creating && self.draft.is_valid()
    }

    /// The validation message to show under `field`, if any.
    pub fn field_error(&self, field: Field) -> Option<String> {
        self.draft.error_message(field, &self.touched)
    }

    pub fn row(&self, id: &UserId) -> Option<&UserRow> {
        self.users.as_ref()?.iter().find(|row| &row.user.id == id)
    }

    fn row_mut(&mut self, id: &UserId) -> Option<&mut UserRow> {
        self.users.as_mut()?.iter_mut().find(|row| &row.user.id == id)
    }
}
