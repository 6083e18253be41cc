//! User service API.
//!
//! # Endpoints
//! ```text
//! GET    /users                → JSON array of users
//! POST   /users                → plain-text operation id
//! DELETE /users/{id}           → plain-text operation id
//! GET    /status/{operationId} → plain-text status
//! ```
//!
//! The console only talks to the service through [`UsersApi`], so tests can
//! drive it with an in-memory implementation.

pub mod client;
pub mod types;

use std::future::Future;

use crate::model::{NewUser, OperationStatus, User, UserId};

pub use client::HttpUsersApi;
pub use types::{ApiError, ApiResult, Operation, OperationId};

/// The four operations of the user service.
pub trait UsersApi: Send + Sync + 'static {
    fn list_users(&self) -> impl Future<Output = ApiResult<Vec<User>>> + Send;

    fn create_user(&self, user: &NewUser) -> impl Future<Output = ApiResult<OperationId>> + Send;

    fn delete_user(&self, id: &UserId) -> impl Future<Output = ApiResult<OperationId>> + Send;

    fn check_status(
        &self,
        operation_id: &OperationId,
    ) -> impl Future<Output = ApiResult<OperationStatus>> + Send;
}
