//! API types and error definitions.

use std::fmt;
use thiserror::Error;

/// Identifier returned by a mutating request, used to poll its completion.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OperationId(pub String);

impl From<&str> for OperationId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl AsRef<str> for OperationId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The four calls exposed by the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    ListUsers,
    CreateUser,
    DeleteUser,
    CheckStatus,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Operation::ListUsers => "fetch users",
            Operation::CreateUser => "create user",
            Operation::DeleteUser => "delete user",
            Operation::CheckStatus => "check status",
        })
    }
}

/// Errors that can occur while talking to the user service.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a non-2xx status.
    #[error("Failed to {operation}: HTTP {status}")]
    RequestFailed {
        operation: Operation,
        status: u16,
        /// Trimmed response body, when the service sent one.
        message: Option<String>,
    },

    /// Connection, timeout or protocol failure.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Malformed response body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Failed to {0}: empty operation id")]
    MissingOperationId(Operation),
}

impl ApiError {
    /// The message the service put in an error response, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::RequestFailed { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

/// Result type for API calls.
pub type ApiResult<T> = Result<T, ApiError>;
