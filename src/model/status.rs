//! Asynchronous operation status.

use std::fmt;

/// Status reported by `GET /status/{operationId}`.
///
/// Only `Processing` keeps a poll going; every other value, including ones
/// the client does not recognize, is terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationStatus {
    Processing,
    Completed,
    Failed,
    Other(String),
}

impl OperationStatus {
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "Processing" => Self::Processing,
            "Completed" => Self::Completed,
            "Failed" => Self::Failed,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Processing)
    }
}

impl fmt::Display for OperationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Processing => f.write_str("Processing"),
            Self::Completed => f.write_str("Completed"),
            Self::Failed => f.write_str("Failed"),
            Self::Other(raw) => f.write_str(raw),
        }
    }
}
