//! Error Types
//!
//! `ApiError` describes what went wrong talking to the list service;
//! `Failure` is the flat message the remote view shows.

use thiserror::Error;

/// Result type for list service calls
pub type ApiResult<T> = Result<T, ApiError>;

/// Transport-level errors from the list service
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// 404 from the service
    #[error("not found")]
    NotFound,
    /// Any other non-2xx status
    #[error("unexpected status {0}")]
    Status(u16),
    /// Request never produced a response
    #[error("transport error: {0}")]
    Transport(String),
    /// Response body was not the expected JSON
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn from_status(status: u16) -> Self {
        if status == 404 {
            ApiError::NotFound
        } else {
            ApiError::Status(status)
        }
    }

    /// True when the server answered, just not with a 2xx
    pub fn is_status(&self) -> bool {
        matches!(self, ApiError::NotFound | ApiError::Status(_))
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ApiError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            ApiError::from_status(status.as_u16())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// User-facing failure, one fixed message per operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Failure {
    #[error("Failed to create user")]
    CreateUser,
    #[error("Failed to load todos")]
    LoadTodos,
    #[error("Failed to add todo")]
    AddTodo,
    #[error("Failed to delete todo")]
    DeleteTodo,
    #[error("Failed to clear all todos")]
    ClearAll,
}
