// SPDX-License-Identifier: MPL-2.0

//! Error types for the capture view and its host application
//!
//! The capture view itself never fails on user input: disabled gestures and
//! unsupported hardware resolve to no-ops. These types only cover session
//! start-up and configuration loading, which are logged by their callers.

use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Result type alias for camera session operations
pub type SessionResult<T> = Result<T, SessionError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Camera session errors
    Session(SessionError),
    /// Configuration errors
    Config(String),
}

/// Camera session errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// No camera devices available to the session
    NoCameraFound,
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Session(e) => write!(f, "Camera session error: {}", e),
            AppError::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::NoCameraFound => write!(f, "No camera devices found"),
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for SessionError {}

impl From<SessionError> for AppError {
    fn from(err: SessionError) -> Self {
        AppError::Session(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Config(err.to_string())
    }
}
