//! Domain error types for server operations.
//!
//! Server functions log the detailed error and hand the browser a
//! user-safe `ServerFnError` produced by `into_server_error`.

use leptos::server_fn::error::ServerFnError;
use std::fmt;

/// Errors while building the application state.
#[derive(Debug)]
pub enum StartupError {
    /// The shared HTTP client could not be built.
    HttpClient { details: String },
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HttpClient { details } => {
                write!(f, "failed to build HTTP client: {}", details)
            }
        }
    }
}

impl std::error::Error for StartupError {}

/// Chat-related errors.
#[derive(Debug)]
pub enum ChatError {
    /// The conversation sent by the browser could not be parsed.
    InvalidConversation { details: String },
    /// Login is required but the request carried no usable token.
    NotAuthenticated { details: String },
    /// The answer-generation service failed.
    AnswerServiceFailed { details: String },
    /// The application state was not available to the server function.
    StateUnavailable { details: String },
}

impl fmt::Display for ChatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConversation { details } => {
                write!(f, "invalid conversation: {}", details)
            }
            Self::NotAuthenticated { details } => {
                write!(f, "not authenticated: {}", details)
            }
            Self::AnswerServiceFailed { details } => {
                write!(f, "answer service failed: {}", details)
            }
            Self::StateUnavailable { details } => {
                write!(f, "application state unavailable: {}", details)
            }
        }
    }
}

impl ChatError {
    /// Convert to a user-safe ServerFnError.
    pub fn into_server_error(self) -> ServerFnError {
        match &self {
            ChatError::InvalidConversation { .. } => ServerFnError::new("Invalid conversation"),
            ChatError::NotAuthenticated { .. } => ServerFnError::new("Not authenticated"),
            ChatError::AnswerServiceFailed { .. } => {
                ServerFnError::new("Failed to get an answer. Please try again.")
            }
            ChatError::StateUnavailable { .. } => ServerFnError::new("Server error"),
        }
    }
}
