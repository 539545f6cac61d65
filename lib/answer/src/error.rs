//! Error types for the answer crate.

use std::fmt;

/// Errors from talking to the answer-generation service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerError {
    /// The request could not be sent or the connection failed.
    RequestFailed { endpoint: String, details: String },
    /// The service answered with a non-success status.
    UnexpectedStatus { endpoint: String, status: u16 },
    /// The response body was not a valid answer.
    MalformedResponse { details: String },
    /// The conversation history was empty.
    EmptyConversation,
}

impl fmt::Display for AnswerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequestFailed { endpoint, details } => {
                write!(f, "request to '{endpoint}' failed: {details}")
            }
            Self::UnexpectedStatus { endpoint, status } => {
                write!(f, "'{endpoint}' returned status {status}")
            }
            Self::MalformedResponse { details } => {
                write!(f, "malformed answer: {details}")
            }
            Self::EmptyConversation => write!(f, "conversation has no messages"),
        }
    }
}

impl std::error::Error for AnswerError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unexpected_status_display() {
        let err = AnswerError::UnexpectedStatus {
            endpoint: "http://localhost:50505/chat".to_string(),
            status: 500,
        };
        assert!(err.to_string().contains("500"));
        assert!(err.to_string().contains("/chat"));
    }

    #[test]
    fn malformed_response_display() {
        let err = AnswerError::MalformedResponse {
            details: "missing field `choices`".to_string(),
        };
        assert!(err.to_string().contains("malformed answer"));
    }
}
