//! Error types for the platform-access crate.
//!
//! `AuthenticationError` covers both reading the caller's bearer token and
//! resolving the signed-in user from the identity endpoint. The user
//! resolver collapses every variant to the anonymous display name, but the
//! variants stay distinct so logs can tell "not signed in" apart from
//! "identity endpoint unreachable".

use std::fmt;

/// Errors from authentication operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthenticationError {
    /// No `Authorization` header on the request.
    AuthorizationHeaderMissing,
    /// The `Authorization` header is not a single bearer token.
    InvalidHeader { reason: String },
    /// The identity endpoint could not be reached.
    EndpointUnreachable { endpoint: String, reason: String },
    /// The identity endpoint answered with a non-success status.
    EndpointStatus { endpoint: String, status: u16 },
    /// The identity endpoint returned something other than access-token records.
    MalformedResponse { reason: String },
    /// The identity endpoint returned no access-token records.
    NoAccessToken,
}

impl AuthenticationError {
    /// Short machine-readable code, used as a structured log field.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::AuthorizationHeaderMissing => "authorization_header_missing",
            Self::InvalidHeader { .. } => "invalid_header",
            Self::EndpointUnreachable { .. } => "endpoint_unreachable",
            Self::EndpointStatus { .. } => "endpoint_status",
            Self::MalformedResponse { .. } => "malformed_response",
            Self::NoAccessToken => "no_access_token",
        }
    }

    /// Returns true when the failure means the caller is simply not signed in,
    /// as opposed to the identity endpoint misbehaving.
    #[must_use]
    pub const fn is_unauthenticated(&self) -> bool {
        match self {
            Self::AuthorizationHeaderMissing | Self::NoAccessToken => true,
            Self::EndpointStatus { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }
}

impl fmt::Display for AuthenticationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthorizationHeaderMissing => {
                write!(f, "Authorization header is expected")
            }
            Self::InvalidHeader { reason } => {
                write!(f, "invalid authorization header: {reason}")
            }
            Self::EndpointUnreachable { endpoint, reason } => {
                write!(f, "identity endpoint '{endpoint}' unreachable: {reason}")
            }
            Self::EndpointStatus { endpoint, status } => {
                write!(f, "identity endpoint '{endpoint}' returned status {status}")
            }
            Self::MalformedResponse { reason } => {
                write!(f, "malformed identity response: {reason}")
            }
            Self::NoAccessToken => {
                write!(f, "identity endpoint returned no access token")
            }
        }
    }
}

impl std::error::Error for AuthenticationError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_missing_display() {
        let err = AuthenticationError::AuthorizationHeaderMissing;
        assert!(err.to_string().contains("Authorization header is expected"));
        assert_eq!(err.code(), "authorization_header_missing");
    }

    #[test]
    fn invalid_header_display() {
        let err = AuthenticationError::InvalidHeader {
            reason: "Token not found".to_string(),
        };
        assert!(err.to_string().contains("Token not found"));
        assert_eq!(err.code(), "invalid_header");
    }

    #[test]
    fn endpoint_unreachable_display() {
        let err = AuthenticationError::EndpointUnreachable {
            endpoint: "http://localhost/.auth/me".to_string(),
            reason: "connection refused".to_string(),
        };
        assert!(err.to_string().contains("/.auth/me"));
        assert!(err.to_string().contains("connection refused"));
        assert!(!err.is_unauthenticated());
    }

    #[test]
    fn unauthenticated_classification() {
        assert!(AuthenticationError::NoAccessToken.is_unauthenticated());
        assert!(
            AuthenticationError::EndpointStatus {
                endpoint: "e".to_string(),
                status: 401,
            }
            .is_unauthenticated()
        );
        assert!(
            !AuthenticationError::EndpointStatus {
                endpoint: "e".to_string(),
                status: 502,
            }
            .is_unauthenticated()
        );
        assert!(
            !AuthenticationError::MalformedResponse {
                reason: "x".to_string(),
            }
            .is_unauthenticated()
        );
    }
}
