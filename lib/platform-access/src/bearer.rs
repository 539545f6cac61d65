//! Bearer token extraction from the `Authorization` header.

use crate::error::AuthenticationError;

/// Returns the token of a `Bearer <token>` authorization header.
///
/// The scheme is matched case-insensitively and the header must contain
/// exactly two whitespace-separated parts.
///
/// # Errors
///
/// Returns `AuthorizationHeaderMissing` for an absent or blank header and
/// `InvalidHeader` for anything that is not a single bearer token.
pub fn bearer_token(header: Option<&str>) -> Result<&str, AuthenticationError> {
    let header = header.ok_or(AuthenticationError::AuthorizationHeaderMissing)?;
    let mut parts = header.split_whitespace();

    let scheme = parts
        .next()
        .ok_or(AuthenticationError::AuthorizationHeaderMissing)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(AuthenticationError::InvalidHeader {
            reason: "Authorization header must start with Bearer".to_string(),
        });
    }

    let token = parts.next().ok_or_else(|| AuthenticationError::InvalidHeader {
        reason: "Token not found".to_string(),
    })?;

    if parts.next().is_some() {
        return Err(AuthenticationError::InvalidHeader {
            reason: "Authorization header must be Bearer token".to_string(),
        });
    }

    Ok(token)
}

/// Header in which App Service authentication forwards the caller's access token.
pub const APP_SERVICE_ACCESS_TOKEN_HEADER: &str = "x-ms-token-aad-access-token";

/// Picks the token to forward on the caller's behalf.
///
/// An `Authorization` header wins when present and must be a valid bearer
/// header. Without one, the token App Service authentication injected (if
/// any) is used.
///
/// # Errors
///
/// Returns `InvalidHeader` when an `Authorization` header is present but is
/// not a single bearer token.
pub fn caller_token<'a>(
    authorization: Option<&'a str>,
    app_service_token: Option<&'a str>,
) -> Result<Option<&'a str>, AuthenticationError> {
    match bearer_token(authorization) {
        Ok(token) => Ok(Some(token)),
        Err(AuthenticationError::AuthorizationHeaderMissing) => {
            Ok(app_service_token.map(str::trim).filter(|t| !t.is_empty()))
        }
        Err(e) => Err(e),
    }
}
