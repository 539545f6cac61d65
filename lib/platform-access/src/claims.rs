//! Signed-in user resolution from App Service access-token records.
//!
//! The token store at `/.auth/me` returns an array of access-token records,
//! each with a `user_id` and a list of typed claims. The display name is
//! picked by an ordered fallback:
//!
//! 1. the `preferred_username` claim of the first record
//! 2. the `user_id` of the first record
//! 3. the literal `"anonymous"` when anything above fails

use crate::error::AuthenticationError;
use graph_search_chat_core::UserId;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::fmt;

/// Claim type carrying the user's sign-in name.
pub const PREFERRED_USERNAME: &str = "preferred_username";

/// Display name shown when the user cannot be resolved.
pub const ANONYMOUS: &str = "anonymous";

/// A typed assertion about the signed-in identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    #[serde(default)]
    pub typ: String,
    #[serde(default)]
    pub val: Option<String>,
}

impl Claim {
    /// Creates a claim.
    #[must_use]
    pub fn new(typ: impl Into<String>, val: impl Into<String>) -> Self {
        Self {
            typ: typ.into(),
            val: Some(val.into()),
        }
    }
}

/// One record from the token store.
///
/// Only the fields the display name is picked from are modeled, and both may
/// be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessToken {
    #[serde(default)]
    pub user_id: Option<UserId>,
    #[serde(default)]
    pub user_claims: Vec<Claim>,
}

impl AccessToken {
    /// Returns the value of the first claim of the given type.
    #[must_use]
    pub fn claim(&self, typ: &str) -> Option<&str> {
        self.user_claims
            .iter()
            .find(|claim| claim.typ == typ)
            .and_then(|claim| claim.val.as_deref())
    }
}

/// Where a resolved display name came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginUser {
    /// Taken from the `preferred_username` claim.
    PreferredUsername(String),
    /// No such claim; the record's user id is shown instead.
    UserId(UserId),
}

impl LoginUser {
    /// Returns the name to display.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::PreferredUsername(name) => name,
            Self::UserId(id) => id.as_str(),
        }
    }
}

/// Picks the display name from token store records.
///
/// Only the first record is consulted.
///
/// # Errors
///
/// Returns `NoAccessToken` when there are no records and `MalformedResponse`
/// when the first record has neither a `preferred_username` value nor a
/// `user_id`.
pub fn resolve_login_user(tokens: &[AccessToken]) -> Result<LoginUser, AuthenticationError> {
    let first = tokens.first().ok_or(AuthenticationError::NoAccessToken)?;
    if let Some(name) = first.claim(PREFERRED_USERNAME) {
        return Ok(LoginUser::PreferredUsername(name.to_string()));
    }
    first
        .user_id
        .clone()
        .map(LoginUser::UserId)
        .ok_or_else(|| AuthenticationError::MalformedResponse {
            reason: "first record has no preferred_username claim or user_id".to_string(),
        })
}

/// Reads the first of the raw token store records.
///
/// Later records are never looked at, so they may have any shape.
///
/// # Errors
///
/// Returns `NoAccessToken` for an empty list and `MalformedResponse` when the
/// first record is not an access-token object.
pub fn first_access_token(records: &[JsonValue]) -> Result<AccessToken, AuthenticationError> {
    let first = records.first().ok_or(AuthenticationError::NoAccessToken)?;
    AccessToken::deserialize(first).map_err(|e| AuthenticationError::MalformedResponse {
        reason: e.to_string(),
    })
}

/// Picks the display name from raw token store records.
///
/// # Errors
///
/// See [`first_access_token`] and [`resolve_login_user`].
pub fn resolve_login_user_from_records(
    records: &[JsonValue],
) -> Result<LoginUser, AuthenticationError> {
    let first = first_access_token(records)?;
    resolve_login_user(std::slice::from_ref(&first))
}

/// Parses a raw token store response and picks the display name.
///
/// # Errors
///
/// Returns `MalformedResponse` when the body is not a JSON array or its first
/// record cannot be read, and `NoAccessToken` when the array is empty.
pub fn resolve_login_user_from_json(body: &[u8]) -> Result<LoginUser, AuthenticationError> {
    let records: Vec<JsonValue> =
        serde_json::from_slice(body).map_err(|e| AuthenticationError::MalformedResponse {
            reason: e.to_string(),
        })?;
    resolve_login_user_from_records(&records)
}

/// Display state of the header's user slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoginState {
    /// Resolution has not finished; nothing is shown.
    #[default]
    Loading,
    /// A name was resolved.
    Resolved(String),
    /// Resolution failed.
    Anonymous,
}

impl LoginState {
    /// Folds a resolution attempt into the final state.
    #[must_use]
    pub fn from_resolution<E>(result: Result<LoginUser, E>) -> Self {
        match result {
            Ok(user) => Self::Resolved(user.display_name().to_string()),
            Err(_) => Self::Anonymous,
        }
    }

    /// Returns the text shown in the header.
    #[must_use]
    pub fn display_name(&self) -> &str {
        match self {
            Self::Loading => "",
            Self::Resolved(name) => name,
            Self::Anonymous => ANONYMOUS,
        }
    }
}

impl fmt::Display for LoginState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
