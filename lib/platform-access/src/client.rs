//! Client for the App Service token store (`/.auth/me`).

use crate::claims::{LoginState, LoginUser, resolve_login_user_from_records};
use crate::error::AuthenticationError;
use async_trait::async_trait;
use rootcause::prelude::Report;
use serde_json::Value as JsonValue;
use tracing::{debug, instrument, warn};

/// Source of access-token records for the current caller.
#[async_trait]
pub trait IdentitySource: Send + Sync {
    /// Fetches the caller's raw access-token records.
    ///
    /// `cookie` is the caller's `Cookie` header, which carries the App Service
    /// authentication session. Records are returned unparsed; only the first
    /// one is ever read.
    async fn token_records(
        &self,
        cookie: Option<&str>,
    ) -> Result<Vec<JsonValue>, Report<AuthenticationError>>;
}

/// Token store reached over HTTP.
#[derive(Debug, Clone)]
pub struct TokenStoreClient {
    http: reqwest::Client,
    endpoint: String,
}

impl TokenStoreClient {
    /// Creates a client for the given endpoint (e.g. "https://app.example.net/.auth/me").
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a client that reuses an existing connection pool.
    #[must_use]
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Returns the token store endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl IdentitySource for TokenStoreClient {
    #[instrument(skip(self, cookie), fields(endpoint = %self.endpoint))]
    async fn token_records(
        &self,
        cookie: Option<&str>,
    ) -> Result<Vec<JsonValue>, Report<AuthenticationError>> {
        let mut request = self.http.get(&self.endpoint);
        if let Some(cookie) = cookie {
            request = request.header(reqwest::header::COOKIE, cookie);
        }

        let response = request
            .send()
            .await
            .map_err(|e| AuthenticationError::EndpointUnreachable {
                endpoint: self.endpoint.clone(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AuthenticationError::EndpointStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let records = response
            .json::<Vec<JsonValue>>()
            .await
            .map_err(|e| AuthenticationError::MalformedResponse {
                reason: e.to_string(),
            })?;

        debug!(records = records.len(), "token store records received");
        Ok(records)
    }
}

/// Resolves the header's display state for the current caller.
///
/// Makes exactly one request and never retries. Every failure yields
/// [`LoginState::Anonymous`]; the cause is logged so that a caller who is not
/// signed in can be told apart from an unreachable token store.
pub async fn resolve_login_state<S>(source: &S, cookie: Option<&str>) -> LoginState
where
    S: IdentitySource + ?Sized,
{
    let result: Result<LoginUser, Report<AuthenticationError>> =
        match source.token_records(cookie).await {
            Ok(records) => resolve_login_user_from_records(&records).map_err(Report::from),
            Err(report) => Err(report),
        };

    if let Err(report) = &result {
        let cause = report.current_context();
        warn!(
            error = %report,
            code = cause.code(),
            unauthenticated = cause.is_unauthenticated(),
            "could not resolve signed-in user, showing anonymous"
        );
    }

    LoginState::from_resolution(result)
}
