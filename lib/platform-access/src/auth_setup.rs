//! Browser-side authentication settings.
//!
//! The browser's MSAL runtime is configured from `GET /auth_setup`. The shape
//! mirrors MSAL's own configuration object, so it serializes in camelCase.
//! Once built, an `AuthSetup` is never modified.

use crate::identity::IdentityConfig;
use serde::{Deserialize, Serialize};

/// Where MSAL keeps its token cache in the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CacheLocation {
    /// Per-tab storage.
    #[serde(rename = "sessionStorage")]
    SessionStorage,
    /// Shared between tabs, giving single sign-on across them.
    #[serde(rename = "localStorage")]
    LocalStorage,
}

/// MSAL `auth` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthOptions {
    pub client_id: Option<String>,
    pub authority: String,
    pub redirect_uri: String,
    pub post_logout_redirect_uri: String,
    pub navigate_to_login_request_url: bool,
}

/// MSAL `cache` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CacheOptions {
    pub cache_location: CacheLocation,
    pub store_auth_state_in_cookie: bool,
}

/// MSAL client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MsalConfig {
    pub auth: AuthOptions,
    pub cache: CacheOptions,
}

/// Scopes requested by a login or token request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeRequest {
    pub scopes: Vec<String>,
}

/// Authentication settings handed to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthSetup {
    /// Whether login elements are enabled in the UI.
    pub use_login: bool,
    pub msal_config: MsalConfig,
    /// Scopes consented to at sign-in.
    pub login_request: ScopeRequest,
    /// Scopes requested when acquiring a token for the server API.
    pub token_request: ScopeRequest,
}

impl AuthSetup {
    /// Path of the empty page MSAL redirects to after login.
    pub const REDIRECT_PATH: &'static str = "/redirect";

    /// Builds the browser settings for the configured identity provider.
    #[must_use]
    pub fn for_client(config: &IdentityConfig) -> Self {
        Self {
            use_login: config.use_authentication(),
            msal_config: MsalConfig {
                auth: AuthOptions {
                    client_id: config.client_app_id().map(str::to_string),
                    authority: config.authority(),
                    redirect_uri: Self::REDIRECT_PATH.to_string(),
                    post_logout_redirect_uri: "/".to_string(),
                    navigate_to_login_request_url: false,
                },
                cache: CacheOptions {
                    cache_location: CacheLocation::SessionStorage,
                    store_auth_state_in_cookie: false,
                },
            },
            login_request: ScopeRequest {
                scopes: vec![".default".to_string()],
            },
            token_request: ScopeRequest {
                scopes: vec![config.api_scope()],
            },
        }
    }

    /// Returns the client id.
    #[must_use]
    pub fn client_id(&self) -> Option<&str> {
        self.msal_config.auth.client_id.as_deref()
    }

    /// Returns the authority URL.
    #[must_use]
    pub fn authority(&self) -> &str {
        &self.msal_config.auth.authority
    }

    /// Returns the scopes requested at sign-in.
    #[must_use]
    pub fn login_scopes(&self) -> &[String] {
        &self.login_request.scopes
    }

    /// Returns the scopes requested for API tokens.
    #[must_use]
    pub fn token_scopes(&self) -> &[String] {
        &self.token_request.scopes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config() -> IdentityConfig {
        IdentityConfig::builder()
            .use_authentication(true)
            .tenant_id("tenant-1")
            .client_app_id("client-1")
            .server_app_id("server-1")
            .build()
    }

    #[test]
    fn setup_uses_fixed_browser_settings() {
        let setup = AuthSetup::for_client(&config());

        assert!(setup.use_login);
        assert_eq!(setup.client_id(), Some("client-1"));
        assert_eq!(setup.authority(), "https://login.microsoftonline.com/tenant-1");
        assert_eq!(setup.msal_config.auth.redirect_uri, "/redirect");
        assert!(!setup.msal_config.auth.navigate_to_login_request_url);
        assert_eq!(setup.msal_config.cache.cache_location, CacheLocation::SessionStorage);
        assert_eq!(setup.login_scopes(), [".default".to_string()]);
        assert_eq!(
            setup.token_scopes(),
            ["api://server-1/access_as_user".to_string()]
        );
    }

    #[test]
    fn setup_serializes_in_msal_shape() {
        let value = serde_json::to_value(AuthSetup::for_client(&config())).expect("serialize");

        assert_eq!(
            value,
            json!({
                "useLogin": true,
                "msalConfig": {
                    "auth": {
                        "clientId": "client-1",
                        "authority": "https://login.microsoftonline.com/tenant-1",
                        "redirectUri": "/redirect",
                        "postLogoutRedirectUri": "/",
                        "navigateToLoginRequestUrl": false
                    },
                    "cache": {
                        "cacheLocation": "sessionStorage",
                        "storeAuthStateInCookie": false
                    }
                },
                "loginRequest": {"scopes": [".default"]},
                "tokenRequest": {"scopes": ["api://server-1/access_as_user"]}
            })
        );
    }

    #[test]
    fn disabled_login_still_describes_client() {
        let setup = AuthSetup::for_client(&IdentityConfig::default());
        assert!(!setup.use_login);
        assert_eq!(setup.client_id(), None);
    }
}
