//! Identity provider configuration.
//!
//! Sign-in is handled by Microsoft Entra ID in front of the app (App Service
//! authentication) and by MSAL in the browser. This module holds the settings
//! the server needs to describe that setup to the browser and to reach the
//! App Service token store.

use serde::{Deserialize, Serialize};

/// Login host for Microsoft Entra ID.
pub const LOGIN_HOST: &str = "https://login.microsoftonline.com";

/// Path of the App Service token store on the app's own public host.
pub const TOKEN_STORE_PATH: &str = "/.auth/me";

/// Configuration for the identity provider.
///
/// Every field has a default so a deployment without authentication can omit
/// the whole section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityConfig {
    /// Whether login elements are enabled in the UI.
    #[serde(default)]
    use_authentication: bool,
    /// The Entra ID tenant (directory) id.
    #[serde(default)]
    tenant_id: Option<String>,
    /// Application id of the browser client registration.
    #[serde(default)]
    client_app_id: Option<String>,
    /// Application id of the server API registration.
    #[serde(default)]
    server_app_id: Option<String>,
    /// Fixed URL of the App Service token store endpoint. When unset the URL
    /// is derived from the app's public host, see `token_store_url`.
    #[serde(default)]
    me_url: Option<String>,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            use_authentication: false,
            tenant_id: None,
            client_app_id: None,
            server_app_id: None,
            me_url: None,
        }
    }
}

impl IdentityConfig {
    /// Creates a configuration builder.
    #[must_use]
    pub fn builder() -> IdentityConfigBuilder {
        IdentityConfigBuilder::default()
    }

    /// Returns whether login is enabled.
    #[must_use]
    pub fn use_authentication(&self) -> bool {
        self.use_authentication
    }

    /// Returns the tenant id.
    #[must_use]
    pub fn tenant_id(&self) -> Option<&str> {
        self.tenant_id.as_deref()
    }

    /// Returns the browser client application id.
    #[must_use]
    pub fn client_app_id(&self) -> Option<&str> {
        self.client_app_id.as_deref()
    }

    /// Returns the server API application id.
    #[must_use]
    pub fn server_app_id(&self) -> Option<&str> {
        self.server_app_id.as_deref()
    }

    /// Returns the configured token store URL, if one is set.
    #[must_use]
    pub fn me_url(&self) -> Option<&str> {
        self.me_url.as_deref().filter(|url| !url.is_empty())
    }

    /// Returns the token store URL to ask for the current caller.
    ///
    /// The token store lives behind the platform's authentication layer on
    /// the app's public host, so it must be reached through that host rather
    /// than the local listener. In order of preference: the configured
    /// `me_url`, the host the platform reports for the site, then the `Host`
    /// of the incoming request. Returns `None` when none is known.
    #[must_use]
    pub fn token_store_url(
        &self,
        site_host: Option<&str>,
        request_host: Option<&str>,
    ) -> Option<String> {
        if let Some(url) = self.me_url() {
            return Some(url.to_string());
        }
        let host = [site_host, request_host]
            .into_iter()
            .flatten()
            .map(str::trim)
            .find(|host| !host.is_empty())?;
        Some(format!("https://{host}{TOKEN_STORE_PATH}"))
    }

    /// Returns the authority URL for the configured tenant.
    ///
    /// Without a tenant id the multi-tenant `common` authority is used.
    #[must_use]
    pub fn authority(&self) -> String {
        let tenant = self
            .tenant_id
            .as_deref()
            .filter(|t| !t.is_empty())
            .unwrap_or("common");
        format!("{LOGIN_HOST}/{tenant}")
    }

    /// Returns the scope the browser requests to call the server API.
    #[must_use]
    pub fn api_scope(&self) -> String {
        format!(
            "api://{}/access_as_user",
            self.server_app_id.as_deref().unwrap_or_default()
        )
    }
}

/// Builder for `IdentityConfig`.
#[derive(Debug, Default)]
pub struct IdentityConfigBuilder {
    config: IdentityConfig,
}

impl IdentityConfigBuilder {
    /// Enables or disables login.
    #[must_use]
    pub fn use_authentication(mut self, enabled: bool) -> Self {
        self.config.use_authentication = enabled;
        self
    }

    /// Sets the tenant id.
    #[must_use]
    pub fn tenant_id(mut self, tenant_id: impl Into<String>) -> Self {
        self.config.tenant_id = Some(tenant_id.into());
        self
    }

    /// Sets the browser client application id.
    #[must_use]
    pub fn client_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config.client_app_id = Some(app_id.into());
        self
    }

    /// Sets the server API application id.
    #[must_use]
    pub fn server_app_id(mut self, app_id: impl Into<String>) -> Self {
        self.config.server_app_id = Some(app_id.into());
        self
    }

    /// Sets the token store endpoint URL.
    #[must_use]
    pub fn me_url(mut self, url: impl Into<String>) -> Self {
        self.config.me_url = Some(url.into());
        self
    }

    /// Builds the `IdentityConfig`.
    #[must_use]
    pub fn build(self) -> IdentityConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_disables_login() {
        let config = IdentityConfig::default();

        assert!(!config.use_authentication());
        assert_eq!(config.tenant_id(), None);
        assert_eq!(config.me_url(), None);
        assert_eq!(config.authority(), "https://login.microsoftonline.com/common");
    }

    #[test]
    fn builder_sets_tenant_and_apps() {
        let config = IdentityConfig::builder()
            .use_authentication(true)
            .tenant_id("72f988bf-0000-0000-0000-2d7cd011db47")
            .client_app_id("client-app")
            .server_app_id("server-app")
            .build();

        assert!(config.use_authentication());
        assert_eq!(
            config.authority(),
            "https://login.microsoftonline.com/72f988bf-0000-0000-0000-2d7cd011db47"
        );
        assert_eq!(config.client_app_id(), Some("client-app"));
        assert_eq!(config.api_scope(), "api://server-app/access_as_user");
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let json = r#"{"use_authentication": true, "tenant_id": "t1"}"#;
        let config: IdentityConfig = serde_json::from_str(json).expect("deserialize");

        assert!(config.use_authentication());
        assert_eq!(config.authority(), "https://login.microsoftonline.com/t1");
        assert_eq!(config.me_url(), None);
        assert_eq!(config.server_app_id(), None);
    }

    #[test]
    fn token_store_url_prefers_configured_url() {
        let config = IdentityConfig::builder()
            .me_url("http://identity.internal/.auth/me")
            .build();
        assert_eq!(
            config.token_store_url(Some("chat.azurewebsites.net"), Some("evil.example")),
            Some("http://identity.internal/.auth/me".to_string())
        );
    }

    #[test]
    fn token_store_url_uses_site_host_before_request_host() {
        let config = IdentityConfig::default();
        assert_eq!(
            config.token_store_url(Some("chat.azurewebsites.net"), Some("other.example")),
            Some("https://chat.azurewebsites.net/.auth/me".to_string())
        );
    }

    #[test]
    fn token_store_url_falls_back_to_request_host() {
        let config = IdentityConfig::default();
        assert_eq!(
            config.token_store_url(None, Some("chat.contoso.com")),
            Some("https://chat.contoso.com/.auth/me".to_string())
        );
        assert_eq!(
            config.token_store_url(Some(" "), Some("chat.contoso.com")),
            Some("https://chat.contoso.com/.auth/me".to_string())
        );
    }

    #[test]
    fn token_store_url_needs_a_host() {
        assert_eq!(IdentityConfig::default().token_store_url(None, None), None);
    }

    #[test]
    fn empty_section_deserializes() {
        let config: IdentityConfig = serde_json::from_str("{}").expect("deserialize");
        assert_eq!(config, IdentityConfig::default());
    }
}
