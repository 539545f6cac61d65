//! Shared application state.

use crate::config::ServerConfig;
use crate::error::StartupError;
use graph_search_chat_answer::{EmbedTemplates, HttpAnswerClient};
use graph_search_chat_platform_access::{AuthSetup, IdentityConfig};

/// Shared application state, handed to routes and server functions as an
/// axum extension.
pub struct AppState {
    /// Identity provider configuration.
    pub identity: IdentityConfig,
    /// Browser authentication settings, built once at startup.
    pub auth_setup: AuthSetup,
    /// Shared HTTP connection pool.
    pub http: reqwest::Client,
    /// Public host name of the site, when the platform reports one.
    pub site_hostname: Option<String>,
    /// Client for the answer-generation service.
    pub answers: HttpAnswerClient,
    /// Citation viewer templates.
    pub embed_templates: EmbedTemplates,
}

impl AppState {
    /// Builds the application state from configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn from_config(config: ServerConfig) -> graph_search_chat_core::Result<Self, StartupError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("graph-search-chat/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| StartupError::HttpClient {
                details: e.to_string(),
            })?;

        Ok(Self {
            auth_setup: AuthSetup::for_client(&config.identity),
            answers: HttpAnswerClient::with_client(http.clone(), config.chat.url.clone()),
            http,
            site_hostname: config.website_hostname,
            embed_templates: config.chat.embed_templates(),
            identity: config.identity,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ChatConfig;

    #[test]
    fn state_wires_configured_endpoints() {
        let config = ServerConfig {
            identity: IdentityConfig::builder()
                .use_authentication(true)
                .me_url("https://app.example.net/.auth/me")
                .build(),
            chat: ChatConfig {
                url: "http://answers:8000/chat".to_string(),
                ..ChatConfig::default()
            },
            website_hostname: Some("chat.azurewebsites.net".to_string()),
        };

        let state = AppState::from_config(config).expect("state");

        assert!(state.auth_setup.use_login);
        assert_eq!(state.site_hostname.as_deref(), Some("chat.azurewebsites.net"));
        assert_eq!(
            state.identity.token_store_url(state.site_hostname.as_deref(), None),
            Some("https://app.example.net/.auth/me".to_string())
        );
        assert_eq!(state.answers.endpoint(), "http://answers:8000/chat");
    }
}
