//! Centralized server configuration.
//!
//! This module provides strongly-typed configuration for the server,
//! loaded via the `config` crate from environment variables
//! (`IDENTITY__TENANT_ID`, `CHAT__URL`, `WEBSITE_HOSTNAME`, ...).
//!
//! See [`IdentityConfig`](graph_search_chat_platform_access::IdentityConfig)
//! for the identity provider settings.

use graph_search_chat_answer::{DEFAULT_PPTX_EMBED_HOST, EmbedTemplates};
use graph_search_chat_platform_access::IdentityConfig;
use serde::Deserialize;

/// Server configuration composed from library configs.
#[derive(Debug, Default, Deserialize)]
pub struct ServerConfig {
    /// Identity provider configuration.
    #[serde(default)]
    pub identity: IdentityConfig,

    /// Answer service and citation viewer configuration.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Public host name of the site, set by App Service.
    #[serde(default)]
    pub website_hostname: Option<String>,
}

/// Answer service and citation viewer configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// URL of the answer-generation service's chat endpoint.
    #[serde(default = "default_chat_url")]
    pub url: String,

    /// SharePoint host serving PowerPoint embed views.
    #[serde(default = "default_pptx_embed_host")]
    pub pptx_embed_host: String,
}

fn default_chat_url() -> String {
    "http://localhost:50505/chat".to_string()
}

fn default_pptx_embed_host() -> String {
    DEFAULT_PPTX_EMBED_HOST.to_string()
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            url: default_chat_url(),
            pptx_embed_host: default_pptx_embed_host(),
        }
    }
}

impl ChatConfig {
    /// Returns the citation viewer templates.
    #[must_use]
    pub fn embed_templates(&self) -> EmbedTemplates {
        EmbedTemplates::new(self.pptx_embed_host.clone())
    }
}

impl ServerConfig {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but invalid.
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chat_config_has_correct_defaults() {
        let config = ChatConfig::default();
        assert_eq!(config.url, "http://localhost:50505/chat");
        assert_eq!(config.pptx_embed_host, "https://m365x52168024.sharepoint.com");
    }

    #[test]
    fn server_config_deserializes_sections() {
        let config: ServerConfig = config::Config::builder()
            .set_override("identity.use_authentication", true)
            .and_then(|b| b.set_override("identity.tenant_id", "tenant-1"))
            .and_then(|b| b.set_override("chat.url", "http://answers:8000/chat"))
            .and_then(|b| b.set_override("website_hostname", "chat.azurewebsites.net"))
            .and_then(|b| b.build())
            .and_then(|c| c.try_deserialize())
            .expect("config");

        assert!(config.identity.use_authentication());
        assert_eq!(config.identity.tenant_id(), Some("tenant-1"));
        assert_eq!(config.chat.url, "http://answers:8000/chat");
        assert_eq!(config.website_hostname.as_deref(), Some("chat.azurewebsites.net"));
        assert_eq!(
            config.chat.pptx_embed_host,
            "https://m365x52168024.sharepoint.com"
        );
    }

    #[test]
    fn embed_templates_use_configured_host() {
        let config = ChatConfig {
            pptx_embed_host: "https://contoso.sharepoint.com".to_string(),
            ..ChatConfig::default()
        };
        assert_eq!(
            config.embed_templates().pptx_host,
            "https://contoso.sharepoint.com"
        );
    }
}
