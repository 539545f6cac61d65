//! Identity configuration and signed-in user resolution for graph-search-chat.
//!
//! This crate provides:
//! - Identity provider configuration (`IdentityConfig`)
//! - The authentication settings handed to the browser (`AuthSetup`)
//! - Token store records and the display-name fallback (`AccessToken`, `LoginState`)
//! - Bearer token extraction (`bearer_token`)
//! - A token store client (`TokenStoreClient`, `client` feature)
//!
//! # Example
//!
//! ```
//! use graph_search_chat_platform_access::{AccessToken, Claim, LoginState, resolve_login_user};
//!
//! let tokens: Vec<AccessToken> = serde_json::from_str(
//!     r#"[{"user_id": "u1", "user_claims": [{"typ": "preferred_username", "val": "alice"}]}]"#,
//! )
//! .unwrap();
//!
//! let state = LoginState::from_resolution(resolve_login_user(&tokens));
//! assert_eq!(state.display_name(), "alice");
//!
//! let state = LoginState::from_resolution(resolve_login_user(&[]));
//! assert_eq!(state.display_name(), "anonymous");
//! ```

pub mod auth_setup;
pub mod bearer;
pub mod claims;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod identity;

// Re-export main types at crate root
pub use auth_setup::{AuthOptions, AuthSetup, CacheLocation, CacheOptions, MsalConfig, ScopeRequest};
pub use bearer::{APP_SERVICE_ACCESS_TOKEN_HEADER, bearer_token, caller_token};
pub use claims::{
    ANONYMOUS, AccessToken, Claim, LoginState, LoginUser, PREFERRED_USERNAME, first_access_token,
    resolve_login_user, resolve_login_user_from_json, resolve_login_user_from_records,
};
#[cfg(feature = "client")]
pub use client::{IdentitySource, TokenStoreClient, resolve_login_state};
pub use error::AuthenticationError;
pub use identity::{IdentityConfig, IdentityConfigBuilder};
