//! Signed-in user resolution for the header.

use graph_search_chat_platform_access::LoginState;
use leptos::prelude::*;

/// Server function returning the display name of the signed-in user.
///
/// Asks the App Service token store on the site's public host once,
/// forwarding the caller's cookies. Resolution failures are reported as
/// `"anonymous"`, never as an error.
#[server]
pub async fn get_login_user() -> Result<String, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use axum::http::{HeaderMap, header::COOKIE, header::HOST};
    use graph_search_chat_platform_access::{TokenStoreClient, resolve_login_state};
    use std::sync::Arc;

    let headers: HeaderMap = leptos_axum::extract().await?;
    let Extension(state): Extension<Arc<AppState>> = leptos_axum::extract().await?;

    let header = |name| headers.get(name).and_then(|value| value.to_str().ok());
    let Some(url) = state
        .identity
        .token_store_url(state.site_hostname.as_deref(), header(HOST))
    else {
        tracing::warn!(
            code = "no_token_store_host",
            "could not resolve signed-in user, showing anonymous"
        );
        return Ok(LoginState::Anonymous.display_name().to_string());
    };

    let token_store = TokenStoreClient::with_client(state.http.clone(), url);
    let login = resolve_login_state(&token_store, header(COOKIE)).await;

    tracing::debug!(resolved = !matches!(login, LoginState::Anonymous), "login user resolved");
    Ok(login.display_name().to_string())
}

/// Maps the state of the login resource to the header's display state.
///
/// A pending resource shows nothing; a failed server call shows anonymous.
pub fn login_state(resource: Option<Result<String, ServerFnError>>) -> LoginState {
    match resource {
        None => LoginState::Loading,
        Some(Ok(name)) => LoginState::Resolved(name),
        Some(Err(_)) => LoginState::Anonymous,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pending_resource_shows_nothing() {
        assert_eq!(login_state(None).display_name(), "");
    }

    #[test]
    fn resolved_name_is_shown() {
        assert_eq!(login_state(Some(Ok("alice".to_string()))).display_name(), "alice");
    }

    #[test]
    fn failed_call_is_anonymous() {
        let state = login_state(Some(Err(ServerFnError::new("network error"))));
        assert_eq!(state, LoginState::Anonymous);
        assert_eq!(state.display_name(), "anonymous");
    }
}
