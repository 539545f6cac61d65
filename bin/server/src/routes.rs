//! Plain axum routes served next to the Leptos app.

use crate::state::AppState;
use axum::{Extension, Json};
use graph_search_chat_platform_access::AuthSetup;
use std::sync::Arc;

/// Returns the browser authentication settings.
pub async fn auth_setup(Extension(state): Extension<Arc<AppState>>) -> Json<AuthSetup> {
    Json(state.auth_setup.clone())
}

/// Empty page used as the login redirect target.
pub async fn redirect() -> &'static str {
    ""
}
