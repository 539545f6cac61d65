//! Server functions for asking questions and viewing citations.

use graph_search_chat_answer::{ChatAppResponse, ChatMessage, ChatRequest, EmbedTemplates};
use leptos::prelude::*;

/// Server function forwarding a conversation to the answer-generation service.
///
/// `conversation` is a JSON-encoded [`ChatRequest`]. The caller's access token
/// (from `Authorization`, or the one App Service authentication injected) is
/// passed through so the service searches on the user's behalf.
#[server]
pub async fn ask(conversation: String) -> Result<ChatAppResponse, ServerFnError> {
    use crate::error::ChatError;
    use crate::state::AppState;
    use axum::Extension;
    use axum::http::{HeaderMap, header::AUTHORIZATION};
    use graph_search_chat_answer::AnswerService;
    use graph_search_chat_platform_access::{APP_SERVICE_ACCESS_TOKEN_HEADER, caller_token};
    use std::sync::Arc;

    let request: ChatRequest = serde_json::from_str(&conversation).map_err(|e| {
        tracing::debug!(error = %e, "Rejected malformed conversation");
        ChatError::InvalidConversation {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    let headers: HeaderMap = leptos_axum::extract().await?;
    let Extension(state): Extension<Arc<AppState>> =
        leptos_axum::extract().await.map_err(|e| {
            tracing::error!(error = %e, "Application state missing from request");
            ChatError::StateUnavailable {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    let header = |name: &str| headers.get(name).and_then(|value| value.to_str().ok());
    let bearer = caller_token(header(AUTHORIZATION.as_str()), header(APP_SERVICE_ACCESS_TOKEN_HEADER))
        .map_err(|e| {
            tracing::debug!(error = %e, code = e.code(), "Rejected caller token");
            ChatError::NotAuthenticated {
                details: e.to_string(),
            }
            .into_server_error()
        })?;

    if state.identity.use_authentication() && bearer.is_none() {
        tracing::debug!("Login required but request carried no token");
        return Err(ChatError::NotAuthenticated {
            details: "no access token".to_string(),
        }
        .into_server_error());
    }

    let answer = state.answers.ask(&request, bearer).await.map_err(|e| {
        tracing::error!(
            error = %e,
            endpoint = %state.answers.endpoint(),
            "Answer service request failed"
        );
        ChatError::AnswerServiceFailed {
            details: e.to_string(),
        }
        .into_server_error()
    })?;

    tracing::info!(
        messages = request.messages.len(),
        data_points = answer.data_points().len(),
        "Answered question"
    );

    Ok(answer)
}

/// Server function returning the configured citation viewer templates.
#[server]
pub async fn get_embed_templates() -> Result<EmbedTemplates, ServerFnError> {
    use crate::state::AppState;
    use axum::Extension;
    use std::sync::Arc;

    let Extension(state): Extension<Arc<AppState>> = leptos_axum::extract().await?;
    Ok(state.embed_templates.clone())
}

/// Builds the request for `question`, replaying the earlier turns.
///
/// Each earlier turn contributes the user's question and the answer text.
/// The session state of the latest answer is carried forward.
pub fn conversation_request(history: &[(String, ChatAppResponse)], question: &str) -> ChatRequest {
    let mut messages = Vec::with_capacity(history.len() * 2 + 1);
    for (asked, answer) in history {
        messages.push(ChatMessage::user(asked.as_str()));
        messages.push(ChatMessage::assistant(answer.content()));
    }
    messages.push(ChatMessage::user(question));

    let session_state = history
        .last()
        .and_then(|(_, answer)| answer.session_state().cloned());

    ChatRequest::new(messages).with_session_state(session_state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use graph_search_chat_answer::{ChatRole, ResponseChoice};
    use serde_json::json;

    fn answer(content: &str, session_state: Option<serde_json::Value>) -> ChatAppResponse {
        ChatAppResponse {
            choices: vec![ResponseChoice {
                message: ChatMessage::assistant(content),
                context: None,
                session_state,
            }],
        }
    }

    #[test]
    fn first_question_has_no_history() {
        let request = conversation_request(&[], "What is our travel policy?");

        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, ChatRole::User);
        assert_eq!(request.messages[0].content, "What is our travel policy?");
        assert!(!request.stream);
        assert!(request.session_state.is_none());
    }

    #[test]
    fn earlier_turns_are_replayed_in_order() {
        let history = vec![
            ("first".to_string(), answer("one", Some(json!("s1")))),
            ("second".to_string(), answer("two", Some(json!("s2")))),
        ];

        let request = conversation_request(&history, "third");

        let contents: Vec<&str> = request.messages.iter().map(|m| m.content.as_str()).collect();
        assert_eq!(contents, ["first", "one", "second", "two", "third"]);
        assert_eq!(request.messages[1].role, ChatRole::Assistant);
        assert_eq!(request.session_state, Some(json!("s2")));
    }

    #[test]
    fn request_serializes_for_the_server_function() {
        let request = conversation_request(&[], "hello");
        let encoded = serde_json::to_string(&request).expect("serialize");
        let decoded: ChatRequest = serde_json::from_str(&encoded).expect("deserialize");
        assert_eq!(decoded, request);
    }
}
