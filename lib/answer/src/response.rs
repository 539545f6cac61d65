//! Wire types exchanged with the answer-generation service.
//!
//! The service speaks an OpenAI chat-completion shaped protocol: the request
//! carries the conversation history and the response carries one or more
//! choices, the first of which holds the answer text and a `context` with the
//! supporting Graph search hits.

use graph_search_chat_core::{CitationId, HitId};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// A single message in the conversation history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Creates a message authored by the user.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    /// Creates a message authored by the assistant.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Request body posted to the answer-generation service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub stream: bool,
    #[serde(default)]
    pub context: JsonValue,
    #[serde(default)]
    pub session_state: Option<JsonValue>,
}

impl ChatRequest {
    /// Creates a non-streaming request for the given history.
    #[must_use]
    pub fn new(messages: Vec<ChatMessage>) -> Self {
        Self {
            messages,
            stream: false,
            context: JsonValue::Object(serde_json::Map::new()),
            session_state: None,
        }
    }

    /// Carries the session state returned by a previous answer.
    #[must_use]
    pub fn with_session_state(mut self, session_state: Option<JsonValue>) -> Self {
        self.session_state = session_state;
        self
    }
}

/// A Graph search hit used as supporting content for an answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Unique id of the underlying document.
    pub id: CitationId,
    /// Web URL of the document.
    pub web_url: String,
    /// Id of the search hit.
    pub hit_id: HitId,
    /// File name of the document, if the search result carried one.
    #[serde(default)]
    pub name: Option<String>,
}

impl DataPoint {
    /// Returns the file name, falling back to the last segment of the web URL.
    #[must_use]
    pub fn file_name(&self) -> &str {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => self.web_url.rsplit('/').next().unwrap_or_default(),
        }
    }
}

/// Supporting context attached to an answer choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseContext {
    #[serde(default)]
    pub data_points: Vec<DataPoint>,
    #[serde(default)]
    pub thoughts: Option<String>,
}

/// One choice of an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseChoice {
    pub message: ChatMessage,
    #[serde(default)]
    pub context: Option<ResponseContext>,
    #[serde(default)]
    pub session_state: Option<JsonValue>,
}

/// Answer returned by the answer-generation service.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatAppResponse {
    #[serde(default)]
    pub choices: Vec<ResponseChoice>,
}

impl ChatAppResponse {
    /// Returns the first choice, which is the one the UI renders.
    #[must_use]
    pub fn first_choice(&self) -> Option<&ResponseChoice> {
        self.choices.first()
    }

    /// Returns the answer text.
    #[must_use]
    pub fn content(&self) -> &str {
        self.first_choice()
            .map(|choice| choice.message.content.as_str())
            .unwrap_or_default()
    }

    /// Returns the raw thought-process text, if the answer has any.
    ///
    /// Empty text counts as absent.
    #[must_use]
    pub fn thoughts(&self) -> Option<&str> {
        self.first_choice()
            .and_then(|choice| choice.context.as_ref())
            .and_then(|context| context.thoughts.as_deref())
            .filter(|thoughts| !thoughts.is_empty())
    }

    /// Returns the supporting content items.
    #[must_use]
    pub fn data_points(&self) -> &[DataPoint] {
        self.first_choice()
            .and_then(|choice| choice.context.as_ref())
            .map(|context| context.data_points.as_slice())
            .unwrap_or_default()
    }

    /// Returns the session state to send back with the next request.
    #[must_use]
    pub fn session_state(&self) -> Option<&JsonValue> {
        self.first_choice()
            .and_then(|choice| choice.session_state.as_ref())
            .filter(|state| !state.is_null())
    }
}
