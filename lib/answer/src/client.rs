//! HTTP client for the answer-generation service.

use crate::error::AnswerError;
use crate::response::{ChatAppResponse, ChatRequest};
use async_trait::async_trait;
use rootcause::prelude::Report;
use tracing::{debug, instrument};

/// Source of answers for a conversation.
#[async_trait]
pub trait AnswerService: Send + Sync {
    /// Sends the conversation and returns the generated answer.
    ///
    /// `bearer` is forwarded as the `Authorization` header so the service can
    /// search on behalf of the signed-in user.
    async fn ask(
        &self,
        request: &ChatRequest,
        bearer: Option<&str>,
    ) -> Result<ChatAppResponse, Report<AnswerError>>;
}

/// Answer service reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpAnswerClient {
    http: reqwest::Client,
    endpoint: String,
}

impl HttpAnswerClient {
    /// Creates a client posting to `endpoint` (e.g. "http://localhost:50505/chat").
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

    /// Returns the chat endpoint.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AnswerService for HttpAnswerClient {
    #[instrument(skip(self, request, bearer), fields(endpoint = %self.endpoint, messages = request.messages.len()))]
    async fn ask(
        &self,
        request: &ChatRequest,
        bearer: Option<&str>,
    ) -> Result<ChatAppResponse, Report<AnswerError>> {
        if request.messages.is_empty() {
            return Err(AnswerError::EmptyConversation.into());
        }

        let mut builder = self.http.post(&self.endpoint).json(request);
        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| AnswerError::RequestFailed {
                endpoint: self.endpoint.clone(),
                details: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(AnswerError::UnexpectedStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            }
            .into());
        }

        let answer = response
            .json::<ChatAppResponse>()
            .await
            .map_err(|e| AnswerError::MalformedResponse {
                details: e.to_string(),
            })?;

        debug!(
            data_points = answer.data_points().len(),
            has_thoughts = answer.thoughts().is_some(),
            "answer received"
        );
        Ok(answer)
    }
}
