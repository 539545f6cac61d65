//! Chat answers and the analysis panel for graph-search-chat.
//!
//! This crate provides:
//! - The answer model returned by the answer-generation service (`ChatAppResponse`)
//! - Citation selection and embed URL resolution for the citation viewer
//! - Tab availability for the analysis panel
//! - Sanitization of thought-process markup
//! - An HTTP client for the answer-generation service (`client` feature)
//!
//! # Example
//!
//! ```
//! use graph_search_chat_answer::{ActiveCitation, embed_url};
//!
//! let citation = ActiveCitation::new("ABC123", "report.pdf", "https://site/lib/sub/doc.pdf");
//! assert_eq!(
//!     citation.embed_url(),
//!     "https://site/lib/_layouts/15/embed.aspx?UniqueId=ABC123"
//! );
//! assert_eq!(embed_url(Some("notes.txt"), None, Some("ABC123")), "");
//! ```

pub mod citation;
#[cfg(feature = "client")]
pub mod client;
pub mod error;
pub mod response;
pub mod sanitize;
pub mod tabs;

pub use citation::{ActiveCitation, DEFAULT_PPTX_EMBED_HOST, EmbedTemplates, FileKind, embed_url};
#[cfg(feature = "client")]
pub use client::{AnswerService, HttpAnswerClient};
pub use error::AnswerError;
pub use response::{
    ChatAppResponse, ChatMessage, ChatRequest, ChatRole, DataPoint, ResponseChoice,
    ResponseContext,
};
pub use sanitize::{SanitizedHtml, sanitize_thoughts};
pub use tabs::{AnalysisPanelTab, TabAvailability, TabState};
