//! Sanitization of thought-process markup.
//!
//! Thought-process text comes from the answer service and may contain HTML.
//! It is only ever injected into the page as a [`SanitizedHtml`], which can
//! only be built by running the text through ammonia's allow-list cleaner.

use crate::response::ChatAppResponse;
use std::fmt;

/// HTML that has passed through the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    /// Returns the sanitized markup.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the value, returning the sanitized markup.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }

    /// Sanitizes the thought-process text of an answer, if it has any.
    #[must_use]
    pub fn thoughts_of(answer: &ChatAppResponse) -> Option<Self> {
        answer.thoughts().map(sanitize_thoughts)
    }
}

impl fmt::Display for SanitizedHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strips scripts, event handlers and other unsafe markup, keeping
/// formatting tags such as `<br>`, `<b>` and tables.
#[must_use]
pub fn sanitize_thoughts(raw: &str) -> SanitizedHtml {
    SanitizedHtml(ammonia::clean(raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ChatMessage, ResponseChoice, ResponseContext};

    #[test]
    fn removes_script_tags() {
        let clean = sanitize_thoughts("Searched for:<br><script>alert('x')</script>規程");
        assert!(!clean.as_str().contains("<script"));
        assert!(!clean.as_str().contains("alert"));
        assert!(clean.as_str().contains("規程"));
    }

    #[test]
    fn removes_event_handlers() {
        let clean = sanitize_thoughts(r#"<img src="x.png" onerror="alert(1)"><b onclick="steal()">bold</b>"#);
        assert!(!clean.as_str().contains("onerror"));
        assert!(!clean.as_str().contains("onclick"));
        assert!(clean.as_str().contains("<b>bold</b>"));
    }

    #[test]
    fn keeps_line_breaks() {
        let clean = sanitize_thoughts("Searched for:<br>健康保険<br><br>Conversations:");
        assert!(clean.as_str().contains("<br>"));
        assert!(clean.as_str().starts_with("Searched for:"));
    }

    #[test]
    fn drops_javascript_urls() {
        let clean = sanitize_thoughts(r#"<a href="javascript:alert(1)">link</a>"#);
        assert!(!clean.as_str().contains("javascript:"));
        assert!(clean.as_str().contains("link"));
    }

    #[test]
    fn absent_thoughts_are_not_sanitized() {
        let answer = ChatAppResponse {
            choices: vec![ResponseChoice {
                message: ChatMessage::assistant("answer"),
                context: Some(ResponseContext::default()),
                session_state: None,
            }],
        };
        assert_eq!(SanitizedHtml::thoughts_of(&answer), None);
    }
}
