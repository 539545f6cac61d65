//! Analysis panel tabs and their availability.
//!
//! A tab without content is still rendered, muted and non-interactive. It is
//! never removed from the tab bar.

use crate::citation::ActiveCitation;
use crate::response::ChatAppResponse;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Tabs of the analysis panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AnalysisPanelTab {
    ThoughtProcess,
    SupportingContent,
    Citation,
}

impl AnalysisPanelTab {
    /// All tabs in display order.
    pub const ALL: [Self; 3] = [Self::ThoughtProcess, Self::SupportingContent, Self::Citation];

    /// Stable key used in markup.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::ThoughtProcess => "thoughtProcess",
            Self::SupportingContent => "supportingContent",
            Self::Citation => "citation",
        }
    }

    /// Header text of the tab.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::ThoughtProcess => "Thought process",
            Self::SupportingContent => "Supporting content",
            Self::Citation => "Citation",
        }
    }
}

impl fmt::Display for AnalysisPanelTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Rendering state of a tab header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabState {
    /// The selected tab.
    Active,
    /// Selectable.
    Enabled,
    /// Visible but muted and not clickable.
    Disabled,
}

impl TabState {
    /// Returns true when the header accepts clicks.
    #[must_use]
    pub const fn is_interactive(self) -> bool {
        !matches!(self, Self::Disabled)
    }
}

/// Which tabs have content for the current answer and selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabAvailability {
    pub thought_process_disabled: bool,
    pub supporting_content_disabled: bool,
    pub citation_disabled: bool,
}

impl TabAvailability {
    /// Computes availability from an answer and the current citation.
    #[must_use]
    pub fn evaluate(answer: &ChatAppResponse, citation: &ActiveCitation) -> Self {
        Self {
            thought_process_disabled: answer.thoughts().is_none(),
            supporting_content_disabled: answer.data_points().is_empty(),
            citation_disabled: !citation.is_selected(),
        }
    }

    /// Returns true when the tab has no content.
    #[must_use]
    pub const fn is_disabled(&self, tab: AnalysisPanelTab) -> bool {
        match tab {
            AnalysisPanelTab::ThoughtProcess => self.thought_process_disabled,
            AnalysisPanelTab::SupportingContent => self.supporting_content_disabled,
            AnalysisPanelTab::Citation => self.citation_disabled,
        }
    }

    /// Returns the header state of `tab` while `active` is selected.
    ///
    /// A disabled tab stays disabled even when it is the selected one.
    #[must_use]
    pub fn state(&self, tab: AnalysisPanelTab, active: AnalysisPanelTab) -> TabState {
        if self.is_disabled(tab) {
            TabState::Disabled
        } else if tab == active {
            TabState::Active
        } else {
            TabState::Enabled
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::response::{ChatMessage, DataPoint, ResponseChoice, ResponseContext};
    use graph_search_chat_core::{CitationId, HitId};

    fn answer(thoughts: Option<&str>, data_points: usize) -> ChatAppResponse {
        let data_points = (0..data_points)
            .map(|i| DataPoint {
                id: CitationId::new(format!("doc-{i}")),
                web_url: format!("https://site/lib/sub/doc-{i}.pdf"),
                hit_id: HitId::new(format!("hit-{i}")),
                name: None,
            })
            .collect();
        ChatAppResponse {
            choices: vec![ResponseChoice {
                message: ChatMessage::assistant("answer"),
                context: Some(ResponseContext {
                    data_points,
                    thoughts: thoughts.map(str::to_string),
                }),
                session_state: None,
            }],
        }
    }

    #[test]
    fn empty_thoughts_with_one_data_point() {
        let availability = TabAvailability::evaluate(&answer(Some(""), 1), &ActiveCitation::default());

        assert!(availability.thought_process_disabled);
        assert!(!availability.supporting_content_disabled);
        assert!(availability.citation_disabled);
    }

    #[test]
    fn everything_enabled_with_content_and_selection() {
        let citation = ActiveCitation::new("doc-0", "doc-0.pdf", "https://site/lib/sub/doc-0.pdf");
        let availability = TabAvailability::evaluate(&answer(Some("Searched for: x"), 2), &citation);

        for tab in AnalysisPanelTab::ALL {
            assert!(!availability.is_disabled(tab), "{tab} should be enabled");
        }
    }

    #[test]
    fn answer_without_choices_disables_content_tabs() {
        let availability =
            TabAvailability::evaluate(&ChatAppResponse::default(), &ActiveCitation::default());
        assert!(availability.thought_process_disabled);
        assert!(availability.supporting_content_disabled);
    }

    #[test]
    fn state_marks_active_and_disabled_tabs() {
        let availability = TabAvailability {
            thought_process_disabled: true,
            supporting_content_disabled: false,
            citation_disabled: false,
        };
        let active = AnalysisPanelTab::Citation;

        assert_eq!(
            availability.state(AnalysisPanelTab::ThoughtProcess, active),
            TabState::Disabled
        );
        assert_eq!(
            availability.state(AnalysisPanelTab::SupportingContent, active),
            TabState::Enabled
        );
        assert_eq!(availability.state(AnalysisPanelTab::Citation, active), TabState::Active);
        assert!(!TabState::Disabled.is_interactive());
    }

    #[test]
    fn disabled_wins_over_active() {
        let availability =
            TabAvailability::evaluate(&answer(None, 0), &ActiveCitation::default());
        assert_eq!(
            availability.state(AnalysisPanelTab::Citation, AnalysisPanelTab::Citation),
            TabState::Disabled
        );
    }
}
