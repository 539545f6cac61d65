//! Tabbed panel explaining an answer.

use super::SupportingContent;
use graph_search_chat_answer::{
    ActiveCitation, AnalysisPanelTab, ChatAppResponse, EmbedTemplates, SanitizedHtml,
    TabAvailability, TabState,
};
use leptos::prelude::*;

/// CSS classes of a tab header in the given state.
pub fn tab_class(state: TabState) -> &'static str {
    match state {
        TabState::Active => "panel-tab panel-tab-active",
        TabState::Enabled => "panel-tab",
        TabState::Disabled => "panel-tab panel-tab-disabled",
    }
}

/// Shows the thought process, supporting content, or a cited document.
///
/// All three tab headers are always rendered. Tabs without content are muted
/// and ignore clicks.
#[component]
pub fn AnalysisPanel(
    answer: ChatAppResponse,
    active_tab: AnalysisPanelTab,
    citation: ActiveCitation,
    #[prop(into)] citation_height: String,
    #[prop(optional, into)] class: String,
    #[prop(optional)] embed: EmbedTemplates,
    on_active_tab_changed: Callback<AnalysisPanelTab>,
    on_citation_clicked: Callback<ActiveCitation>,
) -> impl IntoView {
    let availability = TabAvailability::evaluate(&answer, &citation);

    let headers = AnalysisPanelTab::ALL
        .into_iter()
        .map(|tab| {
            let state = availability.state(tab, active_tab);
            view! {
                <button
                    class=tab_class(state)
                    role="tab"
                    aria-selected=(state == TabState::Active).to_string()
                    data-tab=tab.key()
                    disabled=!state.is_interactive()
                    on:click=move |_| {
                        if state.is_interactive() {
                            on_active_tab_changed.run(tab);
                        }
                    }
                >
                    {tab.label()}
                </button>
            }
        })
        .collect_view();

    let body = match active_tab {
        AnalysisPanelTab::ThoughtProcess => {
            let thoughts = SanitizedHtml::thoughts_of(&answer)
                .map(SanitizedHtml::into_inner)
                .unwrap_or_default();
            view! { <div class="thought-process" inner_html=thoughts></div> }.into_any()
        }
        AnalysisPanelTab::SupportingContent => view! {
            <SupportingContent
                data_points=answer.data_points().to_vec()
                on_citation_clicked=on_citation_clicked
            />
        }
        .into_any(),
        AnalysisPanelTab::Citation => view! {
            <iframe
                class="citation"
                title="Citation"
                src=citation.embed_url_with(&embed)
                width="100%"
                height=citation_height
            >
                "This is an embedded "
                <a target="_blank" href="https://office.com">"Microsoft Office"</a>
                " document, powered by "
                <a target="_blank" href="https://office.com/webapps">"Office"</a>
                "."
            </iframe>
        }
        .into_any(),
    };

    view! {
        <section class=format!("analysis-panel {}", class)>
            <div class="panel-tabs" role="tablist">{headers}</div>
            <div class="panel-body" role="tabpanel">{body}</div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_tabs_are_muted() {
        assert!(tab_class(TabState::Disabled).contains("panel-tab-disabled"));
        assert!(!tab_class(TabState::Enabled).contains("disabled"));
        assert!(tab_class(TabState::Active).contains("panel-tab-active"));
    }

    #[test]
    fn every_tab_gets_a_header_class() {
        let availability = TabAvailability {
            thought_process_disabled: true,
            supporting_content_disabled: false,
            citation_disabled: true,
        };

        let classes: Vec<&str> = AnalysisPanelTab::ALL
            .into_iter()
            .map(|tab| tab_class(availability.state(tab, AnalysisPanelTab::SupportingContent)))
            .collect();

        assert_eq!(
            classes,
            [
                "panel-tab panel-tab-disabled",
                "panel-tab panel-tab-active",
                "panel-tab panel-tab-disabled",
            ]
        );
    }

    #[cfg(feature = "ssr")]
    #[test]
    fn renders_every_tab_header_and_disables_empty_ones() {
        use graph_search_chat_answer::{ChatMessage, DataPoint, ResponseChoice, ResponseContext};

        let answer = ChatAppResponse {
            choices: vec![ResponseChoice {
                message: ChatMessage::assistant("See deck.pptx."),
                context: Some(ResponseContext {
                    data_points: vec![DataPoint {
                        id: "XYZ".into(),
                        web_url: "https://contoso.sharepoint.com/sites/s/Docs/deck.pptx".to_string(),
                        hit_id: "hit-1".into(),
                        name: Some("deck.pptx".to_string()),
                    }],
                    thoughts: None,
                }),
                session_state: None,
            }],
        };

        let owner = Owner::new();
        let html = owner.with(|| {
            view! {
                <AnalysisPanel
                    answer=answer
                    active_tab=AnalysisPanelTab::SupportingContent
                    citation=ActiveCitation::default()
                    citation_height="810px"
                    on_active_tab_changed=Callback::new(|_| ())
                    on_citation_clicked=Callback::new(|_| ())
                />
            }
            .to_html()
        });

        let headers: Vec<&str> = html
            .split("<button")
            .skip(1)
            .map(|rest| rest.split('>').next().unwrap_or_default())
            .filter(|tag| tag.contains(r#"role="tab""#))
            .collect();
        assert_eq!(headers.len(), 3);

        let header = |key: &str| {
            headers
                .iter()
                .copied()
                .find(|tag| tag.contains(&format!(r#"data-tab="{key}""#)))
                .expect("header rendered")
        };
        assert!(header("thoughtProcess").contains(" disabled"));
        assert!(header("thoughtProcess").contains("panel-tab-disabled"));
        assert!(!header("supportingContent").contains(" disabled"));
        assert!(header("supportingContent").contains("panel-tab-active"));
        assert!(header("citation").contains(" disabled"));
    }
}
