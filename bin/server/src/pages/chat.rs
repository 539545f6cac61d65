//! Chat page: ask questions and inspect how each answer was produced.

use crate::chat::{ask, conversation_request, get_embed_templates};
use crate::components::AnalysisPanel;
use graph_search_chat_answer::{ActiveCitation, AnalysisPanelTab, ChatAppResponse};
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Height of the embedded document viewer.
const CITATION_HEIGHT: &str = "810px";

/// Which answer the analysis panel explains, and how.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PanelSelection {
    /// Open tab, or `None` while the panel is closed.
    pub tab: Option<AnalysisPanelTab>,
    /// Index of the explained answer in the conversation.
    pub answer_index: usize,
    /// Document shown in the citation tab.
    pub citation: ActiveCitation,
}

impl PanelSelection {
    /// Opens `tab` for the answer at `index`, or closes the panel when that
    /// exact tab is already open.
    pub fn toggle_tab(&mut self, tab: AnalysisPanelTab, index: usize) {
        if self.tab == Some(tab) && self.answer_index == index {
            self.tab = None;
        } else {
            self.tab = Some(tab);
            self.answer_index = index;
        }
    }

    /// Shows `citation` for the answer at `index`, or closes the panel when it
    /// is already displayed.
    pub fn show_citation(&mut self, citation: ActiveCitation, index: usize) {
        if self.tab == Some(AnalysisPanelTab::Citation)
            && self.answer_index == index
            && self.citation == citation
        {
            self.tab = None;
        } else {
            self.citation = citation;
            self.tab = Some(AnalysisPanelTab::Citation);
            self.answer_index = index;
        }
    }
}

/// The chat page.
#[component]
pub fn ChatPage() -> impl IntoView {
    let (question, set_question) = signal(String::new());
    let history = RwSignal::new(Vec::<(String, ChatAppResponse)>::new());
    let (loading, set_loading) = signal(false);
    let (error, set_error) = signal(Option::<String>::None);
    let selection = RwSignal::new(PanelSelection::default());
    let templates = Resource::new(|| (), |_| get_embed_templates());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let asked = question.get_untracked().trim().to_string();
        if asked.is_empty() || loading.get_untracked() {
            return;
        }

        let request = history.with_untracked(|turns| conversation_request(turns, &asked));
        let conversation = match serde_json::to_string(&request) {
            Ok(conversation) => conversation,
            Err(e) => {
                set_error.set(Some(format!("Error: {}", e)));
                return;
            }
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ask(conversation).await {
                Ok(answer) => {
                    history.update(|turns| turns.push((asked, answer)));
                    set_question.set(String::new());
                }
                Err(e) => set_error.set(Some(format!("Error: {}", e))),
            }
            set_loading.set(false);
        });
    };

    let on_clear = move |_| {
        history.set(Vec::new());
        selection.set(PanelSelection::default());
        set_error.set(None);
    };

    view! {
        <div class="chat-page">
            <div class="chat-container">
                <div class="chat-turns">
                    {move || {
                        history
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(index, (asked, answer))| {
                                view! {
                                    <ChatTurn
                                        question=asked
                                        answer=answer
                                        on_tab=Callback::new(move |tab| {
                                            selection.update(|s| s.toggle_tab(tab, index))
                                        })
                                        on_citation=Callback::new(move |citation| {
                                            selection.update(|s| s.show_citation(citation, index))
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    {move || loading.get().then(|| view! { <p class="chat-loading">"Generating answer..."</p> })}
                    {move || error.get().map(|msg| view! { <p class="chat-error">{msg}</p> })}
                </div>

                <form class="chat-input" on:submit=on_submit>
                    <input
                        type="text"
                        class="question-input"
                        placeholder="Type a new question"
                        prop:value=move || question.get()
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                        disabled=move || loading.get()
                    />
                    <button type="submit" disabled=move || loading.get() || question.get().trim().is_empty()>
                        "Ask"
                    </button>
                    <button type="button" class="clear-button" on:click=on_clear disabled=move || history.with(Vec::is_empty)>
                        "Clear chat"
                    </button>
                </form>
            </div>

            <Suspense fallback=|| ()>
                {move || {
                    let current = selection.get();
                    let tab = current.tab?;
                    let answer = history.with(|turns| {
                        turns.get(current.answer_index).map(|(_, answer)| answer.clone())
                    })?;
                    let embed = templates.get().and_then(Result::ok).unwrap_or_default();
                    let index = current.answer_index;

                    Some(view! {
                        <AnalysisPanel
                            answer=answer
                            active_tab=tab
                            citation=current.citation
                            citation_height=CITATION_HEIGHT
                            class="chat-analysis-panel"
                            embed=embed
                            on_active_tab_changed=Callback::new(move |tab| {
                                selection.update(|s| s.toggle_tab(tab, index))
                            })
                            on_citation_clicked=Callback::new(move |citation| {
                                selection.update(|s| s.show_citation(citation, index))
                            })
                        />
                    })
                }}
            </Suspense>
        </div>
    }
}

/// One question with its answer.
#[component]
fn ChatTurn(
    question: String,
    answer: ChatAppResponse,
    on_tab: Callback<AnalysisPanelTab>,
    on_citation: Callback<ActiveCitation>,
) -> impl IntoView {
    let no_thoughts = answer.thoughts().is_none();
    let no_supporting_content = answer.data_points().is_empty();
    let citations = answer
        .data_points()
        .iter()
        .map(|point| {
            let citation = ActiveCitation::from_data_point(point);
            let file_name = point.file_name().to_string();
            view! {
                <button class="citation-link" on:click=move |_| on_citation.run(citation.clone())>
                    {file_name}
                </button>
            }
        })
        .collect_view();

    view! {
        <div class="chat-turn">
            <p class="chat-question">{question}</p>
            <div class="chat-answer">
                <div class="answer-actions">
                    <button
                        title="Show thought process"
                        disabled=no_thoughts
                        on:click=move |_| on_tab.run(AnalysisPanelTab::ThoughtProcess)
                    >
                        "Thought process"
                    </button>
                    <button
                        title="Show supporting content"
                        disabled=no_supporting_content
                        on:click=move |_| on_tab.run(AnalysisPanelTab::SupportingContent)
                    >
                        "Supporting content"
                    </button>
                </div>
                <p class="answer-text">{answer.content().to_string()}</p>
                {(!no_supporting_content).then(|| view! {
                    <div class="answer-citations">
                        <span class="citation-learn-more">"Citations:"</span>
                        {citations}
                    </div>
                })}
            </div>
        </div>
    }
}
