//! List of the search hits an answer was grounded on.

use graph_search_chat_answer::{ActiveCitation, DataPoint};
use leptos::prelude::*;

/// Renders each supporting document with a link and a citation button.
#[component]
pub fn SupportingContent(
    data_points: Vec<DataPoint>,
    on_citation_clicked: Callback<ActiveCitation>,
) -> impl IntoView {
    view! {
        <ul class="supporting-content">
            {data_points
                .into_iter()
                .map(|point| {
                    let citation = ActiveCitation::from_data_point(&point);
                    let file_name = point.file_name().to_string();
                    let href = point.web_url.clone();
                    view! {
                        <li class="supporting-content-item">
                            <h4 class="supporting-content-title">
                                <button
                                    class="citation-link"
                                    on:click=move |_| on_citation_clicked.run(citation.clone())
                                >
                                    {file_name}
                                </button>
                            </h4>
                            <a href=href target="_blank" rel="noopener noreferrer">
                                {point.web_url}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}
