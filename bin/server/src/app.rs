//! Main Leptos application component and routing.

use crate::components::Layout;
use crate::pages::ChatPage;
use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    components::{ParentRoute, Route, Router, Routes},
    path,
};

/// The main application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Graph Search Chat"/>
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <ParentRoute path=path!("") view=Layout>
                    <Route path=path!("") view=ChatPage/>
                </ParentRoute>
            </Routes>
        </Router>
    }
}
