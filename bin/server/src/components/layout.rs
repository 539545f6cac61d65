//! Page chrome: title bar with the signed-in user.

use crate::user::{get_login_user, login_state};
use leptos::prelude::*;
use leptos_router::components::{A, Outlet};

/// Title shown in the header.
pub const HEADER_TITLE: &str = "Graph Search APIを利用した社内情報検索";

/// Layout wrapping every page.
///
/// The user name is fetched once per mount. Until it resolves the slot is
/// empty; any failure shows "anonymous".
#[component]
pub fn Layout() -> impl IntoView {
    let login_user = Resource::new(|| (), |_| get_login_user());

    view! {
        <div class="layout">
            <header class="header" role="banner">
                <div class="header-container">
                    <A href="/" attr:class="header-title-container">
                        <h3 class="header-title-left">{HEADER_TITLE}</h3>
                    </A>
                    <Suspense fallback=|| view! { <h3 class="header-title-right"></h3> }>
                        <h3 class="header-title-right">
                            {move || login_state(login_user.get()).display_name().to_string()}
                        </h3>
                    </Suspense>
                </div>
            </header>

            <Outlet/>
        </div>
    }
}
