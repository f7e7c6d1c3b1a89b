//! Header shared by the signed-in pages.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::router::routes::{REPORTS_PATH, TRACKING_PATH};
use crate::state::session::use_session;

#[component]
pub fn PortalNav() -> impl IntoView {
    let session = use_session();
    let greeting = move || session.user().map(|u| u.display_name()).unwrap_or_default();

    // Logging out flips the session; the route guard then redirects to /login.
    view! {
        <nav class="portal-nav">
            <A href=TRACKING_PATH>"Tracking"</A>
            <A href=REPORTS_PATH>"Reports"</A>
            <span class="portal-nav__user">{greeting}</span>
            <button class="portal-nav__logout" on:click=move |_| session.logout()>
                "Log out"
            </button>
        </nav>
    }
}
