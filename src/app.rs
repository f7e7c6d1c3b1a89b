//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::AppConfig;
use crate::net::api::HttpTransport;
use crate::router::guard::{Guarded, Unrouted};
use crate::router::routes::{LOGIN, REGISTER, REPORTS, TRACKING};
use crate::state::session::SessionStore;
use crate::state::storage::BrowserStorage;

/// Root application component.
///
/// Opens the session store over `localStorage`, provides it and the HTTP
/// transport to every page, and closes the store when the app unmounts.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = AppConfig::load();
    log::debug!("api base url: {}", config.api_base_url);

    let session = SessionStore::open(BrowserStorage);
    provide_context(session);
    provide_context(HttpTransport::from_config(&config));
    on_cleanup(move || session.close());

    view! {
        <Title text="Shipment Portal"/>

        <Router>
            <Routes fallback=|| view! { <Unrouted /> }>
                <Route path=StaticSegment("") view=Unrouted />
                <Route path=StaticSegment(LOGIN.segment()) view={|| view! { <Guarded route={&LOGIN} /> }} />
                <Route path=StaticSegment(REGISTER.segment()) view={|| view! { <Guarded route={&REGISTER} /> }} />
                <Route path=StaticSegment(TRACKING.segment()) view={|| view! { <Guarded route={&TRACKING} /> }} />
                <Route path=StaticSegment(REPORTS.segment()) view={|| view! { <Guarded route={&REPORTS} /> }} />
            </Routes>
        </Router>
    }
}

/// Returns the HTTP transport from context, or one built from config when
/// rendered outside [`App`].
pub fn use_transport() -> HttpTransport {
    use_context::<HttpTransport>().unwrap_or_else(|| HttpTransport::from_config(&AppConfig::load()))
}
