//! Navigation guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every routed view is wrapped in `Guarded`, which re-evaluates `navigate`
//! against the current session before the page renders and whenever the
//! signed-in flag flips. `/` and every location no route matches render
//! `Unrouted`, which resolves them through the same table. The decision reads
//! memory only; it never waits on I/O.
//!
//! The guard is UX only. The API enforces access with the bearer token.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;
use leptos_router::hooks::use_location;

use super::routes::{self, LANDING_PATH, LOGIN_PATH, REGISTER_PATH, ROOT_PATH, ROOT_REDIRECT, RouteDescriptor};
use crate::state::session::use_session;

/// Outcome of a navigation attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Navigation {
    Allow,
    Redirect(&'static str),
}

/// Three-way decision for a resolved route.
///
/// Protected routes send anonymous visitors to `/login`; the login and
/// register pages send signed-in users to the landing page; everything else
/// passes.
pub fn decide(path: &str, requires_auth: bool, authenticated: bool) -> Navigation {
    if requires_auth && !authenticated {
        Navigation::Redirect(LOGIN_PATH)
    } else if (path == LOGIN_PATH || path == REGISTER_PATH) && authenticated {
        Navigation::Redirect(LANDING_PATH)
    } else {
        Navigation::Allow
    }
}

/// Decision for a raw location, resolving it against the route table.
///
/// `/` redirects first and the target is then guarded like any other
/// navigation. Unknown paths are public.
pub fn navigate(raw: &str, authenticated: bool) -> Navigation {
    let path = routes::normalize_path(raw);
    if path == ROOT_PATH {
        return match navigate(ROOT_REDIRECT, authenticated) {
            Navigation::Allow => Navigation::Redirect(ROOT_REDIRECT),
            redirect => redirect,
        };
    }
    let requires_auth = routes::find(path).is_some_and(|route| route.requires_auth);
    decide(path, requires_auth, authenticated)
}

/// Decision for a location that matched no concrete route.
///
/// Guard redirects win. A known path in a non-canonical form (trailing
/// slash) redirects to its canonical path. `Allow` means nothing matched.
pub fn resolve_unmatched(raw: &str, authenticated: bool) -> Navigation {
    match navigate(raw, authenticated) {
        Navigation::Allow => routes::find(routes::normalize_path(raw))
            .map_or(Navigation::Allow, |route| Navigation::Redirect(route.path)),
        redirect => redirect,
    }
}

/// Renders `route`'s view when the guard allows it, otherwise redirects.
#[component]
pub fn Guarded(route: &'static RouteDescriptor) -> impl IntoView {
    let authenticated = use_session().authenticated();

    move || match navigate(route.path, authenticated.get()) {
        Navigation::Allow => (route.view)(),
        Navigation::Redirect(target) => {
            log::debug!("guard redirect: {} -> {target}", route.path);
            view! { <Redirect path=target /> }.into_any()
        }
    }
}

/// Root and fallback view: redirects per [`resolve_unmatched`], or shows a
/// not-found notice.
#[component]
pub fn Unrouted() -> impl IntoView {
    let authenticated = use_session().authenticated();
    let location = use_location();

    move || {
        let raw = location.pathname.get();
        match resolve_unmatched(&raw, authenticated.get()) {
            Navigation::Allow => view! { <p class="not-found">"Page not found."</p> }.into_any(),
            Navigation::Redirect(target) => {
                log::debug!("unrouted redirect: {raw} -> {target}");
                view! { <Redirect path=target /> }.into_any()
            }
        }
    }
}
