//! Static route table.
//!
//! Each descriptor pairs a path with its auth requirement and a view
//! constructor. The constructor is a plain `fn` pointer, so a page is only
//! built when its route is actually rendered.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use leptos::prelude::*;

use crate::pages::{LoginPage, RegisterPage, ReportsPage, TrackingPage};

pub const ROOT_PATH: &str = "/";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";
pub const TRACKING_PATH: &str = "/tracking";
pub const REPORTS_PATH: &str = "/reports";

/// Where `/` sends every visitor.
pub const ROOT_REDIRECT: &str = LOGIN_PATH;
/// Where signed-in users land when they open the login or register page.
pub const LANDING_PATH: &str = TRACKING_PATH;

/// Metadata for one navigable page.
#[derive(Clone, Copy)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub requires_auth: bool,
    pub view: fn() -> AnyView,
}

impl RouteDescriptor {
    /// Path without the leading slash, as the router's static segment.
    pub fn segment(&self) -> &'static str {
        self.path.trim_start_matches('/')
    }
}

pub static LOGIN: RouteDescriptor = RouteDescriptor {
    path: LOGIN_PATH,
    name: "Login",
    requires_auth: false,
    view: || view! { <LoginPage /> }.into_any(),
};

pub static REGISTER: RouteDescriptor = RouteDescriptor {
    path: REGISTER_PATH,
    name: "Register",
    requires_auth: false,
    view: || view! { <RegisterPage /> }.into_any(),
};

pub static TRACKING: RouteDescriptor = RouteDescriptor {
    path: TRACKING_PATH,
    name: "Tracking",
    requires_auth: true,
    view: || view! { <TrackingPage /> }.into_any(),
};

pub static REPORTS: RouteDescriptor = RouteDescriptor {
    path: REPORTS_PATH,
    name: "Reports",
    requires_auth: true,
    view: || view! { <ReportsPage /> }.into_any(),
};

/// Every named route, in declaration order.
pub static ROUTES: [&RouteDescriptor; 4] = [&LOGIN, &REGISTER, &TRACKING, &REPORTS];

/// Look up the descriptor for an already-normalized path.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    ROUTES.iter().copied().find(|route| route.path == path)
}

/// Strip query and fragment, collapse a trailing slash, and default to `/`.
pub fn normalize_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    let path = raw[..end].trim();
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() { ROOT_PATH } else { trimmed }
}
