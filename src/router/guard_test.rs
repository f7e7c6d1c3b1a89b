use super::*;
use crate::router::routes::{REPORTS_PATH, ROUTES, TRACKING_PATH};

// =============================================================
// decide
// =============================================================

#[test]
fn protected_routes_redirect_anonymous_to_login() {
    for route in ROUTES.iter().filter(|r| r.requires_auth) {
        assert_eq!(
            decide(route.path, route.requires_auth, false),
            Navigation::Redirect("/login"),
            "{} should require auth",
            route.path
        );
    }
}

#[test]
fn protected_routes_allow_authenticated() {
    assert_eq!(decide(TRACKING_PATH, true, true), Navigation::Allow);
    assert_eq!(decide(REPORTS_PATH, true, true), Navigation::Allow);
}

#[test]
fn login_and_register_redirect_authenticated_to_tracking() {
    assert_eq!(decide("/login", false, true), Navigation::Redirect("/tracking"));
    assert_eq!(decide("/register", false, true), Navigation::Redirect("/tracking"));
}

#[test]
fn login_and_register_allow_anonymous() {
    assert_eq!(decide("/login", false, false), Navigation::Allow);
    assert_eq!(decide("/register", false, false), Navigation::Allow);
}

#[test]
fn requires_auth_takes_precedence_over_login_rule() {
    // A protected route at /login would still bounce anonymous visitors.
    assert_eq!(decide("/login", true, false), Navigation::Redirect("/login"));
}

#[test]
fn public_unknown_route_is_allowed_either_way() {
    assert_eq!(decide("/about", false, false), Navigation::Allow);
    assert_eq!(decide("/about", false, true), Navigation::Allow);
}

// =============================================================
// navigate
// =============================================================

#[test]
fn navigate_resolves_protected_paths() {
    assert_eq!(navigate("/tracking", false), Navigation::Redirect("/login"));
    assert_eq!(navigate("/reports/", false), Navigation::Redirect("/login"));
    assert_eq!(navigate("/tracking?number=9400", true), Navigation::Allow);
}

#[test]
fn navigate_root_goes_to_login_then_guard() {
    assert_eq!(navigate("/", false), Navigation::Redirect("/login"));
    assert_eq!(navigate("/", true), Navigation::Redirect("/tracking"));
}

#[test]
fn navigate_auth_pages_for_signed_in_user() {
    assert_eq!(navigate("/login", true), Navigation::Redirect("/tracking"));
    assert_eq!(navigate("/register#form", true), Navigation::Redirect("/tracking"));
    assert_eq!(navigate("/login", false), Navigation::Allow);
}

#[test]
fn navigate_unknown_path_is_public() {
    assert_eq!(navigate("/nowhere", false), Navigation::Allow);
}

// =============================================================
// resolve_unmatched
// =============================================================

#[test]
fn unmatched_root_follows_root_redirect() {
    assert_eq!(resolve_unmatched("/", false), Navigation::Redirect("/login"));
    assert_eq!(resolve_unmatched("", true), Navigation::Redirect("/tracking"));
}

#[test]
fn unmatched_trailing_slash_goes_to_canonical_path() {
    assert_eq!(resolve_unmatched("/tracking/", true), Navigation::Redirect("/tracking"));
    assert_eq!(resolve_unmatched("/reports/", false), Navigation::Redirect("/login"));
    assert_eq!(resolve_unmatched("/register/", false), Navigation::Redirect("/register"));
}

#[test]
fn unmatched_unknown_path_is_not_found() {
    assert_eq!(resolve_unmatched("/nowhere", false), Navigation::Allow);
    assert_eq!(resolve_unmatched("/nowhere?x=1", true), Navigation::Allow);
}
