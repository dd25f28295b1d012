//! Route-guard decisions for protected views.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` evaluates `guard_decision` on every session change. The
//! redirect target carries the requested location in `from` so the login page
//! can send the user back once authenticated.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use url::form_urlencoded;

use crate::state::session::SessionStatus;

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_LANDING_PATH: &str = "/dashboard";

/// What a protected route renders for the current session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    /// Session still restoring: show the waiting indicator only.
    Wait,
    /// Render the requested view unchanged.
    Render,
    /// Replace the current history entry with this login URL.
    Redirect(String),
}

/// Decide how to handle a request for `requested` (path plus query).
pub fn guard_decision(status: SessionStatus, requested: &str) -> GuardDecision {
    match status {
        SessionStatus::Loading => GuardDecision::Wait,
        SessionStatus::Authenticated => GuardDecision::Render,
        SessionStatus::Anonymous => GuardDecision::Redirect(login_redirect_path(requested)),
    }
}

/// `/login?from=<requested>`, or bare `/login` when there is nothing worth
/// returning to.
pub fn login_redirect_path(requested: &str) -> String {
    if !is_return_target(requested) {
        return LOGIN_PATH.to_owned();
    }
    let encoded: String = form_urlencoded::byte_serialize(requested.as_bytes()).collect();
    format!("{LOGIN_PATH}?from={encoded}")
}

/// Where to go after a successful login, given the `from` query value.
pub fn post_login_target(from: Option<&str>) -> String {
    match from {
        Some(target) if is_return_target(target) => target.to_owned(),
        _ => DEFAULT_LANDING_PATH.to_owned(),
    }
}

/// Same-site absolute paths only; never the login page itself.
fn is_return_target(path: &str) -> bool {
    if !path.starts_with('/') || path.starts_with("//") || path.contains('\\') {
        return false;
    }
    let route = path.split(['?', '#']).next().unwrap_or_default();
    route != "/" && route != LOGIN_PATH && !route.starts_with("/login/")
}

/// Join a router pathname and raw query string into one location.
pub fn requested_location(pathname: &str, search: &str) -> String {
    let query = search.trim_start_matches('?');
    if query.is_empty() {
        pathname.to_owned()
    } else {
        format!("{pathname}?{query}")
    }
}
