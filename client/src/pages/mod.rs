//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped fetching and form state and delegates list
//! rendering to `components`. Protected pages assume `ProtectedRoute` has
//! already confirmed an authenticated session.

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;

pub mod dashboard;
pub mod index;
pub mod login;
pub mod my_tasks;
pub mod not_found;
pub mod profile;
pub mod project_detail;
pub mod project_form;
pub mod signup;
pub mod task_form;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::{AppSession, SessionStatus};

/// Numeric route parameter such as `:id`; `None` when absent or malformed.
pub(crate) fn parse_route_id(raw: Option<&str>) -> Option<i64> {
    raw?.trim().parse().ok().filter(|id: &i64| *id > 0)
}

/// Leave an auth page for `target` as soon as the session is authenticated,
/// whether restored from storage or freshly logged in.
pub(crate) fn leave_when_authenticated(session: AppSession, target: impl Fn() -> String + 'static) {
    let navigate = use_navigate();
    Effect::new(move || {
        if session.status() == SessionStatus::Authenticated {
            navigate(&target(), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
