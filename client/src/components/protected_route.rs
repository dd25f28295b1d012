//! Route guard wrapper for authenticated views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected route. While the session is restoring only a loading
//! indicator renders, so protected content never flashes and no redirect
//! fires early. Once anonymous, the guard replaces the history entry with the
//! login URL so Back does not return to the blocked page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::state::session::AppSession;
use crate::util::guard::{GuardDecision, guard_decision, requested_location};

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<AppSession>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = Memo::new(move |_| {
        let requested = requested_location(&location.pathname.get(), &location.search.get());
        guard_decision(session.status(), &requested)
    });

    Effect::new(move || {
        if let GuardDecision::Redirect(target) = decision.get() {
            navigate(&target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    move || match decision.get() {
        GuardDecision::Render => children().into_any(),
        GuardDecision::Wait => view! {
            <div class="route-guard" aria-busy="true">
                <span class="route-guard__spinner" aria-hidden="true"></span>
                <p>"Loading..."</p>
            </div>
        }
        .into_any(),
        GuardDecision::Redirect(_) => view! {
            <div class="route-guard">
                <p>"Redirecting to login..."</p>
            </div>
        }
        .into_any(),
    }
}
