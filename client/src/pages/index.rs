//! Public landing page.

use leptos::prelude::*;

use crate::state::session::{AppSession, SessionStatus};

#[component]
pub fn IndexPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let signed_in = move || session.status() == SessionStatus::Authenticated;

    view! {
        <div class="landing">
            <header class="landing__nav">
                <span class="landing__brand">"ProjectPulse"</span>
                <Show
                    when=signed_in
                    fallback=|| {
                        view! {
                            <a class="btn" href="/login">"Sign In"</a>
                            <a class="btn btn--primary" href="/signup">"Get Started"</a>
                        }
                    }
                >
                    <a class="btn btn--primary" href="/dashboard">"Go to Dashboard"</a>
                </Show>
            </header>
            <main class="landing__hero">
                <h1>"Manage projects with clarity"</h1>
                <p>
                    "Track projects, assign tasks, and watch progress in one place. "
                    "ProjectPulse keeps your team aligned from kickoff to delivery."
                </p>
                <a class="btn btn--primary btn--large" href="/signup">"Start for free"</a>
            </main>
            <section class="landing__features">
                <div class="card">
                    <h3>"Projects"</h3>
                    <p>"Organize work by priority, tags, and deadlines."</p>
                </div>
                <div class="card">
                    <h3>"Tasks"</h3>
                    <p>"Break projects into tasks and follow them from To Do to Completed."</p>
                </div>
                <div class="card">
                    <h3>"Teams"</h3>
                    <p>"Add members, assign owners, and discuss work in comments."</p>
                </div>
            </section>
        </div>
    }
}
