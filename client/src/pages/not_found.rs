//! Fallback for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Oops! Page not found."</p>
            <a class="btn btn--primary" href="/">"Return to Home"</a>
        </div>
    }
}
