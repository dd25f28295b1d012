//! Email + password login page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reached directly or through a guard redirect carrying `?from=<path>`.
//! Navigation after success is driven by the session change, so a session
//! restored from storage skips the form the same way.

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::pages::leave_when_authenticated;
use crate::state::session::AppSession;
use crate::util::forms::validate_login_input;
use crate::util::guard::post_login_target;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    leave_when_authenticated(session.clone(), move || {
        post_login_target(query.with_untracked(|q| q.get("from")).as_deref())
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let (email_value, password_value) =
            match validate_login_input(&email.get_untracked(), &password.get_untracked()) {
                Ok(input) => input,
                Err(message) => {
                    info.set(message.to_owned());
                    return;
                }
            };
        busy.set(true);
        info.set("Signing in...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            match session.login(&email_value, &password_value).await {
                Ok(user) => leptos::logging::log!("signed in as {}", user.email),
                Err(e) => {
                    let _ = info.try_set(format!("Login failed: {e}"));
                }
            }
            let _ = busy.try_set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"ProjectPulse"</h1>
                <p class="auth-card__subtitle">"Sign in to your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    <label class="auth-form__label">
                        "Email"
                        <input
                            class="auth-input"
                            type="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="auth-form__label">
                        "Password"
                        <input
                            class="auth-input"
                            type="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                        />
                    </label>
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <a href="/signup">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
