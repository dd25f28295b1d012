//! Account registration page. Registers, then signs in with the same
//! credentials.

use leptos::prelude::*;

use crate::pages::leave_when_authenticated;
use crate::state::session::AppSession;
use crate::util::forms::validate_signup_input;
use crate::util::guard::DEFAULT_LANDING_PATH;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    leave_when_authenticated(session.clone(), || DEFAULT_LANDING_PATH.to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let input = match validate_signup_input(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        ) {
            Ok(input) => input,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Creating account...".to_owned());

        let session = session.clone();
        leptos::task::spawn_local(async move {
            let result = match session.register(&input.name, &input.email, &input.password).await {
                Ok(()) => session.login(&input.email, &input.password).await.map(|_| ()),
                Err(e) => Err(e),
            };
            if let Err(e) = result {
                let _ = info.try_set(format!("Sign up failed: {e}"));
            }
            let _ = busy.try_set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <label class="auth-form__label">
                {label}
                <input
                    class="auth-input"
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </label>
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h1>"ProjectPulse"</h1>
                <p class="auth-card__subtitle">"Create your account"</p>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full name", "text", name)}
                    {field("Email", "email", email)}
                    {field("Password", "password", password)}
                    {field("Confirm password", "password", confirm)}
                    <button class="btn btn--primary auth-button" type="submit" disabled=move || busy.get()>
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="auth-message">{move || info.get()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <a href="/login">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
