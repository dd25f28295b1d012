//! Profile page: the signed-in identity and a summary of assigned work.

use leptos::prelude::*;

use crate::components::navbar::{Navbar, initials};
use crate::net::types::UserSummary;
use crate::state::session::AppSession;
use crate::util::filter::TaskCounts;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let account = RwSignal::new(None::<UserSummary>);
    let counts = RwSignal::new(TaskCounts::default());

    let loader = session.clone();
    Effect::new(move || {
        let Some(user) = loader.user() else {
            return;
        };
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.get_user(user.id).await {
                Ok(row) => {
                    let _ = account.try_set(Some(row));
                }
                Err(e) => leptos::logging::warn!("profile lookup failed: {e}"),
            }
            match api.my_tasks(&user).await {
                Ok(tasks) => {
                    let _ = counts.try_set(TaskCounts::from_tasks(&tasks));
                }
                Err(e) => leptos::logging::warn!("task summary unavailable: {e}"),
            }
        });
    });

    let reader = session.clone();
    let name = move || reader.user().map(|u| u.name).unwrap_or_default();
    let email = move || session.user().map(|u| u.email).unwrap_or_default();
    let joined = move || account.get().and_then(|a| a.created_at).unwrap_or_else(|| "Unknown".to_owned());

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main profile-page">
                <section class="card profile-page__identity">
                    <span class="profile-page__avatar">
                        {
                            let name = name.clone();
                            move || initials(&name())
                        }
                    </span>
                    <div>
                        <h1>{name}</h1>
                        <p class="page__subtitle">{email}</p>
                        <p class="profile-page__joined">"Member since " {joined}</p>
                    </div>
                </section>
                <section class="card profile-page__stats">
                    <h2>"My Work"</h2>
                    <dl>
                        <dt>"Assigned tasks"</dt>
                        <dd>{move || counts.get().all}</dd>
                        <dt>"To Do"</dt>
                        <dd>{move || counts.get().todo}</dd>
                        <dt>"In Progress"</dt>
                        <dd>{move || counts.get().in_progress}</dd>
                        <dt>"Completed"</dt>
                        <dd>{move || counts.get().completed}</dd>
                    </dl>
                    <a class="btn" href="/my-tasks">"View my tasks"</a>
                </section>
            </main>
        </div>
    }
}
