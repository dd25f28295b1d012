//! Top navigation bar shown on every authenticated page.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Notification;
use crate::state::session::AppSession;

/// Number of upcoming tasks listed in the notification dropdown.
const NOTIFICATION_LIMIT: usize = 5;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let navigate = use_navigate();

    let notifications = RwSignal::new(Vec::<Notification>::new());
    let show_notifications = RwSignal::new(false);

    let loader = session.clone();
    Effect::new(move || {
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.notifications().await {
                Ok(mut rows) => {
                    rows.truncate(NOTIFICATION_LIMIT);
                    let _ = notifications.try_set(rows);
                }
                Err(err) => leptos::logging::warn!("notifications unavailable: {err}"),
            }
        });
    });

    let reader = session.clone();
    let display_name = move || reader.user().map(|u| u.name).unwrap_or_default();
    let badge = {
        let display_name = display_name.clone();
        move || initials(&display_name())
    };

    let on_logout = move |_| {
        session.logout();
        navigate("/login", NavigateOptions { replace: true, ..NavigateOptions::default() });
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/dashboard">"ProjectPulse"</a>
            <nav class="navbar__links">
                <a href="/dashboard">"Projects"</a>
                <a href="/my-tasks">"My Tasks"</a>
            </nav>
            <span class="navbar__spacer"></span>
            <div class="navbar__notifications">
                <button
                    class="btn navbar__bell"
                    title="Upcoming tasks"
                    on:click=move |_| show_notifications.update(|open| *open = !*open)
                >
                    "🔔"
                    <Show when=move || !notifications.get().is_empty()>
                        <span class="navbar__bell-count">{move || notifications.get().len()}</span>
                    </Show>
                </button>
                <Show when=move || show_notifications.get()>
                    <ul class="navbar__dropdown">
                        <Show
                            when=move || !notifications.get().is_empty()
                            fallback=|| view! { <li class="navbar__empty">"No upcoming tasks"</li> }
                        >
                            {move || {
                                notifications
                                    .get()
                                    .into_iter()
                                    .map(|n| view! { <li>{notification_line(&n)}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </Show>
                    </ul>
                </Show>
            </div>
            <a class="navbar__profile" href="/profile" title="Profile">
                <span class="navbar__avatar">{badge}</span>
                <span class="navbar__name">{display_name}</span>
            </a>
            <button class="btn navbar__logout" on:click=on_logout>
                "Logout"
            </button>
        </header>
    }
}

/// Up to two uppercase initials for the avatar badge.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|part| part.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

fn notification_line(notification: &Notification) -> String {
    let mut line = notification.title.clone();
    if let Some(due) = notification.due_date.as_deref().filter(|d| !d.is_empty()) {
        line.push_str(&format!(" · due {due}"));
    }
    if let Some(assignee) = notification.assignee.as_deref().filter(|a| !a.is_empty()) {
        line.push_str(&format!(" · {assignee}"));
    }
    line
}
