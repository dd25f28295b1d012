//! Dashboard page listing projects with search, priority filter, and delete.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the default authenticated landing route. It loads the project
//! inventory once on mount and filters it client-side.

use leptos::prelude::*;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::navbar::Navbar;
use crate::components::priority_select::PrioritySelect;
use crate::components::project_card::ProjectCard;
use crate::net::types::Project;
use crate::state::session::AppSession;
use crate::util::filter::{PriorityFilter, filter_projects};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let projects = RwSignal::new(Vec::<Project>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let priority = RwSignal::new(PriorityFilter::All);
    let delete_project_id = RwSignal::new(None::<i64>);

    let loader = session.clone();
    Effect::new(move || {
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.list_projects().await {
                Ok(rows) => {
                    let _ = projects.try_set(rows);
                }
                Err(e) => {
                    let _ = error.try_set(e.user_message());
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let visible = move || {
        let rows = projects.get();
        filter_projects(&rows, &search.get(), priority.get()).into_iter().cloned().collect::<Vec<_>>()
    };

    let on_delete_request = Callback::new(move |id: i64| delete_project_id.set(Some(id)));
    let on_delete_cancel = Callback::new(move |()| delete_project_id.set(None));
    let on_delete_confirm = Callback::new(move |()| {
        let Some(id) = delete_project_id.get_untracked() else {
            return;
        };
        delete_project_id.set(None);
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.delete_project(id).await {
                Ok(()) => {
                    let _ = projects.try_update(|rows| rows.retain(|p| p.project_id != id));
                }
                Err(e) => {
                    let _ = error.try_set(e.user_message());
                }
            }
        });
    });

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main dashboard-page">
                <header class="page__header">
                    <div>
                        <h1>"Projects"</h1>
                        <p class="page__subtitle">"Manage and track your projects in one place"</p>
                    </div>
                    <a class="btn btn--primary" href="/create-project">"+ New Project"</a>
                </header>

                <div class="filters">
                    <input
                        class="filters__search"
                        type="search"
                        placeholder="Search projects..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <PrioritySelect value=priority/>
                </div>

                <Show when=move || error.get().is_some()>
                    <p class="page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading projects..."</p> }>
                    <Show
                        when=move || !visible().is_empty()
                        fallback=move || {
                            view! {
                                <div class="empty-state">
                                    <h3>"No projects found"</h3>
                                    <p>
                                        {move || {
                                            if projects.get().is_empty() {
                                                "Create your first project to get started."
                                            } else {
                                                "Try adjusting your search or filters."
                                            }
                                        }}
                                    </p>
                                </div>
                            }
                        }
                    >
                        <div class="card-grid">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|project| view! { <ProjectCard project=project on_delete=on_delete_request/> })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
                <Show when=move || delete_project_id.get().is_some()>
                    <ConfirmDialog
                        title="Delete Project"
                        message="This will permanently delete the project and its tasks."
                        on_cancel=on_delete_cancel
                        on_confirm=on_delete_confirm
                    />
                </Show>
            </main>
        </div>
    }
}
