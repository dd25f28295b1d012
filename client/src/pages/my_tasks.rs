//! Tasks assigned to the signed-in user, split into status tabs.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::priority_select::PrioritySelect;
use crate::components::task_card::TaskCard;
use crate::net::types::{Task, TaskStatus};
use crate::state::session::AppSession;
use crate::util::filter::{PriorityFilter, StatusTab, TaskCounts, filter_tasks};

const TABS: [StatusTab; 4] = [
    StatusTab::All,
    StatusTab::Only(TaskStatus::Todo),
    StatusTab::Only(TaskStatus::InProgress),
    StatusTab::Only(TaskStatus::Completed),
];

fn tab_label(tab: StatusTab) -> &'static str {
    match tab {
        StatusTab::All => "All",
        StatusTab::Only(status) => status.label(),
    }
}

#[component]
pub fn MyTasksPage() -> impl IntoView {
    let session = expect_context::<AppSession>();

    let tasks = RwSignal::new(Vec::<Task>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);
    let search = RwSignal::new(String::new());
    let priority = RwSignal::new(PriorityFilter::All);
    let tab = RwSignal::new(StatusTab::All);

    Effect::new(move || {
        let Some(user) = session.user() else {
            return;
        };
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.my_tasks(&user).await {
                Ok(rows) => {
                    let _ = tasks.try_set(rows);
                }
                Err(e) => {
                    let _ = error.try_set(e.user_message());
                }
            }
            let _ = loading.try_set(false);
        });
    });

    let counts = Memo::new(move |_| tasks.with(|rows| TaskCounts::from_tasks(rows)));
    let visible = move || {
        let rows = tasks.get();
        filter_tasks(&rows, &search.get(), priority.get(), tab.get()).into_iter().cloned().collect::<Vec<_>>()
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main my-tasks">
                <header class="page__header">
                    <div>
                        <h1>"My Tasks"</h1>
                        <p class="page__subtitle">"Everything assigned to you across projects"</p>
                    </div>
                </header>

                <div class="filters">
                    <input
                        class="filters__search"
                        type="search"
                        placeholder="Search tasks..."
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    <PrioritySelect value=priority/>
                </div>

                <nav class="tabs">
                    {TABS
                        .into_iter()
                        .map(|t| {
                            view! {
                                <button
                                    class="tabs__tab"
                                    class:tabs__tab--active=move || tab.get() == t
                                    on:click=move |_| tab.set(t)
                                >
                                    {tab_label(t)}
                                    <span class="tabs__count">{move || counts.get().for_tab(t)}</span>
                                </button>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <Show when=move || error.get().is_some()>
                    <p class="page__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading tasks..."</p> }>
                    <Show
                        when=move || !visible().is_empty()
                        fallback=|| view! { <div class="empty-state"><p>"No tasks found."</p></div> }
                    >
                        <div class="card-grid">
                            {move || {
                                visible()
                                    .into_iter()
                                    .map(|task| {
                                        let edit_href = task
                                            .project_id
                                            .map(|pid| format!("/project/{pid}/edit-task/{}", task.task_id));
                                        view! { <TaskCard task=task assignee=Some("You".to_owned()) edit_href=edit_href/> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </Show>
            </main>
        </div>
    }
}
