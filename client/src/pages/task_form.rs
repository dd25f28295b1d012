//! Create / edit task form under a project.
//!
//! Serves `/project/:id/create-task` and `/project/:id/edit-task/:task_id`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::{Priority, TaskStatus, UserSummary};
use crate::pages::parse_route_id;
use crate::state::session::AppSession;
use crate::util::forms::{TaskDraft, validate_task_draft};

#[component]
pub fn TaskFormPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let navigate = use_navigate();
    let project_id = move || params.with(|p| parse_route_id(p.get("id").as_deref()));
    let task_id = move || params.with(|p| parse_route_id(p.get("task_id").as_deref()));

    let draft = RwSignal::new(TaskDraft::default());
    let users = RwSignal::new(Vec::<UserSummary>::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let loader = session.clone();
    Effect::new(move || {
        let editing = task_id();
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.list_users().await {
                Ok(rows) => {
                    let _ = users.try_set(rows);
                }
                Err(e) => leptos::logging::warn!("user list unavailable: {e}"),
            }
            let Some(id) = editing else {
                return;
            };
            match api.get_task(id).await {
                Ok(task) => {
                    let _ = draft.try_set(TaskDraft::from_task(&task));
                }
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        let _ = info.try_set(message);
                    }
                }
            }
        });
    });

    let back_href = move || project_id().map(|id| format!("/project/{id}")).unwrap_or_else(|| "/dashboard".to_owned());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let Some(project) = project_id() else {
            info.set("Project not found.".to_owned());
            return;
        };
        let payload = match validate_task_draft(&draft.get_untracked()) {
            Ok(payload) => payload,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set(String::new());

        let api = session.api();
        let navigate = navigate.clone();
        let editing = task_id();
        leptos::task::spawn_local(async move {
            let result = match editing {
                Some(id) => api.update_task(id, &payload).await,
                None => api.create_task(project, &payload).await.map(|_| ()),
            };
            match result {
                Ok(()) => navigate(&format!("/project/{project}"), NavigateOptions::default()),
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        let _ = info.try_set(message);
                    }
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    let select = move |label: &'static str,
                       read: fn(&TaskDraft) -> &String,
                       write: fn(&mut TaskDraft) -> &mut String,
                       options: Vec<(&'static str, &'static str)>| {
        view! {
            <label class="form__label">
                {label}
                <select
                    class="form__input"
                    prop:value=move || draft.with(|d| read(d).clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| *write(d) = value);
                    }
                >
                    <option value="">"Select..."</option>
                    {options
                        .into_iter()
                        .map(|(value, text)| view! { <option value=value>{text}</option> })
                        .collect::<Vec<_>>()}
                </select>
            </label>
        }
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           read: fn(&TaskDraft) -> &String,
                           write: fn(&mut TaskDraft) -> &mut String| {
        view! {
            <label class="form__label">
                {label}
                <input
                    class="form__input"
                    type=kind
                    prop:value=move || draft.with(|d| read(d).clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|d| *write(d) = value);
                    }
                />
            </label>
        }
    };

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main form-page">
                <a class="btn btn--ghost" href=back_href>"← Back to Project"</a>
                <h1>{move || if task_id().is_some() { "Edit Task" } else { "Create New Task" }}</h1>
                <form class="form card" on:submit=on_submit>
                    {text_field("Task title *", "text", |d| &d.title, |d| &mut d.title)}
                    <label class="form__label">
                        "Description *"
                        <textarea
                            class="form__input"
                            prop:value=move || draft.with(|d| d.description.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.description = value);
                            }
                        ></textarea>
                    </label>
                    {select(
                        "Status *",
                        |d| &d.status,
                        |d| &mut d.status,
                        TaskStatus::ALL.into_iter().map(|s| (s.as_key(), s.label())).collect(),
                    )}
                    {select(
                        "Priority *",
                        |d| &d.priority,
                        |d| &mut d.priority,
                        Priority::ALL.into_iter().map(|p| (p.as_key(), p.as_wire())).collect(),
                    )}
                    <label class="form__label">
                        "Assignee"
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.assignee.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.assignee = value);
                            }
                        >
                            <option value="">"Unassigned"</option>
                            {move || {
                                users
                                    .get()
                                    .into_iter()
                                    .map(|u| view! { <option value=u.user_id.to_string()>{u.name}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                    </label>
                    {text_field("Due date", "date", |d| &d.due_date, |d| &mut d.due_date)}
                    {text_field("Image URL", "url", |d| &d.image_url, |d| &mut d.image_url)}
                    <Show when=move || !info.get().is_empty()>
                        <p class="page__error">{move || info.get()}</p>
                    </Show>
                    <div class="form__actions">
                        <a class="btn" href=back_href>"Cancel"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if task_id().is_some() { "Save Changes" } else { "Create Task" }}
                        </button>
                    </div>
                </form>
            </main>
        </div>
    }
}
