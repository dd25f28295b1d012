//! Project detail page: header, progress, team, tasks, and comments.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything shown here is keyed by the `:id` route param. Each section
//! reloads on its own after a mutation so one slow list does not block the
//! others.

#[cfg(test)]
#[path = "project_detail_test.rs"]
mod project_detail_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::navbar::Navbar;
use crate::components::task_card::TaskCard;
use crate::net::http::{ApiClient, HttpTransport};
use crate::net::types::{Comment, CommentPayload, Member, MemberPayload, Project, Task, TaskStatus, UserSummary};
use crate::pages::parse_route_id;
use crate::state::session::AppSession;
use crate::util::filter::{member_user_id, non_members, progress_percent, user_name};
use crate::util::forms::validate_comment;

/// Signals backing the page, grouped so loaders can take them by copy.
#[derive(Clone, Copy)]
struct Detail {
    project: RwSignal<Option<Project>>,
    tasks: RwSignal<Vec<Task>>,
    progress: RwSignal<u8>,
    members: RwSignal<Vec<Member>>,
    comments: RwSignal<Vec<Comment>>,
    users: RwSignal<Vec<UserSummary>>,
    error: RwSignal<Option<String>>,
}

impl Detail {
    fn new() -> Self {
        Self {
            project: RwSignal::new(None),
            tasks: RwSignal::new(Vec::new()),
            progress: RwSignal::new(0),
            members: RwSignal::new(Vec::new()),
            comments: RwSignal::new(Vec::new()),
            users: RwSignal::new(Vec::new()),
            error: RwSignal::new(None),
        }
    }

    fn report(self, err: &crate::net::http::ApiError) {
        if let Some(message) = err.user_message() {
            let _ = self.error.try_set(Some(message));
        }
    }
}

async fn load_tasks(api: &ApiClient<HttpTransport>, id: i64, detail: Detail) {
    match api.list_tasks(id).await {
        Ok(rows) => {
            let _ = detail.tasks.try_set(rows);
        }
        Err(e) => detail.report(&e),
    }
    match api.project_progress(id).await {
        Ok(stats) => {
            let _ = detail.progress.try_set(progress_percent(&stats));
        }
        Err(e) => leptos::logging::warn!("progress unavailable for project {id}: {e}"),
    }
}

async fn load_members(api: &ApiClient<HttpTransport>, id: i64, detail: Detail) {
    match api.list_members(id).await {
        Ok(rows) => {
            let _ = detail.members.try_set(rows);
        }
        Err(e) => detail.report(&e),
    }
}

async fn load_comments(api: &ApiClient<HttpTransport>, id: i64, detail: Detail) {
    match api.list_comments(id).await {
        Ok(rows) => {
            let _ = detail.comments.try_set(rows);
        }
        Err(e) => detail.report(&e),
    }
}

#[component]
pub fn ProjectDetailPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let project_id = move || params.with(|p| parse_route_id(p.get("id").as_deref()));

    let detail = Detail::new();
    let loading = RwSignal::new(true);
    let delete_task_id = RwSignal::new(None::<i64>);
    let remove_member_id = RwSignal::new(None::<i64>);
    let new_comment = RwSignal::new(String::new());
    let comment_info = RwSignal::new(String::new());
    let new_member = RwSignal::new(String::new());

    let loader = session.clone();
    Effect::new(move || {
        let Some(id) = project_id() else {
            detail.error.set(Some("Project not found.".to_owned()));
            loading.set(false);
            return;
        };
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.get_project(id).await {
                Ok(project) => {
                    let _ = detail.project.try_set(Some(project));
                }
                Err(e) => detail.report(&e),
            }
            let _ = loading.try_set(false);
            load_tasks(&api, id, detail).await;
            load_members(&api, id, detail).await;
            load_comments(&api, id, detail).await;
            match api.list_users().await {
                Ok(rows) => {
                    let _ = detail.users.try_set(rows);
                }
                Err(e) => leptos::logging::warn!("user list unavailable: {e}"),
            }
        });
    });

    let deleter = session.clone();
    let on_delete_task_confirm = Callback::new(move |()| {
        let (Some(id), Some(task_id)) = (project_id(), delete_task_id.get_untracked()) else {
            return;
        };
        delete_task_id.set(None);
        let api = deleter.api();
        leptos::task::spawn_local(async move {
            match api.delete_task(task_id).await {
                Ok(()) => load_tasks(&api, id, detail).await,
                Err(e) => detail.report(&e),
            }
        });
    });

    let remover = session.clone();
    let on_remove_member_confirm = Callback::new(move |()| {
        let (Some(id), Some(user_id)) = (project_id(), remove_member_id.get_untracked()) else {
            return;
        };
        remove_member_id.set(None);
        let api = remover.api();
        leptos::task::spawn_local(async move {
            match api.remove_member(id, user_id).await {
                Ok(()) => load_members(&api, id, detail).await,
                Err(e) => detail.report(&e),
            }
        });
    });

    let adder = session.clone();
    let on_add_member = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let (Some(id), Ok(user_id)) = (project_id(), new_member.get_untracked().parse::<i64>()) else {
            return;
        };
        new_member.set(String::new());
        let api = adder.api();
        leptos::task::spawn_local(async move {
            match api.add_member(id, &MemberPayload { user_id, role: None }).await {
                Ok(()) => load_members(&api, id, detail).await,
                Err(e) => detail.report(&e),
            }
        });
    };

    let on_add_comment = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(id) = project_id() else {
            return;
        };
        let message = match validate_comment(&new_comment.get_untracked()) {
            Ok(message) => message,
            Err(hint) => {
                comment_info.set(hint.to_owned());
                return;
            }
        };
        let Some(user) = session.user() else {
            return;
        };
        comment_info.set(String::new());
        let api = session.api();
        leptos::task::spawn_local(async move {
            match api.add_comment(id, &CommentPayload { user_id: user.id, message }).await {
                Ok(_) => {
                    let _ = new_comment.try_set(String::new());
                    load_comments(&api, id, detail).await;
                }
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        let _ = comment_info.try_set(message);
                    }
                }
            }
        });
    };

    let completed_count = move || detail.tasks.with(|t| t.iter().filter(|t| t.status == TaskStatus::Completed).count());
    let new_task_href = move || project_id().map(|id| format!("/project/{id}/create-task")).unwrap_or_default();
    let edit_project_href = move || project_id().map(|id| format!("/edit-project/{id}")).unwrap_or_default();

    view! {
        <div class="page">
            <Navbar/>
            <main class="page__main project-detail">
                <a class="btn btn--ghost" href="/dashboard">"← Back to Projects"</a>

                <Show when=move || detail.error.get().is_some()>
                    <p class="page__error">{move || detail.error.get().unwrap_or_default()}</p>
                </Show>

                <Show when=move || !loading.get() fallback=|| view! { <p>"Loading project..."</p> }>
                    {move || {
                        detail
                            .project
                            .get()
                            .map(|project| {
                                view! {
                                    <ProjectHeader
                                        project=project
                                        progress=detail.progress
                                        member_count=Signal::derive(move || detail.members.with(Vec::len))
                                        edit_href=edit_project_href()
                                    />
                                }
                            })
                    }}
                </Show>

                <section class="card project-detail__team">
                    <h2>"Team Members"</h2>
                    <ul class="member-list">
                        {move || {
                            let users = detail.users.get();
                            detail
                                .members
                                .get()
                                .into_iter()
                                .map(|m| {
                                    let user_id = member_user_id(&users, &m);
                                    view! {
                                        <li class="member-list__item">
                                            <span class="member-list__name">{m.name}</span>
                                            <span class="member-list__role">{m.role}</span>
                                            <button
                                                class="btn btn--ghost member-list__remove"
                                                title="Remove member"
                                                disabled=user_id.is_none()
                                                on:click=move |_| remove_member_id.set(user_id)
                                            >
                                                "✕"
                                            </button>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <form class="inline-form" on:submit=on_add_member>
                        <select
                            prop:value=move || new_member.get()
                            on:change=move |ev| new_member.set(event_target_value(&ev))
                        >
                            <option value="">"Add a member..."</option>
                            {move || {
                                let users = detail.users.get();
                                let members = detail.members.get();
                                non_members(&users, &members)
                                    .into_iter()
                                    .map(|u| view! { <option value=u.user_id.to_string()>{u.name.clone()}</option> })
                                    .collect::<Vec<_>>()
                            }}
                        </select>
                        <button class="btn" type="submit" disabled=move || new_member.get().is_empty()>
                            "Add"
                        </button>
                    </form>
                </section>

                <section class="project-detail__tasks">
                    <header class="page__header">
                        <div>
                            <h2>"Tasks"</h2>
                            <p class="page__subtitle">
                                {move || format!("{} tasks · {} completed", detail.tasks.with(Vec::len), completed_count())}
                            </p>
                        </div>
                        <a class="btn btn--primary" href=new_task_href>"+ New Task"</a>
                    </header>
                    <Show
                        when=move || !detail.tasks.with(Vec::is_empty)
                        fallback=|| view! { <div class="empty-state"><p>"No tasks yet."</p></div> }
                    >
                        <div class="card-grid">
                            {move || {
                                let users = detail.users.get();
                                detail
                                    .tasks
                                    .get()
                                    .into_iter()
                                    .map(|task| {
                                        let assignee = user_name(&users, task.assignee_id);
                                        let edit_href = project_id()
                                            .map(|id| format!("/project/{id}/edit-task/{}", task.task_id));
                                        view! {
                                            <TaskCard
                                                task=task
                                                assignee=assignee
                                                edit_href=edit_href
                                                on_delete=Callback::new(move |task_id: i64| delete_task_id.set(Some(task_id)))
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </Show>
                </section>

                <section class="card project-detail__comments">
                    <h2>"Comments"</h2>
                    <ul class="comment-list">
                        {move || {
                            detail
                                .comments
                                .get()
                                .into_iter()
                                .map(|c| {
                                    view! {
                                        <li class="comment-list__item">
                                            <span class="comment-list__author">{c.name}</span>
                                            <span class="comment-list__time">{c.created_at.unwrap_or_default()}</span>
                                            <p>{c.message}</p>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </ul>
                    <form class="comment-form" on:submit=on_add_comment>
                        <textarea
                            placeholder="Write a comment..."
                            prop:value=move || new_comment.get()
                            on:input=move |ev| new_comment.set(event_target_value(&ev))
                        ></textarea>
                        <button class="btn btn--primary" type="submit">"Post"</button>
                    </form>
                    <Show when=move || !comment_info.get().is_empty()>
                        <p class="page__error">{move || comment_info.get()}</p>
                    </Show>
                </section>

                <Show when=move || delete_task_id.get().is_some()>
                    <ConfirmDialog
                        title="Delete Task"
                        message="This will permanently delete the task."
                        on_cancel=Callback::new(move |()| delete_task_id.set(None))
                        on_confirm=on_delete_task_confirm
                    />
                </Show>
                <Show when=move || remove_member_id.get().is_some()>
                    <ConfirmDialog
                        title="Remove Member"
                        message="They will lose access to this project."
                        confirm_label="Remove"
                        on_cancel=Callback::new(move |()| remove_member_id.set(None))
                        on_confirm=on_remove_member_confirm
                    />
                </Show>
            </main>
        </div>
    }
}

#[component]
fn ProjectHeader(project: Project, progress: RwSignal<u8>, member_count: Signal<usize>, edit_href: String) -> impl IntoView {
    let priority = project.priority;
    let tags = project.tag_list();
    let image = project.image_url.clone().filter(|url| !url.is_empty());
    let alt = project.name.clone();

    view! {
        <section class="card project-detail__header">
            {image.map(|src| view! { <img class="project-detail__image" src=src alt=alt/> })}
            <div class="project-detail__info">
                <div class="project-detail__title-row">
                    <h1>{project.name.clone()}</h1>
                    <span class=format!("badge badge--{}", priority.as_key())>{priority.as_wire()}</span>
                    <a class="btn" href=edit_href>"Edit Project"</a>
                </div>
                <p class="project-detail__description">{project.description.clone()}</p>
                <div class="project-detail__tags">
                    {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
                </div>
                <div class="progress">
                    <div class="progress__label">
                        <span>"Progress"</span>
                        <span>{move || format!("{}%", progress.get())}</span>
                    </div>
                    <div class="progress__track">
                        <div class="progress__bar" style=move || format!("width: {}%", progress.get())></div>
                    </div>
                </div>
                <dl class="project-detail__meta">
                    <dt>"Due Date"</dt>
                    <dd>{project.duration.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No due date".to_owned())}</dd>
                    <dt>"Team Members"</dt>
                    <dd>{move || member_count.get()}</dd>
                </dl>
            </div>
        </section>
    }
}
