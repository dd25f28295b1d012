//! Card for one task on project detail and my-tasks lists.

use leptos::prelude::*;

use crate::net::types::Task;

#[component]
pub fn TaskCard(
    task: Task,
    /// Display name of the assignee, when known.
    #[prop(default = None)]
    assignee: Option<String>,
    /// Edit route; `None` when the task has no owning project.
    #[prop(default = None)]
    edit_href: Option<String>,
    #[prop(optional)] on_delete: Option<Callback<i64>>,
) -> impl IntoView {
    let id = task.task_id;
    let status = task.status;
    let priority = task.priority;
    let due = task.due_date.clone().filter(|d| !d.is_empty());
    let image = task.image_url.clone().filter(|url| !url.is_empty());
    let alt = task.title.clone();

    view! {
        <div class="task-card">
            {image.map(|src| view! { <img class="task-card__image" src=src alt=alt/> })}
            <div class="task-card__header">
                <span class=format!("badge badge--{}", status.as_key())>{status.label()}</span>
                <span class=format!("badge badge--{}", priority.as_key())>{priority.as_wire()}</span>
                <span class="task-card__spacer"></span>
                {edit_href.map(|href| view! { <a class="btn task-card__edit" href=href>"Edit"</a> })}
                {on_delete
                    .map(|on_delete| {
                        view! {
                            <button
                                class="btn btn--danger task-card__delete"
                                title="Delete task"
                                on:click=move |_| on_delete.run(id)
                            >
                                "Delete"
                            </button>
                        }
                    })}
            </div>
            <h4 class="task-card__title">{task.title.clone()}</h4>
            <p class="task-card__description">{task.description.clone()}</p>
            <div class="task-card__footer">
                <span class="task-card__due">{due.unwrap_or_else(|| "No due date".to_owned())}</span>
                <span class="task-card__assignee">{assignee.unwrap_or_else(|| "Unassigned".to_owned())}</span>
            </div>
        </div>
    }
}
