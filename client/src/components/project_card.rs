//! Card for one project in the dashboard grid.

use leptos::prelude::*;

use crate::net::types::Project;

#[component]
pub fn ProjectCard(project: Project, #[prop(optional)] on_delete: Option<Callback<i64>>) -> impl IntoView {
    let id = project.project_id;
    let href = format!("/project/{id}");
    let edit_href = format!("/edit-project/{id}");
    let priority = project.priority;
    let tags = project.tag_list();
    let image = project.image_url.clone().filter(|url| !url.is_empty());
    let alt = project.name.clone();
    let due = project.duration.clone().filter(|d| !d.is_empty()).unwrap_or_else(|| "No due date".to_owned());

    view! {
        <div class="project-card">
            {image.map(|src| view! { <img class="project-card__image" src=src alt=alt/> })}
            <div class="project-card__header">
                <span class=format!("badge badge--{}", priority.as_key())>{priority.as_wire()}</span>
                <a class="btn project-card__edit" href=edit_href title="Edit project">
                    "Edit"
                </a>
                <button
                    class="btn btn--danger project-card__delete"
                    title="Delete project"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        ev.stop_propagation();
                        if let Some(on_delete) = on_delete {
                            on_delete.run(id);
                        }
                    }
                >
                    "Delete"
                </button>
            </div>
            <a class="project-card__body" href=href>
                <h3 class="project-card__title">{project.name.clone()}</h3>
                <p class="project-card__description">{project.description.clone()}</p>
            </a>
            <div class="project-card__tags">
                {tags.into_iter().map(|tag| view! { <span class="tag">{tag}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="project-card__footer">
                <span class="project-card__due">{due}</span>
            </div>
        </div>
    }
}
