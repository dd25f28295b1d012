//! Create / edit project form.
//!
//! Serves both `/create-project` and `/edit-project/:id`; the presence of the
//! `:id` param selects edit mode and preloads the existing row.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::navbar::Navbar;
use crate::net::types::Priority;
use crate::pages::parse_route_id;
use crate::state::session::AppSession;
use crate::util::filter::add_tag;
use crate::util::forms::{ProjectDraft, validate_project_draft};

#[component]
pub fn ProjectFormPage() -> impl IntoView {
    let session = expect_context::<AppSession>();
    let params = use_params_map();
    let navigate = use_navigate();
    let editing = move || params.with(|p| parse_route_id(p.get("id").as_deref()));

    let draft = RwSignal::new(ProjectDraft::default());
    let tag_input = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let loader = session.clone();
    Effect::new(move || {
        let Some(id) = editing() else {
            return;
        };
        let api = loader.api();
        leptos::task::spawn_local(async move {
            match api.get_project(id).await {
                Ok(project) => {
                    let _ = draft.try_set(ProjectDraft::from_project(&project));
                }
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        let _ = info.try_set(message);
                    }
                }
            }
        });
    });

    let on_add_tag = move || {
        let candidate = tag_input.get_untracked();
        draft.update(|d| {
            add_tag(&mut d.tags, &candidate);
        });
        tag_input.set(String::new());
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let payload = match validate_project_draft(&draft.get_untracked(), session.user().as_ref()) {
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
        let editing_id = editing();
        leptos::task::spawn_local(async move {
            let result = match editing_id {
                Some(id) => api.update_project(id, &payload).await.map(|()| id),
                None => api.create_project(&payload).await.map(|created| created.project_id),
            };
            match result {
                Ok(id) => navigate(&format!("/project/{id}"), NavigateOptions::default()),
                Err(e) => {
                    if let Some(message) = e.user_message() {
                        let _ = info.try_set(message);
                    }
                    let _ = busy.try_set(false);
                }
            }
        });
    };

    let text_field = move |label: &'static str,
                           kind: &'static str,
                           read: fn(&ProjectDraft) -> &String,
                           write: fn(&mut ProjectDraft) -> &mut String| {
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
                <a class="btn btn--ghost" href="/dashboard">"← Back to Projects"</a>
                <h1>{move || if editing().is_some() { "Edit Project" } else { "Create New Project" }}</h1>
                <form class="form card" on:submit=on_submit>
                    {text_field("Project name *", "text", |d| &d.name, |d| &mut d.name)}
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
                    <label class="form__label">
                        "Priority *"
                        <select
                            class="form__input"
                            prop:value=move || draft.with(|d| d.priority.clone())
                            on:change=move |ev| {
                                let value = event_target_value(&ev);
                                draft.update(|d| d.priority = value);
                            }
                        >
                            <option value="">"Select priority"</option>
                            {Priority::ALL
                                .into_iter()
                                .map(|p| view! { <option value=p.as_key()>{p.as_wire()}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </label>
                    {text_field("End date", "date", |d| &d.end_date, |d| &mut d.end_date)}
                    {text_field("Image URL", "url", |d| &d.image_url, |d| &mut d.image_url)}
                    <div class="form__label">
                        "Tags"
                        <div class="tag-editor">
                            <input
                                class="form__input"
                                type="text"
                                placeholder="Add a tag and press Enter"
                                prop:value=move || tag_input.get()
                                on:input=move |ev| tag_input.set(event_target_value(&ev))
                                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                                    if ev.key() == "Enter" {
                                        ev.prevent_default();
                                        on_add_tag();
                                    }
                                }
                            />
                            <button class="btn" type="button" on:click=move |_| on_add_tag()>
                                "Add"
                            </button>
                        </div>
                        <div class="tag-editor__tags">
                            {move || {
                                draft
                                    .with(|d| d.tags.clone())
                                    .into_iter()
                                    .map(|tag| {
                                        let removed = tag.clone();
                                        view! {
                                            <span class="tag">
                                                {tag}
                                                <button
                                                    class="tag__remove"
                                                    type="button"
                                                    title="Remove tag"
                                                    on:click=move |_| {
                                                        draft.update(|d| d.tags.retain(|t| *t != removed));
                                                    }
                                                >
                                                    "✕"
                                                </button>
                                            </span>
                                        }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </div>
                    </div>
                    <Show when=move || !info.get().is_empty()>
                        <p class="page__error">{move || info.get()}</p>
                    </Show>
                    <div class="form__actions">
                        <a class="btn" href="/dashboard">"Cancel"</a>
                        <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                            {move || if editing().is_some() { "Save Changes" } else { "Create Project" }}
                        </button>
                    </div>
                </form>
            </main>
        </div>
    }
}
