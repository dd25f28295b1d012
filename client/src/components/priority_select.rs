//! Priority filter dropdown used above project and task lists.

use leptos::prelude::*;

use crate::net::types::Priority;
use crate::util::filter::PriorityFilter;

#[component]
pub fn PrioritySelect(value: RwSignal<PriorityFilter>) -> impl IntoView {
    view! {
        <select
            class="filters__priority"
            prop:value=move || value.get().select_value()
            on:change=move |ev| value.set(PriorityFilter::from_select_value(&event_target_value(&ev)))
        >
            <option value="all">"All Priorities"</option>
            {Priority::ALL
                .into_iter()
                .map(|p| view! { <option value=p.as_key()>{p.as_wire()}</option> })
                .collect::<Vec<_>>()}
        </select>
    }
}
