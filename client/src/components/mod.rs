//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render page chrome and list items. They read the session store
//! from Leptos context; list items receive their rows as props.

pub mod confirm_dialog;
pub mod navbar;
pub mod priority_select;
pub mod project_card;
pub mod protected_route;
pub mod task_card;
