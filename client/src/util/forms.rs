//! Form validation shared by the auth, project, and task pages.
//!
//! Each validator trims its input and either returns the request payload or
//! the message shown under the form.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{Identity, Priority, ProjectPayload, TaskPayload, TaskStatus};

pub const MIN_PASSWORD_LEN: usize = 6;

const REQUIRED_FIELDS: &str = "Please fill in all required fields.";

/// Trimmed email + untouched password.
///
/// # Errors
///
/// Returns a user-facing message when either field is empty.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// # Errors
///
/// Returns a user-facing message for missing fields, a short password, or a
/// confirmation mismatch.
pub fn validate_signup_input(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<SignupInput, &'static str> {
    let name = name.trim();
    let email = email.trim();
    if name.is_empty() || email.is_empty() || password.is_empty() {
        return Err(REQUIRED_FIELDS);
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if password != confirm {
        return Err("Passwords do not match.");
    }
    Ok(SignupInput { name: name.to_owned(), email: email.to_owned(), password: password.to_owned() })
}

/// Raw project form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    /// Select value; empty until the user picks one.
    pub priority: String,
    pub end_date: String,
    pub image_url: String,
    pub tags: Vec<String>,
}

impl ProjectDraft {
    pub fn from_project(project: &crate::net::types::Project) -> Self {
        Self {
            name: project.name.clone(),
            description: project.description.clone(),
            priority: project.priority.as_key().to_owned(),
            end_date: project.duration.clone().unwrap_or_default(),
            image_url: project.image_url.clone().unwrap_or_default(),
            tags: project.tag_list(),
        }
    }
}

/// # Errors
///
/// Returns a user-facing message for missing fields or a missing creator.
pub fn validate_project_draft(draft: &ProjectDraft, creator: Option<&Identity>) -> Result<ProjectPayload, &'static str> {
    let name = draft.name.trim();
    let description = draft.description.trim();
    let priority = Priority::parse(&draft.priority);
    let (false, false, Some(priority)) = (name.is_empty(), description.is_empty(), priority) else {
        return Err(REQUIRED_FIELDS);
    };
    let Some(creator) = creator else {
        return Err("You must be logged in to create a project.");
    };
    Ok(ProjectPayload {
        name: name.to_owned(),
        description: description.to_owned(),
        priority,
        duration: non_blank(&draft.end_date),
        tags: draft.tags.join(","),
        image_url: non_blank(&draft.image_url),
        created_by: creator.id,
    })
}

/// Raw task form fields.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: String,
    pub priority: String,
    /// Select value holding a user id; empty for unassigned.
    pub assignee: String,
    pub due_date: String,
    pub image_url: String,
}

impl TaskDraft {
    pub fn from_task(task: &crate::net::types::Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            status: task.status.as_key().to_owned(),
            priority: task.priority.as_key().to_owned(),
            assignee: task.assignee_id.map(|id| id.to_string()).unwrap_or_default(),
            due_date: task.due_date.clone().unwrap_or_default(),
            image_url: task.image_url.clone().unwrap_or_default(),
        }
    }
}

/// # Errors
///
/// Returns a user-facing message for missing fields or an unparsable assignee.
pub fn validate_task_draft(draft: &TaskDraft) -> Result<TaskPayload, &'static str> {
    let title = draft.title.trim();
    let description = draft.description.trim();
    let (false, false, Some(status), Some(priority)) = (
        title.is_empty(),
        description.is_empty(),
        TaskStatus::parse(&draft.status),
        Priority::parse(&draft.priority),
    ) else {
        return Err(REQUIRED_FIELDS);
    };
    let assignee = draft.assignee.trim();
    let assignee_id = if assignee.is_empty() {
        None
    } else {
        Some(assignee.parse::<i64>().map_err(|_| "Choose an assignee from the list.")?)
    };
    Ok(TaskPayload {
        title: title.to_owned(),
        description: description.to_owned(),
        assignee_id,
        status,
        priority,
        due_date: non_blank(&draft.due_date),
        image_url: non_blank(&draft.image_url),
    })
}

/// # Errors
///
/// Returns a user-facing message for a blank comment.
pub fn validate_comment(message: &str) -> Result<String, &'static str> {
    let message = message.trim();
    if message.is_empty() {
        return Err("Write a comment first.");
    }
    Ok(message.to_owned())
}

fn non_blank(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}
