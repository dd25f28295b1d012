//! Client-side list filtering, tab counts, and progress math.
//!
//! DESIGN
//! ======
//! Filters borrow from the fetched lists instead of cloning rows so search
//! input can re-run them on every keystroke.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use crate::net::types::{Member, Priority, Project, StatusCount, Task, TaskStatus, UserSummary};

/// Priority dropdown selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Parse a `<select>` value (`"all"`, `"high"`, ...). Unknown values mean `All`.
    pub fn from_select_value(value: &str) -> Self {
        Priority::parse(value).map_or(Self::All, Self::Only)
    }

    pub fn select_value(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(priority) => priority.as_key(),
        }
    }

    pub fn matches(self, priority: Priority) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == priority,
        }
    }
}

/// Status tab selection on task lists.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusTab {
    #[default]
    All,
    Only(TaskStatus),
}

impl StatusTab {
    pub fn matches(self, status: TaskStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Case-insensitive substring match against any of `fields`.
/// A blank query matches everything.
pub fn matches_search(query: &str, fields: &[&str]) -> bool {
    let needle = query.trim().to_lowercase();
    needle.is_empty() || fields.iter().any(|field| field.to_lowercase().contains(&needle))
}

pub fn filter_projects<'a>(projects: &'a [Project], query: &str, priority: PriorityFilter) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|p| matches_search(query, &[&p.name, &p.description]) && priority.matches(p.priority))
        .collect()
}

pub fn filter_tasks<'a>(tasks: &'a [Task], query: &str, priority: PriorityFilter, tab: StatusTab) -> Vec<&'a Task> {
    tasks
        .iter()
        .filter(|t| {
            matches_search(query, &[&t.title, &t.description]) && priority.matches(t.priority) && tab.matches(t.status)
        })
        .collect()
}

/// Per-tab badge counts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TaskCounts {
    pub all: usize,
    pub todo: usize,
    pub in_progress: usize,
    pub completed: usize,
}

impl TaskCounts {
    pub fn from_tasks(tasks: &[Task]) -> Self {
        tasks.iter().fold(Self::default(), |mut counts, task| {
            counts.all += 1;
            match task.status {
                TaskStatus::Todo => counts.todo += 1,
                TaskStatus::InProgress => counts.in_progress += 1,
                TaskStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    pub fn for_tab(self, tab: StatusTab) -> usize {
        match tab {
            StatusTab::All => self.all,
            StatusTab::Only(TaskStatus::Todo) => self.todo,
            StatusTab::Only(TaskStatus::InProgress) => self.in_progress,
            StatusTab::Only(TaskStatus::Completed) => self.completed,
        }
    }
}

/// Completed share of all tasks, 0..=100, rounded down. No tasks is 0%.
pub fn progress_percent(stats: &[StatusCount]) -> u8 {
    let total = stats.iter().fold(0_u128, |acc, s| acc + u128::from(s.count));
    if total == 0 {
        return 0;
    }
    let completed = stats
        .iter()
        .filter(|s| s.status == TaskStatus::Completed)
        .fold(0_u128, |acc, s| acc + u128::from(s.count));
    u8::try_from(completed * 100 / total).unwrap_or(100)
}

/// Split the backend's comma-separated tag column.
pub fn split_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Add a trimmed tag unless it is blank or already present.
/// Returns whether the list changed.
pub fn add_tag(tags: &mut Vec<String>, candidate: &str) -> bool {
    let tag = candidate.trim();
    if tag.is_empty() || tags.iter().any(|existing| existing == tag) {
        return false;
    }
    tags.push(tag.to_owned());
    true
}

/// Display name for an assignee id, if the user list knows it.
pub fn user_name(users: &[UserSummary], user_id: Option<i64>) -> Option<String> {
    let user_id = user_id?;
    users.iter().find(|u| u.user_id == user_id).map(|u| u.name.clone())
}

/// User id behind a membership row. The members endpoint only returns the
/// membership id, so the user is matched by email.
pub fn member_user_id(users: &[UserSummary], member: &Member) -> Option<i64> {
    users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(&member.email))
        .map(|u| u.user_id)
}

/// Users that can still be added to a project.
pub fn non_members<'a>(users: &'a [UserSummary], members: &[Member]) -> Vec<&'a UserSummary> {
    users
        .iter()
        .filter(|u| !members.iter().any(|m| m.email.eq_ignore_ascii_case(&u.email)))
        .collect()
}
