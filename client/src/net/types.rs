//! Wire DTOs for the ProjectPulse REST API.
//!
//! DESIGN
//! ======
//! These types mirror the backend's JSON rows. The backend stores enum-like
//! columns as free text (`"To-Do"`, `"High"`, ...), so `Priority` and
//! `TaskStatus` parse leniently and fall back to the backend defaults instead
//! of failing a whole list decode on one odd row.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// The authenticated user's identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Backend user id. Older endpoints name this field `user_id`.
    #[serde(alias = "user_id")]
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Body returned by `POST /login`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: Identity,
}

/// Project importance tag shared by projects and tasks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Parse a priority case-insensitively. Returns `None` for unknown text.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "low" => Some(Self::Low),
            "medium" => Some(Self::Medium),
            "high" => Some(Self::High),
            _ => None,
        }
    }

    /// Form as stored by the backend.
    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }

    /// Lowercase key used by select inputs and CSS badge modifiers.
    pub fn as_key(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Serialize for Priority {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

/// Task workflow column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum TaskStatus {
    #[default]
    Todo,
    InProgress,
    Completed,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::InProgress, TaskStatus::Completed];

    /// Parse the spellings used across the backend and older clients.
    pub fn parse(raw: &str) -> Option<Self> {
        let normalized: String = raw
            .trim()
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match normalized.as_str() {
            "todo" => Some(Self::Todo),
            "inprogress" => Some(Self::InProgress),
            "completed" | "done" => Some(Self::Completed),
            _ => None,
        }
    }

    pub fn as_wire(self) -> &'static str {
        match self {
            Self::Todo => "To-Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }

    pub fn as_key(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
        }
    }
}

impl Serialize for TaskStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_wire())
    }
}

impl<'de> Deserialize<'de> for TaskStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(raw.as_deref().and_then(Self::parse).unwrap_or_default())
    }
}

/// A project row from `GET /projects`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub project_id: i64,
    pub name: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default)]
    pub priority: Priority,
    /// Target end date (`yyyy-mm-dd`), if set.
    #[serde(default)]
    pub duration: Option<String>,
    /// Comma-separated tag list as stored by the backend.
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub created_by: Option<i64>,
}

impl Project {
    pub fn tag_list(&self) -> Vec<String> {
        crate::util::filter::split_tags(self.tags.as_deref().unwrap_or_default())
    }
}

/// Body for `POST /projects` and `PUT /projects/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ProjectPayload {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub duration: Option<String>,
    pub tags: String,
    pub image_url: Option<String>,
    pub created_by: i64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedProject {
    pub project_id: i64,
}

/// A task row.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub task_id: i64,
    #[serde(default)]
    pub project_id: Option<i64>,
    pub title: String,
    #[serde(default, deserialize_with = "deserialize_null_default")]
    pub description: String,
    #[serde(default)]
    pub assignee_id: Option<i64>,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
}

/// Body for `POST /projects/{id}/tasks` and `PUT /tasks/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TaskPayload {
    pub title: String,
    pub description: String,
    pub assignee_id: Option<i64>,
    pub status: TaskStatus,
    pub priority: Priority,
    pub due_date: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedTask {
    pub task_id: i64,
}

/// A user row from `GET /users`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub user_id: i64,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// A project member joined with its user row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    /// Membership row id, not the user id.
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default = "default_member_role")]
    pub role: String,
}

fn default_member_role() -> String {
    "Member".to_owned()
}

/// Body for `POST /projects/{id}/members`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MemberPayload {
    pub user_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

/// A project comment joined with the author's name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    pub comment_id: i64,
    pub message: String,
    #[serde(default)]
    pub created_at: Option<String>,
    pub name: String,
}

/// Body for `POST /projects/{id}/comments`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CommentPayload {
    pub user_id: i64,
    pub message: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct CreatedComment {
    pub comment_id: i64,
}

/// Upcoming-task entry from `GET /notifications`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub task_id: i64,
    pub title: String,
    #[serde(default)]
    pub due_date: Option<String>,
    #[serde(default)]
    pub assignee: Option<String>,
}

/// One row of `GET /projects/{id}/progress`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: TaskStatus,
    #[serde(deserialize_with = "deserialize_u64_from_number")]
    pub count: u64,
}

fn deserialize_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// MySQL drivers sometimes hand `COUNT(*)` back as a decimal string.
fn deserialize_u64_from_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    match value {
        serde_json::Value::Number(number) => number
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("count {number} is not a non-negative integer"))),
        serde_json::Value::String(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| D::Error::custom(format!("count {raw:?} is not a non-negative integer"))),
        other => Err(D::Error::custom(format!("expected count, got {other}"))),
    }
}
