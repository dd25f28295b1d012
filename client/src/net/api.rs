//! Typed REST endpoints for the ProjectPulse backend.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`. A 401 on an authenticated call
//! has already cleared the session by the time the caller sees
//! `ApiError::Unauthorized`, so views only render the other variants.

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::json;

use super::http::{ApiClient, ApiError, Transport};
use super::types::{
    Comment, CommentPayload, CreatedComment, CreatedProject, CreatedTask, Identity, LoginResponse, Member,
    MemberPayload, Notification, Project, ProjectPayload, StatusCount, Task, TaskPayload, UserSummary,
};

fn project_path(project_id: i64) -> String {
    format!("/projects/{project_id}")
}

fn project_progress_path(project_id: i64) -> String {
    format!("/projects/{project_id}/progress")
}

fn project_members_path(project_id: i64) -> String {
    format!("/projects/{project_id}/members")
}

fn project_member_path(project_id: i64, user_id: i64) -> String {
    format!("/projects/{project_id}/members/{user_id}")
}

fn project_tasks_path(project_id: i64) -> String {
    format!("/projects/{project_id}/tasks")
}

fn project_comments_path(project_id: i64) -> String {
    format!("/projects/{project_id}/comments")
}

fn task_path(task_id: i64) -> String {
    format!("/tasks/{task_id}")
}

fn my_tasks_path(user_id: i64) -> String {
    format!("/tasks/my?user_id={user_id}")
}

fn user_path(user_id: i64) -> String {
    format!("/users/{user_id}")
}

impl<T: Transport> ApiClient<T> {
    // ---- auth ----

    /// `POST /register`. Does not log the user in.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection (e.g. duplicate email) or a transport error.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<(), ApiError> {
        self.post_unit("/register", &json!({ "name": name, "email": email, "password": password }))
            .await
    }

    /// `POST /login`.
    ///
    /// # Errors
    ///
    /// Returns the backend's rejection for bad credentials, or a transport/decode error.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse, ApiError> {
        self.post("/login", &json!({ "email": email, "password": password })).await
    }

    // ---- users ----

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, ApiError> {
        self.get("/users").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_user(&self, user_id: i64) -> Result<UserSummary, ApiError> {
        self.get(&user_path(user_id)).await
    }

    // ---- projects ----

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_project(&self, payload: &ProjectPayload) -> Result<CreatedProject, ApiError> {
        self.post("/projects", payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        self.get("/projects").await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_project(&self, project_id: i64) -> Result<Project, ApiError> {
        self.get(&project_path(project_id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_project(&self, project_id: i64, payload: &ProjectPayload) -> Result<(), ApiError> {
        self.put(&project_path(project_id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_project(&self, project_id: i64) -> Result<(), ApiError> {
        self.delete(&project_path(project_id)).await
    }

    /// Task counts grouped by status.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn project_progress(&self, project_id: i64) -> Result<Vec<StatusCount>, ApiError> {
        self.get(&project_progress_path(project_id)).await
    }

    // ---- members ----

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn add_member(&self, project_id: i64, payload: &MemberPayload) -> Result<(), ApiError> {
        self.post_unit(&project_members_path(project_id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_members(&self, project_id: i64) -> Result<Vec<Member>, ApiError> {
        self.get(&project_members_path(project_id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn remove_member(&self, project_id: i64, user_id: i64) -> Result<(), ApiError> {
        self.delete(&project_member_path(project_id, user_id)).await
    }

    // ---- tasks ----

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn create_task(&self, project_id: i64, payload: &TaskPayload) -> Result<CreatedTask, ApiError> {
        self.post(&project_tasks_path(project_id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_tasks(&self, project_id: i64) -> Result<Vec<Task>, ApiError> {
        self.get(&project_tasks_path(project_id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn get_task(&self, task_id: i64) -> Result<Task, ApiError> {
        self.get(&task_path(task_id)).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn update_task(&self, task_id: i64, payload: &TaskPayload) -> Result<(), ApiError> {
        self.put(&task_path(task_id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn delete_task(&self, task_id: i64) -> Result<(), ApiError> {
        self.delete(&task_path(task_id)).await
    }

    /// Tasks assigned to `user`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn my_tasks(&self, user: &Identity) -> Result<Vec<Task>, ApiError> {
        self.get(&my_tasks_path(user.id)).await
    }

    // ---- comments ----

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn add_comment(&self, project_id: i64, payload: &CommentPayload) -> Result<CreatedComment, ApiError> {
        self.post(&project_comments_path(project_id), payload).await
    }

    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn list_comments(&self, project_id: i64) -> Result<Vec<Comment>, ApiError> {
        self.get(&project_comments_path(project_id)).await
    }

    // ---- notifications ----

    /// Up to ten tasks ordered by due date.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] when the request fails.
    pub async fn notifications(&self) -> Result<Vec<Notification>, ApiError> {
        self.get("/notifications").await
    }
}
