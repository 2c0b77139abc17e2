//! Task Endpoints

use gloo_net::http::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{Priority, Task, TaskStatus};

#[derive(Serialize)]
pub struct CreateTaskArgs<'a> {
    #[serde(rename = "taskName")]
    pub task_name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<&'a str>,
    #[serde(rename = "listId", skip_serializing_if = "Option::is_none")]
    pub list_id: Option<&'a str>,
}

/// Collection-level PATCH: the task id travels in the body
#[derive(Serialize)]
pub struct UpdateTaskArgs<'a> {
    pub id: &'a str,
    #[serde(rename = "taskName")]
    pub task_name: &'a str,
    pub description: Option<&'a str>,
    pub status: TaskStatus,
    pub priority: Priority,
    #[serde(rename = "dueDate")]
    pub due_date: Option<&'a str>,
    #[serde(rename = "listId")]
    pub list_id: Option<&'a str>,
}

pub async fn list_tasks() -> Result<Vec<Task>, ApiError> {
    super::request::<(), Vec<Task>>(Method::GET, "/tasks", None).await
}

pub async fn create_task(args: &CreateTaskArgs<'_>) -> Result<Task, ApiError> {
    super::request(Method::POST, "/tasks", Some(args)).await
}

pub async fn update_task(args: &UpdateTaskArgs<'_>) -> Result<Task, ApiError> {
    super::request(Method::PATCH, "/tasks", Some(args)).await
}

pub async fn fetch_task(id: &str) -> Result<Task, ApiError> {
    let path = format!("/tasks/{}", id);
    super::request::<(), Task>(Method::GET, &path, None).await
}

pub async fn delete_task(id: &str) -> Result<(), ApiError> {
    let path = format!("/tasks/{}", id);
    super::request_no_content::<()>(Method::DELETE, &path, None).await
}

pub async fn toggle_archived(id: &str) -> Result<Task, ApiError> {
    let path = format!("/tasks/{}/toggle-archived", id);
    super::request::<(), Task>(Method::PATCH, &path, None).await
}

pub async fn toggle_status(id: &str) -> Result<Task, ApiError> {
    let path = format!("/tasks/{}/toggle-status", id);
    super::request::<(), Task>(Method::PATCH, &path, None).await
}
