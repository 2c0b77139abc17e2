//! List Endpoints

use gloo_net::http::Method;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::TaskList;

#[derive(Serialize)]
pub struct ListArgs<'a> {
    pub title: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    pub color: &'a str,
    #[serde(rename = "isFavorite")]
    pub is_favorite: bool,
}

pub async fn list_lists() -> Result<Vec<TaskList>, ApiError> {
    super::request::<(), Vec<TaskList>>(Method::GET, "/lists", None).await
}

pub async fn create_list(args: &ListArgs<'_>) -> Result<TaskList, ApiError> {
    super::request(Method::POST, "/lists", Some(args)).await
}

pub async fn fetch_list(id: &str) -> Result<TaskList, ApiError> {
    let path = format!("/lists/{}", id);
    super::request::<(), TaskList>(Method::GET, &path, None).await
}

pub async fn update_list(id: &str, args: &ListArgs<'_>) -> Result<TaskList, ApiError> {
    let path = format!("/lists/{}", id);
    super::request(Method::PUT, &path, Some(args)).await
}

/// Deletes the list; the server cascades to its tasks, so callers must
/// reload the task collection afterwards.
pub async fn delete_list(id: &str) -> Result<(), ApiError> {
    let path = format!("/lists/{}", id);
    super::request_no_content::<()>(Method::DELETE, &path, None).await
}
