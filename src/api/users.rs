//! User & Auth Endpoints

use gloo_net::http::Method;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::models::User;

/// Payload returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: User,
    pub token: String,
}

#[derive(Serialize)]
pub struct RegisterArgs<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct LoginArgs<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Serialize)]
pub struct UpdateProfileArgs<'a> {
    #[serde(rename = "firstName")]
    pub first_name: &'a str,
    #[serde(rename = "lastName")]
    pub last_name: &'a str,
    pub email: &'a str,
}

pub async fn register(args: &RegisterArgs<'_>) -> Result<AuthPayload, ApiError> {
    super::request(Method::POST, "/users/register", Some(args)).await
}

pub async fn login(args: &LoginArgs<'_>) -> Result<AuthPayload, ApiError> {
    super::request(Method::POST, "/users/login", Some(args)).await
}

pub async fn fetch_me() -> Result<User, ApiError> {
    super::request::<(), User>(Method::GET, "/users/me", None).await
}

pub async fn update_me(args: &UpdateProfileArgs<'_>) -> Result<User, ApiError> {
    super::request(Method::PUT, "/users/me", Some(args)).await
}

pub async fn delete_me() -> Result<(), ApiError> {
    super::request_no_content::<()>(Method::DELETE, "/users/me", None).await
}

/// Look up the application's user record for an identity-provider subject id
pub async fn fetch_by_provider_id(provider_id: &str) -> Result<User, ApiError> {
    let path = format!("/users/auth0/{}", provider_id);
    super::request::<(), User>(Method::GET, &path, None).await
}
