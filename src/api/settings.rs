//! Settings Endpoints

use gloo_net::http::Method;

use crate::error::ApiError;
use crate::models::Settings;

pub async fn fetch_settings() -> Result<Settings, ApiError> {
    super::request::<(), Settings>(Method::GET, "/settings", None).await
}

pub async fn update_settings(settings: &Settings) -> Result<Settings, ApiError> {
    super::request(Method::PUT, "/settings", Some(settings)).await
}
