//! HTTP Client Pipeline
//!
//! Single outbound request path: the bearer token is read at send time and
//! attached to every call, responses decode through the `{ success, data,
//! message }` envelope, and a global 401 policy clears the credential and
//! hard-navigates to the login surface. No retries; failures propagate.

pub mod lists;
pub mod settings;
pub mod tasks;
pub mod users;

use gloo_net::http::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config;
use crate::error::ApiError;
use crate::models::ApiEnvelope;
use crate::session;

/// Absolute URL for an API path
pub(crate) fn endpoint(path: &str) -> String {
    format!("{}{}", config::API_BASE_URL, path)
}

/// Authorization header value for a token, if one exists
pub(crate) fn bearer_header(token: Option<&str>) -> Option<String> {
    token.map(|token| format!("Bearer {}", token))
}

/// A 401 forces navigation to the login surface unless we are already there
pub(crate) fn should_redirect_on_401(current_path: &str) -> bool {
    current_path != config::LOGIN_PATH
}

/// Extract the payload from a decoded envelope. A successful status with no
/// `data` field is a malformed response, surfaced as a decode error.
pub(crate) fn envelope_data<T>(envelope: ApiEnvelope<T>) -> Result<T, ApiError> {
    envelope
        .data
        .ok_or_else(|| ApiError::Decode("response envelope carried no data".to_string()))
}

/// Issue a request and decode the envelope payload
pub(crate) async fn request<B: Serialize, T: DeserializeOwned>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<T, ApiError> {
    let response = send(method, path, body).await?;
    let envelope: ApiEnvelope<T> = response
        .json()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    envelope_data(envelope)
}

/// Issue a request where the envelope carries no payload worth keeping
pub(crate) async fn request_no_content<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<(), ApiError> {
    send(method, path, body).await.map(|_| ())
}

async fn send<B: Serialize>(
    method: Method,
    path: &str,
    body: Option<&B>,
) -> Result<gloo_net::http::Response, ApiError> {
    let url = endpoint(path);
    let mut builder = RequestBuilder::new(&url).method(method);
    // Read the token at send time, never at client construction: the session
    // can change underneath a long-lived client.
    let token = session::read_stored_token();
    if let Some(header) = bearer_header(token.as_deref()) {
        builder = builder.header("Authorization", &header);
    }

    let request = match body {
        Some(body) => builder
            .json(body)
            .map_err(|e| ApiError::Network(e.to_string()))?,
        None => builder
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?,
    };

    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();
    if status == 401 {
        handle_unauthorized();
        return Err(ApiError::Unauthorized);
    }
    if status == 404 {
        return Err(ApiError::NotFound);
    }
    if !(200..300).contains(&status) {
        let message = response
            .json::<ApiEnvelope<serde_json::Value>>()
            .await
            .ok()
            .and_then(|envelope| envelope.message)
            .unwrap_or_else(|| "Request failed".to_string());
        return Err(ApiError::Api { status, message });
    }
    Ok(response)
}

/// Global 401 policy: clear the persisted credential and force a full page
/// navigation to the login surface. The hard navigation (not a client-side
/// route change) also resets all in-memory state.
fn handle_unauthorized() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let current_path = window.location().pathname().unwrap_or_default();
    if !should_redirect_on_401(&current_path) {
        return;
    }
    web_sys::console::warn_1(&"[API] 401 received, redirecting to login".into());
    session::clear_stored_token();
    let _ = window.location().set_href(config::LOGIN_PATH);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bearer_header_present_iff_token() {
        assert_eq!(
            bearer_header(Some("abc123")),
            Some("Bearer abc123".to_string())
        );
        assert_eq!(bearer_header(None), None);
    }

    #[test]
    fn test_401_redirect_policy() {
        assert!(should_redirect_on_401("/"));
        assert!(should_redirect_on_401("/dashboard"));
        assert!(!should_redirect_on_401(config::LOGIN_PATH));
    }

    #[test]
    fn test_endpoint_join() {
        let url = endpoint("/tasks/42");
        assert!(url.starts_with(config::API_BASE_URL));
        assert!(url.ends_with("/tasks/42"));
    }

    #[test]
    fn test_envelope_without_data_is_decode_error() {
        // A 200 whose body omits `data` must surface as an error, not a panic
        let envelope: ApiEnvelope<crate::models::TaskList> =
            serde_json::from_str(r#"{"success":true}"#).unwrap();
        assert!(envelope.data.is_none());
        match envelope_data(envelope) {
            Err(ApiError::Decode(msg)) => assert!(msg.contains("no data")),
            other => panic!("expected decode error, got {:?}", other),
        }
    }

    #[test]
    fn test_envelope_with_data_unwraps() {
        let envelope: ApiEnvelope<Vec<String>> =
            serde_json::from_str(r#"{"success":true,"data":["a","b"]}"#).unwrap();
        assert_eq!(envelope_data(envelope).unwrap(), vec!["a", "b"]);
    }
}
