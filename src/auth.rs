//! Identity Provider Bindings
//!
//! Frontend bindings to the Auth0 SPA client exposed on `window.auth0Client`,
//! plus the mapping from the provider's user shape into the local [`User`].

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use crate::config;
use crate::models::User;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "auth0Client"], js_name = isAuthenticated, catch)]
    async fn is_authenticated_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "auth0Client"], js_name = getUser, catch)]
    async fn get_user_js() -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "auth0Client"], js_name = getTokenSilently, catch)]
    async fn get_token_silently_js(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "auth0Client"], js_name = loginWithRedirect, catch)]
    async fn login_with_redirect_js(options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(js_namespace = ["window", "auth0Client"], js_name = logout, catch)]
    fn logout_js(options: JsValue) -> Result<(), JsValue>;
}

/// User shape reported by the identity provider
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProviderUser {
    pub sub: String,
    pub given_name: Option<String>,
    pub family_name: Option<String>,
    /// Full display name, used when given/family names are absent
    pub name: Option<String>,
    pub email: Option<String>,
    pub picture: Option<String>,
    pub email_verified: Option<bool>,
}

#[derive(Serialize)]
struct TokenOptions<'a> {
    audience: &'a str,
}

#[derive(Serialize)]
struct LogoutOptions<'a> {
    #[serde(rename = "returnTo")]
    return_to: &'a str,
    #[serde(rename = "clientId")]
    client_id: &'a str,
}

/// Return the provider's current user if it reports an authenticated session
pub async fn check_session() -> Option<ProviderUser> {
    let authed = is_authenticated_js().await.ok()?;
    if !authed.as_bool().unwrap_or(false) {
        return None;
    }
    let user = get_user_js().await.ok()?;
    serde_wasm_bindgen::from_value(user).ok()
}

/// Acquire a fresh access token for the configured audience
pub async fn acquire_token() -> Result<String, String> {
    let options = serde_wasm_bindgen::to_value(&TokenOptions {
        audience: config::AUTH_AUDIENCE,
    })
    .map_err(|e| e.to_string())?;
    let token = get_token_silently_js(options)
        .await
        .map_err(|e| format!("{:?}", e))?;
    token
        .as_string()
        .ok_or_else(|| "provider returned a non-string token".to_string())
}

/// Start the provider's hosted login flow (redirects away)
pub async fn login() -> Result<(), String> {
    login_with_redirect_js(JsValue::NULL)
        .await
        .map(|_| ())
        .map_err(|e| format!("{:?}", e))
}

/// Invoke the provider logout flow; performs a redirect
pub fn provider_logout() {
    let origin = web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_default();
    let options = serde_wasm_bindgen::to_value(&LogoutOptions {
        return_to: &origin,
        client_id: config::AUTH_CLIENT_ID,
    })
    .unwrap_or(JsValue::NULL);
    if let Err(err) = logout_js(options) {
        web_sys::console::warn_1(&format!("[SESSION] provider logout failed: {:?}", err).into());
    }
}

/// Map the provider's user shape into the local [`User`]. Given/family names
/// are preferred; otherwise the display name splits on the first space.
pub fn map_provider_user(provider: &ProviderUser) -> User {
    let (fallback_first, fallback_last) = split_display_name(provider.name.as_deref());
    User {
        id: provider.sub.clone(),
        first_name: provider
            .given_name
            .clone()
            .unwrap_or(fallback_first),
        last_name: provider
            .family_name
            .clone()
            .unwrap_or(fallback_last),
        email: provider.email.clone().unwrap_or_default(),
        profile_image: provider.picture.clone(),
        email_verified: provider.email_verified,
    }
}

fn split_display_name(name: Option<&str>) -> (String, String) {
    let Some(name) = name else {
        return (String::new(), String::new());
    };
    match name.trim().split_once(' ') {
        Some((first, rest)) => (first.to_string(), rest.trim().to_string()),
        None => (name.trim().to_string(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_user() -> ProviderUser {
        ProviderUser {
            sub: "auth0|123".to_string(),
            given_name: None,
            family_name: None,
            name: None,
            email: Some("ada@example.com".to_string()),
            picture: None,
            email_verified: Some(true),
        }
    }

    #[test]
    fn test_given_family_names_preferred() {
        let mut provider = provider_user();
        provider.given_name = Some("Ada".to_string());
        provider.family_name = Some("Lovelace".to_string());
        provider.name = Some("Something Else".to_string());
        let user = map_provider_user(&provider);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Lovelace");
        assert_eq!(user.id, "auth0|123");
    }

    #[test]
    fn test_display_name_fallback_splits_on_first_space() {
        let mut provider = provider_user();
        provider.name = Some("Ada Augusta Lovelace".to_string());
        let user = map_provider_user(&provider);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "Augusta Lovelace");
    }

    #[test]
    fn test_single_word_display_name() {
        let mut provider = provider_user();
        provider.name = Some("Ada".to_string());
        let user = map_provider_user(&provider);
        assert_eq!(user.first_name, "Ada");
        assert_eq!(user.last_name, "");
    }

    #[test]
    fn test_missing_names_map_empty() {
        let user = map_provider_user(&provider_user());
        assert_eq!(user.first_name, "");
        assert_eq!(user.last_name, "");
        assert_eq!(user.email, "ada@example.com");
    }
}
