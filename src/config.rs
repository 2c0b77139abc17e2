//! Startup Configuration
//!
//! Compile-time environment wiring: API base URL and identity-provider
//! coordinates. Read once at build, never mutated at runtime.

const fn env_or(value: Option<&'static str>, default: &'static str) -> &'static str {
    match value {
        Some(v) => v,
        None => default,
    }
}

/// Base URL for the TaskMaster REST API
pub const API_BASE_URL: &str = env_or(
    option_env!("TASKMASTER_API_URL"),
    "http://localhost:5000/api",
);

/// Identity-provider tenant domain
pub const AUTH_DOMAIN: &str = env_or(option_env!("TASKMASTER_AUTH_DOMAIN"), "");

/// Identity-provider application client id
pub const AUTH_CLIENT_ID: &str = env_or(option_env!("TASKMASTER_AUTH_CLIENT_ID"), "");

/// Audience claim requested when acquiring access tokens
pub const AUTH_AUDIENCE: &str = env_or(option_env!("TASKMASTER_AUTH_AUDIENCE"), "");

/// Path of the login surface; the 401 policy never redirects while already here
pub const LOGIN_PATH: &str = "/login";
