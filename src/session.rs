//! Session Manager
//!
//! Single source of truth for "who is logged in and with what credential".
//! Reconciles two identity sources: the locally persisted bearer token (wins
//! during bootstrap) and the identity provider's client state (wins after).
//! Every mutation goes through [`SessionState::apply`], so transitions are
//! serialized and stale in-flight bootstrap results are discarded by
//! generation counter instead of racing the store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::api;
use crate::auth;
use crate::models::User;

/// Current token storage key
const TOKEN_KEY: &str = "taskmaster_token";
/// Pre-rename storage key, still honored on read
const LEGACY_TOKEN_KEY: &str = "token";

/// In-memory session for the current authenticated user
#[derive(Clone, Debug, Default, Store)]
pub struct SessionState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub is_authenticated: bool,
    /// True while the initial bootstrap is in flight
    pub is_loading: bool,
    /// Generation of the most recent bootstrap attempt
    pub bootstrap_gen: u32,
    /// True when the current credential came from the identity provider.
    /// Only such a session is the provider's to revoke; a session built from
    /// the persisted token survives the provider's "logged out" snapshot.
    pub provider_credential: bool,
}

/// Session transitions. Events carrying `gen` belong to a specific bootstrap
/// attempt and are ignored unless that attempt is still the latest one.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionEvent {
    BootstrapStarted { gen: u32 },
    BootstrapSucceeded { gen: u32, user: User, token: String },
    BootstrapFailed { gen: u32 },
    /// A fresh credential was accepted through the login/register forms
    LoggedIn { user: User, token: String },
    /// The identity provider reported an authenticated user with a token
    ProviderLogin { user: User, token: String },
    /// The identity provider reported logged-out; clears only a
    /// provider-held session
    ProviderLoggedOut,
    /// Explicit logout; clears unconditionally
    LoggedOut,
}

impl SessionState {
    pub fn apply(&mut self, event: SessionEvent) {
        match event {
            SessionEvent::BootstrapStarted { gen } => {
                self.bootstrap_gen = gen;
                self.is_loading = true;
            }
            SessionEvent::BootstrapSucceeded { gen, user, token } => {
                if gen != self.bootstrap_gen {
                    return;
                }
                self.authenticate(user, token, false);
            }
            SessionEvent::BootstrapFailed { gen } => {
                if gen != self.bootstrap_gen {
                    return;
                }
                self.clear();
            }
            SessionEvent::LoggedIn { user, token } => {
                self.authenticate(user, token, false);
            }
            SessionEvent::ProviderLogin { user, token } => {
                self.authenticate(user, token, true);
            }
            SessionEvent::ProviderLoggedOut => {
                if self.provider_credential {
                    self.clear();
                }
            }
            SessionEvent::LoggedOut => self.clear(),
        }
    }

    fn authenticate(&mut self, user: User, token: String, from_provider: bool) {
        self.user = Some(user);
        self.token = Some(token);
        self.is_authenticated = true;
        self.is_loading = false;
        self.provider_credential = from_provider;
    }

    fn clear(&mut self) {
        self.user = None;
        self.token = None;
        self.is_authenticated = false;
        self.is_loading = false;
        self.provider_credential = false;
    }
}

/// Type alias for the session store
pub type SessionStore = Store<SessionState>;

/// Get the session store from context
pub fn use_session() -> SessionStore {
    expect_context::<SessionStore>()
}

/// Route every session mutation through the reducer
pub fn dispatch(store: &SessionStore, event: SessionEvent) {
    store.write().apply(event);
}

// ========================
// Token Persistence
// ========================

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the persisted token, checking the current key then the legacy key
pub fn read_stored_token() -> Option<String> {
    let storage = local_storage()?;
    storage
        .get_item(TOKEN_KEY)
        .ok()
        .flatten()
        .or_else(|| storage.get_item(LEGACY_TOKEN_KEY).ok().flatten())
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

pub fn clear_stored_token() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
        let _ = storage.remove_item(LEGACY_TOKEN_KEY);
    }
}

// ========================
// Async Flows
// ========================

/// Validate any persisted token on app start. Runs once per mount; if the
/// effect re-runs while a previous attempt is in flight, the older attempt's
/// result is discarded by the generation guard.
pub async fn bootstrap(store: SessionStore) {
    let gen = store.bootstrap_gen().get_untracked() + 1;
    dispatch(&store, SessionEvent::BootstrapStarted { gen });

    let Some(token) = read_stored_token() else {
        // No persisted credential: unauthenticated, not an error
        dispatch(&store, SessionEvent::BootstrapFailed { gen });
        return;
    };

    match api::users::fetch_me().await {
        Ok(user) => {
            dispatch(&store, SessionEvent::BootstrapSucceeded { gen, user, token });
        }
        Err(err) => {
            web_sys::console::warn_1(
                &format!("[SESSION] bootstrap token rejected: {}", err).into(),
            );
            clear_stored_token();
            dispatch(&store, SessionEvent::BootstrapFailed { gen });
        }
    }
}

/// Reconcile a reported identity-provider state change into the session.
/// Provider-authenticated wins once bootstrap is done; provider logged-out
/// revokes only a session the provider itself established, so a session
/// restored from the persisted token is untouched when the provider client
/// is absent or reports no login.
pub async fn sync_provider_state(store: SessionStore) {
    let Some(provider_user) = auth::check_session().await else {
        if store.provider_credential().get_untracked() {
            web_sys::console::log_1(&"[SESSION] provider reports logged out".into());
            clear_stored_token();
        }
        dispatch(&store, SessionEvent::ProviderLoggedOut);
        return;
    };

    let token = match auth::acquire_token().await {
        Ok(token) => token,
        Err(err) => {
            // The provider claims a login it cannot back with a token;
            // revoke whatever it previously established
            web_sys::console::warn_1(
                &format!("[SESSION] token acquisition failed: {}", err).into(),
            );
            if store.provider_credential().get_untracked() {
                clear_stored_token();
            }
            dispatch(&store, SessionEvent::ProviderLoggedOut);
            return;
        }
    };

    store_token(&token);
    // Prefer the application's own user record for the provider identity
    let user = match api::users::fetch_by_provider_id(&provider_user.sub).await {
        Ok(user) => user,
        Err(_) => auth::map_provider_user(&provider_user),
    };
    dispatch(&store, SessionEvent::ProviderLogin { user, token });
}

/// Clear the session synchronously, then hand off to the provider's logout
/// redirect.
pub fn logout(store: &SessionStore) {
    dispatch(store, SessionEvent::LoggedOut);
    clear_stored_token();
    auth::provider_logout();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_user(id: &str) -> User {
        User {
            id: id.to_string(),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            profile_image: None,
            email_verified: Some(true),
        }
    }

    #[test]
    fn test_bootstrap_success_populates_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::BootstrapStarted { gen: 1 });
        assert!(state.is_loading);
        state.apply(SessionEvent::BootstrapSucceeded {
            gen: 1,
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        assert!(state.is_authenticated);
        assert!(!state.is_loading);
        assert_eq!(state.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_stale_bootstrap_result_discarded() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::BootstrapStarted { gen: 1 });
        state.apply(SessionEvent::BootstrapStarted { gen: 2 });
        // The first attempt resolves late; it must not mutate the session
        state.apply(SessionEvent::BootstrapSucceeded {
            gen: 1,
            user: make_user("stale"),
            token: "stale".to_string(),
        });
        assert!(!state.is_authenticated);
        assert!(state.is_loading);
        // The current attempt still lands
        state.apply(SessionEvent::BootstrapFailed { gen: 2 });
        assert!(!state.is_authenticated);
        assert!(!state.is_loading);
    }

    #[test]
    fn test_stale_failure_does_not_clear_newer_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::BootstrapStarted { gen: 1 });
        state.apply(SessionEvent::BootstrapStarted { gen: 2 });
        state.apply(SessionEvent::BootstrapSucceeded {
            gen: 2,
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        state.apply(SessionEvent::BootstrapFailed { gen: 1 });
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_login_then_logout_round_trip() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::LoggedIn {
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        assert!(state.is_authenticated);
        state.apply(SessionEvent::LoggedOut);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_provider_logged_out_keeps_token_session() {
        // Reload with a valid persisted token but no provider login: the
        // provider's logged-out snapshot must not end the restored session
        let mut state = SessionState::default();
        state.apply(SessionEvent::BootstrapStarted { gen: 1 });
        state.apply(SessionEvent::BootstrapSucceeded {
            gen: 1,
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        state.apply(SessionEvent::ProviderLoggedOut);
        assert!(state.is_authenticated);
        assert_eq!(state.token.as_deref(), Some("tok"));
    }

    #[test]
    fn test_provider_logged_out_keeps_form_login_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::LoggedIn {
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        state.apply(SessionEvent::ProviderLoggedOut);
        assert!(state.is_authenticated);
    }

    #[test]
    fn test_provider_logged_out_clears_provider_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::ProviderLogin {
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        assert!(state.provider_credential);
        state.apply(SessionEvent::ProviderLoggedOut);
        assert!(!state.is_authenticated);
        assert!(state.user.is_none());
        assert!(state.token.is_none());
    }

    #[test]
    fn test_provider_login_supersedes_bootstrap_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::BootstrapStarted { gen: 1 });
        state.apply(SessionEvent::BootstrapSucceeded {
            gen: 1,
            user: make_user("old"),
            token: "old-tok".to_string(),
        });
        state.apply(SessionEvent::ProviderLogin {
            user: make_user("new"),
            token: "new-tok".to_string(),
        });
        assert_eq!(state.token.as_deref(), Some("new-tok"));
        // Now the provider owns the credential and may revoke it
        state.apply(SessionEvent::ProviderLoggedOut);
        assert!(!state.is_authenticated);
    }

    #[test]
    fn test_explicit_logout_clears_any_session() {
        let mut state = SessionState::default();
        state.apply(SessionEvent::LoggedIn {
            user: make_user("u1"),
            token: "tok".to_string(),
        });
        state.apply(SessionEvent::LoggedOut);
        assert!(!state.is_authenticated);
        assert!(!state.provider_credential);
    }

    #[test]
    fn test_every_event_leaves_no_partial_state() {
        // Authenticated iff both user and token are present
        let events = vec![
            SessionEvent::BootstrapStarted { gen: 1 },
            SessionEvent::BootstrapSucceeded {
                gen: 1,
                user: make_user("u1"),
                token: "t".to_string(),
            },
            SessionEvent::BootstrapFailed { gen: 1 },
            SessionEvent::LoggedIn {
                user: make_user("u2"),
                token: "t2".to_string(),
            },
            SessionEvent::ProviderLogin {
                user: make_user("u3"),
                token: "t3".to_string(),
            },
            SessionEvent::ProviderLoggedOut,
            SessionEvent::LoggedOut,
        ];
        let mut state = SessionState::default();
        for event in events {
            state.apply(event);
            assert_eq!(
                state.is_authenticated,
                state.user.is_some() && state.token.is_some()
            );
        }
    }
}
