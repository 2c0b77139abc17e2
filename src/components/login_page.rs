//! Login Page Component
//!
//! Login and register forms plus the identity-provider redirect entry point.
//! Shown whenever the session is unauthenticated.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::auth;
use crate::session::{dispatch, store_token, use_session, SessionEvent};
use crate::validate;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session();

    let (registering, set_registering) = signal(false);
    let (first_name, set_first_name) = signal(String::new());
    let (last_name, set_last_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (submitting, set_submitting) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if submitting.get() {
            return;
        }
        set_error.set(None);

        let email_value = email.get();
        let password_value = password.get();
        let first = first_name.get();
        let last = last_name.get();
        let is_register = registering.get();

        // Validate before any network call
        let valid = if is_register {
            validate::validate_register(&first, &last, &email_value, &password_value)
        } else {
            validate::validate_login(&email_value, &password_value)
        };
        if let Err(message) = valid {
            set_error.set(Some(message));
            return;
        }

        set_submitting.set(true);
        spawn_local(async move {
            let result = if is_register {
                api::users::register(&api::users::RegisterArgs {
                    first_name: &first,
                    last_name: &last,
                    email: &email_value,
                    password: &password_value,
                })
                .await
            } else {
                api::users::login(&api::users::LoginArgs {
                    email: &email_value,
                    password: &password_value,
                })
                .await
            };
            set_submitting.set(false);
            match result {
                Ok(payload) => {
                    store_token(&payload.token);
                    dispatch(
                        &session,
                        SessionEvent::LoggedIn {
                            user: payload.user,
                            token: payload.token,
                        },
                    );
                }
                Err(err) => set_error.set(Some(err.to_string())),
            }
        });
    };

    let on_provider_login = move |_| {
        spawn_local(async move {
            if let Err(err) = auth::login().await {
                web_sys::console::warn_1(
                    &format!("[SESSION] provider login failed: {}", err).into(),
                );
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"TaskMaster"</h1>
            <form class="login-form" on:submit=on_submit>
                <Show when=move || registering.get()>
                    <input
                        type="text"
                        placeholder="First name"
                        prop:value=move || first_name.get()
                        on:input=move |ev| set_first_name.set(event_target_value(&ev))
                    />
                    <input
                        type="text"
                        placeholder="Last name"
                        prop:value=move || last_name.get()
                        on:input=move |ev| set_last_name.set(event_target_value(&ev))
                    />
                </Show>
                <input
                    type="email"
                    placeholder="Email"
                    prop:value=move || email.get()
                    on:input=move |ev| set_email.set(event_target_value(&ev))
                />
                <input
                    type="password"
                    placeholder="Password"
                    prop:value=move || password.get()
                    on:input=move |ev| set_password.set(event_target_value(&ev))
                />

                {move || error.get().map(|message| view! {
                    <p class="form-error">{message}</p>
                })}

                <button type="submit" disabled=move || submitting.get()>
                    {move || if registering.get() { "Create account" } else { "Log in" }}
                </button>
            </form>

            <button class="provider-login-btn" on:click=on_provider_login>
                "Continue with SSO"
            </button>

            <button
                class="switch-mode-btn"
                on:click=move |_| {
                    set_error.set(None);
                    set_registering.update(|v| *v = !*v);
                }
            >
                {move || if registering.get() {
                    "Have an account? Log in"
                } else {
                    "New here? Create an account"
                }}
            </button>
        </div>
    }
}
