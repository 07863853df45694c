//! Login page: e-mail + password against the hosted auth service.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the only unguarded route. A successful sign-in is broadcast on the
//! auth channel, the session provider picks it up, and the signed-in redirect
//! moves the visitor on to the employee list.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::BackendError;

use crate::net::hosted_auth::HostedAuth;
use crate::state::session::use_session;
use crate::util::auth::install_signed_in_redirect;

/// Trim the e-mail and require both fields.
///
/// # Errors
///
/// Returns the message to show when either field is blank or the e-mail has
/// no `@`.
pub fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both e-mail and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid e-mail address.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

/// User-facing text for a failed sign-in.
#[must_use]
pub fn sign_in_error_message(error: &BackendError) -> String {
    match error {
        BackendError::Status(400 | 401) => "Incorrect e-mail or password.".to_owned(),
        BackendError::Status(429) => "Too many attempts. Try again in a moment.".to_owned(),
        BackendError::Request(_) => "Could not reach the sign-in service.".to_owned(),
        other => format!("Sign-in failed: {other}"),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<HostedAuth>();
    install_signed_in_redirect(use_session(), use_navigate());

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (email_value, password_value) = match validate_login_input(&email.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        {
            let auth = auth.clone();
            leptos::task::spawn_local(async move {
                match auth.sign_in_with_password(&email_value, &password_value).await {
                    Ok(user) => {
                        log::info!("login: signed in as {}", user.display_label());
                        password.set(String::new());
                        info.set(String::new());
                    }
                    Err(e) => {
                        log::warn!("login: sign-in failed: {e}");
                        info.set(sign_in_error_message(&e));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&auth, email_value, password_value);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Back Office"</h1>
                <p class="login-card__subtitle">"Sign in with your company account"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        autocomplete="username"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        "Sign In"
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="login-message">{move || info.get()}</p>
                </Show>
            </div>
        </div>
    }
}
