//! Login page exchanging username + password for a bearer session.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

/// Trim the username and require both fields.
pub fn validate_login_input(username: &str, password: &str) -> Result<(String, String), &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    Ok((username.to_owned(), password.to_owned()))
}

/// Operator-facing message for a failed sign-in.
pub fn login_failure_message(err: &triage::ApiError) -> String {
    if err.is_unauthorized() {
        "Invalid username or password.".to_owned()
    } else {
        format!("Sign-in failed: {err}")
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let (user_value, pass_value) = match validate_login_input(&username.get(), &password.get()) {
            Ok(values) => values,
            Err(message) => {
                info.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        info.set("Signing in...".to_owned());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            use triage::SessionStore as _;

            match crate::net::api::login(&user_value, &pass_value).await {
                Ok(session) => {
                    if let Err(e) = crate::util::session::BrowserSessionStore.save(&session) {
                        log::warn!("session not persisted: {e}");
                    }
                    crate::util::session::redirect("/");
                }
                Err(e) => {
                    info.set(login_failure_message(&e));
                    busy.set(false);
                }
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (user_value, pass_value);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Inbox Triage"</h1>
                <p class="login-card__subtitle">"Operator sign-in"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="text"
                        autocomplete="username"
                        placeholder="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        autocomplete="current-password"
                        placeholder="password"
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
