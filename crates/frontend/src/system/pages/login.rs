use chrono::Utc;
use leptos::prelude::*;

use crate::shared::data::RecordStore;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_auth, AuthState};

/// Mock sign-in against the in-memory user directory. Any non-empty password
/// is accepted for a known, active account.
#[component]
pub fn LoginPage() -> impl IntoView {
    let store = use_context::<RecordStore>().expect("RecordStore not found");
    let (_, set_auth_state) = use_auth();

    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error, set_error) = signal::<Option<String>>(None);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let email = email.get_untracked();
        let password = password.get_untracked();
        if email.is_empty() || password.is_empty() {
            set_error.set(Some("Enter your email and password.".to_string()));
            return;
        }

        let found = store
            .users
            .with_untracked(|dir| dir.find_by_email(&email).cloned());
        match found {
            Some(mut user) if user.is_active => {
                user.last_login = Some(Utc::now());
                // Keep the directory's last-login in sync with the session.
                store.users.update(|dir| {
                    let _ = dir.update(user.clone());
                });
                leptos::logging::log!("login: {}", user.email);
                set_auth_state.set(AuthState { user: Some(user) });
            }
            Some(_) => set_error.set(Some("This account has been deactivated.".to_string())),
            None => set_error.set(Some("No account found for this email.".to_string())),
        }
    };

    view! {
        <div class="login">
            <form class="login__card" on:submit=submit>
                <div class="login__brand">
                    {icon("bar-chart")}
                    <h1>"GeM Insight"</h1>
                </div>
                <p class="login__subtitle">"Procurement analytics dashboard"</p>

                {move || error.get().map(|e| view! {
                    <div class="warning-box">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <label class="field">
                    <span class="field__label">"Email"</span>
                    <input
                        type="email"
                        class="field__input"
                        placeholder="you@company.in"
                        prop:value=move || email.get()
                        on:input=move |ev| set_email.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Password"</span>
                    <input
                        type="password"
                        class="field__input"
                        prop:value=move || password.get()
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </label>

                <button type="submit" class="button button--primary login__submit">
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
