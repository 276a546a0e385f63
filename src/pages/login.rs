//! Login page with username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthManager;

/// Login page — submits credentials and navigates to the dashboard on
/// success. Both fields are required for submission; the manager does not
/// re-validate them.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<AuthManager>();
    let navigate = use_navigate();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let user = username.get().trim().to_owned();
        let pass = password.get();
        if user.is_empty() || pass.is_empty() {
            error.set(Some("username and password are required".to_owned()));
            return;
        }
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.login(&user, &pass).await {
                Ok(()) => navigate("/", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Nestegg"</h1>
            <p>"Sign in to your account"</p>
            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Username"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Password"
                    <input
                        class="auth-form__input"
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|msg| view! { <p class="auth-form__error">{msg}</p> })}
                <button class="btn btn--primary" type="submit">
                    "Sign in"
                </button>
            </form>
            <p>
                "No account yet? "
                <a href="/signup">"Sign up"</a>
            </p>
        </div>
    }
}
