//! Signup page with the account-creation form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::SignupData;
use crate::state::auth::AuthManager;

/// Signup page — submits the account form and navigates to the login page
/// on success. Signing up never establishes a session.
#[component]
pub fn SignupPage() -> impl IntoView {
    let auth = expect_context::<AuthManager>();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let birth_date = RwSignal::new(String::new());
    let location = RwSignal::new(String::new());
    let savings_goal = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = full_name.get().trim().to_owned();
        let pass = password.get();
        if name.is_empty() || pass.is_empty() {
            error.set(Some("full name and password are required".to_owned()));
            return;
        }
        let goal: f64 = match savings_goal.get().trim().parse() {
            Ok(v) => v,
            Err(_) => {
                error.set(Some("savings goal must be a number".to_owned()));
                return;
            }
        };
        let data = SignupData {
            full_name: name,
            birth_date: birth_date.get(),
            location: location.get().trim().to_owned(),
            savings_goal: goal,
            password: pass,
        };
        error.set(None);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match auth.signup(&data).await {
                Ok(()) => navigate("/login", NavigateOptions::default()),
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <div class="signup-page">
            <h1>"Create your account"</h1>
            <form class="auth-form" on:submit=submit>
                <label class="auth-form__label">
                    "Full name"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Birth date"
                    <input
                        class="auth-form__input"
                        type="date"
                        prop:value=move || birth_date.get()
                        on:input=move |ev| birth_date.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Location"
                    <input
                        class="auth-form__input"
                        type="text"
                        prop:value=move || location.get()
                        on:input=move |ev| location.set(event_target_value(&ev))
                    />
                </label>
                <label class="auth-form__label">
                    "Savings goal"
                    <input
                        class="auth-form__input"
                        type="number"
                        prop:value=move || savings_goal.get()
                        on:input=move |ev| savings_goal.set(event_target_value(&ev))
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
                    "Register"
                </button>
            </form>
            <p>
                "Already registered? "
                <a href="/login">"Sign in"</a>
            </p>
        </div>
    }
}
