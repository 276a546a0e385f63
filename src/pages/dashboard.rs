//! Dashboard page behind the session route guard.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthManager;
use crate::state::session::{SessionPhase, SessionStore};

/// Dashboard page — renders the authenticated profile.
///
/// The guard requires a fully validated session: an anonymous session
/// redirects to `/login`, and a token still pending validation renders a
/// neutral placeholder, never protected content.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionStore>();
    let auth = expect_context::<AuthManager>();
    let navigate = use_navigate();

    // Redirect to login whenever the session collapses to anonymous, which
    // also covers a rehydration failure after the page rendered.
    Effect::new(move || {
        if session.phase() == SessionPhase::Anonymous {
            navigate("/login", NavigateOptions::default());
        }
    });

    let on_logout = move |_| auth.logout();

    view! {
        <div class="dashboard-page">
            {move || match session.phase() {
                SessionPhase::Anonymous => {
                    view! { <p class="dashboard-page__notice">"Redirecting to login..."</p> }
                        .into_any()
                }
                SessionPhase::PendingValidation => {
                    view! { <p class="dashboard-page__notice">"Checking session..."</p> }
                        .into_any()
                }
                SessionPhase::Authenticated => {
                    match session.profile() {
                        Some(profile) => {
                            view! {
                                <section class="dashboard-page__content">
                                    <header class="dashboard-page__header">
                                        <h1>{format!("Welcome, {}", profile.full_name)}</h1>
                                        <button class="btn" on:click=on_logout>
                                            "Sign out"
                                        </button>
                                    </header>
                                    <dl class="dashboard-page__facts">
                                        <dt>"Location"</dt>
                                        <dd>{profile.location.clone()}</dd>
                                        <dt>"Savings goal"</dt>
                                        <dd>{format!("${:.2}", profile.savings_goal)}</dd>
                                    </dl>
                                </section>
                            }
                                .into_any()
                        }
                        None => {
                            view! { <p class="dashboard-page__notice">"Checking session..."</p> }
                                .into_any()
                        }
                    }
                }
            }}
        </div>
    }
}
