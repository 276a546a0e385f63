//! REST API helpers for communicating with the finance backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since these endpoints are only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every helper maps transport and status failures onto `AuthError` so the
//! auth manager can route them: login/signup errors go back to the caller,
//! `/users/me` failures always read as an invalid session.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

#[cfg(feature = "hydrate")]
use super::types::TokenResponse;
use super::types::{SignupData, UserProfile};
use crate::state::auth::AuthError;

/// Build the form-encoded body for `POST /login`.
pub fn login_form_body(username: &str, password: &str) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair("username", username)
        .append_pair("password", password)
        .finish()
}

/// Exchange credentials for a bearer token via `POST /login`.
///
/// # Errors
///
/// `InvalidCredentials` when the backend rejects the pair, `Network` when
/// the request cannot complete or fails unexpectedly.
pub async fn login(username: &str, password: &str) -> Result<String, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/login")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(login_form_body(username, password))
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if resp.ok() {
            let body: TokenResponse = resp
                .json()
                .await
                .map_err(|e| AuthError::Network(e.to_string()))?;
            return Ok(body.access_token);
        }
        match resp.status() {
            400..=499 => Err(AuthError::InvalidCredentials),
            status => Err(AuthError::Network(format!("login failed: {status}"))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (username, password);
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Create an account via `POST /signup`. The response body is unused.
///
/// # Errors
///
/// `Validation` when the backend rejects the payload (e.g. a duplicate
/// account), `Network` when the request cannot complete.
pub async fn signup(data: &SignupData) -> Result<(), AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/signup")
            .json(data)
            .map_err(|e| AuthError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| AuthError::Network(e.to_string()))?;
        if resp.ok() {
            return Ok(());
        }
        match resp.status() {
            400..=499 => Err(AuthError::Validation(rejection_reason(&resp).await)),
            status => Err(AuthError::Network(format!("signup failed: {status}"))),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = data;
        Err(AuthError::Network("not available on server".to_owned()))
    }
}

/// Fetch the authenticated profile via `GET /users/me` with the bearer
/// token attached.
///
/// # Errors
///
/// Any failure — non-2xx, transport error, malformed body — reads as
/// `InvalidSession`: the caller treats the token as rejected.
pub async fn fetch_me(token: &str) -> Result<UserProfile, AuthError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/users/me")
            .header("Authorization", &format!("Bearer {token}"))
            .send()
            .await
            .map_err(|_| AuthError::InvalidSession)?;
        if !resp.ok() {
            return Err(AuthError::InvalidSession);
        }
        resp.json().await.map_err(|_| AuthError::InvalidSession)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = token;
        Err(AuthError::InvalidSession)
    }
}

/// Pull a human-readable rejection reason out of an error body, falling
/// back to the status code.
#[cfg(feature = "hydrate")]
async fn rejection_reason(resp: &gloo_net::http::Response) -> String {
    if let Ok(body) = resp.json::<serde_json::Value>().await {
        if let Some(detail) = body.get("detail").and_then(|d| d.as_str()) {
            return detail.to_owned();
        }
    }
    format!("rejected with status {}", resp.status())
}
