//! Wire types shared with the finance backend.

use serde::{Deserialize, Serialize};

/// Authenticated user profile returned by `GET /users/me`.
///
/// The backend response carries more fields (expense, income and category
/// lists); serde ignores what the client does not render.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub full_name: String,
    pub birth_date: String,
    pub location: String,
    pub savings_goal: f64,
}

/// Successful login response body. `token_type` is always "bearer" and is
/// not modeled.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
}

/// Signup form payload for `POST /signup`. Transient: serialized once per
/// submission and never stored.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SignupData {
    pub full_name: String,
    pub birth_date: String,
    pub location: String,
    pub savings_goal: f64,
    pub password: String,
}
