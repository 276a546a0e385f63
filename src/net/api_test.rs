use super::*;
use crate::net::types::{SignupData, TokenResponse, UserProfile};

// =============================================================
// Wire shapes
// =============================================================

#[test]
fn login_form_body_encodes_reserved_characters() {
    let body = login_form_body("alice smith", "p&ss=word");
    assert_eq!(body, "username=alice+smith&password=p%26ss%3Dword");
}

#[test]
fn login_form_body_plain_credentials() {
    let body = login_form_body("alice", "correct-pw");
    assert_eq!(body, "username=alice&password=correct-pw");
}

#[test]
fn token_response_ignores_token_type() {
    let body: TokenResponse =
        serde_json::from_str(r#"{"access_token":"tok123","token_type":"bearer"}"#)
            .expect("token response");
    assert_eq!(body.access_token, "tok123");
}

#[test]
fn profile_deserializes_backend_shape() {
    // The backend echoes fields the client never renders; they must not
    // break deserialization.
    let json = r#"{
        "id": 1,
        "full_name": "Alice",
        "birth_date": "1990-01-01",
        "location": "Lisbon",
        "savings_goal": 2500.0,
        "password": "$argon$...",
        "expenses": [],
        "incomes": [],
        "categories": []
    }"#;
    let profile: UserProfile = serde_json::from_str(json).expect("profile");
    assert_eq!(profile.id, 1);
    assert_eq!(profile.full_name, "Alice");
    assert!((profile.savings_goal - 2500.0).abs() < f64::EPSILON);
}

#[test]
fn signup_payload_field_names_match_the_wire() {
    let data = SignupData {
        full_name: "Bob".to_owned(),
        birth_date: "1985-06-15".to_owned(),
        location: "Porto".to_owned(),
        savings_goal: 10_000.0,
        password: "hunter2".to_owned(),
    };
    let value = serde_json::to_value(&data).expect("signup json");
    assert_eq!(value["full_name"], "Bob");
    assert_eq!(value["birth_date"], "1985-06-15");
    assert_eq!(value["location"], "Porto");
    assert_eq!(value["savings_goal"], 10_000.0);
    assert_eq!(value["password"], "hunter2");
}
