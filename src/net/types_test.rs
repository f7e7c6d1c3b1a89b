use super::*;

// =============================================================
// Serialization shape
// =============================================================

#[test]
fn register_request_serializes_camel_case() {
    let req = RegisterRequest {
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "pw".to_owned(),
    };
    let value = serde_json::to_value(&req).unwrap();
    assert_eq!(value["firstName"], "Ada");
    assert_eq!(value["lastName"], "Lovelace");
    assert_eq!(value["email"], "ada@example.com");
    assert!(value.get("first_name").is_none());
}

#[test]
fn auth_response_parses_backend_payload() {
    let resp: AuthResponse = serde_json::from_str(
        r#"{"token":"t1","email":"a@b.com","firstName":"A","lastName":"B"}"#,
    )
    .unwrap();
    assert_eq!(resp.token, "t1");
    assert_eq!(resp.first_name, "A");
}

#[test]
fn auth_response_splits_into_token_and_profile() {
    let resp = AuthResponse {
        token: "t1".to_owned(),
        email: "a@b.com".to_owned(),
        first_name: "A".to_owned(),
        last_name: "B".to_owned(),
    };
    let (token, profile) = resp.into_parts();
    assert_eq!(token, "t1");
    assert_eq!(profile.email, "a@b.com");
    assert_eq!(profile.last_name, "B");
}

#[test]
fn error_body_tolerates_missing_field() {
    let body: ErrorBody = serde_json::from_str(r#"{"status":500}"#).unwrap();
    assert_eq!(body.error, None);
}

// =============================================================
// UserProfile::display_name
// =============================================================

#[test]
fn display_name_joins_first_and_last() {
    let profile = UserProfile {
        email: "a@b.com".to_owned(),
        first_name: "Ada".to_owned(),
        last_name: "Lovelace".to_owned(),
    };
    assert_eq!(profile.display_name(), "Ada Lovelace");
}

#[test]
fn display_name_falls_back_to_email() {
    let profile = UserProfile {
        email: "a@b.com".to_owned(),
        first_name: " ".to_owned(),
        last_name: String::new(),
    };
    assert_eq!(profile.display_name(), "a@b.com");
}
