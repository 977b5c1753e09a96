use super::*;

// =============================================================
// SessionUser serde
// =============================================================

#[test]
fn session_user_parses_server_user_response() {
    let raw = r#"{"id":7,"email":"a@b.kr","nickname":"alice","createdAt":"2025-01-02T03:04:05"}"#;
    let user: SessionUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.get("id"), Some(&serde_json::json!(7)));
    assert_eq!(user.get("email"), Some(&serde_json::json!("a@b.kr")));
    assert_eq!(user.nickname(), Some("alice"));
    assert_eq!(user.fields().len(), 4);
}

#[test]
fn session_user_keeps_unknown_fields() {
    let raw = r#"{"nickname":"bob","role":"admin","prefs":{"dark":true}}"#;
    let user: SessionUser = serde_json::from_str(raw).unwrap();
    assert_eq!(user.get("role"), Some(&serde_json::json!("admin")));

    let back: serde_json::Value = serde_json::to_value(&user).unwrap();
    assert_eq!(back, serde_json::json!({"nickname":"bob","role":"admin","prefs":{"dark":true}}));
}

#[test]
fn session_user_keeps_explicit_nulls() {
    let raw = r#"{"email":null,"nickname":"alice"}"#;
    let user: SessionUser = serde_json::from_str(raw).unwrap();

    let back: serde_json::Value = serde_json::to_value(&user).unwrap();
    assert_eq!(back, serde_json::json!({"email":null,"nickname":"alice"}));
}

#[test]
fn session_user_accepts_any_field_types() {
    let raw = r#"{"id":"u-1","createdAt":[2025,1,2],"nickname":"alice"}"#;
    let user = SessionUser::from_json(raw).unwrap();
    assert_eq!(user.get("id"), Some(&serde_json::json!("u-1")));
    assert_eq!(user.nickname(), Some("alice"));
}

#[test]
fn session_user_from_json_rejects_non_object_as_input_error() {
    let err = SessionUser::from_json("42").unwrap_err();
    assert!(matches!(err, SessionError::InvalidInput(_)));
    assert!(err.to_string().starts_with("invalid input"));
}

#[test]
fn session_user_serializes_as_plain_object() {
    let text = serde_json::to_string(&SessionUser::with_nickname("alice")).unwrap();
    assert_eq!(text, r#"{"nickname":"alice"}"#);
}

// =============================================================
// nickname / display_name
// =============================================================

#[test]
fn display_name_ignores_missing_null_or_empty_nickname() {
    assert_eq!(SessionUser::default().display_name(), None);
    assert_eq!(SessionUser::with_nickname("").display_name(), None);
    assert_eq!(SessionUser::from_json(r#"{"nickname":null}"#).unwrap().display_name(), None);
    assert_eq!(SessionUser::with_nickname("alice").display_name(), Some("alice"));
}

#[test]
fn nickname_of_wrong_type_reads_as_absent() {
    let user = SessionUser::from_json(r#"{"nickname":5}"#).unwrap();
    assert_eq!(user.nickname(), None);
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_into_parts() {
    let resp =
        LoginResponse::from_json(r#"{"token":"jwt","email":"a@b.kr","nickname":"alice"}"#).unwrap();
    let (token, user) = resp.into_parts();
    assert_eq!(token, "jwt");
    assert_eq!(user.get("email"), Some(&serde_json::json!("a@b.kr")));
    assert_eq!(user.nickname(), Some("alice"));
    assert_eq!(user.get("id"), None);
}

#[test]
fn login_response_requires_token() {
    let err = LoginResponse::from_json(r#"{"nickname":"alice"}"#).unwrap_err();
    assert!(matches!(err, SessionError::InvalidInput(_)));
}
