use super::*;

fn user(name: &str) -> User {
    User { id: "u1".to_owned(), name: name.to_owned(), email: None, created_at: None }
}

#[test]
fn default_state_has_no_user() {
    let state = AuthState::default();
    assert!(state.user_id().is_none());
    assert!(!state.loading);
}

#[test]
fn signed_in_exposes_id_and_name() {
    let state = AuthState::signed_in(user("Ada"));
    assert_eq!(state.user_id(), Some("u1"));
    assert_eq!(state.display_name(), Some("Ada"));
}

#[test]
fn blank_name_falls_back_to_id() {
    assert_eq!(AuthState::signed_in(user("  ")).display_name(), Some("u1"));
}

#[test]
fn sign_out_clears_user() {
    let mut state = AuthState::signed_in(user("Ada"));
    state.sign_out();
    assert!(state.user.is_none());
}

#[test]
fn decode_stored_user_accepts_camel_case_record() {
    let decoded = decode_stored_user(r#"{"id":"u1","name":"Ada","email":"ada@example.test","createdAt":"2024-05-01"}"#).unwrap();
    assert_eq!(decoded.email.as_deref(), Some("ada@example.test"));
    assert_eq!(decoded.created_at.as_deref(), Some("2024-05-01"));
}

#[test]
fn decode_stored_user_rejects_garbage_and_blank_ids() {
    assert!(decode_stored_user("not json").is_none());
    assert!(decode_stored_user(r#"{"id":" ","name":"Ada"}"#).is_none());
}
