use super::*;

#[test]
fn user_message_prefers_server_message() {
    let err = ApiError::Server("Prompt is required".to_owned());
    assert_eq!(err.user_message(), "Prompt is required");
}

#[test]
fn user_message_falls_back_for_blank_server_message() {
    assert_eq!(ApiError::Server("  ".to_owned()).user_message(), GENERIC_GENERATE_FAILURE);
}

#[test]
fn user_message_is_generic_for_transport_failures() {
    assert_eq!(ApiError::Status(500).user_message(), GENERIC_GENERATE_FAILURE);
    assert_eq!(ApiError::Network("Failed to fetch".to_owned()).user_message(), GENERIC_GENERATE_FAILURE);
    assert_eq!(ApiError::Decode("eof".to_owned()).user_message(), GENERIC_GENERATE_FAILURE);
    assert_eq!(ApiError::Unavailable.user_message(), GENERIC_GENERATE_FAILURE);
}

#[test]
fn display_formats_status() {
    assert_eq!(ApiError::Status(404).to_string(), "request failed: 404");
}

#[test]
fn serde_errors_convert_to_decode() {
    let err: ApiError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, ApiError::Decode(_)));
}
