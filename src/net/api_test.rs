use super::*;
use serde_json::json;

fn sunset_options() -> ImageGenerationOptions {
    ImageGenerationOptions { width: 768, height: 512, steps: 30, seed: -1, negative_prompt: String::new() }
}

// =============================================================
// Endpoints
// =============================================================

#[test]
fn endpoints_format_expected_paths() {
    let config = ApiConfig::authenticated();
    assert_eq!(generate_endpoint(&config), "/api/generate-image");
    assert_eq!(user_images_endpoint(&config, "u123"), "/api/user/u123/images");
    assert_eq!(image_endpoint(&config, "img_1"), "/api/images/img_1");
}

#[test]
fn anonymous_generate_endpoint_targets_local_backend() {
    assert_eq!(generate_endpoint(&ApiConfig::anonymous()), "http://127.0.0.1:5000/api/generate-image");
}

#[test]
fn is_success_covers_2xx_only() {
    assert!(is_success(200));
    assert!(is_success(204));
    assert!(!is_success(199));
    assert!(!is_success(301));
    assert!(!is_success(500));
}

// =============================================================
// Request bodies
// =============================================================

#[test]
fn authenticated_body_carries_prompt_user_and_exact_options() {
    let body = generate_request_body(ApiVariant::Authenticated, "sunset", Some("u1"), &sunset_options()).unwrap();
    assert_eq!(
        body,
        json!({
            "prompt": "sunset",
            "userId": "u1",
            "options": { "width": 768, "height": 512, "steps": 30, "seed": -1, "negativePrompt": "" }
        })
    );
}

#[test]
fn authenticated_body_without_user_omits_user_id() {
    let body = generate_request_body(ApiVariant::Authenticated, "sunset", None, &sunset_options()).unwrap();
    assert!(body.get("userId").is_none());
    assert!(body.get("options").is_some());
}

#[test]
fn anonymous_body_only_carries_prompt() {
    let body = generate_request_body(ApiVariant::Anonymous, "sunset", Some("u1"), &sunset_options()).unwrap();
    assert_eq!(body, json!({ "prompt": "sunset" }));
}

// =============================================================
// parse_generate_response
// =============================================================

#[test]
fn authenticated_success_yields_id_url_and_filename() {
    let body = r#"{"id":"img_1","url":"/api/images/u1/generated.png","filename":"generated.png"}"#;
    let outcome = parse_generate_response(&ApiConfig::authenticated(), 200, body).unwrap();
    assert_eq!(outcome.id.as_deref(), Some("img_1"));
    assert_eq!(outcome.url, "/api/images/u1/generated.png");
    assert_eq!(outcome.filename.as_deref(), Some("generated.png"));
}

#[test]
fn anonymous_success_resolves_relative_url_against_base() {
    let body = r#"{"image_url":"/api/images/generated.png","prompt":"sunset","filename":"generated.png"}"#;
    let outcome = parse_generate_response(&ApiConfig::anonymous(), 200, body).unwrap();
    assert!(outcome.id.is_none());
    assert_eq!(outcome.url, "http://127.0.0.1:5000/api/images/generated.png");
}

#[test]
fn authenticated_error_surfaces_server_message() {
    let err = parse_generate_response(&ApiConfig::authenticated(), 400, r#"{"error":"Prompt is required"}"#).unwrap_err();
    assert_eq!(err, ApiError::Server("Prompt is required".to_owned()));
}

#[test]
fn authenticated_error_without_message_reports_status() {
    let config = ApiConfig::authenticated();
    assert_eq!(parse_generate_response(&config, 502, "<html>bad gateway</html>").unwrap_err(), ApiError::Status(502));
    assert_eq!(parse_generate_response(&config, 500, "{}").unwrap_err(), ApiError::Status(500));
}

#[test]
fn anonymous_error_ignores_structured_body() {
    let err = parse_generate_response(&ApiConfig::anonymous(), 500, r#"{"error":"Internal server error"}"#).unwrap_err();
    assert_eq!(err, ApiError::Status(500));
}

#[test]
fn success_with_wrong_shape_is_decode_error() {
    let err = parse_generate_response(&ApiConfig::authenticated(), 200, r#"{"image_url":"/x.png"}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn success_with_empty_url_is_decode_error() {
    let err = parse_generate_response(&ApiConfig::anonymous(), 200, r#"{"image_url":""}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

// =============================================================
// parse_user_images / check_delete_status
// =============================================================

#[test]
fn user_images_preserve_server_order() {
    let body = json!([
        { "id": "b", "url": "/api/images/u1/b.png", "prompt": "two", "timestamp": "2024-05-02T00:00:00", "filename": "b.png", "options": {} },
        { "id": "a", "url": "/api/images/u1/a.png", "prompt": "one", "timestamp": "2024-05-01T00:00:00", "filename": "a.png", "options": {} }
    ])
    .to_string();
    let images = parse_user_images(&ApiConfig::authenticated(), 200, &body).unwrap();
    let ids: Vec<_> = images.iter().map(|i| i.id.as_deref().unwrap()).collect();
    assert_eq!(ids, vec!["b", "a"]);
}

#[test]
fn user_images_resolve_against_base() {
    let config = ApiConfig::from_values(Some("authenticated"), Some("https://api.example.test")).unwrap();
    let body = r#"[{"id":"a","url":"/api/images/u1/a.png","prompt":"p","timestamp":0}]"#;
    let images = parse_user_images(&config, 200, body).unwrap();
    assert_eq!(images[0].url, "https://api.example.test/api/images/u1/a.png");
}

#[test]
fn user_images_failure_status_is_error() {
    assert_eq!(
        parse_user_images(&ApiConfig::authenticated(), 500, r#"{"error":"Internal server error"}"#).unwrap_err(),
        ApiError::Status(500)
    );
}

#[test]
fn user_images_malformed_body_is_decode_error() {
    let err = parse_user_images(&ApiConfig::authenticated(), 200, r#"{"images":[]}"#).unwrap_err();
    assert!(matches!(err, ApiError::Decode(_)));
}

#[test]
fn delete_status_maps_to_result() {
    assert_eq!(check_delete_status(200), Ok(()));
    assert_eq!(check_delete_status(404), Err(ApiError::Status(404)));
}

#[cfg(not(feature = "csr"))]
#[test]
fn network_calls_are_unavailable_off_browser() {
    let config = ApiConfig::authenticated();
    let outcome = poll_ready(generate_image(&config, "cat", None, &sunset_options()));
    assert_eq!(outcome, Err(ApiError::Unavailable));
}

/// Poll a future that never suspends, as the native stubs do.
#[cfg(not(feature = "csr"))]
fn poll_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    loop {
        if let Poll::Ready(out) = fut.as_mut().poll(&mut cx) {
            return out;
        }
    }
}
