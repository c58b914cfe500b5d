//! REST calls against the image backend.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds (tests, tooling): calls return [`ApiError::Unavailable`].
//!
//! DESIGN
//! ======
//! Body encoding and response decoding are plain functions over status codes
//! and body text so the variant-specific wire contracts are tested without a
//! browser. The async wrappers only move bytes.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::error::ApiError;
use super::types::{
    AnonymousGenerateRequest, AnonymousGenerateResponse, ErrorBody, GenerateImageRequest, GenerateImageResponse,
    GenerateOutcome, GeneratedImage, ImageGenerationOptions,
};
use crate::config::{ApiConfig, ApiVariant};

pub fn generate_endpoint(config: &ApiConfig) -> String {
    config.endpoint("/api/generate-image")
}

pub fn user_images_endpoint(config: &ApiConfig, user_id: &str) -> String {
    config.endpoint(&format!("/api/user/{user_id}/images"))
}

pub fn image_endpoint(config: &ApiConfig, image_id: &str) -> String {
    config.endpoint(&format!("/api/images/{image_id}"))
}

pub fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Encode the generate request body for the configured backend.
///
/// The anonymous backend only accepts a prompt; user and options are dropped.
///
/// # Errors
///
/// Returns [`ApiError::Decode`] if the body cannot be serialized.
pub fn generate_request_body(
    variant: ApiVariant,
    prompt: &str,
    user_id: Option<&str>,
    options: &ImageGenerationOptions,
) -> Result<serde_json::Value, ApiError> {
    let value = match variant {
        ApiVariant::Authenticated => serde_json::to_value(GenerateImageRequest { prompt, user_id, options })?,
        ApiVariant::Anonymous => serde_json::to_value(AnonymousGenerateRequest { prompt })?,
    };
    Ok(value)
}

/// Decode a generate response.
///
/// # Errors
///
/// Non-2xx statuses always fail: with [`ApiError::Server`] when the
/// authenticated backend supplied an `error` message, otherwise
/// [`ApiError::Status`]. A 2xx body missing the expected fields yields
/// [`ApiError::Decode`].
pub fn parse_generate_response(config: &ApiConfig, status: u16, body: &str) -> Result<GenerateOutcome, ApiError> {
    if !is_success(status) {
        return Err(match config.variant {
            ApiVariant::Authenticated => server_error(status, body),
            ApiVariant::Anonymous => ApiError::Status(status),
        });
    }
    let mut outcome: GenerateOutcome = match config.variant {
        ApiVariant::Authenticated => serde_json::from_str::<GenerateImageResponse>(body)?.into(),
        ApiVariant::Anonymous => serde_json::from_str::<AnonymousGenerateResponse>(body)?.into(),
    };
    if outcome.url.trim().is_empty() {
        return Err(ApiError::Decode("response carried an empty image URL".to_owned()));
    }
    outcome.url = config.resolve_url(&outcome.url);
    Ok(outcome)
}

/// Decode a user gallery listing, resolving image URLs against the API base.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx responses and [`ApiError::Decode`]
/// for malformed bodies.
pub fn parse_user_images(config: &ApiConfig, status: u16, body: &str) -> Result<Vec<GeneratedImage>, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Status(status));
    }
    let mut images: Vec<GeneratedImage> = serde_json::from_str(body)?;
    for image in &mut images {
        image.url = config.resolve_url(&image.url);
    }
    Ok(images)
}

/// Map a delete response status onto a result.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for any non-2xx status.
pub fn check_delete_status(status: u16) -> Result<(), ApiError> {
    if is_success(status) { Ok(()) } else { Err(ApiError::Status(status)) }
}

fn server_error(status: u16, body: &str) -> ApiError {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error: Some(message) }) if !message.trim().is_empty() => ApiError::Server(message),
        _ => ApiError::Status(status),
    }
}

/// Submit one generation request via `POST /api/generate-image`.
///
/// # Errors
///
/// See [`parse_generate_response`]; transport failures map to [`ApiError::Network`].
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn generate_image(
    config: &ApiConfig,
    prompt: &str,
    user_id: Option<&str>,
    options: &ImageGenerationOptions,
) -> Result<GenerateOutcome, ApiError> {
    #[cfg(feature = "csr")]
    {
        let body = generate_request_body(config.variant, prompt, user_id, options)?;
        let resp = gloo_net::http::Request::post(&generate_endpoint(config))
            .json(&body)
            .map_err(|e| ApiError::Network(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_generate_response(config, status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch a user's persisted images via `GET /api/user/{user_id}/images`.
///
/// # Errors
///
/// See [`parse_user_images`]; transport failures map to [`ApiError::Network`].
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn fetch_user_images(config: &ApiConfig, user_id: &str) -> Result<Vec<GeneratedImage>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(&user_images_endpoint(config, user_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        let status = resp.status();
        let text = resp.text().await.map_err(|e| ApiError::Network(e.to_string()))?;
        parse_user_images(config, status, &text)
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Remove a persisted image via `DELETE /api/images/{image_id}`.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Network`]
/// for transport failures.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn delete_image(config: &ApiConfig, image_id: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::delete(&image_endpoint(config, image_id))
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        check_delete_status(resp.status())
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

/// Fetch the raw bytes behind an already-resolved image URL.
///
/// # Errors
///
/// Returns [`ApiError::Status`] for non-2xx statuses and [`ApiError::Network`]
/// for transport failures.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub async fn fetch_image_bytes(url: &str) -> Result<Vec<u8>, ApiError> {
    #[cfg(feature = "csr")]
    {
        let resp = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;
        if !resp.ok() {
            return Err(ApiError::Status(resp.status()));
        }
        resp.binary().await.map_err(|e| ApiError::Network(e.to_string()))
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}
