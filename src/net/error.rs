//! Error type for calls against the image backend.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Shown for every generation failure that carries no server message.
pub const GENERIC_GENERATE_FAILURE: &str = "Failed to generate image. Please try again.";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// Non-2xx response with a structured `{ error }` message.
    #[error("{0}")]
    Server(String),
    /// Non-2xx response without a usable message.
    #[error("request failed: {0}")]
    Status(u16),
    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),
    /// A 2xx response whose body did not match the expected schema.
    #[error("invalid response: {0}")]
    Decode(String),
    /// A browser API call (blob, object URL, anchor) failed.
    #[error("browser error: {0}")]
    Browser(String),
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Text to surface inline in the composer for a failed generation.
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(message) if !message.trim().is_empty() => message.clone(),
            _ => GENERIC_GENERATE_FAILURE.to_owned(),
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Decode(e.to_string())
    }
}
