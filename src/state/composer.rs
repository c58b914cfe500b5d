//! Prompt composer state: prompt text, options, and the recent-images list.
//!
//! SYSTEM CONTEXT
//! ==============
//! The generate page drives this model in two synchronous steps around one
//! async call: `begin_submit` validates and installs the in-flight token,
//! then `complete` applies the response if that token is still current.
//! Nothing here touches the network, so every transition is unit-tested.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use super::request::{RequestSlot, RequestToken};
use crate::net::error::ApiError;
use crate::net::types::{GenerateOutcome, GeneratedImage, ImageGenerationOptions};

/// Maximum number of images kept in the recent list.
pub const RECENT_CAPACITY: usize = 6;
/// Length shown by the prompt counter; not enforced.
pub const PROMPT_SOFT_LIMIT: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ComposeError {
    #[error("Please enter a prompt")]
    EmptyPrompt,
    #[error("a generation request is already in flight")]
    Busy,
}

/// Everything captured at submission time for one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingGeneration {
    pub token: RequestToken,
    /// Trimmed prompt as sent.
    pub prompt: String,
    pub user_id: Option<String>,
    /// Options snapshot; later edits to the composer do not affect it.
    pub options: ImageGenerationOptions,
}

#[derive(Clone, Debug, Default)]
pub struct ComposerState {
    pub prompt: String,
    pub options: ImageGenerationOptions,
    /// Newest first, at most [`RECENT_CAPACITY`] entries.
    pub recent: Vec<GeneratedImage>,
    /// Inline error shown under the options panel.
    pub error: Option<String>,
    request: RequestSlot,
}

impl ComposerState {
    pub fn is_generating(&self) -> bool {
        self.request.is_busy()
    }

    /// Whether the submit control should be enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_generating() && !self.prompt.trim().is_empty()
    }

    pub fn in_flight(&self) -> Option<&RequestToken> {
        self.request.current()
    }

    /// Validate the prompt and claim the single in-flight slot.
    ///
    /// # Errors
    ///
    /// [`ComposeError::Busy`] while a request is outstanding (state unchanged);
    /// [`ComposeError::EmptyPrompt`] for an empty or whitespace-only prompt,
    /// which also sets the inline error.
    pub fn begin_submit(&mut self, user_id: Option<&str>) -> Result<PendingGeneration, ComposeError> {
        if self.is_generating() {
            return Err(ComposeError::Busy);
        }
        let prompt = self.prompt.trim();
        if prompt.is_empty() {
            self.error = Some(ComposeError::EmptyPrompt.to_string());
            return Err(ComposeError::EmptyPrompt);
        }
        let prompt = prompt.to_owned();
        self.error = None;
        let token = self.request.issue();
        Ok(PendingGeneration { token, prompt, user_id: user_id.map(str::to_owned), options: self.options.clone() })
    }

    /// Apply the result of the request started by `begin_submit`.
    ///
    /// Returns `false` and leaves state untouched when the request was
    /// cancelled or superseded.
    pub fn complete(
        &mut self,
        pending: PendingGeneration,
        result: Result<GenerateOutcome, ApiError>,
        now_ms: i64,
    ) -> bool {
        if !self.request.settle(&pending.token) {
            log::debug!("discarding generation result for request {}", pending.token.id());
            return false;
        }
        match result {
            Ok(outcome) => {
                let image = GeneratedImage {
                    id: outcome.id,
                    url: outcome.url,
                    prompt: pending.prompt,
                    timestamp: now_ms,
                    user_id: pending.user_id,
                    filename: outcome.filename,
                    options: pending.options,
                };
                self.recent.insert(0, image);
                self.recent.truncate(RECENT_CAPACITY);
                self.prompt.clear();
                self.error = None;
            }
            Err(e) => {
                log::error!("error generating image: {e}");
                self.error = Some(e.user_message());
            }
        }
        true
    }

    /// Abandon the outstanding request; its result will be discarded.
    pub fn cancel_in_flight(&mut self) {
        self.request.cancel();
    }
}

/// Enter submits; Shift+Enter inserts a newline.
pub fn submits_on_key(key: &str, shift: bool) -> bool {
    key == "Enter" && !shift
}

pub fn prompt_counter(prompt: &str) -> String {
    format!("{}/{PROMPT_SOFT_LIMIT}", prompt.chars().count())
}
