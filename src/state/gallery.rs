//! Persisted gallery state for the signed-in user.
//!
//! DESIGN
//! ======
//! Each fetch cycle owns one request token. A cycle starts on mount and on
//! every change of user identity; results from a superseded or cancelled
//! cycle are dropped. Delete results are applied by id, so they stay valid
//! across reloads of the list.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use super::request::{RequestSlot, RequestToken};
use crate::net::error::ApiError;
use crate::net::types::GeneratedImage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GalleryPhase {
    #[default]
    Loading,
    Loaded,
    LoadedEmpty,
    /// The last fetch failed; the list keeps whatever it held before.
    ErrorSilent,
}

/// One fetch cycle for one user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadTicket {
    pub token: RequestToken,
    pub user_id: String,
}

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    pub phase: GalleryPhase,
    /// Server order, as returned.
    pub images: Vec<GeneratedImage>,
    /// Image shown in the detail modal.
    pub selected: Option<GeneratedImage>,
    /// User whose gallery is loaded or loading.
    pub user_id: Option<String>,
    request: RequestSlot,
}

impl GalleryState {
    /// Start a fetch cycle for `user_id`.
    ///
    /// Returns `None` without a user; the phase stays `Loading` and no fetch
    /// should be made. A pending cycle for a previous user is cancelled.
    pub fn begin_load(&mut self, user_id: Option<&str>) -> Option<LoadTicket> {
        self.phase = GalleryPhase::Loading;
        if self.user_id.as_deref() != user_id {
            self.images.clear();
            self.selected = None;
            self.user_id = user_id.map(str::to_owned);
        }
        let Some(user_id) = user_id else {
            self.request.cancel();
            return None;
        };
        Some(LoadTicket { token: self.request.issue(), user_id: user_id.to_owned() })
    }

    /// Apply the result of a fetch cycle. Returns `false` for stale cycles.
    pub fn finish_load(&mut self, ticket: LoadTicket, result: Result<Vec<GeneratedImage>, ApiError>) -> bool {
        if !self.request.settle(&ticket.token) {
            log::debug!("discarding gallery load {} for user {}", ticket.token.id(), ticket.user_id);
            return false;
        }
        match result {
            Ok(images) => {
                self.phase = if images.is_empty() { GalleryPhase::LoadedEmpty } else { GalleryPhase::Loaded };
                self.images = images;
            }
            Err(e) => {
                log::error!("error fetching images for user {}: {e}", ticket.user_id);
                self.phase = GalleryPhase::ErrorSilent;
            }
        }
        true
    }

    pub fn is_loading(&self) -> bool {
        self.phase == GalleryPhase::Loading
    }

    pub fn select(&mut self, image: GeneratedImage) {
        self.selected = Some(image);
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }

    /// Apply the result of deleting `image_id`.
    ///
    /// On success the matching entry is removed and an open detail view of it
    /// is closed. Returns whether the list changed.
    pub fn finish_delete(&mut self, image_id: &str, result: Result<(), ApiError>) -> bool {
        if let Err(e) = result {
            log::error!("error deleting image {image_id}: {e}");
            return false;
        }
        if self.selected.as_ref().and_then(|image| image.id.as_deref()) == Some(image_id) {
            self.selected = None;
        }
        let before = self.images.len();
        self.images.retain(|image| image.id.as_deref() != Some(image_id));
        let changed = self.images.len() != before;
        if changed && self.images.is_empty() && self.phase == GalleryPhase::Loaded {
            self.phase = GalleryPhase::LoadedEmpty;
        }
        changed
    }

    /// Abandon the pending fetch cycle, if any.
    pub fn cancel_load(&mut self) {
        self.request.cancel();
    }
}
