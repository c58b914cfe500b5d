//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The identity is injected by whichever surface hosts the app and read once
//! at startup. The gallery and the authenticated generate request key off it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// `localStorage` key holding the injected user as JSON.
pub const USER_STORAGE_KEY: &str = "image_studio_user";

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<User>,
    pub loading: bool,
}

impl AuthState {
    pub fn signed_in(user: User) -> Self {
        Self { user: Some(user), loading: false }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.as_ref().map(|u| u.id.as_str())
    }

    pub fn display_name(&self) -> Option<&str> {
        self.user.as_ref().map(|u| if u.name.trim().is_empty() { u.id.as_str() } else { u.name.as_str() })
    }

    pub fn sign_out(&mut self) {
        self.user = None;
        self.loading = false;
    }
}

/// Decode a stored identity, ignoring records without a usable id.
pub fn decode_stored_user(raw: &str) -> Option<User> {
    match serde_json::from_str::<User>(raw) {
        Ok(user) if !user.id.trim().is_empty() => Some(user),
        Ok(_) => {
            log::warn!("stored user has an empty id; ignoring");
            None
        }
        Err(e) => {
            log::warn!("stored user is not valid JSON: {e}");
            None
        }
    }
}
