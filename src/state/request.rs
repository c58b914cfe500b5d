//! In-flight request tokens shared by the composer and the gallery.
//!
//! DESIGN
//! ======
//! A slot holds at most one live token. The token is issued synchronously
//! before any async work begins, and a completion is only applied when it
//! presents the token still held by the slot. Clones of a token share one
//! cancellation flag, so a view can cancel its outstanding work on cleanup
//! without reaching into the owning state.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Handle for one outstanding request.
#[derive(Clone, Debug)]
pub struct RequestToken {
    id: u64,
    live: Arc<AtomicBool>,
}

impl RequestToken {
    fn new(id: u64) -> Self {
        Self { id, live: Arc::new(AtomicBool::new(true)) }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    /// Mark the request abandoned; its completion will be discarded.
    pub fn cancel(&self) {
        self.live.store(false, Ordering::Relaxed);
    }

    pub fn is_live(&self) -> bool {
        self.live.load(Ordering::Relaxed)
    }
}

impl PartialEq for RequestToken {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && Arc::ptr_eq(&self.live, &other.live)
    }
}

impl Eq for RequestToken {}

/// At-most-one-active request slot.
#[derive(Clone, Debug, Default)]
pub struct RequestSlot {
    next_id: u64,
    current: Option<RequestToken>,
}

impl RequestSlot {
    /// True while a live token is outstanding.
    pub fn is_busy(&self) -> bool {
        self.current.as_ref().is_some_and(RequestToken::is_live)
    }

    pub fn current(&self) -> Option<&RequestToken> {
        self.current.as_ref()
    }

    /// Issue a fresh token, cancelling any token it supersedes.
    pub fn issue(&mut self) -> RequestToken {
        self.cancel();
        self.next_id += 1;
        let token = RequestToken::new(self.next_id);
        self.current = Some(token.clone());
        token
    }

    /// Release the slot for `token`.
    ///
    /// Returns `true` only when `token` is the one currently held and has not
    /// been cancelled; the caller should apply its result. Stale or cancelled
    /// tokens leave the slot untouched, except that a cancelled current token
    /// is cleared.
    pub fn settle(&mut self, token: &RequestToken) -> bool {
        let Some(current) = self.current.as_ref() else {
            return false;
        };
        if current != token {
            return false;
        }
        let live = current.is_live();
        self.current = None;
        live
    }

    /// Cancel and drop the outstanding token, if any.
    pub fn cancel(&mut self) {
        if let Some(token) = self.current.take() {
            token.cancel();
        }
    }
}
