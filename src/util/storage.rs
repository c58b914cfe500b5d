//! Browser `localStorage` helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The injected user identity lives in `localStorage`; these helpers keep the
//! web-sys glue in one place. Storage failures are logged and treated as an
//! absent value.

/// Read the raw string stored under `key`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn load_string(key: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        let storage = local_storage()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("localStorage read of {key} failed: {e:?}");
                None
            }
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Remove the value stored under `key`.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn remove(key: &str) {
    #[cfg(feature = "csr")]
    {
        let Some(storage) = local_storage() else {
            return;
        };
        if let Err(e) = storage.remove_item(key) {
            log::warn!("localStorage remove of {key} failed: {e:?}");
        }
    }
}

#[cfg(feature = "csr")]
fn local_storage() -> Option<web_sys::Storage> {
    let window = web_sys::window()?;
    match window.local_storage() {
        Ok(storage) => storage,
        Err(e) => {
            log::warn!("localStorage unavailable: {e:?}");
            None
        }
    }
}
