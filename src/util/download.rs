//! Browser-side image download.
//!
//! The image is fetched as bytes, wrapped in a `Blob`, and saved through a
//! temporary anchor carrying the `download` attribute. Failures never reach
//! the user; they are logged.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::net::error::ApiError;

/// Number of prompt characters kept in a download filename.
pub const FILENAME_PROMPT_CHARS: usize = 30;

/// Filename for a saved image: the prompt prefix with every character that is
/// not ASCII alphanumeric replaced by `_`.
pub fn download_filename(prompt: &str) -> String {
    let stem: String = prompt
        .chars()
        .take(FILENAME_PROMPT_CHARS)
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    if stem.is_empty() { "image.png".to_owned() } else { format!("{stem}.png") }
}

/// Download the image at `url`, logging any failure.
pub async fn download_image(url: &str, prompt: &str) {
    if let Err(e) = try_download(url, prompt).await {
        log::error!("error downloading image {url}: {e}");
    }
}

async fn try_download(url: &str, prompt: &str) -> Result<(), ApiError> {
    let bytes = crate::net::api::fetch_image_bytes(url).await?;
    save_bytes(&bytes, &download_filename(prompt))
}

#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
fn save_bytes(bytes: &[u8], filename: &str) -> Result<(), ApiError> {
    #[cfg(feature = "csr")]
    {
        let props = web_sys::BlobPropertyBag::new();
        props.set_type("image/png");
        let parts = js_sys::Array::of1(&js_sys::Uint8Array::from(bytes));
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &props).map_err(browser_error)?;
        let object_url = web_sys::Url::create_object_url_with_blob(&blob).map_err(browser_error)?;
        let clicked = click_download_anchor(&object_url, filename);
        if let Err(e) = web_sys::Url::revoke_object_url(&object_url) {
            log::warn!("failed to revoke object URL: {e:?}");
        }
        clicked
    }
    #[cfg(not(feature = "csr"))]
    {
        Err(ApiError::Unavailable)
    }
}

#[cfg(feature = "csr")]
fn click_download_anchor(href: &str, filename: &str) -> Result<(), ApiError> {
    use wasm_bindgen::JsCast;

    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ApiError::Browser("document unavailable".to_owned()))?;
    let body = document.body().ok_or_else(|| ApiError::Browser("document has no body".to_owned()))?;
    let anchor = document
        .create_element("a")
        .map_err(browser_error)?
        .dyn_into::<web_sys::HtmlAnchorElement>()
        .map_err(|_| ApiError::Browser("created element is not an anchor".to_owned()))?;
    anchor.set_href(href);
    anchor.set_download(filename);
    body.append_child(&anchor).map_err(browser_error)?;
    anchor.click();
    body.remove_child(&anchor).map_err(browser_error)?;
    Ok(())
}

#[cfg(feature = "csr")]
fn browser_error(e: wasm_bindgen::JsValue) -> ApiError {
    ApiError::Browser(format!("{e:?}"))
}

/// Fire-and-forget download from an event handler.
#[cfg_attr(not(feature = "csr"), allow(unused_variables))]
pub fn start_download(url: String, prompt: String) {
    #[cfg(feature = "csr")]
    leptos::task::spawn_local(async move {
        download_image(&url, &prompt).await;
    });
}
