//! Blob URL result artifacts.
//!
//! The processed image arrives as raw bytes; displaying it in an
//! `<img>` and offering it for download both go through a Blob object
//! URL. The URL must be explicitly released via
//! [`ResultArtifact::release`] when the artifact is superseded or the
//! widget resets, otherwise it leaks for the lifetime of the page.
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use kirinuki_core::UploadError;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

/// A processed image held for display and download.
///
/// Owns an object URL and the suggested download filename
/// (`no-bg-<originalName>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultArtifact {
    url: String,
    download_name: String,
}

impl ResultArtifact {
    /// Materialize response bytes as a Blob object URL.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Browser`] if Blob or URL creation fails.
    pub fn new(
        bytes: &[u8],
        media_type: &str,
        download_name: String,
    ) -> Result<Self, UploadError> {
        let parts = js_sys::Array::new();
        parts.push(&js_sys::Uint8Array::from(bytes));

        let opts = BlobPropertyBag::new();
        opts.set_type(media_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)
            .map_err(to_browser_error)?;

        let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(to_browser_error)?;

        Ok(Self { url, download_name })
    }

    /// The object URL, suitable for `<img src>` and `<a href>`.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Suggested filename for the download action.
    #[must_use]
    pub fn download_name(&self) -> &str {
        &self.download_name
    }

    /// Revoke the object URL, releasing the browser-held blob.
    ///
    /// Best-effort: failures are silently ignored since the URL may
    /// already have been revoked. Consumes the artifact; any clone
    /// still holding the same URL becomes dangling.
    pub fn release(self) {
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

fn to_browser_error(value: JsValue) -> UploadError {
    UploadError::Browser(format!("{value:?}"))
}
