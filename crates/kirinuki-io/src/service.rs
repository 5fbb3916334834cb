//! HTTP client for the Image Processing Service.
//!
//! Posts the selected file as a multipart form (field `file`) via the
//! browser `fetch` API and maps the failure classes -- server-reported,
//! transport, and browser-API -- onto
//! [`UploadError`](kirinuki_core::UploadError).
//!
//! All functions in this module require a browser environment
//! (`wasm32-unknown-unknown` target).

use kirinuki_core::{SelectedFile, ServiceConfig, UploadError, config};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{BlobPropertyBag, FormData, RequestInit, Response};

/// Media type assumed when the service omits a `Content-Type` header.
/// The reference service always answers with PNG.
const FALLBACK_RESPONSE_TYPE: &str = "image/png";

/// A processed image returned by the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessedImage {
    /// Encoded image bytes from the response body.
    pub bytes: Vec<u8>,
    /// Response media type, from the `Content-Type` header.
    pub media_type: String,
}

/// Post `file` to the background-removal endpoint and return the
/// processed image.
///
/// Exactly one call should be in flight per widget instance; the
/// caller enforces this through `UploadFlow::begin` before invoking
/// this function.
///
/// # Errors
///
/// - [`UploadError::Service`] for a non-2xx response, carrying the
///   response body text verbatim.
/// - [`UploadError::ServiceUnreachable`] when the fetch itself fails
///   (service down, offline, DNS or CORS rejection).
/// - [`UploadError::Browser`] when a browser API call fails while
///   assembling the request or reading the response.
#[allow(clippy::future_not_send)] // WASM is single-threaded; Send is not needed
pub async fn remove_background(
    file: &SelectedFile,
    service: &ServiceConfig,
) -> Result<ProcessedImage, UploadError> {
    let window =
        web_sys::window().ok_or_else(|| UploadError::Browser("no global window".into()))?;

    let form = build_form(file)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    // The browser derives the multipart Content-Type (with boundary)
    // from the FormData body; setting it manually would break it.
    opts.set_body(form.as_ref());

    // A rejected fetch promise means the service was never reached.
    let response = JsFuture::from(window.fetch_with_str_and_init(&service.endpoint, &opts))
        .await
        .map_err(|_| UploadError::ServiceUnreachable)?;
    let response: Response = response
        .dyn_into()
        .map_err(|_| UploadError::Browser("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(read_error_body(&response).await);
    }

    let buffer = JsFuture::from(response.array_buffer().map_err(to_browser_error)?)
        .await
        .map_err(to_browser_error)?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    let media_type = response
        .headers()
        .get("content-type")
        .ok()
        .flatten()
        .unwrap_or_else(|| FALLBACK_RESPONSE_TYPE.to_owned());

    Ok(ProcessedImage { bytes, media_type })
}

/// Assemble the multipart body: one `file` field carrying the image
/// bytes as a Blob typed with the validated media type, filename
/// preserved.
fn build_form(file: &SelectedFile) -> Result<FormData, UploadError> {
    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes()));

    let blob_opts = BlobPropertyBag::new();
    blob_opts.set_type(file.media_type().mime());
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &blob_opts)
        .map_err(to_browser_error)?;

    let form = FormData::new().map_err(to_browser_error)?;
    form.append_with_blob_and_filename(config::UPLOAD_FIELD, &blob, file.name())
        .map_err(to_browser_error)?;
    Ok(form)
}

/// Read a non-success response body as the user-facing error detail.
///
/// The service reports failures as plain text; that text is surfaced
/// verbatim. If the body cannot be read, fall back to the status code.
#[allow(clippy::future_not_send)]
async fn read_error_body(response: &Response) -> UploadError {
    let text = match response.text() {
        Ok(promise) => JsFuture::from(promise)
            .await
            .ok()
            .and_then(|v| v.as_string()),
        Err(_) => None,
    };
    match text {
        Some(detail) if !detail.is_empty() => UploadError::Service { detail },
        _ => UploadError::Service {
            detail: format!("request failed with status {}", response.status()),
        },
    }
}

fn to_browser_error(value: JsValue) -> UploadError {
    UploadError::Browser(format!("{value:?}"))
}
