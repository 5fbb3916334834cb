//! Error taxonomy for the upload widget.

/// A failure surfaced to the user through the widget's Error view.
///
/// `Display` is the user-facing message. Server-reported errors pass
/// the response body through verbatim, while transport failures get a
/// fixed friendly sentence so the two are distinguishable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The selected file's media type is not one the service accepts.
    ///
    /// Detected client-side; never triggers a network request.
    #[error("unsupported file type: {name} (expected a JPEG, PNG, or WebP image)")]
    UnsupportedMediaType {
        /// Filename of the rejected selection.
        name: String,
    },

    /// The selected file has no content.
    ///
    /// Also detected client-side, mirroring the service's own
    /// rejection of empty uploads.
    #[error("the selected file is empty")]
    EmptyFile,

    /// The service answered with a non-success status.
    ///
    /// `detail` is the plain-text response body, passed through
    /// verbatim.
    #[error("{detail}")]
    Service {
        /// Response body text as reported by the service.
        detail: String,
    },

    /// The service could not be reached at all.
    #[error("Could not reach the background-removal service. Check that it is running and try again.")]
    ServiceUnreachable,

    /// A browser API call failed (Blob, FormData, or URL creation).
    #[error("browser API error: {0}")]
    Browser(String),
}

impl UploadError {
    /// `true` for failures detected before any network activity.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::UnsupportedMediaType { .. } | Self::EmptyFile)
    }
}
