//! The user's selected file, validated for upload.

use crate::error::UploadError;
use crate::media::MediaType;

/// Prefix prepended to the original filename for the processed download.
pub const DOWNLOAD_PREFIX: &str = "no-bg-";

/// A validated file selection: name, media type, and raw bytes.
///
/// Construction is the widget's validation gate -- a `SelectedFile`
/// existing implies the payload is non-empty and its type is one the
/// service accepts. The selection is read-only; it is discarded when a
/// new file is chosen or the widget resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    name: String,
    media_type: MediaType,
    bytes: Vec<u8>,
}

impl SelectedFile {
    /// Validate a raw selection.
    ///
    /// The media type is taken from the declared MIME string when one
    /// identifies a supported format, falling back to the filename
    /// extension (some drag sources leave the declared type empty or
    /// generic).
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::UnsupportedMediaType`] if neither the
    /// declared type nor the extension names a supported format.
    /// Returns [`UploadError::EmptyFile`] for a zero-byte payload.
    pub fn new(
        name: String,
        declared_mime: Option<&str>,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let media_type = declared_mime
            .and_then(MediaType::from_mime)
            .or_else(|| MediaType::from_filename(&name))
            .ok_or_else(|| UploadError::UnsupportedMediaType { name: name.clone() })?;

        if bytes.is_empty() {
            return Err(UploadError::EmptyFile);
        }

        Ok(Self {
            name,
            media_type,
            bytes,
        })
    }

    /// Original filename as supplied by the browser.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The validated media type.
    #[must_use]
    pub const fn media_type(&self) -> MediaType {
        self.media_type
    }

    /// Raw file contents.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Suggested filename for downloading the processed result,
    /// e.g. `photo.png` -> `no-bg-photo.png`.
    #[must_use]
    pub fn download_name(&self) -> String {
        format!("{DOWNLOAD_PREFIX}{}", self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_declared_mime() {
        let file = SelectedFile::new("photo".to_owned(), Some("image/png"), vec![1, 2, 3]);
        assert!(matches!(
            file,
            Ok(ref f) if f.media_type() == MediaType::Png
        ));
    }

    #[test]
    fn falls_back_to_extension_when_mime_missing() {
        let file = SelectedFile::new("photo.webp".to_owned(), None, vec![1]);
        assert!(matches!(
            file,
            Ok(ref f) if f.media_type() == MediaType::WebP
        ));
    }

    #[test]
    fn falls_back_to_extension_when_mime_generic() {
        // Some drag sources declare application/octet-stream.
        let file = SelectedFile::new(
            "photo.jpg".to_owned(),
            Some("application/octet-stream"),
            vec![1],
        );
        assert!(matches!(
            file,
            Ok(ref f) if f.media_type() == MediaType::Jpeg
        ));
    }

    #[test]
    fn rejects_unsupported_type() {
        let err = SelectedFile::new("document.pdf".to_owned(), Some("application/pdf"), vec![1]);
        assert_eq!(
            err,
            Err(UploadError::UnsupportedMediaType {
                name: "document.pdf".to_owned()
            })
        );
    }

    #[test]
    fn rejects_empty_payload() {
        let err = SelectedFile::new("photo.png".to_owned(), Some("image/png"), Vec::new());
        assert_eq!(err, Err(UploadError::EmptyFile));
    }

    #[test]
    fn type_check_precedes_empty_check() {
        // An empty pdf reports the type problem, not the emptiness.
        let err = SelectedFile::new("document.pdf".to_owned(), None, Vec::new());
        assert!(matches!(
            err,
            Err(UploadError::UnsupportedMediaType { .. })
        ));
    }

    #[test]
    fn download_name_prefixes_original() {
        let file = SelectedFile::new("photo.png".to_owned(), Some("image/png"), vec![1]);
        assert!(matches!(
            file,
            Ok(ref f) if f.download_name() == "no-bg-photo.png"
        ));
    }
}
