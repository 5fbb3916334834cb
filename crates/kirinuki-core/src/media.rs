//! Accepted image media types.

use std::fmt;

/// An image media type the widget accepts for upload.
///
/// The background-removal service handles JPEG, PNG, and WebP input;
/// anything else is rejected client-side before a request is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaType {
    /// `image/jpeg` (`.jpg` / `.jpeg`).
    Jpeg,
    /// `image/png` (`.png`).
    Png,
    /// `image/webp` (`.webp`).
    WebP,
}

impl MediaType {
    /// All accepted types, in the order shown in UI hint text.
    pub const ALL: [Self; 3] = [Self::Jpeg, Self::Png, Self::WebP];

    /// Parse a declared MIME string (e.g. `"image/png"`).
    ///
    /// Comparison is ASCII case-insensitive and MIME parameters
    /// (`"image/png; charset=binary"`) are ignored.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        let essence = mime.split(';').next().unwrap_or(mime).trim();
        Self::ALL
            .into_iter()
            .find(|t| essence.eq_ignore_ascii_case(t.mime()))
    }

    /// Derive the media type from a filename extension.
    ///
    /// Used as a fallback when a drag source does not declare a MIME
    /// type. Files without an extension yield `None`.
    #[must_use]
    pub fn from_filename(name: &str) -> Option<Self> {
        name.rsplit_once('.')
            .and_then(|(_, ext)| Self::from_extension(ext))
    }

    /// Match an extension (without the dot) against the accepted set.
    #[must_use]
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext {
            e if e.eq_ignore_ascii_case("jpg") || e.eq_ignore_ascii_case("jpeg") => {
                Some(Self::Jpeg)
            }
            e if e.eq_ignore_ascii_case("png") => Some(Self::Png),
            e if e.eq_ignore_ascii_case("webp") => Some(Self::WebP),
            _ => None,
        }
    }

    /// Canonical MIME string, used to type upload blobs.
    #[must_use]
    pub const fn mime(self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::WebP => "image/webp",
        }
    }

    /// Display label for hint text.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Jpeg => "JPEG",
            Self::Png => "PNG",
            Self::WebP => "WebP",
        }
    }
}

impl fmt::Display for MediaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_mimes_parse() {
        assert_eq!(MediaType::from_mime("image/jpeg"), Some(MediaType::Jpeg));
        assert_eq!(MediaType::from_mime("image/png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_mime("image/webp"), Some(MediaType::WebP));
    }

    #[test]
    fn mime_parsing_ignores_case_and_parameters() {
        assert_eq!(MediaType::from_mime("IMAGE/PNG"), Some(MediaType::Png));
        assert_eq!(
            MediaType::from_mime("image/jpeg; charset=binary"),
            Some(MediaType::Jpeg)
        );
        assert_eq!(MediaType::from_mime("  image/webp  "), Some(MediaType::WebP));
    }

    #[test]
    fn unsupported_mimes_rejected() {
        assert_eq!(MediaType::from_mime("application/pdf"), None);
        assert_eq!(MediaType::from_mime("image/gif"), None);
        assert_eq!(MediaType::from_mime(""), None);
    }

    #[test]
    fn filename_extensions_map_to_types() {
        assert_eq!(MediaType::from_filename("photo.png"), Some(MediaType::Png));
        assert_eq!(MediaType::from_filename("photo.jpg"), Some(MediaType::Jpeg));
        assert_eq!(
            MediaType::from_filename("photo.JPEG"),
            Some(MediaType::Jpeg)
        );
        assert_eq!(
            MediaType::from_filename("archive.tar.webp"),
            Some(MediaType::WebP)
        );
    }

    #[test]
    fn unsupported_filenames_rejected() {
        assert_eq!(MediaType::from_filename("document.pdf"), None);
        assert_eq!(MediaType::from_filename("no_extension"), None);
        assert_eq!(MediaType::from_filename("photo.png.exe"), None);
    }

    #[test]
    fn display_matches_label() {
        for t in MediaType::ALL {
            assert_eq!(t.to_string(), t.label());
        }
    }
}
