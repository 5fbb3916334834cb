//! Image Processing Service configuration.

use serde::{Deserialize, Serialize};

/// Default endpoint of the background-removal service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/remove-background";

/// Multipart form field name the service reads the image from.
pub const UPLOAD_FIELD: &str = "file";

/// Where the widget posts uploads.
///
/// There is no runtime configuration surface beyond this struct: the
/// app uses [`ServiceConfig::default`], and embedders hosting the
/// service elsewhere construct their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Full URL of the `remove-background` endpoint.
    pub endpoint: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_owned(),
        }
    }
}
