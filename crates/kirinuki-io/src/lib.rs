//! kirinuki-io: Browser I/O and Dioxus component library.
//!
//! Handles the background-removal service call, Blob URL result
//! artifacts, document-level drag default suppression, analytics
//! events, and provides the view-region components for the kirinuki
//! web application.

pub mod analytics;
pub mod artifact;
pub mod components;
pub mod drag;
pub mod service;

pub use artifact::ResultArtifact;
pub use components::{DropZone, Loader, ResultPanel};
pub use service::ProcessedImage;
