//! kirinuki-core: upload widget domain logic (sans-IO).
//!
//! Validates file selections, drives the Idle/Loading/Result/Error
//! view-state machine, and defines the error taxonomy and service
//! configuration.
//!
//! This crate has **no browser or network dependencies** -- it operates
//! on in-memory data and returns structured results. All fetch, Blob,
//! and DOM interaction lives in `kirinuki-io`.

pub mod config;
pub mod error;
pub mod file;
pub mod media;
pub mod state;

pub use config::ServiceConfig;
pub use error::UploadError;
pub use file::SelectedFile;
pub use media::MediaType;
pub use state::{FlowError, UploadFlow, ViewState};
