//! Dioxus UI components for the upload widget.
//!
//! One component per view region: the drop zone (Idle and Error), the
//! loader (Loading), and the result panel (Result). The app mounts
//! exactly one of them at a time, driven by the core state machine.

mod drop_zone;
mod loader;
mod result_panel;

pub use drop_zone::DropZone;
pub use loader::Loader;
pub use result_panel::ResultPanel;
