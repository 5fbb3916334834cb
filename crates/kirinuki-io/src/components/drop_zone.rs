//! Drop zone component with drag-and-drop and file picker.

use dioxus::html::{FileData, HasFileData};
use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::LdUpload;

/// A raw selection forwarded to the controller: file bytes plus the
/// original filename. Media-type validation happens in
/// `kirinuki-core`, not here, so the Error view state stays owned by
/// the controller.
pub type RawSelection = (Vec<u8>, String);

/// Props for the [`DropZone`] component.
#[derive(Props, Clone, PartialEq)]
pub struct DropZoneProps {
    /// Failure message shown inside the zone. `Some` when the widget
    /// is in the Error view state; the zone doubles as that region.
    #[props(default)]
    error: Option<String>,
    /// Called with the first selected file's bytes and name. Extra
    /// files in a multi-file drop are silently ignored.
    on_select: EventHandler<RawSelection>,
    /// Called when the browser fails to read a dropped file.
    on_read_error: EventHandler<String>,
    /// Dismiss action for the error message; resets the widget to
    /// Idle without requiring a new selection.
    on_dismiss: EventHandler<()>,
}

/// A drag-and-drop zone with a file picker button.
///
/// Pure view glue: takes the first file, reads its bytes, and forwards
/// them. Drag-over highlighting is a local boolean toggled by the drag
/// events; the default browser handling is suppressed both here and
/// document-wide (see [`crate::drag`]).
#[component]
pub fn DropZone(props: DropZoneProps) -> Element {
    let DropZoneProps {
        error,
        on_select,
        on_read_error,
        on_dismiss,
    } = props;

    let mut dragging = use_signal(|| false);

    // Read and forward the first file from a list.
    //
    // Shared by the file-picker (`handle_files`) and drag-and-drop
    // (`handle_drop`) paths.
    let process_files = move |files: Vec<FileData>| async move {
        if let Some(file) = files.first() {
            let name = file.name();
            match file.read_bytes().await {
                Ok(bytes) => on_select.call((bytes.to_vec(), name)),
                Err(e) => on_read_error.call(format!("failed to read {name}: {e}")),
            }
        }
    };

    let handle_files = move |evt: FormEvent| async move {
        process_files(evt.files()).await;
    };

    let handle_drop = move |evt: DragEvent| async move {
        evt.prevent_default();
        dragging.set(false);
        process_files(evt.files()).await;
    };

    let zone_class = if dragging() {
        "drop-zone drag-over"
    } else {
        "drop-zone"
    };
    let view_tag = if error.is_some() { "error" } else { "idle" };

    rsx! {
        div {
            class: "{zone_class}",
            "data-view": "{view_tag}",
            ondragover: move |evt| {
                evt.prevent_default();
                dragging.set(true);
            },
            ondragleave: move |_| {
                dragging.set(false);
            },
            ondrop: handle_drop,

            span { class: "drop-zone-icon",
                Icon { width: 40, height: 40, icon: LdUpload }
            }

            if let Some(ref message) = error {
                p { class: "error-text", "{message}" }
                button {
                    class: "button-link",
                    onclick: move |_| on_dismiss.call(()),
                    "Dismiss"
                }
            }

            p { class: "drop-zone-hint", "Drop an image here or" }

            label { class: "button button-primary",
                input {
                    r#type: "file",
                    accept: ".jpg,.jpeg,.png,.webp",
                    class: "visually-hidden",
                    onchange: handle_files,
                }
                "Choose File"
            }

            p { class: "drop-zone-formats", "JPEG, PNG, WebP" }
        }
    }
}
