//! Loading view shown while a removal request is in flight.

use dioxus::prelude::*;

/// Props for the [`Loader`] component.
#[derive(Props, Clone, PartialEq)]
pub struct LoaderProps {
    /// Name of the file being processed.
    filename: String,
    /// Cancel action. The controller abandons the in-flight request
    /// (its response is discarded as stale) and returns to Idle.
    on_cancel: EventHandler<()>,
}

/// Spinner plus a one-line status naming the file in flight.
#[component]
pub fn Loader(props: LoaderProps) -> Element {
    let LoaderProps { filename, on_cancel } = props;

    rsx! {
        div { class: "loader", "data-view": "loading",
            div { class: "spinner", aria_label: "Processing" }
            p { class: "loader-text", "Removing background from {filename}..." }
            button {
                class: "button button-secondary",
                onclick: move |_| on_cancel.call(()),
                "Cancel"
            }
        }
    }
}
