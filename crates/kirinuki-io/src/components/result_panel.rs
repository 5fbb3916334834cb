//! Result view: processed image preview, download, and start over.

use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{LdDownload, LdRotateCcw};

use crate::analytics;

/// Props for the [`ResultPanel`] component.
#[derive(Props, Clone, PartialEq)]
pub struct ResultPanelProps {
    /// Blob URL of the processed image.
    url: String,
    /// Suggested filename for the download action
    /// (`no-bg-<originalName>`).
    download_name: String,
    /// Request duration in seconds, shown as a small caption.
    #[props(default)]
    elapsed_secs: Option<f64>,
    /// Start-over action. The controller releases the artifact and
    /// returns the widget to Idle.
    on_reset: EventHandler<()>,
}

/// Shows the processed image with a download link bound to the
/// artifact URL and a start-over button.
///
/// The download is a plain `<a download>` on the already-held object
/// URL; no extra Blob is created for it.
#[component]
pub fn ResultPanel(props: ResultPanelProps) -> Element {
    let ResultPanelProps {
        url,
        download_name,
        elapsed_secs,
        on_reset,
    } = props;

    rsx! {
        div { class: "result-panel", "data-view": "result",
            img {
                class: "result-preview",
                src: "{url}",
                alt: "Processed image with background removed",
            }

            if let Some(secs) = elapsed_secs {
                p { class: "result-caption", "Background removed in {secs:.1}s" }
            }

            div { class: "result-actions",
                a {
                    class: "button button-primary",
                    href: "{url}",
                    download: "{download_name}",
                    onclick: move |_| analytics::track_download(),
                    Icon { width: 16, height: 16, icon: LdDownload }
                    "Download"
                }
                button {
                    class: "button button-secondary",
                    onclick: move |_| on_reset.call(()),
                    Icon { width: 16, height: 16, icon: LdRotateCcw }
                    "Start Over"
                }
            }
        }
    }
}
