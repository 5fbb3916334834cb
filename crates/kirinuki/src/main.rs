use dioxus::prelude::*;
use kirinuki_core::{SelectedFile, ServiceConfig, UploadError, UploadFlow, ViewState};
use kirinuki_io::{DropZone, Loader, ResultArtifact, ResultPanel, analytics, drag, service};
use web_time::Instant;

fn main() {
    dioxus::launch(app);
}

/// Root application component: the Upload Widget Controller.
///
/// Owns the view-state machine and the single in-flight request, and
/// mounts exactly one view region (drop zone / loader / result panel)
/// per state. DOM lookups from the original widget become signal-fed
/// component props here.
fn app() -> Element {
    // --- Application state ---
    let mut flow = use_signal(UploadFlow::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut artifact = use_signal(|| Option::<ResultArtifact>::None);
    let mut filename = use_signal(|| Option::<String>::None);
    let mut elapsed = use_signal(|| Option::<f64>::None);
    let mut generation = use_signal(|| 0u64);
    let service_config = use_hook(ServiceConfig::default);

    // Dropping a file outside the zone must not navigate the page.
    // Installed once; the listeners live for the page lifetime.
    use_hook(|| {
        let _ = drag::suppress_default_drag();
    });

    // --- File selection handler (drop or picker) ---
    let on_select = move |(bytes, name): (Vec<u8>, String)| {
        // One request in flight per widget instance. The drop zone is
        // unmounted during Loading, so this is a second line of defense
        // against rapid double drops.
        if !flow.peek().accepts_files() {
            return;
        }

        let file = match SelectedFile::new(name, None, bytes) {
            Ok(file) => file,
            Err(err) => {
                // Validation failure: straight to Error, no request.
                error.set(Some(err.to_string()));
                flow.with_mut(UploadFlow::fail);
                return;
            }
        };

        if flow.with_mut(UploadFlow::begin).is_err() {
            return;
        }

        analytics::track_upload(&file.media_type().label().to_ascii_lowercase());
        filename.set(Some(file.name().to_owned()));
        error.set(None);

        // Increment generation so a reset (or any later request) can
        // mark this one stale; its response is then discarded silently.
        generation += 1;
        let my_generation = *generation.peek();
        let config = service_config.clone();

        spawn(async move {
            let started = Instant::now();
            let outcome = service::remove_background(&file, &config).await;

            if *generation.peek() != my_generation {
                return;
            }

            match outcome {
                Ok(image) => {
                    match ResultArtifact::new(&image.bytes, &image.media_type, file.download_name())
                    {
                        Ok(next) => {
                            // Release the previous display handle before
                            // installing the new one.
                            if let Some(old) = artifact.write().take() {
                                old.release();
                            }
                            artifact.set(Some(next));
                            elapsed.set(Some(started.elapsed().as_secs_f64()));
                            if flow.with_mut(UploadFlow::complete).is_ok() {
                                analytics::track_remove("success");
                            }
                        }
                        Err(err) => {
                            error.set(Some(err.to_string()));
                            flow.with_mut(UploadFlow::fail);
                        }
                    }
                }
                Err(err) => {
                    analytics::track_remove(match err {
                        UploadError::ServiceUnreachable => "network_error",
                        _ => "server_error",
                    });
                    error.set(Some(err.to_string()));
                    flow.with_mut(UploadFlow::fail);
                }
            }
        });
    };

    // --- File read failure handler ---
    let on_read_error = move |detail: String| {
        error.set(Some(UploadError::Browser(detail).to_string()));
        flow.with_mut(UploadFlow::fail);
    };

    // --- Reset handler (start over, cancel, dismiss) ---
    let on_reset = move |()| {
        // Invalidate any in-flight request before touching state.
        generation += 1;
        if let Some(old) = artifact.write().take() {
            old.release();
        }
        filename.set(None);
        elapsed.set(None);
        error.set(None);
        flow.with_mut(UploadFlow::reset);
    };

    // --- Layout ---
    let state = flow().state();

    rsx! {
        style { dangerous_inner_html: include_str!("../assets/app.css") }

        div { class: "app",
            header { class: "app-header",
                h1 { class: "app-title", "kirinuki" }
                p { class: "app-tagline", "Remove image backgrounds in your browser" }
            }

            main { class: "app-main",
                if state == ViewState::Loading {
                    Loader {
                        filename: filename().unwrap_or_default(),
                        on_cancel: on_reset,
                    }
                } else if state == ViewState::Result {
                    if let Some(ref art) = artifact() {
                        ResultPanel {
                            url: art.url().to_owned(),
                            download_name: art.download_name().to_owned(),
                            elapsed_secs: elapsed(),
                            on_reset: on_reset,
                        }
                    }
                } else {
                    // Idle and Error share the drop-zone region; Error
                    // adds the failure message inside it.
                    DropZone {
                        error: error(),
                        on_select: on_select,
                        on_read_error: on_read_error,
                        on_dismiss: on_reset,
                    }
                }
            }
        }
    }
}
