//! The widget's view-state machine.
//!
//! Exactly one [`ViewState`] is active at a time; transitions drive
//! which view region (drop zone, loader, result panel) is mounted.
//! [`UploadFlow`] owns the current state and enforces the legal
//! transition set, including the one-request-in-flight rule.

use std::fmt;

/// Which of the widget's mutually exclusive view regions is active.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ViewState {
    /// The drop zone is shown, waiting for a selection.
    #[default]
    Idle,
    /// A request is in flight; the loader is shown.
    Loading,
    /// A processed image is shown with download and start-over actions.
    Result,
    /// A failure message is shown in the drop-zone region.
    Error,
}

impl ViewState {
    /// Stable lowercase identifier, matching the `data-view` tag the
    /// view regions carry.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Result => "result",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A transition was requested that the current state does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FlowError {
    /// [`UploadFlow::begin`] was called while a request is in flight.
    #[error("an upload request is already in flight")]
    RequestInFlight,

    /// [`UploadFlow::complete`] was called with no request in flight.
    #[error("no upload request is in flight")]
    NoRequestInFlight,
}

/// The upload widget's state machine.
///
/// Legal transitions:
///
/// - Idle/Error/Result -> Loading via [`begin`](Self::begin) (valid
///   file selected)
/// - Loading -> Result via [`complete`](Self::complete) (success)
/// - any -> Error via [`fail`](Self::fail) (validation rejection or
///   request failure)
/// - any -> Idle via [`reset`](Self::reset)
///
/// `begin` while Loading is refused: exactly one request may be in
/// flight per widget instance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UploadFlow {
    state: ViewState,
}

impl UploadFlow {
    /// A fresh flow in the Idle state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: ViewState::Idle,
        }
    }

    /// The currently active view state.
    #[must_use]
    pub const fn state(&self) -> ViewState {
        self.state
    }

    /// Whether the widget should accept a new file selection.
    ///
    /// `false` only while a request is in flight.
    #[must_use]
    pub const fn accepts_files(&self) -> bool {
        !matches!(self.state, ViewState::Loading)
    }

    /// Start an upload: moves to Loading.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::RequestInFlight`] if a request is already
    /// running; the state is left untouched so the first request keeps
    /// its claim.
    pub const fn begin(&mut self) -> Result<(), FlowError> {
        if matches!(self.state, ViewState::Loading) {
            return Err(FlowError::RequestInFlight);
        }
        self.state = ViewState::Loading;
        Ok(())
    }

    /// Record a successful response: Loading moves to Result.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::NoRequestInFlight`] from any other state.
    /// A stale response arriving after [`reset`](Self::reset) hits this
    /// guard instead of resurrecting a dismissed result.
    pub const fn complete(&mut self) -> Result<(), FlowError> {
        if !matches!(self.state, ViewState::Loading) {
            return Err(FlowError::NoRequestInFlight);
        }
        self.state = ViewState::Result;
        Ok(())
    }

    /// Record a failure: moves to Error from any state.
    ///
    /// Validation rejections land here straight from Idle (no request
    /// was made); request failures arrive from Loading.
    pub const fn fail(&mut self) {
        self.state = ViewState::Error;
    }

    /// Return to Idle. Legal from every state, including Loading.
    pub const fn reset(&mut self) {
        self.state = ViewState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_stable() {
        // These strings are the data-view tags the UI regions carry.
        assert_eq!(ViewState::Idle.to_string(), "idle");
        assert_eq!(ViewState::Loading.to_string(), "loading");
        assert_eq!(ViewState::Result.to_string(), "result");
        assert_eq!(ViewState::Error.to_string(), "error");
    }

    #[test]
    fn starts_idle() {
        let flow = UploadFlow::new();
        assert_eq!(flow.state(), ViewState::Idle);
        assert!(flow.accepts_files());
    }

    #[test]
    fn begin_enters_loading() {
        let mut flow = UploadFlow::new();
        assert_eq!(flow.begin(), Ok(()));
        assert_eq!(flow.state(), ViewState::Loading);
        assert!(!flow.accepts_files());
    }

    #[test]
    fn begin_refused_while_loading() {
        let mut flow = UploadFlow::new();
        assert_eq!(flow.begin(), Ok(()));
        assert_eq!(flow.begin(), Err(FlowError::RequestInFlight));
        // The in-flight request keeps its claim.
        assert_eq!(flow.state(), ViewState::Loading);
    }

    #[test]
    fn complete_requires_loading() {
        let mut flow = UploadFlow::new();
        assert_eq!(flow.complete(), Err(FlowError::NoRequestInFlight));

        assert_eq!(flow.begin(), Ok(()));
        assert_eq!(flow.complete(), Ok(()));
        assert_eq!(flow.state(), ViewState::Result);

        // A second completion has nothing to complete.
        assert_eq!(flow.complete(), Err(FlowError::NoRequestInFlight));
    }

    #[test]
    fn fail_reaches_error_from_idle_and_loading() {
        let mut flow = UploadFlow::new();
        flow.fail();
        assert_eq!(flow.state(), ViewState::Error);

        let mut flow = UploadFlow::new();
        assert_eq!(flow.begin(), Ok(()));
        flow.fail();
        assert_eq!(flow.state(), ViewState::Error);
    }

    #[test]
    fn reset_returns_to_idle_from_every_state() {
        let setups: [fn(&mut UploadFlow); 4] = [
            |_| (),
            |f| {
                let _ = f.begin();
            },
            |f| {
                let _ = f.begin();
                let _ = f.complete();
            },
            UploadFlow::fail,
        ];
        for setup in setups {
            let mut flow = UploadFlow::new();
            setup(&mut flow);
            flow.reset();
            assert_eq!(flow.state(), ViewState::Idle);
            assert!(flow.accepts_files());
        }
    }

    #[test]
    fn new_file_from_error_state_enters_loading() {
        let mut flow = UploadFlow::new();
        flow.fail();
        assert_eq!(flow.begin(), Ok(()));
        assert_eq!(flow.state(), ViewState::Loading);
    }

    #[test]
    fn stale_completion_after_reset_is_refused() {
        let mut flow = UploadFlow::new();
        assert_eq!(flow.begin(), Ok(()));
        flow.reset();
        assert_eq!(flow.complete(), Err(FlowError::NoRequestInFlight));
        assert_eq!(flow.state(), ViewState::Idle);
    }
}
