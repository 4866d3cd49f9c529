//! Submission lifecycle state and its read-only view projection.

use crate::response::ProjectionModel;

/// Which stage of the pipeline produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Raw input failed normalization; no network call was made.
    Validation,
    /// The network call could not complete.
    Transport,
    /// The service returned a non-success status.
    ServiceStatus,
    /// A success status carried a malformed body.
    ResponseShape,
}

/// User-facing error carried by [`SubmissionState::Failed`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorInfo {
    pub kind: ErrorKind,
    pub message: String,
}

/// Lifecycle of the single outstanding submission.
///
/// Exactly one variant is active at any time; transitions happen only
/// through the session controller. `InFlight` doubles as the mutual
/// exclusion gate: no second request is issued while it holds.
#[derive(Debug, Clone, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    InFlight,
    Succeeded(ProjectionModel),
    Failed(ErrorInfo),
}

impl SubmissionState {
    #[must_use]
    pub const fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::InFlight)
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        match self {
            SubmissionState::Idle => ViewState::Blank,
            SubmissionState::InFlight => ViewState::Busy,
            SubmissionState::Succeeded(model) => ViewState::Result(model),
            SubmissionState::Failed(error) => ViewState::Error(error),
        }
    }
}

/// What the UI should show. Borrowed from the submission state; the
/// renderer gets no other way to reach the model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ViewState<'a> {
    /// No chart, no indicator.
    Blank,
    /// Binary busy indicator, no progress fraction.
    Busy,
    /// Chart and probability, sourced only from the carried model.
    Result(&'a ProjectionModel),
    /// User-facing error line.
    Error(&'a ErrorInfo),
}
