//! The submission controller: a finite-state object owned by the form
//! session.
//!
//! Transitions are pure functions of (current state, event). The network
//! call itself happens outside: [`Session::begin_submit`] hands out a
//! [`Submission`] when, and only when, a request may be issued, and
//! [`Session::complete`] commits the outcome. Each submission carries a
//! generation number; a completion whose generation no longer matches is
//! discarded, so a torn-down or restarted session never receives a stale
//! commit.

use glidepath_client::ClientError;
use glidepath_types::{
    ErrorInfo, ErrorKind, ProjectionModel, RawInputs, SimulationRequest, SimulationResponse,
    SubmissionState, ViewState,
};

use crate::normalize::normalize;

/// A request the controller has cleared for sending.
///
/// Exactly one of these exists per InFlight period.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub generation: u64,
    pub request: SimulationRequest,
}

/// The outcome of a submission's network call, tagged with the
/// generation that issued it.
#[derive(Debug)]
pub struct Completion {
    pub generation: u64,
    pub outcome: Result<SimulationResponse, ClientError>,
}

/// One form session: raw inputs plus the submission lifecycle.
#[derive(Debug, Default)]
pub struct Session {
    inputs: RawInputs,
    state: SubmissionState,
    generation: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn inputs(&self) -> &RawInputs {
        &self.inputs
    }

    pub fn inputs_mut(&mut self) -> &mut RawInputs {
        &mut self.inputs
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Read-only projection for rendering.
    #[must_use]
    pub fn view(&self) -> ViewState<'_> {
        self.state.view()
    }

    /// Handle a submit trigger.
    ///
    /// - InFlight: no-op, returns `None`. The InFlight state is the
    ///   mutual exclusion gate; no second request can start while one is
    ///   outstanding.
    /// - Normalization failure: transitions to Failed and returns `None`
    ///   without any network involvement.
    /// - Otherwise: transitions to InFlight and returns the one
    ///   [`Submission`] the caller must now carry out.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.state.is_in_flight() {
            tracing::debug!("submit ignored: a request is already in flight");
            return None;
        }

        match normalize(&self.inputs) {
            Ok(request) => {
                self.generation += 1;
                self.state = SubmissionState::InFlight;
                tracing::info!(generation = self.generation, "submission started");
                Some(Submission {
                    generation: self.generation,
                    request,
                })
            }
            Err(error) => {
                tracing::warn!(field = ?error.field(), %error, "input validation failed");
                self.state = SubmissionState::Failed(ErrorInfo {
                    kind: ErrorKind::Validation,
                    message: error.to_string(),
                });
                None
            }
        }
    }

    /// Commit the outcome of the submission issued by [`begin_submit`].
    ///
    /// Outcomes whose generation does not match the current one are
    /// discarded without touching state.
    ///
    /// [`begin_submit`]: Session::begin_submit
    pub fn complete(&mut self, completion: Completion) {
        if completion.generation != self.generation || !self.state.is_in_flight() {
            tracing::debug!(
                stale = completion.generation,
                current = self.generation,
                "discarding completion for a superseded submission"
            );
            return;
        }

        match completion.outcome {
            Ok(response) => {
                tracing::info!(
                    generation = completion.generation,
                    years = response.yearly_net_worth.len(),
                    "simulation succeeded"
                );
                self.state = SubmissionState::Succeeded(ProjectionModel::from_response(&response));
            }
            Err(error) => {
                report(&error);
                self.state = SubmissionState::Failed(error_info(&error));
            }
        }
    }
}

fn report(error: &ClientError) {
    match error {
        ClientError::Transport(e) => {
            tracing::error!(error = %e, "projection request could not complete");
        }
        ClientError::Status { status, body } => {
            tracing::error!(status = %status, body = %body, "projection service rejected the request");
        }
        ClientError::Shape(e) => {
            tracing::error!(error = %e, "projection response did not match the expected shape");
        }
    }
}

fn error_info(error: &ClientError) -> ErrorInfo {
    let kind = match error {
        ClientError::Transport(_) => ErrorKind::Transport,
        ClientError::Status { .. } => ErrorKind::ServiceStatus,
        ClientError::Shape(_) => ErrorKind::ResponseShape,
    };
    ErrorInfo {
        kind,
        message: error.to_string(),
    }
}
