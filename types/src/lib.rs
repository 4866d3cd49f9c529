//! Core domain types for Glidepath.
//!
//! Everything in this crate is plain data: the raw form inputs, the
//! normalized simulation request, the service response, the derived
//! projection model, and the submission lifecycle state. No IO, no async,
//! no rendering - those live in `glidepath-client`, `glidepath-session`,
//! and `glidepath-tui`.

mod errors;
mod fields;
mod request;
mod response;
mod state;

pub use errors::{ResponseShapeError, ValidationError};
pub use fields::{Field, FieldKind, RawInputs};
pub use request::{Allocations, SimulationRequest};
pub use response::{ProjectionModel, SeriesPoint, SimulationResponse};
pub use state::{ErrorInfo, ErrorKind, SubmissionState, ViewState};
