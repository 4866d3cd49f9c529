//! Form session logic: the request normalizer and the submission
//! controller.
//!
//! One [`Session`] exists per form instance and owns its raw inputs and
//! submission state exclusively. The controller is sans-IO: it decides
//! transitions and hands out at most one [`Submission`] at a time, while
//! the actual network call runs elsewhere (a spawned task in the binary,
//! a plain `await` in tests) and reports back through
//! [`Session::complete`].

mod controller;
mod normalize;

pub use controller::{Completion, Session, Submission};
pub use normalize::normalize;
