//! Multi-step signup flow
//!
//! The step model and the orchestrator shared by every front-end.

pub mod form;
pub mod step;

pub use form::{SignupForm, SubmissionState, SUCCESS_MESSAGE};
pub use step::Step;
