//! Vitrine form validation
//!
//! Everything the newsletter form needs short of the document itself:
//!
//! - **Rules**: the name and email checks with per-language messages
//! - **Field state**: per-input validation verdicts, reset after a
//!   successful submission
//! - **Submission**: the idle/pending/succeeded/failed state machine,
//!   with at most one in-flight submission at a time
//! - **Backends**: the async delivery seam; the reference backend
//!   stands in for a network round trip with a fixed delay

mod backend;
mod field;
pub mod messages;
mod rules;
mod submission;

pub use backend::{DeliveryError, SimulatedBackend, SubmitBackend, Subscription};
pub use field::FieldState;
pub use rules::{validate_email, validate_name, FieldVerdict};
pub use submission::{Submission, SubmissionState};
