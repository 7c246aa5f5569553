//! Submission state machine
//!
//! One form owns one `Submission`. At most one delivery is in flight:
//! `begin` refuses while pending, and the page keeps the submit control
//! disabled for exactly that window.

use tracing::debug;

use crate::backend::DeliveryError;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending,
    Succeeded,
    Failed,
}

#[derive(Clone, Debug, Default)]
pub struct Submission {
    state: SubmissionState,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        self.state == SubmissionState::Pending
    }

    /// Enter `Pending`. Returns false (and changes nothing) when a
    /// delivery is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_pending() {
            return false;
        }
        debug!("submission: {:?} -> Pending", self.state);
        self.state = SubmissionState::Pending;
        true
    }

    /// Leave `Pending` with the delivery outcome.
    pub fn finish(&mut self, outcome: &Result<(), DeliveryError>) {
        self.state = match outcome {
            Ok(()) => SubmissionState::Succeeded,
            Err(_) => SubmissionState::Failed,
        };
        debug!("submission: Pending -> {:?}", self.state);
    }
}
