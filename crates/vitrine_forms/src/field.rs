//! Per-field validation state

use crate::rules::FieldVerdict;

/// What the controller knows about one input.
///
/// A field starts untouched, becomes valid or invalid on blur or
/// submit, and only returns to untouched when the form resets after a
/// successful submission.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldState {
    verdict: Option<bool>,
    message: String,
}

impl FieldState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, verdict: &FieldVerdict) {
        self.verdict = Some(verdict.is_valid);
        self.message = verdict.message.clone();
    }

    pub fn reset(&mut self) {
        self.verdict = None;
        self.message.clear();
    }

    /// `None` until the field is first validated.
    pub fn is_valid(&self) -> Option<bool> {
        self.verdict
    }

    pub fn is_touched(&self) -> bool {
        self.verdict.is_some()
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}
