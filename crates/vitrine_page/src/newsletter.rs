//! Newsletter controller
//!
//! Field-level validation feedback, the consent gate, and the
//! asynchronous signup submission. The submit control is disabled for
//! exactly the pending window and restored on every outcome.

use std::time::Instant;

use tracing::warn;
use vitrine_dom::{element, Document, NodeId};
use vitrine_forms::{
    messages, validate_email, validate_name, FieldState, FieldVerdict, Submission,
    SubmissionState, SubmitBackend, Subscription,
};
use vitrine_i18n::Language;
use vitrine_notify::ToastStack;

use crate::bindings::PageBindings;

/// Drives the signup form.
pub struct NewsletterController<B: SubmitBackend> {
    backend: B,
    name_state: FieldState,
    email_state: FieldState,
    submission: Submission,
    original_submit_label: String,
}

impl<B: SubmitBackend> NewsletterController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            name_state: FieldState::new(),
            email_state: FieldState::new(),
            submission: Submission::new(),
            original_submit_label: String::new(),
        }
    }

    /// Capture the submit control's resting label so it can be restored
    /// after a submission.
    pub fn attach(&mut self, doc: &Document, bindings: &PageBindings) {
        if let Some(button) = bindings.submit_button {
            self.original_submit_label = doc.text(button).to_string();
        }
    }

    pub fn submission_state(&self) -> SubmissionState {
        self.submission.state()
    }

    pub fn name_state(&self) -> &FieldState {
        &self.name_state
    }

    pub fn email_state(&self) -> &FieldState {
        &self.email_state
    }

    /// Validate the name field and render its feedback.
    pub fn validate_name_field(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        language: Language,
    ) -> bool {
        let Some(input) = bindings.first_name else {
            return false;
        };
        let verdict = validate_name(doc.value(input), language);
        self.name_state.record(&verdict);
        render_field_state(doc, input, &verdict);
        verdict.is_valid
    }

    /// Validate the email field and render its feedback.
    pub fn validate_email_field(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        language: Language,
    ) -> bool {
        let Some(input) = bindings.email else {
            return false;
        };
        let verdict = validate_email(doc.value(input), language);
        self.email_state.record(&verdict);
        render_field_state(doc, input, &verdict);
        verdict.is_valid
    }

    /// Live re-validation while typing, once a field has been judged.
    /// An untouched field stays untouched until its first blur.
    pub fn handle_input(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        language: Language,
        target: NodeId,
    ) {
        if bindings.first_name == Some(target) && self.name_state.is_touched() {
            self.validate_name_field(doc, bindings, language);
        } else if bindings.email == Some(target) && self.email_state.is_touched() {
            self.validate_email_field(doc, bindings, language);
        }
    }

    /// The submit path. Revalidates both fields (submit is
    /// authoritative), then checks consent *before* the combined
    /// validity gate: a missing consent focuses the checkbox, raises a
    /// blocking alert, and aborts even when fields are also invalid.
    /// Invalid fields keep their inline feedback with no alert.
    pub async fn handle_submit(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        language: Language,
        toasts: &mut ToastStack,
        alerts: &mut Vec<String>,
    ) {
        if bindings.newsletter_form.is_none() || self.submission.is_pending() {
            return;
        }

        let name_ok = self.validate_name_field(doc, bindings, language);
        let email_ok = self.validate_email_field(doc, bindings, language);

        let consented = bindings.consent.is_some_and(|c| doc.is_checked(c));
        if !consented {
            doc.set_focus(bindings.consent);
            alerts.push(messages::consent_required(language).to_string());
            return;
        }

        if name_ok && email_ok {
            self.submit(doc, bindings, language, toasts).await;
        }
    }

    /// Run one delivery: disable the control and show the in-progress
    /// label, await the backend, then toast the outcome. The control is
    /// re-enabled and its label restored on success and failure alike.
    async fn submit(
        &mut self,
        doc: &mut Document,
        bindings: &PageBindings,
        language: Language,
        toasts: &mut ToastStack,
    ) {
        if !self.submission.begin() {
            return;
        }
        if let Some(button) = bindings.submit_button {
            doc.set_disabled(button, true);
            doc.set_text(button, messages::subscribing(language));
        }

        let subscription = Subscription {
            first_name: bindings
                .first_name
                .map(|n| doc.value(n).trim().to_string())
                .unwrap_or_default(),
            email: bindings
                .email
                .map(|n| doc.value(n).trim().to_string())
                .unwrap_or_default(),
            consent: true,
        };

        let outcome = self.backend.deliver(&subscription).await;
        self.submission.finish(&outcome);
        match &outcome {
            Ok(()) => {
                toasts.success(doc, messages::subscribed(language), Instant::now());
                self.reset_form(doc, bindings);
            }
            Err(e) => {
                warn!("newsletter delivery failed: {e}");
                toasts.error(doc, messages::submission_failed(language), Instant::now());
            }
        }

        if let Some(button) = bindings.submit_button {
            doc.set_disabled(button, false);
            doc.set_text(button, self.original_submit_label.clone());
        }
    }

    /// Clear values, verdicts, and feedback after a successful signup.
    /// Failure paths never reach here: entered values stay for retry.
    fn reset_form(&mut self, doc: &mut Document, bindings: &PageBindings) {
        for (input, state) in [
            (bindings.first_name, &mut self.name_state),
            (bindings.email, &mut self.email_state),
        ] {
            if let Some(input) = input {
                doc.set_value(input, "");
                doc.remove_class(input, "is-valid");
                doc.remove_class(input, "is-invalid");
                if let Some(feedback) = existing_feedback(doc, input) {
                    doc.set_text(feedback, "");
                    doc.set_hidden(feedback, true);
                }
            }
            state.reset();
        }
        if let Some(consent) = bindings.consent {
            doc.set_checked(consent, false);
        }
    }
}

fn existing_feedback(doc: &Document, input: NodeId) -> Option<NodeId> {
    let parent = doc.parent(input)?;
    doc.children(parent)
        .iter()
        .copied()
        .find(|n| doc.has_class(*n, "invalid-feedback"))
}

/// Locate the field's feedback node, creating one next to the input on
/// first use. Each field container owns one feedback node.
fn feedback_for(doc: &mut Document, input: NodeId) -> NodeId {
    match existing_feedback(doc, input) {
        Some(node) => node,
        None => {
            let parent = doc.parent(input).unwrap_or_else(|| doc.body());
            doc.append(parent, element("div").class("invalid-feedback"))
        }
    }
}

/// Toggle the mutually exclusive valid/invalid classes and show or hide
/// the feedback message.
fn render_field_state(doc: &mut Document, input: NodeId, verdict: &FieldVerdict) {
    let feedback = feedback_for(doc, input);
    if verdict.is_valid {
        doc.replace_class(input, "is-invalid", "is-valid");
        doc.set_hidden(feedback, true);
    } else {
        doc.replace_class(input, "is-valid", "is-invalid");
        doc.set_text(feedback, verdict.message.clone());
        doc.set_hidden(feedback, false);
    }
}
