//! Contact enquiry form controller.

use super::deferred::Deferred;
use super::form::{FormState, FormValues};
use super::schema::{ContactField, ContactValues};
use super::submission::{SubmissionState, SubmitAttempt, FIX_ERRORS_MESSAGE};
use log::*;
use std::fmt::Display;
use std::time::{Duration, Instant};

pub const SUCCESS_MESSAGE: &str =
    "Thank you! Your form has been submitted successfully. We will contact you soon.";
pub const FAILURE_MESSAGE: &str = "Something went wrong. Please try again later.";

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum ContactAction {
    Acknowledge,
}

/// Drives the contact form through validation and submission.
///
#[derive(Debug)]
pub struct ContactController {
    form: FormState<ContactValues>,
    submission: SubmissionState,
    deferred: Deferred<ContactAction>,
    acknowledge_delay: Duration,
}

impl ContactController {
    /// Return a new controller that keeps a success in the succeeded phase
    /// for `acknowledge_delay`.
    ///
    pub fn new(acknowledge_delay: Duration) -> Self {
        ContactController {
            form: FormState::new(),
            submission: SubmissionState::default(),
            deferred: Deferred::new(),
            acknowledge_delay,
        }
    }

    pub fn form(&self) -> &FormState<ContactValues> {
        &self.form
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Update a field. Returns false when the change was rejected.
    ///
    pub fn change(&mut self, field: ContactField, value: impl Into<String>) -> bool {
        if self.submission.is_submitting() {
            return false;
        }
        self.form.change(field, value)
    }

    pub fn blur(&mut self, field: ContactField) {
        if !self.submission.is_submitting() {
            self.form.blur(field);
        }
    }

    /// Validate the whole form and, if valid, enter the submitting phase and
    /// return the sanitized values for the backend.
    ///
    pub fn submit(&mut self) -> SubmitAttempt<ContactValues> {
        if self.submission.is_submitting() {
            return SubmitAttempt::Busy;
        }
        self.deferred.cancel(&ContactAction::Acknowledge);
        if !self.form.validate_all() {
            debug!(
                "Contact form has {} invalid field(s).",
                self.form.errors().len()
            );
            self.submission.fail(FIX_ERRORS_MESSAGE);
            return SubmitAttempt::Invalid;
        }
        self.submission.begin();
        SubmitAttempt::Dispatched(self.form.values().sanitized())
    }

    /// Apply the backend outcome of the in-flight submission.
    ///
    pub fn resolve<T, E: Display>(&mut self, outcome: Result<T, E>, now: Instant) {
        if !self.submission.is_submitting() {
            warn!("Ignoring contact submission result with nothing in flight.");
            return;
        }
        match outcome {
            Ok(_) => {
                info!("Contact form submitted successfully.");
                self.form.reset();
                self.submission.succeed(SUCCESS_MESSAGE);
                self.deferred
                    .schedule(now, self.acknowledge_delay, ContactAction::Acknowledge);
            }
            Err(e) => {
                error!("Contact form submission failed: {}", e);
                self.submission.fail(FAILURE_MESSAGE);
            }
        }
    }

    /// Fire deferred actions that are due.
    ///
    pub fn tick(&mut self, now: Instant) {
        for action in self.deferred.take_due(now) {
            match action {
                ContactAction::Acknowledge => self.submission.settle(),
            }
        }
    }

    /// Cancel all pending deferred actions.
    ///
    pub fn teardown(&mut self) {
        self.deferred.cancel_all();
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.deferred.is_empty()
    }
}
