//! Submission lifecycle shared by every form.

/// Message shown when a submit attempt fails validation.
///
pub const FIX_ERRORS_MESSAGE: &str = "Please fix the errors before submitting";

/// Phase of the submission lifecycle.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum Phase {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Kind of status message.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum MessageKind {
    Success,
    Error,
}

/// Banner message displayed above the submit control.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

/// Outcome of a submit request.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum SubmitAttempt<V> {
    /// A submission is already in flight.
    Busy,
    /// Validation failed; nothing was dispatched.
    Invalid,
    /// The form is not the one currently shown.
    Unavailable,
    /// The values should be handed to the backend.
    Dispatched(V),
}

/// Current phase plus optional status message.
///
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct SubmissionState {
    phase: Phase,
    message: Option<StatusMessage>,
}

impl SubmissionState {
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn message(&self) -> Option<&StatusMessage> {
        self.message.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    /// Enter the submitting phase, clearing any message.
    ///
    pub fn begin(&mut self) {
        self.phase = Phase::Submitting;
        self.message = None;
    }

    pub fn succeed(&mut self, text: impl Into<String>) {
        self.phase = Phase::Succeeded;
        self.message = Some(StatusMessage {
            kind: MessageKind::Success,
            text: text.into(),
        });
    }

    pub fn fail(&mut self, text: impl Into<String>) {
        self.phase = Phase::Failed;
        self.message = Some(StatusMessage {
            kind: MessageKind::Error,
            text: text.into(),
        });
    }

    /// Return a succeeded submission to idle, keeping its message.
    ///
    pub fn settle(&mut self) {
        if self.phase == Phase::Succeeded {
            self.phase = Phase::Idle;
        }
    }

    /// Drop the message and, unless a submission is in flight, go idle.
    ///
    pub fn clear(&mut self) {
        self.message = None;
        if !self.is_submitting() {
            self.phase = Phase::Idle;
        }
    }
}
