//! Form validation and form state machines.
//!
//! This module contains the core of the application:
//! - The validation rule set shared by every form
//! - Generic per-form state (values, errors, touched fields)
//! - The contact and auth controllers with their submission lifecycles
//! - Deferred actions owned by each controller

pub mod auth;
pub mod contact;
mod deferred;
mod form;
pub mod regions;
pub mod schema;
mod submission;
pub mod validation;

pub use auth::{AuthController, AuthDelays, AuthEvent, AuthMode};
pub use contact::ContactController;
pub use deferred::Deferred;
pub use form::{Field, FieldErrors, FormState, FormValues};
pub use schema::{ContactField, ContactValues, LoginField, LoginValues, RegisterField, RegisterValues};
pub use submission::{MessageKind, Phase, StatusMessage, SubmissionState, SubmitAttempt, FIX_ERRORS_MESSAGE};
pub use validation::ValidationError;
