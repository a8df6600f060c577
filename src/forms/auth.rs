//! Authentication modal controller.
//!
//! The modal hosts four mutually exclusive modes. Login and register each own
//! a [`FormState`]; otp and forgot-password are placeholders that can only go
//! back to login. The controller does not own visibility: closing emits
//! [`AuthEvent::Closed`] and a successful login emits
//! [`AuthEvent::LoggedIn`], both drained by the host with
//! [`AuthController::take_events`].

use super::deferred::Deferred;
use super::form::{FormState, FormValues};
use super::schema::{LoginField, LoginValues, RegisterField, RegisterValues};
use super::submission::{SubmissionState, SubmitAttempt, FIX_ERRORS_MESSAGE};
use crate::backend::AuthUser;
use log::*;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::{Duration, Instant};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login successful! Redirecting...";
pub const LOGIN_FAILURE_MESSAGE: &str = "Invalid email or password";
pub const REGISTER_SUCCESS_MESSAGE: &str = "Registration successful! Please login.";
pub const REGISTER_FAILURE_MESSAGE: &str = "Registration failed. Please try again.";

/// Mode of the authentication modal.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AuthMode {
    #[default]
    Login,
    Register,
    Otp,
    ForgotPassword,
}

impl AuthMode {
    /// Whether the modal may move from this mode to `to`.
    ///
    pub fn can_switch_to(self, to: AuthMode) -> bool {
        match self {
            AuthMode::Login => to != AuthMode::Login,
            AuthMode::Register | AuthMode::Otp | AuthMode::ForgotPassword => {
                to == AuthMode::Login
            }
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            AuthMode::Login => "Login",
            AuthMode::Register => "Create Account",
            AuthMode::Otp => "Login with OTP",
            AuthMode::ForgotPassword => "Forgot Password",
        }
    }
}

/// Notifications for the host of the modal.
///
#[derive(Debug, PartialEq, Eq, Clone)]
pub enum AuthEvent {
    Closed,
    LoggedIn(AuthUser),
}

/// Delays used by the modal's deferred actions.
///
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct AuthDelays {
    /// From close until the modal state is reset.
    pub close_reset: Duration,
    /// From a successful login until the modal closes.
    pub login_redirect: Duration,
    /// From a successful registration until the modal returns to login.
    pub register_return: Duration,
}

impl Default for AuthDelays {
    fn default() -> Self {
        AuthDelays {
            close_reset: Duration::from_millis(300),
            login_redirect: Duration::from_millis(1000),
            register_return: Duration::from_millis(1500),
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum AuthAction {
    CloseAfterLogin,
    ReturnToLogin,
    Reset,
}

/// Drives the authentication modal through its modes and submissions.
///
#[derive(Debug)]
pub struct AuthController {
    initial_mode: AuthMode,
    mode: AuthMode,
    login: FormState<LoginValues>,
    register: FormState<RegisterValues>,
    submission: SubmissionState,
    deferred: Deferred<AuthAction>,
    delays: AuthDelays,
    events: Vec<AuthEvent>,
}

impl AuthController {
    pub fn new(initial_mode: AuthMode, delays: AuthDelays) -> Self {
        AuthController {
            initial_mode,
            mode: initial_mode,
            login: FormState::new(),
            register: FormState::new(),
            submission: SubmissionState::default(),
            deferred: Deferred::new(),
            delays,
            events: vec![],
        }
    }

    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn login(&self) -> &FormState<LoginValues> {
        &self.login
    }

    pub fn register(&self) -> &FormState<RegisterValues> {
        &self.register
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Switch to another mode, discarding the data of both forms. Returns
    /// false if the transition is not allowed or a submission is in flight.
    ///
    pub fn switch_mode(&mut self, to: AuthMode) -> bool {
        if self.submission.is_submitting() || !self.mode.can_switch_to(to) {
            return false;
        }
        debug!("Switching auth mode from {:?} to {:?}.", self.mode, to);
        self.enter_mode(to);
        true
    }

    pub fn change_login(&mut self, field: LoginField, value: impl Into<String>) -> bool {
        if self.mode != AuthMode::Login || self.submission.is_submitting() {
            return false;
        }
        self.login.change(field, value)
    }

    pub fn blur_login(&mut self, field: LoginField) {
        if self.mode == AuthMode::Login && !self.submission.is_submitting() {
            self.login.blur(field);
        }
    }

    pub fn change_register(&mut self, field: RegisterField, value: impl Into<String>) -> bool {
        if self.mode != AuthMode::Register || self.submission.is_submitting() {
            return false;
        }
        self.register.change(field, value)
    }

    pub fn blur_register(&mut self, field: RegisterField) {
        if self.mode == AuthMode::Register && !self.submission.is_submitting() {
            self.register.blur(field);
        }
    }

    /// Validate the login form and, if valid, return its values for the
    /// backend.
    ///
    pub fn submit_login(&mut self) -> SubmitAttempt<LoginValues> {
        if self.mode != AuthMode::Login {
            return SubmitAttempt::Unavailable;
        }
        if self.submission.is_submitting() || self.is_settling() {
            return SubmitAttempt::Busy;
        }
        if !self.login.validate_all() {
            self.submission.fail(FIX_ERRORS_MESSAGE);
            return SubmitAttempt::Invalid;
        }
        self.submission.begin();
        SubmitAttempt::Dispatched(self.login.values().sanitized())
    }

    /// Validate the register form and, if valid, return its values for the
    /// backend.
    ///
    pub fn submit_register(&mut self) -> SubmitAttempt<RegisterValues> {
        if self.mode != AuthMode::Register {
            return SubmitAttempt::Unavailable;
        }
        if self.submission.is_submitting() || self.is_settling() {
            return SubmitAttempt::Busy;
        }
        if !self.register.validate_all() {
            self.submission.fail(FIX_ERRORS_MESSAGE);
            return SubmitAttempt::Invalid;
        }
        self.submission.begin();
        SubmitAttempt::Dispatched(self.register.values().sanitized())
    }

    /// Apply the backend outcome of an in-flight login.
    ///
    pub fn resolve_login<E: Display>(&mut self, outcome: Result<AuthUser, E>, now: Instant) {
        if !self.submission.is_submitting() || self.mode != AuthMode::Login {
            warn!("Ignoring login result with nothing in flight.");
            return;
        }
        match outcome {
            Ok(user) => {
                info!("Logged in as {}.", user.email);
                self.submission.succeed(LOGIN_SUCCESS_MESSAGE);
                self.events.push(AuthEvent::LoggedIn(user));
                self.deferred
                    .schedule(now, self.delays.login_redirect, AuthAction::CloseAfterLogin);
            }
            Err(e) => {
                error!("Login failed: {}", e);
                self.submission.fail(LOGIN_FAILURE_MESSAGE);
            }
        }
    }

    /// Apply the backend outcome of an in-flight registration.
    ///
    pub fn resolve_register<T, E: Display>(&mut self, outcome: Result<T, E>, now: Instant) {
        if !self.submission.is_submitting() || self.mode != AuthMode::Register {
            warn!("Ignoring registration result with nothing in flight.");
            return;
        }
        match outcome {
            Ok(_) => {
                info!("Registration completed.");
                self.submission.succeed(REGISTER_SUCCESS_MESSAGE);
                self.deferred
                    .schedule(now, self.delays.register_return, AuthAction::ReturnToLogin);
            }
            Err(e) => {
                error!("Registration failed: {}", e);
                self.submission.fail(REGISTER_FAILURE_MESSAGE);
            }
        }
    }

    /// Request the modal to close. Refused while a submission is in flight;
    /// otherwise the host is notified at once and the state is reset after
    /// the close delay.
    ///
    pub fn close(&mut self, now: Instant) -> bool {
        if self.submission.is_submitting() {
            debug!("Ignoring close request while submitting.");
            return false;
        }
        self.deferred.cancel(&AuthAction::CloseAfterLogin);
        self.deferred.cancel(&AuthAction::ReturnToLogin);
        self.events.push(AuthEvent::Closed);
        self.deferred
            .schedule(now, self.delays.close_reset, AuthAction::Reset);
        true
    }

    /// Prepare the modal for display, applying a pending reset at once.
    ///
    pub fn open(&mut self) {
        if self.deferred.is_pending(&AuthAction::Reset) {
            self.deferred.cancel(&AuthAction::Reset);
            self.reset();
        }
    }

    /// Fire deferred actions that are due.
    ///
    pub fn tick(&mut self, now: Instant) {
        for action in self.deferred.take_due(now) {
            match action {
                AuthAction::CloseAfterLogin => {
                    self.close(now);
                }
                AuthAction::ReturnToLogin => {
                    if self.mode == AuthMode::Register && !self.submission.is_submitting() {
                        self.enter_mode(AuthMode::Login);
                    }
                }
                AuthAction::Reset => self.reset(),
            }
        }
    }

    /// Drain notifications for the host.
    ///
    pub fn take_events(&mut self) -> Vec<AuthEvent> {
        std::mem::take(&mut self.events)
    }

    /// Cancel all pending deferred actions.
    ///
    pub fn teardown(&mut self) {
        self.deferred.cancel_all();
    }

    /// True between a successful submission and its scheduled close or
    /// return to login.
    ///
    pub fn is_settling(&self) -> bool {
        self.deferred.is_pending(&AuthAction::CloseAfterLogin)
            || self.deferred.is_pending(&AuthAction::ReturnToLogin)
    }

    pub fn has_pending_actions(&self) -> bool {
        !self.deferred.is_empty()
    }

    fn enter_mode(&mut self, mode: AuthMode) {
        self.deferred.cancel(&AuthAction::ReturnToLogin);
        self.login.reset();
        self.register.reset();
        self.submission.clear();
        self.mode = mode;
    }

    fn reset(&mut self) {
        debug!("Resetting auth modal state.");
        self.deferred.cancel_all();
        self.mode = self.initial_mode;
        self.login.reset();
        self.register.reset();
        self.submission = SubmissionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::UserRole;
    use crate::forms::schema::fixtures::{valid_login, valid_register};
    use crate::forms::submission::{MessageKind, Phase};
    use crate::forms::Field;
    use fake::{Fake, Faker};

    fn controller() -> AuthController {
        AuthController::new(AuthMode::Login, AuthDelays::default())
    }

    fn fill_login(controller: &mut AuthController) {
        let values = valid_login();
        for field in LoginField::ALL {
            assert!(controller.change_login(*field, values.get(*field)));
        }
    }

    fn fill_register(controller: &mut AuthController) {
        let values = valid_register();
        for field in RegisterField::ALL {
            assert!(controller.change_register(*field, values.get(*field)));
        }
    }

    fn student(email: &str) -> AuthUser {
        AuthUser {
            id: "1".to_string(),
            email: email.to_string(),
            full_name: "Student Name".to_string(),
            mobile: "9876543210".to_string(),
            role: UserRole::Student,
            avatar: None,
        }
    }

    #[test]
    fn mode_transitions() {
        assert!(AuthMode::Login.can_switch_to(AuthMode::Register));
        assert!(AuthMode::Login.can_switch_to(AuthMode::Otp));
        assert!(AuthMode::Login.can_switch_to(AuthMode::ForgotPassword));
        assert!(!AuthMode::Login.can_switch_to(AuthMode::Login));
        assert!(AuthMode::Otp.can_switch_to(AuthMode::Login));
        assert!(!AuthMode::Otp.can_switch_to(AuthMode::Register));
        assert!(!AuthMode::ForgotPassword.can_switch_to(AuthMode::Otp));
        assert!(!AuthMode::Register.can_switch_to(AuthMode::Otp));
    }

    #[test]
    fn switching_discards_register_values() {
        let mut controller = controller();
        assert!(controller.switch_mode(AuthMode::Register));
        controller.change_register(RegisterField::FirstName, "Asha");
        controller.blur_register(RegisterField::LastName);
        assert!(controller.switch_mode(AuthMode::Login));
        assert!(controller.switch_mode(AuthMode::Register));
        assert_eq!(controller.register().values(), &RegisterValues::default());
        assert!(!controller.register().is_touched(RegisterField::LastName));
    }

    #[test]
    fn switching_clears_message() {
        let mut controller = controller();
        controller.submit_login();
        assert!(controller.submission().message().is_some());
        controller.switch_mode(AuthMode::ForgotPassword);
        assert!(controller.submission().message().is_none());
        assert_eq!(controller.submission().phase(), Phase::Idle);
    }

    #[test]
    fn placeholder_modes_only_go_back_to_login() {
        let mut controller = controller();
        assert!(controller.switch_mode(AuthMode::Otp));
        assert!(!controller.switch_mode(AuthMode::Register));
        assert_eq!(controller.mode(), AuthMode::Otp);
        assert!(controller.switch_mode(AuthMode::Login));
    }

    #[test]
    fn edits_only_apply_to_active_mode() {
        let mut controller = controller();
        assert!(!controller.change_register(RegisterField::City, "Pune"));
        assert_eq!(controller.submit_register(), SubmitAttempt::Unavailable);
        assert!(controller.submission().message().is_none());
        controller.switch_mode(AuthMode::Register);
        assert!(!controller.change_login(LoginField::Email, "a@b.co"));
    }

    #[test]
    fn register_mobile_fields_filter_keystrokes() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        assert!(controller.change_register(RegisterField::ParentMobile, "98"));
        assert!(!controller.change_register(RegisterField::ParentMobile, "98a"));
        assert_eq!(controller.register().value(RegisterField::ParentMobile), "98");

        assert!(controller.change_register(RegisterField::Mobile, "9876543210"));
        assert!(!controller.change_register(RegisterField::Mobile, "98765432101"));
        assert_eq!(controller.register().value(RegisterField::Mobile), "9876543210");
        assert!(!controller.change_register(RegisterField::ParentMobile, "91234567890"));
        assert_eq!(controller.register().value(RegisterField::ParentMobile), "98");
    }

    #[test]
    fn invalid_login_is_not_dispatched() {
        let mut controller = controller();
        controller.change_login(LoginField::Email, "asha@example.com");
        assert_eq!(controller.submit_login(), SubmitAttempt::Invalid);
        let message = controller.submission().message().unwrap();
        assert_eq!(message.kind, MessageKind::Error);
        assert_eq!(message.text, FIX_ERRORS_MESSAGE);
        assert!(controller
            .login()
            .visible_error(LoginField::Password)
            .is_some());
    }

    #[test]
    fn login_success_emits_user_then_closes_and_resets() {
        let mut controller = controller();
        fill_login(&mut controller);
        let now = Instant::now();
        assert_eq!(
            controller.submit_login(),
            SubmitAttempt::Dispatched(valid_login())
        );
        assert!(!controller.close(now));

        controller.resolve_login(Ok::<_, String>(student("asha@example.com")), now);
        assert_eq!(
            controller.submission().message().unwrap().text,
            LOGIN_SUCCESS_MESSAGE
        );
        assert_eq!(
            controller.take_events(),
            vec![AuthEvent::LoggedIn(student("asha@example.com"))]
        );

        let redirect = now + AuthDelays::default().login_redirect;
        controller.tick(redirect);
        assert_eq!(controller.take_events(), vec![AuthEvent::Closed]);
        // Still populated until the close delay elapses.
        assert_eq!(controller.login().values(), &valid_login());

        controller.tick(redirect + AuthDelays::default().close_reset);
        assert_eq!(controller.login().values(), &LoginValues::default());
        assert!(controller.submission().message().is_none());
        assert!(!controller.has_pending_actions());
    }

    #[test]
    fn login_cannot_be_resubmitted_before_redirect() {
        let mut controller = controller();
        fill_login(&mut controller);
        let now = Instant::now();
        controller.submit_login();
        controller.resolve_login(Ok::<_, String>(student("asha@example.com")), now);
        controller.take_events();

        assert!(controller.is_settling());
        assert_eq!(controller.submit_login(), SubmitAttempt::Busy);
        assert_eq!(controller.submission().phase(), Phase::Succeeded);

        controller.tick(now + AuthDelays::default().login_redirect);
        assert_eq!(controller.take_events(), vec![AuthEvent::Closed]);
        assert!(!controller.is_settling());
    }

    #[test]
    fn register_cannot_be_resubmitted_before_return() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        fill_register(&mut controller);
        let now = Instant::now();
        controller.submit_register();
        controller.resolve_register(Ok::<(), String>(()), now);

        assert_eq!(controller.submit_register(), SubmitAttempt::Busy);
        assert_eq!(controller.submission().phase(), Phase::Succeeded);

        controller.tick(now + AuthDelays::default().register_return);
        assert_eq!(controller.mode(), AuthMode::Login);
        assert!(!controller.is_settling());
    }

    #[test]
    fn login_failure_keeps_values() {
        let mut controller = controller();
        fill_login(&mut controller);
        controller.submit_login();
        controller.resolve_login(Err::<AuthUser, _>("401"), Instant::now());
        assert_eq!(controller.submission().phase(), Phase::Failed);
        assert_eq!(
            controller.submission().message().unwrap().text,
            LOGIN_FAILURE_MESSAGE
        );
        assert_eq!(controller.login().values(), &valid_login());
        assert!(controller.take_events().is_empty());
    }

    #[test]
    fn register_success_returns_to_blank_login() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        fill_register(&mut controller);
        let now = Instant::now();
        assert!(matches!(
            controller.submit_register(),
            SubmitAttempt::Dispatched(_)
        ));
        controller.resolve_register(Ok::<(), String>(()), now);
        assert_eq!(
            controller.submission().message().unwrap().text,
            REGISTER_SUCCESS_MESSAGE
        );
        assert_eq!(controller.mode(), AuthMode::Register);

        controller.tick(now + AuthDelays::default().register_return);
        assert_eq!(controller.mode(), AuthMode::Login);
        assert!(controller.submission().message().is_none());
        assert_eq!(controller.login().values(), &LoginValues::default());
        assert!(controller.take_events().is_empty());
    }

    #[test]
    fn register_failure_message() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        fill_register(&mut controller);
        controller.submit_register();
        controller.resolve_register(Err::<(), _>("boom"), Instant::now());
        assert_eq!(
            controller.submission().message().unwrap().text,
            REGISTER_FAILURE_MESSAGE
        );
        assert_eq!(controller.register().values(), &valid_register());
    }

    #[test]
    fn mismatched_confirmation_blocks_registration() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        fill_register(&mut controller);
        controller.change_register(RegisterField::ConfirmPassword, "Abcd1235");
        assert_eq!(controller.submit_register(), SubmitAttempt::Invalid);
        assert_eq!(controller.register().errors().len(), 1);
    }

    #[test]
    fn close_resets_after_delay_to_initial_mode() {
        let mut controller = AuthController::new(AuthMode::Register, AuthDelays::default());
        controller.change_register(RegisterField::City, "Pune");
        controller.switch_mode(AuthMode::Login);
        controller.change_login(LoginField::Email, "asha@example.com");

        let now = Instant::now();
        assert!(controller.close(now));
        assert_eq!(controller.take_events(), vec![AuthEvent::Closed]);
        assert_eq!(controller.mode(), AuthMode::Login);

        controller.tick(now + Duration::from_millis(299));
        assert_eq!(controller.login().value(LoginField::Email), "asha@example.com");

        controller.tick(now + Duration::from_millis(300));
        assert_eq!(controller.mode(), AuthMode::Register);
        assert_eq!(controller.login().values(), &LoginValues::default());
    }

    #[test]
    fn reopening_applies_pending_reset() {
        let mut controller = controller();
        controller.change_login(LoginField::Email, "asha@example.com");
        controller.close(Instant::now());
        controller.open();
        assert_eq!(controller.login().values(), &LoginValues::default());
        assert!(!controller.has_pending_actions());
    }

    #[test]
    fn close_cancels_pending_return_to_login() {
        let mut controller = controller();
        controller.switch_mode(AuthMode::Register);
        fill_register(&mut controller);
        controller.submit_register();
        let now = Instant::now();
        controller.resolve_register(Ok::<(), String>(()), now);
        controller.close(now);
        controller.tick(now + Duration::from_secs(5));
        assert_eq!(controller.mode(), AuthMode::Login);
        assert!(!controller.has_pending_actions());
    }

    #[test]
    fn teardown_drops_pending_reset() {
        let mut controller = controller();
        controller.change_login(LoginField::Email, "asha@example.com");
        let now = Instant::now();
        controller.close(now);
        controller.teardown();
        controller.tick(now + Duration::from_secs(1));
        assert_eq!(controller.login().value(LoginField::Email), "asha@example.com");
    }

    #[test]
    fn logged_in_event_carries_backend_user() {
        let mut controller = controller();
        fill_login(&mut controller);
        controller.submit_login();
        let user: AuthUser = Faker.fake();
        controller.resolve_login(Ok::<_, String>(user.clone()), Instant::now());
        assert_eq!(controller.take_events(), vec![AuthEvent::LoggedIn(user)]);
    }

    #[test]
    fn auth_mode_config_names() {
        let mode: AuthMode = serde_yaml::from_str("forgot-password").unwrap();
        assert_eq!(mode, AuthMode::ForgotPassword);
        let mode: AuthMode = serde_yaml::from_str("register").unwrap();
        assert_eq!(mode, AuthMode::Register);
    }
}
