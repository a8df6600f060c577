use crate::app::{ConfigSaveSender, NetworkEventSender};
use crate::backend::AuthUser;
use crate::config::Config;
use crate::events::network::Event as NetworkEvent;
use crate::forms::{
    AuthController, AuthEvent, AuthMode, ContactController, ContactField, LoginField,
    RegisterField, SubmitAttempt,
};
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::layout::Rect;
use std::time::Instant;

use super::error::StateError;
use super::form::{edited_value, FieldCursor, FieldEdit};
use super::navigation::{Focus, Page};

const MAX_LOG_ENTRIES: usize = 1000;

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    config_save_sender: Option<ConfigSaveSender>,
    page: Page,
    contact: ContactController,
    contact_cursor: FieldCursor<ContactField>,
    auth: AuthController,
    auth_open: bool,
    cursor_mode: AuthMode,
    login_cursor: FieldCursor<LoginField>,
    register_cursor: FieldCursor<RegisterField>,
    user: Option<AuthUser>,
    log_entries: Vec<String>,
    show_log: bool,
    spinner_index: usize,
    theme: Theme,
    terminal_size: Rect,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        let config = Config::new();
        State {
            net_sender: None,
            config_save_sender: None,
            page: Page::Home,
            contact: ContactController::new(config.timings.contact_acknowledge()),
            contact_cursor: FieldCursor::default(),
            auth: AuthController::new(config.initial_auth_mode, config.timings.auth_delays()),
            auth_open: false,
            cursor_mode: config.initial_auth_mode,
            login_cursor: FieldCursor::default(),
            register_cursor: FieldCursor::default(),
            user: None,
            log_entries: vec![],
            show_log: false,
            spinner_index: 0,
            theme: Theme::default(),
            terminal_size: Rect::default(),
        }
    }
}

impl State {
    pub fn new(
        net_sender: NetworkEventSender,
        config_save_sender: ConfigSaveSender,
        config: &Config,
    ) -> Self {
        State {
            net_sender: Some(net_sender),
            config_save_sender: Some(config_save_sender),
            contact: ContactController::new(config.timings.contact_acknowledge()),
            auth: AuthController::new(config.initial_auth_mode, config.timings.auth_delays()),
            cursor_mode: config.initial_auth_mode,
            theme: Theme::from_name(&config.theme_name).unwrap_or_default(),
            ..State::default()
        }
    }

    /// Get the current theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }

    /// Switch to the next available theme and ask for the choice to be
    /// saved.
    ///
    pub fn next_theme(&mut self) -> &mut Self {
        let themes = Theme::available_themes();
        let index = themes
            .iter()
            .position(|name| *name == self.theme.name)
            .map_or(0, |index| (index + 1) % themes.len());
        if let Some(theme) = Theme::from_name(themes[index]) {
            info!("Switching to theme '{}'.", theme.name);
            self.theme = theme;
        }
        if let Some(sender) = &self.config_save_sender {
            if sender.send(self.theme.name.clone()).is_err() {
                warn!("Config saver is gone, theme will not be saved.");
            }
        }
        self
    }

    /// Returns details for the logged in user.
    ///
    pub fn get_user(&self) -> Option<&AuthUser> {
        self.user.as_ref()
    }

    /// Forget the logged in user.
    ///
    pub fn logout(&mut self) -> &mut Self {
        if let Some(user) = self.user.take() {
            info!("Logged out {}.", user.email);
        }
        self
    }

    /// Sets the terminal size.
    ///
    pub fn set_terminal_size(&mut self, size: Rect) -> &mut Self {
        self.terminal_size = size;
        self
    }

    pub fn get_terminal_size(&self) -> Rect {
        self.terminal_size
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index = (self.spinner_index + 1) % SPINNER_FRAME_COUNT;
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> usize {
        self.spinner_index
    }

    /// Return the current page.
    ///
    pub fn current_page(&self) -> Page {
        self.page
    }

    /// Show another page. The focused contact field is blurred when leaving
    /// the contact page.
    ///
    pub fn set_page(&mut self, page: Page) -> &mut Self {
        if self.page == Page::Contact && page != Page::Contact {
            self.contact.blur(self.contact_cursor.current());
        }
        debug!("Showing {} page.", page.title());
        self.page = page;
        self
    }

    /// Return where keyboard input goes.
    ///
    pub fn current_focus(&self) -> Focus {
        if self.auth_open {
            Focus::AuthModal
        } else {
            Focus::Page
        }
    }

    /// Whether printable keys are consumed by a form.
    ///
    pub fn is_editing(&self) -> bool {
        match self.current_focus() {
            Focus::AuthModal => matches!(self.auth.mode(), AuthMode::Login | AuthMode::Register),
            Focus::Page => self.page == Page::Contact,
        }
    }

    pub fn is_log_visible(&self) -> bool {
        self.show_log
    }

    pub fn toggle_log(&mut self) -> &mut Self {
        self.show_log = !self.show_log;
        self
    }

    /// Add a log entry, dropping the oldest beyond the limit.
    ///
    pub fn add_log_entry(&mut self, entry: String) {
        self.log_entries.push(entry);
        if self.log_entries.len() > MAX_LOG_ENTRIES {
            self.log_entries.remove(0);
        }
    }

    pub fn get_log_entries(&self) -> &[String] {
        &self.log_entries
    }

    pub fn contact(&self) -> &ContactController {
        &self.contact
    }

    pub fn contact_focus(&self) -> ContactField {
        self.contact_cursor.current()
    }

    pub fn auth(&self) -> &AuthController {
        &self.auth
    }

    pub fn is_auth_open(&self) -> bool {
        self.auth_open
    }

    pub fn login_focus(&self) -> LoginField {
        self.login_cursor.current()
    }

    pub fn register_focus(&self) -> RegisterField {
        self.register_cursor.current()
    }

    /// Whether any form is waiting for the backend.
    ///
    pub fn is_submitting(&self) -> bool {
        self.contact.submission().is_submitting() || self.auth.submission().is_submitting()
    }

    /// F4: open the login modal, or log out when a user is logged in.
    ///
    pub fn toggle_account(&mut self) -> &mut Self {
        if self.user.is_some() {
            self.logout()
        } else {
            self.open_auth()
        }
    }

    /// Show the auth modal.
    ///
    pub fn open_auth(&mut self) -> &mut Self {
        if !self.auth_open {
            self.auth.open();
            self.auth_open = true;
            self.login_cursor.reset();
            self.register_cursor.reset();
            self.cursor_mode = self.auth.mode();
        }
        self
    }

    /// Ask the auth modal to close. Refused while it is submitting.
    ///
    pub fn close_auth(&mut self, now: Instant) -> &mut Self {
        if self.auth_open {
            self.auth.close(now);
            self.process_auth_events();
        }
        self
    }

    /// Switch the auth modal to another mode if the transition is allowed.
    ///
    pub fn switch_auth_mode(&mut self, mode: AuthMode) -> &mut Self {
        if self.auth_open && self.auth.switch_mode(mode) {
            self.sync_auth_cursors();
        }
        self
    }

    /// Move the focus to the next field of the active form.
    ///
    pub fn focus_next_field(&mut self) -> &mut Self {
        self.move_focus(true)
    }

    /// Move the focus to the previous field of the active form.
    ///
    pub fn focus_previous_field(&mut self) -> &mut Self {
        self.move_focus(false)
    }

    fn move_focus(&mut self, forward: bool) -> &mut Self {
        match self.current_focus() {
            Focus::AuthModal => match self.auth.mode() {
                AuthMode::Login => {
                    let left = if forward {
                        self.login_cursor.next()
                    } else {
                        self.login_cursor.previous()
                    };
                    self.auth.blur_login(left);
                }
                AuthMode::Register => {
                    let left = if forward {
                        self.register_cursor.next()
                    } else {
                        self.register_cursor.previous()
                    };
                    self.auth.blur_register(left);
                }
                AuthMode::Otp | AuthMode::ForgotPassword => (),
            },
            Focus::Page if self.page == Page::Contact => {
                let left = if forward {
                    self.contact_cursor.next()
                } else {
                    self.contact_cursor.previous()
                };
                self.contact.blur(left);
            }
            Focus::Page => (),
        }
        self
    }

    /// Apply a keystroke-level edit to the focused field.
    ///
    pub fn edit_focused_field(&mut self, edit: FieldEdit) -> &mut Self {
        match self.current_focus() {
            Focus::AuthModal => match self.auth.mode() {
                AuthMode::Login => {
                    let field = self.login_cursor.current();
                    if let Some(value) = edited_value(self.auth.login(), field, edit) {
                        self.auth.change_login(field, value);
                    }
                }
                AuthMode::Register => {
                    let field = self.register_cursor.current();
                    if let Some(value) = edited_value(self.auth.register(), field, edit) {
                        self.auth.change_register(field, value);
                    }
                }
                AuthMode::Otp | AuthMode::ForgotPassword => (),
            },
            Focus::Page if self.page == Page::Contact => {
                let field = self.contact_cursor.current();
                if let Some(value) = edited_value(self.contact.form(), field, edit) {
                    self.contact.change(field, value);
                }
            }
            Focus::Page => (),
        }
        self
    }

    /// Enter: submit the active form, follow the home page call to action,
    /// or go back to login from a placeholder auth mode.
    ///
    pub fn submit(&mut self) -> &mut Self {
        match self.current_focus() {
            Focus::AuthModal => match self.auth.mode() {
                AuthMode::Login => self.submit_login(),
                AuthMode::Register => self.submit_register(),
                AuthMode::Otp | AuthMode::ForgotPassword => self.switch_auth_mode(AuthMode::Login),
            },
            Focus::Page => match self.page {
                Page::Home => self.set_page(Page::Contact),
                Page::About => self,
                Page::Contact => self.submit_contact(),
            },
        }
    }

    fn submit_contact(&mut self) -> &mut Self {
        if let SubmitAttempt::Dispatched(values) = self.contact.submit() {
            info!("Submitting contact enquiry...");
            if let Err(e) = self.dispatch(NetworkEvent::SubmitContact(values)) {
                self.contact.resolve::<(), _>(Err(e), Instant::now());
            }
        }
        self
    }

    fn submit_login(&mut self) -> &mut Self {
        if let SubmitAttempt::Dispatched(values) = self.auth.submit_login() {
            info!("Submitting login for {}...", values.email);
            if let Err(e) = self.dispatch(NetworkEvent::Login(values)) {
                self.resolve_login(Err(e), Instant::now());
            }
        }
        self
    }

    fn submit_register(&mut self) -> &mut Self {
        if let SubmitAttempt::Dispatched(values) = self.auth.submit_register() {
            info!("Submitting registration for {}...", values.email);
            if let Err(e) = self.dispatch(NetworkEvent::Register(values)) {
                self.resolve_register::<(), _>(Err(e), Instant::now());
            }
        }
        self
    }

    fn dispatch(&self, event: NetworkEvent) -> Result<(), StateError> {
        match &self.net_sender {
            Some(sender) => sender
                .send(event)
                .map_err(|_| StateError::ChannelClosed("network")),
            None => Err(StateError::ChannelClosed("network")),
        }
    }

    /// Apply the backend outcome of a contact submission.
    ///
    pub fn resolve_contact<T, E: std::fmt::Display>(&mut self, outcome: Result<T, E>, now: Instant) {
        self.contact.resolve(outcome, now);
    }

    /// Apply the backend outcome of a login.
    ///
    pub fn resolve_login<E: std::fmt::Display>(&mut self, outcome: Result<AuthUser, E>, now: Instant) {
        self.auth.resolve_login(outcome, now);
        self.process_auth_events();
    }

    /// Apply the backend outcome of a registration.
    ///
    pub fn resolve_register<T, E: std::fmt::Display>(&mut self, outcome: Result<T, E>, now: Instant) {
        self.auth.resolve_register(outcome, now);
        self.process_auth_events();
    }

    /// Advance the spinner and fire due deferred actions.
    ///
    pub fn tick(&mut self, now: Instant) -> &mut Self {
        self.advance_spinner_index();
        self.contact.tick(now);
        self.auth.tick(now);
        self.process_auth_events();
        self
    }

    /// Cancel every pending deferred action before exit.
    ///
    pub fn shutdown(&mut self) {
        self.contact.teardown();
        self.auth.teardown();
    }

    fn process_auth_events(&mut self) {
        for event in self.auth.take_events() {
            match event {
                AuthEvent::Closed => {
                    debug!("Auth modal closed.");
                    self.auth_open = false;
                }
                AuthEvent::LoggedIn(user) => {
                    self.user = Some(user);
                }
            }
        }
        self.sync_auth_cursors();
    }

    /// Focus the first field whenever the modal lands on another mode.
    ///
    fn sync_auth_cursors(&mut self) {
        let mode = self.auth.mode();
        if mode != self.cursor_mode {
            self.login_cursor.reset();
            self.register_cursor.reset();
            self.cursor_mode = mode;
        }
    }
}

#[cfg(test)]
impl State {
    /// State wired to channels the test can observe.
    ///
    pub(crate) fn with_channels(
        config: &Config,
    ) -> (
        State,
        tokio::sync::mpsc::UnboundedReceiver<NetworkEvent>,
        std::sync::mpsc::Receiver<String>,
    ) {
        let (net_tx, net_rx) = tokio::sync::mpsc::unbounded_channel();
        let (save_tx, save_rx) = std::sync::mpsc::channel();
        (State::new(net_tx, save_tx, config), net_rx, save_rx)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BackendError, UserRole};
    use crate::forms::schema::fixtures::{valid_contact, valid_login};
    use crate::forms::{Field, FormValues, LoginValues, Phase, RegisterValues};
    use fake::{Fake, Faker};
    use std::time::Duration;

    fn type_text(state: &mut State, text: &str) {
        for c in text.chars() {
            state.edit_focused_field(FieldEdit::Insert(c));
        }
    }

    fn fill_contact(state: &mut State) {
        let values = valid_contact();
        for field in ContactField::ALL {
            if *field == ContactField::State {
                while state.contact().form().value(ContactField::State) != values.state {
                    state.edit_focused_field(FieldEdit::Cycle { forward: true });
                }
            } else {
                type_text(state, values.get(*field));
            }
            state.focus_next_field();
        }
    }

    #[test]
    fn typing_goes_to_the_focused_contact_field() {
        let mut state = State::default();
        state.set_page(Page::Contact);
        type_text(&mut state, "Asha");
        state.focus_next_field();
        type_text(&mut state, "asha@");
        assert_eq!(state.contact().form().value(ContactField::FullName), "Asha");
        assert_eq!(state.contact().form().value(ContactField::Email), "asha@");
        assert!(state.contact().form().is_touched(ContactField::FullName));
        assert!(!state.contact().form().is_touched(ContactField::Email));
    }

    #[test]
    fn typing_outside_forms_is_ignored() {
        let mut state = State::default();
        assert!(!state.is_editing());
        type_text(&mut state, "hello");
        assert_eq!(state.contact().form().value(ContactField::FullName), "");
    }

    #[test]
    fn enter_on_home_opens_contact_page() {
        let mut state = State::default();
        state.submit();
        assert_eq!(state.current_page(), Page::Contact);
        assert!(state.is_editing());
    }

    #[test]
    fn valid_contact_form_is_dispatched() {
        let (mut state, mut net_rx, _) = State::with_channels(&Config::new());
        state.set_page(Page::Contact);
        fill_contact(&mut state);
        state.submit();
        assert_eq!(state.contact().submission().phase(), Phase::Submitting);
        match net_rx.try_recv() {
            Ok(NetworkEvent::SubmitContact(values)) => assert_eq!(values, valid_contact()),
            other => panic!("unexpected network event: {:?}", other),
        }

        state.resolve_contact::<(), BackendError>(Ok(()), Instant::now());
        assert_eq!(state.contact().submission().phase(), Phase::Succeeded);
        assert_eq!(state.contact().form().values(), &Default::default());
    }

    #[test]
    fn invalid_contact_form_is_not_dispatched() {
        let (mut state, mut net_rx, _) = State::with_channels(&Config::new());
        state.set_page(Page::Contact);
        state.submit();
        assert_eq!(state.contact().submission().phase(), Phase::Failed);
        assert!(net_rx.try_recv().is_err());
    }

    #[test]
    fn closed_network_channel_fails_the_submission() {
        let mut state = State::default();
        state.set_page(Page::Contact);
        fill_contact(&mut state);
        state.submit();
        assert_eq!(state.contact().submission().phase(), Phase::Failed);
        assert_eq!(
            state.contact().form().value(ContactField::City),
            valid_contact().city
        );
    }

    #[test]
    fn login_flow_stores_user_and_closes_modal() {
        let (mut state, mut net_rx, _) = State::with_channels(&Config::new());
        state.toggle_account();
        assert_eq!(state.current_focus(), Focus::AuthModal);
        let credentials = valid_login();
        type_text(&mut state, &credentials.email);
        state.focus_next_field();
        type_text(&mut state, &credentials.password);
        state.submit();
        let values: LoginValues = match net_rx.try_recv() {
            Ok(NetworkEvent::Login(values)) => values,
            other => panic!("unexpected network event: {:?}", other),
        };
        assert_eq!(values, credentials);

        let mut user: AuthUser = Faker.fake();
        user.email = values.email.clone();
        user.role = UserRole::Student;
        let now = Instant::now();
        state.resolve_login::<BackendError>(Ok(user.clone()), now);
        assert_eq!(state.get_user(), Some(&user));
        assert!(state.is_auth_open());

        state.submit();
        assert!(net_rx.try_recv().is_err());

        state.tick(now + Duration::from_millis(1000));
        assert!(!state.is_auth_open());

        state.toggle_account();
        assert_eq!(state.get_user(), None);
        assert!(!state.is_auth_open());
    }

    #[test]
    fn escape_is_refused_while_submitting() {
        let (mut state, _net_rx, _) = State::with_channels(&Config::new());
        state.open_auth();
        let credentials = valid_login();
        type_text(&mut state, &credentials.email);
        state.focus_next_field();
        type_text(&mut state, &credentials.password);
        state.submit();
        state.close_auth(Instant::now());
        assert!(state.is_auth_open());

        state.resolve_login::<BackendError>(
            Err(BackendError::Simulated("login")),
            Instant::now(),
        );
        state.close_auth(Instant::now());
        assert!(!state.is_auth_open());
    }

    #[test]
    fn mode_switch_resets_focus() {
        let mut state = State::default();
        state.open_auth();
        state.focus_next_field();
        assert_eq!(state.login_focus(), LoginField::Password);
        state.switch_auth_mode(AuthMode::Register);
        assert_eq!(state.auth().mode(), AuthMode::Register);
        assert_eq!(state.register_focus(), RegisterField::FirstName);
        state.switch_auth_mode(AuthMode::Otp);
        assert_eq!(state.auth().mode(), AuthMode::Register);
        state.submit();
        assert_eq!(state.auth().submission().phase(), Phase::Failed);
        state.switch_auth_mode(AuthMode::Login);
        state.switch_auth_mode(AuthMode::Otp);
        state.submit();
        assert_eq!(state.auth().mode(), AuthMode::Login);
    }

    #[test]
    fn register_submission_returns_to_login() {
        let (mut state, mut net_rx, _) = State::with_channels(&Config::new());
        state.open_auth().switch_auth_mode(AuthMode::Register);
        let values = crate::forms::schema::fixtures::valid_register();
        for field in RegisterField::ALL {
            if field.picker() {
                while state.auth().register().value(*field) != values.get(*field) {
                    state.edit_focused_field(FieldEdit::Cycle { forward: true });
                }
            } else {
                type_text(&mut state, values.get(*field));
            }
            state.focus_next_field();
        }
        state.submit();
        let sent: RegisterValues = match net_rx.try_recv() {
            Ok(NetworkEvent::Register(values)) => values,
            other => panic!("unexpected network event: {:?}", other),
        };
        assert_eq!(sent, values);

        let now = Instant::now();
        state.resolve_register::<(), BackendError>(Ok(()), now);
        state.tick(now + Duration::from_millis(1500));
        assert_eq!(state.auth().mode(), AuthMode::Login);
        assert_eq!(state.login_focus(), LoginField::Email);
    }

    #[test]
    fn next_theme_requests_save() {
        let (mut state, _net_rx, save_rx) = State::with_channels(&Config::new());
        let before = state.get_theme().name.clone();
        state.next_theme();
        let saved = save_rx.try_recv().unwrap();
        assert_ne!(saved, before);
        assert_eq!(saved, state.get_theme().name);
    }

    #[test]
    fn log_entries_are_capped() {
        let mut state = State::default();
        for i in 0..(MAX_LOG_ENTRIES + 5) {
            state.add_log_entry(format!("entry {}", i));
        }
        assert_eq!(state.get_log_entries().len(), MAX_LOG_ENTRIES);
        assert_eq!(state.get_log_entries()[0], "entry 5");
    }

    #[test]
    fn leaving_contact_page_blurs_focused_field() {
        let mut state = State::default();
        state.set_page(Page::Contact).set_page(Page::About);
        assert!(state.contact().form().is_touched(ContactField::FullName));
    }

    #[test]
    fn shutdown_cancels_deferred_actions() {
        let mut state = State::default();
        state.open_auth().close_auth(Instant::now());
        assert!(state.auth().has_pending_actions());
        state.shutdown();
        assert!(!state.auth().has_pending_actions());
    }
}
