use crate::forms::AuthMode;
use crate::state::{FieldEdit, Focus, Page, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{
    sync::mpsc,
    thread,
    time::{Duration, Instant},
};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            loop {
                match event::poll(tick_rate) {
                    Ok(true) => match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if tx_clone.send(Event::Input(key)).is_err() {
                                break;
                            }
                        }
                        Ok(_) => (),
                        Err(e) => error!("Failed to read terminal event: {}", e),
                    },
                    Ok(false) => (),
                    Err(e) => {
                        error!("Failed to poll terminal events: {}", e);
                        break;
                    }
                }
                if tx_clone.send(Event::Tick).is_err() {
                    break;
                }
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Block until the next terminal event arrives.
    ///
    pub fn next(&self) -> Result<Event<KeyEvent>> {
        Ok(self.rx.recv()?)
    }
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

/// Apply a key press to state. Returns true if the application should
/// continue or false if exit was requested.
///
pub fn handle_key(key: KeyEvent, state: &mut State, now: Instant) -> bool {
    if key.kind != KeyEventKind::Press {
        return true;
    }
    let in_modal = state.current_focus() == Focus::AuthModal;
    match key {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        KeyEvent {
            code: KeyCode::F(n @ 1..=3),
            ..
        } if !in_modal => {
            state.set_page(Page::ALL[usize::from(n) - 1]);
        }
        KeyEvent {
            code: KeyCode::F(4),
            ..
        } if !in_modal => {
            state.toggle_account();
        }
        KeyEvent {
            code: KeyCode::F(5),
            ..
        } => {
            state.toggle_log();
        }
        KeyEvent {
            code: KeyCode::F(6),
            ..
        } => {
            state.next_theme();
        }
        KeyEvent {
            code: KeyCode::Esc, ..
        } if in_modal => {
            state.close_auth(now);
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            ..
        } if in_modal => {
            let mode = match c {
                'r' => Some(AuthMode::Register),
                'o' => Some(AuthMode::Otp),
                'f' => Some(AuthMode::ForgotPassword),
                'l' => Some(AuthMode::Login),
                _ => None,
            };
            match mode {
                Some(mode) => {
                    state.switch_auth_mode(mode);
                }
                None if c == 'u' => {
                    state.edit_focused_field(FieldEdit::Clear);
                }
                None => (),
            }
        }
        KeyEvent {
            code: KeyCode::Char('u'),
            modifiers: KeyModifiers::CONTROL,
            ..
        } => {
            state.edit_focused_field(FieldEdit::Clear);
        }
        KeyEvent {
            code: KeyCode::Tab | KeyCode::Down,
            ..
        } => {
            state.focus_next_field();
        }
        KeyEvent {
            code: KeyCode::BackTab | KeyCode::Up,
            ..
        } => {
            state.focus_previous_field();
        }
        KeyEvent {
            code: KeyCode::Left,
            ..
        } => {
            state.edit_focused_field(FieldEdit::Cycle { forward: false });
        }
        KeyEvent {
            code: KeyCode::Right,
            ..
        } => {
            state.edit_focused_field(FieldEdit::Cycle { forward: true });
        }
        KeyEvent {
            code: KeyCode::Enter,
            ..
        } => {
            state.submit();
        }
        KeyEvent {
            code: KeyCode::Backspace,
            ..
        } => {
            state.edit_focused_field(FieldEdit::Backspace);
        }
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } if state.is_editing() => {
            state.edit_focused_field(FieldEdit::Insert(c));
        }
        KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::NONE,
            ..
        } if !in_modal => {
            debug!("Processing exit terminal event '{:?}'...", key);
            return false;
        }
        _ => (),
    }
    true
}
