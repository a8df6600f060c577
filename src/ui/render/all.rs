use super::{about, auth_modal, contact, footer, home, log, navbar, Frame};
use crate::state::{Page, State};
use ratatui::layout::{Constraint, Direction, Layout};

/// Render the whole screen according to state.
///
pub fn all(frame: &mut Frame, state: &State) {
    let size = frame.size();
    let log_height = if state.is_log_visible() { 10 } else { 0 };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(log_height),
            Constraint::Length(1),
        ])
        .split(size);

    navbar(frame, rows[0], state);
    match state.current_page() {
        Page::Home => home(frame, rows[1], state),
        Page::About => about(frame, rows[1], state),
        Page::Contact => contact(frame, rows[1], state),
    }
    if state.is_log_visible() {
        log(frame, rows[2], state);
    }
    footer(frame, rows[3], state);

    if state.is_auth_open() {
        auth_modal(frame, size, state);
    }
}
