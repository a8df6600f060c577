use super::Frame;
use crate::forms::AuthMode;
use crate::state::{Focus, Page, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Return the key hints for the current focus.
///
pub fn hints(state: &State) -> &'static str {
    match state.current_focus() {
        Focus::AuthModal => match state.auth().mode() {
            AuthMode::Login | AuthMode::Register => {
                " Tab/↑↓: field  ←→: pick state  Enter: submit  Ctrl-U: clear  Esc: close"
            }
            AuthMode::Otp | AuthMode::ForgotPassword => " Enter/Ctrl-L: back to login  Esc: close",
        },
        Focus::Page => match state.current_page() {
            Page::Home => " F1-F3: pages  F4: account  F5: log  F6: theme  Enter: enquire  q: quit",
            Page::About => " F1-F3: pages  F4: account  F5: log  F6: theme  q: quit",
            Page::Contact => {
                " Tab/↑↓: field  ←→: pick state  Enter: submit  F1-F3: pages  Ctrl-C: quit"
            }
        },
    }
}

/// Render the footer with key hints and the active theme.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let line = Line::from(vec![
        Span::styled(hints(state), styling::normal_text_style(theme)),
        Span::styled(
            format!("  [{}]", theme.name),
            styling::muted_text_style(theme),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), size);
}
