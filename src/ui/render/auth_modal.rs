use super::fields::{form_lines, scroll_offset, status_line};
use super::Frame;
use crate::forms::{AuthMode, LoginField, RegisterField};
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

fn login_placeholder(field: LoginField) -> &'static str {
    match field {
        LoginField::Email => "Enter your email",
        LoginField::Password => "Enter your password",
    }
}

fn register_placeholder(field: RegisterField) -> &'static str {
    match field {
        RegisterField::FirstName => "Enter your first name",
        RegisterField::LastName => "Enter your last name",
        RegisterField::Email => "Enter your email",
        RegisterField::Mobile => "Enter 10-digit mobile number",
        RegisterField::ParentName => "Enter parent's name",
        RegisterField::ParentMobile => "Enter parent's mobile number",
        RegisterField::State => "Select state (Left/Right)",
        RegisterField::City => "Enter your city",
        RegisterField::Password => "Create a strong password",
        RegisterField::ConfirmPassword => "Confirm your password",
    }
}

/// Return a rectangle of the given percentage size centered in `area`.
///
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

/// Render the auth modal on top of the current page.
///
pub fn auth_modal(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let auth = state.auth();
    let mode = auth.mode();
    let area = match mode {
        AuthMode::Register => centered_rect(70, 90, size),
        AuthMode::Login => centered_rect(50, 70, size),
        AuthMode::Otp | AuthMode::ForgotPassword => centered_rect(50, 40, size),
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} (Esc to close) ", mode.title()))
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
        ])
        .horizontal_margin(2)
        .split(inner);

    let (heading, subtitle) = match mode {
        AuthMode::Login => (
            "Login to Your Account",
            "Welcome back! Please enter your details.",
        ),
        AuthMode::Register => ("Create Account", "Register to create your account"),
        AuthMode::Otp => ("Login via OTP", "Enter your email to receive OTP"),
        AuthMode::ForgotPassword => ("Forgot Password", "Enter your email to reset password"),
    };
    frame.render_widget(
        Paragraph::new(vec![
            Line::from(Span::styled(heading, styling::heading_style(theme))),
            Line::from(Span::styled(subtitle, styling::muted_text_style(theme))),
        ]),
        rows[0],
    );

    let (lines, focused_line) = match mode {
        AuthMode::Login => form_lines(auth.login(), state.login_focus(), login_placeholder, theme),
        AuthMode::Register => form_lines(
            auth.register(),
            state.register_focus(),
            register_placeholder,
            theme,
        ),
        AuthMode::Otp | AuthMode::ForgotPassword => (vec![], 0),
    };
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll_offset(focused_line, rows[1].height), 0)),
        rows[1],
    );

    let busy_label = match mode {
        AuthMode::Register => "Registering...",
        _ => "Logging in...",
    };
    frame.render_widget(
        Paragraph::new(status_line(
            auth.submission(),
            state.get_spinner_index(),
            busy_label,
            theme,
        )),
        rows[2],
    );

    let action = match mode {
        AuthMode::Login => " Login (Enter) ",
        AuthMode::Register => " Register (Enter) ",
        AuthMode::Otp | AuthMode::ForgotPassword => " ← Back to Login (Enter) ",
    };
    let action_style = if auth.submission().is_submitting() {
        styling::muted_text_style(theme)
    } else {
        styling::active_tab_style(theme)
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(action, action_style))),
        rows[3],
    );

    let links = match mode {
        AuthMode::Login => vec![
            "Ctrl-O Login via OTP",
            "Ctrl-F Forgot Password?",
            "Ctrl-R Don't have an account? Register",
        ],
        AuthMode::Register => vec!["Ctrl-L Already have an account? Login"],
        AuthMode::Otp | AuthMode::ForgotPassword => vec!["Ctrl-L Back to Login"],
    };
    let links: Vec<Span> = links
        .into_iter()
        .flat_map(|link| {
            [
                Span::styled(link, styling::normal_text_style(theme)),
                Span::raw("   "),
            ]
        })
        .collect();
    let mut footer = vec![Line::from(links)];
    if mode == AuthMode::Login {
        footer.push(Line::from(Span::styled(
            "By continuing, you agree to our Terms & Conditions",
            styling::muted_text_style(theme),
        )));
    }
    frame.render_widget(Paragraph::new(footer), rows[4]);
}
