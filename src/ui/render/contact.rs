use super::fields::{form_lines, scroll_offset, status_line};
use super::Frame;
use crate::forms::ContactField;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const INTRO: &str = "Have a question about our coaching? Leave your details and our team will \
get back to you.";

fn placeholder(field: ContactField) -> &'static str {
    match field {
        ContactField::FullName => "Enter your full name",
        ContactField::Email => "Enter your email address",
        ContactField::Mobile => "Enter 10-digit mobile number",
        ContactField::State => "Select state (Left/Right)",
        ContactField::City => "Enter your city",
        ContactField::Pincode => "Enter 6-digit pincode (optional)",
    }
}

/// Render the contact enquiry form.
///
pub fn contact(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let controller = state.contact();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Contact Us")
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .horizontal_margin(2)
        .split(inner);

    frame.render_widget(
        Paragraph::new(INTRO)
            .style(styling::muted_text_style(theme))
            .wrap(Wrap { trim: true }),
        rows[0],
    );

    let (lines, focused_line) =
        form_lines(controller.form(), state.contact_focus(), placeholder, theme);
    frame.render_widget(
        Paragraph::new(lines).scroll((scroll_offset(focused_line, rows[1].height), 0)),
        rows[1],
    );

    frame.render_widget(
        Paragraph::new(status_line(
            controller.submission(),
            state.get_spinner_index(),
            "Submitting...",
            theme,
        )),
        rows[2],
    );

    let submit = if controller.submission().is_submitting() {
        Span::styled(" Submitting... ", styling::muted_text_style(theme))
    } else {
        Span::styled(" Submit (Enter) ", styling::active_tab_style(theme))
    };
    frame.render_widget(Paragraph::new(Line::from(submit)), rows[3]);
}
