use super::Frame;
use crate::forms::regions::format_mobile;
use crate::state::{Page, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Render the navigation bar: brand, page tabs and account status.
///
pub fn navbar(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(0),
            Constraint::Length(44),
        ])
        .split(inner);

    let brand = Paragraph::new(Span::styled(" EduCoach", styling::heading_style(theme)));
    frame.render_widget(brand, columns[0]);

    let mut tabs = vec![];
    for (i, page) in Page::ALL.iter().enumerate() {
        let label = format!(" F{} {} ", i + 1, page.title());
        let style = if *page == state.current_page() {
            styling::active_tab_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        tabs.push(Span::styled(label, style));
        tabs.push(Span::raw(" "));
    }
    frame.render_widget(Paragraph::new(Line::from(tabs)), columns[1]);

    let account = match state.get_user() {
        Some(user) => Line::from(vec![
            Span::styled(user.full_name.clone(), styling::heading_style(theme)),
            Span::styled(
                format!(" {} ", format_mobile(&user.mobile)),
                styling::muted_text_style(theme),
            ),
            Span::styled("F4 Logout ", styling::normal_text_style(theme)),
        ]),
        None => Line::from(Span::styled(
            "F4 Login ",
            styling::normal_text_style(theme),
        )),
    };
    frame.render_widget(
        Paragraph::new(account).alignment(Alignment::Right),
        columns[2],
    );
}
