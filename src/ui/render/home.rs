use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
};

pub const BANNER: &str = r"
  _____    _        ____                 _
 | ____|__| |_   _ / ___|___   __ _  ___| |__
 |  _| / _` | | | | |   / _ \ / _` |/ __| '_ \
 | |__| (_| | |_| | |__| (_) | (_| | (__| | | |
 |_____\__,_|\__,_|\____\___/ \__,_|\___|_| |_|
";

const FEATURES: [(&str, &str); 3] = [
    (
        "Quality Education",
        "Expert teachers for Marathi, English, and Semi-English mediums",
    ),
    ("Personalized Learning", "Tailored coaching for Grades 7-10"),
    (
        "Proven Results",
        "Track record of excellent academic performance",
    ),
];

/// Render the home page: hero, call to action and feature cards.
///
pub fn home(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Home")
        .title_style(styling::active_block_title_style())
        .border_style(styling::active_block_border_style(theme));
    let inner = block.inner(size);
    frame.render_widget(block, size);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7),
            Constraint::Length(5),
            Constraint::Min(5),
        ])
        .margin(1)
        .split(inner);

    let banner = Text::from(BANNER).patch_style(styling::banner_style(theme));
    frame.render_widget(
        Paragraph::new(banner).alignment(Alignment::Center),
        rows[0],
    );

    let hero = vec![
        Line::from(Span::styled(
            "Welcome to EduCoach",
            styling::heading_style(theme),
        )),
        Line::from(Span::styled(
            "Empowering students from Grade 7 to Grade 10 across all mediums",
            styling::normal_text_style(theme),
        )),
        Line::default(),
        Line::from(Span::styled(
            " Enquire Now (Enter) ",
            styling::active_tab_style(theme),
        )),
    ];
    frame.render_widget(
        Paragraph::new(hero).alignment(Alignment::Center),
        rows[1],
    );

    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 3); 3])
        .split(rows[2]);
    for (card, (title, description)) in cards.iter().zip(FEATURES) {
        let widget = Paragraph::new(description)
            .style(styling::normal_text_style(theme))
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, styling::heading_style(theme)))
                    .border_style(styling::normal_block_border_style(theme)),
            );
        frame.render_widget(widget, *card);
    }
}
