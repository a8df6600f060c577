use crate::ui::theme::Theme;
use ratatui::{style::Style, text::Span};

/// Braille frames cycled once per tick while a submission is in flight.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Return a span for the spinner frame at `index`.
///
pub fn spinner<'a>(index: usize, label: &'a str, theme: &Theme) -> Span<'a> {
    Span::styled(
        format!("{} {}", FRAMES[index % FRAMES.len()], label),
        Style::default().fg(theme.info.to_color()),
    )
}
