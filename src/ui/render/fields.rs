use crate::forms::{Field, FormState, FormValues, SubmissionState};
use crate::ui::theme::Theme;
use crate::ui::widgets::{spinner::spinner, styling};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

const SECRET_MASK: char = '•';

/// Return the text shown for a field value.
///
pub fn display_value<F: Field>(field: F, value: &str) -> String {
    if field.secret() {
        SECRET_MASK.to_string().repeat(value.chars().count())
    } else {
        value.to_string()
    }
}

/// Build the lines for every field of a form: a label line, the value line
/// and, for touched fields with an error, an error line. Fields that accept
/// an empty value are not marked as required. Also returns the index of
/// the focused field's label line.
///
pub fn form_lines<V: FormValues>(
    form: &FormState<V>,
    focused: V::Field,
    placeholder: impl Fn(V::Field) -> &'static str,
    theme: &Theme,
) -> (Vec<Line<'static>>, usize) {
    let mut lines = vec![];
    let mut focused_line = 0;
    let blank = V::default();
    for field in V::Field::ALL {
        let field = *field;
        let is_focused = field == focused;
        if is_focused {
            focused_line = lines.len();
        }
        let label_style = if is_focused {
            styling::heading_style(theme)
        } else {
            styling::normal_text_style(theme)
        };
        let required = if blank.validate_field(field).is_err() {
            " *"
        } else {
            ""
        };
        lines.push(Line::from(Span::styled(
            format!("{}{}", field.label(), required),
            label_style,
        )));

        let value = form.value(field);
        let marker = if is_focused { "› " } else { "  " };
        let mut spans = vec![Span::styled(marker, styling::heading_style(theme))];
        if value.is_empty() {
            spans.push(Span::styled(
                placeholder(field),
                styling::muted_text_style(theme).add_modifier(Modifier::ITALIC),
            ));
        } else if field.picker() {
            spans.push(Span::styled(
                format!("◀ {} ▶", value),
                styling::normal_text_style(theme),
            ));
        } else {
            spans.push(Span::styled(
                display_value(field, value),
                styling::normal_text_style(theme),
            ));
        }
        if is_focused && !field.picker() {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(theme.primary.to_color()),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(error) = form.visible_error(field) {
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                styling::field_error_style(theme),
            )));
        }
    }
    (lines, focused_line)
}

/// Scroll offset that keeps `focused_line` and the two lines after it
/// inside a viewport of `height` lines.
///
pub fn scroll_offset(focused_line: usize, height: u16) -> u16 {
    let bottom = focused_line + 3;
    let height = usize::from(height);
    u16::try_from(bottom.saturating_sub(height)).unwrap_or(u16::MAX)
}

/// Build the status line shown above the submit control.
///
pub fn status_line(
    submission: &SubmissionState,
    spinner_index: usize,
    busy_label: &'static str,
    theme: &Theme,
) -> Line<'static> {
    if submission.is_submitting() {
        return Line::from(spinner(spinner_index, busy_label, theme));
    }
    match submission.message() {
        Some(message) => Line::from(Span::styled(
            message.text.clone(),
            styling::status_message_style(message.kind, theme),
        )),
        None => Line::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactField, ContactValues, LoginField};

    #[test]
    fn secret_values_are_masked() {
        assert_eq!(display_value(LoginField::Password, "Abcd1234"), "••••••••");
        assert_eq!(
            display_value(LoginField::Email, "asha@example.com"),
            "asha@example.com"
        );
    }

    #[test]
    fn untouched_errors_are_hidden() {
        let theme = Theme::default();
        let mut form = FormState::<ContactValues>::new();
        let (lines, focused_line) = form_lines(&form, ContactField::FullName, |_| "", &theme);
        assert_eq!(lines.len(), ContactField::ALL.len() * 2);
        assert_eq!(focused_line, 0);

        form.blur(ContactField::Email);
        let (lines, focused_line) = form_lines(&form, ContactField::Mobile, |_| "", &theme);
        assert_eq!(lines.len(), ContactField::ALL.len() * 2 + 1);
        assert_eq!(focused_line, 5);
    }

    #[test]
    fn pincode_is_not_marked_required() {
        let theme = Theme::default();
        let form = FormState::<ContactValues>::new();
        let (lines, _) = form_lines(&form, ContactField::FullName, |_| "", &theme);
        assert_eq!(lines[0].spans[0].content, "Full name *");
        assert_eq!(lines[10].spans[0].content, "Pincode");
    }

    #[test]
    fn scrolls_only_when_focus_leaves_viewport() {
        assert_eq!(scroll_offset(0, 10), 0);
        assert_eq!(scroll_offset(7, 10), 0);
        assert_eq!(scroll_offset(12, 10), 5);
    }
}
