use super::Frame;
use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

const INTRO: &str = "EduCoach is a leading online coaching platform in Maharashtra, offering \
quality education for students from Grade 5 to Grade 10. We teach the Maharashtra Board \
syllabus along with competitive exam preparation such as Navodaya, Scholarship, and \
Pradnyashodh. Classes are available in Marathi, English, and Semi-English mediums, \
focusing on simple explanations, affordable fees, and quality learning.";

const MISSION: &str = "To provide comprehensive, high-quality coaching that empowers students \
from Grade 7 to 10 across all mediums, helping them achieve academic excellence and build a \
strong foundation for their future.";

const VISION: &str = "To be the most trusted educational partner for students in Maharashtra, \
recognized for our commitment to personalized learning, innovative teaching methods, and \
consistent academic results.";

const VALUES: [(&str, &str); 4] = [
    (
        "Excellence in Education",
        "We are committed to providing the highest quality education to all our students.",
    ),
    (
        "Student-Centric Approach",
        "Every student is unique, and we tailor our teaching methods to individual needs.",
    ),
    (
        "Innovation",
        "We embrace modern teaching techniques and technology to enhance learning.",
    ),
    (
        "Integrity",
        "We maintain the highest standards of honesty and ethical practices.",
    ),
];

const STATISTICS: [(&str, &str); 4] = [
    ("5000+", "Students Enrolled"),
    ("98%", "Success Rate"),
    ("50+", "Expert Teachers"),
    ("10+", "Years of Excellence"),
];

const FOUNDERS: [(&str, &str); 3] = [
    ("Aniket Dhokane", "Software Engineer"),
    ("Omkar Raut", "Software Engineer"),
    ("Rohit Dhabale", "Senior Analyst"),
];

const FOUNDER_BIO: &str = "B.Tech. in Education, 5+ years of experience in Tech industry.";

/// Render the about page as one scrolling column of sections.
///
pub fn about(frame: &mut Frame, size: Rect, state: &State) {
    let theme = state.get_theme();
    let heading = |text: &'static str| Line::from(Span::styled(text, styling::heading_style(theme)));
    let body = |text: &'static str| Line::from(Span::styled(text, styling::normal_text_style(theme)));

    let mut lines = vec![heading("About Us"), body(INTRO), Line::default()];
    lines.extend([heading("Our Mission"), body(MISSION), Line::default()]);
    lines.extend([heading("Our Vision"), body(VISION), Line::default()]);

    lines.push(heading("Our Core Values"));
    for (title, description) in VALUES {
        lines.push(Line::from(vec![
            Span::styled(format!("• {}: ", title), styling::banner_style(theme)),
            Span::styled(description, styling::normal_text_style(theme)),
        ]));
    }
    lines.push(Line::default());

    let stats: Vec<Span> = STATISTICS
        .iter()
        .flat_map(|(value, label)| {
            [
                Span::styled(*value, styling::heading_style(theme)),
                Span::styled(format!(" {}   ", label), styling::muted_text_style(theme)),
            ]
        })
        .collect();
    lines.push(Line::from(stats));
    lines.push(Line::default());

    lines.push(heading("Meet Our Founders"));
    for (name, designation) in FOUNDERS {
        lines.push(Line::from(vec![
            Span::styled(name, styling::banner_style(theme)),
            Span::styled(format!(", {}. ", designation), styling::normal_text_style(theme)),
            Span::styled(FOUNDER_BIO, styling::muted_text_style(theme)),
        ]));
    }

    let widget = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .title("About Us")
            .title_style(styling::active_block_title_style())
            .border_style(styling::active_block_border_style(theme)),
    );
    frame.render_widget(widget, size);
}
