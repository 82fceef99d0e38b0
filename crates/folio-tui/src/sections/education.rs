use folio_core::content::{EducationKind, Section, EDUCATION};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{title_style, truncate, BlockBuilder, SectionBlock};
use crate::theme::Theme;

fn glyph(kind: EducationKind) -> &'static str {
    match kind {
        EducationKind::College => "✦",
        EducationKind::School => "◆",
    }
}

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Education, width, theme);
    b.heading(Section::Education.heading());

    for (i, entry) in EDUCATION.iter().enumerate() {
        b.open_card();
        let room = b.inner_width().saturating_sub(2);
        b.push(Line::from(vec![
            Span::styled(
                format!("{} ", glyph(entry.kind)),
                Style::default().fg(theme.gradient(i)),
            ),
            Span::styled(truncate(entry.institution, room), title_style(theme)),
        ]));
        b.paragraph(entry.program, Style::default().fg(theme.fg1));
        b.push(Line::from(Span::styled(
            truncate(&format!("[ {} ]", entry.period), b.inner_width()),
            Style::default().fg(theme.accent),
        )));
        b.close_card();
        b.blank();
    }

    b.finish()
}
