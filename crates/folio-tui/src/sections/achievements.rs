use folio_core::content::{section_links, Section, ACHIEVEMENTS};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{title_style, truncate, BlockBuilder, SectionBlock};
use crate::theme::Theme;

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Achievements, width, theme);
    b.heading(Section::Achievements.heading());

    let links = section_links(Section::Achievements);
    for (achievement, link) in ACHIEVEMENTS.iter().zip(links) {
        b.open_card();
        let room = b.inner_width().saturating_sub(2);
        b.push(Line::from(vec![
            Span::styled("▣ ", Style::default().fg(theme.purple)),
            Span::styled(truncate(achievement.image, room), theme.muted_text()),
        ]));
        b.push(Line::from(Span::styled(
            truncate(achievement.title, b.inner_width()),
            title_style(theme),
        )));
        b.paragraph(achievement.issuer, theme.muted_text());
        b.link(link, "View credential");
        b.close_card();
        b.blank();
    }

    b.finish()
}
