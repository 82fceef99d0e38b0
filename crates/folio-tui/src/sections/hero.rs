use folio_core::content::{section_links, LinkTarget, Section, PROFILE};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};

use super::{truncate, BlockBuilder, SectionBlock};
use crate::theme::Theme;

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Hero, width, theme);

    b.blank();
    b.blank();
    // Name, one neon color per word
    let name = truncate(PROFILE.name, b.inner_width());
    let mut spans = Vec::new();
    for (i, word) in name.split(' ').enumerate() {
        if i > 0 {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            word.to_string(),
            Style::default()
                .fg(theme.gradient(i))
                .add_modifier(Modifier::BOLD),
        ));
    }
    b.push(Line::from(spans));
    b.push(Line::from(Span::styled(
        truncate(PROFILE.role, b.inner_width()),
        theme.muted_text().add_modifier(Modifier::BOLD),
    )));
    b.blank();
    b.paragraph(PROFILE.tagline, Style::default().fg(theme.fg1));
    b.blank();

    for link in section_links(Section::Hero) {
        let display = match link.target {
            LinkTarget::External(_) => match link.host() {
                Some(host) => format!("{}  {}", link.label, host),
                None => link.label.clone(),
            },
            _ => link.label.clone(),
        };
        b.link(link, &display);
    }
    b.blank();

    b.finish()
}
