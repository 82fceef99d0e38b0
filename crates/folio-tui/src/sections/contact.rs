use folio_core::content::{section_links, Section, PROFILE};
use ratatui::style::Style;

use super::{BlockBuilder, SectionBlock};
use crate::theme::Theme;

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Contact, width, theme);
    b.heading(Section::Contact.heading());
    b.centered(PROFILE.contact_blurb, Style::default().fg(theme.muted));
    b.blank();

    for link in section_links(Section::Contact) {
        let display = match link.host() {
            Some(host) => format!("{}  {}", link.label, host),
            None => link.label.clone(),
        };
        b.link(link, &display);
    }
    b.blank();

    b.finish()
}
