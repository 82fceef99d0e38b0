use folio_core::content::{skill_row, Section};
use ratatui::style::Style;

use super::{BlockBuilder, SectionBlock};
use crate::theme::Theme;

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Skills, width, theme);
    b.heading(Section::Skills.heading());

    let first = skill_row(0);
    b.chips(first.iter().map(|s| s.name), Style::default().fg(theme.blue));
    b.blank();

    // The second row runs the other way
    let second = skill_row(1);
    b.chips(
        second.iter().rev().map(|s| s.name),
        Style::default().fg(theme.pink),
    );
    b.blank();

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_row_reversed() {
        let block = render(200, &Theme::default());
        let rows: Vec<String> = block
            .lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .filter(|s: &String| s.starts_with("[ "))
            .collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("[ React ]"));
        // Row 2 lists React last, so reversed it comes first
        assert!(rows[1].starts_with("[ React ]"));
        assert!(rows[1].ends_with("[ Bootstrap ]"));
    }
}
