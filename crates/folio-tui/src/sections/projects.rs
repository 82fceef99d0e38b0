use folio_core::content::{section_links, Project, Section, PROJECTS};
use ratatui::{
    style::Style,
    text::{Line, Span},
};

use super::{title_style, truncate, BlockBuilder, SectionBlock};
use crate::theme::Theme;

/// Carousel slot: the first image and one dot per image
fn carousel(project: &Project, theme: &Theme, width: usize) -> Line<'static> {
    let Some(first) = project.images.first() else {
        return Line::from(Span::styled(
            truncate("▣ no preview", width),
            theme.muted_text(),
        ));
    };

    let dots: String = (0..project.images.len())
        .map(|i| if i == 0 { '●' } else { '○' })
        .collect();
    let room = width.saturating_sub(dots.chars().count() + 3);
    Line::from(vec![
        Span::styled("▣ ", Style::default().fg(theme.blue)),
        Span::styled(truncate(first, room), theme.muted_text()),
        Span::raw(" "),
        Span::styled(dots, Style::default().fg(theme.pink)),
    ])
}

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Projects, width, theme);
    b.heading(Section::Projects.heading());

    let links = section_links(Section::Projects);
    for (project, link) in PROJECTS.iter().zip(links) {
        b.open_card();
        b.push(carousel(project, theme, b.inner_width()));
        b.push(Line::from(Span::styled(
            truncate(project.title, b.inner_width()),
            title_style(theme),
        )));
        b.chips(
            project.stack.iter().copied(),
            Style::default().fg(theme.purple),
        );
        let display = match link.host() {
            Some(host) => format!("View on {}", host),
            None => "View".to_string(),
        };
        b.link(link, &display);
        b.close_card();
        b.blank();
    }

    b.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_carousel_without_images() {
        let project = Project {
            title: "Empty",
            images: &[],
            stack: &[],
            href: "https://example.com",
        };
        let line = carousel(&project, &Theme::default(), 40);
        assert_eq!(text(&line), "▣ no preview");
    }

    #[test]
    fn test_carousel_dots_per_image() {
        let line = carousel(&PROJECTS[0], &Theme::default(), 60);
        let s = text(&line);
        assert!(s.starts_with("▣ /baatchit2.png"));
        assert!(s.ends_with("●○"));
    }

    #[test]
    fn test_one_card_per_project() {
        let block = render(60, &Theme::default());
        let tops = block
            .lines
            .iter()
            .filter(|l| text(l).starts_with('╭'))
            .count();
        assert_eq!(tops, PROJECTS.len());
    }
}
