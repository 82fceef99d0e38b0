//! Section renderers: content registry in, styled lines out.
//!
//! Every renderer is a pure function of the terminal width and the theme.
//! Links are recorded with the line they were drawn on so the page can
//! focus and activate them.

pub mod achievements;
pub mod contact;
pub mod education;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;

use folio_core::content::{LinkTarget, PageLink, Section};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::Theme;

/// Narrowest width the renderers lay out for; narrower terminals clip
pub const MIN_WIDTH: u16 = 24;

/// Rendered lines of one section
#[derive(Debug, Clone)]
pub struct SectionBlock {
    pub section: Section,
    pub lines: Vec<Line<'static>>,
    pub links: Vec<BlockLink>,
}

impl SectionBlock {
    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

/// A link and the block-relative line it is drawn on
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockLink {
    pub link: PageLink,
    pub line: usize,
}

/// Render one section
pub fn render(section: Section, width: u16, theme: &Theme) -> SectionBlock {
    let width = width.max(MIN_WIDTH);
    match section {
        Section::Hero => hero::render(width, theme),
        Section::Projects => projects::render(width, theme),
        Section::Skills => skills::render(width, theme),
        Section::Education => education::render(width, theme),
        Section::Achievements => achievements::render(width, theme),
        Section::Contact => contact::render(width, theme),
        Section::Footer => footer::render(width, theme),
    }
}

/// Glyph shown in front of a link, by where it leads
fn link_glyph(target: &LinkTarget) -> &'static str {
    match target {
        LinkTarget::Anchor(_) => "→",
        LinkTarget::External(_) => "↗",
        LinkTarget::Asset(_) => "⤓",
    }
}

/// Accumulates the lines of a section
pub(crate) struct BlockBuilder<'t> {
    section: Section,
    width: u16,
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    links: Vec<BlockLink>,
    in_card: bool,
}

const CARD_GUTTER: &str = "│ ";

impl<'t> BlockBuilder<'t> {
    pub fn new(section: Section, width: u16, theme: &'t Theme) -> Self {
        Self {
            section,
            width,
            theme,
            lines: Vec::new(),
            links: Vec::new(),
            in_card: false,
        }
    }

    pub fn theme(&self) -> &'t Theme {
        self.theme
    }

    /// Columns available to content at the current nesting
    pub fn inner_width(&self) -> usize {
        let gutter = if self.in_card { CARD_GUTTER.width() } else { 0 };
        (self.width as usize).saturating_sub(gutter).max(1)
    }

    /// Push a line and return its block-relative index
    pub fn push(&mut self, line: Line<'static>) -> usize {
        let line = if self.in_card {
            let mut spans = vec![Span::styled(CARD_GUTTER, self.theme.border())];
            spans.extend(line.spans);
            Line::from(spans)
        } else {
            line
        };
        self.lines.push(line);
        self.lines.len() - 1
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Section heading with a gradient rule underneath
    pub fn heading(&mut self, text: &str) {
        let text = truncate(text, self.inner_width());
        let rule_width = text.width();
        self.push(Line::from(Span::styled(text, self.theme.heading())).centered());
        let rule: Vec<Span<'static>> = (0..rule_width)
            .map(|i| {
                let color = self.theme.gradient(i * 3 / rule_width.max(1));
                Span::styled("━", Style::default().fg(color))
            })
            .collect();
        self.push(Line::from(rule).centered());
        self.blank();
    }

    /// Word-wrapped text
    pub fn paragraph(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.inner_width()) {
            self.push(Line::from(Span::styled(row, style)));
        }
    }

    /// Word-wrapped, centered text
    pub fn centered(&mut self, text: &str, style: Style) {
        for row in wrap(text, self.inner_width()) {
            self.push(Line::from(Span::styled(row, style)).centered());
        }
    }

    /// A focusable link line. `display` is the visible text after the glyph.
    pub fn link(&mut self, link: PageLink, display: &str) {
        let glyph = link_glyph(&link.target);
        let room = self.inner_width().saturating_sub(glyph.width() + 1);
        let line = Line::from(vec![
            Span::styled(format!("{} ", glyph), Style::default().fg(self.theme.accent)),
            Span::styled(truncate(display, room), self.theme.link_text()),
        ]);
        let idx = self.push(line);
        self.links.push(BlockLink { link, line: idx });
    }

    /// Items rendered as `[ item ]` chips, wrapped to the width
    pub fn chips<'a, I>(&mut self, items: I, style: Style)
    where
        I: IntoIterator<Item = &'a str>,
    {
        let max = self.inner_width();
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut used = 0;
        for item in items {
            let chip = truncate(&format!("[ {} ]", item), max);
            let w = chip.width();
            let sep = if row.is_empty() { 0 } else { 1 };
            if used + sep + w > max && !row.is_empty() {
                self.push(Line::from(std::mem::take(&mut row)));
                used = 0;
            }
            if !row.is_empty() {
                row.push(Span::raw(" "));
                used += 1;
            }
            row.push(Span::styled(chip, style));
            used += w;
        }
        if !row.is_empty() {
            self.push(Line::from(row));
        }
    }

    pub fn open_card(&mut self) {
        let rule = "─".repeat((self.width as usize).saturating_sub(1));
        self.lines.push(Line::from(Span::styled(
            format!("╭{}", rule),
            self.theme.border(),
        )));
        self.in_card = true;
    }

    pub fn close_card(&mut self) {
        self.in_card = false;
        let rule = "─".repeat((self.width as usize).saturating_sub(1));
        self.lines.push(Line::from(Span::styled(
            format!("╰{}", rule),
            self.theme.border(),
        )));
    }

    pub fn finish(self) -> SectionBlock {
        SectionBlock {
            section: self.section,
            lines: self.lines,
            links: self.links,
        }
    }
}

/// Greedy word wrap by display width. Words wider than `width` are split.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if word.width() <= width {
            current.push_str(word);
            continue;
        }

        // Hard split of an over-long word
        let mut used = 0;
        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if used + w > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                used = 0;
            }
            current.push(ch);
            used += w;
        }
    }

    if !current.is_empty() {
        rows.push(current);
    }
    rows
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis
pub fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

/// Bold text in the heading color
pub(crate) fn title_style(theme: &Theme) -> Style {
    Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD)
}
