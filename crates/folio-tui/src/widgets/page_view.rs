use ratatui::{
    layout::Rect,
    style::Style,
    widgets::{Block, Paragraph},
    Frame,
};

use crate::page::Page;
use crate::theme::Theme;

pub struct PageViewWidget;

impl PageViewWidget {
    /// Draw the visible slice of the page. Also keeps the page's viewport
    /// in step with the area it is drawn in.
    pub fn render(frame: &mut Frame, area: Rect, page: &mut Page, theme: &Theme) {
        page.resize(area.width, area.height);
        page.set_viewport_top(area.y);

        let lines = page.layout().lines();
        let start = (page.scroll() as usize).min(lines.len());
        let end = (start + area.height as usize).min(lines.len());
        let mut visible = lines[start..end].to_vec();

        // Highlight the focused link's row
        if let Some(focused) = page.focused_link() {
            let row = focused.row as usize;
            if (start..end).contains(&row) {
                let line = &mut visible[row - start];
                *line = std::mem::take(line).style(Style::default().bg(theme.selection));
            }
        }

        let paragraph = Paragraph::new(visible)
            .block(Block::default().style(Style::default().bg(theme.bg0).fg(theme.fg0)));
        frame.render_widget(paragraph, area);
    }
}
