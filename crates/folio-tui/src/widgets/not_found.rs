use folio_core::IndicatorGeometry;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::NotFoundView;
use crate::theme::Theme;

const BUTTON: &str = " Go Home ";

pub struct NotFoundWidget;

impl NotFoundWidget {
    /// Draw "404 / Page not found / Go Home". The missing route is
    /// reported on the first draw only.
    pub fn render(frame: &mut Frame, area: Rect, view: &mut NotFoundView, theme: &Theme) {
        view.report();

        let lines = vec![
            Line::from(Span::styled(
                "404",
                Style::default().fg(theme.fg0).add_modifier(Modifier::BOLD),
            ))
            .centered(),
            Line::default(),
            Line::from(Span::styled("Page not found", Style::default().fg(theme.muted)))
                .centered(),
            Line::default(),
            Line::from(Span::styled(
                BUTTON,
                Style::default()
                    .fg(theme.fg0)
                    .bg(theme.purple)
                    .add_modifier(Modifier::BOLD),
            ))
            .centered(),
        ];

        let height = lines.len() as u16;
        let top = area.y + area.height.saturating_sub(height) / 2;
        let content = Rect::new(area.x, top, area.width, height.min(area.height));

        frame.render_widget(
            Block::default().style(Style::default().bg(theme.bg0)),
            area,
        );
        frame.render_widget(Paragraph::new(lines), content);

        // Button row, centered the way Paragraph centers lines
        let button_w = (BUTTON.width() as u16).min(area.width);
        let button_row = top + height - 1;
        if button_row < area.y + area.height {
            let left = area.x + (area.width / 2).saturating_sub(button_w / 2);
            view.set_button(Some(IndicatorGeometry::new(left, button_row, button_w, 1)));
        } else {
            view.set_button(None);
        }
    }
}
