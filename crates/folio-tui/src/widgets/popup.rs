use folio_core::config::KeymapConfig;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::theme::Theme;

pub struct PopupWidget;

impl PopupWidget {
    /// Render the key help overlay
    pub fn render_help(frame: &mut Frame, keymap: &KeymapConfig, theme: &Theme) {
        let rows = help_rows(keymap);
        let area = frame.area();

        let popup_width = 46u16.min(area.width.saturating_sub(4));
        let popup_height = (rows.len() as u16 + 4).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        // Clear the background area
        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg1));

        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(keys, what)| {
                Line::from(vec![
                    Span::styled(
                        format!(" {:<14}", keys),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(what, Style::default().fg(theme.fg1)),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.muted),
            ))
            .centered(),
        );

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

fn help_rows(keymap: &KeymapConfig) -> Vec<(String, &'static str)> {
    vec![
        (format!("{} / {}", keymap.scroll_down, keymap.scroll_up), "scroll"),
        (
            format!("{} / {}", keymap.scroll_half_down, keymap.scroll_half_up),
            "half page",
        ),
        (
            format!("{} / {}", keymap.scroll_page_down, keymap.scroll_page_up),
            "full page",
        ),
        (
            format!("{} / {}", keymap.jump_to_top, keymap.jump_to_bottom),
            "top / bottom",
        ),
        ("1-4".to_string(), "go to section"),
        (
            format!("{} / {}", keymap.next_section, keymap.prev_section),
            "next / previous section",
        ),
        (keymap.hire_me.clone(), "hire me"),
        (
            format!("{} / {}", keymap.next_link, keymap.prev_link),
            "focus link",
        ),
        (keymap.open_link.clone(), "open link"),
        (keymap.quit.clone(), "quit"),
    ]
}

/// Helper function to create a centered rect
pub(crate) fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
