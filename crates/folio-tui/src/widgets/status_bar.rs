use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::{App, Mode, StatusKind};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let mode_str = match (&app.mode, app.is_not_found()) {
            (Mode::Help, _) => "HELP",
            (Mode::Normal, true) => "404",
            (Mode::Normal, false) => "NORMAL",
        };

        let status_fg = match app.status_message.as_ref().map(|m| m.kind) {
            Some(StatusKind::Error) => theme.error,
            Some(StatusKind::Info) => theme.info,
            None => theme.fg0,
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {}", msg.text)
        } else {
            match app.page() {
                Some(page) => {
                    let active = page
                        .tracker()
                        .active()
                        .map(|l| l.label)
                        .unwrap_or("-");
                    format!(
                        " {} | {} | {} | {}%",
                        mode_str,
                        app.location_label(),
                        active,
                        page.percent()
                    )
                }
                None => format!(" {} | {}", mode_str, app.location_label()),
            }
        };

        let help_hint = if app.is_not_found() {
            " q:quit <CR>:go home "
        } else {
            " q:quit j/k:scroll 1-4:sections tab:links ?:help "
        };
        let help_hint = if status_text.width() + help_hint.width() > area.width as usize {
            ""
        } else {
            help_hint
        };
        let padding_len = (area.width as usize)
            .saturating_sub(status_text.width() + help_hint.width());

        let line = Line::from(vec![
            Span::styled(
                status_text,
                Style::default()
                    .fg(status_fg)
                    .bg(theme.bg2)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.muted).bg(theme.bg2)),
        ]);

        frame.render_widget(Paragraph::new(line), area);
    }
}
