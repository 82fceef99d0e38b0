mod nav_bar;
mod not_found;
mod page_view;
mod popup;
mod status_bar;

pub use nav_bar::NavBarWidget;
pub use not_found::NotFoundWidget;
pub use page_view::PageViewWidget;
pub use popup::PopupWidget;
pub use status_bar::StatusBarWidget;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

use crate::app::{App, Mode, View};

/// Rows taken by the nav bar (link row plus its bottom rule)
pub const NAV_HEIGHT: u16 = 2;

/// Draw the whole application
pub fn render_app(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    let status_height = if app.config.ui.show_status_bar { 1 } else { 0 };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(status_height)])
        .split(area);

    match &mut app.view {
        View::Home(page) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(NAV_HEIGHT), Constraint::Min(1)])
                .split(main_layout[0]);
            // Page first so the nav bar sees the current layout
            PageViewWidget::render(frame, chunks[1], page, &app.theme);
            NavBarWidget::render(frame, chunks[0], page, &app.theme);
        }
        View::NotFound(view) => {
            NotFoundWidget::render(frame, main_layout[0], view, &app.theme);
        }
    }

    if status_height > 0 {
        StatusBarWidget::render(frame, main_layout[1], app);
    }

    if app.mode == Mode::Help {
        PopupWidget::render_help(frame, &app.config.keymap, &app.theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use folio_core::{AppConfig, Location};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    use crate::theme::Theme;

    fn app(location: &str) -> App {
        App::new(
            Arc::new(AppConfig::default()),
            Theme::default(),
            Location::parse(location),
        )
    }

    fn draw(terminal: &mut Terminal<TestBackend>, app: &mut App) {
        terminal.draw(|frame| render_app(frame, app)).unwrap();
    }

    fn row_text(buffer: &Buffer, y: u16) -> String {
        (0..buffer.area.width)
            .map(|x| buffer[(x, y)].symbol().to_string())
            .collect()
    }

    #[test]
    fn test_indicator_matches_active_link_rect() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = app("/");
        let now = Instant::now();
        draw(&mut terminal, &mut app);
        app.frame(now);
        draw(&mut terminal, &mut app);

        let theme = app.theme.clone();
        let page = app.page().unwrap();
        let geometry = page.indicator().geometry();
        assert!(!page.indicator().is_stale());
        assert!(!geometry.is_empty());

        // The indicator sits under the "Projects" label
        let row = row_text(terminal.backend().buffer(), geometry.top);
        let under: String = row
            .chars()
            .skip(geometry.left as usize)
            .take(geometry.width as usize)
            .collect();
        assert_eq!(under.trim(), "Projects");
        let cell = &terminal.backend().buffer()[(geometry.left, geometry.top)];
        assert_eq!(cell.bg, theme.indicator);
    }

    #[test]
    fn test_indicator_follows_resize() {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        let mut app = app("/");
        let now = Instant::now();
        draw(&mut terminal, &mut app);
        app.handle_action(crate::input::Action::NavClick(1), now);
        app.frame(now);
        draw(&mut terminal, &mut app);
        let wide = app.page().unwrap().indicator().geometry();

        terminal.backend_mut().resize(80, 30);
        app.frame(now + Duration::from_millis(16));
        draw(&mut terminal, &mut app);
        let narrow = app.page().unwrap().indicator().geometry();

        assert_ne!(wide.left, narrow.left);
        let row = row_text(terminal.backend().buffer(), narrow.top);
        let under: String = row
            .chars()
            .skip(narrow.left as usize)
            .take(narrow.width as usize)
            .collect();
        assert_eq!(under.trim(), "Skills");
    }

    #[test]
    fn test_narrow_terminal_hides_links_without_panic() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let mut app = app("/#contact");
        let now = Instant::now();
        for i in 0..5 {
            app.frame(now + Duration::from_millis(16 * i));
            draw(&mut terminal, &mut app);
        }
        let page = app.page().unwrap();
        assert_eq!(page.tracker().active_anchor(), Some("contact"));
        // No link drawn, so nothing to place the indicator on
        assert!(page.indicator().is_stale());
    }

    #[test]
    fn test_not_found_renders_and_reports_once() {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        let mut app = app("/does-not-exist");
        let ((), logs) = crate::testing::capture_logs(|| {
            for _ in 0..3 {
                draw(&mut terminal, &mut app);
            }
        });
        assert_eq!(
            logs.matches("404 Error: User attempted to access non-existent route: /does-not-exist")
                .count(),
            1,
            "{}",
            logs
        );
        assert!(logs.contains("ERROR"), "{}", logs);
        let View::NotFound(view) = &app.view else {
            panic!("expected not-found view");
        };
        assert!(view.is_reported());

        let buffer = terminal.backend().buffer();
        let text: Vec<String> = (0..buffer.area.height).map(|y| row_text(buffer, y)).collect();
        assert!(text.iter().any(|r| r.contains("404")));
        assert!(text.iter().any(|r| r.contains("Page not found")));
        let button_row = text.iter().position(|r| r.contains("Go Home")).unwrap() as u16;
        let column = text[button_row as usize].find("Go Home").unwrap() as u16;

        // Clicking the button goes home
        app.handle_action(
            crate::input::Action::ClickAt(column, button_row),
            Instant::now(),
        );
        assert!(!app.is_not_found());
    }

    #[test]
    fn test_status_bar_shows_location() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut app = app("/");
        let now = Instant::now();
        draw(&mut terminal, &mut app);
        app.handle_action(crate::input::Action::HireMe, now);
        app.frame(now);
        draw(&mut terminal, &mut app);
        let status = row_text(terminal.backend().buffer(), 19);
        assert!(status.contains("/#contact"), "{}", status);
        assert!(status.contains("Contact"), "{}", status);
    }

    #[test]
    fn test_help_overlay() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let mut app = app("/");
        app.mode = Mode::Help;
        draw(&mut terminal, &mut app);
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height).map(|y| row_text(buffer, y)).collect();
        assert!(text.contains("Keys"));
        assert!(text.contains("hire me"));
    }

    #[test]
    fn test_status_bar_error_uses_error_color() {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        let mut app = app("/");
        app.set_error("Failed to open link: no browser");
        draw(&mut terminal, &mut app);

        let buffer = terminal.backend().buffer();
        let status = row_text(buffer, 19);
        assert!(status.contains("Failed to open link"), "{}", status);
        assert!(!status.contains("NORMAL"), "{}", status);
        assert_eq!(buffer[(2, 19)].fg, app.theme.error);

        // The next scroll brings the location back
        app.handle_action(crate::input::Action::ScrollDown, Instant::now());
        draw(&mut terminal, &mut app);
        let status = row_text(terminal.backend().buffer(), 19);
        assert!(status.contains("NORMAL"), "{}", status);
    }
}
