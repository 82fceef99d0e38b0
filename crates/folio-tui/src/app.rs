use std::sync::Arc;
use std::time::Instant;

use folio_core::content::LinkTarget;
use folio_core::{AppConfig, IndicatorGeometry, Location, Route};
use tracing::{debug, error};

use crate::input::Action;
use crate::page::{NavHit, Page};
use crate::theme::Theme;

/// Fallback view for unknown paths
#[derive(Debug)]
pub struct NotFoundView {
    path: String,
    /// Whether the missing route was logged during this visit
    reported: bool,
    /// Where the "Go Home" button was drawn
    button: Option<IndicatorGeometry>,
}

impl NotFoundView {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            reported: false,
            button: None,
        }
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Log the missing route. Only the first call per visit logs.
    pub fn report(&mut self) {
        if !self.reported {
            error!(
                "404 Error: User attempted to access non-existent route: {}",
                self.path
            );
            self.reported = true;
        }
    }

    /// Whether the visit has been logged
    pub fn is_reported(&self) -> bool {
        self.reported
    }

    pub fn set_button(&mut self, rect: Option<IndicatorGeometry>) {
        self.button = rect;
    }

    pub fn hits_button(&self, column: u16, row: u16) -> bool {
        self.button.is_some_and(|r| {
            column >= r.left
                && column < r.left.saturating_add(r.width)
                && row >= r.top
                && row < r.top.saturating_add(r.height)
        })
    }
}

/// What is on screen
pub enum View {
    Home(Box<Page>),
    NotFound(NotFoundView),
}

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Normal,
    /// Key help overlay
    Help,
}

/// How a status message is shown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
}

/// Application state
pub struct App {
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub view: View,
    pub mode: Mode,
    pub should_quit: bool,
    /// Status message shown instead of the location until the next action
    pub status_message: Option<StatusMessage>,
    /// Pending key for multi-key sequences (e.g., 'g' for 'gg')
    pub pending_key: Option<char>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, location: Location) -> Self {
        let view = Self::open(&config, &theme, location);
        Self {
            config,
            theme,
            view,
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
        }
    }

    fn open(config: &AppConfig, theme: &Theme, location: Location) -> View {
        match location.route() {
            Route::Home => View::Home(Box::new(Page::new(config, theme.clone(), location))),
            Route::NotFound(path) => View::NotFound(NotFoundView::new(path)),
        }
    }

    /// Show the view for `location`. The previous view is torn down first.
    pub fn navigate(&mut self, location: Location) {
        debug!("Navigating to {}", location);
        if let View::Home(page) = &mut self.view {
            page.teardown();
        }
        self.view = Self::open(&self.config, &self.theme, location);
        self.mode = Mode::Normal;
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self.view, View::NotFound(_))
    }

    pub fn page(&self) -> Option<&Page> {
        match &self.view {
            View::Home(page) => Some(&**page),
            View::NotFound(_) => None,
        }
    }

    pub fn page_mut(&mut self) -> Option<&mut Page> {
        match &mut self.view {
            View::Home(page) => Some(&mut **page),
            View::NotFound(_) => None,
        }
    }

    /// Current location as shown in the status bar
    pub fn location_label(&self) -> String {
        match &self.view {
            View::Home(page) => page.location().to_string(),
            View::NotFound(view) => view.path().to_string(),
        }
    }

    /// Per-frame update of the current view
    pub fn frame(&mut self, now: Instant) {
        if let Some(page) = self.page_mut() {
            page.frame(now);
        }
    }

    /// Whether the next frame has work to do (drives the fast tick rate)
    pub fn needs_update(&self) -> bool {
        self.page().is_some_and(Page::needs_update)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            text: message.into(),
            kind: StatusKind::Error,
        });
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Apply an action. Outbound links the user activated are returned for
    /// the caller to open.
    pub fn handle_action(&mut self, action: Action, now: Instant) -> Option<LinkTarget> {
        if action == Action::PendingG {
            self.pending_key = Some('g');
            return None;
        }
        self.clear_pending_key();
        if action != Action::None {
            self.clear_status();
        }

        let scroll_lines = self.config.ui.scroll.scroll_lines.max(1) as i32;

        match action {
            Action::Quit => self.should_quit = true,
            Action::Help => self.mode = Mode::Help,
            Action::ExitMode => {
                if self.mode == Mode::Help {
                    self.mode = Mode::Normal;
                } else if let Some(page) = self.page_mut() {
                    page.clear_focus();
                }
            }
            Action::GoHome => self.navigate(Location::default()),
            Action::ClickAt(column, row) => return self.click_at(column, row, now),
            Action::None | Action::PendingG => {}
            other => {
                let page = self.page_mut()?;
                match other {
                    Action::ScrollDown => page.scroll_lines(scroll_lines),
                    Action::ScrollUp => page.scroll_lines(-scroll_lines),
                    Action::ScrollWheel(rows) => page.scroll_lines(rows),
                    Action::ScrollHalfPageDown => page.scroll_half_page(true),
                    Action::ScrollHalfPageUp => page.scroll_half_page(false),
                    Action::ScrollPageDown => page.scroll_page(true),
                    Action::ScrollPageUp => page.scroll_page(false),
                    Action::JumpToTop => page.jump_to_top(now),
                    Action::JumpToBottom => page.jump_to_bottom(now),
                    Action::NavClick(index) => {
                        page.click_nav_index(index, now);
                    }
                    Action::NextSection => {
                        page.next_section(now);
                    }
                    Action::PrevSection => {
                        page.prev_section(now);
                    }
                    Action::HireMe => {
                        page.hire_me(now);
                    }
                    Action::NextLink => page.focus_next_link(now),
                    Action::PrevLink => page.focus_prev_link(now),
                    Action::OpenLink => return page.activate_focused(now),
                    _ => {}
                }
            }
        }
        None
    }

    fn click_at(&mut self, column: u16, row: u16, now: Instant) -> Option<LinkTarget> {
        match &mut self.view {
            View::NotFound(view) => {
                if view.hits_button(column, row) {
                    self.navigate(Location::default());
                }
                None
            }
            View::Home(page) => match page.hit_nav(column, row) {
                Some(NavHit::Brand) => {
                    page.jump_to_top(now);
                    None
                }
                Some(NavHit::HireMe) => {
                    page.hire_me(now);
                    None
                }
                Some(NavHit::Link(anchor)) => {
                    page.click(&anchor, now);
                    None
                }
                None if page.focus_at_screen_row(row) => page.activate_focused(now),
                None => None,
            },
        }
    }
}
