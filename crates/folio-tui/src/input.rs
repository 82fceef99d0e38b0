use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    ScrollPageDown,
    ScrollPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    /// Click the nth nav link
    NavClick(usize),
    NextSection,
    PrevSection,
    HireMe,
    NextLink,
    PrevLink,
    OpenLink,
    Help,
    ExitMode,
    /// "Go Home" on the not-found view
    GoHome,
    /// Mouse wheel, in rows (negative = up)
    ScrollWheel(i32),
    /// Left click at (column, row)
    ClickAt(u16, u16),
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    // Any key closes the help overlay
    if app.mode == Mode::Help {
        return Action::ExitMode;
    }

    let binding = KeyBinding::from_event(&key);

    let action = if keymap.is_g_prefix(&binding) {
        if app.pending_key == Some('g') {
            keymap.get_pending_g_action().cloned().unwrap_or(Action::None)
        } else {
            Action::PendingG
        }
    } else {
        keymap.get(&binding).cloned().unwrap_or(Action::None)
    };

    if app.is_not_found() {
        return not_found_action(action);
    }
    action
}

/// The not-found view only knows how to quit and go home
fn not_found_action(action: Action) -> Action {
    match action {
        Action::Quit | Action::Help => action,
        Action::OpenLink | Action::ExitMode | Action::JumpToTop | Action::NextLink => {
            Action::GoHome
        }
        _ => Action::None,
    }
}

/// Handle a mouse event and return the corresponding action
pub fn handle_mouse_event(mouse: MouseEvent, app: &App) -> Action {
    if app.mode == Mode::Help {
        return match mouse.kind {
            MouseEventKind::Down(_) => Action::ExitMode,
            _ => Action::None,
        };
    }

    let rows = app.config.ui.scroll.wheel_lines.max(1) as i32;
    match mouse.kind {
        MouseEventKind::ScrollDown => Action::ScrollWheel(rows),
        MouseEventKind::ScrollUp => Action::ScrollWheel(-rows),
        MouseEventKind::Down(MouseButton::Left) => Action::ClickAt(mouse.column, mouse.row),
        _ => Action::None,
    }
}
