pub mod app;
pub mod event;
pub mod input;
pub mod keymap;
pub mod page;
pub mod scroll;
pub mod sections;
pub mod theme;
pub mod themes;
pub mod widgets;

#[cfg(test)]
mod testing;

pub use app::App;
pub use page::Page;
pub use theme::Theme;
pub use themes::{available_themes, load_theme};
