use chrono::{Datelike, Local};
use folio_core::content::{Section, PROFILE};

use super::{BlockBuilder, SectionBlock};
use crate::theme::Theme;

pub fn render(width: u16, theme: &Theme) -> SectionBlock {
    let mut b = BlockBuilder::new(Section::Footer, width, theme);
    b.blank();
    b.centered(
        &format!("© {} {}", Local::now().year(), PROFILE.name),
        theme.muted_text(),
    );
    b.blank();
    b.finish()
}
