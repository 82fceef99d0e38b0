//! One Dark theme (Atom)

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x28, 0x2c, 0x34), // bg
        bg1: Color::Rgb(0x21, 0x25, 0x2b), // bg-darker
        bg2: Color::Rgb(0x3e, 0x44, 0x51), // bg-highlight
        fg0: Color::Rgb(0xab, 0xb2, 0xbf), // fg
        fg1: Color::Rgb(0x9d, 0xa5, 0xb4), // fg-dim
        muted: Color::Rgb(0x7f, 0x84, 0x8e),
        purple: Color::Rgb(0xc6, 0x78, 0xdd),
        blue: Color::Rgb(0x61, 0xaf, 0xef),
        pink: Color::Rgb(0xe0, 0x6c, 0x75),
        accent: Color::Rgb(0x56, 0xb6, 0xc2), // cyan
        indicator: Color::Rgb(0x4b, 0x52, 0x63), // gutter
        link: Color::Rgb(0x61, 0xaf, 0xef),
        selection: Color::Rgb(0x3e, 0x44, 0x51),
        error: Color::Rgb(0xe0, 0x6c, 0x75),
        info: Color::Rgb(0x61, 0xaf, 0xef),
    }
}
