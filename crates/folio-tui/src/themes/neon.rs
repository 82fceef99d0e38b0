//! Default theme: near-black page with purple, blue and pink neon accents

use ratatui::style::Color;
use crate::theme::Theme;

pub fn default() -> Theme {
    Theme {
        bg0: Color::Rgb(0x09, 0x09, 0x0f),
        bg1: Color::Rgb(0x14, 0x14, 0x1f),
        bg2: Color::Rgb(0x1c, 0x1b, 0x2b),
        fg0: Color::Rgb(0xfa, 0xfa, 0xfa),
        fg1: Color::Rgb(0xd4, 0xd4, 0xd8), // zinc-300
        muted: Color::Rgb(0xa1, 0xa1, 0xaa), // zinc-400
        purple: Color::Rgb(0xa8, 0x55, 0xf7),
        blue: Color::Rgb(0x3b, 0x82, 0xf6),
        pink: Color::Rgb(0xec, 0x48, 0x99),
        accent: Color::Rgb(0xa8, 0x55, 0xf7),
        indicator: Color::Rgb(0x3a, 0x36, 0x52),
        link: Color::Rgb(0xc0, 0x84, 0xfc),
        selection: Color::Rgb(0x2e, 0x1f, 0x4a),
        error: Color::Rgb(0xf8, 0x71, 0x71),
        info: Color::Rgb(0x60, 0xa5, 0xfa),
    }
}
