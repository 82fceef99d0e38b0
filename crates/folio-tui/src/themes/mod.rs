//! Theme registry and loader
//!
//! Provides the built-in themes with user color overrides.

pub(crate) mod dracula;
pub(crate) mod neon;
pub(crate) mod nord;
pub(crate) mod one_dark;

use folio_core::config::{ThemeColorOverrides, ThemeConfig};
use ratatui::style::Color;
use tracing::warn;

use crate::theme::Theme;

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    match hex.len() {
        // Short form: RGB -> RRGGBB
        3 => {
            let r = u8::from_str_radix(&hex[0..1], 16).ok()? * 17;
            let g = u8::from_str_radix(&hex[1..2], 16).ok()? * 17;
            let b = u8::from_str_radix(&hex[2..3], 16).ok()? * 17;
            Some(Color::Rgb(r, g, b))
        }
        // Full form: RRGGBB
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let base = match config.name.to_lowercase().as_str() {
        "neon" => neon::default(),
        "dracula" => dracula::default(),
        "nord" => nord::default(),
        "one-dark" | "onedark" => one_dark::default(),
        other => {
            warn!("Unknown theme '{}', falling back to neon", other);
            neon::default()
        }
    };

    apply_overrides(base, &config.colors)
}

fn apply(slot: &mut Color, hex: &Option<String>) {
    if let Some(color) = hex.as_deref().and_then(parse_hex_color) {
        *slot = color;
    }
}

/// Apply user color overrides to a base theme
fn apply_overrides(mut theme: Theme, overrides: &ThemeColorOverrides) -> Theme {
    apply(&mut theme.bg0, &overrides.bg0);
    apply(&mut theme.bg1, &overrides.bg1);
    apply(&mut theme.bg2, &overrides.bg2);
    apply(&mut theme.fg0, &overrides.fg0);
    apply(&mut theme.fg1, &overrides.fg1);
    apply(&mut theme.muted, &overrides.muted);
    apply(&mut theme.accent, &overrides.accent);
    apply(&mut theme.indicator, &overrides.indicator);
    apply(&mut theme.link, &overrides.link);
    apply(&mut theme.selection, &overrides.selection);
    apply(&mut theme.error, &overrides.error);
    apply(&mut theme.info, &overrides.info);
    theme
}

/// Get list of available theme names
pub fn available_themes() -> Vec<&'static str> {
    vec!["neon", "dracula", "nord", "one-dark"]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color_6digit() {
        let color = parse_hex_color("#ff5500").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_3digit() {
        let color = parse_hex_color("#f50").unwrap();
        assert!(matches!(color, Color::Rgb(255, 85, 0)));
    }

    #[test]
    fn test_parse_hex_color_invalid() {
        assert!(parse_hex_color("invalid").is_none());
        assert!(parse_hex_color("#gg0000").is_none());
        assert!(parse_hex_color("#ééé").is_none());
    }

    #[test]
    fn test_load_theme_default_is_neon() {
        let theme = load_theme(&ThemeConfig::default());
        assert_eq!(theme.purple, neon::default().purple);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "solarized".to_string(),
            colors: ThemeColorOverrides::default(),
        };
        assert_eq!(load_theme(&config).bg0, neon::default().bg0);
    }

    #[test]
    fn test_load_theme_with_override() {
        let config = ThemeConfig {
            name: "Nord".to_string(),
            colors: ThemeColorOverrides {
                indicator: Some("#ff0000".to_string()),
                link: Some("nonsense".to_string()),
                ..Default::default()
            },
        };
        let theme = load_theme(&config);
        assert_eq!(theme.indicator, Color::Rgb(255, 0, 0));
        assert_eq!(theme.link, nord::default().link);
    }

    #[test]
    fn test_available_themes_load() {
        for name in available_themes() {
            let config = ThemeConfig {
                name: name.to_string(),
                colors: ThemeColorOverrides::default(),
            };
            // Every listed name resolves without the fallback
            let _ = load_theme(&config);
        }
    }
}
