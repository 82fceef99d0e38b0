use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub nav: NavConfig,
    #[serde(default)]
    pub keymap: KeymapConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Data directory path (logs live here)
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Directory that static asset paths such as `/Resume.pdf` resolve against
    #[serde(default)]
    pub assets_dir: Option<PathBuf>,
    /// Log level
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            assets_dir: None,
            log_level: default_log_level(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick rate in milliseconds when nothing is animating
    #[serde(default = "default_tick_rate")]
    pub tick_rate_ms: u64,
    /// Show the status line with location and key hints
    #[serde(default = "default_true")]
    pub show_status_bar: bool,
    /// Theme configuration
    #[serde(default)]
    pub theme: ThemeConfig,
    /// Smooth scrolling
    #[serde(default)]
    pub scroll: ScrollConfig,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate(),
            show_status_bar: default_true(),
            theme: ThemeConfig::default(),
            scroll: ScrollConfig::default(),
        }
    }
}

/// Easing curve applied to scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EasingType {
    /// Jump at the end of the duration
    None,
    Linear,
    Cubic,
    Quintic,
    /// Exponential ease-out
    #[default]
    EaseOut,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollConfig {
    /// Animate scrolling instead of jumping
    #[serde(default = "default_true")]
    pub smooth_enabled: bool,
    /// Default animation duration
    #[serde(default = "default_animation_duration")]
    pub animation_duration_ms: u64,
    #[serde(default)]
    pub easing: EasingType,
    /// Rows per line-scroll key press
    #[serde(default = "default_scroll_lines")]
    pub scroll_lines: u16,
    /// Rows per mouse wheel notch
    #[serde(default = "default_wheel_lines")]
    pub wheel_lines: u16,
    /// Frame rate while an animation is running
    #[serde(default = "default_animation_fps")]
    pub animation_fps: u32,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            smooth_enabled: default_true(),
            animation_duration_ms: default_animation_duration(),
            easing: EasingType::default(),
            scroll_lines: default_scroll_lines(),
            wheel_lines: default_wheel_lines(),
            animation_fps: default_animation_fps(),
        }
    }
}

/// Nav bar scroll-spy and anchor scrolling
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NavConfig {
    /// Rows added to the scroll position when deciding the active section
    #[serde(default = "default_lookahead")]
    pub lookahead_rows: u16,
    /// Distance from the end of the page that still counts as the bottom
    #[serde(default = "default_bottom_epsilon")]
    pub bottom_epsilon_rows: u16,
    /// Where an anchor lands relative to the viewport top (negative = below)
    #[serde(default = "default_anchor_offset")]
    pub anchor_offset_rows: i32,
    /// Duration of the scroll started by a nav click
    #[serde(default = "default_anchor_duration")]
    pub anchor_duration_ms: u64,
    /// Extra time the scroll-spy stays paused after a nav click animation
    #[serde(default = "default_suppression_slack")]
    pub suppression_slack_ms: u64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            lookahead_rows: default_lookahead(),
            bottom_epsilon_rows: default_bottom_epsilon(),
            anchor_offset_rows: default_anchor_offset(),
            anchor_duration_ms: default_anchor_duration(),
            suppression_slack_ms: default_suppression_slack(),
        }
    }
}

impl NavConfig {
    pub fn anchor_duration(&self) -> Duration {
        Duration::from_millis(self.anchor_duration_ms)
    }

    /// How long scroll updates are ignored after a nav click.
    ///
    /// Derived from the anchor animation so the two cannot drift apart.
    pub fn suppression_window(&self) -> Duration {
        Duration::from_millis(self.anchor_duration_ms + self.suppression_slack_ms)
    }
}

/// Theme configuration
/// Can be specified as a simple string (theme name) or as a full struct with overrides
#[derive(Debug, Clone, Serialize)]
pub struct ThemeConfig {
    /// Theme name (e.g., "neon", "nord")
    pub name: String,
    /// Optional color overrides for semantic colors
    pub colors: ThemeColorOverrides,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            name: default_theme_name(),
            colors: ThemeColorOverrides::default(),
        }
    }
}

// Custom deserializer to accept either a string or a struct
impl<'de> Deserialize<'de> for ThemeConfig {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::{self, MapAccess, Visitor};
        use std::fmt;

        struct ThemeConfigVisitor;

        impl<'de> Visitor<'de> for ThemeConfigVisitor {
            type Value = ThemeConfig;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string (theme name) or a map with 'name' and optional 'colors'")
            }

            fn visit_str<E>(self, value: &str) -> Result<ThemeConfig, E>
            where
                E: de::Error,
            {
                Ok(ThemeConfig {
                    name: value.to_string(),
                    colors: ThemeColorOverrides::default(),
                })
            }

            fn visit_map<M>(self, mut map: M) -> Result<ThemeConfig, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut name: Option<String> = None;
                let mut colors: Option<ThemeColorOverrides> = None;

                while let Some(key) = map.next_key::<String>()? {
                    match key.as_str() {
                        "name" => {
                            name = Some(map.next_value()?);
                        }
                        "colors" => {
                            colors = Some(map.next_value()?);
                        }
                        _ => {
                            let _: serde::de::IgnoredAny = map.next_value()?;
                        }
                    }
                }

                Ok(ThemeConfig {
                    name: name.unwrap_or_else(default_theme_name),
                    colors: colors.unwrap_or_default(),
                })
            }
        }

        deserializer.deserialize_any(ThemeConfigVisitor)
    }
}

fn default_theme_name() -> String {
    "neon".to_string()
}

/// Optional color overrides for theme customization
/// Each color is a hex string (e.g., "#ff0000" or "ff0000")
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorOverrides {
    /// Page background
    pub bg0: Option<String>,
    /// Card background
    pub bg1: Option<String>,
    /// Nav bar and status bar background
    pub bg2: Option<String>,
    /// Primary foreground
    pub fg0: Option<String>,
    /// Secondary foreground
    pub fg1: Option<String>,
    /// Muted text
    pub muted: Option<String>,
    /// Accent color (headings, brand)
    pub accent: Option<String>,
    /// Active nav link highlight
    pub indicator: Option<String>,
    /// Link color
    pub link: Option<String>,
    /// Focused link background
    pub selection: Option<String>,
    /// Error color
    pub error: Option<String>,
    /// Info color
    pub info: Option<String>,
}

/// Keymap configuration using Vim-style notation
/// Format: "j", "k", "<C-j>" (Ctrl+j), "<S-g>" (Shift+g), "<CR>" (Enter), "<Esc>", "<Tab>", "<Space>"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeymapConfig {
    /// Quit the application
    #[serde(default = "default_key_quit")]
    pub quit: String,

    // Scrolling
    #[serde(default = "default_key_scroll_down")]
    pub scroll_down: String,
    #[serde(default = "default_key_scroll_up")]
    pub scroll_up: String,
    #[serde(default = "default_key_scroll_half_down")]
    pub scroll_half_down: String,
    #[serde(default = "default_key_scroll_half_up")]
    pub scroll_half_up: String,
    #[serde(default = "default_key_scroll_page_down")]
    pub scroll_page_down: String,
    #[serde(default = "default_key_scroll_page_up")]
    pub scroll_page_up: String,
    /// Jump to top of the page
    #[serde(default = "default_key_jump_to_top")]
    pub jump_to_top: String,
    /// Jump to the end of the page
    #[serde(default = "default_key_jump_to_bottom")]
    pub jump_to_bottom: String,

    // Nav bar
    /// Click the nav link after the active one
    #[serde(default = "default_key_next_section")]
    pub next_section: String,
    /// Click the nav link before the active one
    #[serde(default = "default_key_prev_section")]
    pub prev_section: String,
    /// The "Hire Me" button
    #[serde(default = "default_key_hire_me")]
    pub hire_me: String,

    // Links
    /// Focus next link on the page
    #[serde(default = "default_key_next_link")]
    pub next_link: String,
    /// Focus previous link on the page
    #[serde(default = "default_key_prev_link")]
    pub prev_link: String,
    /// Activate the focused link
    #[serde(default = "default_key_open_link")]
    pub open_link: String,

    /// Show key help
    #[serde(default = "default_key_help")]
    pub help: String,
}

impl Default for KeymapConfig {
    fn default() -> Self {
        Self {
            quit: default_key_quit(),
            scroll_down: default_key_scroll_down(),
            scroll_up: default_key_scroll_up(),
            scroll_half_down: default_key_scroll_half_down(),
            scroll_half_up: default_key_scroll_half_up(),
            scroll_page_down: default_key_scroll_page_down(),
            scroll_page_up: default_key_scroll_page_up(),
            jump_to_top: default_key_jump_to_top(),
            jump_to_bottom: default_key_jump_to_bottom(),
            next_section: default_key_next_section(),
            prev_section: default_key_prev_section(),
            hire_me: default_key_hire_me(),
            next_link: default_key_next_link(),
            prev_link: default_key_prev_link(),
            open_link: default_key_open_link(),
            help: default_key_help(),
        }
    }
}

// Default keymap values (Vim-style notation)
fn default_key_quit() -> String { "q".to_string() }
fn default_key_scroll_down() -> String { "j".to_string() }
fn default_key_scroll_up() -> String { "k".to_string() }
fn default_key_scroll_half_down() -> String { "<C-d>".to_string() }
fn default_key_scroll_half_up() -> String { "<C-u>".to_string() }
fn default_key_scroll_page_down() -> String { "<C-f>".to_string() }
fn default_key_scroll_page_up() -> String { "<C-b>".to_string() }
fn default_key_jump_to_top() -> String { "gg".to_string() }
fn default_key_jump_to_bottom() -> String { "G".to_string() }
fn default_key_next_section() -> String { "]".to_string() }
fn default_key_prev_section() -> String { "[".to_string() }
fn default_key_hire_me() -> String { "H".to_string() }
fn default_key_next_link() -> String { "<Tab>".to_string() }
fn default_key_prev_link() -> String { "<S-Tab>".to_string() }
fn default_key_open_link() -> String { "<CR>".to_string() }
fn default_key_help() -> String { "?".to_string() }

fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("folio")
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_true() -> bool {
    true
}

fn default_tick_rate() -> u64 {
    100
}

fn default_animation_duration() -> u64 {
    1200
}

fn default_scroll_lines() -> u16 {
    1
}

fn default_wheel_lines() -> u16 {
    3
}

fn default_animation_fps() -> u32 {
    60
}

fn default_lookahead() -> u16 {
    4
}

fn default_bottom_epsilon() -> u16 {
    1
}

fn default_anchor_offset() -> i32 {
    -3
}

fn default_anchor_duration() -> u64 {
    1500
}

fn default_suppression_slack() -> u64 {
    250
}

/// Expand tilde (~) in path to user's home directory
fn expand_tilde(path: &Path) -> PathBuf {
    if let Some(path_str) = path.to_str() {
        if let Some(stripped) = path_str.strip_prefix("~/") {
            if let Some(home) = dirs::home_dir() {
                return home.join(stripped);
            }
        } else if path_str == "~" {
            if let Some(home) = dirs::home_dir() {
                return home;
            }
        }
    }
    path.to_path_buf()
}

impl AppConfig {
    /// Load configuration from file or return defaults
    pub fn load() -> crate::Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load configuration from a specific file, defaults if it does not exist
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            Self::from_toml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml(content: &str) -> crate::Result<Self> {
        toml::from_str(content).map_err(|e| crate::Error::Config(e.to_string()))
    }

    /// Save configuration to a file, creating its directory
    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Get the configuration file path
    /// Always uses ~/.config/folio/config.toml on all platforms
    pub fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join("folio")
            .join("config.toml")
    }

    /// Get the data directory (with tilde expansion)
    pub fn data_dir(&self) -> PathBuf {
        expand_tilde(&self.general.data_dir)
    }

    /// Log file used while the terminal UI owns stdout
    pub fn log_path(&self) -> PathBuf {
        self.data_dir().join("folio.log")
    }

    /// Directory static asset paths resolve against
    pub fn assets_dir(&self) -> PathBuf {
        match &self.general.assets_dir {
            Some(dir) => expand_tilde(dir),
            None => self.data_dir().join("assets"),
        }
    }

    /// Resolve a site-absolute asset path such as `/Resume.pdf`
    pub fn asset_path(&self, asset: &str) -> PathBuf {
        self.assets_dir().join(asset.trim_start_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.ui.theme.name, "neon");
        assert_eq!(config.ui.scroll.easing, EasingType::EaseOut);
        assert_eq!(config.nav.lookahead_rows, 4);
        assert_eq!(config.nav.anchor_offset_rows, -3);
        assert_eq!(config.keymap.jump_to_top, "gg");
    }

    #[test]
    fn test_theme_as_string_or_table() {
        let config = AppConfig::from_toml("[ui]\ntheme = \"nord\"\n").unwrap();
        assert_eq!(config.ui.theme.name, "nord");

        let config = AppConfig::from_toml(
            "[ui.theme]\nname = \"dracula\"\n[ui.theme.colors]\nindicator = \"#ff00ff\"\n",
        )
        .unwrap();
        assert_eq!(config.ui.theme.name, "dracula");
        assert_eq!(config.ui.theme.colors.indicator.as_deref(), Some("#ff00ff"));
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            "[ui.scroll]\neasing = \"cubic\"\nsmooth_enabled = false\n[nav]\nsuppression_slack_ms = 0\n",
        )
        .unwrap();
        assert_eq!(config.ui.scroll.easing, EasingType::Cubic);
        assert!(!config.ui.scroll.smooth_enabled);
        assert_eq!(config.ui.scroll.animation_duration_ms, 1200);
        assert_eq!(config.nav.suppression_window(), config.nav.anchor_duration());
    }

    #[test]
    fn test_suppression_covers_animation() {
        let nav = NavConfig::default();
        assert!(nav.suppression_window() > nav.anchor_duration());
        assert_eq!(nav.suppression_window(), Duration::from_millis(1750));
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = AppConfig::from_toml("[ui\n").unwrap_err();
        assert!(matches!(err, crate::Error::Config(_)));
    }

    #[test]
    fn test_asset_path() {
        let mut config = AppConfig::default();
        config.general.assets_dir = Some(PathBuf::from("/srv/site"));
        assert_eq!(
            config.asset_path("/Resume.pdf"),
            PathBuf::from("/srv/site/Resume.pdf")
        );
    }

    #[test]
    fn test_round_trip_through_file() {
        let dir = std::env::temp_dir().join(format!("folio-config-{}", std::process::id()));
        let path = dir.join("config.toml");
        let mut config = AppConfig::default();
        config.nav.lookahead_rows = 9;
        config.save_to(&path).unwrap();

        let loaded = AppConfig::load_from(&path).unwrap();
        assert_eq!(loaded.nav.lookahead_rows, 9);
        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let dir = std::env::temp_dir().join(format!("folio-config-dir-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        // A directory exists but cannot be read as a file
        let err = AppConfig::load_from(&dir).unwrap_err();
        assert!(matches!(err, crate::Error::Io(_)));
        std::fs::remove_dir_all(&dir).ok();
    }
}
