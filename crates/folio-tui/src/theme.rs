use ratatui::style::{Color, Modifier, Style};

/// Runtime theme with configurable colors
#[derive(Debug, Clone)]
pub struct Theme {
    // Backgrounds: page, cards, nav/status bars
    pub bg0: Color,
    pub bg1: Color,
    pub bg2: Color,

    // Foregrounds
    pub fg0: Color,
    pub fg1: Color,
    pub muted: Color,

    // Neon palette
    pub purple: Color,
    pub blue: Color,
    pub pink: Color,

    // Semantic colors
    pub accent: Color,
    pub indicator: Color,
    pub link: Color,
    pub selection: Color,
    pub error: Color,
    pub info: Color,
}

impl Default for Theme {
    fn default() -> Self {
        crate::themes::neon::default()
    }
}

impl Theme {
    pub fn text(&self) -> Style {
        Style::default().fg(self.fg0)
    }

    pub fn muted_text(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn heading(&self) -> Style {
        Style::default().fg(self.fg0).add_modifier(Modifier::BOLD)
    }

    pub fn link_text(&self) -> Style {
        Style::default().fg(self.link).add_modifier(Modifier::UNDERLINED)
    }

    pub fn border(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Cycle through the neon palette, for gradient-like runs of text
    pub fn gradient(&self, index: usize) -> Color {
        [self.purple, self.blue, self.pink][index % 3]
    }
}
