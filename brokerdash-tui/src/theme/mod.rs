mod colors;
mod palettes;

pub use colors::{hex_to_color, ColorPalette};
pub use palettes::{BUILT_IN, TOKYO_NIGHT};

use ratatui::style::Color;
use tracing::warn;

pub trait Theme: Send + Sync {
    fn name(&self) -> &'static str;

    fn background(&self) -> Color;
    fn foreground(&self) -> Color;
    fn foreground_dim(&self) -> Color;

    fn surface(&self) -> Color;
    fn border(&self) -> Color;
    fn selection(&self) -> Color;

    fn accent(&self) -> Color;
    fn accent_secondary(&self) -> Color;

    fn success(&self) -> Color;
    fn warning(&self) -> Color;
    fn error(&self) -> Color;
    fn info(&self) -> Color;

    /// Color for the `index`-th series of a multi-series chart.
    fn series(&self, index: usize) -> Color {
        match index % 5 {
            0 => self.accent(),
            1 => self.success(),
            2 => self.warning(),
            3 => self.accent_secondary(),
            _ => self.info(),
        }
    }
}

pub struct ThemeManager {
    themes: Vec<Box<dyn Theme>>,
    current_index: usize,
}

impl ThemeManager {
    pub fn new() -> Self {
        let themes: Vec<Box<dyn Theme>> = BUILT_IN
            .iter()
            .map(|palette| Box::new(*palette) as Box<dyn Theme>)
            .collect();

        Self {
            themes,
            current_index: 0,
        }
    }

    /// Starts on `name`, or on the first theme when `name` is unknown.
    pub fn with_theme(name: &str) -> Self {
        let mut manager = Self::new();
        if !manager.set_theme_by_name(name) {
            warn!(
                theme = name,
                fallback = manager.current_theme_name(),
                "Unknown theme, using default"
            );
        }
        manager
    }

    pub fn current_theme(&self) -> &dyn Theme {
        self.themes[self.current_index].as_ref()
    }

    pub fn cycle_theme(&mut self) {
        self.current_index = (self.current_index + 1) % self.themes.len();
    }

    /// Case-insensitive.
    pub fn set_theme_by_name(&mut self, name: &str) -> bool {
        if let Some(index) = self
            .themes
            .iter()
            .position(|t| t.name().eq_ignore_ascii_case(name.trim()))
        {
            self.current_index = index;
            true
        } else {
            false
        }
    }

    pub fn available_themes(&self) -> Vec<&'static str> {
        self.themes.iter().map(|t| t.name()).collect()
    }

    pub fn current_theme_name(&self) -> &'static str {
        self.current_theme().name()
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cycle_wraps() {
        let mut manager = ThemeManager::new();
        let count = manager.available_themes().len();
        let first = manager.current_theme_name();
        for _ in 0..count {
            manager.cycle_theme();
        }
        assert_eq!(manager.current_theme_name(), first);
    }

    #[test]
    fn test_set_theme_by_name() {
        let mut manager = ThemeManager::new();
        assert!(manager.set_theme_by_name("nord"));
        assert_eq!(manager.current_theme_name(), "Nord");
        assert!(!manager.set_theme_by_name("Solarized"));
        assert_eq!(manager.current_theme_name(), "Nord");
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let manager = ThemeManager::with_theme("does-not-exist");
        assert_eq!(manager.current_theme_name(), TOKYO_NIGHT.name);
    }

    #[test]
    fn test_series_colors_cycle() {
        let theme = TOKYO_NIGHT;
        assert_eq!(theme.series(0), theme.accent);
        assert_eq!(theme.series(5), theme.accent);
        assert_ne!(theme.series(0), theme.series(1));
    }
}
