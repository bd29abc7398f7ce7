use ratatui::style::Color;

use super::Theme;

pub const fn hex_to_color(hex: u32) -> Color {
    let r = ((hex >> 16) & 0xFF) as u8;
    let g = ((hex >> 8) & 0xFF) as u8;
    let b = (hex & 0xFF) as u8;
    Color::Rgb(r, g, b)
}

/// A named set of colors. Every built-in theme is one of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub name: &'static str,
    pub background: Color,
    pub foreground: Color,
    pub foreground_dim: Color,
    pub surface: Color,
    pub border: Color,
    pub selection: Color,
    pub accent: Color,
    pub accent_secondary: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
}

impl ColorPalette {
    /// Colors in the order `background, foreground, foreground_dim, surface,
    /// border, selection, accent, accent_secondary, success, warning, error, info`.
    pub const fn from_hex(name: &'static str, hex: [u32; 12]) -> Self {
        Self {
            name,
            background: hex_to_color(hex[0]),
            foreground: hex_to_color(hex[1]),
            foreground_dim: hex_to_color(hex[2]),
            surface: hex_to_color(hex[3]),
            border: hex_to_color(hex[4]),
            selection: hex_to_color(hex[5]),
            accent: hex_to_color(hex[6]),
            accent_secondary: hex_to_color(hex[7]),
            success: hex_to_color(hex[8]),
            warning: hex_to_color(hex[9]),
            error: hex_to_color(hex[10]),
            info: hex_to_color(hex[11]),
        }
    }
}

impl Theme for ColorPalette {
    fn name(&self) -> &'static str {
        self.name
    }

    fn background(&self) -> Color {
        self.background
    }

    fn foreground(&self) -> Color {
        self.foreground
    }

    fn foreground_dim(&self) -> Color {
        self.foreground_dim
    }

    fn surface(&self) -> Color {
        self.surface
    }

    fn border(&self) -> Color {
        self.border
    }

    fn selection(&self) -> Color {
        self.selection
    }

    fn accent(&self) -> Color {
        self.accent
    }

    fn accent_secondary(&self) -> Color {
        self.accent_secondary
    }

    fn success(&self) -> Color {
        self.success
    }

    fn warning(&self) -> Color {
        self.warning
    }

    fn error(&self) -> Color {
        self.error
    }

    fn info(&self) -> Color {
        self.info
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_to_color() {
        assert_eq!(hex_to_color(0x1a1b26), Color::Rgb(0x1a, 0x1b, 0x26));
        assert_eq!(hex_to_color(0xffffff), Color::Rgb(255, 255, 255));
        assert_eq!(hex_to_color(0x000000), Color::Rgb(0, 0, 0));
    }
}
