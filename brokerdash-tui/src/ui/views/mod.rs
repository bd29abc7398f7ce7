mod agent_drawer;
mod analytics;
mod help;
mod performance;

pub use agent_drawer::AgentDrawer;
pub use analytics::AnalyticsView;
pub use help::HelpView;
pub use performance::{PerformanceAreas, PerformanceView, RosterTable};

use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;

/// Bordered panel with a centered note, for series that have no data.
fn render_empty_panel(frame: &mut Frame, area: Rect, theme: &dyn Theme, title: &str, note: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border()))
        .style(Style::default().bg(theme.surface()));
    let paragraph = Paragraph::new(note)
        .alignment(Alignment::Center)
        .style(Style::default().fg(theme.foreground_dim()))
        .block(block);
    frame.render_widget(paragraph, area);
}

/// First word of a name, for axis labels.
fn short_name(name: &str) -> String {
    name.split_whitespace().next().unwrap_or(name).to_string()
}

/// Width for each of `count` bars so they fill `available` cells with `gap`
/// between them.
fn bar_width(available: u16, count: usize, gap: u16) -> u16 {
    if count == 0 {
        return 1;
    }
    let gaps = (gap as usize).saturating_mul(count - 1);
    let width = (available as usize).saturating_sub(gaps) / count;
    width.clamp(1, 12) as u16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_name() {
        assert_eq!(short_name("Layla Haddad"), "Layla");
        assert_eq!(short_name("Cher"), "Cher");
        assert_eq!(short_name(""), "");
    }

    #[test]
    fn test_bar_width() {
        assert_eq!(bar_width(60, 6, 1), 9);
        assert_eq!(bar_width(200, 2, 1), 12);
        assert_eq!(bar_width(3, 6, 1), 1);
        assert_eq!(bar_width(10, 0, 1), 1);
    }

    #[test]
    fn test_bar_width_huge_roster() {
        assert_eq!(bar_width(100, 65_536, 1), 1);
        assert_eq!(bar_width(u16::MAX, usize::MAX, 0), 1);
    }
}
