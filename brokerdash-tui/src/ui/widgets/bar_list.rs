use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;

const MAX_LABEL_WIDTH: usize = 18;
const FILLED: char = '█';
const EMPTY: char = '░';

#[derive(Debug, Clone, PartialEq)]
pub struct BarItem {
    pub label: String,
    /// Fill, 0-100. Out-of-range values are clamped.
    pub percent: f64,
    pub value: String,
    pub color: Color,
}

/// Horizontal percentage bars, one per line.
pub struct BarList;

impl BarList {
    /// Filled cells out of `width` for `percent`.
    pub fn filled_cells(percent: f64, width: usize) -> usize {
        if !percent.is_finite() || percent <= 0.0 {
            return 0;
        }
        let cells = (percent.min(100.0) / 100.0 * width as f64).round() as usize;
        cells.min(width)
    }

    pub fn render(frame: &mut Frame, area: Rect, theme: &dyn Theme, title: &str, items: &[BarItem]) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let inner = block.inner(area);

        let label_width = items
            .iter()
            .map(|i| i.label.chars().count())
            .max()
            .unwrap_or(0)
            .min(MAX_LABEL_WIDTH);
        let value_width = items
            .iter()
            .map(|i| i.value.chars().count())
            .max()
            .unwrap_or(0);
        let bar_width = (inner.width as usize).saturating_sub(label_width + value_width + 3);

        let lines: Vec<Line> = items
            .iter()
            .map(|item| {
                let filled = Self::filled_cells(item.percent, bar_width);
                let label: String = item.label.chars().take(label_width).collect();
                Line::from(vec![
                    Span::styled(
                        format!("{:<width$} ", label, width = label_width),
                        Style::default().fg(theme.foreground()),
                    ),
                    Span::styled(
                        FILLED.to_string().repeat(filled),
                        Style::default().fg(item.color),
                    ),
                    Span::styled(
                        EMPTY.to_string().repeat(bar_width - filled),
                        Style::default().fg(theme.border()),
                    ),
                    Span::styled(
                        format!(" {:>width$}", item.value, width = value_width),
                        Style::default().fg(theme.foreground_dim()),
                    ),
                ])
            })
            .collect();

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_cells() {
        assert_eq!(BarList::filled_cells(100.0, 20), 20);
        assert_eq!(BarList::filled_cells(50.0, 20), 10);
        assert_eq!(BarList::filled_cells(0.0, 20), 0);
        assert_eq!(BarList::filled_cells(130.0, 20), 20);
        assert_eq!(BarList::filled_cells(-5.0, 20), 0);
        assert_eq!(BarList::filled_cells(f64::NAN, 20), 0);
        assert_eq!(BarList::filled_cells(50.0, 0), 0);
    }
}
