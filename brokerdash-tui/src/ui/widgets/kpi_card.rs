use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::theme::Theme;
use crate::ui::layout::MainLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct KpiCard {
    pub label: &'static str,
    pub value: String,
    pub color: Color,
}

impl KpiCard {
    pub fn new(label: &'static str, value: impl Into<String>, color: Color) -> Self {
        Self {
            label,
            value: value.into(),
            color,
        }
    }
}

/// A bordered row of equally sized headline numbers.
pub struct KpiStrip;

impl KpiStrip {
    pub fn render(frame: &mut Frame, area: Rect, theme: &dyn Theme, title: &str, cards: &[KpiCard]) {
        let block = Block::default()
            .title(format!(" {} ", title))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        for (card, column) in cards.iter().zip(MainLayout::create_columns(inner, cards.len())) {
            let lines = vec![
                Line::from(Span::styled(
                    card.label,
                    Style::default().fg(theme.foreground_dim()),
                )),
                Line::from(Span::styled(
                    card.value.clone(),
                    Style::default().fg(card.color).add_modifier(Modifier::BOLD),
                )),
            ];
            let paragraph = Paragraph::new(lines)
                .alignment(Alignment::Center)
                .style(Style::default().bg(theme.surface()));
            frame.render_widget(paragraph, column);
        }
    }
}
