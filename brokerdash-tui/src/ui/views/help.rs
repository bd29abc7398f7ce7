use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::theme::Theme;

pub struct HelpView;

impl HelpView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(area);

        Self::render_keybinds(frame, chunks[0], app);
        Self::render_screens(frame, chunks[1], app);
    }

    fn panel<'a>(title: &'a str, theme: &dyn Theme) -> Block<'a> {
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()))
    }

    fn key_line<'a>(key: String, desc: &'a str, theme: &dyn Theme) -> Line<'a> {
        Line::from(vec![
            Span::styled(
                format!("  {:<18}", key),
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(desc, Style::default().fg(theme.foreground())),
        ])
    }

    fn render_keybinds(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let bindings = app.keybinds.all_bindings();

        let mut lines: Vec<Line> = bindings
            .iter()
            .map(|(keys, desc, _)| Self::key_line(keys.clone(), desc, theme))
            .collect();

        if app.mouse_enabled {
            lines.push(Line::from(""));
            lines.push(Self::key_line("click row".to_string(), "Open agent detail", theme));
            lines.push(Self::key_line(
                "click outside".to_string(),
                "Close agent detail",
                theme,
            ));
            lines.push(Self::key_line("wheel".to_string(), "Move cursor", theme));
        }

        let paragraph = Paragraph::new(lines).block(Self::panel(" Keys ", theme));
        frame.render_widget(paragraph, area);
    }

    fn render_screens(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let heading = |text: &'static str| {
            Line::from(Span::styled(
                text,
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD),
            ))
        };
        let body = |text: String| {
            Line::from(Span::styled(
                text,
                Style::default().fg(theme.foreground_dim()),
            ))
        };

        let mut lines = vec![
            heading("1. Agent Performance"),
            body("  Team KPIs, revenue and conversion by agent, and the roster.".to_string()),
            body("  Enter on a row opens the agent detail drawer.".to_string()),
            Line::from(""),
            heading("2. Executive Analytics"),
            body("  Traffic, lead sources, funnel, campaign ROI and engagement.".to_string()),
            Line::from(""),
            heading("Data"),
            body(format!(
                "  Source: {} ({} agents)",
                app.source_name,
                app.dataset.agents.len()
            )),
            body(format!(
                "  Theme: {} (available: {})",
                app.theme_manager.current_theme_name(),
                app.theme_manager.available_themes().join(", ")
            )),
        ];

        if let Some(error) = &app.last_error {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("  {}", error),
                Style::default().fg(theme.error()),
            )));
        }

        let paragraph = Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Self::panel(" Screens ", theme));
        frame.render_widget(paragraph, area);
    }
}
