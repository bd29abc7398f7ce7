use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::events::Action;

pub struct Footer;

impl Footer {
    fn hints(app: &App) -> Vec<(String, &'static str)> {
        let mut actions = vec![(Action::Quit, "Quit"), (Action::NextView, "Next View")];
        if app.is_drawer_open() {
            actions.push((Action::Back, "Close"));
        } else {
            actions.push((Action::Select, "Details"));
        }
        actions.push((Action::ToggleTheme, "Theme"));
        actions.push((Action::Help, "Help"));

        actions
            .into_iter()
            .filter_map(|(action, desc)| app.keybinds.primary_key(&action).map(|key| (key, desc)))
            .collect()
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);

        let keybind_spans: Vec<Span> = Self::hints(app)
            .into_iter()
            .flat_map(|(key, desc)| {
                vec![
                    Span::styled(
                        format!(" {key}"),
                        Style::default()
                            .fg(theme.accent())
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!(":{desc} "),
                        Style::default().fg(theme.foreground_dim()),
                    ),
                ]
            })
            .collect();

        let keybinds_widget =
            Paragraph::new(Line::from(keybind_spans)).style(Style::default().bg(theme.surface()));
        frame.render_widget(keybinds_widget, chunks[0]);

        let (status, color) = match (&app.status_message, &app.last_error) {
            (Some(message), Some(_)) => (message.clone(), theme.error()),
            (Some(message), None) => (message.clone(), theme.foreground_dim()),
            (None, _) => (
                format!(
                    "{} · {} agents ",
                    app.source_name,
                    app.dataset.agents.len()
                ),
                theme.foreground_dim(),
            ),
        };
        let status_widget = Paragraph::new(Line::from(Span::styled(
            status,
            Style::default().fg(color),
        )))
        .alignment(Alignment::Right)
        .style(Style::default().bg(theme.surface()));
        frame.render_widget(status_widget, chunks[1]);
    }
}
