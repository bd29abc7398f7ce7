use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, View};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const TAB_DIVIDER: &str = "│";

pub struct Header;

impl Header {
    fn chunks(area: Rect) -> [Rect; 3] {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(24),
                Constraint::Min(20),
                Constraint::Length(10),
            ])
            .split(area);
        [chunks[0], chunks[1], chunks[2]]
    }

    fn tab_title(view: &View) -> String {
        format!(" {} ", view.name())
    }

    /// Screen cells covered by each tab title, in `View::all()` order. Titles
    /// that do not fit are clipped or left out.
    pub fn tab_areas(area: Rect) -> Vec<Rect> {
        let tabs = Self::chunks(area)[1];
        let mut areas = Vec::new();
        let mut x = tabs.x;

        for view in View::all() {
            if x >= tabs.right() {
                break;
            }
            let width = (Self::tab_title(view).chars().count() as u16).min(tabs.right() - x);
            areas.push(Rect::new(x, tabs.y, width, 1));
            x = x.saturating_add(width + TAB_DIVIDER.chars().count() as u16);
        }

        areas
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let [logo_area, tabs_area, clock_area] = Self::chunks(area);

        let logo = Paragraph::new(Line::from(vec![
            Span::styled("▣ ", Style::default().fg(theme.accent())),
            Span::styled(
                "Brokerdash ",
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("v{}", VERSION),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]))
        .style(Style::default().bg(theme.background()));
        frame.render_widget(logo, logo_area);

        let mut spans = Vec::new();
        for (i, view) in View::all().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(
                    TAB_DIVIDER,
                    Style::default().fg(theme.border()),
                ));
            }
            let style = if *view == app.current_view {
                Style::default()
                    .fg(theme.accent())
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.foreground_dim())
            };
            spans.push(Span::styled(Self::tab_title(view), style));
        }
        let tabs = Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background()));
        frame.render_widget(tabs, tabs_area);

        let time = chrono::Local::now().format("%H:%M:%S").to_string();
        let clock = Paragraph::new(Line::from(Span::styled(
            time,
            Style::default().fg(theme.foreground_dim()),
        )))
        .alignment(Alignment::Right)
        .style(Style::default().bg(theme.background()));
        frame.render_widget(clock, clock_area);
    }
}
