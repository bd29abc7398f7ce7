use ratatui::{
    layout::{Constraint, Direction, Layout, Margin, Rect},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, View};
use crate::events::{Action, ClickableRegion};
use crate::ui::views::{AgentDrawer, AnalyticsView, HelpView, PerformanceView, RosterTable};
use crate::ui::widgets::{Footer, Header};

pub const HEADER_HEIGHT: u16 = 2;
pub const FOOTER_HEIGHT: u16 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub content: Rect,
    pub footer: Rect,
}

pub struct MainLayout;

impl MainLayout {
    pub fn areas(size: Rect) -> ScreenAreas {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(6),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(size);

        ScreenAreas {
            header: chunks[0],
            content: chunks[1].inner(Margin::new(1, 0)),
            footer: chunks[2],
        }
    }

    pub fn render(frame: &mut Frame, app: &App) {
        let theme = app.current_theme();
        let size = frame.area();

        frame.render_widget(
            Block::default().style(
                Style::default()
                    .bg(theme.background())
                    .fg(theme.foreground()),
            ),
            size,
        );

        let areas = Self::areas(size);

        Header::render(frame, areas.header, app);

        match app.current_view {
            View::Performance => PerformanceView::render(frame, areas.content, app),
            View::Analytics => AnalyticsView::render(frame, areas.content, app),
            View::Help => HelpView::render(frame, areas.content, app),
        }

        Footer::render(frame, areas.footer, app);

        if let Some(detail) = app.drawer_detail() {
            AgentDrawer::render(frame, areas.content, app, &detail);
        }
    }

    /// Click targets for the frame `render` would draw at `size`.
    ///
    /// While the drawer is open it is modal: the close button and the drawer
    /// body come first, and everything else is backdrop.
    pub fn clickable_regions(app: &App, size: Rect) -> Vec<ClickableRegion> {
        let areas = Self::areas(size);
        let mut regions = Vec::new();

        if app.is_drawer_open() {
            let drawer = AgentDrawer::area(areas.content);
            regions.push(ClickableRegion::new(
                AgentDrawer::close_button_area(drawer),
                Action::CloseDrawer,
                "close",
            ));
            regions.push(ClickableRegion::new(drawer, Action::None, "drawer"));
            regions.push(ClickableRegion::new(size, Action::CloseDrawer, "backdrop"));
            return regions;
        }

        for (idx, area) in Header::tab_areas(areas.header).into_iter().enumerate() {
            regions.push(ClickableRegion::new(
                area,
                Action::GoToView(idx),
                View::all()[idx].name(),
            ));
        }

        if app.current_view == View::Performance {
            let table = PerformanceView::areas(areas.content).roster;
            let offset = RosterTable::scroll_offset(app.cursor, RosterTable::visible_rows(table));
            for (idx, area) in RosterTable::row_areas(table, offset, app.dataset.agents.len()) {
                let label = app
                    .dataset
                    .agents
                    .get(idx)
                    .map(|a| a.id.clone())
                    .unwrap_or_default();
                regions.push(ClickableRegion::new(area, Action::SelectRow(idx), label));
            }
        }

        regions
    }

    pub fn create_columns(area: Rect, count: usize) -> Vec<Rect> {
        if count == 0 {
            return Vec::new();
        }
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, count as u32); count])
            .split(area)
            .to_vec()
    }
}
