use brokerdash_core::{
    format::{
        format_compact_currency, format_count, format_millions, format_optional_percent,
        format_optional_response, format_percent,
    },
    roster_rows,
    shapers::{conversion_bars, revenue_series},
    AgentStatus, RosterRow, RosterSummary,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Row, Table},
    Frame,
};

use super::{bar_width, render_empty_panel, short_name};
use crate::app::App;
use crate::theme::Theme;
use crate::ui::widgets::{BarItem, BarList, KpiCard, KpiStrip};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PerformanceAreas {
    pub kpis: Rect,
    pub revenue: Rect,
    pub conversion: Rect,
    pub roster: Rect,
}

pub struct PerformanceView;

impl PerformanceView {
    pub fn areas(area: Rect) -> PerformanceAreas {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Length(11),
                Constraint::Min(5),
            ])
            .split(area);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        PerformanceAreas {
            kpis: rows[0],
            revenue: charts[0],
            conversion: charts[1],
            roster: rows[2],
        }
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let areas = Self::areas(area);
        let summary = RosterSummary::from_records(&app.dataset.agents);

        Self::render_kpis(frame, areas.kpis, app, &summary);
        Self::render_revenue_chart(frame, areas.revenue, app);
        Self::render_conversion(frame, areas.conversion, app);
        RosterTable::render(frame, areas.roster, app);
    }

    pub fn kpi_cards(summary: &RosterSummary, currency: &str, theme: &dyn Theme) -> Vec<KpiCard> {
        vec![
            KpiCard::new(
                "Active Agents",
                format!("{} / {}", summary.active_agents, summary.total_agents),
                theme.success(),
            ),
            KpiCard::new(
                "Total Deals",
                format_count(summary.total_deals),
                theme.foreground(),
            ),
            KpiCard::new(
                "Total Revenue",
                format_compact_currency(summary.total_revenue, currency),
                theme.accent(),
            ),
            KpiCard::new(
                "Commission",
                format_compact_currency(summary.total_commission, currency),
                theme.accent_secondary(),
            ),
            KpiCard::new(
                "Avg Conversion",
                format_optional_percent(summary.average_conversion),
                theme.info(),
            ),
            KpiCard::new(
                "Avg Response",
                format_optional_response(summary.average_response),
                theme.warning(),
            ),
        ]
    }

    fn render_kpis(frame: &mut Frame, area: Rect, app: &App, summary: &RosterSummary) {
        let theme = app.current_theme();
        let cards = Self::kpi_cards(summary, &app.currency, theme);
        KpiStrip::render(frame, area, theme, "Team Overview", &cards);
    }

    fn render_revenue_chart(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let series = revenue_series(&app.dataset.agents);
        if series.is_empty() {
            render_empty_panel(frame, area, theme, "Revenue by Agent", "No agents");
            return;
        }

        let selected = app.selected_record().map(|r| r.id.as_str());
        let bars: Vec<Bar> = series
            .iter()
            .zip(&app.dataset.agents)
            .map(|(point, record)| {
                let color = if selected == Some(record.id.as_str()) {
                    theme.accent_secondary()
                } else {
                    theme.accent()
                };
                Bar::default()
                    // Tenths of a million keep one decimal of resolution.
                    .value((point.revenue_millions * 10.0).round() as u64)
                    .label(Line::from(short_name(&point.name)))
                    .text_value(format_millions(point.revenue_millions, &app.currency))
                    .style(Style::default().fg(color))
                    .value_style(Style::default().fg(theme.background()).bg(color))
            })
            .collect();

        let block = Block::default()
            .title(format!(" Revenue by Agent ({}M) ", app.currency))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()))
            .style(Style::default().bg(theme.surface()));
        let width = bar_width(block.inner(area).width, bars.len(), 1);

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(width)
            .bar_gap(1)
            .label_style(Style::default().fg(theme.foreground_dim()));
        frame.render_widget(chart, area);
    }

    fn render_conversion(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let items: Vec<BarItem> = conversion_bars(&app.dataset.agents)
            .into_iter()
            .map(|bar| BarItem {
                label: bar.name,
                percent: bar.width_percent,
                value: format_percent(bar.conversion),
                color: theme.success(),
            })
            .collect();

        if items.is_empty() {
            render_empty_panel(frame, area, theme, "Conversion Rate", "No agents");
        } else {
            BarList::render(frame, area, theme, "Conversion Rate", &items);
        }
    }
}

/// The roster table. Row geometry is exposed so mouse clicks can be mapped
/// back to agents without keeping render state around.
pub struct RosterTable;

impl RosterTable {
    /// Data rows that fit under the header inside the borders.
    pub fn visible_rows(area: Rect) -> usize {
        area.height.saturating_sub(3) as usize
    }

    /// First row shown so that `cursor` stays on screen.
    pub fn scroll_offset(cursor: usize, visible: usize) -> usize {
        if visible == 0 {
            return cursor;
        }
        (cursor + 1).saturating_sub(visible)
    }

    /// `(agent index, row rect)` for each agent row on screen.
    pub fn row_areas(area: Rect, offset: usize, total: usize) -> Vec<(usize, Rect)> {
        let inner = area.inner(Margin::new(1, 1));
        (0..Self::visible_rows(area))
            .map(|i| (offset + i, i as u16))
            .take_while(|(idx, _)| *idx < total)
            .map(|(idx, i)| (idx, Rect::new(inner.x, inner.y + 1 + i, inner.width, 1)))
            .collect()
    }

    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let rows = roster_rows(&app.dataset.agents);
        if rows.is_empty() {
            render_empty_panel(frame, area, theme, "Agents", "No agents in this dataset");
            return;
        }

        let cursor = app.cursor.min(rows.len() - 1);
        let visible = Self::visible_rows(area);
        let offset = Self::scroll_offset(cursor, visible);
        let selected = app.selected_record().map(|r| r.id.clone());

        let header = Row::new(vec![
            Cell::from(""),
            Cell::from("Agent"),
            Cell::from("Role"),
            Cell::from("Deals"),
            Cell::from("Revenue"),
            Cell::from("Conv."),
            Cell::from("Response"),
            Cell::from("Commission"),
            Cell::from("Status"),
        ])
        .style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        )
        .height(1);

        let table_rows: Vec<Row> = rows
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(i, row)| {
                Self::table_row(
                    row,
                    i == cursor,
                    selected.as_deref() == Some(row.id.as_str()),
                    &app.currency,
                    theme,
                )
            })
            .collect();

        let widths = [
            Constraint::Length(2),
            Constraint::Min(16),
            Constraint::Length(20),
            Constraint::Length(6),
            Constraint::Length(10),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(11),
            Constraint::Length(10),
        ];

        let table = Table::new(table_rows, widths)
            .header(header)
            .block(
                Block::default()
                    .title(format!(" Agents ({}) ", rows.len()))
                    .title_bottom(
                        Line::from(vec![
                            Span::styled(" j/k ", Style::default().fg(theme.accent())),
                            Span::styled("navigate  ", Style::default().fg(theme.foreground_dim())),
                            Span::styled("Enter/click ", Style::default().fg(theme.accent())),
                            Span::styled("details ", Style::default().fg(theme.foreground_dim())),
                        ])
                        .alignment(Alignment::Center),
                    )
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border()))
                    .style(Style::default().bg(theme.surface())),
            );

        frame.render_widget(table, area);
    }

    fn table_row<'a>(
        row: &'a RosterRow,
        is_cursor: bool,
        is_open: bool,
        currency: &str,
        theme: &dyn Theme,
    ) -> Row<'a> {
        let status_color = match row.status {
            AgentStatus::Active => theme.success(),
            AgentStatus::Inactive => theme.foreground_dim(),
        };
        let indicator = match (is_cursor, is_open) {
            (_, true) => "●",
            (true, false) => "▶",
            _ => " ",
        };
        let row_style = if is_cursor {
            Style::default()
                .bg(theme.selection())
                .fg(theme.foreground())
        } else {
            Style::default().fg(theme.foreground())
        };
        let name_style = if is_cursor || is_open {
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground())
        };

        Row::new([
            Cell::from(Span::styled(indicator, Style::default().fg(theme.accent()))),
            Cell::from(Span::styled(row.name.as_str(), name_style)),
            Cell::from(Span::styled(
                row.role.label(),
                Style::default().fg(theme.foreground_dim()),
            )),
            Cell::from(row.deals.to_string()),
            Cell::from(Span::styled(
                format_compact_currency(row.revenue, currency),
                Style::default().fg(theme.accent()),
            )),
            Cell::from(format_percent(row.conversion)),
            Cell::from(row.response_time.to_string()),
            Cell::from(format_compact_currency(row.commission, currency)),
            Cell::from(Span::styled(
                format!("{} {}", row.status.icon(), row.status.label()),
                Style::default().fg(status_color),
            )),
        ])
        .style(row_style)
        .height(1)
    }
}
