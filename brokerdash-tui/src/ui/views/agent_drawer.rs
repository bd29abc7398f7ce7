use brokerdash_core::{
    format::{
        format_compact_currency, format_currency, format_millions, format_percent, format_rank,
        format_rating,
    },
    models::{LeadStage, PayoutStatus},
    AgentDetail, AgentStatus, Avatar,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Cell, Clear, Paragraph, Row, Table},
    Frame,
};

use super::{bar_width, render_empty_panel};
use crate::app::App;
use crate::theme::Theme;
use crate::ui::widgets::{KpiCard, KpiStrip};

const MIN_WIDTH: u16 = 48;
const CLOSE_LABEL: &str = "[x]";

/// Right-hand overlay with everything known about one agent.
pub struct AgentDrawer;

impl AgentDrawer {
    /// The drawer covers the right part of `content`, full height.
    pub fn area(content: Rect) -> Rect {
        let width = (u32::from(content.width) * 45 / 100) as u16;
        let width = width.max(MIN_WIDTH).min(content.width);
        Rect::new(content.right() - width, content.y, width, content.height)
    }

    /// The `[x]` on the drawer's top border.
    pub fn close_button_area(drawer: Rect) -> Rect {
        let width = (CLOSE_LABEL.len() as u16).min(drawer.width);
        let x = drawer.right().saturating_sub(width + 2).max(drawer.x);
        Rect::new(x, drawer.y, width, drawer.height.min(1))
    }

    pub fn render(frame: &mut Frame, content: Rect, app: &App, detail: &AgentDetail) {
        let theme = app.current_theme();
        let drawer = Self::area(content);

        frame
            .buffer_mut()
            .set_style(content, Style::default().add_modifier(Modifier::DIM));
        frame.render_widget(Clear, drawer);

        let block = Block::default()
            .title(" Agent Detail ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent()))
            .style(Style::default().bg(theme.surface()).fg(theme.foreground()));
        let inner = block.inner(drawer);
        frame.render_widget(block, drawer);

        frame.render_widget(
            Paragraph::new(Span::styled(
                CLOSE_LABEL,
                Style::default()
                    .fg(theme.error())
                    .add_modifier(Modifier::BOLD),
            )),
            Self::close_button_area(drawer),
        );

        let sections = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(4),
                Constraint::Length(2),
                Constraint::Length(9),
                Constraint::Min(4),
                Constraint::Min(4),
            ])
            .split(inner);

        Self::render_identity(frame, sections[0], theme, detail);
        Self::render_vanity_metrics(frame, sections[1], theme, detail);
        Self::render_figures(frame, sections[2], theme, detail, &app.currency);
        Self::render_trend(frame, sections[3], theme, detail, &app.currency);
        Self::render_leads(frame, sections[4], theme, detail, &app.currency);
        Self::render_commissions(frame, sections[5], theme, detail, &app.currency);
    }

    /// Terminals cannot draw photos: agents with one get an initials badge,
    /// the rest a placeholder glyph.
    pub fn badge(detail: &AgentDetail) -> String {
        match detail.avatar {
            Avatar::Remote(_) => format!(" {} ", detail.initials),
            Avatar::Placeholder => format!(" {} ", Avatar::PLACEHOLDER_GLYPH),
        }
    }

    fn render_identity(frame: &mut Frame, area: Rect, theme: &dyn Theme, detail: &AgentDetail) {
        let status_color = match detail.status {
            AgentStatus::Active => theme.success(),
            AgentStatus::Inactive => theme.foreground_dim(),
        };

        let lines = vec![
            Line::from(vec![
                Span::styled(
                    Self::badge(detail),
                    Style::default()
                        .fg(theme.background())
                        .bg(theme.accent())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" "),
                Span::styled(
                    detail.name.clone(),
                    Style::default()
                        .fg(theme.foreground())
                        .add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    detail.role.label(),
                    Style::default().fg(theme.foreground_dim()),
                ),
                Span::raw("  "),
                Span::styled(
                    format!("{} {}", detail.status.icon(), detail.status.label()),
                    Style::default().fg(status_color),
                ),
            ]),
            Line::from(Span::styled(
                detail.id.clone(),
                Style::default().fg(theme.foreground_dim()),
            )),
        ];

        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_vanity_metrics(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        detail: &AgentDetail,
    ) {
        let rating = match detail.rating {
            Some(_) => format!("{} ★", format_rating(detail.rating)),
            None => format_rating(None),
        };
        let cards = [
            KpiCard::new(
                "Rank",
                format_rank(detail.rank, detail.roster_size),
                theme.accent(),
            ),
            KpiCard::new("Rating", rating, theme.warning()),
            KpiCard::new("Leads", detail.lead_count.to_string(), theme.info()),
        ];
        KpiStrip::render(frame, area, theme, "Standing", &cards);
    }

    fn render_figures(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        detail: &AgentDetail,
        currency: &str,
    ) {
        let label = |text: &'static str| Span::styled(text, Style::default().fg(theme.foreground_dim()));
        let value = |text: String| {
            Span::styled(
                text,
                Style::default()
                    .fg(theme.foreground())
                    .add_modifier(Modifier::BOLD),
            )
        };

        let lines = vec![
            Line::from(vec![
                label(" Revenue "),
                value(format_compact_currency(detail.revenue, currency)),
                label("  Deals "),
                value(detail.deals.to_string()),
                label("  Commission "),
                value(format_compact_currency(detail.commission, currency)),
            ]),
            Line::from(vec![
                label(" Conversion "),
                value(format_percent(detail.conversion)),
                label("  Response "),
                value(detail.response_time.to_string()),
                label("  Pending "),
                value(format_compact_currency(detail.pending_commission, currency)),
            ]),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_trend(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        detail: &AgentDetail,
        currency: &str,
    ) {
        if detail.trend.is_empty() {
            render_empty_panel(frame, area, theme, "Monthly Revenue", "No monthly history");
            return;
        }

        let bars: Vec<Bar> = detail
            .trend
            .iter()
            .map(|point| {
                Bar::default()
                    .value((point.revenue_millions * 10.0).round() as u64)
                    .label(Line::from(point.month.clone()))
                    .text_value(format_millions(point.revenue_millions, currency))
                    .style(Style::default().fg(theme.accent_secondary()))
                    .value_style(
                        Style::default()
                            .fg(theme.background())
                            .bg(theme.accent_secondary()),
                    )
            })
            .collect();

        let block = Block::default()
            .title(" Monthly Revenue ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.border()));
        let width = bar_width(block.inner(area).width, bars.len(), 1);

        let chart = BarChart::default()
            .block(block)
            .data(BarGroup::default().bars(&bars))
            .bar_width(width)
            .bar_gap(1)
            .label_style(Style::default().fg(theme.foreground_dim()));
        frame.render_widget(chart, area);
    }

    fn stage_color(stage: LeadStage, theme: &dyn Theme) -> ratatui::style::Color {
        match stage {
            LeadStage::New => theme.info(),
            LeadStage::Contacted | LeadStage::Viewing => theme.accent(),
            LeadStage::Negotiation => theme.warning(),
            LeadStage::Closed => theme.success(),
        }
    }

    fn render_leads(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        detail: &AgentDetail,
        currency: &str,
    ) {
        if detail.leads.is_empty() {
            render_empty_panel(frame, area, theme, "Assigned Leads", "No assigned leads");
            return;
        }

        let header = Row::new(["Client", "Property", "Stage", "Budget"]).style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = detail
            .leads
            .iter()
            .map(|lead| {
                Row::new([
                    Cell::from(lead.name.as_str()),
                    Cell::from(Span::styled(
                        lead.property.as_str(),
                        Style::default().fg(theme.foreground_dim()),
                    )),
                    Cell::from(Span::styled(
                        lead.stage.label(),
                        Style::default().fg(Self::stage_color(lead.stage, theme)),
                    )),
                    Cell::from(format_compact_currency(lead.budget, currency)),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Min(12),
                Constraint::Min(14),
                Constraint::Length(12),
                Constraint::Length(9),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(format!(" Assigned Leads ({}) ", detail.lead_count))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border())),
        );
        frame.render_widget(table, area);
    }

    fn render_commissions(
        frame: &mut Frame,
        area: Rect,
        theme: &dyn Theme,
        detail: &AgentDetail,
        currency: &str,
    ) {
        if detail.commissions.is_empty() {
            render_empty_panel(frame, area, theme, "Commission Log", "No commission entries");
            return;
        }

        let header = Row::new(["Date", "Property", "Amount", "Status"]).style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = detail
            .commissions
            .iter()
            .map(|entry| {
                let status_color = match entry.status {
                    PayoutStatus::Paid => theme.success(),
                    PayoutStatus::Pending => theme.warning(),
                };
                Row::new([
                    Cell::from(entry.date.format("%d %b %Y").to_string()),
                    Cell::from(entry.property.as_str()),
                    Cell::from(format_currency(entry.amount, currency)),
                    Cell::from(Span::styled(
                        entry.status.label(),
                        Style::default().fg(status_color),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(11),
                Constraint::Min(14),
                Constraint::Length(11),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Commission Log ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border())),
        );
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brokerdash_core::source::{RecordSource, SampleSource};

    #[test]
    fn test_drawer_area_right_aligned() {
        let content = Rect::new(1, 2, 118, 30);
        let drawer = AgentDrawer::area(content);
        assert_eq!(drawer.right(), content.right());
        assert_eq!(drawer.width, 53);
        assert_eq!(drawer.y, content.y);
        assert_eq!(drawer.height, content.height);

        let narrow = AgentDrawer::area(Rect::new(0, 0, 40, 10));
        assert_eq!(narrow.width, 40);

        let wide = AgentDrawer::area(Rect::new(0, 0, 2000, 10));
        assert_eq!(wide.width, 900);
        assert_eq!(wide.right(), 2000);
    }

    #[test]
    fn test_close_button_inside_drawer_border() {
        let drawer = Rect::new(60, 2, 50, 20);
        let close = AgentDrawer::close_button_area(drawer);
        assert_eq!(close.y, drawer.y);
        assert_eq!(close.width, 3);
        assert!(close.x >= drawer.x && close.right() < drawer.right());
    }

    #[test]
    fn test_badge_follows_avatar_policy() {
        let dataset = SampleSource.load().unwrap();
        let with_photo = AgentDetail::for_agent(&dataset, "AG-1001").unwrap();
        assert_eq!(AgentDrawer::badge(&with_photo), " LH ");

        let without_photo = AgentDetail::for_agent(&dataset, "AG-1006").unwrap();
        assert_eq!(
            AgentDrawer::badge(&without_photo),
            format!(" {} ", Avatar::PLACEHOLDER_GLYPH)
        );
    }
}
