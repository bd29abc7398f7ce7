use brokerdash_core::{
    format::{
        format_compact, format_compact_currency, format_count, format_optional_percent,
        format_percent, ZERO_STATE,
    },
    shapers::{
        engagement_series, funnel_bars, lead_source_shares, roi_series, traffic_series,
        TrafficSeriesPoint,
    },
    AnalyticsSummary,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Borders, Cell, Chart, Dataset as ChartDataset,
        GraphType, Row, Table,
    },
    Frame,
};

use super::render_empty_panel;
use crate::app::App;
use crate::theme::Theme;
use crate::ui::widgets::{BarItem, BarList, KpiCard, KpiStrip};

pub struct AnalyticsView;

impl AnalyticsView {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4),
                Constraint::Percentage(50),
                Constraint::Min(8),
            ])
            .split(area);

        let top = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(rows[1]);

        let bottom = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ])
            .split(rows[2]);

        let summary = AnalyticsSummary::from_dataset(&app.dataset.analytics);
        Self::render_kpis(frame, rows[0], app, &summary);
        Self::render_traffic(frame, top[0], app);
        Self::render_lead_sources(frame, top[1], app);
        Self::render_funnel(frame, bottom[0], app);
        Self::render_roi(frame, bottom[1], app, &summary);
        Self::render_engagement(frame, bottom[2], app);
    }

    pub fn kpi_cards(summary: &AnalyticsSummary, currency: &str, theme: &dyn Theme) -> Vec<KpiCard> {
        vec![
            KpiCard::new(
                "Website Visits",
                format_count(summary.total_visits),
                theme.accent(),
            ),
            KpiCard::new(
                "Total Leads",
                format_count(summary.total_leads),
                theme.info(),
            ),
            KpiCard::new(
                "Close Rate",
                format_optional_percent(summary.close_rate),
                theme.success(),
            ),
            KpiCard::new(
                "Marketing Spend",
                format_compact_currency(summary.marketing_spend, currency),
                theme.warning(),
            ),
            KpiCard::new(
                "Blended ROI",
                format_optional_percent(summary.blended_roi),
                theme.accent_secondary(),
            ),
            KpiCard::new(
                "Top Source",
                summary
                    .top_source
                    .clone()
                    .unwrap_or_else(|| ZERO_STATE.to_string()),
                theme.foreground(),
            ),
        ]
    }

    fn render_kpis(frame: &mut Frame, area: Rect, app: &App, summary: &AnalyticsSummary) {
        let theme = app.current_theme();
        let cards = Self::kpi_cards(summary, &app.currency, theme);
        KpiStrip::render(frame, area, theme, "Executive Summary", &cards);
    }

    fn traffic_points(series: &[TrafficSeriesPoint], pick: fn(&TrafficSeriesPoint) -> u64) -> Vec<(f64, f64)> {
        series
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, pick(p) as f64))
            .collect()
    }

    fn render_traffic(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let series = traffic_series(&app.dataset.analytics.traffic);
        if series.is_empty() {
            render_empty_panel(frame, area, theme, "Website Traffic", "No traffic data");
            return;
        }

        let organic = Self::traffic_points(&series, |p| p.organic);
        let paid = Self::traffic_points(&series, |p| p.paid);
        let referral = Self::traffic_points(&series, |p| p.referral);

        let datasets = vec![
            ChartDataset::default()
                .name("Organic")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series(0)))
                .data(&organic),
            ChartDataset::default()
                .name("Paid")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series(1)))
                .data(&paid),
            ChartDataset::default()
                .name("Referral")
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(theme.series(2)))
                .data(&referral),
        ];

        let peak = series
            .iter()
            .map(|p| p.organic.max(p.paid).max(p.referral))
            .max()
            .unwrap_or(0);
        let y_max = (peak as f64 * 1.1).max(1.0);
        let x_max = (series.len().saturating_sub(1)).max(1) as f64;

        let axis_style = Style::default().fg(theme.foreground_dim());
        let x_labels: Vec<Span> = series
            .iter()
            .map(|p| Span::styled(p.name.clone(), axis_style))
            .collect();
        let y_labels = vec![
            Span::styled("0", axis_style),
            Span::styled(format_compact((y_max / 2.0) as u64), axis_style),
            Span::styled(format_compact(y_max as u64), axis_style),
        ];

        let chart = Chart::new(datasets)
            .block(
                Block::default()
                    .title(" Website Traffic ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border()))
                    .style(Style::default().bg(theme.surface())),
            )
            .x_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([0.0, x_max])
                    .labels(x_labels),
            )
            .y_axis(
                Axis::default()
                    .style(axis_style)
                    .bounds([0.0, y_max])
                    .labels(y_labels),
            );
        frame.render_widget(chart, area);
    }

    fn render_lead_sources(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let items: Vec<BarItem> = lead_source_shares(&app.dataset.analytics.lead_sources)
            .into_iter()
            .enumerate()
            .map(|(i, share)| BarItem {
                label: share.name,
                percent: share.share_percent,
                value: format!(
                    "{} · {}",
                    format_count(share.value),
                    format_percent(share.share_percent)
                ),
                color: theme.series(i),
            })
            .collect();

        if items.is_empty() {
            render_empty_panel(frame, area, theme, "Lead Sources", "No lead source data");
        } else {
            BarList::render(frame, area, theme, "Lead Sources", &items);
        }
    }

    fn render_funnel(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let items: Vec<BarItem> = funnel_bars(&app.dataset.analytics.funnel)
            .into_iter()
            .map(|bar| BarItem {
                label: bar.stage,
                percent: bar.width_percent,
                value: match bar.step_conversion {
                    Some(step) => format!("{} ({})", format_count(bar.count), format_percent(step)),
                    None => format_count(bar.count),
                },
                color: theme.accent(),
            })
            .collect();

        if items.is_empty() {
            render_empty_panel(frame, area, theme, "Sales Funnel", "No funnel data");
        } else {
            BarList::render(frame, area, theme, "Sales Funnel", &items);
        }
    }

    fn render_roi(frame: &mut Frame, area: Rect, app: &App, summary: &AnalyticsSummary) {
        let theme = app.current_theme();
        let series = roi_series(&app.dataset.analytics.roi);
        if series.is_empty() {
            render_empty_panel(frame, area, theme, "Campaign ROI", "No campaign data");
            return;
        }

        let spend_style = Style::default().fg(theme.warning());
        let revenue_style = Style::default().fg(theme.success());

        let groups: Vec<BarGroup> = series
            .iter()
            .map(|point| {
                let bars = [
                    Bar::default()
                        .value(point.spend_thousands.round() as u64)
                        .text_value(format!("{:.0}", point.spend_thousands))
                        .style(spend_style)
                        .value_style(Style::default().fg(theme.background()).bg(theme.warning())),
                    Bar::default()
                        .value(point.revenue_thousands.round() as u64)
                        .text_value(format!("{:.0}", point.revenue_thousands))
                        .style(revenue_style)
                        .value_style(Style::default().fg(theme.background()).bg(theme.success())),
                ];
                BarGroup::default()
                    .label(Line::from(point.channel.clone()))
                    .bars(&bars)
            })
            .collect();

        let legend = Line::from(vec![
            Span::styled(" ■ spend ", spend_style),
            Span::styled("■ revenue ", revenue_style),
            Span::styled(
                format!("(K{}) ", app.currency),
                Style::default().fg(theme.foreground_dim()),
            ),
        ]);

        let mut chart = BarChart::default()
            .block(
                Block::default()
                    .title(format!(
                        " Campaign ROI · {} ",
                        format_optional_percent(summary.blended_roi)
                    ))
                    .title_bottom(legend)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.border()))
                    .style(Style::default().bg(theme.surface())),
            )
            .bar_width(4)
            .bar_gap(0)
            .group_gap(2)
            .label_style(Style::default().fg(theme.foreground_dim()));
        for group in groups {
            chart = chart.data(group);
        }
        frame.render_widget(chart, area);
    }

    fn render_engagement(frame: &mut Frame, area: Rect, app: &App) {
        let theme = app.current_theme();
        let series = engagement_series(&app.dataset.analytics.engagement);
        if series.is_empty() {
            render_empty_panel(frame, area, theme, "Listing Engagement", "No engagement data");
            return;
        }

        let header = Row::new(["Month", "Views", "Inquiries", "Tours", "Inq. %"]).style(
            Style::default()
                .fg(theme.accent())
                .add_modifier(Modifier::BOLD),
        );
        let rows: Vec<Row> = series
            .iter()
            .map(|point| {
                Row::new([
                    Cell::from(point.name.as_str()),
                    Cell::from(format_count(point.views)),
                    Cell::from(format_count(point.inquiries)),
                    Cell::from(format_count(point.tours)),
                    Cell::from(Span::styled(
                        format_percent(point.inquiry_rate),
                        Style::default().fg(theme.success()),
                    )),
                ])
            })
            .collect();

        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Length(8),
                Constraint::Length(9),
                Constraint::Length(6),
                Constraint::Length(7),
            ],
        )
        .header(header)
        .block(
            Block::default()
                .title(" Listing Engagement ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.border()))
                .style(Style::default().bg(theme.surface())),
        );
        frame.render_widget(table, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::TOKYO_NIGHT;

    #[test]
    fn test_kpi_cards_zero_state() {
        let cards = AnalyticsView::kpi_cards(&AnalyticsSummary::default(), "$", &TOKYO_NIGHT);
        let values: Vec<&str> = cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["0", "0", "—", "$0", "—", "—"]);
    }

    #[test]
    fn test_traffic_points_follow_month_order() {
        let series = vec![
            TrafficSeriesPoint {
                name: "Jan".to_string(),
                organic: 10,
                paid: 5,
                referral: 1,
                total: 16,
            },
            TrafficSeriesPoint {
                name: "Feb".to_string(),
                organic: 12,
                paid: 4,
                referral: 2,
                total: 18,
            },
        ];
        assert_eq!(
            AnalyticsView::traffic_points(&series, |p| p.paid),
            vec![(0.0, 5.0), (1.0, 4.0)]
        );
    }
}
