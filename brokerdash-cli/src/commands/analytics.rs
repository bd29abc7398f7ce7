use anyhow::Result;
use brokerdash_core::format::{
    format_compact_currency, format_count, format_optional_percent, format_percent,
    format_thousands, ZERO_STATE,
};
use brokerdash_core::shapers::{
    engagement_series, funnel_bars, lead_source_shares, roi_series, traffic_series,
};
use brokerdash_core::AnalyticsSummary;
use colored::Colorize;
use comfy_table::{Cell, Color};

use super::{align_right, new_table, text_bar, CommandContext};

const BAR_WIDTH: usize = 24;

pub fn handle_analytics_command(ctx: &CommandContext) -> Result<()> {
    let analytics = &ctx.dataset.analytics;
    let summary = AnalyticsSummary::from_dataset(analytics);

    if ctx.format.is_json() {
        let output = serde_json::json!({
            "source": ctx.source,
            "summary": summary,
            "traffic": traffic_series(&analytics.traffic),
            "lead_sources": lead_source_shares(&analytics.lead_sources),
            "funnel": funnel_bars(&analytics.funnel),
            "roi": roi_series(&analytics.roi),
            "engagement": engagement_series(&analytics.engagement),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print_summary(ctx, &summary);

    if analytics.is_empty() {
        println!();
        println!("{}", "No analytics data in this dataset.".yellow());
        return Ok(());
    }

    print_traffic(ctx);
    print_lead_sources(ctx);
    print_funnel(ctx);
    print_roi(ctx);
    print_engagement(ctx);

    Ok(())
}

fn print_summary(ctx: &CommandContext, summary: &AnalyticsSummary) {
    println!("{}", "Executive Analytics".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    println!(
        "  {:<18} {}",
        "Website Visits:".bold(),
        format_count(summary.total_visits)
    );
    println!(
        "  {:<18} {}",
        "Total Leads:".bold(),
        format_count(summary.total_leads)
    );
    println!(
        "  {:<18} {}",
        "Close Rate:".bold(),
        format_optional_percent(summary.close_rate)
    );
    println!(
        "  {:<18} {}",
        "Marketing Spend:".bold(),
        format_compact_currency(summary.marketing_spend, &ctx.currency)
    );
    println!(
        "  {:<18} {}",
        "Blended ROI:".bold(),
        format_optional_percent(summary.blended_roi)
    );
    println!(
        "  {:<18} {}",
        "Top Source:".bold(),
        summary.top_source.as_deref().unwrap_or(ZERO_STATE)
    );
}

fn print_traffic(ctx: &CommandContext) {
    let series = traffic_series(&ctx.dataset.analytics.traffic);
    if series.is_empty() {
        return;
    }

    println!();
    println!("  {}", "Website Traffic".yellow().bold());
    let mut table = new_table(&["Period", "Organic", "Paid", "Referral", "Total"]);
    for point in &series {
        table.add_row(vec![
            Cell::new(&point.name),
            Cell::new(format_count(point.organic)),
            Cell::new(format_count(point.paid)),
            Cell::new(format_count(point.referral)),
            Cell::new(format_count(point.total)).fg(Color::Cyan),
        ]);
    }
    align_right(&mut table, &[1, 2, 3, 4]);
    println!("{table}");
}

fn print_lead_sources(ctx: &CommandContext) {
    let shares = lead_source_shares(&ctx.dataset.analytics.lead_sources);
    if shares.is_empty() {
        return;
    }

    println!();
    println!("  {}", "Lead Sources".yellow().bold());
    let width = shares.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for share in &shares {
        println!(
            "    {:<width$} {:<bar$} {:>6}  {}",
            share.name,
            text_bar(share.share_percent, BAR_WIDTH).blue(),
            format_count(share.value),
            format_percent(share.share_percent).dimmed(),
            width = width,
            bar = BAR_WIDTH
        );
    }
}

fn print_funnel(ctx: &CommandContext) {
    let bars = funnel_bars(&ctx.dataset.analytics.funnel);
    if bars.is_empty() {
        return;
    }

    println!();
    println!("  {}", "Sales Funnel".yellow().bold());
    let width = bars.iter().map(|b| b.stage.len()).max().unwrap_or(0);
    for bar in &bars {
        let step = bar
            .step_conversion
            .map(|p| format!("({} of previous)", format_percent(p)))
            .unwrap_or_default();
        println!(
            "    {:<width$} {:<bar$} {:>6}  {}",
            bar.stage,
            text_bar(bar.width_percent, BAR_WIDTH).magenta(),
            format_count(bar.count),
            step.dimmed(),
            width = width,
            bar = BAR_WIDTH
        );
    }
}

fn print_roi(ctx: &CommandContext) {
    let series = roi_series(&ctx.dataset.analytics.roi);
    if series.is_empty() {
        return;
    }

    println!();
    println!("  {}", "Campaign ROI".yellow().bold());
    let mut table = new_table(&["Channel", "Spend", "Revenue", "ROI"]);
    for point in &series {
        let roi_cell = match point.roi_percent {
            Some(roi) if roi >= 0.0 => Cell::new(format_percent(roi)).fg(Color::Green),
            Some(roi) => Cell::new(format_percent(roi)).fg(Color::Red),
            None => Cell::new(ZERO_STATE).fg(Color::DarkGrey),
        };
        table.add_row(vec![
            Cell::new(&point.channel),
            Cell::new(format_thousands(point.spend_thousands, &ctx.currency)),
            Cell::new(format_thousands(point.revenue_thousands, &ctx.currency)),
            roi_cell,
        ]);
    }
    align_right(&mut table, &[1, 2, 3]);
    println!("{table}");
}

fn print_engagement(ctx: &CommandContext) {
    let series = engagement_series(&ctx.dataset.analytics.engagement);
    if series.is_empty() {
        return;
    }

    println!();
    println!("  {}", "Listing Engagement".yellow().bold());
    let mut table = new_table(&["Period", "Views", "Inquiries", "Tours", "Inquiry Rate"]);
    for point in &series {
        table.add_row(vec![
            Cell::new(&point.name),
            Cell::new(format_count(point.views)),
            Cell::new(format_count(point.inquiries)),
            Cell::new(format_count(point.tours)),
            Cell::new(format_percent(point.inquiry_rate)),
        ]);
    }
    align_right(&mut table, &[1, 2, 3, 4]);
    println!("{table}");
}
