use anyhow::Result;
use brokerdash_core::format::{
    format_compact_currency, format_count, format_currency, format_millions,
    format_optional_percent, format_optional_response, format_percent, format_thousands,
};
use brokerdash_core::shapers::{commission_series, conversion_bars, deal_series};
use brokerdash_core::{revenue_by_agent, roster_rows, RosterSummary};
use colored::Colorize;
use comfy_table::{Cell, Color};

use super::{align_right, new_table, text_bar, CommandContext};

const BAR_WIDTH: usize = 30;

pub fn handle_roster_command(ctx: &CommandContext) -> Result<()> {
    let rows = roster_rows(&ctx.dataset.agents);

    if ctx.format.is_json() {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if rows.is_empty() {
        println!("{}", "No agents in this dataset.".yellow());
        return Ok(());
    }

    println!("{}", format!("Agents ({})", rows.len()).cyan().bold());
    println!("  {} {}", "Source:".dimmed(), ctx.source);
    println!();

    let mut table = new_table(&[
        "ID",
        "Agent",
        "Role",
        "Deals",
        "Revenue",
        "Conv.",
        "Response",
        "Commission",
        "Status",
    ]);

    for row in &rows {
        let status_cell = if row.status.is_active() {
            Cell::new(format!("{} {}", row.status.icon(), row.status)).fg(Color::Green)
        } else {
            Cell::new(format!("{} {}", row.status.icon(), row.status)).fg(Color::DarkGrey)
        };

        table.add_row(vec![
            Cell::new(&row.id).fg(Color::DarkGrey),
            Cell::new(&row.name),
            Cell::new(row.role),
            Cell::new(row.deals),
            Cell::new(format_currency(row.revenue, &ctx.currency)),
            Cell::new(format_percent(row.conversion)),
            Cell::new(row.response_time),
            Cell::new(format_currency(row.commission, &ctx.currency)),
            status_cell,
        ]);
    }
    align_right(&mut table, &[3, 4, 5, 6, 7]);

    println!("{table}");
    Ok(())
}

pub fn handle_summary_command(ctx: &CommandContext) -> Result<()> {
    let records = &ctx.dataset.agents;
    let summary = RosterSummary::from_records(records);
    let revenue = revenue_by_agent(records);
    let conversion = conversion_bars(records);

    if ctx.format.is_json() {
        let output = serde_json::json!({
            "source": ctx.source,
            "summary": summary,
            "revenue_by_agent": revenue,
            "conversion": conversion,
            "commission": commission_series(records),
            "deals": deal_series(records),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!("{}", "Roster Summary".cyan().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();
    println!(
        "  {:<18} {} / {}",
        "Active Agents:".bold(),
        summary.active_agents,
        summary.total_agents
    );
    println!(
        "  {:<18} {}",
        "Total Deals:".bold(),
        format_count(summary.total_deals)
    );
    println!(
        "  {:<18} {}",
        "Total Revenue:".bold(),
        format_compact_currency(summary.total_revenue, &ctx.currency)
    );
    println!(
        "  {:<18} {}",
        "Commission:".bold(),
        format_compact_currency(summary.total_commission, &ctx.currency)
    );
    println!(
        "  {:<18} {}",
        "Avg Conversion:".bold(),
        format_optional_percent(summary.average_conversion)
    );
    println!(
        "  {:<18} {}",
        "Avg Response:".bold(),
        format_optional_response(summary.average_response)
    );

    if records.is_empty() {
        println!();
        println!("{}", "No agents in this dataset.".yellow());
        return Ok(());
    }

    let name_width = revenue.iter().map(|p| p.name.len()).max().unwrap_or(0);
    let top = revenue
        .iter()
        .map(|p| p.revenue_millions)
        .fold(0.0_f64, f64::max);

    println!();
    println!("  {}", "Revenue by Agent".yellow().bold());
    for point in &revenue {
        let percent = if top > 0.0 {
            point.revenue_millions * 100.0 / top
        } else {
            0.0
        };
        println!(
            "    {:<width$} {} {}",
            point.name,
            text_bar(percent, BAR_WIDTH).blue(),
            format_millions(point.revenue_millions, &ctx.currency),
            width = name_width
        );
    }

    println!();
    println!("  {}", "Conversion Rate".yellow().bold());
    for bar in &conversion {
        println!(
            "    {:<width$} {} {}",
            bar.name,
            text_bar(bar.width_percent, BAR_WIDTH).green(),
            format_percent(bar.conversion),
            width = name_width
        );
    }

    println!();
    println!("  {}", "Commission".yellow().bold());
    for point in commission_series(records) {
        println!(
            "    {:<width$} {}",
            point.name,
            format_thousands(point.commission_thousands, &ctx.currency),
            width = name_width
        );
    }

    Ok(())
}
