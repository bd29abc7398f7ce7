use anyhow::Result;
use brokerdash_core::format::{
    format_currency, format_millions, format_percent, format_rank, format_rating,
};
use brokerdash_core::models::{LeadStage, PayoutStatus};
use brokerdash_core::{AgentDetail, Avatar};
use colored::Colorize;
use comfy_table::{Cell, Color};

use super::{align_right, new_table, CommandContext};

pub fn handle_agent_command(ctx: &CommandContext, id: &str) -> Result<()> {
    let detail = AgentDetail::for_agent(&ctx.dataset, id)?;

    if ctx.format.is_json() {
        println!("{}", serde_json::to_string_pretty(&detail)?);
        return Ok(());
    }

    print_identity(&detail);
    print_figures(ctx, &detail);
    print_trend(ctx, &detail);
    print_leads(ctx, &detail);
    print_commissions(ctx, &detail);

    Ok(())
}

fn print_identity(detail: &AgentDetail) {
    println!(
        "{} {}",
        detail.name.cyan().bold(),
        format!("({})", detail.id).dimmed()
    );
    println!("{}", "═".repeat(40).dimmed());
    println!();

    let status = format!("{} {}", detail.status.icon(), detail.status);
    let status = if detail.status.is_active() {
        status.green()
    } else {
        status.dimmed()
    };

    println!("  {:<15} {}", "Role:".bold(), detail.role);
    println!("  {:<15} {}", "Status:".bold(), status);
    let avatar = match &detail.avatar {
        Avatar::Remote(uri) => uri.clone(),
        Avatar::Placeholder => format!("placeholder {}", Avatar::PLACEHOLDER_GLYPH),
    };
    println!("  {:<15} {}", "Avatar:".bold(), avatar.dimmed());
}

fn print_figures(ctx: &CommandContext, detail: &AgentDetail) {
    println!();
    println!("  {}", "Standing".yellow().bold());
    println!(
        "    {:<17} {}",
        "Rank:",
        format_rank(detail.rank, detail.roster_size)
    );
    println!("    {:<17} {} ★", "Rating:", format_rating(detail.rating));
    println!("    {:<17} {}", "Assigned Leads:", detail.lead_count);

    println!();
    println!("  {}", "Figures".yellow().bold());
    println!("    {:<17} {}", "Deals:", detail.deals);
    println!(
        "    {:<17} {}",
        "Revenue:",
        format_currency(detail.revenue, &ctx.currency)
    );
    println!(
        "    {:<17} {}",
        "Commission:",
        format_currency(detail.commission, &ctx.currency)
    );
    println!(
        "    {:<17} {}",
        "Pending Payout:",
        format_currency(detail.pending_commission, &ctx.currency)
    );
    println!("    {:<17} {}", "Conversion:", format_percent(detail.conversion));
    println!("    {:<17} {}", "Response Time:", detail.response_time);
}

fn print_trend(ctx: &CommandContext, detail: &AgentDetail) {
    println!();
    println!("  {}", "Monthly Revenue".yellow().bold());
    if detail.trend.is_empty() {
        println!("    {}", "No monthly history".dimmed());
        return;
    }

    let mut table = new_table(&["Month", "Revenue", "Deals"]);
    for point in &detail.trend {
        table.add_row(vec![
            Cell::new(&point.month),
            Cell::new(format_millions(point.revenue_millions, &ctx.currency)),
            Cell::new(point.deals),
        ]);
    }
    align_right(&mut table, &[1, 2]);
    println!("{table}");
}

fn print_leads(ctx: &CommandContext, detail: &AgentDetail) {
    println!();
    println!("  {}", "Assigned Leads".yellow().bold());
    if detail.leads.is_empty() {
        println!("    {}", "No assigned leads".dimmed());
        return;
    }

    let mut table = new_table(&["Client", "Property", "Stage", "Budget"]);
    for lead in &detail.leads {
        let stage_color = match lead.stage {
            LeadStage::New => Color::Cyan,
            LeadStage::Contacted => Color::Blue,
            LeadStage::Viewing => Color::Magenta,
            LeadStage::Negotiation => Color::Yellow,
            LeadStage::Closed => Color::Green,
        };
        table.add_row(vec![
            Cell::new(&lead.name),
            Cell::new(&lead.property),
            Cell::new(lead.stage.label()).fg(stage_color),
            Cell::new(format_currency(lead.budget, &ctx.currency)),
        ]);
    }
    align_right(&mut table, &[3]);
    println!("{table}");
}

fn print_commissions(ctx: &CommandContext, detail: &AgentDetail) {
    println!();
    println!("  {}", "Commission Log".yellow().bold());
    if detail.commissions.is_empty() {
        println!("    {}", "No commission entries".dimmed());
        return;
    }

    let mut table = new_table(&["Date", "Property", "Amount", "Status"]);
    for entry in &detail.commissions {
        let status_cell = match entry.status {
            PayoutStatus::Paid => Cell::new(entry.status.label()).fg(Color::Green),
            PayoutStatus::Pending => Cell::new(entry.status.label()).fg(Color::Yellow),
        };
        table.add_row(vec![
            Cell::new(entry.date.format("%Y-%m-%d")),
            Cell::new(&entry.property),
            Cell::new(format_currency(entry.amount, &ctx.currency)),
            status_cell,
        ]);
    }
    align_right(&mut table, &[2]);
    println!("{table}");
}
