use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use brokerdash_core::{BrokerdashConfig, BrokerdashError, CliErrorDisplay, FileSource, RecordSource};
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

mod commands;

use commands::{
    handle_agent_command, handle_analytics_command, handle_roster_command,
    handle_summary_command, CommandContext, OutputFormat,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser)]
#[command(name = "brokerdash")]
#[command(version = VERSION)]
#[command(about = "Brokerdash - agent performance and executive analytics reports")]
#[command(long_about = r#"
Brokerdash reads a brokerage dataset (agents, per-agent activity and marketing
analytics) and prints the same figures the dashboards show.

Without --dataset or dataset.path in the config, the built-in sample brokerage
is used. Run 'brokerdash roster' to list agent ids, then 'brokerdash agent <id>'
to drill into one.
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[arg(short, long, global = true)]
    verbose: bool,

    #[arg(
        short,
        long,
        global = true,
        help = "Dataset file (.json, .yaml, .yml, .toml)"
    )]
    dataset: Option<PathBuf>,

    #[arg(
        short,
        long,
        global = true,
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output format"
    )]
    format: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "List every agent in roster order")]
    Roster,

    #[command(about = "Show roster KPIs and per-agent revenue and conversion")]
    Summary,

    #[command(about = "Show the detail view for one agent")]
    Agent {
        #[arg(help = "Agent id, e.g. AG-1001")]
        id: String,
    },

    #[command(about = "Show traffic, lead sources, funnel, ROI and engagement")]
    Analytics,

    #[command(about = "Check that a dataset file loads and passes validation")]
    Validate {
        #[arg(help = "Dataset file to check")]
        path: PathBuf,
    },

    #[command(about = "Show version information")]
    Version {
        #[arg(long)]
        detailed: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match BrokerdashConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            return ExitCode::FAILURE;
        }
    };

    init_logging(cli.verbose, &config);

    if !config.display.color {
        colored::control::set_override(false);
    }

    match run(cli, &config) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            report_error(&e);
            ExitCode::FAILURE
        }
    }
}

/// Logs go to stderr so `--format json` output stays parseable.
fn init_logging(verbose: bool, config: &BrokerdashConfig) {
    let filter = if verbose {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let layer = if config.logging.json_format {
        fmt::layer().json().with_writer(io::stderr).boxed()
    } else {
        fmt::layer()
            .with_target(false)
            .with_writer(io::stderr)
            .boxed()
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn report_error(e: &anyhow::Error) {
    match e.downcast_ref::<BrokerdashError>() {
        Some(err) => eprintln!("{}: {}", "Error".red().bold(), CliErrorDisplay::new(err)),
        None => eprintln!("{}: {:#}", "Error".red().bold(), e),
    }
}

fn run(cli: Cli, config: &BrokerdashConfig) -> anyhow::Result<()> {
    let format = cli.format;
    let load = || CommandContext::load(cli.dataset.as_deref(), config, format);

    match cli.command {
        Commands::Roster => handle_roster_command(&load()?),
        Commands::Summary => handle_summary_command(&load()?),
        Commands::Agent { id } => handle_agent_command(&load()?, &id),
        Commands::Analytics => handle_analytics_command(&load()?),
        Commands::Validate { path } => cmd_validate(&path, format),
        Commands::Version { detailed } => cmd_version(detailed),
    }
}

fn cmd_validate(path: &Path, format: OutputFormat) -> anyhow::Result<()> {
    let source = FileSource::new(path);
    let dataset = source.load()?;

    if format.is_json() {
        let output = serde_json::json!({
            "valid": true,
            "path": path.display().to_string(),
            "agents": dataset.agents.len(),
            "activity": dataset.activity.len(),
            "has_analytics": !dataset.analytics.is_empty(),
        });
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    println!(
        "{} {}",
        "✓".green().bold(),
        format!("{} is a valid dataset", path.display()).green()
    );
    println!("  {} {} agents", "→".blue(), dataset.agents.len());
    println!(
        "  {} {} activity entries",
        "→".blue(),
        dataset.activity.len()
    );
    if dataset.analytics.is_empty() {
        println!("  {} {}", "!".yellow(), "No analytics section".yellow());
    }

    Ok(())
}

fn cmd_version(detailed: bool) -> anyhow::Result<()> {
    if detailed {
        println!("{}", "Brokerdash Version Information".cyan().bold());
        println!("{}", "═".repeat(40).dimmed());
        println!("  {:<15} {}", "Version:".bold(), VERSION);
        println!("  {:<15} {}", "Name:".bold(), NAME);
        println!("  {:<15} {}", "Core:".bold(), brokerdash_core::VERSION);
        println!("  {:<15} Apache-2.0", "License:".bold());
        println!();
        println!("  {}", "Dataset Formats:".bold());
        println!("    json, yaml, yml, toml");
        println!();
        println!("  {}", "Build Information:".bold());
        println!("    Rust Edition: 2021");
        #[cfg(debug_assertions)]
        println!("    Build:        Debug");
        #[cfg(not(debug_assertions))]
        println!("    Build:        Release");
    } else {
        println!("brokerdash {}", VERSION);
    }

    Ok(())
}
