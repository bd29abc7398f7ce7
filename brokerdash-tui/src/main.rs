use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::{Context, Result};
use brokerdash_core::{config::ensure_data_dir, open_source, BrokerdashConfig};
use brokerdash_tui::{events::Keybinds, App, AppOptions, View};
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

const LOG_FILE: &str = "brokerdash-tui.log";

#[derive(Parser)]
#[command(name = "brokerdash-tui")]
#[command(version)]
#[command(about = "Agent performance and executive analytics dashboards")]
struct Args {
    /// Dataset file (.json, .yaml, .yml or .toml). Defaults to the built-in sample brokerage.
    #[arg(short, long)]
    dataset: Option<PathBuf>,

    /// Theme name, e.g. "Tokyo Night" or "Nord".
    #[arg(short, long)]
    theme: Option<String>,

    /// Screen to open first.
    #[arg(long, value_enum, default_value_t = StartView::Performance)]
    view: StartView,

    /// Extra config file layered over the default search paths.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum StartView {
    Performance,
    Analytics,
}

impl From<StartView> for View {
    fn from(view: StartView) -> Self {
        match view {
            StartView::Performance => View::Performance,
            StartView::Analytics => View::Analytics,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => BrokerdashConfig::load_with_file(path.clone()),
        None => BrokerdashConfig::load(),
    }
    .context("Failed to load configuration")?;

    setup_logging(&config);

    let dataset_path = args.dataset.or_else(|| config.dataset_path().cloned());
    let source = open_source(dataset_path.as_deref());

    let mut options = AppOptions::from_config(&config);
    if let Some(theme) = args.theme {
        options.theme = theme;
    }
    options.view = args.view.into();
    options.keybinds = Keybinds::load_or_default();

    let mut app = App::from_load_result(source.load(), source.name(), options);

    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;

    if let Err(e) = result {
        eprintln!("Application error: {e}");
        return Err(e);
    }

    Ok(())
}

/// Logs go to a file under the data directory; writing to the terminal would
/// corrupt the alternate screen. Without a writable data directory there is
/// no logging at all.
fn setup_logging(config: &BrokerdashConfig) {
    let file = match ensure_data_dir().and_then(|dir| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(dir.join(LOG_FILE))
    }) {
        Ok(file) => file,
        Err(_) => return,
    };

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_level()));

    let layer = if config.logging.json_format {
        fmt::layer().json().with_writer(Mutex::new(file)).boxed()
    } else {
        fmt::layer()
            .with_ansi(false)
            .with_target(false)
            .with_writer(Mutex::new(file))
            .boxed()
    };

    tracing_subscriber::registry().with(layer).with(filter).init();
}

fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
