pub mod agent;
pub mod analytics;
pub mod roster;

pub use agent::handle_agent_command;
pub use analytics::handle_analytics_command;
pub use roster::{handle_roster_command, handle_summary_command};

use std::path::Path;

use anyhow::Result;
use brokerdash_core::{open_source, BrokerdashConfig, Dataset};
use clap::ValueEnum;
use comfy_table::{
    modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, Cell, CellAlignment, Color, Table,
};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn is_json(&self) -> bool {
        matches!(self, OutputFormat::Json)
    }
}

/// A loaded dataset plus the display settings every report needs.
pub struct CommandContext {
    pub dataset: Dataset,
    pub source: String,
    pub currency: String,
    pub format: OutputFormat,
}

impl CommandContext {
    /// `--dataset` wins over `dataset.path` from config; with neither, the
    /// built-in sample brokerage is used.
    pub fn load(
        dataset: Option<&Path>,
        config: &BrokerdashConfig,
        format: OutputFormat,
    ) -> Result<Self> {
        let path = dataset.or_else(|| config.dataset_path().map(|p| p.as_path()));
        let source = open_source(path);
        debug!(source = source.name(), "Loading dataset");

        let dataset = source.load()?;

        Ok(Self {
            dataset,
            source: source.name().to_string(),
            currency: config.currency_symbol().to_string(),
            format,
        })
    }
}

pub fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).fg(Color::White))
                .collect::<Vec<_>>(),
        );
    table
}

pub fn align_right(table: &mut Table, columns: &[usize]) {
    for &idx in columns {
        if let Some(column) = table.column_mut(idx) {
            column.set_cell_alignment(CellAlignment::Right);
        }
    }
}

/// A text bar `width` cells wide at 100%.
pub fn text_bar(percent: f64, width: usize) -> String {
    if !percent.is_finite() || percent <= 0.0 {
        return String::new();
    }
    let cells = ((percent.min(100.0) / 100.0) * width as f64).round() as usize;
    "█".repeat(cells.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_bar() {
        assert_eq!(text_bar(0.0, 20), "");
        assert_eq!(text_bar(f64::NAN, 20), "");
        assert_eq!(text_bar(100.0, 20).chars().count(), 20);
        assert_eq!(text_bar(250.0, 20).chars().count(), 20);
        assert_eq!(text_bar(50.0, 20).chars().count(), 10);
        assert_eq!(text_bar(0.1, 20).chars().count(), 1);
    }

    #[test]
    fn test_output_format() {
        assert!(OutputFormat::Json.is_json());
        assert!(!OutputFormat::Text.is_json());
    }
}
