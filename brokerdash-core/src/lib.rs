//! Core library for Brokerdash.
//!
//! Loads a brokerage dataset from a [`source::RecordSource`], derives roster
//! KPIs and chart series from it, and tracks which agent's detail drawer is
//! open. Rendering lives in the TUI and CLI crates.

pub mod config;
pub mod dataset;
pub mod detail;
pub mod error;
pub mod format;
pub mod models;
pub mod roster;
pub mod selection;
pub mod shapers;
pub mod source;

pub use config::{BrokerdashConfig, ConfigLoadError};
pub use dataset::Dataset;
pub use detail::AgentDetail;
pub use error::{BrokerdashError, BrokerdashResult, CliErrorDisplay};
pub use models::{
    AgentActivity, AgentRecord, AgentRole, AgentStatus, AnalyticsDataset, Avatar, ResponseTime,
};
pub use roster::{revenue_by_agent, revenue_rank, roster_rows, RosterRow, RosterSummary};
pub use selection::SelectionState;
pub use shapers::AnalyticsSummary;
pub use source::{open_source, FileSource, RecordSource, SampleSource};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
