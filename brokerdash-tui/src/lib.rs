//! Terminal dashboards for Brokerdash.
//!
//! Two screens share one [`app::App`]: agent performance (KPI cards, revenue
//! and conversion charts, the roster table and the agent detail drawer) and
//! executive analytics.

pub mod app;
pub mod events;
pub mod theme;
pub mod ui;

pub use app::{App, AppOptions, View};
