mod bar_list;
mod footer;
mod header;
mod kpi_card;

pub use bar_list::{BarItem, BarList};
pub use footer::Footer;
pub use header::Header;
pub use kpi_card::{KpiCard, KpiStrip};
