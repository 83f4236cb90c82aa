//! Statistics module
//!
//! Aggregates the per-category totals reported by the upstream expense service
//! into a summary card, a bar chart and a breakdown table. Totals arrive as
//! formatted currency strings and are parsed back into numbers here.

mod aggregation;
mod charts;
mod handlers;
mod parse;
mod summary;

pub use aggregation::{ChartEntry, build_chart_data, percentage_share, total_expenses};
pub use handlers::get_statistics_page;
pub use parse::{amount_from_summary, parse_currency_summary};
pub use summary::{Category, CategoryId, CategoryResponse, Metadata, Transaction};
