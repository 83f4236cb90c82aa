//! Turning category summaries into chart data.
//!
//! Parses each category's formatted total, assigns a palette colour and orders
//! the categories by total, largest first.

use crate::statistics::{parse_currency_summary, summary::Category};

/// The palette cycled through by category position.
pub(crate) const CHART_COLORS: [&str; 10] = [
    "#8884d8", "#82ca9d", "#ffc658", "#ff7c7c", "#8dd1e1", "#d084d0", "#ffb347", "#87d68d",
    "#ffa07a", "#98d8c8",
];

/// One bar of the expenses chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartEntry {
    /// The category name.
    pub name: String,
    /// The parsed category total in major units.
    pub value: f64,
    /// The number of transactions in the category.
    pub count: u32,
    /// The palette colour assigned by the category's position in the input.
    ///
    /// Bars are drawn in `category_color`; this is kept for legends and other
    /// consumers that need a colour independent of the upstream payload.
    pub color: &'static str,
    /// The category's own display colour.
    pub category_color: String,
}

/// Build the chart data for `categories`, sorted by total in descending order.
///
/// Categories with equal totals keep their input order. A total that cannot be
/// parsed counts as zero.
pub fn build_chart_data(categories: &[Category]) -> Vec<ChartEntry> {
    let mut entries: Vec<ChartEntry> = categories
        .iter()
        .enumerate()
        .map(|(index, category)| ChartEntry {
            name: category.name.clone(),
            value: parse_currency_summary(&category.metadata.total),
            count: category.metadata.count,
            color: CHART_COLORS[index % CHART_COLORS.len()],
            category_color: category.color.clone(),
        })
        .collect();

    sort_by_value_descending(&mut entries);

    entries
}

/// Sort `entries` largest value first.
///
/// `sort_by` is stable, so ties keep their relative order.
fn sort_by_value_descending(entries: &mut [ChartEntry]) {
    entries.sort_by(|a, b| b.value.total_cmp(&a.value));
}

/// The sum of all entry values.
pub fn total_expenses(entries: &[ChartEntry]) -> f64 {
    entries.iter().map(|entry| entry.value).sum()
}

/// The share of `total` that `value` makes up, as a percentage with one decimal.
///
/// Returns "0.0" when `total` is not positive.
pub fn percentage_share(value: f64, total: f64) -> String {
    if total > 0.0 {
        format!("{:.1}", value / total * 100.0)
    } else {
        "0.0".to_owned()
    }
}
