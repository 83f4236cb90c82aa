//! The summary payload produced by the upstream expense service.
//!
//! Totals arrive as pre-formatted currency strings (e.g. "R$ 1.234,56") and are
//! turned back into numbers with [parse_currency_summary](super::parse_currency_summary).

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Database identifier used by the upstream service.
pub type CategoryId = i64;

/// The totals for a category, or for all categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// The formatted total, e.g. "R$ 1.234,56".
    #[serde(default)]
    pub total: String,
    /// The number of transactions in the total.
    #[serde(default)]
    pub count: u32,
}

/// A single expense as listed by the upstream service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Database identifier of the transaction.
    pub id: i64,
    /// What the money was spent on.
    pub description: String,
    /// The formatted price, e.g. "R$ 12,50".
    pub price: String,
}

/// An expense category with its transactions and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Database identifier of the category.
    pub id: CategoryId,
    /// The display name, e.g. "Groceries".
    pub name: String,
    /// The display colour of the category as a hex string, e.g. "#FF0000".
    pub color: String,
    /// The transactions filed under the category.
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// The category total.
    #[serde(default)]
    pub metadata: Metadata,
}

/// The response listing every category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryResponse {
    /// Every category, in the order the upstream service lists them.
    #[serde(default)]
    pub categories: Vec<Category>,
    /// The grand total across all categories.
    #[serde(default)]
    pub metadata: Metadata,
}

/// Load the category summary from the JSON file at `path`.
///
/// # Errors
///
/// Returns:
/// - [Error::SummaryUnavailable] if the file cannot be read,
/// - [Error::InvalidSummary] if the file is not a valid summary payload.
pub(crate) async fn load_category_response(path: &Path) -> Result<CategoryResponse, Error> {
    let text = tokio::fs::read_to_string(path).await.map_err(|error| {
        tracing::error!("could not read summary file {}: {error}", path.display());
        Error::SummaryUnavailable(error.to_string())
    })?;

    parse_category_response(&text)
}

/// Decode a category summary from JSON text.
///
/// # Errors
///
/// Returns an [Error::InvalidSummary] if `text` is not a valid summary payload.
pub(crate) fn parse_category_response(text: &str) -> Result<CategoryResponse, Error> {
    serde_json::from_str(text).map_err(|error| {
        tracing::error!("could not decode summary payload: {error}");
        Error::InvalidSummary(error.to_string())
    })
}
