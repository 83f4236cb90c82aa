//! Implements a struct that holds the state of the server.

use std::path::{Path, PathBuf};

/// The state of the server.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The JSON file holding the latest summary payload from the upstream
    /// expense service.
    pub summary_path: PathBuf,

    /// The symbol shown in front of amount fields, e.g. "R$".
    pub currency_symbol: String,
}

impl AppState {
    /// Create a new [AppState].
    ///
    /// The summary file is read on every request, so it does not need to exist yet.
    pub fn new(summary_path: &Path, currency_symbol: &str) -> Self {
        Self {
            summary_path: summary_path.to_owned(),
            currency_symbol: currency_symbol.to_owned(),
        }
    }
}
