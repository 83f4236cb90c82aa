//! The API endpoints URIs.

/// The root route which redirects to the statistics page.
pub const ROOT: &str = "/";
/// The page showing total expenses per category.
pub const STATISTICS_VIEW: &str = "/statistics";
/// The route for rendering an amount field and applying edits to it.
pub const AMOUNT_FIELD: &str = "/components/amount-field";
