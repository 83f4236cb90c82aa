//! Application router configuration.

use axum::{Router, middleware, response::Redirect, routing::get};

use crate::{
    AppState,
    amount_field::{get_amount_field, update_amount_field},
    endpoints,
    logging::logging_middleware,
    not_found::get_404_not_found,
    statistics::get_statistics_page,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::STATISTICS_VIEW, get(get_statistics_page))
        .route(
            endpoints::AMOUNT_FIELD,
            get(get_amount_field).post(update_amount_field),
        )
        .fallback(get_404_not_found)
        .layer(middleware::from_fn(logging_middleware))
        .with_state(state)
}

/// The root path '/' redirects to the statistics page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::STATISTICS_VIEW)
}
