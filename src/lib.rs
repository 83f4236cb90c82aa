//! Gastos is a personal expense tracker front end.
//!
//! This library provides the money handling at its core, a cents-entry amount
//! field and the parsing of formatted currency totals for the statistics page,
//! together with a server that renders both as HTML.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod amount_field;
mod app_state;
mod endpoints;
mod html;
mod logging;
mod money;
mod not_found;
mod routing;
mod statistics;
#[cfg(test)]
mod test_utils;

pub use amount_field::AmountEditor;
pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use money::{
    CURRENCY_SYMBOL, MAX_MINOR_UNITS, MonetaryAmount, format_amount, format_currency,
    format_minor_units,
};
pub use routing::build_router;
pub use statistics::{
    Category, CategoryId, CategoryResponse, ChartEntry, Metadata, Transaction,
    amount_from_summary, build_chart_data, parse_currency_summary, percentage_share,
    total_expenses,
};

use crate::html::{error_fragment, error_view};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                tracing::error!("failed to install signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An amount was negative, not a number, or too large to represent.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// The summary payload from the upstream expense service could not be read.
    #[error("the expense summary is unavailable: {0}")]
    SummaryUnavailable(String),

    /// The summary payload from the upstream expense service was not valid JSON
    /// or did not have the expected shape.
    #[error("the expense summary could not be decoded: {0}")]
    InvalidSummary(String),
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::InvalidAmount(description) => (
                StatusCode::BAD_REQUEST,
                error_fragment(&format!("Invalid amount: {description}")),
            )
                .into_response(),
            Error::SummaryUnavailable(_) | Error::InvalidSummary(_) => {
                tracing::error!("could not load statistics: {self}");

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    error_view(
                        "Statistics Unavailable",
                        "500",
                        "Error loading statistics. Please try again.",
                        "If the problem persists, check that the expense summary is being exported.",
                    ),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use crate::Error;

    #[test]
    fn invalid_amount_is_bad_request() {
        let response = Error::InvalidAmount("-1".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn summary_errors_are_internal_server_errors() {
        for error in [
            Error::SummaryUnavailable("gone".to_owned()),
            Error::InvalidSummary("bad".to_owned()),
        ] {
            assert_eq!(
                error.into_response().status(),
                StatusCode::INTERNAL_SERVER_ERROR
            );
        }
    }
}
