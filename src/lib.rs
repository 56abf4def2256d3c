//! Ledgerbook is a web app for keeping a personal transaction ledger.
//!
//! It serves an HTML table of transactions with an inline editable row for
//! appending new ones. All writes go to a persistent store and the visible
//! list is refetched after every mutation, so the page always reflects the
//! store's own view of the data.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod alert;
mod auth;
mod db;
mod endpoints;
mod html;
mod ledger;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod state;
mod stores;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use db::initialize as initialize_db;
pub use ledger::Ledger;
pub use logging::logging_middleware;
pub use routing::build_router;
pub use state::AppState;
pub use stores::{SQLiteTransactionStore, TransactionStore};
pub use transaction::{NewTransaction, Transaction, TransactionId};

use crate::{alert::AlertTemplate, html::render, not_found::get_404_not_found_response};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
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
    /// The user provided an incorrect password.
    #[error("invalid password")]
    InvalidCredentials,

    /// The session cookie is missing from the request, or has expired.
    #[error("no valid session cookie in the request")]
    CookieMissing,

    /// The expiry date-time stored in the session cookie could not be parsed.
    #[error("could not parse session expiry \"{0}\"")]
    InvalidSessionExpiry(String),

    /// An unexpected error occurred in the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server;
    /// clients get a generic internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// A required form field was submitted empty.
    #[error("the {0} field is required")]
    MissingField(&'static str),

    /// A numeric form field could not be parsed as a number.
    #[error("could not parse \"{value}\" as an amount for {field}")]
    InvalidAmount {
        /// The name of the form field.
        field: &'static str,
        /// The raw text that failed to parse.
        value: String,
    },

    /// A negative number was entered for an inflow or outflow.
    #[error("the {0} field must not be negative")]
    NegativeAmount(&'static str),

    /// A date form field could not be parsed as a calendar date.
    #[error("could not parse \"{0}\" as a date")]
    InvalidDate(String),

    /// Tried to delete a transaction that does not exist in the store.
    #[error("tried to delete a transaction that is not in the store")]
    DeleteMissingTransaction,

    /// The requested resource was not found.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Listing transactions from the store failed. The cached ledger is left
    /// untouched so the last-known data stays visible.
    #[error("could not fetch transactions from the store: {0}")]
    FetchFailed(String),

    /// A create or delete request to the store failed. The attempted change
    /// did not happen and the cached ledger is left untouched.
    #[error("the store rejected the change: {0}")]
    MutationFailed(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::InvalidCredentials => render(
                StatusCode::UNAUTHORIZED,
                AlertTemplate::error("Incorrect password", "Check your password and try again."),
            ),
            Error::MissingField(field) => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error(
                    "Missing required field",
                    &format!("The {field} field is required. Fill it in and try again."),
                ),
            ),
            Error::InvalidAmount { field, value } => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error(
                    "Invalid amount",
                    &format!("\"{value}\" is not a valid number for the {field} field."),
                ),
            ),
            Error::NegativeAmount(field) => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error(
                    "Invalid amount",
                    &format!("The {field} field must be zero or more."),
                ),
            ),
            Error::InvalidDate(value) => render(
                StatusCode::BAD_REQUEST,
                AlertTemplate::error(
                    "Invalid date",
                    &format!("\"{value}\" is not a valid date. Use the format YYYY-MM-DD."),
                ),
            ),
            Error::DeleteMissingTransaction => render(
                StatusCode::NOT_FOUND,
                AlertTemplate::error(
                    "Could not delete transaction",
                    "The transaction could not be found. \
                    Try refreshing the page to see if the transaction has already been deleted.",
                ),
            ),
            Error::FetchFailed(_) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Could not load transactions",
                    "The store could not be reached. The table shows the last known data, \
                    refresh the page to try again.",
                ),
            ),
            Error::MutationFailed(_) => render(
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertTemplate::error(
                    "Could not save the change",
                    "The store rejected the request and nothing was changed. Try again later \
                    or check the server logs.",
                ),
            ),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    AlertTemplate::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs for more details.",
                    ),
                )
            }
        }
    }
}
