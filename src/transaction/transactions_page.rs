//! The endpoint for the transactions page.

use axum::{extract::State, http::StatusCode, response::Response};

use crate::{
    alert::AlertTemplate, html::render, state::LedgerState, stores::TransactionStore,
    transaction::view::ledger_page,
};

/// Display the ledger table.
///
/// The cache is refetched from the store on every page load. If the refetch
/// fails the page still renders with the last-known data and an error alert,
/// so a store outage never blanks out the table.
///
/// # Panics
/// Panics if the lock for the ledger is poisoned.
pub(crate) async fn get_transactions_page<S>(State(state): State<LedgerState<S>>) -> Response
where
    S: TransactionStore + Send + Sync,
{
    let mut ledger = state.ledger.lock().unwrap();

    let alert = match ledger.refresh() {
        Ok(()) => None,
        Err(error) => {
            tracing::error!("could not refresh transactions for page load: {error}");
            Some(AlertTemplate::error(
                "Could not load transactions",
                "The table shows the last known data. Refresh the page to try again.",
            ))
        }
    };

    render(StatusCode::OK, ledger_page(ledger.transactions(), alert))
}
