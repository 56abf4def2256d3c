//! Defines the endpoint for deleting a transaction.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;

use crate::{Error, endpoints, state::LedgerState, stores::TransactionStore, transaction::TransactionId};

/// A route handler for deleting the transaction with `transaction_id`.
///
/// Deletes happen with no confirmation step. On success the client is
/// redirected back to the transactions page, which re-renders from the
/// refetched cache.
///
/// # Panics
/// Panics if the lock for the ledger is poisoned.
pub(crate) async fn delete_transaction_endpoint<S>(
    State(state): State<LedgerState<S>>,
    Path(transaction_id): Path<TransactionId>,
) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    state
        .ledger
        .lock()
        .unwrap()
        .delete_transaction(transaction_id)?;

    Ok((
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}
