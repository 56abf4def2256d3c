//! Defines the endpoint for creating a new transaction.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
// Must use axum_extra's Form since that parses an empty string as an empty
// field instead of crashing like axum::Form.
use axum_extra::extract::Form;
use axum_htmx::HxRedirect;

use crate::{
    Error, endpoints, state::LedgerState, stores::TransactionStore, transaction::form::TransactionForm,
};

/// A route handler for creating a new transaction.
///
/// The form is validated before the store is involved at all, the created
/// record is written through the ledger (which refetches the whole list),
/// and the client is redirected back to the transactions page so the table
/// re-renders from the fresh cache with an empty trailing row.
///
/// # Panics
/// Panics if the lock for the ledger is poisoned.
pub(crate) async fn create_transaction_endpoint<S>(
    State(state): State<LedgerState<S>>,
    Form(form): Form<TransactionForm>,
) -> Result<Response, Error>
where
    S: TransactionStore + Send + Sync,
{
    let new_transaction = form.into_new_transaction()?;

    state
        .ledger
        .lock()
        .unwrap()
        .create_transaction(new_transaction)?;

    Ok((
        HxRedirect(endpoints::TRANSACTIONS_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

#[cfg(test)]
mod create_transaction_endpoint_tests {
    use std::sync::{Arc, Mutex};

    use axum::extract::State;
    use axum_extra::extract::Form;
    use time::macros::date;

    use crate::{
        Error,
        ledger::Ledger,
        state::LedgerState,
        test_utils::{assert_hx_redirect, store::FakeTransactionStore},
        transaction::form::TransactionForm,
    };

    use super::create_transaction_endpoint;

    fn get_state(store: FakeTransactionStore) -> LedgerState<FakeTransactionStore> {
        LedgerState {
            ledger: Arc::new(Mutex::new(Ledger::new(store))),
        }
    }

    fn filled_form() -> TransactionForm {
        TransactionForm {
            date: "2024-07-01".to_string(),
            payee: "Landlord".to_string(),
            category: "Rent".to_string(),
            memo: "July".to_string(),
            inflow: "".to_string(),
            outflow: "1200".to_string(),
        }
    }

    #[tokio::test]
    async fn create_redirects_to_transactions_page() {
        let store = FakeTransactionStore::new();
        let state = get_state(store.clone());

        let response = create_transaction_endpoint(State(state), Form(filled_form()))
            .await
            .expect("Could not create transaction");

        assert_hx_redirect(&response, crate::endpoints::TRANSACTIONS_VIEW);
        assert_eq!(store.create_count(), 1);
    }

    #[tokio::test]
    async fn create_refetches_after_mutation() {
        let store = FakeTransactionStore::new();
        let state = get_state(store.clone());

        create_transaction_endpoint(State(state.clone()), Form(filled_form()))
            .await
            .expect("Could not create transaction");

        assert_eq!(
            store.list_count(),
            1,
            "a create should be followed by a refetch"
        );
        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.transactions().len(), 1);
        assert_eq!(ledger.transactions()[0].date, date!(2024 - 07 - 01));
    }

    #[tokio::test]
    async fn empty_amounts_are_stored_as_zero() {
        let store = FakeTransactionStore::new();
        let state = get_state(store.clone());
        let form = TransactionForm {
            inflow: "".to_string(),
            outflow: "".to_string(),
            ..filled_form()
        };

        create_transaction_endpoint(State(state.clone()), Form(form))
            .await
            .expect("Could not create transaction");

        let ledger = state.ledger.lock().unwrap();
        assert_eq!(ledger.transactions()[0].inflow, 0.0);
        assert_eq!(ledger.transactions()[0].outflow, 0.0);
    }

    #[tokio::test]
    async fn missing_payee_never_reaches_the_store() {
        let store = FakeTransactionStore::new();
        let state = get_state(store.clone());
        let form = TransactionForm {
            payee: "".to_string(),
            ..filled_form()
        };

        let result = create_transaction_endpoint(State(state), Form(form)).await;

        assert_eq!(result.unwrap_err(), Error::MissingField("payee"));
        assert_eq!(
            store.create_count(),
            0,
            "validation failures must not hit the store"
        );
    }

    #[tokio::test]
    async fn store_failure_surfaces_as_mutation_failed() {
        let store = FakeTransactionStore::new();
        store.fail_next_create();
        let state = get_state(store.clone());

        let result = create_transaction_endpoint(State(state.clone()), Form(filled_form())).await;

        assert!(matches!(result, Err(Error::MutationFailed(_))));
        let ledger = state.ledger.lock().unwrap();
        assert_eq!(
            ledger.transactions(),
            [],
            "a failed create should leave the cache untouched"
        );
    }
}
