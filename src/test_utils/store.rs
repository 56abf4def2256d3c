//! An in-memory fake transaction store for tests.

use std::sync::{Arc, Mutex};

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

#[derive(Debug, Default)]
struct FakeStoreInner {
    transactions: Vec<Transaction>,
    next_id: TransactionId,
    list_count: usize,
    create_count: usize,
    delete_count: usize,
    fail_next_list: bool,
    fail_next_create: bool,
    fail_next_delete: bool,
}

/// A transaction store backed by a plain `Vec`.
///
/// The store normalizes payees by trimming surrounding whitespace, which lets
/// tests prove the ledger shows the stored record rather than a local copy of
/// the submitted one. Clones share the same underlying data, so tests can
/// keep a handle to a store that was moved into a ledger or app state.
#[derive(Debug, Clone, Default)]
pub(crate) struct FakeTransactionStore {
    inner: Arc<Mutex<FakeStoreInner>>,
}

impl FakeTransactionStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Put a transaction into the store directly, bypassing the counters.
    pub(crate) fn seed(&self, new_transaction: NewTransaction) -> Transaction {
        let mut inner = self.inner.lock().unwrap();

        store_transaction(&mut inner, new_transaction)
    }

    /// Make the next `list` call fail with a transport-style error.
    pub(crate) fn fail_next_list(&self) {
        self.inner.lock().unwrap().fail_next_list = true;
    }

    /// Make the next `create` call fail with a transport-style error.
    pub(crate) fn fail_next_create(&self) {
        self.inner.lock().unwrap().fail_next_create = true;
    }

    /// Make the next `delete` call fail with a transport-style error.
    pub(crate) fn fail_next_delete(&self) {
        self.inner.lock().unwrap().fail_next_delete = true;
    }

    /// How many times `list` has been called.
    pub(crate) fn list_count(&self) -> usize {
        self.inner.lock().unwrap().list_count
    }

    /// How many times `create` has been called.
    pub(crate) fn create_count(&self) -> usize {
        self.inner.lock().unwrap().create_count
    }

    /// How many times `delete` has been called.
    pub(crate) fn delete_count(&self) -> usize {
        self.inner.lock().unwrap().delete_count
    }
}

fn store_transaction(inner: &mut FakeStoreInner, new_transaction: NewTransaction) -> Transaction {
    inner.next_id += 1;
    let transaction = Transaction {
        id: inner.next_id,
        date: new_transaction.date,
        payee: new_transaction.payee.trim().to_string(),
        category: new_transaction.category,
        memo: new_transaction.memo,
        inflow: new_transaction.inflow,
        outflow: new_transaction.outflow,
    };
    inner.transactions.push(transaction.clone());

    transaction
}

fn transport_error() -> Error {
    Error::SqlError(rusqlite::Error::InvalidQuery)
}

impl TransactionStore for FakeTransactionStore {
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.list_count += 1;

        if inner.fail_next_list {
            inner.fail_next_list = false;
            return Err(transport_error());
        }

        Ok(inner.transactions.clone())
    }

    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.create_count += 1;

        if inner.fail_next_create {
            inner.fail_next_create = false;
            return Err(transport_error());
        }

        Ok(store_transaction(&mut inner, new_transaction))
    }

    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        let mut inner = self.inner.lock().unwrap();
        inner.delete_count += 1;

        if inner.fail_next_delete {
            inner.fail_next_delete = false;
            return Err(transport_error());
        }

        let position = inner
            .transactions
            .iter()
            .position(|transaction| transaction.id == id)
            .ok_or(Error::DeleteMissingTransaction)?;

        Ok(inner.transactions.remove(position))
    }
}
