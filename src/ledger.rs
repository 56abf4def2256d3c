//! The in-memory ledger that mirrors the persistent store.
//!
//! The ledger keeps a cached list of transactions for rendering, but the
//! store is always the source of truth: every mutation is followed by a full
//! refetch, and the cache is never patched locally.

use crate::{
    Error,
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// A cached view of the transactions in a [TransactionStore].
///
/// The store collaborator is injected at construction so tests can substitute
/// a fake. Handlers share a ledger behind `Arc<Mutex<...>>` and hold the lock
/// across a whole mutate-then-refresh chain, so chains never interleave.
#[derive(Debug)]
pub struct Ledger<S: TransactionStore> {
    store: S,
    cache: Vec<Transaction>,
}

impl<S: TransactionStore> Ledger<S> {
    /// Create a ledger over `store` with an empty cache.
    ///
    /// The cache stays empty until the first [Ledger::refresh] call.
    pub fn new(store: S) -> Self {
        Self {
            store,
            cache: Vec::new(),
        }
    }

    /// The currently cached transactions.
    pub fn transactions(&self) -> &[Transaction] {
        &self.cache
    }

    /// Replace the cache with the store's current transaction list.
    ///
    /// # Errors
    /// Returns an [Error::FetchFailed] if the store could not be listed. The
    /// cache keeps its previous contents so the last-known data stays
    /// visible.
    pub fn refresh(&mut self) -> Result<(), Error> {
        match self.store.list() {
            Ok(transactions) => {
                self.cache = transactions;
                Ok(())
            }
            Err(error) => {
                tracing::error!("could not refresh the transaction list: {error}");
                Err(Error::FetchFailed(error.to_string()))
            }
        }
    }

    /// Create `new_transaction` in the store, then refetch the whole list.
    ///
    /// The cache is never appended to directly. The store may normalize the
    /// record on the way in, so the refetch is what makes the stored form
    /// visible.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MutationFailed] if the store rejected the create. The cache
    ///   is left untouched.
    /// - [Error::FetchFailed] if the create succeeded but the refetch failed.
    ///   The cache keeps its pre-create contents.
    pub fn create_transaction(&mut self, new_transaction: NewTransaction) -> Result<(), Error> {
        if let Err(error) = self.store.create(new_transaction) {
            tracing::error!("could not create transaction: {error}");
            return Err(Error::MutationFailed(error.to_string()));
        }

        self.refresh()
    }

    /// Delete the transaction with `id` from the store, then refetch the
    /// whole list.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if `id` is not in the store,
    /// - [Error::MutationFailed] if the store rejected the delete for any
    ///   other reason. The cache is left untouched.
    /// - [Error::FetchFailed] if the delete succeeded but the refetch failed.
    pub fn delete_transaction(&mut self, id: TransactionId) -> Result<(), Error> {
        match self.store.delete(id) {
            Ok(_) => self.refresh(),
            Err(Error::DeleteMissingTransaction) => Err(Error::DeleteMissingTransaction),
            Err(error) => {
                tracing::error!("could not delete transaction {id}: {error}");
                Err(Error::MutationFailed(error.to_string()))
            }
        }
    }
}
