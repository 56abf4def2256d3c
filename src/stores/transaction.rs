//! Defines the interface for storing and retrieving transactions.

use crate::{
    Error,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// The narrow interface the ledger uses to talk to the persistent store.
///
/// The store is the source of truth: `create` returns the record as the store
/// actually saved it (with its assigned ID and any normalization the store
/// applied), and callers are expected to re-list after every mutation rather
/// than patching their own copy of the data.
pub trait TransactionStore {
    /// List all transactions in insertion order.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn list(&self) -> Result<Vec<Transaction>, Error>;

    /// Create `new_transaction` in the store and return the stored record.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error>;

    /// Delete the transaction with `id` and return the deleted record.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if `id` does not refer to a
    ///   transaction in the store,
    /// - or [Error::SqlError] if there is some other SQL error.
    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error>;
}
