//! The core transaction data types.

use time::Date;

/// The ID a transaction record gets when it is stored.
pub type TransactionId = i64;

/// A transaction record as it exists in the store.
///
/// Instances are only ever produced by a
/// [TransactionStore](crate::stores::TransactionStore); the ledger cache and
/// the table view treat them as read-only.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The ID the store assigned to this transaction.
    pub id: TransactionId,
    /// When the transaction happened.
    pub date: Date,
    /// Who the money went to or came from.
    pub payee: String,
    /// The budget category the transaction belongs to.
    pub category: String,
    /// A free-text note. The empty string means no memo.
    pub memo: String,
    /// The amount of money received. Zero or more.
    pub inflow: f64,
    /// The amount of money spent. Zero or more.
    pub outflow: f64,
}

/// A transaction that has passed validation but has not been stored yet.
///
/// The store assigns the ID and returns the full [Transaction].
#[derive(Debug, Clone, PartialEq)]
pub struct NewTransaction {
    /// When the transaction happened.
    pub date: Date,
    /// Who the money went to or came from.
    pub payee: String,
    /// The budget category the transaction belongs to.
    pub category: String,
    /// A free-text note. The empty string means no memo.
    pub memo: String,
    /// The amount of money received. Zero or more.
    pub inflow: f64,
    /// The amount of money spent. Zero or more.
    pub outflow: f64,
}
