//! The persistent store that the ledger synchronizes against.

mod sqlite;
mod transaction;

pub use sqlite::SQLiteTransactionStore;
pub use transaction::TransactionStore;
