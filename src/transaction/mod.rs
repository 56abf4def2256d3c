//! The transaction ledger: the core data types, the table view, and the
//! endpoints for listing, creating, and deleting transactions.

mod columns;
mod core;
mod create_transaction_endpoint;
mod delete_transaction_endpoint;
mod form;
mod transactions_page;
mod view;

pub use core::{NewTransaction, Transaction, TransactionId};
pub(crate) use create_transaction_endpoint::create_transaction_endpoint;
pub(crate) use delete_transaction_endpoint::delete_transaction_endpoint;
pub(crate) use transactions_page::get_transactions_page;
