//! Implements a SQLite backed transaction store.

use std::sync::{Arc, Mutex};

use rusqlite::{Connection, Row};

use crate::{
    Error,
    db::{CreateTable, MapRow},
    stores::TransactionStore,
    transaction::{NewTransaction, Transaction, TransactionId},
};

/// Stores transactions in a SQLite database.
#[derive(Debug, Clone)]
pub struct SQLiteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SQLiteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }
}

impl TransactionStore for SQLiteTransactionStore {
    /// List all transactions in the database in insertion (rowid) order.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the mutex around the database connection is poisoned.
    fn list(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "SELECT id, date, payee, category, memo, inflow, outflow FROM \"transaction\"
                 ORDER BY id ASC",
            )?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::SqlError))
            .collect()
    }

    /// Create a new transaction in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an unexpected SQL error.
    ///
    /// # Panics
    /// Panics if the mutex around the database connection is poisoned.
    fn create(&mut self, new_transaction: NewTransaction) -> Result<Transaction, Error> {
        let transaction = self
            .connection
            .lock()
            .unwrap()
            .prepare(
                "INSERT INTO \"transaction\" (date, payee, category, memo, inflow, outflow)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)
                 RETURNING id, date, payee, category, memo, inflow, outflow",
            )?
            .query_row(
                (
                    new_transaction.date,
                    new_transaction.payee,
                    new_transaction.category,
                    new_transaction.memo,
                    new_transaction.inflow,
                    new_transaction.outflow,
                ),
                Self::map_row,
            )?;

        Ok(transaction)
    }

    /// Delete the transaction with `id` from the database.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::DeleteMissingTransaction] if `id` does not refer to a
    ///   transaction in the database,
    /// - or [Error::SqlError] if there is some other SQL error.
    ///
    /// # Panics
    /// Panics if the mutex around the database connection is poisoned.
    fn delete(&mut self, id: TransactionId) -> Result<Transaction, Error> {
        self.connection
            .lock()
            .unwrap()
            .prepare(
                "DELETE FROM \"transaction\" WHERE id = :id
                 RETURNING id, date, payee, category, memo, inflow, outflow",
            )?
            .query_row(&[(":id", &id)], Self::map_row)
            .map_err(|error| match error {
                rusqlite::Error::QueryReturnedNoRows => Error::DeleteMissingTransaction,
                error => error.into(),
            })
    }
}

impl CreateTable for SQLiteTransactionStore {
    fn create_table(connection: &Connection) -> Result<(), rusqlite::Error> {
        connection.execute(
            "CREATE TABLE IF NOT EXISTS \"transaction\" (
                    id INTEGER PRIMARY KEY AUTOINCREMENT,
                    date TEXT NOT NULL,
                    payee TEXT NOT NULL,
                    category TEXT NOT NULL,
                    memo TEXT NOT NULL DEFAULT '',
                    inflow REAL NOT NULL DEFAULT 0,
                    outflow REAL NOT NULL DEFAULT 0
                    )",
            (),
        )?;

        Ok(())
    }
}

impl MapRow for SQLiteTransactionStore {
    type ReturnType = Transaction;

    fn map_row(row: &Row) -> Result<Self::ReturnType, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            date: row.get(1)?,
            payee: row.get(2)?,
            category: row.get(3)?,
            memo: row.get(4)?,
            inflow: row.get(5)?,
            outflow: row.get(6)?,
        })
    }
}
