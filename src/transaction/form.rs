//! The form data for the trailing editable row, and its validation.

use serde::Deserialize;
use time::{Date, format_description::BorrowedFormatItem, macros::format_description};

use crate::{Error, transaction::NewTransaction};

/// The date format used by `<input type="date">`.
const DATE_FORMAT: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");

/// The raw form data submitted from the trailing row of the ledger table.
///
/// Every field is a string so that validation happens in one place, in
/// [TransactionForm::into_new_transaction], instead of half in serde and half
/// here. Missing fields deserialize as empty strings.
#[derive(Debug, Default, Deserialize, PartialEq)]
pub(crate) struct TransactionForm {
    #[serde(default)]
    pub(crate) date: String,
    #[serde(default)]
    pub(crate) payee: String,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default)]
    pub(crate) memo: String,
    #[serde(default)]
    pub(crate) inflow: String,
    #[serde(default)]
    pub(crate) outflow: String,
}

impl TransactionForm {
    /// Validate the form and produce a [NewTransaction] ready for the store.
    ///
    /// The date, payee, and category fields are required. The inflow and
    /// outflow fields normalize an empty submission to zero.
    ///
    /// # Errors
    /// This function will return a:
    /// - [Error::MissingField] if a required field is empty,
    /// - [Error::InvalidDate] if the date does not parse,
    /// - [Error::InvalidAmount] if an amount does not parse as a number,
    /// - [Error::NegativeAmount] if an amount is below zero.
    pub(crate) fn into_new_transaction(self) -> Result<NewTransaction, Error> {
        let date_text = self.date.trim();
        if date_text.is_empty() {
            return Err(Error::MissingField("date"));
        }
        let date =
            Date::parse(date_text, DATE_FORMAT).map_err(|_| Error::InvalidDate(self.date.clone()))?;

        let payee = self.payee.trim();
        if payee.is_empty() {
            return Err(Error::MissingField("payee"));
        }

        let category = self.category.trim();
        if category.is_empty() {
            return Err(Error::MissingField("category"));
        }

        let inflow = parse_amount(&self.inflow, "inflow")?;
        let outflow = parse_amount(&self.outflow, "outflow")?;

        Ok(NewTransaction {
            date,
            payee: payee.to_string(),
            category: category.to_string(),
            memo: self.memo.trim().to_string(),
            inflow,
            outflow,
        })
    }
}

/// Parse a numeric form field, normalizing an empty submission to zero.
fn parse_amount(value: &str, field: &'static str) -> Result<f64, Error> {
    let value = value.trim();

    if value.is_empty() {
        return Ok(0.0);
    }

    let amount: f64 = value.parse().map_err(|_| Error::InvalidAmount {
        field,
        value: value.to_string(),
    })?;

    if amount < 0.0 {
        return Err(Error::NegativeAmount(field));
    }

    Ok(amount)
}
