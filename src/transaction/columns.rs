//! The fixed column schema for the ledger table.
//!
//! The table is driven entirely by [COLUMNS]: the header row, the data rows,
//! and the trailing input row all iterate the same schema, so the columns can
//! never drift out of sync with each other.

use crate::transaction::Transaction;

/// The placeholder shown in cells whose text field is empty.
pub(crate) const EMPTY_CELL: &str = "\u{2014}";

/// Identifies one column of the ledger table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum ColumnKey {
    Date,
    Payee,
    Category,
    Memo,
    Outflow,
    Inflow,
    /// The delete button column. Holds no transaction data.
    Actions,
}

/// One column of the ledger table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Column {
    pub(crate) key: ColumnKey,
    /// The header label shown to the user.
    pub(crate) label: &'static str,
    /// The form input name for this column in the trailing row, if any.
    pub(crate) input_name: Option<&'static str>,
    /// Whether the trailing row input for this column is required.
    pub(crate) required: bool,
}

/// The columns of the ledger table, in display order.
pub(crate) const COLUMNS: [Column; 7] = [
    Column {
        key: ColumnKey::Date,
        label: "Date",
        input_name: Some("date"),
        required: true,
    },
    Column {
        key: ColumnKey::Payee,
        label: "Payee",
        input_name: Some("payee"),
        required: true,
    },
    Column {
        key: ColumnKey::Category,
        label: "Category",
        input_name: Some("category"),
        required: true,
    },
    Column {
        key: ColumnKey::Memo,
        label: "Memo",
        input_name: Some("memo"),
        required: false,
    },
    Column {
        key: ColumnKey::Outflow,
        label: "Outflow",
        input_name: Some("outflow"),
        required: false,
    },
    Column {
        key: ColumnKey::Inflow,
        label: "Inflow",
        input_name: Some("inflow"),
        required: false,
    },
    Column {
        key: ColumnKey::Actions,
        label: "Actions",
        input_name: None,
        required: false,
    },
];

/// Format a transaction field for display in the table cell for `key`.
///
/// Empty text fields render as an em dash placeholder. Amounts render with
/// `f64`'s shortest exact representation, so a zero amount renders as "0".
/// The Actions column has no data cell text.
pub(crate) fn cell_text(transaction: &Transaction, key: ColumnKey) -> String {
    match key {
        ColumnKey::Date => transaction.date.to_string(),
        ColumnKey::Payee => text_or_placeholder(&transaction.payee),
        ColumnKey::Category => text_or_placeholder(&transaction.category),
        ColumnKey::Memo => text_or_placeholder(&transaction.memo),
        ColumnKey::Outflow => format_amount(transaction.outflow),
        ColumnKey::Inflow => format_amount(transaction.inflow),
        ColumnKey::Actions => String::new(),
    }
}

fn text_or_placeholder(text: &str) -> String {
    if text.is_empty() {
        EMPTY_CELL.to_string()
    } else {
        text.to_string()
    }
}

fn format_amount(amount: f64) -> String {
    amount.to_string()
}
