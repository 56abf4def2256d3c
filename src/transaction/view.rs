//! The ledger table template.

use maud::{Markup, html};

use crate::{
    alert::AlertTemplate,
    endpoints,
    html::{
        BUTTON_DELETE_STYLE, BUTTON_PRIMARY_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, base,
    },
    navigation::NavBar,
    transaction::{
        Transaction,
        columns::{COLUMNS, ColumnKey, cell_text},
    },
};

/// Render the transactions page: the ledger table with its trailing editable
/// row, wrapped in the page scaffold. An `alert` renders above the table.
pub(crate) fn ledger_page(transactions: &[Transaction], alert: Option<AlertTemplate>) -> Markup {
    let content = html! {
        (NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html())

        div class=(PAGE_CONTAINER_STYLE)
        {
            @if let Some(alert) = alert
            {
                (alert)
            }

            (ledger_table(transactions))
        }
    };

    base("Transactions", &content)
}

/// The ledger table.
///
/// The header row, the data rows, and the trailing input row all iterate the
/// fixed column schema. The whole table sits inside the create form so that
/// the trailing row's inputs submit together, and each data row carries its
/// own delete button.
fn ledger_table(transactions: &[Transaction]) -> Markup {
    html! {
        form
            hx-post=(endpoints::TRANSACTIONS_API)
            hx-target-error="#alert-container"
            class="w-full overflow-x-auto"
        {
            table class="w-full text-sm text-left text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        @for column in &COLUMNS
                        {
                            th scope="col" class=(TABLE_CELL_STYLE) { (column.label) }
                        }
                    }
                }

                tbody
                {
                    @for transaction in transactions
                    {
                        (data_row(transaction))
                    }

                    (trailing_row())
                }
            }
        }
    }
}

fn data_row(transaction: &Transaction) -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            @for column in &COLUMNS
            {
                @if column.key == ColumnKey::Actions
                {
                    td class=(TABLE_CELL_STYLE)
                    {
                        button
                            type="button"
                            class=(BUTTON_DELETE_STYLE)
                            hx-delete=(endpoints::format_endpoint(
                                endpoints::DELETE_TRANSACTION,
                                transaction.id,
                            ))
                            hx-target-error="#alert-container"
                        {
                            "Delete"
                        }
                    }
                }
                @else
                {
                    td class=(TABLE_CELL_STYLE) { (cell_text(transaction, column.key)) }
                }
            }
        }
    }
}

/// The trailing editable row for appending a new transaction.
fn trailing_row() -> Markup {
    html! {
        tr class=(TABLE_ROW_STYLE)
        {
            @for column in &COLUMNS
            {
                td class=(TABLE_CELL_STYLE)
                {
                    @if let Some(input_name) = column.input_name
                    {
                        @match column.key
                        {
                            ColumnKey::Date =>
                            {
                                input
                                    type="date"
                                    name=(input_name)
                                    class=(FORM_TEXT_INPUT_STYLE)
                                    required[column.required];
                            }
                            ColumnKey::Inflow | ColumnKey::Outflow =>
                            {
                                input
                                    type="number"
                                    name=(input_name)
                                    min="0"
                                    step="0.01"
                                    placeholder="0"
                                    class=(FORM_TEXT_INPUT_STYLE)
                                    required[column.required];
                            }
                            _ =>
                            {
                                input
                                    type="text"
                                    name=(input_name)
                                    placeholder=(column.label)
                                    class=(FORM_TEXT_INPUT_STYLE)
                                    required[column.required];
                            }
                        }
                    }
                    @else
                    {
                        button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod ledger_view_tests {
    use scraper::{Html, Selector};
    use time::macros::date;

    use crate::{
        endpoints,
        test_utils::assert_valid_html,
        transaction::{Transaction, columns::EMPTY_CELL},
    };

    use super::ledger_page;

    fn sample_transactions() -> Vec<Transaction> {
        vec![
            Transaction {
                id: 1,
                date: date!(2024 - 07 - 01),
                payee: "Landlord".to_string(),
                category: "Rent".to_string(),
                memo: String::new(),
                inflow: 0.0,
                outflow: 1200.0,
            },
            Transaction {
                id: 2,
                date: date!(2024 - 07 - 03),
                payee: "Employer".to_string(),
                category: "Salary".to_string(),
                memo: "July pay".to_string(),
                inflow: 4200.0,
                outflow: 0.0,
            },
        ]
    }

    fn parse_page(transactions: &[Transaction]) -> Html {
        let html = Html::parse_document(&ledger_page(transactions, None).into_string());
        assert_valid_html(&html);

        html
    }

    #[test]
    fn renders_header_row_with_all_columns() {
        let html = parse_page(&[]);

        let header_selector = Selector::parse("thead th").unwrap();
        let headers: Vec<_> = html
            .select(&header_selector)
            .map(|th| th.text().collect::<String>())
            .collect();

        assert_eq!(
            headers,
            vec![
                "Date", "Payee", "Category", "Memo", "Outflow", "Inflow", "Actions"
            ]
        );
    }

    #[test]
    fn renders_one_data_row_per_transaction_plus_trailing_row() {
        let transactions = sample_transactions();

        let html = parse_page(&transactions);

        let row_selector = Selector::parse("tbody tr").unwrap();
        assert_eq!(html.select(&row_selector).count(), transactions.len() + 1);
    }

    #[test]
    fn empty_memo_renders_placeholder() {
        let transactions = sample_transactions();

        let html = parse_page(&transactions);

        let cell_selector = Selector::parse("tbody td").unwrap();
        let cells: Vec<_> = html
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>())
            .collect();
        assert!(cells.contains(&EMPTY_CELL.to_string()));
    }

    #[test]
    fn zero_amount_renders_as_zero() {
        let transactions = sample_transactions();

        let html = parse_page(&transactions);

        let cell_selector = Selector::parse("tbody td").unwrap();
        let cells: Vec<_> = html
            .select(&cell_selector)
            .map(|td| td.text().collect::<String>())
            .collect();
        assert!(cells.contains(&"0".to_string()));
        assert!(cells.contains(&"1200".to_string()));
    }

    #[test]
    fn trailing_row_has_inputs_for_every_data_column() {
        let html = parse_page(&[]);

        for input_name in ["date", "payee", "category", "memo", "inflow", "outflow"] {
            let input_selector =
                Selector::parse(&format!("tbody input[name={input_name}]")).unwrap();
            assert_eq!(
                html.select(&input_selector).count(),
                1,
                "expected exactly one input named {input_name}"
            );
        }
    }

    #[test]
    fn required_columns_are_marked_required() {
        let html = parse_page(&[]);

        for input_name in ["date", "payee", "category"] {
            let input_selector =
                Selector::parse(&format!("tbody input[name={input_name}][required]")).unwrap();
            assert_eq!(
                html.select(&input_selector).count(),
                1,
                "expected the {input_name} input to be required"
            );
        }

        for input_name in ["memo", "inflow", "outflow"] {
            let input_selector =
                Selector::parse(&format!("tbody input[name={input_name}][required]")).unwrap();
            assert_eq!(
                html.select(&input_selector).count(),
                0,
                "expected the {input_name} input to be optional"
            );
        }
    }

    #[test]
    fn form_posts_to_transactions_api() {
        let html = parse_page(&[]);

        let form_selector = Selector::parse(&format!(
            "form[hx-post=\"{}\"]",
            endpoints::TRANSACTIONS_API
        ))
        .unwrap();
        assert_eq!(html.select(&form_selector).count(), 1);
    }

    #[test]
    fn each_data_row_has_a_delete_button() {
        let transactions = sample_transactions();

        let html = parse_page(&transactions);

        for transaction in &transactions {
            let delete_url =
                endpoints::format_endpoint(endpoints::DELETE_TRANSACTION, transaction.id);
            let button_selector =
                Selector::parse(&format!("button[hx-delete=\"{delete_url}\"]")).unwrap();
            assert_eq!(
                html.select(&button_selector).count(),
                1,
                "expected a delete button for transaction {}",
                transaction.id
            );
        }
    }

    #[test]
    fn delete_buttons_do_not_submit_the_create_form() {
        let transactions = sample_transactions();

        let html = parse_page(&transactions);

        let button_selector = Selector::parse("button[hx-delete]").unwrap();
        for button in html.select(&button_selector) {
            assert_eq!(button.value().attr("type"), Some("button"));
        }
    }
}
