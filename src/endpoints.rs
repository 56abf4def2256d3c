//! The API endpoint URIs.
//!
//! For endpoints that take a parameter, e.g. '/api/transactions/{transaction_id}',
//! use [format_endpoint].

/// The root route, which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page that displays the transaction ledger.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The route for getting the log in page.
pub const LOG_IN_VIEW: &str = "/log_in";

/// The route for logging in.
pub const LOG_IN_API: &str = "/api/log_in";
/// The route for the client to log out the current session.
pub const LOG_OUT: &str = "/api/log_out";
/// The route to create transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";
/// The route to delete a single transaction.
pub const DELETE_TRANSACTION: &str = "/api/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace. For
/// example, in '/api/transactions/{transaction_id}', '{transaction_id}' is
/// the parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter. If no parameter is found, the original
/// `endpoint_path` is returned.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
