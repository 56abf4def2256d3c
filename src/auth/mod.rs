//! Cookie based session authentication for the single app password.

pub(crate) mod cookie;
mod log_in;
mod log_out;
mod middleware;

pub(crate) use log_in::{get_log_in_page, post_log_in};
pub(crate) use log_out::get_log_out;
pub(crate) use middleware::{auth_guard, auth_guard_hx};
