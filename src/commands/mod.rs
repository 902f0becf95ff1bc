//! Command implementations for ci-smoke

pub mod check;
pub mod list;

pub use check::{run_all, run_connect, run_ping, run_sanity};
pub use list::run_list;
