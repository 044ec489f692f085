//! CLI command handlers.

mod run;
mod sanitize;

pub use run::run_fetch;
pub use sanitize::run_sanitize;
