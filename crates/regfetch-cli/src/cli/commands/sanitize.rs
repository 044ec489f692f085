//! `regfetch sanitize <name>` – show the record filename for a name.

use regfetch_core::url_model::{sanitize_name, RECORD_EXTENSION};

pub fn run_sanitize(name: &str) {
    println!("{}.{}", sanitize_name(name), RECORD_EXTENSION);
}
