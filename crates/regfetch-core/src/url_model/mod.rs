//! Request URLs and on-disk record paths for resource names.
//!
//! The registry sees the raw name; the filesystem only ever sees the
//! sanitized form.

mod sanitize;

pub use sanitize::sanitize_name;

use std::path::{Path, PathBuf};

/// Extension of every per-name record file.
pub const RECORD_EXTENSION: &str = "json";

/// Request target for `name`: the base endpoint with the raw name appended.
///
/// # Examples
///
/// - `request_url("https://registry.npmjs.org/", "@types/node")` → `"https://registry.npmjs.org/@types/node"`
pub fn request_url(base_url: &str, name: &str) -> String {
    let mut url = String::with_capacity(base_url.len() + name.len());
    url.push_str(base_url);
    url.push_str(name);
    url
}

/// Path of the record file for `name` inside `output_dir`.
pub fn record_path(output_dir: &Path, name: &str) -> PathBuf {
    output_dir.join(format!("{}.{}", sanitize_name(name), RECORD_EXTENSION))
}
