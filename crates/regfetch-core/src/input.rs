//! Loading the work list.

use anyhow::{Context, Result};
use std::path::Path;

/// Read a JSON array of names from `path`. With `limit`, only the first
/// `limit` names are kept. Order is preserved and duplicates are kept.
pub fn load_names(path: &Path, limit: Option<usize>) -> Result<Vec<String>> {
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("read names file {}", path.display()))?;
    let mut names: Vec<String> = serde_json::from_str(&data)
        .with_context(|| format!("{} is not a JSON array of strings", path.display()))?;
    if let Some(limit) = limit {
        names.truncate(limit);
    }
    Ok(names)
}
