//! Disk I/O for records and reports.
//!
//! Every file is written to its own `.part` sibling, fsynced, then renamed over
//! the final path, so a reader sees either the old content or the new content
//! and never a partial write. Concurrent writes of the same record each get a
//! distinct temp file; the last rename wins.

mod writer;

pub use writer::{write_atomic, write_json_pretty};

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

static NEXT_TEMP_ID: AtomicU64 = AtomicU64::new(0);

/// Fresh temp path next to `final_path`: `<final>.<pid>.<seq>.part`
/// (e.g. `lodash.json` → `lodash.json.4242.0.part`). No two calls in one
/// process return the same path.
pub fn temp_path(final_path: &Path) -> PathBuf {
    let seq = NEXT_TEMP_ID.fetch_add(1, Ordering::Relaxed);
    let mut o = final_path.as_os_str().to_owned();
    o.push(format!(".{}.{}{}", std::process::id(), seq, TEMP_SUFFIX));
    PathBuf::from(o)
}
