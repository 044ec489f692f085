//! Temp-file-then-rename writer.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tokio::io::AsyncWriteExt;

use super::temp_path;

/// Replace the content of `final_path` with `data`.
///
/// Writes a fresh `<final_path>.<pid>.<seq>.part`, syncs it, then renames it
/// over `final_path`. Fails if the parent directory is missing or not
/// writable; the temp file is removed on failure.
pub async fn write_atomic(final_path: &Path, data: &[u8]) -> Result<()> {
    let temp = temp_path(final_path);
    let res = write_then_rename(&temp, final_path, data).await;
    if res.is_err() {
        let _ = tokio::fs::remove_file(&temp).await;
    }
    res
}

async fn write_then_rename(temp: &Path, final_path: &Path, data: &[u8]) -> Result<()> {
    let mut file = tokio::fs::File::create(temp)
        .await
        .with_context(|| format!("failed to create temp file: {}", temp.display()))?;
    file.write_all(data)
        .await
        .with_context(|| format!("write {}", temp.display()))?;
    file.sync_all().await.context("storage sync failed")?;
    drop(file);

    tokio::fs::rename(temp, final_path).await.with_context(|| {
        format!(
            "failed to rename {} to {}",
            temp.display(),
            final_path.display()
        )
    })?;
    Ok(())
}

/// Serialize `value` as JSON with 2-space indentation and write it atomically.
pub async fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let text = serde_json::to_string_pretty(value).context("serialize JSON")?;
    write_atomic(path, text.as_bytes()).await
}
