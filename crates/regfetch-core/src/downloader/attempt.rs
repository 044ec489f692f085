//! One GET: status check, JSON parse, pretty-print, atomic write.

use std::path::Path;

use super::Fetcher;
use crate::retry::FetchError;
use crate::storage;

impl Fetcher {
    /// A single attempt. Every failure comes back as a `FetchError` value
    /// whose `status` belongs to this attempt's response, or is `None` when
    /// no response arrived.
    pub(super) async fn attempt(&self, url: &str, path: &Path) -> Result<(), FetchError> {
        let resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::transport(&e, None))?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(FetchError::http(status));
        }

        let body = resp
            .bytes()
            .await
            .map_err(|e| FetchError::transport(&e, Some(status)))?;
        let pretty = reindent(&body, status)?;

        storage::write_atomic(path, &pretty)
            .await
            .map_err(|e| FetchError::storage(&e))
    }
}

/// Re-serialize a JSON body with 2-space indentation, keeping object keys in
/// document order.
fn reindent(body: &[u8], status: u16) -> Result<Vec<u8>, FetchError> {
    let doc: serde_json::Value =
        serde_json::from_slice(body).map_err(|e| FetchError::decode(&e, status))?;
    serde_json::to_vec_pretty(&doc).map_err(|e| FetchError::decode(&e, status))
}
