use crate::types::Result;
use async_trait::async_trait;

/// Source of named byte blobs (the event payload, speaker headshots).
#[async_trait]
pub trait AssetSource: Send + Sync {
    /// Return the bytes stored under `name`, retrieving them from `locator`
    /// when they are not available locally or when `force_refresh` is set.
    async fn fetch(&self, name: &str, locator: &str, force_refresh: bool) -> Result<Vec<u8>>;
}
