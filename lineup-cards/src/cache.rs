use crate::fetcher::Fetcher;
use crate::traits::AssetSource;
use crate::types::{CardError, Result};
use async_trait::async_trait;
use std::path::{Component, Path, PathBuf};
use tokio::fs;
use tracing::debug;

/// On-disk cache of downloaded assets, one file per logical name.
///
/// A cached file is returned as-is on later runs; there is no freshness
/// check against the remote side. `force_refresh` re-downloads and
/// overwrites.
pub struct AssetCache {
    fetcher: Fetcher,
    cache_dir: PathBuf,
}

impl AssetCache {
    pub fn new(fetcher: Fetcher, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            fetcher,
            cache_dir: cache_dir.into(),
        }
    }

    pub fn cache_dir(&self) -> &Path {
        &self.cache_dir
    }

    /// Cache file for `name`. Names come from the remote payload, so
    /// anything but a single plain file name is rejected.
    pub fn path_for(&self, name: &str) -> Result<PathBuf> {
        let mut components = Path::new(name).components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(file)), None) => Ok(self.cache_dir.join(file)),
            _ => Err(CardError::InvalidAssetName {
                name: name.to_string(),
            }),
        }
    }
}

#[async_trait]
impl AssetSource for AssetCache {
    async fn fetch(&self, name: &str, locator: &str, force_refresh: bool) -> Result<Vec<u8>> {
        let path = self.path_for(name)?;
        fs::create_dir_all(&self.cache_dir).await?;

        if !force_refresh && fs::try_exists(&path).await? {
            debug!("Cache hit for {} at {}", name, path.display());
            return Ok(fs::read(&path).await?);
        }

        let bytes = self.fetcher.fetch_bytes(locator).await?;
        fs::write(&path, &bytes).await?;
        debug!("Cached {} ({} bytes) at {}", name, bytes.len(), path.display());

        Ok(bytes)
    }
}
