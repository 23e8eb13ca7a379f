use crate::types::{CardError, FetchConfig, Result};
use reqwest::Client;
use tracing::{debug, info};
use url::Url;

/// Single-attempt HTTP download. No retries, no timeout beyond the
/// transport defaults.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new(config: FetchConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    pub async fn fetch_bytes(&self, locator: &str) -> Result<Vec<u8>> {
        let url = Url::parse(locator).map_err(|e| CardError::Retrieval {
            locator: locator.to_string(),
            summary: format!("invalid URL: {}", e),
        })?;

        info!("Downloading... {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| retrieval(locator, &e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CardError::Retrieval {
                locator: locator.to_string(),
                summary: format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                ),
            });
        }

        let body = response.bytes().await.map_err(|e| retrieval(locator, &e))?;
        if body.is_empty() {
            return Err(CardError::Retrieval {
                locator: locator.to_string(),
                summary: format!("HTTP {} with an empty body", status.as_u16()),
            });
        }

        debug!("Fetched {} ({} bytes)", locator, body.len());
        Ok(body.to_vec())
    }
}

fn retrieval(locator: &str, error: &reqwest::Error) -> CardError {
    CardError::Retrieval {
        locator: locator.to_string(),
        summary: error.to_string(),
    }
}
