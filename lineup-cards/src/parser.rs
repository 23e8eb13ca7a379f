use crate::types::{EventPayload, Result};
use tracing::debug;

/// Name the payload is cached under.
pub const PAYLOAD_CACHE_NAME: &str = "all.json";

pub struct PayloadParser;

impl PayloadParser {
    /// Decode the raw payload into typed sessions and speakers. Any missing
    /// or mistyped field is reported as [`crate::CardError::Decode`].
    pub fn parse(content: &[u8]) -> Result<EventPayload> {
        debug!("Parsing event payload ({} bytes)", content.len());

        let payload: EventPayload = serde_json::from_slice(content)?;

        debug!(
            "Payload has {} sessions and {} speakers",
            payload.sessions.len(),
            payload.speakers.len()
        );
        Ok(payload)
    }
}
