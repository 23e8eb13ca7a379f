#![allow(dead_code)]

use async_trait::async_trait;
use lineup_cards::{AssetSource, CardError, Result, TemplateStyle};
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Fake headshot bytes for a speaker; distinct per speaker so the data
/// URIs in the output can be traced back.
pub fn headshot(speaker_id: &str) -> Vec<u8> {
    format!("JPEG-{}", speaker_id).into_bytes()
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

/// SVG template with `slots` image slots, named the way the real
/// templates are.
pub fn template_svg(slots: usize) -> String {
    let mut svg = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <svg xmlns=\"http://www.w3.org/2000/svg\" xmlns:xlink=\"http://www.w3.org/1999/xlink\" width=\"1200\" height=\"675\">\n\
         \x20 <rect width=\"1200\" height=\"675\" fill=\"#1d1d1b\"/>\n\
         \x20 <text x=\"40\" y=\"80\">Android Makers &amp; friends</text>\n",
    );
    for slot in 1..=slots {
        svg.push_str(&format!(
            "  <image id=\"user{slot}-img\" x=\"{x}\" y=\"300\" width=\"200\" height=\"200\" xlink:href=\"placeholder.png\"/>\n",
            slot = slot,
            x = slot * 220,
        ));
    }
    svg.push_str("</svg>\n");
    svg
}

pub fn write_template(template_dir: &Path, style: TemplateStyle, slots: usize) -> PathBuf {
    std::fs::create_dir_all(template_dir).expect("Failed to create template dir");
    let path = lineup_cards::template::template_path(template_dir, style, slots);
    std::fs::write(&path, template_svg(slots)).expect("Failed to write template");
    path
}

/// Sessionize-shaped payload. Picture URLs point at `image_base`.
pub fn sessionize_payload(image_base: &str) -> Value {
    json!({
        "sessions": [
            { "id": "101", "title": "Keynote", "speakers": ["alice", "bob"] },
            { "id": "102", "title": "Compose deep dive", "speakers": ["carol"] },
            { "id": "103", "title": "Kotlin panel", "speakers": ["bob", "dave"] },
            { "id": "104", "title": "Lunch", "speakers": [] }
        ],
        "speakers": [
            { "id": "alice", "fullName": "Alice", "profilePicture": format!("{}/img/alice.jpg", image_base) },
            { "id": "bob", "fullName": "Bob", "profilePicture": format!("{}/img/bob.jpg", image_base) },
            { "id": "carol", "fullName": "Carol", "profilePicture": format!("{}/img/carol.jpg", image_base) },
            { "id": "dave", "fullName": "Dave", "profilePicture": null }
        ]
    })
}

/// In-memory [`AssetSource`] that records every fetch.
#[derive(Default)]
pub struct MemorySource {
    assets: HashMap<String, Vec<u8>>,
    calls: Mutex<Vec<String>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_asset(mut self, name: &str, bytes: Vec<u8>) -> Self {
        self.assets.insert(name.to_string(), bytes);
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().expect("calls lock poisoned").clone()
    }
}

#[async_trait]
impl AssetSource for MemorySource {
    async fn fetch(&self, name: &str, locator: &str, _force_refresh: bool) -> Result<Vec<u8>> {
        self.calls
            .lock()
            .expect("calls lock poisoned")
            .push(name.to_string());
        self.assets
            .get(name)
            .cloned()
            .ok_or_else(|| CardError::Retrieval {
                locator: locator.to_string(),
                summary: "HTTP 404: Not Found".to_string(),
            })
    }
}
