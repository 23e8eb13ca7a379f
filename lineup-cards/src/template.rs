use crate::types::{CardError, Result, TemplateStyle};
use quick_xml::events::{BytesStart, Event};
use quick_xml::{Reader, Writer};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

const IMAGE_TAG: &[u8] = b"image";
const ID_ATTR: &[u8] = b"id";
const XLINK_HREF: &str = "xlink:href";
// SVG 2 renderers prefer a plain href over xlink:href, so a stale one has to go
const PLAIN_HREF: &[u8] = b"href";

/// Location of the template for `count` speakers in the given style:
/// `Twitter_{v?}AM_{count}.svg` under `template_dir`.
pub fn template_path(template_dir: &Path, style: TemplateStyle, count: usize) -> PathBuf {
    template_dir.join(format!("Twitter_{}AM_{}.svg", style.prefix(), count))
}

/// `id` of the `<image>` element that receives the speaker for the
/// 0-based `slot_index`.
pub fn slot_name(slot_index: usize) -> String {
    format!("user{}-img", slot_index + 1)
}

/// An SVG template held as an owned event stream. Image slots are indexed
/// by their `id` so rebinding does not rescan the document.
pub struct TemplateDocument {
    path: PathBuf,
    events: Vec<Event<'static>>,
    slots: HashMap<String, usize>,
}

impl TemplateDocument {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::parse(path, &text)
    }

    pub fn parse(path: impl Into<PathBuf>, text: &str) -> Result<Self> {
        let path = path.into();
        let mut reader = Reader::from_str(text);
        let mut events = Vec::new();
        let mut slots = HashMap::new();

        loop {
            match reader.read_event()? {
                Event::Eof => break,
                event => {
                    if let Event::Start(ref element) | Event::Empty(ref element) = event {
                        if let Some(id) = image_id(element)? {
                            // first element wins when ids are duplicated
                            slots.entry(id).or_insert(events.len());
                        }
                    }
                    events.push(event.into_owned());
                }
            }
        }

        debug!("Loaded template {} with {} image slots", path.display(), slots.len());
        Ok(Self {
            path,
            events,
            slots,
        })
    }

    pub fn has_slot(&self, slot: &str) -> bool {
        self.slots.contains_key(slot)
    }

    /// Point the `<image id="{slot}">` element at `href`, replacing any
    /// reference it carried before.
    pub fn bind_slot(&mut self, slot: &str, href: &str) -> Result<()> {
        let element = self
            .slots
            .get(slot)
            .and_then(|&index| self.events.get_mut(index))
            .and_then(|event| match event {
                Event::Start(element) | Event::Empty(element) => Some(element),
                _ => None,
            })
            .ok_or_else(|| CardError::SlotNotFound {
                slot: slot.to_string(),
                template: self.path.clone(),
            })?;

        let kept = element
            .attributes()
            .map(|attr| attr.map(|a| (a.key.as_ref().to_vec(), a.value.into_owned())))
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(quick_xml::Error::from)?;

        element.clear_attributes();
        for (key, value) in &kept {
            if key.as_slice() == XLINK_HREF.as_bytes() || key.as_slice() == PLAIN_HREF {
                continue;
            }
            element.push_attribute((key.as_slice(), value.as_slice()));
        }
        element.push_attribute((XLINK_HREF, href));

        Ok(())
    }

    /// Current `xlink:href` of a slot, unescaped.
    pub fn slot_href(&self, slot: &str) -> Result<Option<String>> {
        let Some(element) = self
            .slots
            .get(slot)
            .and_then(|&index| self.events.get(index))
            .and_then(|event| match event {
                Event::Start(element) | Event::Empty(element) => Some(element),
                _ => None,
            })
        else {
            return Ok(None);
        };

        for attr in element.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            if attr.key.as_ref() == XLINK_HREF.as_bytes() {
                return Ok(Some(attr.unescape_value()?.into_owned()));
            }
        }
        Ok(None)
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut writer = Writer::new(Vec::new());
        for event in &self.events {
            writer.write_event(event.clone())?;
        }
        Ok(writer.into_inner())
    }

    pub fn write_to(&self, path: &Path) -> Result<()> {
        fs::write(path, self.to_bytes()?)?;
        Ok(())
    }
}

fn image_id(element: &BytesStart<'_>) -> Result<Option<String>> {
    if element.local_name().as_ref() != IMAGE_TAG {
        return Ok(None);
    }
    for attr in element.attributes() {
        let attr = attr.map_err(quick_xml::Error::from)?;
        if attr.key.as_ref() == ID_ATTR {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}
