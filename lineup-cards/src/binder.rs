use crate::template::{slot_name, template_path, TemplateDocument};
use crate::traits::AssetSource;
use crate::types::{CardError, Permutation, Result, SelectedSpeaker, TemplateStyle};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, info};

/// Writes one SVG per permutation by binding speaker headshots into the
/// template's `user{n}-img` slots.
pub struct TemplateBinder {
    template_dir: PathBuf,
    output_dir: PathBuf,
}

impl TemplateBinder {
    pub fn new(template_dir: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            template_dir: template_dir.into(),
            output_dir: output_dir.into(),
        }
    }

    pub fn output_path(&self, name: &str, permutation_index: usize) -> PathBuf {
        self.output_dir.join(format!("{}_{}.svg", name, permutation_index))
    }

    /// Template for `count` speakers. A missing file is the only check that
    /// the lineup size is supported.
    pub fn select_template(&self, style: TemplateStyle, count: usize) -> Result<PathBuf> {
        let path = template_path(&self.template_dir, style, count);
        if !path.is_file() {
            return Err(CardError::TemplateNotFound { path });
        }
        Ok(path)
    }

    pub async fn bind(
        &self,
        name: &str,
        selection: &[SelectedSpeaker],
        permutations: &[Permutation],
        style: TemplateStyle,
        source: &dyn AssetSource,
        force_refresh: bool,
    ) -> Result<Vec<PathBuf>> {
        let template = self.select_template(style, selection.len())?;
        for (index, permutation) in permutations.iter().enumerate() {
            check_permutation(index, permutation, selection.len())?;
        }

        let mut document = TemplateDocument::load(&template)?;
        let images = fetch_images(selection, source, force_refresh).await?;

        fs::create_dir_all(&self.output_dir)?;

        let mut written = Vec::with_capacity(permutations.len());
        for (index, permutation) in permutations.iter().enumerate() {
            bind_permutation(&mut document, selection, permutation, &images)?;

            let path = self.output_path(name, index);
            document.write_to(&path)?;
            info!("Wrote {}", path.display());
            written.push(path);
        }

        Ok(written)
    }
}

/// Rebind every slot of `document` for one permutation. Each slot the
/// permutation covers is overwritten, so nothing from a previous call
/// survives in those slots.
fn bind_permutation(
    document: &mut TemplateDocument,
    selection: &[SelectedSpeaker],
    permutation: &[usize],
    images: &HashMap<String, String>,
) -> Result<()> {
    for (slot_index, &avatar_index) in permutation.iter().enumerate() {
        let speaker = &selection[avatar_index];
        let href = images
            .get(&speaker.speaker_id)
            .ok_or_else(|| CardError::Lookup {
                speaker_id: speaker.speaker_id.clone(),
            })?;

        let slot = slot_name(slot_index);
        debug!("Binding {} to speaker {}", slot, speaker.speaker_id);
        document.bind_slot(&slot, href)?;
    }
    Ok(())
}

pub fn data_uri(bytes: &[u8]) -> String {
    format!("data:image/jpeg;base64,{}", BASE64.encode(bytes))
}

/// Fetch each distinct speaker once per run and keep it as a data URI,
/// keyed by speaker id.
async fn fetch_images(
    selection: &[SelectedSpeaker],
    source: &dyn AssetSource,
    force_refresh: bool,
) -> Result<HashMap<String, String>> {
    let mut images = HashMap::new();
    for speaker in selection {
        if images.contains_key(&speaker.speaker_id) {
            continue;
        }
        let bytes = source
            .fetch(&speaker.speaker_id, &speaker.image_url, force_refresh)
            .await?;
        images.insert(speaker.speaker_id.clone(), data_uri(&bytes));
    }
    Ok(images)
}

fn check_permutation(index: usize, permutation: &[usize], speakers: usize) -> Result<()> {
    let mut seen = vec![false; speakers];
    let valid = permutation.len() == speakers
        && permutation
            .iter()
            .all(|&i| i < speakers && !std::mem::replace(&mut seen[i], true));
    if !valid {
        return Err(CardError::InvalidPermutation { index, speakers });
    }
    Ok(())
}
