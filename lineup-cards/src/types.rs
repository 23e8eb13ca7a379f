use serde::Deserialize;
use std::fmt;
use std::path::PathBuf;

/// Decoded Sessionize "All data" payload. Only the fields the generator
/// needs are kept; everything else in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct EventPayload {
    pub sessions: Vec<Session>,
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(rename = "speakers")]
    pub speaker_ids: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Speaker {
    pub id: String,
    // Sessionize sends null for speakers that never uploaded a headshot
    #[serde(rename = "profilePicture", default)]
    pub profile_picture: Option<String>,
}

/// One resolved speaker, in slot order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedSpeaker {
    pub speaker_id: String,
    pub image_url: String,
}

pub type SpeakerSelection = Vec<SelectedSpeaker>;

/// `permutation[slot_index]` is the index into the [`SpeakerSelection`]
/// whose image goes into slot `slot_index`.
pub type Permutation = Vec<usize>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TemplateStyle {
    #[default]
    Default,
    /// Dark template family used for the virtual edition.
    Virtual,
}

impl TemplateStyle {
    pub fn from_virtual_flag(is_virtual: bool) -> Self {
        if is_virtual {
            TemplateStyle::Virtual
        } else {
            TemplateStyle::Default
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            TemplateStyle::Default => "",
            TemplateStyle::Virtual => "v",
        }
    }
}

impl fmt::Display for TemplateStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateStyle::Default => write!(f, "default"),
            TemplateStyle::Virtual => write!(f, "virtual"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "Lineup-Cards/1.0".to_string(),
        }
    }
}

/// Filesystem roots used by a run.
#[derive(Debug, Clone)]
pub struct Layout {
    pub cache_dir: PathBuf,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cache_dir: PathBuf::from("tmp"),
            template_dir: PathBuf::from("Twitter_AM"),
            output_dir: PathBuf::from("out"),
        }
    }
}

impl Layout {
    /// All three roots under a single base directory, keeping the default
    /// directory names.
    pub fn rooted_at(base: impl Into<PathBuf>) -> Self {
        let base = base.into();
        let defaults = Self::default();
        Self {
            cache_dir: base.join(defaults.cache_dir),
            template_dir: base.join(defaults.template_dir),
            output_dir: base.join(defaults.output_dir),
        }
    }
}

/// Everything one generator run needs besides the layout.
#[derive(Debug, Clone)]
pub struct RunOptions {
    pub name: String,
    pub sessionize_url: String,
    pub session_ids: Vec<String>,
    pub permutations: u64,
    pub style: TemplateStyle,
    pub force_refresh: bool,
}

#[derive(Debug, thiserror::Error)]
pub enum CardError {
    #[error("cannot get {locator}: {summary}")]
    Retrieval { locator: String, summary: String },

    #[error("{name:?} is not a valid cache file name")]
    InvalidAssetName { name: String },

    #[error("speaker {speaker_id} is referenced by a session but missing from the speaker list")]
    Lookup { speaker_id: String },

    #[error("speaker {speaker_id} has no profile picture")]
    MissingPicture { speaker_id: String },

    #[error("no speakers found for sessions {session_ids:?}")]
    NoSpeakers { session_ids: Vec<String> },

    #[error("no template found at {}", path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("template {} has no image slot {slot}", template.display())]
    SlotNotFound { slot: String, template: PathBuf },

    #[error("permutation {index} is not an arrangement of {speakers} speakers")]
    InvalidPermutation { index: usize, speakers: usize },

    #[error("Payload decode error: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("SVG error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CardError>;
