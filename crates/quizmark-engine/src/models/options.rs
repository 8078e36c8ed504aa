use serde::{Deserialize, Serialize};

use super::media::{MediaKind, MediaReference};

/// Options controlling how media placeholders are rewritten and checked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MediaProcessingOptions {
    /// When set, media placeholders become `[AUDIO_PLACEHOLDER:..]` /
    /// `[IMAGE_PLACEHOLDER:..]` markers for a later upload step instead of HTML.
    pub upload_to_storage: bool,
    pub max_image_width: Option<u32>,
    pub max_image_height: Option<u32>,
    /// Accepted audio extensions, with leading dot.
    pub audio_formats: Vec<String>,
    /// Accepted image extensions, with leading dot.
    pub image_formats: Vec<String>,
}

impl Default for MediaProcessingOptions {
    fn default() -> Self {
        Self {
            upload_to_storage: false,
            max_image_width: None,
            max_image_height: None,
            audio_formats: [".mp3", ".wav", ".m4a", ".ogg"].map(String::from).to_vec(),
            image_formats: [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".webp"]
                .map(String::from)
                .to_vec(),
        }
    }
}

impl MediaProcessingOptions {
    /// Options for a document whose media will be uploaded before rendering.
    pub fn pre_upload() -> Self {
        Self {
            upload_to_storage: true,
            ..Self::default()
        }
    }

    /// Whether the media's extension is in the configured list for its kind.
    ///
    /// An empty list accepts everything; a file without extension is accepted.
    pub fn accepts(&self, media: &MediaReference) -> bool {
        let formats = match media.kind {
            MediaKind::Audio => &self.audio_formats,
            MediaKind::Image => &self.image_formats,
        };
        if formats.is_empty() {
            return true;
        }
        match media.extension() {
            Some(ext) => formats.iter().any(|f| f.eq_ignore_ascii_case(&ext)),
            None => true,
        }
    }
}
