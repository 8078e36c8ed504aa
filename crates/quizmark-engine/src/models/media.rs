use serde::{Deserialize, Serialize};

/// The kind of media embedded in question text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Audio,
    Image,
}

impl MediaKind {
    /// Tag used by the pre-upload placeholder, e.g. `[AUDIO_PLACEHOLDER:intro.mp3]`.
    pub const fn placeholder_tag(self) -> &'static str {
        match self {
            MediaKind::Audio => "AUDIO_PLACEHOLDER",
            MediaKind::Image => "IMAGE_PLACEHOLDER",
        }
    }
}

/// One audio or image mention found in question text.
///
/// Created by the media extractor; only the upload fields are filled in later,
/// by [`crate::upload::apply_uploads`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaReference {
    pub kind: MediaKind,
    /// Path exactly as written between the brackets (trimmed).
    pub original_path: String,
    /// Final segment of `original_path`, split on `/` or `\`.
    pub file_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temp_path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uploaded_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub storage_key: Option<String>,
}

impl MediaReference {
    pub fn new(kind: MediaKind, original_path: impl Into<String>) -> Self {
        let original_path = original_path.into();
        let file_name = file_name_of(&original_path).to_string();
        Self {
            kind,
            original_path,
            file_name,
            temp_path: None,
            uploaded_url: None,
            storage_key: None,
        }
    }

    /// Records where the media file was staged locally, ready for upload.
    pub fn with_temp_path(mut self, temp_path: impl Into<String>) -> Self {
        self.temp_path = Some(temp_path.into());
        self
    }

    /// The intermediate placeholder written into content in pre-upload mode.
    pub fn placeholder(&self) -> String {
        format!("[{}:{}]", self.kind.placeholder_tag(), self.file_name)
    }

    /// Lowercased extension including the leading dot, e.g. `.mp3`.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.file_name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(format!(".{}", ext.to_ascii_lowercase()))
    }

    /// The source URL a renderer should use: the uploaded URL once known.
    pub fn source(&self) -> &str {
        self.uploaded_url.as_deref().unwrap_or(&self.original_path)
    }

    pub fn mime_type(&self) -> &'static str {
        match self.extension().as_deref() {
            Some(".mp3") => "audio/mpeg",
            Some(".wav") => "audio/wav",
            Some(".m4a") => "audio/mp4",
            Some(".ogg") => "audio/ogg",
            Some(".jpg" | ".jpeg") => "image/jpeg",
            Some(".png") => "image/png",
            Some(".gif") => "image/gif",
            Some(".bmp") => "image/bmp",
            Some(".webp") => "image/webp",
            _ => match self.kind {
                MediaKind::Audio => "audio/mpeg",
                MediaKind::Image => "image/*",
            },
        }
    }
}

/// Returns the final path segment, accepting both `/` and `\` separators.
pub fn file_name_of(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}
