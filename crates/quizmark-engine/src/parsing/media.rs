//! Media reference extraction and placeholder substitution.
//!
//! `[audio: path]` and `[image: path]` mentions become [`MediaReference`]s and are
//! rewritten in the content either to HTML elements or, when the document's media
//! is going to be uploaded first, to `[AUDIO_PLACEHOLDER:name]` /
//! `[IMAGE_PLACEHOLDER:name]` markers that [`resolve_placeholders`] replaces later.

use std::collections::HashMap;

use regex::Captures;

use super::markers::Markers;
use crate::models::{MediaKind, MediaProcessingOptions, MediaReference};

/// Finds every media mention in `content`: audio matches first, then image
/// matches, each in order of appearance.
pub fn extract_media_references(markers: &Markers, content: &str) -> Vec<MediaReference> {
    let audio = markers
        .audio
        .captures_iter(content)
        .map(|caps| MediaReference::new(MediaKind::Audio, caps[1].trim()));
    let image = markers
        .image
        .captures_iter(content)
        .map(|caps| MediaReference::new(MediaKind::Image, caps[1].trim()));
    audio.chain(image).collect()
}

/// Rewrites every media mention in `content`.
///
/// Output never contains a media mention, so applying this twice is the same as once.
pub fn substitute_media(markers: &Markers, content: &str, options: &MediaProcessingOptions) -> String {
    let audio_done = markers.audio.replace_all(content, |caps: &Captures| {
        rewrite(MediaReference::new(MediaKind::Audio, caps[1].trim()), options)
    });
    markers
        .image
        .replace_all(&audio_done, |caps: &Captures| {
            rewrite(MediaReference::new(MediaKind::Image, caps[1].trim()), options)
        })
        .into_owned()
}

/// Extracts the media of raw content, then substitutes it.
pub fn process_content(
    markers: &Markers,
    content: &str,
    options: &MediaProcessingOptions,
) -> (String, Vec<MediaReference>) {
    let media = extract_media_references(markers, content);
    (substitute_media(markers, content, options), media)
}

/// Replaces the pre-upload placeholders of uploaded `media` in `content` with
/// HTML pointing at each reference's [`MediaReference::source`].
///
/// `media` lists the references whose placeholders are still in `content`, in
/// extraction order. Placeholders are matched by position, so two files sharing a
/// name each get their own URL and a reference without `uploaded_url` keeps its
/// placeholder.
pub fn resolve_placeholders(
    content: &str,
    media: &[MediaReference],
    options: &MediaProcessingOptions,
) -> String {
    let mut kept: HashMap<String, usize> = HashMap::new();
    let mut out = content.to_string();
    for m in media {
        let placeholder = m.placeholder();
        let skip = kept.entry(placeholder.clone()).or_default();
        if m.uploaded_url.is_none() {
            *skip += 1;
            continue;
        }
        if let Some((at, _)) = out.match_indices(&placeholder).nth(*skip) {
            out.replace_range(at..at + placeholder.len(), &render_html(m, options));
        }
    }
    out
}

/// HTML element for one media reference.
pub fn render_html(media: &MediaReference, options: &MediaProcessingOptions) -> String {
    let src = html_escape::encode_double_quoted_attribute(media.source());
    match media.kind {
        MediaKind::Audio => format!(
            r#"<audio controls><source src="{src}" type="{}">Your browser does not support the audio element.</audio>"#,
            media.mime_type()
        ),
        MediaKind::Image => format!(
            r#"<img src="{src}" alt="{}" style="{}" />"#,
            html_escape::encode_double_quoted_attribute(&media.file_name),
            image_style(options)
        ),
    }
}

fn rewrite(media: MediaReference, options: &MediaProcessingOptions) -> String {
    if options.upload_to_storage {
        media.placeholder()
    } else {
        render_html(&media, options)
    }
}

fn image_style(options: &MediaProcessingOptions) -> String {
    let mut style = match options.max_image_width {
        Some(w) => format!("max-width: {w}px;"),
        None => "max-width: 100%;".to_string(),
    };
    if let Some(h) = options.max_image_height {
        style.push_str(&format!(" max-height: {h}px;"));
    }
    style.push_str(" height: auto;");
    style
}
