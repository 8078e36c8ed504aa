//! Hand-off to the storage collaborator.
//!
//! The engine never talks to storage itself. A [`MediaUploader`] receives each
//! staged media file and answers with its public URL; [`apply_uploads`] records
//! the answer and swaps the pre-upload placeholders for HTML.

use log::{info, warn};
use thiserror::Error;

use crate::models::{MediaProcessingOptions, MediaReference, ParsedQuestion, QuestionParsingResult};
use crate::parsing::media::resolve_placeholders;

/// Where an uploaded media file ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadedMedia {
    pub url: String,
    pub storage_key: String,
}

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("could not read {file_name}")]
    Read {
        file_name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("storage rejected {file_name}: {reason}")]
    Rejected { file_name: String, reason: String },
}

pub trait MediaUploader {
    /// Uploads the file at `media.temp_path`.
    fn upload(&self, media: &MediaReference) -> Result<UploadedMedia, UploadError>;
}

/// Uploads every staged, not yet uploaded media reference in `result`.
///
/// References without a `temp_path` are skipped. Failures are collected and the
/// failed reference keeps its placeholder, so a later call can retry it.
pub fn apply_uploads(
    result: &mut QuestionParsingResult,
    uploader: &impl MediaUploader,
    options: &MediaProcessingOptions,
) -> Vec<UploadError> {
    let mut failures = Vec::new();
    for question in &mut result.questions {
        upload_question(question, uploader, options, &mut failures);
    }
    result.refresh_media();

    let uploaded = result
        .media_files
        .iter()
        .filter(|m| m.uploaded_url.is_some())
        .count();
    info!(
        "Uploaded media: {uploaded} of {} files, {} failures",
        result.media_files.len(),
        failures.len()
    );
    failures
}

fn upload_question(
    question: &mut ParsedQuestion,
    uploader: &impl MediaUploader,
    options: &MediaProcessingOptions,
    failures: &mut Vec<UploadError>,
) {
    // Placeholders still in the content, before this round changes anything.
    let pending: Vec<usize> = question
        .media_references
        .iter()
        .enumerate()
        .filter(|(_, m)| m.uploaded_url.is_none())
        .map(|(i, _)| i)
        .collect();

    let mut uploaded_any = false;
    for &i in &pending {
        let media = &mut question.media_references[i];
        if media.temp_path.is_none() {
            continue;
        }
        match uploader.upload(media) {
            Ok(uploaded) => {
                media.uploaded_url = Some(uploaded.url);
                media.storage_key = Some(uploaded.storage_key);
                uploaded_any = true;
            }
            Err(e) => {
                warn!("Upload failed: {e}");
                failures.push(e);
            }
        }
    }

    if uploaded_any {
        let pending: Vec<MediaReference> = pending
            .iter()
            .map(|&i| question.media_references[i].clone())
            .collect();
        question.content = resolve_placeholders(&question.content, &pending, options);
    }

    for child in &mut question.child_questions {
        upload_question(child, uploader, options, failures);
    }
}
