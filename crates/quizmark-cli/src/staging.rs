use std::path::{Path, PathBuf};

use quizmark_config::Config;
use quizmark_engine::{MediaReference, ParsedQuestion, QuestionParsingResult};

/// Directories searched for media files: the configured media directory, then
/// the directory holding the question bank.
pub fn search_dirs(config: &Config, input: &Path) -> Vec<PathBuf> {
    let mut dirs = Vec::new();
    if let Some(dir) = &config.media_dir {
        dirs.push(dir.clone());
    }
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => dirs.push(parent.to_path_buf()),
        _ => dirs.push(PathBuf::from(".")),
    }
    dirs
}

/// Records the local file of every media reference found in `dirs` as its `temp_path`.
///
/// Returns the number of references staged.
pub fn stage_media(result: &mut QuestionParsingResult, dirs: &[PathBuf]) -> usize {
    let mut staged = 0;
    for question in &mut result.questions {
        staged += stage_question(question, dirs);
    }
    result.refresh_media();
    staged
}

fn stage_question(question: &mut ParsedQuestion, dirs: &[PathBuf]) -> usize {
    let mut staged = 0;
    for media in &mut question.media_references {
        if let Some(found) = locate(media, dirs) {
            media.temp_path = Some(found.display().to_string());
            staged += 1;
        } else {
            log::warn!("Media file not found: {}", media.original_path);
        }
    }
    for child in &mut question.child_questions {
        staged += stage_question(child, dirs);
    }
    staged
}

fn locate(media: &MediaReference, dirs: &[PathBuf]) -> Option<PathBuf> {
    if media.file_name.is_empty() {
        return None;
    }
    let original = Path::new(&media.original_path);
    if original.is_absolute() && original.is_file() {
        return Some(original.to_path_buf());
    }
    dirs.iter()
        .flat_map(|dir| [dir.join(original), dir.join(&media.file_name)])
        .find(|candidate| candidate.is_file())
}
