//! Text shown by the terminal previewer.
//!
//! Kept apart from the ratatui drawing code so it can be checked without a terminal.

use quizmark_engine::{MediaKind, ParsedQuestion, QuestionKind, QuestionParsingResult};

const TITLE_WIDTH: usize = 40;

/// One entry of the question list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionRow {
    pub depth: usize,
    /// Index into `result.questions`.
    pub top: usize,
    /// Index into the top-level question's children.
    pub child: Option<usize>,
    pub title: String,
}

/// Flattens the question tree into list rows, children right after their parent.
pub fn question_rows(result: &QuestionParsingResult) -> Vec<QuestionRow> {
    let mut rows = Vec::new();
    for (top, question) in result.questions.iter().enumerate() {
        rows.push(QuestionRow {
            depth: 0,
            top,
            child: None,
            title: format!("{}. {}", question.order, summary(question)),
        });
        for (index, child) in question.child_questions.iter().enumerate() {
            rows.push(QuestionRow {
                depth: 1,
                top,
                child: Some(index),
                title: format!("{}.{} {}", question.order, child.order, summary(child)),
            });
        }
    }
    rows
}

pub fn question_at<'a>(
    result: &'a QuestionParsingResult,
    row: &QuestionRow,
) -> Option<&'a ParsedQuestion> {
    let question = result.questions.get(row.top)?;
    match row.child {
        Some(index) => question.child_questions.get(index),
        None => Some(question),
    }
}

/// Lines of the detail panel for one question.
pub fn detail_lines(question: &ParsedQuestion) -> Vec<String> {
    let mut lines = vec![question.kind.label().to_string()];
    if let Some(tag) = &question.clo_tag {
        lines.push(format!("CLO: {tag}"));
    }
    if let Some(number) = question.placeholder_number {
        lines.push(format!("Blank: {number}"));
    }
    lines.push(String::new());
    lines.extend(question.content.lines().map(str::to_string));

    if !question.answers.is_empty() {
        lines.push(String::new());
        for answer in &question.answers {
            let mark = if answer.is_correct { "[x]" } else { "[ ]" };
            lines.push(format!("{mark} {}. {}", answer.letter, answer.content));
        }
    }

    if question.has_media() {
        lines.push(String::new());
        for media in &question.media_references {
            let kind = match media.kind {
                MediaKind::Audio => "audio",
                MediaKind::Image => "image",
            };
            let location = media
                .uploaded_url
                .as_deref()
                .or(media.temp_path.as_deref())
                .unwrap_or("not found");
            lines.push(format!("{kind}: {} ({location})", media.file_name));
        }
    }

    if !question.child_questions.is_empty() {
        lines.push(String::new());
        lines.push(format!("{} child questions", question.child_questions.len()));
    }
    lines
}

/// Errors then warnings, each prefixed with its severity.
pub fn issue_lines(result: &QuestionParsingResult) -> Vec<String> {
    result
        .errors
        .iter()
        .map(|e| format!("error: {e}"))
        .chain(result.warnings.iter().map(|w| format!("warning: {w}")))
        .collect()
}

pub fn status_line(result: &QuestionParsingResult) -> String {
    let stats = &result.statistics;
    format!(
        "{} questions ({} single, {} group, {} fill-in-blank) | {} media | {} errors | {} warnings",
        stats.total_questions,
        stats.single_questions,
        stats.group_questions,
        stats.fill_in_blank_questions,
        stats.total_media_files,
        result.errors.len(),
        result.warnings.len(),
    )
}

fn summary(question: &ParsedQuestion) -> String {
    let first_line = question.content.lines().next().unwrap_or("").trim();
    let text = if first_line.is_empty() {
        match question.kind {
            QuestionKind::FillInBlank => "(blank)",
            _ => "(no content)",
        }
    } else {
        first_line
    };

    if text.chars().count() > TITLE_WIDTH {
        let cut: String = text.chars().take(TITLE_WIDTH - 1).collect();
        format!("{cut}…")
    } else {
        text.to_string()
    }
}
