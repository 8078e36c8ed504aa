use std::fmt::Write;

use crate::models::{MediaKind, ParsedQuestion, QuestionKind, QuestionParsingResult};

/// Renders a parse result as an indented outline for fixture comparison.
///
/// One header line per question (`label kind [fill] [#n] [clo=n]`), followed by
/// its content, media, answers and children; then errors, warnings and counts.
/// Newlines inside content are shown as `\n`.
pub fn outline(result: &QuestionParsingResult) -> String {
    let mut out = String::new();
    for q in &result.questions {
        question(&mut out, q, &q.order.to_string(), 0);
    }
    for e in &result.errors {
        line(&mut out, 0, &format!("error: {e}"));
    }
    for w in &result.warnings {
        line(&mut out, 0, &format!("warning: {w}"));
    }
    let s = &result.statistics;
    line(
        &mut out,
        0,
        &format!(
            "stats: total={} single={} group={} fill={} with_media={} media={}",
            s.total_questions,
            s.single_questions,
            s.group_questions,
            s.fill_in_blank_questions,
            s.questions_with_media,
            s.total_media_files
        ),
    );
    out
}

fn question(out: &mut String, q: &ParsedQuestion, label: &str, depth: usize) {
    let kind = match q.kind {
        QuestionKind::Single => "single",
        QuestionKind::Parent => "parent",
        QuestionKind::Group => "group",
        QuestionKind::FillInBlank => "fill_in_blank",
    };
    let mut header = format!("{label} {kind}");
    if q.has_fill_in_blanks == Some(true) {
        header.push_str(" fill");
    }
    if let Some(n) = q.placeholder_number {
        let _ = write!(header, " #{n}");
    }
    if let Some(clo) = &q.clo_tag {
        let _ = write!(header, " clo={clo}");
    }
    line(out, depth, &header);

    let inner = depth + 1;
    line(out, inner, &format!("content: {}", q.content.replace('\n', "\\n")));
    for m in &q.media_references {
        let kind = match m.kind {
            MediaKind::Audio => "audio",
            MediaKind::Image => "image",
        };
        line(out, inner, &format!("media: {kind} {}", m.file_name));
    }
    for a in &q.answers {
        let mark = if a.is_correct { " (correct)" } else { "" };
        line(out, inner, &format!("{}. {}{mark}", a.letter, a.content));
    }
    for child in &q.child_questions {
        question(out, child, &format!("{label}.{}", child.order), inner);
    }
}

fn line(out: &mut String, depth: usize, text: &str) {
    let _ = writeln!(out, "{}{}", "  ".repeat(depth), text.trim_end());
}
