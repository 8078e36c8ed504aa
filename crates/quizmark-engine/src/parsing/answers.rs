use super::markers::{CORRECT_ANSWER_MARKERS, Markers};
use crate::models::ParsedAnswer;

/// Whether raw answer text carries one of the correct-answer formatting markers.
///
/// Deliberately loose: any underscore counts, so an option containing a literal
/// `snake_case` word is reported correct as well.
pub fn is_correct_answer(raw: &str) -> bool {
    CORRECT_ANSWER_MARKERS.iter().any(|m| raw.contains(m))
}

/// Parses the answer region of a question.
///
/// `lines` are trimmed, non-empty and start with the first `X.` line. A line
/// without a letter prefix continues the current answer.
pub fn parse_answers<S: AsRef<str>>(markers: &Markers, lines: &[S]) -> Vec<ParsedAnswer> {
    let mut answers = Vec::new();
    let mut current: Option<(String, String)> = None;

    for line in lines {
        let line = line.as_ref();
        if let Some(caps) = markers.answer.captures(line) {
            if let Some((letter, raw)) = current.take() {
                answers.push(finish(letter, raw, answers.len()));
            }
            current = Some((caps[1].to_string(), caps[2].to_string()));
        } else if let Some((_, raw)) = current.as_mut() {
            raw.push(' ');
            raw.push_str(line);
        }
    }

    if let Some((letter, raw)) = current {
        answers.push(finish(letter, raw, answers.len()));
    }
    answers
}

fn finish(letter: String, raw: String, order: usize) -> ParsedAnswer {
    ParsedAnswer {
        letter,
        is_correct: is_correct_answer(&raw),
        content: raw.trim().to_string(),
        order,
    }
}
