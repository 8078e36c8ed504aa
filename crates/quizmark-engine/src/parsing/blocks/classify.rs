use crate::parsing::markers::{QuestionMarker, Unit};

/// What a single line means to the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineRole {
    /// `[<sg>]`
    UnitStart,
    /// `[</sg>]`
    UnitEnd,
    /// `(KETTHUCNHOM)` / `(KETTHUCDIENKHUYET)`
    EndOfUnit(QuestionMarker),
    /// A line containing `(DON)`, `(NHOM)` or `(DIENKHUYET)`.
    TypeMarker(QuestionMarker),
    /// `[<br>]`
    Separator,
    Text,
}

/// Classification of a single line containing only local facts.
///
/// Phase 1 of segmentation: each line is classified independently of its
/// neighbours. Markers are compared against the trimmed line while `text`
/// keeps the line as written.
#[derive(Debug, Clone, Copy)]
pub struct LineClass<'a> {
    pub text: &'a str,
    pub is_blank: bool,
    pub role: LineRole,
}

/// Classifies the lines of a question-bank document.
pub struct MarkupLineClassifier;

impl MarkupLineClassifier {
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        let trimmed = line.trim();

        let role = if trimmed == Unit::START {
            LineRole::UnitStart
        } else if trimmed == Unit::END {
            LineRole::UnitEnd
        } else if trimmed == Unit::SEPARATOR {
            LineRole::Separator
        } else if let Some(kind) = QuestionMarker::from_end_literal(trimmed) {
            LineRole::EndOfUnit(kind)
        } else if let Some(kind) = QuestionMarker::find_in(trimmed) {
            LineRole::TypeMarker(kind)
        } else {
            LineRole::Text
        };

        LineClass {
            text: line,
            is_blank: trimmed.is_empty(),
            role,
        }
    }
}
