use serde::{Deserialize, Serialize};

use super::media::MediaReference;

/// Shape of a parsed question node.
///
/// `Parent` is the stem of a group or fill-in-blank unit; `Group` and
/// `FillInBlank` are its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    Single,
    Parent,
    Group,
    FillInBlank,
}

impl QuestionKind {
    pub fn label(self) -> &'static str {
        match self {
            QuestionKind::Single => "Single Question",
            QuestionKind::Parent => "Parent Question",
            QuestionKind::Group => "Group Question",
            QuestionKind::FillInBlank => "Fill-in-Blank Question",
        }
    }
}

/// One answer option of a question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedAnswer {
    /// Uppercase label taken verbatim from the `X.` prefix.
    pub letter: String,
    pub content: String,
    pub is_correct: bool,
    /// Zero-based position among the answers of the owning question.
    pub order: usize,
}

/// A question node: a top-level single question, a unit stem, or a unit child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedQuestion {
    pub kind: QuestionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clo_tag: Option<String>,
    pub content: String,
    #[serde(default)]
    pub answers: Vec<ParsedAnswer>,
    #[serde(default)]
    pub media_references: Vec<MediaReference>,
    /// 1-based position among top-level blocks, or among siblings for children.
    pub order: usize,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub child_questions: Vec<ParsedQuestion>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder_number: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_fill_in_blanks: Option<bool>,
}

impl ParsedQuestion {
    /// A question with answers: a single question or a unit child.
    pub fn answerable(
        kind: QuestionKind,
        content: String,
        answers: Vec<ParsedAnswer>,
        media_references: Vec<MediaReference>,
        order: usize,
    ) -> Self {
        Self {
            kind,
            clo_tag: None,
            content,
            answers,
            media_references,
            order,
            parent_ref: None,
            child_questions: Vec::new(),
            placeholder_number: None,
            has_fill_in_blanks: None,
        }
    }

    /// The stem of a group or fill-in-blank unit.
    pub fn parent(
        content: String,
        media_references: Vec<MediaReference>,
        order: usize,
        has_fill_in_blanks: bool,
    ) -> Self {
        Self {
            kind: QuestionKind::Parent,
            clo_tag: None,
            content,
            answers: Vec::new(),
            media_references,
            order,
            parent_ref: None,
            child_questions: Vec::new(),
            placeholder_number: None,
            has_fill_in_blanks: Some(has_fill_in_blanks),
        }
    }

    pub fn is_parent(&self) -> bool {
        self.kind == QuestionKind::Parent
    }

    pub fn has_media(&self) -> bool {
        !self.media_references.is_empty()
    }

    /// Key children use to refer back to the parent with this `order`.
    pub fn parent_key(order: usize) -> String {
        format!("parent_{order}")
    }

    /// This node followed by all of its descendants, depth-first.
    pub fn nodes(&self) -> Vec<&ParsedQuestion> {
        let mut out = vec![self];
        for child in &self.child_questions {
            out.extend(child.nodes());
        }
        out
    }

    pub fn correct_answers(&self) -> impl Iterator<Item = &ParsedAnswer> {
        self.answers.iter().filter(|a| a.is_correct)
    }
}
