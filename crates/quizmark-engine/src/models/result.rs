use serde::{Deserialize, Serialize};

use super::media::MediaReference;
use super::question::{ParsedQuestion, QuestionKind};

/// Counts describing one parse session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseStatistics {
    pub total_questions: usize,
    pub single_questions: usize,
    /// Children of group units; the parents themselves are not counted.
    pub group_questions: usize,
    /// Children of fill-in-blank units.
    pub fill_in_blank_questions: usize,
    /// Nodes (parents and children included) with at least one media reference.
    pub questions_with_media: usize,
    pub total_media_files: usize,
}

/// Everything produced by parsing one document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionParsingResult {
    /// Top-level questions in document order; unit children stay nested.
    pub questions: Vec<ParsedQuestion>,
    /// Every media reference in the tree, in document order.
    pub media_files: Vec<MediaReference>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub statistics: ParseStatistics,
}

impl QuestionParsingResult {
    /// Appends a top-level question and counts it by kind.
    pub(crate) fn push_question(&mut self, question: ParsedQuestion) {
        match question.kind {
            QuestionKind::Single => self.statistics.single_questions += 1,
            QuestionKind::Parent => {
                for child in &question.child_questions {
                    match child.kind {
                        QuestionKind::Group => self.statistics.group_questions += 1,
                        QuestionKind::FillInBlank => self.statistics.fill_in_blank_questions += 1,
                        QuestionKind::Single | QuestionKind::Parent => {}
                    }
                }
            }
            QuestionKind::Group => self.statistics.group_questions += 1,
            QuestionKind::FillInBlank => self.statistics.fill_in_blank_questions += 1,
        }
        self.questions.push(question);
    }

    /// Recomputes the flattened media list and the totals derived from the tree.
    pub fn refresh_media(&mut self) {
        let nodes: Vec<&ParsedQuestion> =
            self.questions.iter().flat_map(|q| q.nodes()).collect();

        self.statistics.questions_with_media = nodes.iter().filter(|q| q.has_media()).count();
        self.media_files = nodes
            .iter()
            .flat_map(|q| q.media_references.iter().cloned())
            .collect();
        self.statistics.total_media_files = self.media_files.len();
        self.statistics.total_questions = self.questions.len();
    }

    /// All question nodes, parents followed by their children.
    pub fn all_nodes(&self) -> Vec<&ParsedQuestion> {
        self.questions.iter().flat_map(|q| q.nodes()).collect()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
