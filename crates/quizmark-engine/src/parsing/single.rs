use log::debug;

use super::QuestionParser;
use super::body::QuestionBody;
use super::markers::QuestionMarker;
use super::media::process_content;
use crate::models::{ParsedQuestion, QuestionKind};

impl QuestionParser {
    /// Parses a `(DON)` block into one single question.
    ///
    /// Text following the marker on its own line is kept as content. Returns
    /// `None` when the block holds no text at all.
    pub fn parse_single_question(&self, block: &str, order: usize) -> Option<ParsedQuestion> {
        let mut body = QuestionBody::split(self.markers, block);
        if body.is_empty() {
            return None;
        }

        let marker = QuestionMarker::Single.literal();
        body.map_content_lines(|line| Some(line.replacen(marker, "", 1).trim().to_string()));
        let clo_tag = body.take_clo(self.markers);

        let (content, media) = process_content(self.markers, &body.content(), &self.options);
        let answers = body.answers(self.markers);
        debug!(
            "Single question {order}: {} answers, {} media",
            answers.len(),
            media.len()
        );

        let mut question =
            ParsedQuestion::answerable(QuestionKind::Single, content, answers, media, order);
        question.clo_tag = clo_tag;
        Some(question)
    }
}
