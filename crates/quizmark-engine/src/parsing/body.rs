use super::answers::parse_answers;
use super::markers::Markers;
use crate::models::ParsedAnswer;

/// The lines of one answerable question, split at the first answer line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionBody {
    pub content_lines: Vec<String>,
    pub answer_lines: Vec<String>,
}

impl QuestionBody {
    /// Trims `text` line by line, drops empty lines, and splits it.
    pub fn split(markers: &Markers, text: &str) -> Self {
        let mut body = Self::default();
        for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
            if body.answer_lines.is_empty() && !markers.is_answer_line(line) {
                body.content_lines.push(line.to_string());
            } else {
                body.answer_lines.push(line.to_string());
            }
        }
        body
    }

    pub fn is_empty(&self) -> bool {
        self.content_lines.is_empty() && self.answer_lines.is_empty()
    }

    /// Rewrites each content line; lines mapped to `None` or to an empty string are dropped.
    pub fn map_content_lines(&mut self, mut f: impl FnMut(&str) -> Option<String>) {
        self.content_lines = self
            .content_lines
            .iter()
            .filter_map(|line| f(line))
            .filter(|line| !line.is_empty())
            .collect();
    }

    /// Strips the CLO marker from content lines and returns the first tag found.
    pub fn take_clo(&mut self, markers: &Markers) -> Option<String> {
        let mut tag = None;
        self.map_content_lines(|line| match markers.strip_clo(line) {
            Some((found, rest)) => {
                tag.get_or_insert(found);
                Some(rest)
            }
            None => Some(line.to_string()),
        });
        tag
    }

    /// Content lines joined with single spaces.
    pub fn content(&self) -> String {
        self.content_lines.join(" ")
    }

    pub fn answers(&self, markers: &Markers) -> Vec<ParsedAnswer> {
        parse_answers(markers, &self.answer_lines)
    }
}
