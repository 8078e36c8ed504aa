//! Advisory checks run on every parsed question.
//!
//! Nothing here rejects a question; findings become the `warnings` of a
//! [`crate::QuestionParsingResult`] so document authors can fix their source.

use std::fmt;

use thiserror::Error;

use crate::models::{MediaKind, MediaProcessingOptions, ParsedQuestion, QuestionKind};
use crate::parsing::markers::Markers;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationIssue {
    #[error("content is empty")]
    EmptyContent,

    #[error("no answers found")]
    NoAnswers,

    #[error("answer {letter} is empty")]
    EmptyAnswer { letter: String },

    #[error("answer {position} is labelled {found}, expected {expected}")]
    UnexpectedLetter {
        position: usize,
        expected: char,
        found: String,
    },

    #[error("no answer is marked as correct")]
    NoCorrectAnswer,

    #[error("{count} answers are marked as correct")]
    MultipleCorrectAnswers { count: usize },

    #[error("media reference `{path}` has an empty file name")]
    EmptyMediaFileName { path: String },

    #[error("{kind} file `{file_name}` has an unsupported format")]
    UnsupportedMediaFormat { kind: &'static str, file_name: String },

    #[error("fill-in-blank question has no placeholder number")]
    MissingPlaceholderNumber,

    #[error("unit has no child questions")]
    NoChildren,

    #[error("stem has {blanks} blanks but only {children} child questions")]
    MissingBlankChildren { blanks: usize, children: usize },
}

impl ValidationIssue {
    /// Issues that leave the question unusable as it stands.
    pub fn is_blocking(&self) -> bool {
        matches!(
            self,
            ValidationIssue::EmptyContent
                | ValidationIssue::NoAnswers
                | ValidationIssue::EmptyMediaFileName { .. }
                | ValidationIssue::MissingPlaceholderNumber
                | ValidationIssue::NoChildren
        )
    }
}

/// An issue tied to the question it was found on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFinding {
    /// `3` for the third block, `3.2` for its second child.
    pub label: String,
    pub issue: ValidationIssue,
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Question {}: {}", self.label, self.issue)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionValidation {
    pub findings: Vec<ValidationFinding>,
}

impl QuestionValidation {
    pub fn is_valid(&self) -> bool {
        !self.findings.iter().any(|f| f.issue.is_blocking())
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Checks a top-level question and all of its children.
pub fn validate_question(
    question: &ParsedQuestion,
    markers: &Markers,
    options: &MediaProcessingOptions,
) -> QuestionValidation {
    let mut validation = QuestionValidation::default();
    let rules = Rules { markers, options };
    rules.check(question, &question.order.to_string(), &mut validation.findings);
    validation
}

struct Rules<'a> {
    markers: &'a Markers,
    options: &'a MediaProcessingOptions,
}

impl Rules<'_> {
    fn check(&self, q: &ParsedQuestion, label: &str, out: &mut Vec<ValidationFinding>) {
        let mut report = |issue| {
            out.push(ValidationFinding {
                label: label.to_string(),
                issue,
            })
        };

        // A fill-in-blank child's text usually lives in the stem.
        if q.content.trim().is_empty() && q.kind != QuestionKind::FillInBlank {
            report(ValidationIssue::EmptyContent);
        }

        if q.is_parent() {
            if q.child_questions.is_empty() {
                report(ValidationIssue::NoChildren);
            }
            if q.has_fill_in_blanks == Some(true) {
                let blanks = self.markers.count_blank_anchors(&q.content);
                if blanks > q.child_questions.len() {
                    report(ValidationIssue::MissingBlankChildren {
                        blanks,
                        children: q.child_questions.len(),
                    });
                }
            }
        } else {
            check_answers(q, &mut report);
        }

        if q.kind == QuestionKind::FillInBlank && q.placeholder_number.is_none() {
            report(ValidationIssue::MissingPlaceholderNumber);
        }

        for media in &q.media_references {
            if media.file_name.is_empty() {
                report(ValidationIssue::EmptyMediaFileName {
                    path: media.original_path.clone(),
                });
            } else if !self.options.accepts(media) {
                report(ValidationIssue::UnsupportedMediaFormat {
                    kind: match media.kind {
                        MediaKind::Audio => "audio",
                        MediaKind::Image => "image",
                    },
                    file_name: media.file_name.clone(),
                });
            }
        }

        for child in &q.child_questions {
            self.check(child, &format!("{label}.{}", child.order), out);
        }
    }
}

fn check_answers(q: &ParsedQuestion, report: &mut impl FnMut(ValidationIssue)) {
    if q.answers.is_empty() {
        report(ValidationIssue::NoAnswers);
        return;
    }

    for answer in q.answers.iter().filter(|a| a.content.is_empty()) {
        report(ValidationIssue::EmptyAnswer {
            letter: answer.letter.clone(),
        });
    }

    let diverging = q.answers.iter().zip(b'A'..=b'Z').find(|(answer, expected)| {
        answer.letter.as_bytes() != [*expected]
    });
    if let Some((answer, expected)) = diverging {
        report(ValidationIssue::UnexpectedLetter {
            position: answer.order + 1,
            expected: char::from(expected),
            found: answer.letter.clone(),
        });
    }

    match q.correct_answers().count() {
        0 => report(ValidationIssue::NoCorrectAnswer),
        1 => {}
        count => report(ValidationIssue::MultipleCorrectAnswers { count }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{MediaReference, ParsedAnswer};
    use pretty_assertions::assert_eq;

    fn answer(letter: &str, content: &str, is_correct: bool, order: usize) -> ParsedAnswer {
        ParsedAnswer {
            letter: letter.into(),
            content: content.into(),
            is_correct,
            order,
        }
    }

    fn single(answers: Vec<ParsedAnswer>) -> ParsedQuestion {
        ParsedQuestion::answerable(QuestionKind::Single, "Q?".into(), answers, vec![], 1)
    }

    fn messages(q: &ParsedQuestion) -> Vec<String> {
        validate_question(q, Markers::standard(), &MediaProcessingOptions::default())
            .findings
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn well_formed_question_is_clean() {
        let q = single(vec![answer("A", "<u>x</u>", true, 0), answer("B", "y", false, 1)]);
        let validation = validate_question(&q, Markers::standard(), &MediaProcessingOptions::default());
        assert!(validation.is_clean());
        assert!(validation.is_valid());
    }

    #[test]
    fn answer_anomalies_are_reported_but_not_blocking() {
        let q = single(vec![
            answer("A", "x", false, 0),
            answer("C", "", false, 1),
        ]);
        let validation = validate_question(&q, Markers::standard(), &MediaProcessingOptions::default());
        assert!(validation.is_valid());
        assert_eq!(
            messages(&q),
            vec![
                "Question 1: answer C is empty",
                "Question 1: answer 2 is labelled C, expected B",
                "Question 1: no answer is marked as correct",
            ]
        );
    }

    #[test]
    fn multiple_correct_answers() {
        let q = single(vec![answer("A", "<b>x</b>", true, 0), answer("B", "<u>y</u>", true, 1)]);
        assert_eq!(messages(&q), vec!["Question 1: 2 answers are marked as correct"]);
    }

    #[test]
    fn missing_answers_block_the_question() {
        let q = single(vec![]);
        let validation = validate_question(&q, Markers::standard(), &MediaProcessingOptions::default());
        assert!(!validation.is_valid());
        assert_eq!(messages(&q), vec!["Question 1: no answers found"]);
    }

    #[test]
    fn media_file_names_and_formats() {
        let mut q = single(vec![answer("A", "<u>x</u>", true, 0)]);
        q.media_references = vec![
            MediaReference::new(MediaKind::Audio, "clips/"),
            MediaReference::new(MediaKind::Audio, "song.flac"),
        ];
        assert_eq!(
            messages(&q),
            vec![
                "Question 1: media reference `clips/` has an empty file name",
                "Question 1: audio file `song.flac` has an unsupported format",
            ]
        );
    }

    #[test]
    fn children_are_labelled_with_parent_order() {
        let mut parent = ParsedQuestion::parent("Fill {<1>}_____ and {<2>}_____".into(), vec![], 4, true);
        let child = ParsedQuestion::answerable(
            QuestionKind::FillInBlank,
            String::new(),
            vec![answer("A", "<u>x</u>", true, 0)],
            vec![],
            1,
        );
        parent.child_questions = vec![child];

        assert_eq!(
            messages(&parent),
            vec![
                "Question 4: stem has 2 blanks but only 1 child questions",
                "Question 4.1: fill-in-blank question has no placeholder number",
            ]
        );
    }

    #[test]
    fn parent_without_children_is_blocking() {
        let parent = ParsedQuestion::parent("Stem".into(), vec![], 2, false);
        let validation = validate_question(&parent, Markers::standard(), &MediaProcessingOptions::default());
        assert!(!validation.is_valid());
        assert_eq!(messages(&parent), vec!["Question 2: unit has no child questions"]);
    }
}
