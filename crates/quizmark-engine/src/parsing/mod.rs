//! # Question-bank parsing
//!
//! A document is cleaned, split into blocks (see [`blocks`]), and each block is
//! dispatched on its type marker to the single, group or fill-in-blank parser.
//! A failing block is recorded in the result's `errors` and never stops the
//! remaining blocks.

pub mod answers;
pub mod blocks;
pub mod body;
pub mod group;
pub mod markers;
pub mod media;
pub mod single;
pub mod text;

#[cfg(test)]
mod tests;

use std::any::Any;
use std::panic::{AssertUnwindSafe, catch_unwind};

use log::{debug, error, info};

use crate::error::ParseError;
use crate::models::{MediaProcessingOptions, ParsedQuestion, QuestionParsingResult};
use crate::validation::validate_question;
use blocks::split_into_blocks;
use markers::{Markers, QuestionMarker};
use text::clean_text;

/// Parses question-bank documents with a fixed set of media options.
///
/// Holds no per-document state; one parser can be reused and shared across threads.
#[derive(Debug, Clone)]
pub struct QuestionParser {
    markers: &'static Markers,
    options: MediaProcessingOptions,
}

impl QuestionParser {
    pub fn new(options: MediaProcessingOptions) -> Self {
        Self {
            markers: Markers::standard(),
            options,
        }
    }

    pub fn options(&self) -> &MediaProcessingOptions {
        &self.options
    }

    pub fn markers(&self) -> &Markers {
        self.markers
    }

    /// Parses a whole document. Never fails: problems end up in `errors` and `warnings`.
    pub fn parse(&self, text: &str) -> QuestionParsingResult {
        let mut result = QuestionParsingResult::default();

        let blocks = match catch_unwind(|| split_into_blocks(&clean_text(text))) {
            Ok(blocks) => blocks,
            Err(payload) => {
                let reason = panic_message(payload.as_ref());
                error!("Fatal parsing error: {reason}");
                result.errors.push(format!("Fatal parsing error: {reason}"));
                return result;
            }
        };
        debug!("Document split into {} blocks", blocks.len());

        for (index, block) in blocks.iter().enumerate() {
            let number = index + 1;
            match self.parse_block_isolated(block, number) {
                Ok(question) => {
                    let validation = validate_question(&question, self.markers, &self.options);
                    result
                        .warnings
                        .extend(validation.findings.iter().map(ToString::to_string));
                    result.push_question(question);
                }
                Err(e) => {
                    error!("Error parsing question block {number}: {e}");
                    result
                        .errors
                        .push(format!("Error parsing question block {number}: {e}"));
                }
            }
        }

        result.refresh_media();
        info!(
            "Parsed {} questions with {} media files",
            result.statistics.total_questions, result.statistics.total_media_files
        );
        result
    }

    /// Classifies one block by its type marker and parses it.
    ///
    /// `order` is the block's 1-based position in the document.
    pub fn parse_block(&self, block: &str, order: usize) -> Result<ParsedQuestion, ParseError> {
        let kind = QuestionMarker::find_in(block).ok_or(ParseError::UnknownBlockKind)?;
        debug!("Block {order} is {kind:?}");
        match kind {
            QuestionMarker::Single => self
                .parse_single_question(block, order)
                .ok_or(ParseError::EmptyBlock),
            QuestionMarker::Group => self.parse_group_question(block, order),
            QuestionMarker::FillInBlank => self.parse_fill_in_blank_question(block, order),
        }
    }

    fn parse_block_isolated(&self, block: &str, order: usize) -> Result<ParsedQuestion, ParseError> {
        catch_unwind(AssertUnwindSafe(|| self.parse_block(block, order)))
            .unwrap_or_else(|payload| Err(ParseError::Panicked(panic_message(payload.as_ref()))))
    }
}

impl Default for QuestionParser {
    fn default() -> Self {
        Self::new(MediaProcessingOptions::default())
    }
}

/// Parses `text` with default media options.
pub fn parse_questions_from_text(text: &str) -> QuestionParsingResult {
    QuestionParser::default().parse(text)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}
