use thiserror::Error;

/// Why a single block could not be turned into questions.
///
/// These never escape [`crate::QuestionParser::parse`]; they are rendered into
/// the result's `errors` list with the block number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed unit: missing {marker} marker")]
    MissingMarker { marker: &'static str },

    #[error("malformed unit: {first} must come before {second}")]
    MarkersOutOfOrder {
        first: &'static str,
        second: &'static str,
    },

    #[error("block has no question type marker (expected (DON), (NHOM) or (DIENKHUYET))")]
    UnknownBlockKind,

    #[error("block contains no question text")]
    EmptyBlock,

    #[error("parser panicked: {0}")]
    Panicked(String),
}
