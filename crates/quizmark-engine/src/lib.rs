pub mod error;
pub mod models;
pub mod parsing;
pub mod upload;
pub mod validation;

// Re-export key types for easier usage
pub use error::ParseError;
pub use models::*;
pub use parsing::{QuestionParser, parse_questions_from_text};
pub use upload::{MediaUploader, UploadError, UploadedMedia, apply_uploads};
pub use validation::{QuestionValidation, ValidationFinding, ValidationIssue, validate_question};
