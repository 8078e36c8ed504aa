pub mod media;
pub mod options;
pub mod question;
pub mod result;

pub use media::{MediaKind, MediaReference, file_name_of};
pub use options::MediaProcessingOptions;
pub use question::{ParsedAnswer, ParsedQuestion, QuestionKind};
pub use result::{ParseStatistics, QuestionParsingResult};
