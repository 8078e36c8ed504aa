//! # Marker Grammar
//!
//! Every literal token and pattern of the question-bank markup lives here, so the
//! segmenter and the question parsers never spell a marker themselves.
//!
//! Literal markers are associated constants; regular expressions are compiled once
//! into [`Markers`] and shared by reference. `regex::Regex` matching is stateless,
//! so one instance serves every call and every thread.

use std::sync::OnceLock;

use regex::Regex;

/// A type marker opening a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionMarker {
    /// `(DON)`
    Single,
    /// `(NHOM)`
    Group,
    /// `(DIENKHUYET)`
    FillInBlank,
}

impl QuestionMarker {
    /// Detection precedence: single first, then group, then fill-in-blank.
    pub const ALL: [QuestionMarker; 3] = [
        QuestionMarker::Single,
        QuestionMarker::Group,
        QuestionMarker::FillInBlank,
    ];

    pub const fn literal(self) -> &'static str {
        match self {
            QuestionMarker::Single => "(DON)",
            QuestionMarker::Group => "(NHOM)",
            QuestionMarker::FillInBlank => "(DIENKHUYET)",
        }
    }

    /// Explicit end-of-unit marker written after `[</sg>]`, if the kind has one.
    pub const fn end_literal(self) -> Option<&'static str> {
        match self {
            QuestionMarker::Single => None,
            QuestionMarker::Group => Some("(KETTHUCNHOM)"),
            QuestionMarker::FillInBlank => Some("(KETTHUCDIENKHUYET)"),
        }
    }

    /// Whether blocks of this kind are `[<sg>] .. [</sg>]` units.
    pub const fn is_unit(self) -> bool {
        !matches!(self, QuestionMarker::Single)
    }

    /// First marker (in precedence order) contained anywhere in `text`.
    pub fn find_in(text: &str) -> Option<QuestionMarker> {
        Self::ALL.into_iter().find(|m| text.contains(m.literal()))
    }

    /// The unit kind whose end-of-unit marker equals `line`.
    pub fn from_end_literal(line: &str) -> Option<QuestionMarker> {
        Self::ALL
            .into_iter()
            .find(|m| m.end_literal() == Some(line))
    }
}

/// Region delimiters of a group or fill-in-blank unit.
pub struct Unit;

impl Unit {
    /// Opens the stem region.
    pub const START: &'static str = "[<sg>]";
    /// Ends the stem, opens the child region.
    pub const CONTENT_END: &'static str = "[<egc>]";
    /// Ends the child region and the unit.
    pub const END: &'static str = "[</sg>]";
    /// Separates children inside a unit; between top-level blocks it separates questions.
    pub const SEPARATOR: &'static str = "[<br>]";
}

/// Substrings whose presence in an answer marks it as the correct one.
pub const CORRECT_ANSWER_MARKERS: [&str; 7] =
    ["<u>", "</u>", "_", "<b>", "</b>", "<strong>", "</strong>"];

/// Compiled patterns of the grammar.
#[derive(Debug)]
pub struct Markers {
    /// `(CLOn)`
    pub clo: Regex,
    /// `{<n>}`
    pub placeholder: Regex,
    /// `{<n>}` followed by at least five underscores.
    pub fill_blank_anchor: Regex,
    /// `[audio: path]`, case-insensitive.
    pub audio: Regex,
    /// `[image: path]`, case-insensitive.
    pub image: Regex,
    /// `A. text` at line start; captures letter and text.
    pub answer: Regex,
    /// `(NHOM – n)` child marker.
    pub group_child: Regex,
    /// `(DIENKHUYET – n)` child marker.
    pub fill_blank_child: Regex,
    /// Older `(<n>)` child marker at line start.
    pub child_index: Regex,
}

impl Markers {
    /// The grammar used by exported question banks, compiled on first use.
    pub fn standard() -> &'static Markers {
        static MARKERS: OnceLock<Markers> = OnceLock::new();
        MARKERS.get_or_init(Markers::compile)
    }

    fn compile() -> Self {
        Self {
            clo: pattern(r"\(CLO(\d+)\)"),
            placeholder: pattern(r"\{<(\d+)>\}"),
            fill_blank_anchor: pattern(r"\{<(\d+)>\}_{5,}"),
            audio: pattern(r"(?i)\[audio:\s*([^\]]+)\]"),
            image: pattern(r"(?i)\[image:\s*([^\]]+)\]"),
            answer: pattern(r"^([A-Z])\.\s*(.*)$"),
            group_child: pattern(r"\(NHOM\s*[–-]\s*(\d+)\)"),
            fill_blank_child: pattern(r"\(DIENKHUYET\s*[–-]\s*(\d+)\)"),
            child_index: pattern(r"^\(<(\d+)>\)"),
        }
    }

    pub fn is_answer_line(&self, line: &str) -> bool {
        self.answer.is_match(line)
    }

    /// Removes the first CLO marker from `line`.
    ///
    /// Returns the tag number and the trimmed remainder, or `None` if the line
    /// carries no CLO marker.
    pub fn strip_clo(&self, line: &str) -> Option<(String, String)> {
        let caps = self.clo.captures(line)?;
        let tag = caps[1].to_string();
        let rest = self.clo.replacen(line, 1, "").trim().to_string();
        Some((tag, rest))
    }

    /// Removes a child marker from `line`, returning its number and the trimmed remainder.
    ///
    /// Tries the kind-specific `(NHOM – n)` / `(DIENKHUYET – n)` form first, then `(<n>)`.
    pub fn strip_child_marker(&self, line: &str, fill_in_blank: bool) -> Option<(u32, String)> {
        let kind_pattern = if fill_in_blank {
            &self.fill_blank_child
        } else {
            &self.group_child
        };

        for re in [kind_pattern, &self.child_index] {
            if let Some(caps) = re.captures(line)
                && let Ok(number) = caps[1].parse::<u32>()
            {
                let rest = re.replacen(line, 1, "").trim().to_string();
                return Some((number, rest));
            }
        }
        None
    }

    pub fn count_placeholders(&self, text: &str) -> usize {
        self.placeholder.find_iter(text).count()
    }

    pub fn count_blank_anchors(&self, text: &str) -> usize {
        self.fill_blank_anchor.find_iter(text).count()
    }
}

fn pattern(source: &str) -> Regex {
    Regex::new(source).expect("Invalid marker grammar regex")
}
