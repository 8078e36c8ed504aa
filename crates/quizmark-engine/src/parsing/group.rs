//! Group and fill-in-blank units.
//!
//! Both kinds share one layout:
//!
//! ```text
//! (NHOM)                      or (DIENKHUYET)
//! [<sg>]
//! stem text, may hold {<1>}_____ anchors and media
//! [<egc>]
//! (NHOM – 1) first child      or (DIENKHUYET – 1)
//! A. ...
//! [<br>]
//! (NHOM – 2) second child
//! A. ...
//! [</sg>]
//! ```
//!
//! The unit becomes one `Parent` question owning its children.

use log::{debug, warn};

use super::QuestionParser;
use super::body::QuestionBody;
use super::markers::Unit;
use super::media::process_content;
use crate::error::ParseError;
use crate::models::{MediaReference, ParsedQuestion, QuestionKind};

/// A unit split into its stem and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupStructure {
    /// Stem with media substituted.
    pub stem: String,
    /// Media mentioned in the stem only.
    pub media: Vec<MediaReference>,
    pub children: Vec<ParsedQuestion>,
    /// `{<n>}` placeholders in the stem.
    pub placeholder_count: usize,
    /// `{<n>}_____` anchors in the stem.
    pub blank_count: usize,
}

impl QuestionParser {
    /// Locates the unit regions of `block` and parses stem and children.
    ///
    /// `order` is the parent's position and is used for the children's `parent_ref`.
    pub fn parse_group_structure(
        &self,
        block: &str,
        fill_in_blank: bool,
        order: usize,
    ) -> Result<GroupStructure, ParseError> {
        let start = find_marker(block, Unit::START)?;
        let content_end = find_marker(block, Unit::CONTENT_END)?;
        let end = find_marker(block, Unit::END)?;

        if content_end < start + Unit::START.len() {
            return Err(ParseError::MarkersOutOfOrder {
                first: Unit::START,
                second: Unit::CONTENT_END,
            });
        }
        if end < content_end + Unit::CONTENT_END.len() {
            return Err(ParseError::MarkersOutOfOrder {
                first: Unit::CONTENT_END,
                second: Unit::END,
            });
        }

        let raw_stem = block[start + Unit::START.len()..content_end].trim();
        let child_region = block[content_end + Unit::CONTENT_END.len()..end].trim();

        let (stem, media) = process_content(self.markers, raw_stem, &self.options);
        let parent_ref = ParsedQuestion::parent_key(order);

        let children: Vec<ParsedQuestion> = child_region
            .split(Unit::SEPARATOR)
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .enumerate()
            .map(|(i, text)| self.parse_child_question(text, fill_in_blank, i + 1, &parent_ref))
            .collect();

        Ok(GroupStructure {
            stem,
            media,
            children,
            placeholder_count: self.markers.count_placeholders(raw_stem),
            blank_count: self.markers.count_blank_anchors(raw_stem),
        })
    }

    pub fn parse_group_question(&self, block: &str, order: usize) -> Result<ParsedQuestion, ParseError> {
        self.parse_unit(block, false, order)
    }

    pub fn parse_fill_in_blank_question(
        &self,
        block: &str,
        order: usize,
    ) -> Result<ParsedQuestion, ParseError> {
        self.parse_unit(block, true, order)
    }

    fn parse_unit(
        &self,
        block: &str,
        fill_in_blank: bool,
        order: usize,
    ) -> Result<ParsedQuestion, ParseError> {
        let structure = self.parse_group_structure(block, fill_in_blank, order)?;
        debug!(
            "Unit {order}: {} children, {} placeholders, {} blank anchors",
            structure.children.len(),
            structure.placeholder_count,
            structure.blank_count
        );
        if structure.children.is_empty() {
            warn!("Unit {order} has no child questions");
        }

        let mut parent = ParsedQuestion::parent(structure.stem, structure.media, order, fill_in_blank);
        parent.child_questions = structure.children;
        Ok(parent)
    }

    fn parse_child_question(
        &self,
        text: &str,
        fill_in_blank: bool,
        order: usize,
        parent_ref: &str,
    ) -> ParsedQuestion {
        let mut body = QuestionBody::split(self.markers, text);

        let mut placeholder_number = None;
        body.map_content_lines(|line| {
            if placeholder_number.is_none()
                && let Some((number, rest)) = self.markers.strip_child_marker(line, fill_in_blank)
            {
                placeholder_number = Some(number);
                return Some(rest);
            }
            Some(line.to_string())
        });
        let clo_tag = body.take_clo(self.markers);

        let (content, media) = process_content(self.markers, &body.content(), &self.options);
        let kind = if fill_in_blank {
            QuestionKind::FillInBlank
        } else {
            QuestionKind::Group
        };

        let mut child =
            ParsedQuestion::answerable(kind, content, body.answers(self.markers), media, order);
        child.clo_tag = clo_tag;
        child.placeholder_number = placeholder_number;
        child.parent_ref = Some(parent_ref.to_string());
        child
    }
}

fn find_marker(block: &str, marker: &'static str) -> Result<usize, ParseError> {
    block
        .find(marker)
        .ok_or(ParseError::MissingMarker { marker })
}
