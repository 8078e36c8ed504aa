//! Fixture tests for the parsing module.
//!
//! Each fixture is a question-bank document (`.txt`) next to the expected
//! outline of its parse result (`.outline`), both in `fixtures/`.

mod normalize;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::models::{MediaProcessingOptions, ParseStatistics, QuestionKind};
use crate::parsing::{QuestionParser, parse_questions_from_text};

// Fixture-based outline tests

#[rstest]
#[case::single_questions("single_questions", MediaProcessingOptions::default())]
#[case::group_unit("group_unit", MediaProcessingOptions::default())]
#[case::fill_in_blank("fill_in_blank", MediaProcessingOptions::default())]
#[case::mixed_document("mixed_document", MediaProcessingOptions::default())]
#[case::media_mentions("media_mentions", MediaProcessingOptions::pre_upload())]
fn fixture(#[case] name: &str, #[case] options: MediaProcessingOptions) {
    assert_fixture(name, options);
}

fn assert_fixture(name: &str, options: MediaProcessingOptions) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(format!("{fixtures_dir}/{name}.txt")).unwrap();
    let expected = std::fs::read_to_string(format!("{fixtures_dir}/{name}.outline")).unwrap();

    let result = QuestionParser::new(options).parse(&text);
    invariants::check(&result);

    assert_eq!(normalize::outline(&result).trim_end(), expected.trim_end());
}

// Invariant tests

#[test]
fn empty_document_is_an_empty_result() {
    for text in ["", "   ", "\r\n\r\n"] {
        let result = parse_questions_from_text(text);
        assert!(result.questions.is_empty());
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
        assert_eq!(result.statistics, ParseStatistics::default());
    }
}

#[test]
fn crlf_documents_parse_like_lf_documents() {
    let lf = "(DON)\nQ\nA. <u>a</u>\nB. b\n\n\n\n(DON)\nR\nA. <b>c</b>";
    let crlf = lf.replace('\n', "\r\n");
    assert_eq!(parse_questions_from_text(lf), parse_questions_from_text(&crlf));
}

#[test]
fn questions_keep_block_positions() {
    let text = "(DON)\nQ1\nA. <u>a</u>\n(DON)\nQ2\nA. <u>a</u>\n(NHOM)\n[<sg>]\nS\n[<egc>]\nc\nA. <u>a</u>\n[</sg>]";
    let result = parse_questions_from_text(text);
    invariants::check(&result);
    let orders: Vec<usize> = result.questions.iter().map(|q| q.order).collect();
    assert_eq!(orders, vec![1, 2, 3]);
    assert_eq!(result.questions[2].kind, QuestionKind::Parent);
}

#[test]
fn block_without_type_marker_is_reported() {
    let result = parse_questions_from_text("Just a heading\n\n(DON)\nQ\nA. <u>a</u>");
    assert_eq!(result.questions.len(), 1);
    assert_eq!(result.questions[0].order, 2);
    assert_eq!(result.errors.len(), 1);
    assert!(result.errors[0].starts_with("Error parsing question block 1:"));
}

#[test]
fn parse_is_deterministic() {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let text = std::fs::read_to_string(format!("{fixtures_dir}/mixed_document.txt")).unwrap();
    let parser = QuestionParser::default();
    assert_eq!(parser.parse(&text), parser.parse(&text));
}

#[test]
fn parser_validates_blank_anchors_against_children() {
    let text = "(DIENKHUYET)\n[<sg>]\nI {<1>}_____ a student. She {<2>}_____ a nurse.\n[<egc>]\n\
(DIENKHUYET – 1)\nA. <u>am</u>\nB. is\n[</sg>]";
    let result = parse_questions_from_text(text);
    assert!(result.errors.is_empty());
    assert_eq!(
        result.warnings,
        vec!["Question 1: stem has 2 blanks but only 1 child questions"]
    );
}
