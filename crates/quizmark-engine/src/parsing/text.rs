use std::sync::OnceLock;

use regex::Regex;

static BLANK_RUNS: OnceLock<Regex> = OnceLock::new();

/// Normalizes line terminators to `\n`, collapses runs of three or more
/// newlines into one blank line, and trims the whole document.
pub fn clean_text(text: &str) -> String {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    let blank_runs =
        BLANK_RUNS.get_or_init(|| Regex::new(r"\n{3,}").expect("Invalid blank-run regex"));
    blank_runs
        .replace_all(&normalized, "\n\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", "")]
    #[case("  \n\n ", "")]
    #[case("a\r\nb\rc", "a\nb\nc")]
    #[case("a\n\n\n\n\nb", "a\n\nb")]
    #[case("a\r\n\r\n\r\nb", "a\n\nb")]
    #[case("a\n\nb", "a\n\nb")]
    #[case("\n  (DON)\nQ  \n", "(DON)\nQ")]
    fn cleans(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(clean_text(input), expected);
    }

    #[test]
    fn cleaning_is_stable() {
        let once = clean_text("x\r\n\r\n\r\n\r\ny\n");
        assert_eq!(clean_text(&once), once);
    }
}
