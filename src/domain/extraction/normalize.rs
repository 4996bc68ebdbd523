//! Text normalization applied to every extraction result

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_BEFORE_NEWLINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+\n").expect("static regex is valid"));

/// Normalize raw extracted text.
///
/// Any whitespace run ending in a newline collapses to a single `\n`, then the
/// whole document is trimmed. Word spacing inside a line is left alone.
pub fn normalize(raw: &str) -> String {
    WHITESPACE_BEFORE_NEWLINE
        .replace_all(raw, "\n")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_removes_trailing_spaces_before_newline() {
        assert_eq!(normalize("first line   \nsecond line\t\n"), "first line\nsecond line");
    }

    #[test]
    fn test_trims_document() {
        assert_eq!(normalize("  \n\n  Jane Doe\n\n  "), "Jane Doe");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        assert_eq!(normalize("Summary\n\n\nExperience"), "Summary\nExperience");
        assert_eq!(normalize("a \n \n b"), "a\n b");
    }

    #[test]
    fn test_converts_crlf() {
        assert_eq!(normalize("line one\r\nline two\r\n"), "line one\nline two");
    }

    #[test]
    fn test_preserves_word_spacing_and_case() {
        assert_eq!(normalize("Senior  Rust   Engineer"), "Senior  Rust   Engineer");
        assert_eq!(normalize("MixedCase ÜNICODE"), "MixedCase ÜNICODE");
    }

    #[test]
    fn test_whitespace_only_becomes_empty() {
        assert_eq!(normalize(""), "");
        assert_eq!(normalize(" \t\r\n\u{a0}\n"), "");
    }

    #[test]
    fn test_clean_input_is_unchanged() {
        let clean = "Jane Doe\nRust developer\n  indented detail";
        assert_eq!(normalize(clean), clean);
    }

    #[test]
    fn test_idempotent_on_samples() {
        let samples = [
            "",
            "plain",
            "  padded  ",
            "a \n b \n c",
            "a\n\n\n  b",
            "\r\n\r\n x \r\n",
            "tab\t\t\nnext",
            "nbsp\u{a0}\nnext",
            "\n \n \n",
            "end with spaces   ",
        ];

        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_idempotent_on_all_short_strings() {
        let alphabet = [' ', '\t', '\n', '\r', 'a', '\u{a0}'];
        let mut stack: Vec<String> = vec![String::new()];

        while let Some(current) = stack.pop() {
            let once = normalize(&current);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", current);

            if current.chars().count() < 5 {
                for ch in alphabet {
                    let mut next = current.clone();
                    next.push(ch);
                    stack.push(next);
                }
            }
        }
    }

    #[test]
    fn test_output_has_no_whitespace_before_newline() {
        let out = normalize("a \t\n  \nb  \r\n c\n");
        assert!(!out.contains(" \n"));
        assert!(!out.contains("\t\n"));
        assert!(!out.contains("\n\n"));
        assert_eq!(out, "a\nb\n c");
    }
}
