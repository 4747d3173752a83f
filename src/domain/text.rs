//! Text cleanup shared by the PDF extractor and job-post intake.

/// Collapse every run of whitespace or control characters into one space and trim both ends.
///
/// Bounds prompt size and strips layout artifacts left by PDF extraction.
/// Applying it twice gives the same result as applying it once.
pub fn normalize_whitespace(text: &str) -> String {
    text.split(|c: char| c.is_whitespace() || c.is_control())
        .filter(|token| !token.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_mixed_whitespace() {
        assert_eq!(
            normalize_whitespace("  Hello \t\n world\r\n\n  again "),
            "Hello world again"
        );
    }

    #[test]
    fn test_strips_control_characters() {
        assert_eq!(normalize_whitespace("a\u{0}b\u{7}\u{c}c"), "a b c");
    }

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_keeps_non_latin_text() {
        assert_eq!(
            normalize_whitespace("ソフトウェア\u{3000}エンジニア\n経験 5年"),
            "ソフトウェア エンジニア 経験 5年"
        );
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            "  lead  and trail  ",
            "tabs\tand\nnewlines\r\n",
            "nbsp\u{a0}and\u{2003}em space",
            "ctrl\u{1}\u{1f}chars",
        ];
        for sample in samples {
            let once = normalize_whitespace(sample);
            assert_eq!(normalize_whitespace(&once), once, "input: {:?}", sample);
        }
    }
}
