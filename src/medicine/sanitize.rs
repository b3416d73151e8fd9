//! Cleanup of provider output before display.

use std::sync::OnceLock;

use regex::Regex;

/// Markdown bold marker.
const BOLD_MARKER: &str = "**";

/// A UTF-8 bullet (U+2022) that went through a Windows-1252 decode.
const MOJIBAKE_BULLET: &str = "\u{e2}\u{20ac}\u{a2}";

/// Two or more consecutive newlines.
const BLANK_LINE_RUN: &str = r"\n{2,}";

/// Normalises provider text: no bold markers, no blank-line runs, no broken bullets.
#[derive(Clone, Debug)]
pub struct ResponseSanitizer {
    blank_lines: Regex,
}

impl ResponseSanitizer {
    /// Compile the sanitizer's patterns.
    ///
    /// # Errors
    /// Returns an error if a pattern fails to compile.
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            blank_lines: Regex::new(BLANK_LINE_RUN)?,
        })
    }

    /// Clean `raw`. Absent or empty input yields an empty string.
    #[must_use]
    pub fn sanitize(&self, raw: Option<&str>) -> String {
        let Some(raw) = raw.filter(|r| !r.is_empty()) else {
            return String::new();
        };

        let text = raw.replace(BOLD_MARKER, "");
        let text = self.blank_lines.replace_all(&text, "\n");
        let text = text.replace(MOJIBAKE_BULLET, "-");
        text.trim().to_string()
    }
}

impl Default for ResponseSanitizer {
    /// Creates a sanitizer with the built-in patterns.
    ///
    /// # Panics
    /// Panics if the built-in patterns are invalid (should never happen).
    #[allow(clippy::expect_used)]
    fn default() -> Self {
        Self::new().expect("built-in sanitizer patterns should be valid")
    }
}

/// Clean `raw` with a process-wide sanitizer.
#[must_use]
pub fn sanitize(raw: Option<&str>) -> String {
    static SANITIZER: OnceLock<ResponseSanitizer> = OnceLock::new();
    SANITIZER.get_or_init(ResponseSanitizer::default).sanitize(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_and_absent_input() {
        assert_eq!(sanitize(Some("")), "");
        assert_eq!(sanitize(None), "");
    }

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(sanitize(Some("  hello  ")), "hello");
        assert_eq!(sanitize(Some("\n\n  \n")), "");
    }

    #[test]
    fn test_removes_bold_markers() {
        let out = sanitize(Some("**Composition**: **Paracetamol** 500mg"));
        assert_eq!(out, "Composition: Paracetamol 500mg");
        assert!(!sanitize(Some("***a*** ****b*****")).contains(BOLD_MARKER));
    }

    #[test]
    fn test_single_asterisks_survive() {
        assert_eq!(sanitize(Some("* item\n* other")), "* item\n* other");
    }

    #[test]
    fn test_collapses_blank_line_runs() {
        let out = sanitize(Some("Uses\n\nFever\n\n\n\nPain\nHeadache"));
        assert_eq!(out, "Uses\nFever\nPain\nHeadache");
        assert!(!out.contains("\n\n"));
    }

    #[test]
    fn test_whitespace_only_lines_are_not_collapsed() {
        assert_eq!(sanitize(Some("a\n \nb")), "a\n \nb");
    }

    #[test]
    fn test_replaces_mojibake_bullet_only() {
        assert_eq!(sanitize(Some("â€¢ one\nâ€¢ two")), "- one\n- two");
        assert_eq!(sanitize(Some("• real bullet")), "• real bullet");
    }

    #[test]
    fn test_bullet_split_by_bold_marker_is_repaired() {
        assert_eq!(sanitize(Some("â€**¢ dose")), "- dose");
    }

    #[test]
    fn test_end_to_end_cleanup() {
        let raw = "**Uses**\n\n\nRelieves pain\nâ€¢ take with food";
        assert_eq!(sanitize(Some(raw)), "Uses\nRelieves pain\n- take with food");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "  hello  ",
            "**Uses**\n\n\nRelieves pain\nâ€¢ take with food",
            "*\n\n*",
            "***\n\n\n***",
            "â€**¢ dose\n\n\n\n**x**",
            "\n\n**\n\n",
        ];
        for raw in samples {
            let once = sanitize(Some(raw));
            assert_eq!(sanitize(Some(&once)), once, "not idempotent for {raw:?}");
        }
    }

    #[test]
    fn test_instance_matches_shared_helper() {
        let sanitizer = ResponseSanitizer::new().unwrap();
        let raw = "**Side effects**\n\nNausea";
        assert_eq!(sanitizer.sanitize(Some(raw)), sanitize(Some(raw)));
    }
}
