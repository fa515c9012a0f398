use crate::patterns::patterns;
use crate::text::{Span, utf16_len};

/// A fence delimiter line, with the language tag if one was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FenceSig {
    pub language: Option<String>,
}

/// Fenced code type with owned delimiter constant.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    /// Recognises a fence delimiter. Surrounding whitespace is ignored.
    pub fn sig(text: &str) -> Option<FenceSig> {
        let caps = patterns().fence.captures(text.trim())?;
        let language = caps
            .name("language")
            .map(|m| m.as_str())
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        Some(FenceSig { language })
    }

    /// Recognises a one-line snippet such as ```` ```let x = 1;``` ````.
    ///
    /// Returns the spans of the opening and closing delimiters.
    pub fn snippet(text: &str) -> Option<(Span, Span)> {
        if !patterns().code_snippet.is_match(text) {
            return None;
        }
        let len = utf16_len(text);
        let width = Self::BACKTICKS.len();
        Some((Span::new(0, width), Span::new(len - width, len)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_bare_fence() {
        assert_eq!(CodeFence::sig("```"), Some(FenceSig { language: None }));
    }

    #[test]
    fn detect_fence_with_language() {
        assert_eq!(
            CodeFence::sig("  ```rust  "),
            Some(FenceSig {
                language: Some("rust".to_string())
            })
        );
    }

    #[test]
    fn no_fence() {
        assert_eq!(CodeFence::sig("hello"), None);
        assert_eq!(CodeFence::sig("``"), None);
    }

    #[test]
    fn snippet_is_not_a_fence() {
        assert_eq!(CodeFence::sig("```x = 1```"), None);
        assert_eq!(
            CodeFence::snippet("```x = 1```"),
            Some((Span::new(0, 3), Span::new(8, 11)))
        );
    }

    #[test]
    fn snippet_needs_content() {
        assert_eq!(CodeFence::snippet("``````"), None);
    }

    #[test]
    fn snippet_offsets_are_utf16() {
        assert_eq!(
            CodeFence::snippet("```😀```"),
            Some((Span::new(0, 3), Span::new(5, 8)))
        );
    }
}
