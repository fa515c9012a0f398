use regex::{Captures, Regex};

use super::edit::{InlineStyle, MarkerEdit};
use crate::patterns::patterns;
use crate::text::byte_range_to_span;

/// One inline marker grammar and how to turn its matches into edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    Bold,
    Italic,
    Strikethrough,
    Image,
    Link,
}

impl InlineRule {
    /// Scan order.
    ///
    /// Bold runs before italic so `**_x_**` resolves both. Image runs before
    /// link because `![alt](url)` contains a complete `[alt](url)`.
    pub const ORDER: [InlineRule; 5] = [
        InlineRule::Bold,
        InlineRule::Italic,
        InlineRule::Strikethrough,
        InlineRule::Image,
        InlineRule::Link,
    ];

    fn pattern(self) -> &'static Regex {
        let p = patterns();
        match self {
            InlineRule::Bold => &p.bold,
            InlineRule::Italic => &p.italic,
            InlineRule::Strikethrough => &p.strikethrough,
            InlineRule::Image => &p.image,
            InlineRule::Link => &p.link,
        }
    }

    /// Plans the first applicable match in `text`.
    ///
    /// Malformed matches are passed over without mutation. The search resumes
    /// one byte after the skipped match's start, since its closing marker may
    /// open the next real match. Every marker starts with an ASCII byte.
    pub fn next_edit(self, text: &str) -> Option<MarkerEdit> {
        let pattern = self.pattern();
        let mut from = 0;
        while let Some(caps) = pattern.captures_at(text, from) {
            if let Some(edit) = self.plan(text, &caps) {
                return Some(edit);
            }
            from = caps.get(0)?.start() + 1;
        }
        None
    }

    fn plan(self, text: &str, caps: &Captures<'_>) -> Option<MarkerEdit> {
        let full = caps.get(0)?;
        let full_span = byte_range_to_span(text, full.range());

        match self {
            InlineRule::Bold | InlineRule::Italic | InlineRule::Strikethrough => {
                if self == InlineRule::Italic && is_intraword(text, full.range()) {
                    log::trace!("skipping intraword underscores {:?}", full.as_str());
                    return None;
                }
                let inner = caps.name("inner")?;
                let style = match self {
                    InlineRule::Bold => InlineStyle::Bold,
                    InlineRule::Italic => InlineStyle::Italic,
                    _ => InlineStyle::Strikethrough,
                };
                Some(MarkerEdit::wrapped(
                    full_span,
                    byte_range_to_span(text, inner.range()),
                    style,
                ))
            }
            InlineRule::Image => {
                let alt = caps.name("alt")?.as_str();
                let url = caps.name("url")?.as_str();
                if alt.is_empty() || url.is_empty() {
                    log::trace!("skipping image without alt text or url {:?}", full.as_str());
                    return None;
                }
                Some(MarkerEdit::replaced(
                    full_span,
                    InlineStyle::Image {
                        url: url.to_string(),
                        alt: alt.to_string(),
                    },
                ))
            }
            InlineRule::Link => {
                if text[..full.start()].ends_with('!') {
                    // Image syntax is never a link, even when the image was skipped.
                    return None;
                }
                let label = caps.name("text")?;
                let url = caps.name("url")?.as_str();
                Some(MarkerEdit::wrapped(
                    full_span,
                    byte_range_to_span(text, label.range()),
                    InlineStyle::Link {
                        url: url.to_string(),
                    },
                ))
            }
        }
    }
}

/// True when the match is glued to letters or digits on either side,
/// as in `snake_case_name`.
fn is_intraword(text: &str, range: std::ops::Range<usize>) -> bool {
    let before = text[..range.start].chars().next_back();
    let after = text[range.end..].chars().next();
    before.is_some_and(char::is_alphanumeric) || after.is_some_and(char::is_alphanumeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Span;
    use rstest::rstest;

    #[rstest]
    #[case(InlineRule::Bold, "a **b** c", Span::new(2, 7), Span::new(4, 5))]
    #[case(InlineRule::Italic, "a _b_ c", Span::new(2, 5), Span::new(3, 4))]
    #[case(InlineRule::Strikethrough, "~~gone~~", Span::new(0, 8), Span::new(2, 6))]
    #[case(InlineRule::Link, "go [here](http://x)", Span::new(3, 19), Span::new(4, 8))]
    fn wrapped_rules_target_inner_text(
        #[case] rule: InlineRule,
        #[case] text: &str,
        #[case] full: Span,
        #[case] inner: Span,
    ) {
        let edit = rule.next_edit(text).unwrap();
        assert_eq!(edit.target.span, inner);
        assert_eq!(
            edit.deletions,
            vec![Span::new(inner.end, full.end), Span::new(full.start, inner.start)]
        );
    }

    #[test]
    fn image_with_empty_alt_is_skipped() {
        assert_eq!(InlineRule::Image.next_edit("![](http://x/y.png)"), None);
    }

    #[test]
    fn image_with_empty_url_is_skipped() {
        assert_eq!(InlineRule::Image.next_edit("![alt]()"), None);
    }

    #[test]
    fn skipped_image_does_not_hide_a_later_one() {
        let edit = InlineRule::Image
            .next_edit("![](http://x/a.png) ![b](http://x/b.png)")
            .unwrap();
        assert_eq!(
            edit.target.style,
            InlineStyle::Image {
                url: "http://x/b.png".to_string(),
                alt: "b".to_string(),
            }
        );
        assert_eq!(edit.deletions, vec![Span::new(20, 40)]);
    }

    #[test]
    fn link_rule_ignores_image_syntax() {
        assert_eq!(InlineRule::Link.next_edit("![alt](http://x/y.png)"), None);
    }

    #[rstest]
    #[case("snake_case and _x_", Span::new(16, 17))]
    #[case("my_var is _important_", Span::new(11, 20))]
    #[case("a_b _c_d _e_", Span::new(10, 11))]
    fn intraword_underscore_does_not_hide_a_later_italic(
        #[case] text: &str,
        #[case] inner: Span,
    ) {
        let edit = InlineRule::Italic.next_edit(text).unwrap();
        assert_eq!(edit.target.span, inner);
    }

    #[test]
    fn intraword_underscores_are_not_italic() {
        assert_eq!(InlineRule::Italic.next_edit("call snake_case_name now"), None);
    }

    #[test]
    fn italic_inside_bold_markers_is_found() {
        let edit = InlineRule::Italic.next_edit("_both_").unwrap();
        assert_eq!(edit.target.span, Span::new(1, 5));
    }

    #[test]
    fn offsets_are_utf16() {
        let edit = InlineRule::Bold.next_edit("😀 **é**").unwrap();
        assert_eq!(edit.target.span, Span::new(5, 6));
    }
}
