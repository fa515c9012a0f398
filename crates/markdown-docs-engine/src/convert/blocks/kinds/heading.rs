use crate::patterns::patterns;
use crate::text::Span;

/// ATX heading with owned delimiter knowledge.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: u8 = 5;

    /// Detects a heading opener.
    ///
    /// Returns the level and the span of the `#… ` prefix, covering exactly the
    /// matched run so that `#` characters in the body are never touched.
    pub fn detect(text: &str) -> Option<(u8, Span)> {
        let caps = patterns().heading.captures(text)?;
        let level = caps["marker"].len();
        // Prefix is ASCII, so byte and UTF-16 lengths agree.
        Some((level as u8, Span::new(0, caps[0].len())))
    }
}
