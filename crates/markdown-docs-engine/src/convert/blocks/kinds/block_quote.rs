use crate::patterns::patterns;
use crate::text::Span;

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix, including its mandatory space.
    pub const PREFIX: &'static str = "> ";

    /// Default left indent applied to quoted blocks, in layout points.
    pub const DEFAULT_INDENT: f32 = 72.0;

    /// Span of the `> ` prefix if the block is a quote.
    pub fn detect(text: &str) -> Option<Span> {
        patterns()
            .blockquote
            .is_match(text)
            .then(|| Span::new(0, Self::PREFIX.len()))
    }
}
