use crate::error::SinkError;
use crate::sink::{BlockId, RichTextSink, TextStyle};
use crate::text::Span;

/// Style carried by an [`InlineSpan`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Strikethrough,
    Link { url: String },
    Image { url: String, alt: String },
}

/// A styled range of a block's text, valid only against the text it was
/// computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InlineSpan {
    pub span: Span,
    pub style: InlineStyle,
}

/// Every mutation one marker needs, computed from a single reading of the text.
///
/// The style goes on first, while the marker characters are still present, so
/// a host rejecting it leaves the block untouched. Deletions then run back to
/// front: removing the closing marker never moves the opening one, so each
/// offset is still correct when it is used.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerEdit {
    pub target: InlineSpan,
    /// Marker runs to delete, in descending order.
    pub deletions: Vec<Span>,
}

impl MarkerEdit {
    /// `open inner close`: style `inner`, delete both markers.
    pub fn wrapped(full: Span, inner: Span, style: InlineStyle) -> Self {
        Self {
            target: InlineSpan { span: inner, style },
            deletions: vec![
                Span::new(inner.end, full.end),
                Span::new(full.start, inner.start),
            ],
        }
    }

    /// Replaces the whole match with an object anchored at its start.
    pub fn replaced(full: Span, style: InlineStyle) -> Self {
        Self {
            target: InlineSpan {
                span: Span::new(full.start, full.start),
                style,
            },
            deletions: vec![full],
        }
    }

    /// Applies the edit to `block`.
    pub fn apply<S: RichTextSink + ?Sized>(
        &self,
        sink: &mut S,
        block: BlockId,
    ) -> Result<(), SinkError> {
        debug_assert!(
            self.deletions.windows(2).all(|w| w[0].start >= w[1].end),
            "deletions must run back to front"
        );

        let span = self.target.span;
        match &self.target.style {
            InlineStyle::Bold => sink.set_inline_style(block, span, TextStyle::Bold)?,
            InlineStyle::Italic => sink.set_inline_style(block, span, TextStyle::Italic)?,
            InlineStyle::Strikethrough => {
                sink.set_inline_style(block, span, TextStyle::Strikethrough)?
            }
            InlineStyle::Link { url } => sink.set_link(block, span, url)?,
            InlineStyle::Image { url, alt } => sink.insert_image(block, span.start, url, alt)?,
        }

        for deletion in self.deletions.iter().filter(|d| !d.is_empty()) {
            sink.delete_range(block, *deletion)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::{MemoryDocument, RunStyle};

    #[test]
    fn wrapped_deletes_closing_marker_first() {
        let edit = MarkerEdit::wrapped(Span::new(2, 9), Span::new(4, 7), InlineStyle::Bold);
        assert_eq!(edit.deletions, vec![Span::new(7, 9), Span::new(2, 4)]);
    }

    #[test]
    fn apply_styles_then_strips_markers() {
        let mut doc = MemoryDocument::from_blocks(["a **bc** d"]);
        let edit = MarkerEdit::wrapped(Span::new(2, 8), Span::new(4, 6), InlineStyle::Bold);
        edit.apply(&mut doc, BlockId(0)).unwrap();

        let block = doc.block(BlockId(0)).unwrap();
        assert_eq!(block.text, "a bc d");
        assert_eq!(block.styled_text(&RunStyle::Bold), vec!["bc"]);
    }

    #[test]
    fn rejected_style_leaves_block_untouched() {
        let mut doc = MemoryDocument::from_blocks(["[x](bad url)"]);
        let edit = MarkerEdit::wrapped(
            Span::new(0, 12),
            Span::new(1, 2),
            InlineStyle::Link {
                url: "bad url".to_string(),
            },
        );

        assert!(edit.apply(&mut doc, BlockId(0)).is_err());
        let block = doc.block(BlockId(0)).unwrap();
        assert_eq!(block.text, "[x](bad url)");
        assert!(block.styles.is_empty());
    }

    #[test]
    fn replaced_anchors_object_at_match_start() {
        let mut doc = MemoryDocument::from_blocks(["see ![a](http://x/a.png)!"]);
        let edit = MarkerEdit::replaced(
            Span::new(4, 24),
            InlineStyle::Image {
                url: "http://x/a.png".to_string(),
                alt: "a".to_string(),
            },
        );
        edit.apply(&mut doc, BlockId(0)).unwrap();

        let block = doc.block(BlockId(0)).unwrap();
        assert_eq!(block.text, "see !");
        assert_eq!(block.images[0].at, 4);
    }
}
