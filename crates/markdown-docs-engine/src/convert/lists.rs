//! # List Normalization
//!
//! Many rich-text hosts cannot turn an arbitrary paragraph into a bullet or
//! numbered list item; they only grow lists that already exist. When the sink
//! reports [`RichTextSink::supports_native_lists`] and the options allow it,
//! list items become real list items. Otherwise they are approximated: the
//! marker is stripped, nested items are indented, and an item wrapped
//! entirely in `**` is emitted as bold text. The approximation loses the
//! bullet glyph and numbering and is only used when it has to be.

use super::blocks::ListMarker;
use super::inline::{InlineStyle, MarkerEdit};
use super::options::ConvertOptions;
use crate::error::SinkError;
use crate::patterns::patterns;
use crate::sink::{BlockAttributes, BlockId, BlockKind, RichTextSink};
use crate::text::byte_range_to_span;

/// How list items reach the sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMode {
    /// The sink turns the block into a real list item.
    Native,
    /// Marker stripped, list semantics approximated with plain formatting.
    Approximate,
}

impl ListMode {
    pub fn resolve<S: RichTextSink + ?Sized>(options: &ConvertOptions, sink: &S) -> Self {
        if options.prefer_native_lists && sink.supports_native_lists() {
            ListMode::Native
        } else {
            ListMode::Approximate
        }
    }
}

/// Strips the list marker from `block` and records its list semantics.
///
/// Inline markers other than a whole-item bold are left for the inline
/// formatter.
pub fn normalize_list_item<S: RichTextSink + ?Sized>(
    sink: &mut S,
    block: BlockId,
    item: ListMarker,
    mode: ListMode,
    options: &ConvertOptions,
) -> Result<(), SinkError> {
    sink.delete_range(block, item.marker)?;

    match mode {
        ListMode::Native => sink.set_block_kind(
            block,
            BlockKind::ListItem {
                ordered: item.ordered,
                level: item.level,
            },
        ),
        ListMode::Approximate => {
            if item.level > 0 {
                let indent = options.list_indent * f32::from(item.level);
                sink.set_block_attributes(block, &BlockAttributes::indent(indent))?;
            }
            promote_whole_bold(sink, block)?;
            Ok(())
        }
    }
}

/// Bolds an item whose entire text is one `**…**` run.
fn promote_whole_bold<S: RichTextSink + ?Sized>(
    sink: &mut S,
    block: BlockId,
) -> Result<bool, SinkError> {
    let text = sink.text(block)?;
    let Some(caps) = patterns().whole_bold.captures(&text) else {
        return Ok(false);
    };
    let Some(inner) = caps.name("inner") else {
        return Ok(false);
    };
    if inner.as_str().contains("**") {
        // Two separate bold runs, not one wrapping the whole item.
        return Ok(false);
    }

    MarkerEdit::wrapped(
        byte_range_to_span(&text, 0..text.len()),
        byte_range_to_span(&text, inner.range()),
        InlineStyle::Bold,
    )
    .apply(sink, block)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::blocks::kinds::ListItem;
    use crate::sink::{MemoryDocument, RunStyle};

    fn normalize(text: &str, native: bool) -> MemoryDocument {
        let mut doc = MemoryDocument::from_blocks([text]).with_native_lists(native);
        let options = ConvertOptions::default();
        let mode = ListMode::resolve(&options, &doc);
        let item = ListItem::detect(text).unwrap();
        normalize_list_item(&mut doc, BlockId(0), item, mode, &options).unwrap();
        doc
    }

    #[test]
    fn mode_needs_both_preference_and_capability() {
        let native = MemoryDocument::new().with_native_lists(true);
        let plain = MemoryDocument::new();
        let mut options = ConvertOptions::default();

        assert_eq!(ListMode::resolve(&options, &native), ListMode::Native);
        assert_eq!(ListMode::resolve(&options, &plain), ListMode::Approximate);

        options.prefer_native_lists = false;
        assert_eq!(ListMode::resolve(&options, &native), ListMode::Approximate);
    }

    #[test]
    fn native_mode_sets_list_kind() {
        let doc = normalize("  2. second", true);
        let block = doc.block(BlockId(0)).unwrap();

        assert_eq!(block.text, "second");
        assert_eq!(
            block.kind,
            BlockKind::ListItem {
                ordered: true,
                level: 1
            }
        );
    }

    #[test]
    fn approximate_mode_keeps_paragraph_and_plain_text() {
        let doc = normalize("- plain item", false);
        let block = doc.block(BlockId(0)).unwrap();

        assert_eq!(block.text, "plain item");
        assert_eq!(block.kind, BlockKind::Paragraph);
        assert!(block.styles.is_empty());
        assert!(block.attributes.is_empty());
    }

    #[test]
    fn approximate_mode_bolds_wholly_bold_item() {
        let doc = normalize("* **Important**", false);
        let block = doc.block(BlockId(0)).unwrap();

        assert_eq!(block.text, "Important");
        assert_eq!(block.styled_text(&RunStyle::Bold), vec!["Important"]);
    }

    #[test]
    fn approximate_mode_leaves_partial_bold_to_formatter() {
        let doc = normalize("- **a** and **b**", false);
        let block = doc.block(BlockId(0)).unwrap();

        assert_eq!(block.text, "**a** and **b**");
        assert!(block.styles.is_empty());
    }

    #[test]
    fn approximate_mode_indents_nested_items() {
        let doc = normalize("    - deep", false);
        let block = doc.block(BlockId(0)).unwrap();

        assert_eq!(block.text, "deep");
        assert_eq!(block.attributes.indent_start, Some(72.0));
    }
}
