use crate::text::Span;

use super::kinds::{
    BlockQuote, CodeFence, FenceSig, Heading, ListItem, ListMarker, TableRow, ThematicBreak,
};

/// The block-level meaning of one block's text.
///
/// Marker spans are UTF-16 ranges into the classified text, ready to be
/// handed to a sink for deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// Opens or closes a fenced code region.
    Fence(FenceSig),
    /// Fence delimiters wrapping code on a single line.
    CodeSnippet { open: Span, close: Span },
    Heading { level: u8, marker: Span },
    Blockquote { marker: Span },
    ListItem(ListMarker),
    HorizontalRule,
    TableRow,
    Paragraph,
}

/// Classifies blocks into [`LineClass`]es.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlockClassifier;

impl BlockClassifier {
    pub fn classify(&self, text: &str) -> LineClass {
        if let Some(sig) = CodeFence::sig(text) {
            return LineClass::Fence(sig);
        }
        if let Some((open, close)) = CodeFence::snippet(text) {
            return LineClass::CodeSnippet { open, close };
        }
        if let Some((level, marker)) = Heading::detect(text) {
            return LineClass::Heading { level, marker };
        }
        if let Some(marker) = BlockQuote::detect(text) {
            return LineClass::Blockquote { marker };
        }
        if let Some(item) = ListItem::detect(text) {
            return LineClass::ListItem(item);
        }
        if ThematicBreak::detect(text) {
            return LineClass::HorizontalRule;
        }
        if TableRow::detect(text) {
            return LineClass::TableRow;
        }
        LineClass::Paragraph
    }
}
