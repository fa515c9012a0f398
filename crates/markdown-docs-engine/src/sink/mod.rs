//! # Rich Text Sink
//!
//! The conversion engine never owns the destination document. Everything it
//! does to a block goes through [`RichTextSink`], which a host implements over
//! its own paragraph/run/attachment model.
//!
//! All offsets crossing this boundary are UTF-16 code units (see
//! [`crate::text`]). A sink must keep already-applied styles attached to the
//! same characters when text is deleted in front of them; the engine relies on
//! that when it strips markers after styling.
//!
//! [`MemoryDocument`] is the in-crate implementation used by tests and by the
//! command line host.

pub mod memory;

use serde::{Deserialize, Serialize};

use crate::error::SinkError;
use crate::text::Span;

pub use memory::{InlineImage, MemoryBlock, MemoryDocument, RunStyle, StyledRange};

/// Handle for one paragraph-equivalent block of the destination document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct BlockId(pub usize);

impl std::fmt::Display for BlockId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Block-level kind as understood by the destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BlockKind {
    #[default]
    Paragraph,
    /// Heading with level `1..=5`.
    Heading { level: u8 },
    /// Native list item. Only emitted when the sink supports native lists.
    ListItem { ordered: bool, level: u8 },
    Blockquote,
    /// A fence delimiter line. Always cleared.
    CodeFence,
    /// Verbatim content inside a fenced code region.
    CodeLine,
    /// An emptied separator block.
    HorizontalRule,
    /// A table row left verbatim; tables are not converted.
    TableRow,
}

/// Paragraph-wide attributes. `None` fields are left untouched when applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockAttributes {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub indent_start: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub font_family: Option<String>,
}

impl BlockAttributes {
    pub fn indent(points: f32) -> Self {
        Self {
            indent_start: Some(points),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.indent_start.is_none() && self.background_color.is_none() && self.font_family.is_none()
    }

    /// Overlays every `Some` field of `other` onto `self`.
    pub fn merge(&mut self, other: &BlockAttributes) {
        if other.indent_start.is_some() {
            self.indent_start = other.indent_start;
        }
        if other.background_color.is_some() {
            self.background_color.clone_from(&other.background_color);
        }
        if other.font_family.is_some() {
            self.font_family.clone_from(&other.font_family);
        }
    }
}

/// Character styles a sink can apply to a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TextStyle {
    Bold,
    Italic,
    Strikethrough,
}

/// Destination of the formatting operations.
pub trait RichTextSink {
    /// All blocks in document order.
    fn blocks(&self) -> Vec<BlockId>;

    fn text(&self, block: BlockId) -> Result<String, SinkError>;

    /// Replaces the whole text of a block, dropping its inline styles and images.
    fn set_text(&mut self, block: BlockId, text: &str) -> Result<(), SinkError>;

    /// Deletes `span` from the block's text. Styles on surviving characters stay
    /// attached to them.
    fn delete_range(&mut self, block: BlockId, span: Span) -> Result<(), SinkError>;

    /// Removes all content from a block. Kind and attributes are kept.
    fn clear(&mut self, block: BlockId) -> Result<(), SinkError>;

    fn set_block_kind(&mut self, block: BlockId, kind: BlockKind) -> Result<(), SinkError>;

    fn set_block_attributes(
        &mut self,
        block: BlockId,
        attributes: &BlockAttributes,
    ) -> Result<(), SinkError>;

    fn set_inline_style(
        &mut self,
        block: BlockId,
        span: Span,
        style: TextStyle,
    ) -> Result<(), SinkError>;

    fn set_link(&mut self, block: BlockId, span: Span, url: &str) -> Result<(), SinkError>;

    /// Embeds an image at offset `at`, carrying `alt` as its accessible description.
    fn insert_image(
        &mut self,
        block: BlockId,
        at: usize,
        url: &str,
        alt: &str,
    ) -> Result<(), SinkError>;

    /// Finds the first occurrence of the literal `needle` at or after `from`.
    fn find_occurrence(
        &self,
        block: BlockId,
        needle: &str,
        from: usize,
    ) -> Result<Option<Span>, SinkError>;

    /// Whether the host can turn a block into a real bullet/numbered list item.
    fn supports_native_lists(&self) -> bool {
        false
    }
}
