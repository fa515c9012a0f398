use std::fmt::Write as _;

use serde::Serialize;

use super::{BlockAttributes, BlockId, BlockKind, RichTextSink, TextStyle};
use crate::error::SinkError;
use crate::text::{Span, utf16_len, utf16_to_byte};

/// Character style recorded on a [`StyledRange`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "style", rename_all = "snake_case")]
pub enum RunStyle {
    Bold,
    Italic,
    Strikethrough,
    Link { url: String },
}

impl From<TextStyle> for RunStyle {
    fn from(style: TextStyle) -> Self {
        match style {
            TextStyle::Bold => RunStyle::Bold,
            TextStyle::Italic => RunStyle::Italic,
            TextStyle::Strikethrough => RunStyle::Strikethrough,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledRange {
    pub span: Span,
    #[serde(flatten)]
    pub style: RunStyle,
}

/// An image anchored between two characters of a block.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InlineImage {
    /// UTF-16 offset the image sits at.
    pub at: usize,
    pub url: String,
    pub alt: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryBlock {
    pub text: String,
    pub kind: BlockKind,
    #[serde(skip_serializing_if = "BlockAttributes::is_empty")]
    pub attributes: BlockAttributes,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub styles: Vec<StyledRange>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<InlineImage>,
}

impl MemoryBlock {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Text covered by each range carrying `style`, in application order.
    pub fn styled_text(&self, style: &RunStyle) -> Vec<String> {
        self.styles
            .iter()
            .filter(|r| &r.style == style)
            .filter_map(|r| self.slice(r.span))
            .collect()
    }

    /// Links as `(covered text, url)` pairs.
    pub fn links(&self) -> Vec<(String, String)> {
        self.styles
            .iter()
            .filter_map(|r| match &r.style {
                RunStyle::Link { url } => Some((self.slice(r.span)?, url.clone())),
                _ => None,
            })
            .collect()
    }

    fn slice(&self, span: Span) -> Option<String> {
        let start = utf16_to_byte(&self.text, span.start)?;
        let end = utf16_to_byte(&self.text, span.end)?;
        self.text.get(start..end).map(str::to_string)
    }
}

/// A complete [`RichTextSink`] held in memory.
///
/// Links and images are validated the way a real host would: empty URLs and
/// URLs containing whitespace are rejected with [`SinkError::Rejected`].
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MemoryDocument {
    blocks: Vec<MemoryBlock>,
    #[serde(skip)]
    native_lists: bool,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a document with one paragraph per input string.
    pub fn from_blocks<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            blocks: texts.into_iter().map(MemoryBlock::new).collect(),
            native_lists: false,
        }
    }

    /// Splits Markdown source into blocks, one per line.
    ///
    /// This mirrors how word processors hold pasted Markdown: every line
    /// becomes its own paragraph, blank lines included.
    pub fn from_markdown(source: &str) -> Self {
        Self::from_blocks(source.lines())
    }

    /// Enables or disables native list support.
    pub fn with_native_lists(mut self, enabled: bool) -> Self {
        self.native_lists = enabled;
        self
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn block(&self, id: BlockId) -> Option<&MemoryBlock> {
        self.blocks.get(id.0)
    }

    pub fn memory_blocks(&self) -> &[MemoryBlock] {
        &self.blocks
    }

    /// Current text of every block.
    pub fn texts(&self) -> Vec<&str> {
        self.blocks.iter().map(|b| b.text.as_str()).collect()
    }

    /// Human-readable rendering: one line per block followed by indented lines
    /// for its styles and images.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        for block in &self.blocks {
            let _ = write!(out, "{}", kind_tag(block.kind));
            if !block.attributes.is_empty() {
                let _ = write!(out, " {}", attributes_tag(&block.attributes));
            }
            if block.text.is_empty() {
                out.push('\n');
            } else {
                let _ = writeln!(out, ": {}", block.text);
            }
            for range in &block.styles {
                let covered = block.slice(range.span).unwrap_or_default();
                let _ = match &range.style {
                    RunStyle::Link { url } => {
                        writeln!(out, "  link {} {covered:?} -> {url}", range.span)
                    }
                    other => writeln!(out, "  {} {} {covered:?}", style_tag(other), range.span),
                };
            }
            for image in &block.images {
                let _ = writeln!(out, "  image @{} {:?} <{}>", image.at, image.alt, image.url);
            }
        }
        out
    }

    fn get(&self, block: BlockId) -> Result<&MemoryBlock, SinkError> {
        self.blocks.get(block.0).ok_or(SinkError::BlockNotFound(block))
    }

    fn get_mut(&mut self, block: BlockId) -> Result<&mut MemoryBlock, SinkError> {
        self.blocks
            .get_mut(block.0)
            .ok_or(SinkError::BlockNotFound(block))
    }

    fn checked_span(&self, block: BlockId, span: Span) -> Result<(usize, usize), SinkError> {
        let text = &self.get(block)?.text;
        let out_of_bounds = || SinkError::RangeOutOfBounds {
            block,
            span,
            len: utf16_len(text),
        };
        if span.start > span.end {
            return Err(out_of_bounds());
        }
        let start = utf16_to_byte(text, span.start).ok_or_else(out_of_bounds)?;
        let end = utf16_to_byte(text, span.end).ok_or_else(out_of_bounds)?;
        Ok((start, end))
    }

    fn check_url(block: BlockId, url: &str) -> Result<(), SinkError> {
        if url.is_empty() || url.chars().any(char::is_whitespace) {
            return Err(SinkError::Rejected {
                block,
                reason: format!("invalid URL {url:?}"),
            });
        }
        Ok(())
    }
}

impl RichTextSink for MemoryDocument {
    fn blocks(&self) -> Vec<BlockId> {
        (0..self.blocks.len()).map(BlockId).collect()
    }

    fn text(&self, block: BlockId) -> Result<String, SinkError> {
        Ok(self.get(block)?.text.clone())
    }

    fn set_text(&mut self, block: BlockId, text: &str) -> Result<(), SinkError> {
        let b = self.get_mut(block)?;
        b.text = text.to_string();
        b.styles.clear();
        b.images.clear();
        Ok(())
    }

    fn delete_range(&mut self, block: BlockId, span: Span) -> Result<(), SinkError> {
        let (start, end) = self.checked_span(block, span)?;
        let b = self.get_mut(block)?;
        b.text.replace_range(start..end, "");
        b.styles = std::mem::take(&mut b.styles)
            .into_iter()
            .filter_map(|range| {
                let mapped = range.span.after_delete(span)?;
                Some(StyledRange {
                    span: mapped,
                    style: range.style,
                })
            })
            .collect();
        for image in &mut b.images {
            if image.at >= span.end {
                image.at -= span.len();
            } else if image.at > span.start {
                image.at = span.start;
            }
        }
        Ok(())
    }

    fn clear(&mut self, block: BlockId) -> Result<(), SinkError> {
        self.set_text(block, "")
    }

    fn set_block_kind(&mut self, block: BlockId, kind: BlockKind) -> Result<(), SinkError> {
        self.get_mut(block)?.kind = kind;
        Ok(())
    }

    fn set_block_attributes(
        &mut self,
        block: BlockId,
        attributes: &BlockAttributes,
    ) -> Result<(), SinkError> {
        self.get_mut(block)?.attributes.merge(attributes);
        Ok(())
    }

    fn set_inline_style(
        &mut self,
        block: BlockId,
        span: Span,
        style: TextStyle,
    ) -> Result<(), SinkError> {
        self.checked_span(block, span)?;
        self.get_mut(block)?.styles.push(StyledRange {
            span,
            style: style.into(),
        });
        Ok(())
    }

    fn set_link(&mut self, block: BlockId, span: Span, url: &str) -> Result<(), SinkError> {
        self.checked_span(block, span)?;
        Self::check_url(block, url)?;
        self.get_mut(block)?.styles.push(StyledRange {
            span,
            style: RunStyle::Link {
                url: url.to_string(),
            },
        });
        Ok(())
    }

    fn insert_image(
        &mut self,
        block: BlockId,
        at: usize,
        url: &str,
        alt: &str,
    ) -> Result<(), SinkError> {
        self.checked_span(block, Span::new(at, at))?;
        Self::check_url(block, url)?;
        self.get_mut(block)?.images.push(InlineImage {
            at,
            url: url.to_string(),
            alt: alt.to_string(),
        });
        Ok(())
    }

    fn find_occurrence(
        &self,
        block: BlockId,
        needle: &str,
        from: usize,
    ) -> Result<Option<Span>, SinkError> {
        let text = &self.get(block)?.text;
        if needle.is_empty() {
            return Ok(None);
        }
        let Some(from_byte) = utf16_to_byte(text, from) else {
            return Ok(None);
        };
        Ok(text[from_byte..].find(needle).map(|found| {
            let start = from + utf16_len(&text[from_byte..from_byte + found]);
            Span::new(start, start + utf16_len(needle))
        }))
    }

    fn supports_native_lists(&self) -> bool {
        self.native_lists
    }
}

fn kind_tag(kind: BlockKind) -> String {
    match kind {
        BlockKind::Paragraph => "paragraph".to_string(),
        BlockKind::Heading { level } => format!("heading({level})"),
        BlockKind::ListItem { ordered, level } => format!(
            "list_item({}, {level})",
            if ordered { "ordered" } else { "bullet" }
        ),
        BlockKind::Blockquote => "blockquote".to_string(),
        BlockKind::CodeFence => "code_fence".to_string(),
        BlockKind::CodeLine => "code_line".to_string(),
        BlockKind::HorizontalRule => "horizontal_rule".to_string(),
        BlockKind::TableRow => "table_row".to_string(),
    }
}

fn attributes_tag(attributes: &BlockAttributes) -> String {
    let mut parts = Vec::new();
    if let Some(indent) = attributes.indent_start {
        parts.push(format!("indent={indent}"));
    }
    if let Some(font) = &attributes.font_family {
        parts.push(format!("font={font}"));
    }
    if let Some(background) = &attributes.background_color {
        parts.push(format!("background={background}"));
    }
    format!("{{{}}}", parts.join(", "))
}

fn style_tag(style: &RunStyle) -> &'static str {
    match style {
        RunStyle::Bold => "bold",
        RunStyle::Italic => "italic",
        RunStyle::Strikethrough => "strikethrough",
        RunStyle::Link { .. } => "link",
    }
}
