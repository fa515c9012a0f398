//! # Conversion Pass
//!
//! Walks a sink's blocks once, in document order, turning Markdown syntax into
//! rich-text formatting.
//!
//! ## Per-block pipeline
//!
//! 1. **Classify** (`blocks`): decide the block's kind from its text
//! 2. **Code state** (`code_state`): fences toggle the pass in and out of code;
//!    inside code every block is verbatim monospace
//! 3. **Block transform**: strip the kind-defining prefix and set kind/attributes
//!    (lists go through `lists`)
//! 4. **Inline** (`inline`): apply and strip inline markers
//!
//! After the last block an optional sweep (`cleanup`) removes leftover `**`.
//!
//! ## Failure model
//!
//! A sink error aborts only the block it happened in. It is logged, recorded
//! as a [`Warning::BlockFailed`], and the pass moves on. The code state is
//! updated from the block's text before any sink call, so one failed fence
//! cannot desynchronise the rest of the document.

pub mod blocks;
pub mod cleanup;
pub mod code_state;
pub mod inline;
pub mod lists;
pub mod options;
pub mod report;

use std::collections::HashSet;

pub use blocks::{BlockClassifier, LineClass};
pub use code_state::{CodeBlockState, FenceTransition};
pub use lists::ListMode;
pub use options::ConvertOptions;
pub use report::{ConversionReport, Warning};

use crate::error::SinkError;
use crate::sink::{BlockAttributes, BlockId, BlockKind, RichTextSink};

/// State owned by one pass over one document.
#[derive(Debug, Default)]
struct Pass {
    code: CodeBlockState,
    in_table: bool,
    /// Blocks whose text must survive the cleanup sweep verbatim.
    verbatim: HashSet<BlockId>,
    report: ConversionReport,
}

/// Converts Markdown-authored blocks in a [`RichTextSink`] into rich text.
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
    classifier: BlockClassifier,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            options,
            classifier: BlockClassifier,
        }
    }

    /// Runs one full pass over every block of `sink`.
    ///
    /// Never fails as a whole; per-block failures and other conditions are
    /// reported in the returned [`ConversionReport`].
    pub fn convert<S: RichTextSink + ?Sized>(&self, sink: &mut S) -> ConversionReport {
        let blocks = sink.blocks();
        let list_mode = ListMode::resolve(&self.options, sink);
        log::debug!("converting {} blocks, lists: {list_mode:?}", blocks.len());

        let mut pass = Pass {
            report: ConversionReport {
                blocks: blocks.len(),
                ..ConversionReport::default()
            },
            ..Pass::default()
        };

        for &block in &blocks {
            if let Err(err) = self.convert_block(sink, block, list_mode, &mut pass) {
                log::warn!("block {block} failed: {err}");
                pass.report.warnings.push(Warning::BlockFailed {
                    block,
                    message: err.to_string(),
                });
            }
        }

        if let Some(opened_at) = std::mem::take(&mut pass.code).finish() {
            log::warn!("code fence opened at block {opened_at} is never closed");
            pass.report.warnings.push(Warning::UnterminatedFence { opened_at });
        }

        if self.options.cleanup_pass {
            self.cleanup(sink, &blocks, &mut pass);
        }

        pass.report
    }

    fn convert_block<S: RichTextSink + ?Sized>(
        &self,
        sink: &mut S,
        block: BlockId,
        list_mode: ListMode,
        pass: &mut Pass,
    ) -> Result<(), SinkError> {
        let text = sink.text(block)?;
        let class = self.classifier.classify(&text);

        let is_table = matches!(class, LineClass::TableRow) && !pass.code.is_in_code();
        let starts_table = is_table && !pass.in_table;
        pass.in_table = is_table;

        match class {
            LineClass::Fence(sig) => {
                match pass.code.toggle(block, sig.language.clone()) {
                    FenceTransition::Opened => log::debug!(
                        "block {block}: code fence opened ({})",
                        sig.language.as_deref().unwrap_or("no language")
                    ),
                    FenceTransition::Closed => log::debug!("block {block}: code fence closed"),
                }
                sink.set_block_kind(block, BlockKind::CodeFence)?;
                sink.clear(block)
            }
            _ if pass.code.is_in_code() => {
                pass.verbatim.insert(block);
                sink.set_block_kind(block, BlockKind::CodeLine)?;
                sink.set_block_attributes(block, &self.options.code_attributes())
            }
            LineClass::CodeSnippet { open, close } => {
                pass.verbatim.insert(block);
                sink.delete_range(block, close)?;
                sink.delete_range(block, open)?;
                sink.set_block_kind(block, BlockKind::CodeLine)?;
                sink.set_block_attributes(block, &self.options.code_attributes())
            }
            LineClass::Heading { level, marker } => {
                log::debug!("block {block}: heading level {level}");
                sink.delete_range(block, marker)?;
                sink.set_block_kind(block, BlockKind::Heading { level })?;
                self.format_inline(sink, block, pass)
            }
            LineClass::Blockquote { marker } => {
                sink.delete_range(block, marker)?;
                sink.set_block_kind(block, BlockKind::Blockquote)?;
                sink.set_block_attributes(
                    block,
                    &BlockAttributes::indent(self.options.blockquote_indent),
                )?;
                self.format_inline(sink, block, pass)
            }
            LineClass::ListItem(item) => {
                log::debug!("block {block}: list item {item:?}");
                lists::normalize_list_item(sink, block, item, list_mode, &self.options)?;
                self.format_inline(sink, block, pass)
            }
            LineClass::HorizontalRule => {
                sink.clear(block)?;
                sink.set_block_kind(block, BlockKind::HorizontalRule)
            }
            LineClass::TableRow => {
                pass.verbatim.insert(block);
                if starts_table {
                    log::warn!("block {block}: tables are not converted");
                    pass.report.warnings.push(Warning::UnsupportedTable { block });
                }
                sink.set_block_kind(block, BlockKind::TableRow)
            }
            LineClass::Paragraph => self.format_inline(sink, block, pass),
        }
    }

    fn format_inline<S: RichTextSink + ?Sized>(
        &self,
        sink: &mut S,
        block: BlockId,
        pass: &mut Pass,
    ) -> Result<(), SinkError> {
        pass.report.markers_applied += inline::format_inline(sink, block)?;
        Ok(())
    }

    fn cleanup<S: RichTextSink + ?Sized>(
        &self,
        sink: &mut S,
        blocks: &[BlockId],
        pass: &mut Pass,
    ) {
        for &block in blocks {
            if pass.verbatim.contains(&block) {
                continue;
            }
            match cleanup::sweep_block(sink, block) {
                Ok(0) => {}
                Ok(count) => {
                    log::warn!("cleanup removed {count} leftover marker(s) from block {block}");
                    pass.report
                        .warnings
                        .push(Warning::CleanupRemovedMarkers { block, count });
                }
                Err(err) => {
                    log::warn!("cleanup of block {block} failed: {err}");
                    pass.report.warnings.push(Warning::BlockFailed {
                        block,
                        message: err.to_string(),
                    });
                }
            }
        }
    }
}
