//! # Inline Formatting
//!
//! Applies bold, italic, strikethrough, image and link markers to one block and
//! strips the marker characters.
//!
//! ## Search, mutate, re-search
//!
//! Deleting marker characters moves every later offset in the block, so the
//! formatter never collects matches up front. For each rule in
//! [`InlineRule::ORDER`] it reads the block's current text, plans the first
//! applicable match as a [`MarkerEdit`], applies it, and searches again from
//! the start of the shrunken text. A rule is finished when no applicable match
//! remains.
//!
//! ## Modules
//!
//! - **`rules`**: `InlineRule`, the ordered marker grammars
//! - **`edit`**: `MarkerEdit`, the per-marker mutation plan

pub mod edit;
pub mod rules;

pub use edit::{InlineSpan, InlineStyle, MarkerEdit};
pub use rules::InlineRule;

use crate::error::SinkError;
use crate::sink::{BlockId, RichTextSink};

/// Formats every inline marker in `block`. Returns the number of markers applied.
///
/// On error, the markers applied before the failure stay applied and the
/// block's text and styles remain consistent with each other.
pub fn format_inline<S: RichTextSink + ?Sized>(
    sink: &mut S,
    block: BlockId,
) -> Result<usize, SinkError> {
    let mut applied = 0;

    for rule in InlineRule::ORDER {
        let mut previous_len: Option<usize> = None;
        loop {
            let text = sink.text(block)?;
            if previous_len.is_some_and(|len| text.len() >= len) {
                log::warn!("{rule:?} markers in block {block} were not removed by the sink");
                break;
            }
            let Some(edit) = rule.next_edit(&text) else {
                break;
            };
            log::trace!("block {block}: {rule:?} at {}", edit.target.span);
            edit.apply(sink, block)?;
            previous_len = Some(text.len());
            applied += 1;
        }
    }

    Ok(applied)
}
