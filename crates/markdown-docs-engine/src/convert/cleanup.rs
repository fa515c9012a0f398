//! # Cleanup Pass
//!
//! A last sweep that deletes any literal `**` left in a block. The inline
//! formatter removes every marker it applies, so on well-formed input this
//! finds nothing; it exists to catch unbalanced markers such as `**open`.

use crate::error::SinkError;
use crate::sink::{BlockId, RichTextSink};
use crate::text::utf16_len;

/// The marker the sweep removes.
pub const LEFTOVER_MARKER: &str = "**";

/// Deletes every `**` in `block`, returning how many were removed.
///
/// Each search starts from the beginning of the current text, so offsets are
/// always fresh. Idempotent.
pub fn sweep_block<S: RichTextSink + ?Sized>(
    sink: &mut S,
    block: BlockId,
) -> Result<usize, SinkError> {
    let limit = utf16_len(&sink.text(block)?) / LEFTOVER_MARKER.len();
    let mut removed = 0;

    while removed < limit {
        let Some(span) = sink.find_occurrence(block, LEFTOVER_MARKER, 0)? else {
            break;
        };
        sink.delete_range(block, span)?;
        removed += 1;
    }

    Ok(removed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemoryDocument;

    fn sweep(text: &str) -> (String, usize) {
        let mut doc = MemoryDocument::from_blocks([text]);
        let removed = sweep_block(&mut doc, BlockId(0)).unwrap();
        (doc.texts()[0].to_string(), removed)
    }

    #[test]
    fn clean_text_is_untouched() {
        assert_eq!(sweep("already bold text"), ("already bold text".to_string(), 0));
    }

    #[test]
    fn unbalanced_marker_is_removed() {
        assert_eq!(sweep("**open but never closed"), ("open but never closed".to_string(), 1));
    }

    #[test]
    fn every_leftover_is_removed() {
        assert_eq!(sweep("a** b **c****"), ("a b c".to_string(), 4));
    }

    #[test]
    fn single_asterisks_survive() {
        assert_eq!(sweep("2 * 3 = 6"), ("2 * 3 = 6".to_string(), 0));
    }

    #[test]
    fn sweeping_twice_is_a_no_op() {
        let mut doc = MemoryDocument::from_blocks(["x**y"]);
        assert_eq!(sweep_block(&mut doc, BlockId(0)).unwrap(), 1);
        assert_eq!(sweep_block(&mut doc, BlockId(0)).unwrap(), 0);
        assert_eq!(doc.texts(), vec!["xy"]);
    }
}
