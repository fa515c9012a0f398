use crate::sink::BlockId;
use crate::text::Span;

/// Errors raised by a [`RichTextSink`](crate::sink::RichTextSink) operation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SinkError {
    #[error("Block {0} does not exist")]
    BlockNotFound(BlockId),

    #[error("Range {span} is out of bounds for block {block} (length {len})")]
    RangeOutOfBounds {
        block: BlockId,
        span: Span,
        len: usize,
    },

    #[error("Host rejected operation on block {block}: {reason}")]
    Rejected { block: BlockId, reason: String },
}
