use std::fmt;

use serde::Serialize;

use crate::sink::BlockId;

/// A non-fatal condition met during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "warning", rename_all = "snake_case")]
pub enum Warning {
    /// A code fence was opened and the document ended before it closed.
    UnterminatedFence { opened_at: BlockId },
    /// First row of a table, which is left as plain text.
    UnsupportedTable { block: BlockId },
    /// A sink operation failed; the rest of this block was skipped.
    BlockFailed { block: BlockId, message: String },
    /// The cleanup pass found markers the formatter missed.
    CleanupRemovedMarkers { block: BlockId, count: usize },
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Warning::UnterminatedFence { opened_at } => {
                write!(f, "code fence opened at block {opened_at} is never closed")
            }
            Warning::UnsupportedTable { block } => {
                write!(f, "table at block {block} is not converted")
            }
            Warning::BlockFailed { block, message } => {
                write!(f, "block {block} was only partly converted: {message}")
            }
            Warning::CleanupRemovedMarkers { block, count } => {
                write!(f, "cleanup removed {count} leftover marker(s) from block {block}")
            }
        }
    }
}

/// Outcome of a conversion pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Blocks visited.
    pub blocks: usize,
    /// Inline markers applied across all blocks.
    pub markers_applied: usize,
    pub warnings: Vec<Warning>,
}

impl ConversionReport {
    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}
