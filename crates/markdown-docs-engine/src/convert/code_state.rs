use crate::sink::BlockId;

/// Whether a conversion pass is currently inside a fenced code region.
///
/// Owned by one pass and threaded through the block loop; a new pass always
/// starts in [`CodeBlockState::Normal`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CodeBlockState {
    #[default]
    Normal,
    InCode {
        /// The fence block that opened the region.
        opened_at: BlockId,
        language: Option<String>,
    },
}

/// What a fence did to the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FenceTransition {
    Opened,
    Closed,
}

impl CodeBlockState {
    pub fn is_in_code(&self) -> bool {
        matches!(self, CodeBlockState::InCode { .. })
    }

    /// Flips the state on a fence delimiter.
    ///
    /// The language tag only matters on an opening fence; a closing fence
    /// carrying one still closes.
    pub fn toggle(&mut self, at: BlockId, language: Option<String>) -> FenceTransition {
        match self {
            CodeBlockState::Normal => {
                *self = CodeBlockState::InCode {
                    opened_at: at,
                    language,
                };
                FenceTransition::Opened
            }
            CodeBlockState::InCode { .. } => {
                *self = CodeBlockState::Normal;
                FenceTransition::Closed
            }
        }
    }

    /// Ends the pass, returning the opening fence if the region was never closed.
    pub fn finish(self) -> Option<BlockId> {
        match self {
            CodeBlockState::Normal => None,
            CodeBlockState::InCode { opened_at, .. } => Some(opened_at),
        }
    }
}
