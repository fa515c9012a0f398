use serde::{Deserialize, Serialize};

/// A UTF-16 code-unit range `[start, end)` within a block's text.
///
/// Spans are only valid against the text they were computed from. Any
/// deletion inside a block invalidates every span at or after the deleted
/// range, so callers re-derive spans from fresh text before each mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Span {
    /// Inclusive start offset.
    pub start: usize,
    /// Exclusive end offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in code units. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Maps this span through the deletion of `removed`.
    ///
    /// Offsets after the removed range move left by its length; offsets inside
    /// it collapse onto its start. Returns `None` when nothing of the span
    /// survives.
    #[must_use]
    pub fn after_delete(self, removed: Span) -> Option<Span> {
        let shift = |offset: usize| {
            if offset <= removed.start {
                offset
            } else if offset >= removed.end {
                offset - removed.len()
            } else {
                removed.start
            }
        };
        let mapped = Span::new(shift(self.start), shift(self.end));
        (!mapped.is_empty()).then_some(mapped)
    }
}

impl std::fmt::Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
