//! # Text Utilities
//!
//! Offset math shared by the classifier, the inline formatter and the sinks.
//!
//! Rich-text hosts address block text in UTF-16 code units while Rust strings
//! and `regex` matches are addressed in UTF-8 bytes. Everything that crosses
//! the sink boundary is a [`Span`] in UTF-16 units; everything produced by a
//! regex is a byte range that must be converted with [`offsets`] against the
//! *current* text before use.

pub mod offsets;
pub mod span;

pub use offsets::{byte_range_to_span, byte_to_utf16, utf16_len, utf16_to_byte};
pub use span::Span;
