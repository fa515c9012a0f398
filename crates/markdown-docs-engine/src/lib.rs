pub mod convert;
pub mod error;
pub mod patterns;
pub mod sink;
pub mod text;

// Re-export key types for easier usage
pub use convert::{ConversionReport, ConvertOptions, Converter, Warning};
pub use error::SinkError;
pub use sink::{
    BlockAttributes, BlockId, BlockKind, MemoryBlock, MemoryDocument, RichTextSink, TextStyle,
};
pub use text::Span;

/// Converts Markdown source held as text into an in-memory rich-text document.
///
/// Each line becomes one block. The memory document supports native lists, so
/// `prefer_native_lists` alone decides which list rendering is used.
pub fn convert_markdown(
    source: &str,
    options: &ConvertOptions,
) -> (MemoryDocument, ConversionReport) {
    let mut doc = MemoryDocument::from_markdown(source).with_native_lists(true);
    let report = Converter::new(options.clone()).convert(&mut doc);
    (doc, report)
}
