use serde::{Deserialize, Serialize};

use super::blocks::kinds::BlockQuote;
use crate::sink::BlockAttributes;

/// Knobs for one conversion pass. Missing keys deserialize to the defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Emit real list items when the sink supports them.
    pub prefer_native_lists: bool,
    /// Left indent for quoted blocks, in layout points.
    pub blockquote_indent: f32,
    /// Left indent per nesting level for approximated list items.
    pub list_indent: f32,
    pub code_font_family: String,
    /// Background for code lines and one-line snippets. `None` leaves it alone.
    pub code_background: Option<String>,
    /// Run the final sweep for leftover `**` markers.
    pub cleanup_pass: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            prefer_native_lists: true,
            blockquote_indent: BlockQuote::DEFAULT_INDENT,
            list_indent: 36.0,
            code_font_family: "Courier New".to_string(),
            code_background: Some("#e8e8e8".to_string()),
            cleanup_pass: true,
        }
    }
}

impl ConvertOptions {
    /// Attributes given to every verbatim code block.
    pub fn code_attributes(&self) -> BlockAttributes {
        BlockAttributes {
            indent_start: None,
            background_color: self.code_background.clone(),
            font_family: Some(self.code_font_family.clone()),
        }
    }
}
