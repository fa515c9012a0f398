//! # Pattern Registry
//!
//! Every Markdown grammar the converter recognises, compiled once and shared
//! read-only by the block classifier and the inline formatter.
//!
//! Block patterns are anchored and tested against a single block's text.
//! Inline patterns are non-greedy so that `**a** and **b**` yields two matches,
//! and every inner group is named so handlers never depend on group numbering.

use std::sync::OnceLock;

use regex::Regex;

/// The compiled grammars. Obtain with [`patterns()`].
pub struct Patterns {
    /// `#`×1..=5 followed by a space.
    pub heading: Regex,
    /// `> ` at the start of the block.
    pub blockquote: Regex,
    /// Optional indentation, then `-`, `*` or `N.`, then a space.
    pub list_item: Regex,
    /// Three or more of the same `-`, `*` or `_` and nothing else.
    pub horizontal_rule: Regex,
    /// A fence delimiter, optionally followed by spaces and an info string whose
    /// first word is the language tag. Tested on trimmed text.
    pub fence: Regex,
    /// A whole block wrapped in fence delimiters on one line.
    pub code_snippet: Regex,
    /// `| cell | cell |`
    pub table_row: Regex,
    pub bold: Regex,
    /// Bold wrapping an entire block, used by the list approximation.
    pub whole_bold: Regex,
    pub italic: Regex,
    pub strikethrough: Regex,
    pub image: Regex,
    pub link: Regex,
}

/// Returns the process-wide pattern registry.
pub fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(|| Patterns {
        heading: compile(r"^(?P<marker>#{1,5}) "),
        blockquote: compile(r"^> "),
        list_item: compile(r"^(?P<indent>[ \t]*)(?P<bullet>[-*]|(?P<number>\d+)\.) "),
        horizontal_rule: compile(r"^[ \t]*(?:-{3,}|\*{3,}|_{3,})[ \t]*$"),
        fence: compile(r"^```[ \t]*(?P<language>[^`\s]*)[^`]*$"),
        code_snippet: compile(r"^```(?P<code>.+)```$"),
        table_row: compile(r"^[ \t]*\|.*\|[ \t]*$"),
        bold: compile(r"\*\*(?P<inner>.+?)\*\*"),
        whole_bold: compile(r"^\*\*(?P<inner>.+)\*\*$"),
        italic: compile(r"_(?P<inner>[^_]+)_"),
        strikethrough: compile(r"~~(?P<inner>.+?)~~"),
        image: compile(r"!\[(?P<alt>[^\]]*)\]\((?P<url>[^)]*)\)"),
        link: compile(r"\[(?P<text>[^\]]+?)\]\((?P<url>[^)]+?)\)"),
    })
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("Invalid built-in Markdown pattern")
}
