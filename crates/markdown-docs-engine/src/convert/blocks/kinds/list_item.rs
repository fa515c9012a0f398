use crate::patterns::patterns;
use crate::text::Span;

/// A recognised list marker at the start of a block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker {
    /// `N.` rather than `-` / `*`.
    pub ordered: bool,
    /// Nesting depth derived from leading indentation (0 = top level).
    pub level: u8,
    /// Indentation plus marker plus the following space.
    pub marker: Span,
}

/// List item type with owned delimiter knowledge.
pub struct ListItem;

impl ListItem {
    /// Spaces that make up one nesting level. A tab is always one level.
    pub const SPACES_PER_LEVEL: usize = 2;

    pub fn detect(text: &str) -> Option<ListMarker> {
        let caps = patterns().list_item.captures(text)?;
        Some(ListMarker {
            ordered: caps.name("number").is_some(),
            level: Self::depth(&caps["indent"]),
            // Marker and indentation are ASCII, so byte and UTF-16 lengths agree.
            marker: Span::new(0, caps[0].len()),
        })
    }

    /// Converts an indentation string to a nesting depth.
    fn depth(indent: &str) -> u8 {
        let tabs = indent.chars().filter(|&c| c == '\t').count();
        let spaces = indent.chars().filter(|&c| c == ' ').count();
        let depth = tabs + spaces / Self::SPACES_PER_LEVEL;
        u8::try_from(depth).unwrap_or(u8::MAX)
    }
}
