use crate::patterns::patterns;

/// Horizontal rule: three or more `-`, `*` or `_` with nothing else on the line.
pub struct ThematicBreak;

impl ThematicBreak {
    pub fn detect(text: &str) -> bool {
        patterns().horizontal_rule.is_match(text)
    }
}
