use crate::patterns::patterns;

/// Pipe table row. Tables are recognised so they can be left alone.
pub struct TableRow;

impl TableRow {
    pub fn detect(text: &str) -> bool {
        patterns().table_row.is_match(text)
    }
}
