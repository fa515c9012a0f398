use std::ops::Range;

use super::span::Span;

/// Length of `s` in UTF-16 code units.
pub fn utf16_len(s: &str) -> usize {
    s.chars().map(char::len_utf16).sum()
}

/// Converts a byte offset (which must lie on a char boundary) to UTF-16 units.
pub fn byte_to_utf16(s: &str, byte: usize) -> usize {
    utf16_len(&s[..byte])
}

/// Converts a UTF-16 offset to a byte offset.
///
/// Returns `None` if the offset is past the end of `s` or splits a surrogate
/// pair.
pub fn utf16_to_byte(s: &str, offset: usize) -> Option<usize> {
    let mut units = 0;
    for (byte, ch) in s.char_indices() {
        if units == offset {
            return Some(byte);
        }
        if units > offset {
            return None;
        }
        units += ch.len_utf16();
    }
    (units == offset).then_some(s.len())
}

/// Converts a byte range produced by a regex match into a UTF-16 [`Span`].
pub fn byte_range_to_span(s: &str, range: Range<usize>) -> Span {
    let start = byte_to_utf16(s, range.start);
    Span::new(start, start + utf16_len(&s[range]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_offsets_are_identity() {
        let s = "hello";
        assert_eq!(utf16_len(s), 5);
        assert_eq!(byte_to_utf16(s, 3), 3);
        assert_eq!(utf16_to_byte(s, 3), Some(3));
        assert_eq!(utf16_to_byte(s, 5), Some(5));
    }

    #[test]
    fn multibyte_bmp_chars_count_once() {
        // 'é' is two bytes but one code unit
        let s = "café!";
        assert_eq!(utf16_len(s), 5);
        assert_eq!(byte_to_utf16(s, 5), 4);
        assert_eq!(utf16_to_byte(s, 4), Some(5));
    }

    #[test]
    fn astral_chars_count_twice() {
        let s = "a😀b";
        assert_eq!(utf16_len(s), 4);
        assert_eq!(byte_to_utf16(s, 5), 3);
        assert_eq!(utf16_to_byte(s, 3), Some(5));
    }

    #[test]
    fn offset_inside_surrogate_pair_is_rejected() {
        assert_eq!(utf16_to_byte("😀", 1), None);
    }

    #[test]
    fn offset_past_end_is_rejected() {
        assert_eq!(utf16_to_byte("ab", 3), None);
    }

    #[test]
    fn byte_range_converts_both_ends() {
        let s = "😀 **x**";
        let start = s.find("**").unwrap();
        assert_eq!(byte_range_to_span(s, start..s.len()), Span::new(3, 8));
    }
}
