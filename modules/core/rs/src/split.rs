use derive_getters::Dissolve;

use crate::needle::Needle;
use crate::num::Element;

/// Ordered iteration over the fields of a buffer between separator matches.
/// The protocol owns all cursor state; callers hand it only the buffer and
/// the separator needle. Sequence separators consume their full width,
/// scalar and set separators consume one element.
#[derive(Debug, Clone, Dissolve)]
pub struct Split<'a, 'n, T: Element> {
    buffer: &'a [T],
    separator: Needle<'n, T>,
    cursor: usize,
    keep_empty: bool,
    done: bool,
}

impl<'a, 'n, T: Element> Split<'a, 'n, T> {
    pub fn new(buffer: &'a [T], separator: Needle<'n, T>) -> Self {
        Self {
            buffer,
            separator,
            cursor: 0,
            keep_empty: true,
            done: false,
        }
    }

    /// Whether empty fields are yielded. Disabling this turns split into
    /// tokenize.
    pub fn keep_empty(mut self, keep: bool) -> Self {
        self.keep_empty = keep;
        self
    }
}

impl<'a, T: Element> Iterator for Split<'a, '_, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }

            // A degenerate separator yields the whole buffer as one field.
            if self.separator.is_empty() {
                self.done = true;
                if self.keep_empty || !self.buffer.is_empty() {
                    return Some(self.buffer);
                }
                return None;
            }

            let mut at = self.cursor;
            while at < self.buffer.len() && !self.separator.matches_at(self.buffer, at) {
                at += 1;
            }

            let field = if at < self.buffer.len() {
                let field = &self.buffer[self.cursor..at];
                self.cursor = at + self.separator.width();
                field
            } else {
                self.done = true;
                &self.buffer[self.cursor..]
            };

            if self.keep_empty || !field.is_empty() {
                return Some(field);
            }
        }
    }
}

impl<T: Element> std::iter::FusedIterator for Split<'_, '_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_scalar() {
        let fields: Vec<_> = Split::new(b"a_bb_c".as_slice(), Needle::scalar(b'_')).collect();
        assert_eq!(fields, vec![b"a".as_slice(), b"bb", b"c"]);
    }

    #[test]
    fn test_split_keeps_empty_fields() {
        let fields: Vec<_> = Split::new(b"_a__".as_slice(), Needle::scalar(b'_')).collect();
        assert_eq!(fields, vec![b"".as_slice(), b"a", b"", b""]);
    }

    #[test]
    fn test_tokenize_drops_empty_fields() {
        let fields: Vec<_> = Split::new(b"_a__b_".as_slice(), Needle::scalar(b'_'))
            .keep_empty(false)
            .collect();
        assert_eq!(fields, vec![b"a".as_slice(), b"b"]);
    }

    #[test]
    fn test_split_sequence_consumes_full_width() {
        let fields: Vec<_> =
            Split::new(b"a--b--c".as_slice(), Needle::sequence(b"--".as_slice())).collect();
        assert_eq!(fields, vec![b"a".as_slice(), b"b", b"c"]);
    }

    #[test]
    fn test_split_set() {
        let fields: Vec<_> =
            Split::new(b"a,b;c".as_slice(), Needle::set(b",;".as_slice())).collect();
        assert_eq!(fields, vec![b"a".as_slice(), b"b", b"c"]);
    }

    #[test]
    fn test_split_no_separator_present() {
        let fields: Vec<_> = Split::new(b"abc".as_slice(), Needle::scalar(b'_')).collect();
        assert_eq!(fields, vec![b"abc".as_slice()]);
    }

    #[test]
    fn test_split_empty_buffer() {
        let mut split = Split::new(b"".as_slice(), Needle::scalar(b'_'));
        assert_eq!(split.next(), Some(b"".as_slice()));
        assert_eq!(split.next(), None);
        assert_eq!(split.next(), None);
    }

    #[test]
    fn test_split_empty_separator() {
        let fields: Vec<_> = Split::new(b"ab".as_slice(), Needle::<u8>::sequence(b"")).collect();
        assert_eq!(fields, vec![b"ab".as_slice()]);
    }
}
