use spanwise_core_rs::{Needle, Split, ViewOp};

/// Pattern search over a view, covering all three needle modes. Sequence
/// scans here are elementwise and may find overlapping occurrences; the
/// non-overlapping window stepping belongs to the counting layer.
pub trait Search: ViewOp {
    /// First position at or after `start` where the needle matches.
    /// Empty sequence and set needles never match.
    fn find_from(&self, start: usize, needle: Needle<'_, Self::Elem>) -> Option<usize> {
        let data = self.as_slice();
        if needle.is_empty() {
            return None;
        }
        (start..data.len()).find(|&pos| needle.matches_at(data, pos))
    }

    fn find(&self, needle: Needle<'_, Self::Elem>) -> Option<usize> {
        self.find_from(0, needle)
    }

    /// Last position where the needle matches.
    fn rfind(&self, needle: Needle<'_, Self::Elem>) -> Option<usize> {
        let data = self.as_slice();
        if needle.is_empty() {
            return None;
        }
        (0..data.len()).rev().find(|&pos| needle.matches_at(data, pos))
    }

    fn contains(&self, needle: Needle<'_, Self::Elem>) -> bool {
        self.find(needle).is_some()
    }

    fn contains_from(&self, start: usize, needle: Needle<'_, Self::Elem>) -> bool {
        self.find_from(start, needle).is_some()
    }

    /// Whether the view begins with the needle: the full prefix for a
    /// sequence, the first element for a scalar or set. Always false on an
    /// empty view.
    fn starts_with(&self, needle: Needle<'_, Self::Elem>) -> bool {
        !needle.is_empty() && needle.matches_at(self.as_slice(), 0)
    }

    /// Whether the view ends with the needle: the full suffix for a
    /// sequence, the last element for a scalar or set. Always false on an
    /// empty view.
    fn ends_with(&self, needle: Needle<'_, Self::Elem>) -> bool {
        let data = self.as_slice();
        if data.is_empty() || needle.is_empty() {
            return false;
        }
        match needle {
            Needle::Sequence(run) => {
                data.len() >= run.len() && needle.matches_at(data, data.len() - run.len())
            }
            Needle::Scalar(_) | Needle::Set(_) => needle.matches_at(data, data.len() - 1),
        }
    }

    /// Hand the buffer and separator off to the ordered split protocol.
    fn split<'n>(&self, separator: Needle<'n, Self::Elem>) -> Split<'_, 'n, Self::Elem> {
        Split::new(self.as_slice(), separator)
    }

    /// Split with empty fields dropped.
    fn tokenize<'n>(&self, separator: Needle<'n, Self::Elem>) -> Split<'_, 'n, Self::Elem> {
        self.split(separator).keep_empty(false)
    }
}

impl<V: ViewOp + ?Sized> Search for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwise_core_rs::view;

    #[test]
    fn test_find_scalar() {
        let v = view(b"This is a test");
        assert_eq!(v.find(Needle::scalar(b'T')), Some(0));
        assert_eq!(v.find_from(12, Needle::scalar(b't')), Some(13));
        assert_eq!(v.find(Needle::scalar(b'z')), None);
    }

    #[test]
    fn test_find_sequence() {
        let v = view(b"abcabc");
        assert_eq!(v.find(Needle::sequence(b"bca".as_slice())), Some(1));
        assert_eq!(v.find_from(2, Needle::sequence(b"abc".as_slice())), Some(3));
        assert_eq!(v.find(Needle::sequence(b"abcd".as_slice())), None);
    }

    #[test]
    fn test_find_set() {
        let v = view(b"xyzu");
        assert_eq!(v.find(Needle::set(b"uz".as_slice())), Some(2));
        assert_eq!(v.find(Needle::set(b"ab".as_slice())), None);
    }

    #[test]
    fn test_find_empty_needle_never_matches() {
        let v = view(b"abc");
        assert_eq!(v.find(Needle::<u8>::sequence(b"")), None);
        assert_eq!(v.find(Needle::<u8>::set(b"")), None);
    }

    #[test]
    fn test_rfind() {
        let v = view(b"abcabc");
        assert_eq!(v.rfind(Needle::scalar(b'a')), Some(3));
        assert_eq!(v.rfind(Needle::sequence(b"abc".as_slice())), Some(3));
        assert_eq!(v.rfind(Needle::set(b"ab".as_slice())), Some(4));
    }

    #[test]
    fn test_contains() {
        let v = view(&[1i32, 2, 3]);
        assert!(v.contains(Needle::scalar(2)));
        assert!(!v.contains_from(2, Needle::scalar(2)));
    }

    #[test]
    fn test_starts_with() {
        let v = view(b"abc");
        assert!(v.starts_with(Needle::scalar(b'a')));
        assert!(v.starts_with(Needle::sequence(b"ab".as_slice())));
        assert!(!v.starts_with(Needle::sequence(b"abcd".as_slice())));
        assert!(v.starts_with(Needle::set(b"xa".as_slice())));
        assert!(!v.starts_with(Needle::set(b"bc".as_slice())));
    }

    #[test]
    fn test_ends_with() {
        let v = view(b"abc");
        assert!(v.ends_with(Needle::scalar(b'c')));
        assert!(v.ends_with(Needle::sequence(b"bc".as_slice())));
        assert!(!v.ends_with(Needle::sequence(b"ac".as_slice())));
        assert!(v.ends_with(Needle::set(b"cx".as_slice())));
    }

    #[test]
    fn test_empty_buffer_never_matches() {
        let v = view::<u8>(b"");
        assert!(!v.starts_with(Needle::scalar(b'a')));
        assert!(!v.ends_with(Needle::scalar(b'a')));
        assert_eq!(v.find(Needle::scalar(b'a')), None);
    }

    #[test]
    fn test_split_delegation() {
        let v = view(b"a_b__c");
        let fields: Vec<_> = v.split(Needle::scalar(b'_')).collect();
        assert_eq!(fields, vec![b"a".as_slice(), b"b", b"", b"c"]);
        let tokens: Vec<_> = v.tokenize(Needle::scalar(b'_')).collect();
        assert_eq!(tokens, vec![b"a".as_slice(), b"b", b"c"]);
    }
}
