use std::ops::Range;

use spanwise_core_rs::index::resolve_range;
use spanwise_core_rs::num::Element;
use spanwise_core_rs::ViewOp;

/// Boundary to trim from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrimSide {
    Left,
    Right,
    Both,
}

/// Per-element test driving a trim: scalar equality, set membership, or an
/// arbitrary predicate. Sequences have no per-element meaning and are not
/// part of this surface.
#[derive(Clone, Copy)]
pub enum TrimTest<'n, T: Element> {
    Scalar(T),
    Set(&'n [T]),
    Predicate(&'n dyn Fn(&T) -> bool),
}

impl<'n, T: Element> TrimTest<'n, T> {
    pub fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    pub fn set(members: &'n [T]) -> Self {
        Self::Set(members)
    }

    pub fn predicate(test: &'n dyn Fn(&T) -> bool) -> Self {
        Self::Predicate(test)
    }

    fn matches(&self, el: &T) -> bool {
        match self {
            TrimTest::Scalar(value) => el == value,
            TrimTest::Set(members) => members.contains(el),
            TrimTest::Predicate(test) => test(el),
        }
    }
}

/// Boundary trimming: shrink a view by dropping elements from either end
/// while a test holds.
pub trait Trim: ViewOp {
    /// Advance from the chosen boundaries while the test holds and return
    /// the remaining sub-view. Views of length <= 1 are returned unchanged.
    ///
    /// The shrunk bounds are materialized through `resolve_range`, so a
    /// trim that consumes every element degrades to the whole view under
    /// the empty-range rule.
    fn trim(&self, side: TrimSide, test: TrimTest<'_, Self::Elem>) -> &[Self::Elem] {
        let data = self.as_slice();
        if data.len() <= 1 {
            return data;
        }

        let mut start = 0;
        let mut end = data.len();
        if matches!(side, TrimSide::Left | TrimSide::Both) {
            while start < end && test.matches(&data[start]) {
                start += 1;
            }
        }
        if matches!(side, TrimSide::Right | TrimSide::Both) {
            while end > start && test.matches(&data[end - 1]) {
                end -= 1;
            }
        }

        if start == end {
            log::warn!(
                "trim consumed the whole view, degrading to all {} elements",
                data.len()
            );
        }
        let span = resolve_range(data.len(), start, end);
        &data[Range::from(span)]
    }
}

impl<V: ViewOp + ?Sized> Trim for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwise_core_rs::view;

    #[test]
    fn test_trim_left() {
        let v = view(b"xxab");
        assert_eq!(v.trim(TrimSide::Left, TrimTest::scalar(b'x')), b"ab");
    }

    #[test]
    fn test_trim_right() {
        let v = view(b"abxx");
        assert_eq!(v.trim(TrimSide::Right, TrimTest::scalar(b'x')), b"ab");
    }

    #[test]
    fn test_trim_both() {
        let v = view(b"  a b  ");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::scalar(b' ')), b"a b");
    }

    #[test]
    fn test_trim_set() {
        let v = view(b"\t ab \t");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::set(b" \t".as_slice())), b"ab");
    }

    #[test]
    fn test_trim_predicate() {
        let is_zero = |el: &i32| *el == 0;
        let buffer = [0, 0, 5, 7, 0];
        let v = view(&buffer);
        assert_eq!(v.trim(TrimSide::Both, TrimTest::predicate(&is_zero)), &[5, 7]);
    }

    #[test]
    fn test_trim_nothing_to_drop() {
        let v = view(b"abc");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::scalar(b'x')), b"abc");
    }

    #[test]
    fn test_trim_everything_degrades_to_whole_view() {
        // The empty-range rule of resolve_range turns a fully-consumed trim
        // back into the whole view.
        let v = view(b"aaaa");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::scalar(b'a')), b"aaaa");
        assert_eq!(v.trim(TrimSide::Left, TrimTest::scalar(b'a')), b"aaaa");
    }

    #[test]
    fn test_trim_short_views_unchanged() {
        let v = view(b"a");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::scalar(b'a')), b"a");
        let v = view::<u8>(b"");
        assert_eq!(v.trim(TrimSide::Both, TrimTest::scalar(b'a')), b"");
    }
}
