use std::rc::Rc;
use std::sync::Arc;

use derive_more::From;
use impl_tools::autoimpl;

use crate::index::Span;
use crate::num::Element;

/// Non-owning read view over a contiguous run of homogeneous elements.
/// A view never allocates or frees; its validity is bounded by the borrow
/// of the buffer it wraps.
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub struct View<'a, T: Element> {
    data: &'a [T],
}

/// Non-owning mutable view. Permits element reassignment on top of
/// everything a read view allows.
#[derive(Debug, PartialEq, From)]
pub struct ViewMut<'a, T: Element> {
    data: &'a mut [T],
}

/// Trait for types that can be viewed as a borrowed run of elements.
/// All read-only engine capabilities are blanket-implemented on top of it.
#[autoimpl(for <T: trait + ?Sized> &T, &mut T, Box<T>, Rc<T>, Arc<T>)]
pub trait ViewOp {
    type Elem: Element;

    fn as_slice(&self) -> &[Self::Elem];

    /// Number of elements in the view.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Element at a resolved position. Out-of-range positions are a caller
    /// contract violation.
    fn at(&self, pos: usize) -> &Self::Elem {
        &self.as_slice()[pos]
    }

    /// Borrow the sub-view covered by a resolved span.
    fn subview(&self, span: Span) -> &[Self::Elem] {
        &self.as_slice()[span.start()..span.end()]
    }
}

/// Trait for views that additionally permit element reassignment.
/// The mutation capabilities of the engine are gated on it.
#[autoimpl(for <T: trait + ?Sized> &mut T, Box<T>)]
pub trait ViewMutOp: ViewOp {
    fn as_mut_slice(&mut self) -> &mut [Self::Elem];
}

impl<'a, T: Element> View<'a, T> {
    pub fn new(data: &'a [T]) -> Self {
        Self { data }
    }
}

impl<'a, T: Element> ViewMut<'a, T> {
    pub fn new(data: &'a mut [T]) -> Self {
        Self { data }
    }
}

impl<T: Element> ViewOp for View<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T: Element> ViewOp for ViewMut<'_, T> {
    type Elem = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self.data
    }
}

impl<T: Element> ViewMutOp for ViewMut<'_, T> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }
}

impl<T: Element> ViewOp for [T] {
    type Elem = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Element> ViewMutOp for [T] {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: Element> ViewOp for Vec<T> {
    type Elem = T;

    #[inline(always)]
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: Element> ViewMutOp for Vec<T> {
    #[inline(always)]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

/// Wrap a borrowed buffer into a read-only view.
pub fn view<T: Element>(buffer: &[T]) -> View<'_, T> {
    View::new(buffer)
}

/// Wrap a borrowed buffer into a mutable view.
pub fn view_mut<T: Element>(buffer: &mut [T]) -> ViewMut<'_, T> {
    ViewMut::new(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_basic() {
        let buffer = [1i32, 2, 3];
        let v = view(&buffer);
        assert_eq!(v.len(), 3);
        assert!(!v.is_empty());
        assert_eq!(*v.at(1), 2);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_view_subview() {
        let buffer = [1u8, 2, 3, 4];
        let v = view(&buffer);
        let span = Span::new(1, 3).unwrap();
        assert_eq!(v.subview(span), &[2, 3]);
    }

    #[test]
    fn test_view_mut_reassign() {
        let mut buffer = [1i64, 2, 3];
        let mut v = view_mut(&mut buffer);
        v.as_mut_slice()[0] = 7;
        assert_eq!(v.as_slice(), &[7, 2, 3]);
    }

    #[test]
    fn test_slice_and_vec_are_views() {
        let buffer = vec![1.0f64, 2.0];
        assert_eq!(ViewOp::len(&buffer), 2);
        assert_eq!(ViewOp::len(&buffer[..1]), 1);
    }

    #[test]
    fn test_view_from() {
        let buffer = [5u16, 6];
        let v: View<'_, u16> = (&buffer[..]).into();
        assert_eq!(v.len(), 2);
    }
}
