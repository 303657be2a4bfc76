use derive_more::From;

use crate::num::Element;

/// Match target for search and counting, shaped by one of three modes.
/// The mode is a closed tagged variant resolved by pattern matching at the
/// point of use.
#[derive(Debug, Clone, Copy, PartialEq, From)]
pub enum Needle<'n, T: Element> {
    /// Match a single element by equality.
    #[from]
    Scalar(T),
    /// Match a contiguous, ordered run by elementwise equality.
    #[from]
    Sequence(&'n [T]),
    /// Match membership in an unordered collection of acceptable elements.
    Set(&'n [T]),
}

impl<'n, T: Element> Needle<'n, T> {
    pub fn scalar(value: T) -> Self {
        Self::Scalar(value)
    }

    pub fn sequence(run: &'n [T]) -> Self {
        Self::Sequence(run)
    }

    pub fn set(members: &'n [T]) -> Self {
        Self::Set(members)
    }

    /// Number of elements a single match covers.
    pub fn width(&self) -> usize {
        match self {
            Needle::Scalar(_) | Needle::Set(_) => 1,
            Needle::Sequence(run) => run.len(),
        }
    }

    /// An empty sequence or set never matches anywhere; every operation
    /// built on needles inherits this degradation.
    pub fn is_empty(&self) -> bool {
        match self {
            Needle::Scalar(_) => false,
            Needle::Sequence(run) => run.is_empty(),
            Needle::Set(members) => members.is_empty(),
        }
    }

    /// Whether a single element satisfies the needle's per-element test.
    /// Sequence needles match windows, not single elements, so they always
    /// answer false here.
    pub fn matches_element(&self, el: &T) -> bool {
        match self {
            Needle::Scalar(value) => el == value,
            Needle::Set(members) => members.contains(el),
            Needle::Sequence(_) => false,
        }
    }

    /// Whether a full match begins at `pos` in `haystack`.
    pub fn matches_at(&self, haystack: &[T], pos: usize) -> bool {
        match self {
            Needle::Scalar(value) => haystack.get(pos) == Some(value),
            Needle::Set(members) => haystack.get(pos).is_some_and(|el| members.contains(el)),
            Needle::Sequence(run) => {
                !run.is_empty()
                    && pos + run.len() <= haystack.len()
                    && haystack[pos..pos + run.len()] == **run
            }
        }
    }
}
