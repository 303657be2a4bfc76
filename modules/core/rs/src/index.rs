use std::fmt::Display;
use std::ops::Range;

use derive_getters::Dissolve;
use eyre::{eyre, Report, Result};

/// Span is a resolved half-open region [start, end) inside a view.
/// It's not represented as a Rust-native Range for a couple of reasons:
/// - Prohibit reversed spans (start > end), which `resolve_range` never produces
/// - Implement custom traits (e.g. Dissolve) and methods (e.g. contains)
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default, Dissolve)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start <= end {
            Ok(Self { start, end })
        } else {
            Err(eyre!("Invalid span: start > end"))
        }
    }

    #[inline(always)]
    pub fn start(&self) -> usize {
        self.start
    }

    #[inline(always)]
    pub fn end(&self) -> usize {
        self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Check if the span contains a given position.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

impl Display for Span {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl TryFrom<(usize, usize)> for Span {
    type Error = Report;

    fn try_from(value: (usize, usize)) -> Result<Self, Self::Error> {
        Self::new(value.0, value.1)
    }
}

impl From<Span> for (usize, usize) {
    fn from(span: Span) -> Self {
        (span.start, span.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

impl From<&Span> for Range<usize> {
    fn from(span: &Span) -> Self {
        span.start..span.end
    }
}

/// Resolve a possibly-negative index against a view of `len` elements.
/// Negative values wrap from the end, Python style: -1 is the last element.
/// The caller owns the contract that the resolved position lands in
/// [0, len); anything else is a contract violation, not a recoverable error.
pub fn resolve_index(len: usize, idx: isize) -> usize {
    if idx >= 0 {
        idx as usize
    } else {
        len - idx.unsigned_abs()
    }
}

/// Resolve a possibly-out-of-range [start, end) pair against a view of `len`
/// elements.
///
/// - `start > len` clamps start to 0.
/// - `end > len` clamps end to `len - 1`, not `len`. `end == len` passes
///   through untouched.
/// - A pair that resolves to `start == end` degrades to the whole view
///   [0, len), not to an empty span.
/// - A reversed pair is swapped, so `start <= end` always holds on return.
///
/// A zero-length view resolves every request to the empty span [0, 0).
pub fn resolve_range(len: usize, start: usize, end: usize) -> Span {
    if len == 0 {
        return Span { start: 0, end: 0 };
    }

    let mut start = if start > len { 0 } else { start };
    let mut end = if end > len { len - 1 } else { end };

    if start == end {
        return Span { start: 0, end: len };
    }
    if start > end {
        log::debug!("reversed range [{start}, {end}) against {len} elements, swapping");
        std::mem::swap(&mut start, &mut end);
    }
    Span { start, end }
}
