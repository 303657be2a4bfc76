use std::cmp::Ordering;
use std::iter::zip;

use spanwise_core_rs::ViewOp;

/// Elementwise lexicographic ordering and equality between views of the
/// same element type.
pub trait Compare: ViewOp {
    /// Lexicographic order: the first unequal pair decides, a shared prefix
    /// falls back to length. Incomparable pairs (float NaN) are skipped as
    /// if equal.
    fn order<O>(&self, other: &O) -> Ordering
    where
        O: ViewOp<Elem = Self::Elem> + ?Sized,
    {
        for (a, b) in zip(self.as_slice(), other.as_slice()) {
            match a.partial_cmp(b) {
                Some(Ordering::Equal) | None => continue,
                Some(decided) => return decided,
            }
        }
        self.len().cmp(&other.len())
    }

    fn equal<O>(&self, other: &O) -> bool
    where
        O: ViewOp<Elem = Self::Elem> + ?Sized,
    {
        self.as_slice() == other.as_slice()
    }
}

impl<V: ViewOp + ?Sized> Compare for V {}
