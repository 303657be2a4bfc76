use num::{One, Zero};
use paste::paste;
use wide::{f32x8, f64x2};

use spanwise_core_rs::num::Element;
use spanwise_core_rs::ViewOp;

/// Per-type reduction kernels. Every kernel runs chunk-then-tail: full
/// chunks of `LANES` elements fold vertically into a lane accumulator, the
/// accumulator folds horizontally, and the remainder folds in one element
/// at a time with the same combining function. Float results may therefore
/// differ in the last bit from a naive left-to-right fold; integer results
/// are exact. Integer sums and products wrap on overflow.
pub trait Reducible: Element {
    /// Lane width of the chunked kernels.
    const LANES: usize;
    /// `min` over an empty view: the type's highest value, `+inf` for
    /// floats. A preserved quirk of the surface, not a "no data" signal.
    const EMPTY_MIN: Self;
    /// `max` over an empty view: the type's lowest value, `-inf` for floats.
    const EMPTY_MAX: Self;

    fn reduce_sum(data: &[Self]) -> Self;
    fn reduce_product(data: &[Self]) -> Self;
    fn reduce_min(data: &[Self]) -> Self;
    fn reduce_max(data: &[Self]) -> Self;
}

macro_rules! reducible_int {
    ($($t:ty => $lanes:literal,)+) => {$(
        impl Reducible for $t {
            const LANES: usize = $lanes;
            const EMPTY_MIN: Self = <$t>::MAX;
            const EMPTY_MAX: Self = <$t>::MIN;

            fn reduce_sum(data: &[Self]) -> Self {
                let mut lanes = [0 as $t; $lanes];
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    for (acc, el) in lanes.iter_mut().zip(chunk) {
                        *acc = acc.wrapping_add(*el);
                    }
                }
                let mut total = lanes.iter().fold(0 as $t, |acc, el| acc.wrapping_add(*el));
                for el in chunks.remainder() {
                    total = total.wrapping_add(*el);
                }
                total
            }

            fn reduce_product(data: &[Self]) -> Self {
                let mut lanes = [1 as $t; $lanes];
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    for (acc, el) in lanes.iter_mut().zip(chunk) {
                        *acc = acc.wrapping_mul(*el);
                    }
                }
                let mut total = lanes.iter().fold(1 as $t, |acc, el| acc.wrapping_mul(*el));
                for el in chunks.remainder() {
                    total = total.wrapping_mul(*el);
                }
                total
            }

            fn reduce_min(data: &[Self]) -> Self {
                let mut lanes = [<$t>::MAX; $lanes];
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    for (acc, el) in lanes.iter_mut().zip(chunk) {
                        *acc = (*acc).min(*el);
                    }
                }
                let mut best = lanes.iter().fold(<$t>::MAX, |acc, el| acc.min(*el));
                for el in chunks.remainder() {
                    best = best.min(*el);
                }
                best
            }

            fn reduce_max(data: &[Self]) -> Self {
                let mut lanes = [<$t>::MIN; $lanes];
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    for (acc, el) in lanes.iter_mut().zip(chunk) {
                        *acc = (*acc).max(*el);
                    }
                }
                let mut best = lanes.iter().fold(<$t>::MIN, |acc, el| acc.max(*el));
                for el in chunks.remainder() {
                    best = best.max(*el);
                }
                best
            }
        }
    )+};
}

// Lane counts fill a 256-bit register.
reducible_int!(
    u8 => 32,
    i8 => 32,
    u16 => 16,
    i16 => 16,
    u32 => 8,
    i32 => 8,
    u64 => 4,
    i64 => 4,
    usize => 4,
    isize => 4,
);

macro_rules! reducible_float {
    ($($t:ty => ($simd:ty, $lanes:literal),)+) => {$(
        impl Reducible for $t {
            const LANES: usize = $lanes;
            const EMPTY_MIN: Self = <$t>::INFINITY;
            const EMPTY_MAX: Self = <$t>::NEG_INFINITY;

            fn reduce_sum(data: &[Self]) -> Self {
                let mut acc = <$simd>::splat(0.0);
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    let mut lane = [0.0; $lanes];
                    lane.copy_from_slice(chunk);
                    acc += <$simd>::new(lane);
                }
                let mut total = acc.reduce_add();
                for el in chunks.remainder() {
                    total += *el;
                }
                total
            }

            fn reduce_product(data: &[Self]) -> Self {
                let mut acc = <$simd>::splat(1.0);
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    let mut lane = [0.0; $lanes];
                    lane.copy_from_slice(chunk);
                    acc = acc * <$simd>::new(lane);
                }
                let mut total = acc.to_array().into_iter().fold(1.0, |a, b| a * b);
                for el in chunks.remainder() {
                    total *= *el;
                }
                total
            }

            fn reduce_min(data: &[Self]) -> Self {
                let mut acc = <$simd>::splat(<$t>::INFINITY);
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    let mut lane = [0.0; $lanes];
                    lane.copy_from_slice(chunk);
                    acc = acc.min(<$simd>::new(lane));
                }
                let mut best = acc
                    .to_array()
                    .into_iter()
                    .fold(<$t>::INFINITY, <$t>::min);
                for el in chunks.remainder() {
                    best = best.min(*el);
                }
                best
            }

            fn reduce_max(data: &[Self]) -> Self {
                let mut acc = <$simd>::splat(<$t>::NEG_INFINITY);
                let mut chunks = data.chunks_exact($lanes);
                for chunk in &mut chunks {
                    let mut lane = [0.0; $lanes];
                    lane.copy_from_slice(chunk);
                    acc = acc.max(<$simd>::new(lane));
                }
                let mut best = acc
                    .to_array()
                    .into_iter()
                    .fold(<$t>::NEG_INFINITY, <$t>::max);
                for el in chunks.remainder() {
                    best = best.max(*el);
                }
                best
            }
        }
    )+};
}

reducible_float!(
    f32 => (f32x8, 8),
    f64 => (f64x2, 2),
);

/// Numeric reduction of a view to a single scalar.
pub trait Reduce: ViewOp
where
    Self::Elem: Reducible,
{
    /// Sum of all elements; 0 on an empty view.
    fn sum(&self) -> Self::Elem {
        let data = self.as_slice();
        if data.is_empty() {
            return Self::Elem::zero();
        }
        <Self::Elem as Reducible>::reduce_sum(data)
    }

    /// Product of all elements; 1 on an empty view.
    fn product(&self) -> Self::Elem {
        let data = self.as_slice();
        if data.is_empty() {
            return Self::Elem::one();
        }
        <Self::Elem as Reducible>::reduce_product(data)
    }

    /// Smallest element; `EMPTY_MIN` (the type's highest value) on an empty
    /// view.
    fn min(&self) -> Self::Elem {
        let data = self.as_slice();
        if data.is_empty() {
            return Self::Elem::EMPTY_MIN;
        }
        <Self::Elem as Reducible>::reduce_min(data)
    }

    /// Largest element; `EMPTY_MAX` (the type's lowest value) on an empty
    /// view.
    fn max(&self) -> Self::Elem {
        let data = self.as_slice();
        if data.is_empty() {
            return Self::Elem::EMPTY_MAX;
        }
        <Self::Elem as Reducible>::reduce_max(data)
    }
}

impl<V: ViewOp + ?Sized> Reduce for V where V::Elem: Reducible {}
