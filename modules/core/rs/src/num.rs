use std::fmt::Debug;

/// T values are fixed-width scalars that can populate a view: primitive
/// integers or floats. Aggregates, booleans, and characters are excluded.
pub trait Element: ::num::Num + Copy + PartialOrd + Debug + Default {}

impl<T: ::num::Num + Copy + PartialOrd + Debug + Default> Element for T {}
