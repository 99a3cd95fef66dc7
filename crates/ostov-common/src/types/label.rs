//! Label traits for vertex values.

use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::str::FromStr;

/// Bound for vertex label types.
///
/// A label is the user-facing identity of a vertex: an equatable, hashable,
/// totally ordered scalar that can be parsed from a loader-supplied token.
/// The graph arena is sorted by label value after construction, which is why
/// `Ord` is required.
///
/// Blanket-implemented for every type satisfying the bounds (`u32`, `u64`,
/// `i64`, `String` via `char`-free tokens, ...).
pub trait Label: Clone + Eq + Hash + Ord + Debug + Display + FromStr {}

impl<T> Label for T where T: Clone + Eq + Hash + Ord + Debug + Display + FromStr {}

/// Labels that form the dense range `1..=n`.
///
/// Required only by ordered-label graphs, where missing vertices are
/// synthesized from their ordinal position instead of raising a
/// count-mismatch error.
pub trait OrdinalLabel: Label {
    /// Returns the label at 1-based ordinal position `n`.
    fn from_ordinal(n: u64) -> Self;
}

macro_rules! impl_ordinal_label {
    ($($ty:ty),*) => {
        $(
            impl OrdinalLabel for $ty {
                fn from_ordinal(n: u64) -> Self {
                    n as $ty
                }
            }
        )*
    };
}

impl_ordinal_label!(u8, u16, u32, usize, i16, i32, i64, isize);

impl OrdinalLabel for u64 {
    fn from_ordinal(n: u64) -> Self {
        n
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinal_synthesis() {
        assert_eq!(u32::from_ordinal(1), 1);
        assert_eq!(i64::from_ordinal(42), 42);
    }

    fn assert_label<T: Label>() {}

    #[test]
    fn string_labels_qualify() {
        assert_label::<String>();
        assert_label::<u64>();
    }
}
