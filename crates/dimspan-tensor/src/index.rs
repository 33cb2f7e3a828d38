//! Multi-Index Access - One Call Per Lookup, One Index Per Dimension
//!
//! `TensorIndex` is the protocol behind the containers' `at` / `at_mut`
//! methods. An index is `()` (the container itself), a single `usize` (one
//! dimension down), or a tuple of up to six `usize` values that descends
//! one dimension per component. Supplying more indices than the container
//! has dimensions does not typecheck, and every step is bounds-checked
//! with the offending index and extent in the error.
//!
//! @version 0.1.0

use dimspan_core::error::Result;
use dimspan_core::tensor::Axis;

// =============================================================================
// TensorIndex
// =============================================================================

/// A multi-index into a container of type `C`.
///
/// `Output` is whatever the index reaches: the container itself for `()`,
/// a sub-container for a partial index, an element for a complete one.
pub trait TensorIndex<C> {
    /// The type reached by this index.
    type Output;

    /// Resolves to a reference, descending one dimension per component.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if a component is at or beyond its
    /// dimension's extent.
    fn index_into(self, tensor: &C) -> Result<&Self::Output>;

    /// Resolves to a mutable reference.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if a component is at or beyond its
    /// dimension's extent.
    fn index_into_mut(self, tensor: &mut C) -> Result<&mut Self::Output>;
}

impl<C> TensorIndex<C> for () {
    type Output = C;

    fn index_into(self, tensor: &C) -> Result<&C> {
        Ok(tensor)
    }

    fn index_into_mut(self, tensor: &mut C) -> Result<&mut C> {
        Ok(tensor)
    }
}

impl<C: Axis> TensorIndex<C> for usize {
    type Output = C::Child;

    fn index_into(self, tensor: &C) -> Result<&C::Child> {
        tensor.child(self)
    }

    fn index_into_mut(self, tensor: &mut C) -> Result<&mut C::Child> {
        tensor.child_mut(self)
    }
}

impl<C: Axis> TensorIndex<C> for (usize,) {
    type Output = C::Child;

    fn index_into(self, tensor: &C) -> Result<&C::Child> {
        tensor.child(self.0)
    }

    fn index_into_mut(self, tensor: &mut C) -> Result<&mut C::Child> {
        tensor.child_mut(self.0)
    }
}

// Expands to `usize` regardless of the token, to repeat a type once per
// tuple position.
macro_rules! usize_of {
    ($idx:tt) => { usize };
}

macro_rules! tuple_index_impls {
    ($(($($idx:tt),+))+) => { $(
        impl<C: Axis> TensorIndex<C> for (usize, $(usize_of!($idx)),+)
        where
            ($(usize_of!($idx),)+): TensorIndex<C::Child>,
        {
            type Output = <($(usize_of!($idx),)+) as TensorIndex<C::Child>>::Output;

            fn index_into(self, tensor: &C) -> Result<&Self::Output> {
                ($(self.$idx,)+).index_into(tensor.child(self.0)?)
            }

            fn index_into_mut(self, tensor: &mut C) -> Result<&mut Self::Output> {
                ($(self.$idx,)+).index_into_mut(tensor.child_mut(self.0)?)
            }
        }
    )+ };
}

tuple_index_impls! {
    (1)
    (1, 2)
    (1, 2, 3)
    (1, 2, 3, 4)
    (1, 2, 3, 4, 5)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use dimspan_core::error::Error;

    use crate::fixed::{Fixed4, FixedVector};
    use crate::nested::FromNested;

    #[test]
    fn test_unit_index_is_identity() {
        let v = FixedVector::from([1, 2]);
        assert_eq!(v.at(()), Ok(&v));
    }

    #[test]
    fn test_scalar_and_singleton_agree() {
        let v = FixedVector::from([1, 2, 3]);
        assert_eq!(v.at(1), v.at((1,)));
    }

    #[test]
    fn test_deep_descent() {
        let t = Fixed4::<i32, 2, 2, 2, 2>::from_nested([
            [[[1, 2], [3, 4]], [[5, 6], [7, 8]]],
            [[[9, 10], [11, 12]], [[13, 14], [15, 16]]],
        ]);
        assert_eq!(t.at((1, 0, 1, 0)), Ok(&11));
        assert_eq!(t.at((1, 0, 1)), Ok(&FixedVector::from([11, 12])));
        assert_eq!(t.at((0, 0, 0, 5)), Err(Error::out_of_bounds(5, 2)));
    }
}
