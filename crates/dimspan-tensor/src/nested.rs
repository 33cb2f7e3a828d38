//! Nested Construction - Containers from Nested Array/Vector Literals
//!
//! Lets a whole container be written as the plain nested literal it
//! stores: nested arrays for the fixed family, nested vectors for the
//! dynamic one.
//!
//! @version 0.1.0

use crate::dynamic::{DynTensor, DynVector};
use crate::fixed::{FixedTensor, FixedVector};

// =============================================================================
// FromNested
// =============================================================================

/// Construction from the nested literal form of a container.
pub trait FromNested: Sized {
    /// The literal form: nested `[..]` arrays or `vec![..]` vectors, one
    /// level per dimension.
    type Nested;

    /// Builds the container, consuming the literal.
    fn from_nested(nested: Self::Nested) -> Self;
}

impl<T, const N: usize> FromNested for FixedVector<T, N> {
    type Nested = [T; N];

    fn from_nested(nested: [T; N]) -> Self {
        Self::from(nested)
    }
}

impl<C: FromNested, const N: usize> FromNested for FixedTensor<C, N> {
    type Nested = [C::Nested; N];

    fn from_nested(nested: [C::Nested; N]) -> Self {
        Self::from(nested.map(C::from_nested))
    }
}

impl<T> FromNested for DynVector<T> {
    type Nested = Vec<T>;

    fn from_nested(nested: Vec<T>) -> Self {
        Self::from(nested)
    }
}

impl<C: FromNested> FromNested for DynTensor<C> {
    type Nested = Vec<C::Nested>;

    fn from_nested(nested: Vec<C::Nested>) -> Self {
        Self::from(nested.into_iter().map(C::from_nested).collect::<Vec<C>>())
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{Dyn2, Dyn3};
    use crate::fixed::Fixed2;
    use dimspan_core::tensor::Tensor;

    #[test]
    fn test_fixed_from_nested() {
        let m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.at((0, 2)), Ok(&3));
        assert_eq!(m.at((1, 0)), Ok(&4));
    }

    #[test]
    fn test_dynamic_from_nested_jagged() {
        let t = Dyn2::from_nested(vec![vec![1], vec![2, 3], vec![]]);
        assert_eq!(t.len(), 3);
        assert_eq!(t.total(), 3);
        assert_eq!(t.at((1, 1)), Ok(&3));
    }

    #[test]
    fn test_dynamic_from_nested_rank3() {
        let t = Dyn3::from_nested(vec![vec![vec![1, 2]], vec![vec![3, 4], vec![5]]]);
        assert_eq!(t.total(), 5);
        assert_eq!(t.at((1, 1, 0)), Ok(&5));
    }
}
