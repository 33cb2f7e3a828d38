//! Fixed Containers - Compile-Time Shaped Recursive Arrays
//!
//! The fixed family builds multidimensional containers by nesting:
//! `FixedVector<T, N>` is the rank-1 base holding `N` elements inline, and
//! `FixedTensor<C, N>` stacks `N` copies of any lower-rank container `C`.
//! Rank and every extent are part of the type, so shape errors between
//! containers are compile errors and `total()` is a constant.
//!
//! # Key Features
//! - Zero heap allocation: storage is plain nested arrays
//! - Rank aliases `Fixed1` through `Fixed6` for readable signatures
//! - Multi-index access and span extraction via `at` / `span`
//!
//! @version 0.1.0

use core::fmt;
use core::ops;
use core::slice;

use dimspan_core::error::{Error, Result};
use dimspan_core::shape::{format_extents, Shape};
use dimspan_core::tensor::{Axis, StaticShape, Tensor};

use crate::extract::SpanIndex;
use crate::index::TensorIndex;

// =============================================================================
// FixedVector
// =============================================================================

/// Rank-1 fixed container: `N` elements of `T` stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedVector<T, const N: usize> {
    items: [T; N],
}

impl<T, const N: usize> FixedVector<T, N> {
    /// Creates a vector with every element set to `value`.
    #[must_use]
    pub fn filled(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: core::array::from_fn(|_| value.clone()),
        }
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the elements as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.items
    }

    /// Iterates over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Iterates mutably over the elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Checked multi-index access. Pass `()` for the container itself, a
    /// `usize` for one element, or a tuple to keep descending (rank 1 only
    /// accepts scalar-shaped indices).
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an index is at or beyond its
    /// dimension's extent.
    pub fn at<I>(&self, index: I) -> Result<&I::Output>
    where
        I: TensorIndex<Self>,
    {
        index.index_into(self)
    }

    /// Checked multi-index access, mutable.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an index is at or beyond its
    /// dimension's extent.
    pub fn at_mut<I>(&mut self, index: I) -> Result<&mut I::Output>
    where
        I: TensorIndex<Self>,
    {
        index.index_into_mut(self)
    }

    /// Extracts a sub-region as a new owned container. Takes one typed span
    /// (or a 1-tuple of one), whose kind determines the output extent at
    /// compile time.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an `Exact` span's runtime bounds reach
    /// past the extent.
    pub fn span<S>(&self, spans: S) -> Result<S::Output>
    where
        S: SpanIndex<Self>,
    {
        spans.extract(self)
    }
}

impl<T, const N: usize> From<[T; N]> for FixedVector<T, N> {
    fn from(items: [T; N]) -> Self {
        Self { items }
    }
}

impl<T: Default, const N: usize> Default for FixedVector<T, N> {
    fn default() -> Self {
        Self {
            items: core::array::from_fn(|_| T::default()),
        }
    }
}

impl<T, const N: usize> Tensor for FixedVector<T, N> {
    const RANK: usize = 1;
    type Elem = T;

    fn len(&self) -> usize {
        N
    }

    fn total(&self) -> usize {
        N
    }

    fn shape(&self) -> Shape {
        Shape::from_slice(&[N])
    }
}

impl<T, const N: usize> StaticShape for FixedVector<T, N> {
    const EXTENT: usize = N;
    const TOTAL: usize = N;

    fn static_shape() -> Shape {
        Shape::from_slice(&[N])
    }
}

impl<T, const N: usize> Axis for FixedVector<T, N> {
    type Child = T;

    fn child(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, N))
    }

    fn child_mut(&mut self, index: usize) -> Result<&mut T> {
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, N))
    }
}

impl<T, const N: usize> ops::Index<usize> for FixedVector<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, const N: usize> ops::IndexMut<usize> for FixedVector<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a FixedVector<T, N> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a mut FixedVector<T, N> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Display, const N: usize> fmt::Display for FixedVector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "|")?;
        for (i, item) in self.items.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "|")
    }
}

// =============================================================================
// FixedTensor
// =============================================================================

/// Rank-(D+1) fixed container: `N` copies of a rank-D container `C`.
///
/// All siblings share `C`'s type, so the shape is rectangular by
/// construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedTensor<C, const N: usize> {
    items: [C; N],
}

impl<C, const N: usize> FixedTensor<C, N> {
    /// Creates a tensor with every child set to a clone of `child`.
    #[must_use]
    pub fn filled(child: C) -> Self
    where
        C: Clone,
    {
        Self {
            items: core::array::from_fn(|_| child.clone()),
        }
    }

    /// Returns the children as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[C] {
        &self.items
    }

    /// Returns the children as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [C] {
        &mut self.items
    }

    /// Iterates over the children.
    pub fn iter(&self) -> slice::Iter<'_, C> {
        self.items.iter()
    }

    /// Iterates mutably over the children.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, C> {
        self.items.iter_mut()
    }

    /// Checked multi-index access. Pass `()` for the container itself, one
    /// `usize` per dimension to descend, fewer to stop at a sub-container.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an index is at or beyond its
    /// dimension's extent.
    pub fn at<I>(&self, index: I) -> Result<&I::Output>
    where
        I: TensorIndex<Self>,
    {
        index.index_into(self)
    }

    /// Checked multi-index access, mutable.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an index is at or beyond its
    /// dimension's extent.
    pub fn at_mut<I>(&mut self, index: I) -> Result<&mut I::Output>
    where
        I: TensorIndex<Self>,
    {
        index.index_into_mut(self)
    }

    /// Extracts a sub-region as a new owned container. Takes one typed span
    /// per dimension; each span's kind determines the corresponding output
    /// extent at compile time, and out-of-extent `Index`/`Window` spans are
    /// compile errors.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if an `Exact` span's runtime bounds reach
    /// past its dimension's extent.
    pub fn span<S>(&self, spans: S) -> Result<S::Output>
    where
        S: SpanIndex<Self>,
    {
        spans.extract(self)
    }
}

impl<C, const N: usize> From<[C; N]> for FixedTensor<C, N> {
    fn from(items: [C; N]) -> Self {
        Self { items }
    }
}

impl<C: Default, const N: usize> Default for FixedTensor<C, N> {
    fn default() -> Self {
        Self {
            items: core::array::from_fn(|_| C::default()),
        }
    }
}

impl<C: StaticShape, const N: usize> Tensor for FixedTensor<C, N> {
    const RANK: usize = C::RANK + 1;
    type Elem = C::Elem;

    fn len(&self) -> usize {
        N
    }

    fn total(&self) -> usize {
        Self::TOTAL
    }

    fn shape(&self) -> Shape {
        Self::static_shape()
    }
}

impl<C: StaticShape, const N: usize> StaticShape for FixedTensor<C, N> {
    const EXTENT: usize = N;
    const TOTAL: usize = N * C::TOTAL;

    fn static_shape() -> Shape {
        let mut extents = Shape::new();
        extents.push(N);
        extents.extend(C::static_shape());
        extents
    }
}

impl<C: StaticShape, const N: usize> Axis for FixedTensor<C, N> {
    type Child = C;

    fn child(&self, index: usize) -> Result<&C> {
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, N))
    }

    fn child_mut(&mut self, index: usize) -> Result<&mut C> {
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, N))
    }
}

impl<C, const N: usize> ops::Index<usize> for FixedTensor<C, N> {
    type Output = C;

    fn index(&self, index: usize) -> &C {
        &self.items[index]
    }
}

impl<C, const N: usize> ops::IndexMut<usize> for FixedTensor<C, N> {
    fn index_mut(&mut self, index: usize) -> &mut C {
        &mut self.items[index]
    }
}

impl<'a, C, const N: usize> IntoIterator for &'a FixedTensor<C, N> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, C, const N: usize> IntoIterator for &'a mut FixedTensor<C, N> {
    type Item = &'a mut C;
    type IntoIter = slice::IterMut<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<C, const N: usize> fmt::Display for FixedTensor<C, N>
where
    C: StaticShape + fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if C::RANK == 1 {
            // Rank 2: one row per line.
            for (i, child) in self.items.iter().enumerate() {
                if i > 0 {
                    writeln!(f)?;
                }
                write!(f, "{child}")?;
            }
            Ok(())
        } else {
            writeln!(f, "Tensor<{}>{{", format_extents(&Self::static_shape()))?;
            for (i, child) in self.items.iter().enumerate() {
                if i > 0 {
                    write!(f, ",\n\n")?;
                }
                write!(f, "{child}")?;
            }
            write!(f, "\n}}")
        }
    }
}

// =============================================================================
// Rank Aliases
// =============================================================================

/// Rank-1 fixed container.
pub type Fixed1<T, const A: usize> = FixedVector<T, A>;
/// Rank-2 fixed container.
pub type Fixed2<T, const A: usize, const B: usize> = FixedTensor<Fixed1<T, B>, A>;
/// Rank-3 fixed container.
pub type Fixed3<T, const A: usize, const B: usize, const C: usize> =
    FixedTensor<Fixed2<T, B, C>, A>;
/// Rank-4 fixed container.
pub type Fixed4<T, const A: usize, const B: usize, const C: usize, const D: usize> =
    FixedTensor<Fixed3<T, B, C, D>, A>;
/// Rank-5 fixed container.
pub type Fixed5<T, const A: usize, const B: usize, const C: usize, const D: usize, const E: usize> =
    FixedTensor<Fixed4<T, B, C, D, E>, A>;
/// Rank-6 fixed container.
pub type Fixed6<
    T,
    const A: usize,
    const B: usize,
    const C: usize,
    const D: usize,
    const E: usize,
    const F: usize,
> = FixedTensor<Fixed5<T, B, C, D, E, F>, A>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested::FromNested;

    #[test]
    fn test_vector_construction() {
        let v = FixedVector::from([1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.total(), 3);
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_vector_filled_and_default() {
        let v = FixedVector::<i32, 4>::filled(7);
        assert_eq!(v.as_slice(), &[7, 7, 7, 7]);
        let d = FixedVector::<i32, 4>::default();
        assert_eq!(d.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn test_vector_indexing() {
        let mut v = FixedVector::from([10, 20, 30]);
        assert_eq!(v[1], 20);
        v[1] = 25;
        assert_eq!(v[1], 25);
        assert_eq!(v.at(2), Ok(&30));
        assert_eq!(v.at(3), Err(Error::out_of_bounds(3, 3)));
    }

    #[test]
    fn test_tensor_static_shape() {
        type M = Fixed3<i32, 2, 3, 4>;
        assert_eq!(M::RANK, 3);
        assert_eq!(M::EXTENT, 2);
        assert_eq!(M::TOTAL, 24);
        let m = M::default();
        assert_eq!(m.shape().as_slice(), &[2, 3, 4]);
        assert_eq!(m.total(), 24);
    }

    #[test]
    fn test_tensor_nested_mutation() {
        let mut m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        *m.at_mut((1, 2)).unwrap() = 60;
        assert_eq!(m.at((1, 2)), Ok(&60));
        assert_eq!(m[1][2], 60);
    }

    #[test]
    fn test_partial_indexing_yields_subcontainer() {
        let m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        let row = m.at((1,)).unwrap();
        assert_eq!(row, &FixedVector::from([4, 5, 6]));
        let whole = m.at(()).unwrap();
        assert_eq!(whole, &m);
    }

    #[test]
    fn test_out_of_bounds_reports_offending_dimension() {
        let m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.at((0, 9)), Err(Error::out_of_bounds(9, 3)));
        assert_eq!(m.at((5, 0)), Err(Error::out_of_bounds(5, 2)));
    }

    #[test]
    fn test_iteration() {
        let m = Fixed2::<i32, 2, 2>::from_nested([[1, 2], [3, 4]]);
        let sums: Vec<i32> = m.iter().map(|row| row.iter().sum()).collect();
        assert_eq!(sums, vec![3, 7]);
    }

    #[test]
    fn test_display_rank1() {
        let v = FixedVector::from([1, 2, 3]);
        assert_eq!(v.to_string(), "|1, 2, 3|");
    }

    #[test]
    fn test_display_rank2() {
        let m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        assert_eq!(m.to_string(), "|1, 2, 3|\n|4, 5, 6|");
    }

    #[test]
    fn test_display_rank3() {
        let t = Fixed3::<i32, 2, 2, 2>::from_nested([[[1, 2], [3, 4]], [[5, 6], [7, 8]]]);
        let expected = "Tensor<2,2,2>{\n|1, 2|\n|3, 4|,\n\n|5, 6|\n|7, 8|\n}";
        assert_eq!(t.to_string(), expected);
    }
}
