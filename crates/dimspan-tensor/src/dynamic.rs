//! Dynamic Containers - Runtime-Shaped Recursive Vectors
//!
//! The dynamic family mirrors the fixed one with heap storage:
//! `DynVector<T>` is the rank-1 base and `DynTensor<C>` stacks any number
//! of lower-rank containers `C`. Rank is still in the type; extents are
//! not, and siblings may have different lengths, so a rank >= 2 container
//! can be jagged. `total()` and `shape()` are defined accordingly:
//! `total()` sums the children's true totals, while `shape()` reports the
//! first child's extents and is only an approximation for jagged shapes.
//!
//! # Key Features
//! - Jagged shapes supported at every rank >= 2
//! - Rectangular allocation via `uniform` / `with_shape`
//! - Multi-index access and span extraction via `at` / `span`
//!
//! @version 0.1.0

use core::fmt;
use core::ops;
use core::slice;

use dimspan_core::error::{Error, Result};
use dimspan_core::shape::Shape;
use dimspan_core::tensor::{Axis, Tensor};

use crate::extract::SpanIndex;
use crate::index::TensorIndex;

// =============================================================================
// DynVector
// =============================================================================

/// Rank-1 dynamic container: a growable vector of elements.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynVector<T> {
    items: Vec<T>,
}

impl<T> DynVector<T> {
    /// Creates an empty vector.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a vector of `len` clones of `value`.
    #[must_use]
    pub fn filled(len: usize, value: T) -> Self
    where
        T: Clone,
    {
        Self {
            items: vec![value; len],
        }
    }

    /// Appends an element at the end.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
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

    /// Checked multi-index access. Pass `()` for the container itself or a
    /// `usize` for one element.
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

    /// Extracts a sub-region as a new owned vector. Rank-1 extraction
    /// clips rather than fails: bounds past the end are clamped, and a
    /// span starting past the end yields an empty vector.
    ///
    /// # Errors
    /// Never fails at rank 1; the `Result` keeps the signature uniform
    /// with the rest of the family.
    pub fn span<S>(&self, spans: S) -> Result<S::Output>
    where
        S: SpanIndex<Self>,
    {
        spans.extract(self)
    }
}

impl<T> From<Vec<T>> for DynVector<T> {
    fn from(items: Vec<T>) -> Self {
        Self { items }
    }
}

impl<T> FromIterator<T> for DynVector<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Tensor for DynVector<T> {
    const RANK: usize = 1;
    type Elem = T;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn total(&self) -> usize {
        self.items.len()
    }

    fn shape(&self) -> Shape {
        Shape::from_slice(&[self.items.len()])
    }
}

impl<T> Axis for DynVector<T> {
    type Child = T;

    fn child(&self, index: usize) -> Result<&T> {
        let size = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, size))
    }

    fn child_mut(&mut self, index: usize) -> Result<&mut T> {
        let size = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, size))
    }
}

impl<T> ops::Index<usize> for DynVector<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T> ops::IndexMut<usize> for DynVector<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<'a, T> IntoIterator for &'a DynVector<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVector<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<T: fmt::Display> fmt::Display for DynVector<T> {
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
// DynTensor
// =============================================================================

/// Rank-(D+1) dynamic container: a growable vector of rank-D containers.
///
/// Children are independent values; they may differ in length, which is
/// what makes jagged shapes possible.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynTensor<C> {
    items: Vec<C>,
}

impl<C> DynTensor<C> {
    /// Creates an empty tensor.
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates a tensor of `len` clones of `child`.
    #[must_use]
    pub fn filled(len: usize, child: C) -> Self
    where
        C: Clone,
    {
        Self {
            items: vec![child; len],
        }
    }

    /// Appends a child at the end.
    pub fn push(&mut self, child: C) {
        self.items.push(child);
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

    /// Extracts a sub-region as a new owned tensor. Takes one span per
    /// dimension, runtime or typed in any mix. At rank >= 2 every index
    /// reached by a span must exist; only the innermost dimension clips.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if a span at rank >= 2 reaches an index
    /// at or beyond its dimension's extent.
    pub fn span<S>(&self, spans: S) -> Result<S::Output>
    where
        S: SpanIndex<Self>,
    {
        spans.extract(self)
    }
}

impl<C> From<Vec<C>> for DynTensor<C> {
    fn from(items: Vec<C>) -> Self {
        Self { items }
    }
}

impl<C> FromIterator<C> for DynTensor<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl<C: Tensor> Tensor for DynTensor<C> {
    const RANK: usize = C::RANK + 1;
    type Elem = C::Elem;

    fn len(&self) -> usize {
        self.items.len()
    }

    fn total(&self) -> usize {
        self.items.iter().map(Tensor::total).sum()
    }

    fn shape(&self) -> Shape {
        let mut extents = Shape::new();
        extents.push(self.items.len());
        match self.items.first() {
            Some(child) => extents.extend(child.shape()),
            None => extents.extend(core::iter::repeat(0).take(C::RANK)),
        }
        extents
    }
}

impl<C: Tensor> Axis for DynTensor<C> {
    type Child = C;

    fn child(&self, index: usize) -> Result<&C> {
        let size = self.items.len();
        self.items
            .get(index)
            .ok_or_else(|| Error::out_of_bounds(index, size))
    }

    fn child_mut(&mut self, index: usize) -> Result<&mut C> {
        let size = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::out_of_bounds(index, size))
    }
}

impl<C> ops::Index<usize> for DynTensor<C> {
    type Output = C;

    fn index(&self, index: usize) -> &C {
        &self.items[index]
    }
}

impl<C> ops::IndexMut<usize> for DynTensor<C> {
    fn index_mut(&mut self, index: usize) -> &mut C {
        &mut self.items[index]
    }
}

impl<'a, C> IntoIterator for &'a DynTensor<C> {
    type Item = &'a C;
    type IntoIter = slice::Iter<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<'a, C> IntoIterator for &'a mut DynTensor<C> {
    type Item = &'a mut C;
    type IntoIter = slice::IterMut<'a, C>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter_mut()
    }
}

impl<C> fmt::Display for DynTensor<C>
where
    C: Tensor + fmt::Display,
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
            writeln!(f, "Tensor<{}>{{", Self::RANK)?;
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
// Allocation
// =============================================================================

/// Rectangular allocation of default-valued dynamic containers.
///
/// Dynamic containers are usually grown or converted from nested vectors;
/// this trait covers the remaining case of carving out a rectangular block
/// up front.
pub trait Allocate: Sized {
    /// Creates a container whose every dimension has extent `extent`,
    /// filled with default elements.
    fn uniform(extent: usize) -> Self;

    /// Creates a container with one explicit extent per dimension, filled
    /// with default elements.
    ///
    /// # Errors
    /// `Error::RankMismatch` if `extents` has more or fewer entries than
    /// the container has dimensions.
    fn with_shape(extents: &[usize]) -> Result<Self>;
}

impl<T: Default + Clone> Allocate for DynVector<T> {
    fn uniform(extent: usize) -> Self {
        Self {
            items: vec![T::default(); extent],
        }
    }

    fn with_shape(extents: &[usize]) -> Result<Self> {
        if extents.len() != 1 {
            return Err(Error::rank_mismatch(1, extents.len()));
        }
        Ok(Self::uniform(extents[0]))
    }
}

impl<C> Allocate for DynTensor<C>
where
    C: Allocate + Clone + Tensor,
{
    fn uniform(extent: usize) -> Self {
        Self {
            items: vec![C::uniform(extent); extent],
        }
    }

    fn with_shape(extents: &[usize]) -> Result<Self> {
        if extents.len() != Self::RANK {
            return Err(Error::rank_mismatch(Self::RANK, extents.len()));
        }
        let child = C::with_shape(&extents[1..])?;
        Ok(Self {
            items: vec![child; extents[0]],
        })
    }
}

// =============================================================================
// Rank Aliases
// =============================================================================

/// Rank-1 dynamic container.
pub type Dyn1<T> = DynVector<T>;
/// Rank-2 dynamic container.
pub type Dyn2<T> = DynTensor<Dyn1<T>>;
/// Rank-3 dynamic container.
pub type Dyn3<T> = DynTensor<Dyn2<T>>;
/// Rank-4 dynamic container.
pub type Dyn4<T> = DynTensor<Dyn3<T>>;
/// Rank-5 dynamic container.
pub type Dyn5<T> = DynTensor<Dyn4<T>>;
/// Rank-6 dynamic container.
pub type Dyn6<T> = DynTensor<Dyn5<T>>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nested::FromNested;

    #[test]
    fn test_vector_construction() {
        let v = DynVector::from(vec![1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.total(), 3);
        assert!(!v.is_empty());
        assert!(DynVector::<i32>::new().is_empty());
    }

    #[test]
    fn test_vector_growth() {
        let mut v = DynVector::new();
        v.push(1);
        v.push(2);
        assert_eq!(v.as_slice(), &[1, 2]);
        let collected: DynVector<i32> = (0..4).collect();
        assert_eq!(collected.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn test_jagged_shape_and_total() {
        let t = Dyn2::from_nested(vec![vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(t.len(), 2);
        assert_eq!(t.total(), 5);
        // Shape reports the first child's extents only.
        assert_eq!(t.shape().as_slice(), &[2, 2]);
    }

    #[test]
    fn test_empty_tensor_shape() {
        let t = Dyn3::<i32>::new();
        assert_eq!(t.shape().as_slice(), &[0, 0, 0]);
        assert_eq!(t.total(), 0);
    }

    #[test]
    fn test_multi_index_access() {
        let mut t = Dyn3::from_nested(vec![
            vec![vec![1, 2], vec![3, 4]],
            vec![vec![5, 6], vec![7, 8]],
        ]);
        assert_eq!(t.at((1, 0, 1)), Ok(&6));
        *t.at_mut((1, 0, 1)).unwrap() = 60;
        assert_eq!(t[1][0][1], 60);
        let plane = t.at((0,)).unwrap();
        assert_eq!(plane.total(), 4);
    }

    #[test]
    fn test_out_of_bounds_reports_offending_dimension() {
        let t = Dyn2::from_nested(vec![vec![1, 2], vec![3]]);
        // The second row is shorter; index 1 exists only in the first.
        assert_eq!(t.at((0, 1)), Ok(&2));
        assert_eq!(t.at((1, 1)), Err(Error::out_of_bounds(1, 1)));
        assert_eq!(t.at((2, 0)), Err(Error::out_of_bounds(2, 2)));
    }

    #[test]
    fn test_uniform_allocation() {
        let t = Dyn3::<i32>::uniform(2);
        assert_eq!(t.shape().as_slice(), &[2, 2, 2]);
        assert_eq!(t.total(), 8);
        assert_eq!(t.at((1, 1, 1)), Ok(&0));
    }

    #[test]
    fn test_with_shape_allocation() {
        let t = Dyn3::<i32>::with_shape(&[2, 3, 4]).unwrap();
        assert_eq!(t.shape().as_slice(), &[2, 3, 4]);
        assert_eq!(t.total(), 24);
    }

    #[test]
    fn test_with_shape_rank_mismatch() {
        assert_eq!(
            Dyn3::<i32>::with_shape(&[2, 3]).unwrap_err(),
            Error::rank_mismatch(3, 2)
        );
        assert_eq!(
            Dyn1::<i32>::with_shape(&[2, 3]).unwrap_err(),
            Error::rank_mismatch(1, 2)
        );
    }

    #[test]
    fn test_display_rank1_and_rank2() {
        let v = DynVector::from(vec![1, 2, 3]);
        assert_eq!(v.to_string(), "|1, 2, 3|");
        let t = Dyn2::from_nested(vec![vec![1, 2], vec![3, 4, 5]]);
        assert_eq!(t.to_string(), "|1, 2|\n|3, 4, 5|");
    }

    #[test]
    fn test_display_rank3() {
        let t = Dyn3::from_nested(vec![vec![vec![1, 2]], vec![vec![3], vec![4, 5]]]);
        let expected = "Tensor<3>{\n|1, 2|,\n\n|3|\n|4, 5|\n}";
        assert_eq!(t.to_string(), expected);
    }
}
