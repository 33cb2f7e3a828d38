//! Container Traits - The Shared Contract of Both Container Families
//!
//! Every dimspan container, fixed or dynamic, implements `Tensor`: a rank
//! known at compile time, an element type, and shape/size introspection.
//! `Axis` adds the single fallible step of descent (one index, one
//! dimension) that the multi-index and span protocols are built from, and
//! `StaticShape` captures what only the fixed family can promise: extents
//! and totals that are constants of the type.
//!
//! # Key Features
//! - Rank as an associated constant, checked by the type system
//! - Fallible one-level descent with `IndexOutOfBounds` reporting
//! - Static extent/total constants for the fixed family
//!
//! @version 0.1.0

use crate::error::Result;
use crate::shape::Shape;

// =============================================================================
// Tensor
// =============================================================================

/// An owned multidimensional container of statically known rank.
///
/// A rank-D container holds rank-(D-1) sub-containers; rank 1 holds raw
/// elements. Each sub-container is exclusively owned by its parent - the
/// whole structure is a strict tree with no sharing.
pub trait Tensor {
    /// Number of dimensions, a constant of the type.
    const RANK: usize;

    /// The element type stored at rank 1.
    type Elem;

    /// Returns the extent of the outermost dimension.
    fn len(&self) -> usize;

    /// Returns true if the outermost dimension is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the total number of elements stored, across all dimensions.
    ///
    /// For fixed containers this is the static product of extents; for
    /// dynamic containers it is the sum of the children's own totals, which
    /// stays correct when siblings are jagged.
    fn total(&self) -> usize;

    /// Returns the per-dimension extents.
    ///
    /// Dynamic containers report the outermost extent followed by the first
    /// child's extents; siblings of a jagged container may differ from what
    /// is reported here.
    fn shape(&self) -> Shape;
}

// =============================================================================
// Axis
// =============================================================================

/// Single-level descent into a container.
///
/// `Child` is the rank-(RANK-1) sub-container, or the element itself at
/// rank 1. References returned here borrow the parent, so replacing a child
/// while a reference to it is live is rejected by the compiler.
pub trait Axis: Tensor {
    /// The sub-container one dimension down, or `Elem` at rank 1.
    type Child;

    /// Returns a reference to the child at `index`.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if `index` is at or beyond this
    /// dimension's extent.
    fn child(&self, index: usize) -> Result<&Self::Child>;

    /// Returns a mutable reference to the child at `index`.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if `index` is at or beyond this
    /// dimension's extent.
    fn child_mut(&mut self, index: usize) -> Result<&mut Self::Child>;
}

// =============================================================================
// StaticShape
// =============================================================================

/// Shape information that is a constant of the type (fixed family only).
pub trait StaticShape: Tensor {
    /// Extent of the outermost dimension.
    const EXTENT: usize;

    /// Total element count: the static product of all extents.
    const TOTAL: usize;

    /// Returns the full static extent list.
    fn static_shape() -> Shape;
}
