//! Dimspan Tensor - Recursive Multidimensional Containers
//!
//! Two container families built by nesting, one rank per level. The fixed
//! family (`FixedVector` / `FixedTensor`) carries every extent in the
//! type: storage is inline arrays and shape mismatches are compile errors.
//! The dynamic family (`DynVector` / `DynTensor`) carries only the rank in
//! the type: extents are runtime values and siblings may be jagged.
//!
//! Both families share the same access surface: `at` for checked
//! multi-index lookup and `span` for copying out a sub-region, one span
//! per dimension.
//!
//! # Key Features
//! - Rank and (for the fixed family) extents enforced by the type system
//! - Span extraction with compile-time output shapes on fixed containers
//! - Jagged dynamic shapes with lenient innermost-dimension clipping
//!
//! @version 0.1.0

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod dynamic;
pub mod extract;
pub mod fixed;
pub mod index;
pub mod nested;
pub mod span;

// =============================================================================
// Re-exports
// =============================================================================

pub use dynamic::{Allocate, Dyn1, Dyn2, Dyn3, Dyn4, Dyn5, Dyn6, DynTensor, DynVector};
pub use extract::SpanIndex;
pub use fixed::{
    Fixed1, Fixed2, Fixed3, Fixed4, Fixed5, Fixed6, FixedTensor, FixedVector,
};
pub use index::TensorIndex;
pub use nested::FromNested;
pub use span::{Exact, Full, Index, Span, SpanLike, Window};
