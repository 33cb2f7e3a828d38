//! # Dimspan - Recursive Multidimensional Containers for Rust
//!
//! Dimspan provides two families of owned multidimensional containers,
//! built by nesting so that rank is always part of the type:
//!
//! - **Fixed** (`Fixed1` .. `Fixed6`): every extent is a const generic.
//!   Storage is nested inline arrays, shape mismatches between containers
//!   are compile errors, and span extraction knows its output shape at
//!   compile time.
//! - **Dynamic** (`Dyn1` .. `Dyn6`): extents are runtime values and
//!   siblings may have different lengths, so rank >= 2 containers can be
//!   jagged.
//!
//! Both families share one access surface: `at` takes one index per
//! dimension (or fewer, to stop at a sub-container) and `span` copies out
//! a sub-region described by one span per dimension.
//!
//! # Quick Start
//!
//! ```
//! use dimspan::prelude::*;
//!
//! // A 2x2x3 block with compile-time shape.
//! let t = Fixed3::<i32, 2, 2, 3>::from_nested([
//!     [[1, 2, 3], [4, 5, 6]],
//!     [[7, 8, 9], [10, 11, 12]],
//! ]);
//!
//! // Checked multi-index access.
//! assert_eq!(t.at((1, 0, 2)), Ok(&9));
//!
//! // Span extraction: every plane, row 1 of each, columns 1..=2.
//! let sub: Fixed3<i32, 2, 1, 2> = t.span((Full, Index::<1>, Window::<1, 2>))?;
//! assert_eq!(sub, Fixed3::from_nested([[[5, 6]], [[11, 12]]]));
//!
//! // A jagged dynamic counterpart.
//! let d = Dyn2::from_nested(vec![vec![1, 2, 3], vec![4]]);
//! assert_eq!(d.total(), 4);
//! let tail = d.span((Span::all(), Span::interval(1, 2)))?;
//! assert_eq!(tail, Dyn2::from_nested(vec![vec![2, 3], vec![]]));
//! # Ok::<(), dimspan::core::Error>(())
//! ```
//!
//! @version 0.1.0

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

// =============================================================================
// Re-exports
// =============================================================================

pub use dimspan_core as core;
pub use dimspan_tensor as tensor;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for working with dimspan containers.
///
/// ```
/// use dimspan::prelude::*;
/// ```
pub mod prelude {
    // Foundations
    pub use dimspan_core::{Axis, Error, Result, Shape, StaticShape, Tensor};

    // Containers
    pub use dimspan_tensor::{
        Allocate, Dyn1, Dyn2, Dyn3, Dyn4, Dyn5, Dyn6, DynTensor, DynVector, Fixed1, Fixed2,
        Fixed3, Fixed4, Fixed5, Fixed6, FixedTensor, FixedVector, FromNested,
    };

    // Spans and access protocols
    pub use dimspan_tensor::{
        Exact, Full, Index, Span, SpanIndex, SpanLike, TensorIndex, Window,
    };
}
