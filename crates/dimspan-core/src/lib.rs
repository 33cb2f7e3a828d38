//! Dimspan Core - Foundations for Shape-Typed Containers
//!
//! This crate provides the pieces shared by both dimspan container
//! families: the error taxonomy, the `Shape` extent list, and the container
//! traits (`Tensor`, `Axis`, `StaticShape`).
//!
//! # Key Features
//! - Unified `Error`/`Result` for all container operations
//! - `Shape` with small-vector optimization (no heap below rank 7)
//! - Trait contract for rank, descent, and introspection
//!
//! @version 0.1.0

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

// =============================================================================
// Modules
// =============================================================================

pub mod error;
pub mod shape;
pub mod tensor;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{Error, Result};
pub use shape::Shape;
pub use tensor::{Axis, StaticShape, Tensor};
