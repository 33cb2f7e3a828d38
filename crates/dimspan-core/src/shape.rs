//! Shape Introspection - Extent Lists for Dimspan Containers
//!
//! Provides the `Shape` type used to report container extents, with
//! small-vector optimization so shapes up to rank 6 never touch the heap.
//!
//! @version 0.1.0

use smallvec::SmallVec;

// =============================================================================
// Type Aliases
// =============================================================================

/// Shape type - the per-dimension extents of a container.
/// Uses `SmallVec` for stack allocation of small shapes (up to 6 dimensions).
pub type Shape = SmallVec<[usize; 6]>;

// =============================================================================
// Shape Utilities
// =============================================================================

/// Computes the total number of elements from a list of extents.
///
/// # Arguments
/// * `extents` - The per-dimension extents
///
/// # Returns
/// Product of the extents. Note that for jagged dynamic containers this is
/// only the count implied by the reported shape, not the true element count;
/// use the container's own `total()` for that.
#[must_use]
pub fn extent_product(extents: &[usize]) -> usize {
    extents.iter().product()
}

/// Formats extents as a comma-separated list, e.g. `2,3,2`.
///
/// Used by the rank >= 3 `Display` header of the fixed container family.
#[must_use]
pub fn format_extents(extents: &[usize]) -> String {
    let mut out = String::new();
    for (i, extent) in extents.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&extent.to_string());
    }
    out
}

// =============================================================================
// Tests
// =============================================================================
