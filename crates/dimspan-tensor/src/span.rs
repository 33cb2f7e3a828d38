//! Span Values - Interval Descriptors for Sub-Region Extraction
//!
//! A span describes which indices to take along one dimension: everything,
//! a single index, or a closed interval. Spans come in two flavors sharing
//! one semantic contract: the runtime `Span` enum, whose bounds are decided
//! at call time, and the typed descriptors (`Full`, `Index`, `Window`,
//! `Exact`), whose kind - and for all but `Exact`, whose bounds - live in
//! the type so that extraction from fixed containers can size its result
//! statically.
//!
//! # Key Features
//! - Representation-based equality (`all` never equals an equivalent interval)
//! - Size-checked spans that fail at construction, before any container access
//! - One resolution trait unifying both flavors at dynamic call sites
//!
//! @version 0.1.0

use dimspan_core::error::{Error, Result};

// =============================================================================
// Runtime Span
// =============================================================================

/// A runtime description of the indices spanned along one dimension.
///
/// Immutable value, constructed at each call site. Equality is purely on
/// the representation: `All` equals `All`, intervals equal intervals with
/// the same bounds, and `All` never equals an interval even when both
/// denote the same index set for some extent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span {
    /// The full extent of the dimension, whatever it currently is.
    All,
    /// The closed interval `[from, to]`.
    Interval {
        /// First index spanned (inclusive).
        from: usize,
        /// Last index spanned (inclusive).
        to: usize,
    },
}

impl Span {
    /// Creates a span covering the whole dimension.
    #[must_use]
    pub const fn all() -> Self {
        Self::All
    }

    /// Creates a span covering the closed interval `[from, to]`.
    ///
    /// Bounds are caller-supplied and not validated here; validation
    /// happens at the point of use, against the container being spanned.
    #[must_use]
    pub const fn interval(from: usize, to: usize) -> Self {
        Self::Interval { from, to }
    }

    /// Creates a span covering a single index, equal to
    /// `interval(value, value)`.
    #[must_use]
    pub const fn index(value: usize) -> Self {
        Self::Interval {
            from: value,
            to: value,
        }
    }

    /// Returns true if this span covers the whole dimension.
    #[must_use]
    pub const fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

// =============================================================================
// Typed Spans
// =============================================================================

/// Typed span covering the whole dimension; the counterpart of
/// [`Span::all`] with the kind in the type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Full;

/// Typed span covering the single index `I`; the extracted dimension has
/// extent 1.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Index<const I: usize>;

/// Typed span covering the static interval `[START, START + LEN - 1]`.
///
/// The interval is parameterized by its start and its length so the length
/// can size extraction results at compile time; an empty or inverted
/// interval is unrepresentable (`LEN >= 1` is enforced when the span is
/// used). Extent checks against a fixed dimension happen at compile time
/// too: a window reaching past the extent fails to compile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Window<const START: usize, const LEN: usize>;

/// Typed span with a static length but runtime bounds.
///
/// The bounds are validated once, at construction: a pair that does not
/// cover exactly `LEN` elements is rejected before any container access.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exact<const LEN: usize> {
    from: usize,
    to: usize,
}

impl<const LEN: usize> Exact<LEN> {
    /// Creates a size-checked span over `[from, to]`.
    ///
    /// # Errors
    /// `Error::SpanLengthMismatch` unless `to - from + 1 == LEN`.
    pub fn new(from: usize, to: usize) -> Result<Self> {
        match to.checked_sub(from) {
            Some(gap) if gap + 1 == LEN => Ok(Self { from, to }),
            _ => Err(Error::span_length(from, to, LEN)),
        }
    }

    /// First index spanned (inclusive).
    #[must_use]
    pub const fn from(&self) -> usize {
        self.from
    }

    /// Last index spanned (inclusive).
    #[must_use]
    pub const fn to(&self) -> usize {
        self.to
    }
}

// =============================================================================
// Resolution
// =============================================================================

/// Common contract of every span form: resolution to concrete inclusive
/// bounds against the runtime extent of the dimension being spanned.
///
/// This is what lets call sites mix runtime and typed spans freely when
/// extracting from dynamic containers.
pub trait SpanLike {
    /// Resolves to `(from, to)` inclusive bounds, or `None` when the
    /// resolved range is empty (a full span over an empty dimension).
    fn resolve(&self, extent: usize) -> Option<(usize, usize)>;

    /// Returns true if this span covers the whole dimension by construction.
    fn is_all(&self) -> bool {
        false
    }
}

impl SpanLike for Span {
    fn resolve(&self, extent: usize) -> Option<(usize, usize)> {
        match *self {
            Self::All => extent.checked_sub(1).map(|last| (0, last)),
            Self::Interval { from, to } => Some((from, to)),
        }
    }

    fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }
}

impl SpanLike for Full {
    fn resolve(&self, extent: usize) -> Option<(usize, usize)> {
        extent.checked_sub(1).map(|last| (0, last))
    }

    fn is_all(&self) -> bool {
        true
    }
}

impl<const I: usize> SpanLike for Index<I> {
    fn resolve(&self, _extent: usize) -> Option<(usize, usize)> {
        Some((I, I))
    }
}

impl<const START: usize, const LEN: usize> SpanLike for Window<START, LEN> {
    fn resolve(&self, _extent: usize) -> Option<(usize, usize)> {
        const { assert!(LEN > 0, "a window span must cover at least one element") };
        Some((START, START + LEN - 1))
    }
}

impl<const LEN: usize> SpanLike for Exact<LEN> {
    fn resolve(&self, _extent: usize) -> Option<(usize, usize)> {
        Some((self.from, self.to))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Full> for Span {
    fn from(_: Full) -> Self {
        Self::All
    }
}

impl<const I: usize> From<Index<I>> for Span {
    fn from(_: Index<I>) -> Self {
        Self::index(I)
    }
}

impl<const START: usize, const LEN: usize> From<Window<START, LEN>> for Span {
    fn from(_: Window<START, LEN>) -> Self {
        const { assert!(LEN > 0, "a window span must cover at least one element") };
        Self::interval(START, START + LEN - 1)
    }
}

impl<const LEN: usize> From<Exact<LEN>> for Span {
    fn from(span: Exact<LEN>) -> Self {
        Self::interval(span.from, span.to)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_equals_all() {
        assert_eq!(Span::all(), Span::all());
    }

    #[test]
    fn test_interval_equality() {
        assert_eq!(Span::interval(3, 7), Span::interval(3, 7));
        assert_ne!(Span::interval(3, 7), Span::interval(3, 8));
        assert_ne!(Span::interval(3, 7), Span::index(5));
    }

    #[test]
    fn test_index_is_degenerate_interval() {
        assert_eq!(Span::index(4), Span::interval(4, 4));
    }

    #[test]
    fn test_all_never_equals_interval() {
        // Representation-based equality: even when both denote the same
        // index set for a dimension of extent 5.
        assert_ne!(Span::all(), Span::interval(0, 4));
    }

    #[test]
    fn test_resolve_all() {
        assert_eq!(Span::all().resolve(5), Some((0, 4)));
        assert_eq!(Span::all().resolve(0), None);
        assert_eq!(Full.resolve(3), Some((0, 2)));
        assert_eq!(Full.resolve(0), None);
    }

    #[test]
    fn test_resolve_typed() {
        assert_eq!(Index::<3>.resolve(10), Some((3, 3)));
        assert_eq!(Window::<1, 2>.resolve(10), Some((1, 2)));
    }

    #[test]
    fn test_exact_construction() {
        let span = Exact::<3>::new(2, 4).unwrap();
        assert_eq!(span.from(), 2);
        assert_eq!(span.to(), 4);
        assert_eq!(span.resolve(10), Some((2, 4)));
    }

    #[test]
    fn test_exact_length_mismatch() {
        // One element short and one element long of the declared size.
        assert_eq!(
            Exact::<3>::new(2, 3).unwrap_err(),
            Error::span_length(2, 3, 3)
        );
        assert_eq!(
            Exact::<3>::new(2, 6).unwrap_err(),
            Error::span_length(2, 6, 3)
        );
    }

    #[test]
    fn test_exact_inverted_bounds() {
        assert!(Exact::<1>::new(5, 2).is_err());
    }

    #[test]
    fn test_typed_to_runtime_conversion() {
        assert_eq!(Span::from(Full), Span::all());
        assert_eq!(Span::from(Index::<2>), Span::index(2));
        assert_eq!(Span::from(Window::<1, 3>), Span::interval(1, 3));
        let exact = Exact::<2>::new(4, 5).unwrap();
        assert_eq!(Span::from(exact), Span::interval(4, 5));
    }
}
