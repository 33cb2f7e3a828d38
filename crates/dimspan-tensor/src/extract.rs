//! Span Extraction - Owned Sub-Regions from Span Tuples
//!
//! `SpanIndex` is the protocol behind the containers' `span` method. A
//! call takes exactly one span per dimension (arity is checked by the type
//! system) and returns a new owned container of the spanned region.
//!
//! The two families diverge in how bounds are enforced. Fixed containers
//! take typed spans and check `Index` / `Window` bounds at compile time;
//! only `Exact`, whose bounds are runtime values, can fail at run time.
//! Dynamic containers take any mix of runtime and typed spans; at rank
//! >= 2 every index a span reaches must exist, while the innermost
//! dimension clips to whatever is actually there, so jagged rows simply
//! contribute fewer elements.
//!
//! @version 0.1.0

use dimspan_core::error::{Error, Result};
use dimspan_core::tensor::{Axis, StaticShape, Tensor};

use crate::dynamic::{DynTensor, DynVector};
use crate::fixed::{FixedTensor, FixedVector};
use crate::span::{Exact, Full, Index, Span, SpanLike, Window};

// =============================================================================
// SpanIndex
// =============================================================================

/// A span tuple applied to a container of type `C`.
///
/// One span per dimension; `Output` is the extracted container type, with
/// each dimension's extent determined by the corresponding span.
pub trait SpanIndex<C> {
    /// The owned container produced by the extraction.
    type Output;

    /// Copies the spanned region out of `tensor`.
    ///
    /// # Errors
    /// `Error::IndexOutOfBounds` if a span reaches an index the container
    /// does not have (fixed: `Exact` only; dynamic: any span at rank >= 2).
    fn extract(self, tensor: &C) -> Result<Self::Output>;
}

/// A single span wrapped in a 1-tuple behaves exactly like the bare span.
impl<C, S: SpanIndex<C>> SpanIndex<C> for (S,) {
    type Output = S::Output;

    fn extract(self, tensor: &C) -> Result<S::Output> {
        self.0.extract(tensor)
    }
}

// Collects `LEN` extraction results starting at `from` into an array.
fn collect_array<O, const LEN: usize>(
    from: usize,
    mut f: impl FnMut(usize) -> Result<O>,
) -> Result<[O; LEN]> {
    let mut items = Vec::with_capacity(LEN);
    for offset in 0..LEN {
        items.push(f(from + offset)?);
    }
    <[O; LEN]>::try_from(items)
        .map_err(|_| Error::internal("span extraction produced the wrong number of elements"))
}

// =============================================================================
// Fixed Family, Rank 1
// =============================================================================

impl<T: Clone, const N: usize> SpanIndex<FixedVector<T, N>> for Full {
    type Output = FixedVector<T, N>;

    fn extract(self, tensor: &FixedVector<T, N>) -> Result<FixedVector<T, N>> {
        Ok(tensor.clone())
    }
}

impl<T: Clone, const I: usize, const N: usize> SpanIndex<FixedVector<T, N>> for Index<I> {
    type Output = FixedVector<T, 1>;

    fn extract(self, tensor: &FixedVector<T, N>) -> Result<FixedVector<T, 1>> {
        const { assert!(I < N, "span index is outside the fixed extent") };
        Ok(FixedVector::from([tensor.as_slice()[I].clone()]))
    }
}

impl<T: Clone, const START: usize, const LEN: usize, const N: usize>
    SpanIndex<FixedVector<T, N>> for Window<START, LEN>
{
    type Output = FixedVector<T, LEN>;

    fn extract(self, tensor: &FixedVector<T, N>) -> Result<FixedVector<T, LEN>> {
        const {
            assert!(LEN > 0, "a window span must cover at least one element");
            assert!(START + LEN <= N, "window span reaches outside the fixed extent");
        };
        let items = collect_array::<_, LEN>(START, |i| Ok(tensor.as_slice()[i].clone()))?;
        Ok(FixedVector::from(items))
    }
}

impl<T: Clone, const LEN: usize, const N: usize> SpanIndex<FixedVector<T, N>> for Exact<LEN> {
    type Output = FixedVector<T, LEN>;

    fn extract(self, tensor: &FixedVector<T, N>) -> Result<FixedVector<T, LEN>> {
        const { assert!(LEN <= N, "exact span cannot fit in the fixed extent") };
        if self.to() >= N {
            return Err(Error::out_of_bounds(self.to(), N));
        }
        let items = collect_array::<_, LEN>(self.from(), |i| Ok(tensor.as_slice()[i].clone()))?;
        Ok(FixedVector::from(items))
    }
}

// =============================================================================
// Fixed Family, Rank >= 2
// =============================================================================

macro_rules! fixed_span_impls {
    ($(($($S:ident $idx:tt),+))+) => { $(
        impl<C, $($S,)+ const N: usize> SpanIndex<FixedTensor<C, N>> for (Full, $($S,)+)
        where
            C: StaticShape,
            ($($S,)+): SpanIndex<C> + Copy,
        {
            type Output = FixedTensor<<($($S,)+) as SpanIndex<C>>::Output, N>;

            fn extract(self, tensor: &FixedTensor<C, N>) -> Result<Self::Output> {
                let tail = ($(self.$idx,)+);
                let items = collect_array::<_, N>(0, |i| tail.extract(tensor.child(i)?))?;
                Ok(FixedTensor::from(items))
            }
        }

        impl<C, $($S,)+ const I: usize, const N: usize> SpanIndex<FixedTensor<C, N>>
            for (Index<I>, $($S,)+)
        where
            C: StaticShape,
            ($($S,)+): SpanIndex<C> + Copy,
        {
            type Output = FixedTensor<<($($S,)+) as SpanIndex<C>>::Output, 1>;

            fn extract(self, tensor: &FixedTensor<C, N>) -> Result<Self::Output> {
                const { assert!(I < N, "span index is outside the fixed extent") };
                let tail = ($(self.$idx,)+);
                let items = collect_array::<_, 1>(I, |i| tail.extract(tensor.child(i)?))?;
                Ok(FixedTensor::from(items))
            }
        }

        impl<C, $($S,)+ const START: usize, const LEN: usize, const N: usize>
            SpanIndex<FixedTensor<C, N>> for (Window<START, LEN>, $($S,)+)
        where
            C: StaticShape,
            ($($S,)+): SpanIndex<C> + Copy,
        {
            type Output = FixedTensor<<($($S,)+) as SpanIndex<C>>::Output, LEN>;

            fn extract(self, tensor: &FixedTensor<C, N>) -> Result<Self::Output> {
                const {
                    assert!(LEN > 0, "a window span must cover at least one element");
                    assert!(START + LEN <= N, "window span reaches outside the fixed extent");
                };
                let tail = ($(self.$idx,)+);
                let items = collect_array::<_, LEN>(START, |i| tail.extract(tensor.child(i)?))?;
                Ok(FixedTensor::from(items))
            }
        }

        impl<C, $($S,)+ const LEN: usize, const N: usize> SpanIndex<FixedTensor<C, N>>
            for (Exact<LEN>, $($S,)+)
        where
            C: StaticShape,
            ($($S,)+): SpanIndex<C> + Copy,
        {
            type Output = FixedTensor<<($($S,)+) as SpanIndex<C>>::Output, LEN>;

            fn extract(self, tensor: &FixedTensor<C, N>) -> Result<Self::Output> {
                const { assert!(LEN <= N, "exact span cannot fit in the fixed extent") };
                if self.0.to() >= N {
                    return Err(Error::out_of_bounds(self.0.to(), N));
                }
                let tail = ($(self.$idx,)+);
                let items =
                    collect_array::<_, LEN>(self.0.from(), |i| tail.extract(tensor.child(i)?))?;
                Ok(FixedTensor::from(items))
            }
        }
    )+ };
}

fixed_span_impls! {
    (S1 1)
    (S1 1, S2 2)
    (S1 1, S2 2, S3 3)
    (S1 1, S2 2, S3 3, S4 4)
    (S1 1, S2 2, S3 3, S4 4, S5 5)
}

// =============================================================================
// Dynamic Family, Rank 1
// =============================================================================

// Rank-1 extraction clips instead of failing: resolve the span, drop the
// part past the end, and return whatever remains.
fn clip<T: Clone>(vector: &DynVector<T>, span: impl SpanLike) -> DynVector<T> {
    let len = vector.len();
    let Some((from, to)) = span.resolve(len) else {
        return DynVector::new();
    };
    if from >= len {
        return DynVector::new();
    }
    let to = to.min(len - 1);
    if from > to {
        return DynVector::new();
    }
    vector.as_slice()[from..=to].iter().cloned().collect()
}

impl<T: Clone> SpanIndex<DynVector<T>> for Span {
    type Output = DynVector<T>;

    fn extract(self, tensor: &DynVector<T>) -> Result<DynVector<T>> {
        Ok(clip(tensor, self))
    }
}

impl<T: Clone> SpanIndex<DynVector<T>> for Full {
    type Output = DynVector<T>;

    fn extract(self, tensor: &DynVector<T>) -> Result<DynVector<T>> {
        Ok(tensor.clone())
    }
}

impl<T: Clone, const I: usize> SpanIndex<DynVector<T>> for Index<I> {
    type Output = DynVector<T>;

    fn extract(self, tensor: &DynVector<T>) -> Result<DynVector<T>> {
        Ok(clip(tensor, self))
    }
}

impl<T: Clone, const START: usize, const LEN: usize> SpanIndex<DynVector<T>>
    for Window<START, LEN>
{
    type Output = DynVector<T>;

    fn extract(self, tensor: &DynVector<T>) -> Result<DynVector<T>> {
        Ok(clip(tensor, self))
    }
}

impl<T: Clone, const LEN: usize> SpanIndex<DynVector<T>> for Exact<LEN> {
    type Output = DynVector<T>;

    fn extract(self, tensor: &DynVector<T>) -> Result<DynVector<T>> {
        Ok(clip(tensor, self))
    }
}

// =============================================================================
// Dynamic Family, Rank >= 2
// =============================================================================

macro_rules! dyn_span_impls {
    ($(($($S:ident $idx:tt),+))+) => { $(
        impl<C, H, $($S,)+> SpanIndex<DynTensor<C>> for (H, $($S,)+)
        where
            C: Tensor,
            H: SpanLike,
            ($($S,)+): SpanIndex<C, Output = C> + Copy,
        {
            type Output = DynTensor<C>;

            fn extract(self, tensor: &DynTensor<C>) -> Result<DynTensor<C>> {
                let Some((from, to)) = self.0.resolve(tensor.len()) else {
                    return Ok(DynTensor::new());
                };
                if from > to {
                    return Ok(DynTensor::new());
                }
                let tail = ($(self.$idx,)+);
                let mut items = Vec::with_capacity(to - from + 1);
                for i in from..=to {
                    items.push(tail.extract(tensor.child(i)?)?);
                }
                Ok(DynTensor::from(items))
            }
        }
    )+ };
}

dyn_span_impls! {
    (S1 1)
    (S1 1, S2 2)
    (S1 1, S2 2, S3 3)
    (S1 1, S2 2, S3 3, S4 4)
    (S1 1, S2 2, S3 3, S4 4, S5 5)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamic::{Dyn1, Dyn2, Dyn3};
    use crate::fixed::{Fixed2, Fixed3, FixedVector};
    use crate::nested::FromNested;

    // ---- fixed, rank 1 ----

    #[test]
    fn test_fixed_vector_full() {
        let v = FixedVector::from([1, 2, 3]);
        assert_eq!(v.span(Full), Ok(v.clone()));
    }

    #[test]
    fn test_fixed_vector_index_and_window() {
        let v = FixedVector::from([10, 20, 30, 40]);
        assert_eq!(v.span(Index::<2>), Ok(FixedVector::from([30])));
        assert_eq!(v.span(Window::<1, 3>), Ok(FixedVector::from([20, 30, 40])));
        // A 1-tuple behaves like the bare span.
        assert_eq!(v.span((Window::<0, 2>,)), Ok(FixedVector::from([10, 20])));
    }

    #[test]
    fn test_fixed_vector_exact() {
        let v = FixedVector::from([10, 20, 30, 40]);
        let span = Exact::<2>::new(1, 2).unwrap();
        assert_eq!(v.span(span), Ok(FixedVector::from([20, 30])));
    }

    #[test]
    fn test_fixed_vector_exact_out_of_range() {
        let v = FixedVector::from([10, 20, 30]);
        let span = Exact::<2>::new(2, 3).unwrap();
        assert_eq!(v.span(span), Err(Error::out_of_bounds(3, 3)));
    }

    // ---- fixed, rank >= 2 ----

    #[test]
    fn test_fixed_rank2_row_and_column() {
        let m = Fixed2::<i32, 2, 3>::from_nested([[1, 2, 3], [4, 5, 6]]);
        let row: Fixed2<i32, 1, 3> = m.span((Index::<1>, Full)).unwrap();
        assert_eq!(row, Fixed2::from_nested([[4, 5, 6]]));
        let col: Fixed2<i32, 2, 1> = m.span((Full, Index::<2>)).unwrap();
        assert_eq!(col, Fixed2::from_nested([[3], [6]]));
    }

    #[test]
    fn test_fixed_rank3_mixed_spans() {
        let t = Fixed3::<i32, 2, 2, 3>::from_nested([
            [[1, 2, 3], [4, 5, 6]],
            [[7, 8, 9], [10, 11, 12]],
        ]);
        let sub: Fixed3<i32, 2, 1, 2> = t.span((Full, Index::<1>, Window::<1, 2>)).unwrap();
        assert_eq!(sub, Fixed3::from_nested([[[5, 6]], [[11, 12]]]));
    }

    #[test]
    fn test_fixed_exact_failure_deep() {
        let t = Fixed2::<i32, 3, 3>::from_nested([[1, 2, 3], [4, 5, 6], [7, 8, 9]]);
        let bad = Exact::<2>::new(2, 3).unwrap();
        assert_eq!(t.span((bad, Full)), Err(Error::out_of_bounds(3, 3)));
        let good = Exact::<2>::new(1, 2).unwrap();
        assert_eq!(
            t.span((good, Full)),
            Ok(Fixed2::from_nested([[4, 5, 6], [7, 8, 9]]))
        );
    }

    // ---- dynamic, rank 1 ----

    #[test]
    fn test_dyn_vector_clips() {
        let v = Dyn1::from(vec![1, 2, 3, 4, 5]);
        assert_eq!(v.span(Span::all()), Ok(v.clone()));
        assert_eq!(v.span(Span::interval(1, 3)), Ok(Dyn1::from(vec![2, 3, 4])));
        // Far end clamped to the last element.
        assert_eq!(v.span(Span::interval(3, 10)), Ok(Dyn1::from(vec![4, 5])));
        // Start past the end: empty.
        assert_eq!(v.span(Span::interval(5, 7)), Ok(Dyn1::new()));
    }

    #[test]
    fn test_dyn_vector_all_on_empty() {
        let v = Dyn1::<i32>::new();
        assert_eq!(v.span(Span::all()), Ok(Dyn1::new()));
    }

    #[test]
    fn test_dyn_vector_typed_spans() {
        let v = Dyn1::from(vec![10, 20, 30]);
        assert_eq!(v.span(Full), Ok(v.clone()));
        assert_eq!(v.span(Index::<1>), Ok(Dyn1::from(vec![20])));
        assert_eq!(v.span(Window::<1, 2>), Ok(Dyn1::from(vec![20, 30])));
        // Typed spans clip at rank 1 just like runtime ones.
        assert_eq!(v.span(Window::<2, 4>), Ok(Dyn1::from(vec![30])));
    }

    // ---- dynamic, rank >= 2 ----

    #[test]
    fn test_dyn_rank2_extraction() {
        let t = Dyn2::from_nested(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]);
        let sub = t.span((Span::interval(0, 1), Span::interval(1, 2))).unwrap();
        assert_eq!(sub, Dyn2::from_nested(vec![vec![2, 3], vec![5, 6]]));
    }

    #[test]
    fn test_dyn_rank2_outer_is_strict() {
        let t = Dyn2::from_nested(vec![vec![1, 2], vec![3, 4]]);
        assert_eq!(
            t.span((Span::interval(1, 2), Span::all())),
            Err(Error::out_of_bounds(2, 2))
        );
    }

    #[test]
    fn test_dyn_rank2_inner_clips_jagged_rows() {
        let t = Dyn2::from_nested(vec![vec![1, 2, 3], vec![4], vec![5, 6]]);
        let sub = t.span((Span::all(), Span::interval(1, 2))).unwrap();
        // The short middle row has nothing at indices 1..=2.
        assert_eq!(
            sub,
            Dyn2::from_nested(vec![vec![2, 3], vec![], vec![6]])
        );
    }

    #[test]
    fn test_dyn_mixed_runtime_and_typed() {
        let t = Dyn3::from_nested(vec![
            vec![vec![1, 2, 3], vec![4, 5, 6]],
            vec![vec![7, 8, 9], vec![10, 11, 12]],
        ]);
        let sub = t.span((Full, Span::index(1), Window::<1, 2>)).unwrap();
        assert_eq!(
            sub,
            Dyn3::from_nested(vec![vec![vec![5, 6]], vec![vec![11, 12]]])
        );
    }

    #[test]
    fn test_dyn_all_on_empty_outer() {
        let t = Dyn2::<i32>::new();
        assert_eq!(t.span((Span::all(), Span::all())), Ok(Dyn2::new()));
    }
}
