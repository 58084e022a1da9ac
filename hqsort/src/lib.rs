//! Hybrid quicksort for `i32` slices, hqsort.
//!
//! Introspective sorting in the tradition of Musser's introsort: randomized
//! quicksort carries the average case, a depth budget caps how long it may
//! keep picking bad pivots, and once the budget runs out the remaining
//! segment is heapsorted, which bounds the worst case at O(n * log(n)).
//! Segments below a small-size threshold are insertion sorted.

mod heapsort;
mod quicksort;
mod smallsort;

/// Tuning knobs of the hybrid sort.
///
/// The defaults reproduce the classic introsort parameterization. Both fields
/// accept any value; degenerate settings only change which leaf sort does the
/// work, never the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortParams {
    /// Segments shorter than this are handed to insertion sort.
    pub insertion_threshold: usize,
    /// The quicksort depth budget is this factor times `floor(log2(len))`.
    /// Zero degrades the sort to pure heapsort.
    pub depth_multiplier: u32,
}

impl Default for SortParams {
    fn default() -> Self {
        Self {
            insertion_threshold: 16,
            depth_multiplier: 2,
        }
    }
}

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place
/// (i.e., does not allocate), and *O*(*n* \* log(*n*)) worst-case.
///
/// # Current implementation
///
/// Randomized quicksort with two escape hatches: segments shorter than 16
/// elements are insertion sorted, and after `2 * floor(log2(len))` partitions
/// on one path the remaining segment is heapsorted. Pivots are randomized to
/// avoid degenerate cases, but with a fixed seed derived from the slice
/// length, so the same input always sorts the same way.
///
/// # Examples
///
/// ```
/// let mut v = [-5, 4, 1, -3, 2];
///
/// hqsort::sort(&mut v);
/// assert!(v == [-5, -3, 1, 2, 4]);
/// ```
#[inline(always)]
pub fn sort(v: &mut [i32]) {
    sort_with(v, &SortParams::default());
}

/// Sorts the slice like [`sort`], with explicit [`SortParams`].
///
/// # Examples
///
/// ```
/// use hqsort::SortParams;
///
/// let mut v = [8, 3, 5, 1];
///
/// let params = SortParams {
///     insertion_threshold: 4,
///     depth_multiplier: 3,
/// };
/// hqsort::sort_with(&mut v, &params);
/// assert!(v == [1, 3, 5, 8]);
/// ```
pub fn sort_with(v: &mut [i32], params: &SortParams) {
    let len = v.len();

    if len < 2 {
        return;
    }

    if len < params.insertion_threshold {
        smallsort::insertion_sort(v);
        return;
    }

    // Bound the number of imbalanced partitions tolerated on any path through the recursion.
    // `len | 1` keeps `ilog2` well-defined for every possible input length. The multiply
    // saturates, an oversized multiplier just means the budget never runs out.
    let limit = params.depth_multiplier.saturating_mul((len | 1).ilog2());

    quicksort::quicksort(v, params.insertion_threshold, limit);
}
