//! Recursive quicksort with the Hoare partition scheme and a fixed middle index pivot.

use std::cmp::Ordering;

sort_impl!("rust_hoare_quicksort_unstable");

/// Sorts the whole slice in place. An empty slice is left as is.
#[inline]
pub fn sort(v: &mut [i32]) {
    if let Some(high) = v.len().checked_sub(1) {
        quick_sort(v, 0, high);
    }
}

#[inline]
pub fn sort_by<F>(v: &mut [i32], compare: F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    if let Some(high) = v.len().checked_sub(1) {
        quick_sort_by(v, 0, high, compare);
    }
}

/// Sorts the inclusive sub-range `v[low..=high]` in place. Elements outside the range are not
/// touched.
///
/// `low >= high` is a no-op, that covers both the empty and the single element range.
///
/// # Panics
///
/// Panics if `low < high` and `high` is out of bounds for `v`.
#[inline]
pub fn quick_sort(v: &mut [i32], low: usize, high: usize) {
    quicksort(v, low, high, &mut |a, b| a.lt(b));
}

/// Like [`quick_sort`] but orders by `compare`.
///
/// If `compare` does not implement a total order the result is unspecified and the call may
/// panic, but `v` always keeps its original set of elements.
#[inline]
pub fn quick_sort_by<F>(v: &mut [i32], low: usize, high: usize, mut compare: F)
where
    F: FnMut(&i32, &i32) -> Ordering,
{
    quicksort(v, low, high, &mut |a, b| compare(a, b) == Ordering::Less);
}

////////////////////////////////////////////////////////////////////////////////
// Sorting
////////////////////////////////////////////////////////////////////////////////

fn quicksort<F>(v: &mut [i32], mut low: usize, mut high: usize, is_less: &mut F)
where
    F: FnMut(&i32, &i32) -> bool,
{
    loop {
        if low >= high {
            return;
        }

        let index = partition(v, low, high, is_less);

        // low < index <= high, so [low, index - 1] and [index, high] are both strictly smaller.
        // Recurse into the shorter side and continue with the longer one, this keeps the stack
        // depth at O(log n).
        if index - low < high - index + 1 {
            quicksort(v, low, index - 1, is_less);
            low = index;
        } else {
            quicksort(v, index, high, is_less);
            high = index - 1;
        }
    }
}

/// Hoare partition of `v[low..=high]` around the value at the middle index.
///
/// Returns `index` such that every element in `[low, index)` is not greater than the pivot and
/// every element in `[index, high]` is not less than it.
#[cfg_attr(feature = "no_inline_sub_functions", inline(never))]
fn partition<F>(v: &mut [i32], low: usize, high: usize, is_less: &mut F) -> usize
where
    F: FnMut(&i32, &i32) -> bool,
{
    // Read once, the swaps below may move the element that sits at the midpoint.
    let pivot = v[low + (high - low) / 2];

    let mut i = low;
    let mut j = high;
    while i <= j {
        // Find the first element not less than the pivot.
        while i < high && is_less(&v[i], &pivot) {
            i += 1;
        }

        // Find the last element not greater than the pivot.
        while j > low && is_less(&pivot, &v[j]) {
            j -= 1;
        }

        if i <= j {
            v.swap(i, j);
            i += 1;
            if j == low {
                // i > j already, j - 1 could underflow.
                break;
            }
            j -= 1;
        }
    }

    // Only a comparison function that is not a total order can move i past high.
    i.min(high)
}
