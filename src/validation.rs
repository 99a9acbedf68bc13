/// Returns `true` if `v` is in non-decreasing order. Empty and single element slices are sorted.
pub fn is_sorted(v: &[i32]) -> bool {
    v.windows(2).all(|w| w[0] <= w[1])
}

/// Same as [`is_sorted`] but only looks at the inclusive sub-range `v[low..=high]`.
///
/// `low >= high` is trivially sorted.
///
/// # Panics
///
/// Panics if `low < high` and `high` is out of bounds for `v`.
pub fn is_sorted_range(v: &[i32], low: usize, high: usize) -> bool {
    if low >= high {
        return true;
    }

    is_sorted(&v[low..=high])
}
