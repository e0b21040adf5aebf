// ============================================================================
// Closest Neighbor Search
// Binary search for the values surrounding a key in a sorted slice
// ============================================================================

/// Neighbors of a searched value inside a sorted slice.
///
/// `left` is the last element whose key is `<=` the value, `right` the first
/// element whose key is `>` it. Either side is `None` when the value lies
/// outside the slice's range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClosestValues<'a, T> {
    pub left: Option<&'a T>,
    pub right: Option<&'a T>,
}

impl<'a, T> ClosestValues<'a, T> {
    /// Both neighbors are present.
    #[inline]
    pub fn is_bounded(&self) -> bool {
        self.left.is_some() && self.right.is_some()
    }
}

/// Find the closest neighbors of `value` in an ascending slice.
///
/// # Example
/// ```
/// use coin_calc::numeric::find_closest_values;
///
/// let sorted = [2, 3, 6, 10, 500, 505, 1000];
/// let closest = find_closest_values(&4, &sorted);
/// assert_eq!(closest.left, Some(&3));
/// assert_eq!(closest.right, Some(&6));
/// ```
#[inline]
pub fn find_closest_values<'a, T>(value: &T, sorted: &'a [T]) -> ClosestValues<'a, T>
where
    T: PartialOrd,
{
    find_closest_values_by_key(value, sorted, |item| item)
}

/// Find the closest neighbors of `value` in a slice sorted ascending by `key`.
///
/// Runs in `O(log n)`. Elements whose key equals `value` resolve to `left`.
pub fn find_closest_values_by_key<'a, T, K, F>(
    value: &K,
    sorted: &'a [T],
    key: F,
) -> ClosestValues<'a, T>
where
    K: PartialOrd + ?Sized,
    F: Fn(&T) -> &K,
{
    let split = sorted.partition_point(|item| key(item) <= value);

    ClosestValues {
        left: split.checked_sub(1).and_then(|index| sorted.get(index)),
        right: sorted.get(split),
    }
}
