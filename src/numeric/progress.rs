// ============================================================================
// Progress Percentage
// Position of a value between two bounds, in whole percent
// ============================================================================

use num_bigint::BigInt;
use num_traits::{Signed, ToPrimitive};

/// Progress of `current` between `start` and `end`, clamped to `0..=100`.
///
/// Returns `None` when a bound is missing or `start >= end`. The percentage
/// is computed on big integers and truncated toward zero before clamping.
///
/// # Example
/// ```
/// use coin_calc::numeric::get_progress;
/// use num_bigint::BigInt;
///
/// let (start, end) = (BigInt::from(10), BigInt::from(50));
/// assert_eq!(get_progress(&BigInt::from(30), Some(&start), Some(&end)), Some(50));
/// ```
pub fn get_progress(current: &BigInt, start: Option<&BigInt>, end: Option<&BigInt>) -> Option<u8> {
    let (start, end) = match (start, end) {
        (Some(start), Some(end)) if start < end => (start, end),
        _ => return None,
    };

    let percentage = (current - start) * 100u32 / (end - start);

    if percentage.is_negative() {
        Some(0)
    } else {
        Some(percentage.to_u8().map_or(100, |p| p.min(100)))
    }
}
