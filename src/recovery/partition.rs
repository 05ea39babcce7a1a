use std::ops::RangeInclusive;

/// Split `[start, bound]` into at most `workers` contiguous, non-overlapping
/// sub-ranges of equal (ceiling-divided) width. The last range may be shorter,
/// and fewer than `workers` ranges come back when the range is small.
///
/// Returns an empty list when `start > bound` or `workers == 0`.
pub fn partition_range(start: i64, bound: i64, workers: usize) -> Vec<RangeInclusive<i64>> {
    if start > bound || workers == 0 {
        return Vec::new();
    }

    // i128 keeps `bound - start + 1` and `i * width` from wrapping near i64::MAX
    let len = bound as i128 - start as i128 + 1;
    let count = workers as i128;
    let width = (len + count - 1) / count;

    let mut ranges = Vec::with_capacity(workers);
    for i in 0..count {
        let lo = start as i128 + i * width;
        if lo > bound as i128 {
            break;
        }
        let hi = (lo + width - 1).min(bound as i128);
        ranges.push(lo as i64..=hi as i64);
    }

    ranges
}
