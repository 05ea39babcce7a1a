//! LCG parameter recovery
//!
//! Given five consecutive outputs of `x' = (a*x + c) mod m`, search a bounded
//! range of moduli in parallel for `(a, c, m)` reproducing all five, then
//! step once past the last sample.

pub mod candidate;
pub mod claim;
pub mod error;
pub mod partition;
pub mod recoverer;
pub mod worker;

pub use error::RecoveryError;
pub use partition::partition_range;
pub use recoverer::{LcgRecoverer, SearchReport};

use crate::types::{SampleWindow, SearchOutcome};

/// Search moduli up to `bound` with default worker settings
pub fn find_parameters(window: SampleWindow, bound: i64) -> error::Result<SearchOutcome> {
    Ok(LcgRecoverer::with_bound(bound)?.find_parameters(window))
}

/// Predict the output after x4, or `None` if no parameters fit within `bound`
/// Callers without a specific bound pass `config::DEFAULT_BOUND`.
///
/// The prediction is `(a*x4 + c) mod m`, one step past the last sample. It is
/// never x4 itself echoed back from x3.
pub fn predict_next(window: SampleWindow, bound: i64) -> error::Result<Option<i64>> {
    Ok(LcgRecoverer::with_bound(bound)?.predict_next(window))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_BOUND;

    #[test]
    fn test_free_functions_match_recoverer() {
        let window = SampleWindow::new([157, 5054, 25789, 13214, 16605]).unwrap();

        let outcome = find_parameters(window, DEFAULT_BOUND).unwrap();
        assert_eq!(outcome.parameters().map(|p| p.modulus), Some(32768));
        assert_eq!(predict_next(window, DEFAULT_BOUND).unwrap(), Some(23422));
    }

    #[test]
    fn test_negative_bound_fails_fast() {
        let window = SampleWindow::new([1, 2, 3, 4, 5]).unwrap();
        assert_eq!(
            find_parameters(window, -5),
            Err(RecoveryError::NegativeBound(-5))
        );
        assert_eq!(
            predict_next(window, -1),
            Err(RecoveryError::NegativeBound(-1))
        );
    }

    #[test]
    fn test_max_sample_leaves_no_candidates() {
        let window = SampleWindow::new([i64::MAX, 1, 2, 3, 4]).unwrap();
        assert_eq!(find_parameters(window, DEFAULT_BOUND), Ok(SearchOutcome::NotFound));
        assert_eq!(predict_next(window, i64::MAX), Ok(None));
    }

    #[test]
    fn test_small_bound_is_not_found() {
        let window = SampleWindow::new([10, 20, 30, 40, 50]).unwrap();
        assert_eq!(find_parameters(window, 40), Ok(SearchOutcome::NotFound));
        assert_eq!(predict_next(window, 40), Ok(None));
    }
}
