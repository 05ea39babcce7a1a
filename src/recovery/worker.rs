use std::ops::RangeInclusive;

use super::candidate::{Candidate, examine};
use super::claim::SharedClaim;
use crate::types::{SampleWindow, WorkerReport};

/// Scan one sub-range of moduli in increasing order
///
/// Every accepted candidate is offered to `claim`. Without `early_exit` the
/// whole range is scanned even after another worker has claimed.
pub fn scan_range(
    worker: usize,
    window: &SampleWindow,
    range: RangeInclusive<i64>,
    claim: &SharedClaim,
    early_exit: bool,
) -> WorkerReport {
    let mut report = WorkerReport::new(worker, range.clone());

    for m in range {
        if early_exit && claim.is_claimed() {
            break;
        }

        report.tested += 1;
        match examine(window, m) {
            Candidate::Degenerate => report.degenerate += 1,
            Candidate::NotInvertible => report.not_invertible += 1,
            Candidate::Rejected => report.rejected += 1,
            Candidate::Accepted(params) => {
                report.matched += 1;
                if claim.try_claim(params) {
                    report.claimed = true;
                }
            }
        }
    }

    report
}
