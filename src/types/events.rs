use std::ops::RangeInclusive;

/// Summary sent from a search worker to the coordinating thread
/// One report per worker, sent when its range scan ends
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerReport {
    pub worker: usize,
    pub range: RangeInclusive<i64>,
    /// Candidate moduli examined
    pub tested: u64,
    /// Candidates where x1 ≡ x0, so no multiplier can be derived
    pub degenerate: u64,
    /// Candidates where x1 - x0 has no inverse
    pub not_invertible: u64,
    /// Candidates whose derived (a, c) failed verification
    pub rejected: u64,
    /// Candidates that reproduced the whole window
    pub matched: u64,
    /// Whether this worker stored the shared result
    pub claimed: bool,
}

impl WorkerReport {
    pub fn new(worker: usize, range: RangeInclusive<i64>) -> Self {
        Self {
            worker,
            range,
            tested: 0,
            degenerate: 0,
            not_invertible: 0,
            rejected: 0,
            matched: 0,
            claimed: false,
        }
    }
}

/// Totals over all worker reports of one search
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    pub workers: usize,
    pub tested: u64,
    pub degenerate: u64,
    pub not_invertible: u64,
    pub rejected: u64,
    pub matched: u64,
}

impl SearchStats {
    /// Fold a worker report into the totals
    pub fn absorb(&mut self, report: &WorkerReport) {
        self.workers += 1;
        self.tested += report.tested;
        self.degenerate += report.degenerate;
        self.not_invertible += report.not_invertible;
        self.rejected += report.rejected;
        self.matched += report.matched;
    }
}
