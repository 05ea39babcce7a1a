use std::thread;

use tracing::{debug, info};

use super::claim::SharedClaim;
use super::error::{RecoveryError, Result};
use super::partition::partition_range;
use super::worker::scan_range;
use crate::config::{MAX_WORKERS, SearchConfig};
use crate::types::{SampleWindow, SearchOutcome, SearchStats, WorkerReport};

/// Outcome of a search together with per-worker totals
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

/// Brute-force LCG parameter recovery over a bounded modulus range
///
/// The range `[max(x0..x3) + 1, bound]` is split into contiguous sub-ranges,
/// one thread each. The first worker to verify a modulus stores its
/// parameters; which modulus that is depends on scheduling when several
/// moduli fit the window, so it is not necessarily the smallest.
pub struct LcgRecoverer {
    config: SearchConfig,
}

impl LcgRecoverer {
    pub fn new(config: SearchConfig) -> Result<Self> {
        if config.bound < 0 {
            return Err(RecoveryError::NegativeBound(config.bound));
        }
        if config.workers == 0 {
            return Err(RecoveryError::NoWorkers);
        }
        if config.workers > MAX_WORKERS {
            return Err(RecoveryError::TooManyWorkers {
                requested: config.workers,
                max: MAX_WORKERS,
            });
        }
        Ok(Self { config })
    }

    /// Recoverer with default workers and the given bound
    pub fn with_bound(bound: i64) -> Result<Self> {
        Self::new(SearchConfig {
            bound,
            ..SearchConfig::default()
        })
    }

    pub fn find_parameters(&self, window: SampleWindow) -> SearchOutcome {
        self.find_parameters_with_stats(window).outcome
    }

    /// Run the search and return the outcome with aggregated worker reports
    pub fn find_parameters_with_stats(&self, window: SampleWindow) -> SearchReport {
        let bound = self.config.bound;

        // A sample at i64::MAX leaves no representable modulus above it
        let start = match window.largest_leading().checked_add(1) {
            Some(start) if start <= bound => start,
            _ => {
                info!(%window, bound, "No candidate moduli in range");
                return SearchReport {
                    outcome: SearchOutcome::NotFound,
                    stats: SearchStats::default(),
                };
            }
        };

        let ranges = partition_range(start, bound, self.config.workers);
        let early_exit = self.config.early_exit;
        info!(
            %window,
            start,
            bound,
            workers = ranges.len(),
            early_exit,
            "Starting modulus search"
        );

        let claim = SharedClaim::new();
        let (report_tx, report_rx) = crossbeam_channel::unbounded::<WorkerReport>();

        thread::scope(|scope| {
            for (worker, range) in ranges.into_iter().enumerate() {
                let report_tx = report_tx.clone();
                let claim = &claim;
                scope.spawn(move || {
                    let report = scan_range(worker, &window, range, claim, early_exit);
                    // Receiver outlives the scope, so this cannot fail
                    let _ = report_tx.send(report);
                });
            }
        });
        drop(report_tx);

        let mut reports: Vec<WorkerReport> = report_rx.iter().collect();
        reports.sort_by_key(|r| r.worker);

        let mut stats = SearchStats::default();
        for report in &reports {
            debug!(
                worker = report.worker,
                range = ?report.range,
                tested = report.tested,
                degenerate = report.degenerate,
                not_invertible = report.not_invertible,
                rejected = report.rejected,
                matched = report.matched,
                claimed = report.claimed,
                "Worker finished"
            );
            stats.absorb(report);
        }

        let outcome = match claim.into_inner() {
            Some(params) => SearchOutcome::Found(params),
            None => SearchOutcome::NotFound,
        };

        info!(
            found = outcome.is_found(),
            tested = stats.tested,
            matched = stats.matched,
            "Modulus search finished"
        );

        SearchReport { outcome, stats }
    }

    /// Next generator output after x4, or `None` when no parameters fit
    ///
    /// Steps from the last sample, `(a*x4 + c) mod m`, so the result is the
    /// sixth output of the generator. Stepping from x3 would only repeat x4:
    /// for the window `157 5054 25789 13214 16605` this returns 23422, not 16605.
    pub fn predict_next(&self, window: SampleWindow) -> Option<i64> {
        self.find_parameters(window)
            .parameters()
            .map(|params| params.step(window.last()))
    }
}
