use crate::recovery::RecoveryError;
use crate::types::RecoveredParameters;

/// Forward linear congruential generator: next = (a * current + c) mod m
/// Yields the current state, then advances, so the seed is the first output.
#[derive(Debug, Clone)]
pub struct Lcg {
    params: RecoveredParameters,
    state: i64,
}

impl Lcg {
    /// Create a generator; a, c and the seed must lie in [0, m-1]
    pub fn new(params: RecoveredParameters, seed: i64) -> Result<Self, RecoveryError> {
        let m = params.modulus;
        if m < 1 {
            return Err(RecoveryError::InvalidGenerator(format!(
                "modulus must be >= 1, got {}",
                m
            )));
        }

        let in_range = |v: i64| (0..m).contains(&v);
        if !in_range(params.multiplier) {
            return Err(RecoveryError::InvalidGenerator(format!(
                "multiplier {} outside [0, {})",
                params.multiplier, m
            )));
        }
        if !in_range(params.increment) {
            return Err(RecoveryError::InvalidGenerator(format!(
                "increment {} outside [0, {})",
                params.increment, m
            )));
        }
        if !in_range(seed) {
            return Err(RecoveryError::InvalidGenerator(format!(
                "seed {} outside [0, {})",
                seed, m
            )));
        }

        Ok(Self {
            params,
            state: seed,
        })
    }

    /// Return the current value and advance one step
    pub fn next_value(&mut self) -> i64 {
        let current = self.state;
        self.state = self.params.step(current);
        current
    }
}

impl Iterator for Lcg {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        Some(self.next_value())
    }
}
