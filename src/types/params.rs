use std::fmt;

use super::window::SampleWindow;

/// Multiplier, increment and modulus of a linear congruential generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecoveredParameters {
    pub multiplier: i64,
    pub increment: i64,
    pub modulus: i64,
}

impl RecoveredParameters {
    pub fn new(multiplier: i64, increment: i64, modulus: i64) -> Self {
        Self {
            multiplier,
            increment,
            modulus,
        }
    }

    /// One generator step: (a*x + c) mod m, always in [0, m-1]
    /// Uses 128-bit intermediates so a*x cannot wrap.
    pub fn step(&self, x: i64) -> i64 {
        let m = self.modulus as i128;
        let next = (self.multiplier as i128 * x as i128 + self.increment as i128).rem_euclid(m);
        next as i64
    }

    /// True if every transition in the window follows these parameters
    pub fn reproduces(&self, window: &SampleWindow) -> bool {
        window
            .samples()
            .iter()
            .all(|&x| x < self.modulus)
            && window.transitions().all(|(x, next)| self.step(x) == next)
    }
}

impl fmt::Display for RecoveredParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "a={} c={} m={}",
            self.multiplier, self.increment, self.modulus
        )
    }
}

/// Terminal result of one parameter search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    Found(RecoveredParameters),
    NotFound,
}

impl SearchOutcome {
    pub fn is_found(&self) -> bool {
        matches!(self, SearchOutcome::Found(_))
    }

    pub fn parameters(&self) -> Option<&RecoveredParameters> {
        match self {
            SearchOutcome::Found(params) => Some(params),
            SearchOutcome::NotFound => None,
        }
    }
}
