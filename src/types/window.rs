use std::fmt;

use crate::recovery::RecoveryError;

/// Number of consecutive generator outputs in a window
pub const WINDOW_LEN: usize = 5;

/// Five consecutive observed outputs of an unknown generator
/// Immutable once constructed; samples are always non-negative
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleWindow {
    samples: [i64; WINDOW_LEN],
}

impl SampleWindow {
    /// Create a window, rejecting negative samples
    pub fn new(samples: [i64; WINDOW_LEN]) -> Result<Self, RecoveryError> {
        if let Some((index, &value)) = samples.iter().enumerate().find(|(_, v)| **v < 0) {
            return Err(RecoveryError::NegativeSample { index, value });
        }
        Ok(Self { samples })
    }

    /// Create a window from a slice that must hold exactly five samples
    pub fn from_slice(samples: &[i64]) -> Result<Self, RecoveryError> {
        let samples: [i64; WINDOW_LEN] =
            samples.try_into().map_err(|_| RecoveryError::WindowLength {
                expected: WINDOW_LEN,
                actual: samples.len(),
            })?;
        Self::new(samples)
    }

    pub fn samples(&self) -> &[i64; WINDOW_LEN] {
        &self.samples
    }

    /// Last observed sample, the one a prediction steps past
    pub fn last(&self) -> i64 {
        self.samples[WINDOW_LEN - 1]
    }

    /// Largest of x0..x3
    ///
    /// x4 is only ever a verification target, so it does not raise the
    /// lower end of the candidate range.
    pub fn largest_leading(&self) -> i64 {
        self.samples[..WINDOW_LEN - 1]
            .iter()
            .copied()
            .max()
            .unwrap_or(0)
    }

    /// Consecutive (current, next) pairs: (x0,x1) .. (x3,x4)
    pub fn transitions(&self) -> impl Iterator<Item = (i64, i64)> + '_ {
        self.samples.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl fmt::Display for SampleWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x0, x1, x2, x3, x4] = self.samples;
        write!(f, "[{}, {}, {}, {}, {}]", x0, x1, x2, x3, x4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_largest_ignores_last_sample() {
        let window = SampleWindow::new([3, 9, 4, 1, 500]).unwrap();
        assert_eq!(window.largest_leading(), 9);
        assert_eq!(window.last(), 500);
    }

    #[test]
    fn test_rejects_negative_sample() {
        let err = SampleWindow::new([1, 2, -3, 4, 5]).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::NegativeSample { index: 2, value: -3 }
        ));
    }

    #[test]
    fn test_from_slice_length() {
        assert!(SampleWindow::from_slice(&[1, 2, 3, 4, 5]).is_ok());

        let err = SampleWindow::from_slice(&[]).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::WindowLength { expected: 5, actual: 0 }
        ));

        let err = SampleWindow::from_slice(&[1, 2, 3, 4, 5, 6]).unwrap_err();
        assert!(matches!(
            err,
            RecoveryError::WindowLength { expected: 5, actual: 6 }
        ));
    }

    #[test]
    fn test_transitions() {
        let window = SampleWindow::new([1, 2, 3, 4, 5]).unwrap();
        let pairs: Vec<_> = window.transitions().collect();
        assert_eq!(pairs, vec![(1, 2), (2, 3), (3, 4), (4, 5)]);
    }
}
