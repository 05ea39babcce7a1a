use crate::math::mod_inverse;
use crate::types::{RecoveredParameters, SampleWindow};

/// Result of testing one candidate modulus against a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Candidate {
    /// x1 ≡ x0 (mod m): the step relation gives no multiplier
    Degenerate,
    /// x1 - x0 has no inverse modulo m
    NotInvertible,
    /// (a, c) derived from x0..x2 does not reproduce x3 or x4
    Rejected,
    Accepted(RecoveredParameters),
}

/// Derive (a, c) for modulus `m` from the first two differences and verify
/// the rest of the window.
///
/// From x1 = a*x0 + c and x2 = a*x1 + c (mod m):
/// a = (x2 - x1) * (x1 - x0)^-1, c = x1 - a*x0.
///
/// `m` must exceed x0..x3; the search range guarantees it.
pub fn examine(window: &SampleWindow, m: i64) -> Candidate {
    let [x0, x1, x2, x3, x4] = *window.samples();
    let modulus = m as i128;

    // rem_euclid: the raw differences may be negative
    let diff0 = (x1 as i128 - x0 as i128).rem_euclid(modulus) as i64;
    let diff1 = (x2 as i128 - x1 as i128).rem_euclid(modulus) as i64;

    if diff0 == 0 {
        return Candidate::Degenerate;
    }

    let Some(inv) = mod_inverse(diff0, m) else {
        return Candidate::NotInvertible;
    };

    let a = (diff1 as i128 * inv as i128).rem_euclid(modulus) as i64;
    let c = (x1 as i128 - a as i128 * x0 as i128).rem_euclid(modulus) as i64;
    let params = RecoveredParameters::new(a, c, m);

    if params.step(x1) == x2 && params.step(x2) == x3 && params.step(x3) == x4 {
        Candidate::Accepted(params)
    } else {
        Candidate::Rejected
    }
}
