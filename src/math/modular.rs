/// Extended Euclidean algorithm
///
/// Returns `(g, x, y)` such that `a*x + b*y == g`. The coefficients are
/// signed and may be negative; only the caller reduces them.
/// `extended_gcd(0, b)` is `(b, 0, 1)`.
pub fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    let (mut old_r, mut r) = (a, b);
    let (mut old_s, mut s) = (1i64, 0i64);
    let (mut old_t, mut t) = (0i64, 1i64);

    while r != 0 {
        let q = old_r / r;
        (old_r, r) = (r, old_r - q * r);
        (old_s, s) = (s, old_s - q * s);
        (old_t, t) = (t, old_t - q * t);
    }

    (old_r, old_s, old_t)
}

/// Modular inverse of `a` modulo `m`
///
/// Returns `None` when `gcd(a, m) != 1`. During a parameter search this is an
/// expected outcome, so it is not an error. The result lies in `[0, m-1]`.
///
/// # Panics
/// Panics if `m <= 0`.
pub fn mod_inverse(a: i64, m: i64) -> Option<i64> {
    assert!(m > 0, "modulus must be positive, got {}", m);

    let (g, x, _) = extended_gcd(a.rem_euclid(m), m);
    if g != 1 {
        return None;
    }

    // Bring a possibly negative coefficient into [0, m-1]
    Some((x % m + m) % m)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gcd(a: i64, b: i64) -> i64 {
        if b == 0 { a.abs() } else { gcd(b, a % b) }
    }

    #[test]
    fn test_zero_base_case() {
        assert_eq!(extended_gcd(0, 17), (17, 0, 1));
        assert_eq!(extended_gcd(0, 1), (1, 0, 1));
    }

    #[test]
    fn test_bezout_identity() {
        for a in 0..60i64 {
            for b in 1..60i64 {
                let (g, x, y) = extended_gcd(a, b);
                assert_eq!(a * x + b * y, g, "a={} b={}", a, b);
                assert_eq!(g, gcd(a, b), "a={} b={}", a, b);
            }
        }
    }

    #[test]
    fn test_bezout_large_values() {
        let (g, x, y) = extended_gcd(1_000_000_007, 998_244_353);
        assert_eq!(g, 1);
        assert_eq!(
            1_000_000_007i128 * x as i128 + 998_244_353i128 * y as i128,
            1
        );
    }

    #[test]
    fn test_known_inverse() {
        assert_eq!(mod_inverse(3, 11), Some(4));
        assert_eq!(mod_inverse(10, 17), Some(12));
        assert_eq!(mod_inverse(1, 65537), Some(1));
    }

    #[test]
    fn test_inverse_exists_iff_coprime() {
        for m in 1..80i64 {
            for a in 0..m {
                match mod_inverse(a, m) {
                    Some(inv) => {
                        assert_eq!(gcd(a, m), 1, "a={} m={}", a, m);
                        assert!((0..m).contains(&inv));
                        assert_eq!((a * inv) % m, 1 % m, "a={} m={}", a, m);
                    }
                    None => assert_ne!(gcd(a, m), 1, "a={} m={}", a, m),
                }
            }
        }
    }

    #[test]
    fn test_negative_input_is_reduced() {
        // -3 ≡ 8 (mod 11), and 8 * 7 = 56 ≡ 1
        assert_eq!(mod_inverse(-3, 11), Some(7));
    }

    #[test]
    fn test_even_modulus_rejects_even_values() {
        assert_eq!(mod_inverse(2, 65536), None);
        assert_eq!(mod_inverse(0, 65536), None);
        assert!(mod_inverse(3, 65536).is_some());
    }

    #[test]
    #[should_panic(expected = "modulus must be positive")]
    fn test_zero_modulus_panics() {
        let _ = mod_inverse(3, 0);
    }
}
