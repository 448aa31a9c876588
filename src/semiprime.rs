//! Semiprime queries: locate a product of exactly two primes near a target.
//!
//! The locator prefers a balanced factorization, i.e. two factors close to √target,
//! over the semiprime numerically closest to the target.

use crate::error::RangeExhausted;
use crate::factor::least_prime_factor;
use crate::integer::ExactRoots;
use crate::nt_funcs::{is_prime_with, next_prime_with, previous_prime_with};
use crate::traits::PrimalityTestConfig;
use tracing::{debug, trace};

/// Find a semiprime near the target. The returned tuple is the semiprime and its least factor.
///
/// - A target that is already a semiprime is returned as is.
/// - Otherwise, if the rounded square root of the target is a prime, its square is returned.
/// - Otherwise the result is `a * b`, where `a` is the largest prime below the rounded square
///   root and `b` the smallest prime at or above `target / a`. When `a * b` exceeds the u64
///   range, `a * a` is returned instead.
#[inline]
pub fn semiprime_near(target: u64) -> Result<(u64, u64), RangeExhausted> {
    semiprime_near_with(target, PrimalityTestConfig::default())
}

pub fn semiprime_near_with(
    target: u64,
    config: PrimalityTestConfig,
) -> Result<(u64, u64), RangeExhausted> {
    // test if the target itself has exactly two prime factors
    let a = least_prime_factor(target);
    if a > 1 && target > 0 {
        let b = target / a;
        if a == b || is_prime_with(b, config) {
            trace!(n = target, factor = a, "target is a semiprime");
            return Ok((target, a));
        }
    }

    let root = target.sqrt_round().max(2); // 2 is the smallest prime
    if is_prime_with(root, config) {
        // a prime root is at most 2^32 - 5, its square fits
        return Ok((root * root, root));
    }

    let a = match previous_prime_with(root, config) {
        Ok(p) => p,
        Err(e) => {
            debug!(n = target, error = %e, "falling back to the next prime of the root");
            next_prime_with(root, config)?
        }
    };
    let b = next_prime_with(target / a, config)?;
    match a.checked_mul(b) {
        Some(s) => {
            trace!(n = target, semiprime = s, factor = a, "semiprime near target");
            Ok((s, a))
        }
        None => {
            // a is below the square root of a u64 integer
            debug!(n = target, a, b, "product overflows, using the square of the smaller factor");
            Ok((a * a, a))
        }
    }
}

/// Return the least factor if the target is a product of exactly two primes
#[inline]
pub fn is_semiprime(target: u64) -> Option<u64> {
    is_semiprime_with(target, PrimalityTestConfig::default())
}

pub fn is_semiprime_with(target: u64, config: PrimalityTestConfig) -> Option<u64> {
    if target < 4 {
        return None;
    }
    let a = least_prime_factor(target);
    if a < target && is_prime_with(target / a, config) {
        Some(a)
    } else {
        None
    }
}

/// Find the smallest semiprime at or above the target, returned with its least factor.
#[inline]
pub fn next_semiprime(target: u64) -> Result<(u64, u64), RangeExhausted> {
    next_semiprime_with(target, PrimalityTestConfig::default())
}

pub fn next_semiprime_with(
    target: u64,
    config: PrimalityTestConfig,
) -> Result<(u64, u64), RangeExhausted> {
    let mut i = target.max(4); // 4 is the smallest semiprime
    loop {
        if let Some(a) = is_semiprime_with(i, config) {
            return Ok((i, a));
        }
        i = match i.checked_add(1) {
            Some(v) => v,
            None => {
                debug!(start = target, "no semiprime at or above start in u64 range");
                return Err(RangeExhausted { start: target });
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nt_funcs::is_prime;
    use rand::random;

    // semiprimes under 100, OEIS A001358
    const SEMIPRIMES100: [u64; 34] = [
        4, 6, 9, 10, 14, 15, 21, 22, 25, 26, 33, 34, 35, 38, 39, 46, 49, 51, 55, 57, 58, 62, 65,
        69, 74, 77, 82, 85, 86, 87, 91, 93, 94, 95,
    ];

    fn assert_semiprime(target: u64, (s, f): (u64, u64)) {
        assert!(is_prime(f), "factor {} near {} is not prime", f, target);
        assert_eq!(s % f, 0, "{} is not a factor of {}", f, s);
        assert!(is_prime(s / f), "cofactor {} near {} is not prime", s / f, target);
        assert!(f <= s / f, "{} is not the smaller factor of {}", f, s);
    }

    #[test]
    fn semiprime_near_test() {
        // small known cases
        let cases: [(u64, (u64, u64)); 14] = [
            (0, (4, 2)),
            (1, (4, 2)),
            (2, (4, 2)),
            (3, (4, 2)),
            (4, (4, 2)),
            (5, (4, 2)),
            (6, (6, 2)),
            (8, (9, 3)),
            (9, (9, 3)),
            (10, (10, 2)),
            (13, (15, 3)),
            (15, (15, 3)),
            (1000, (1147, 31)),
            (1147, (1147, 31)),
        ];
        for (target, expect) in cases {
            assert_eq!(semiprime_near(target), Ok(expect), "semiprime near {}", target);
        }

        // the product 4294967291 * 4294967311 overflows
        assert_eq!(semiprime_near(u64::MAX), Ok((18446744030759878681, 4294967291)));

        // r² + r sits just below the midpoint of r² and (r+1)², so the root rounds down to r
        let r = 4294967279u64;
        assert_eq!(semiprime_near(r * r + r), Ok((18446743927680663841, r)));
    }

    #[test]
    fn semiprime_near_property_test() {
        for target in 0..2000 {
            assert_semiprime(target, semiprime_near(target).unwrap());
        }
        for _ in 0..100 {
            let target = random::<u32>() as u64;
            assert_semiprime(target, semiprime_near(target).unwrap());
        }
        for k in 1..=16u64 {
            let target = u64::MAX / 16 * k;
            assert_semiprime(target, semiprime_near(target).unwrap());
        }
    }

    #[test]
    fn semiprime_near_prefers_balanced_factors() {
        // 1001 = 7 * 11 * 13 is closer to 1003 = 17 * 59, but 31 * 37 is balanced
        assert_eq!(semiprime_near(1001), Ok((1147, 31)));

        // the factor returned is always the least prime factor
        for target in 0..2000 {
            let (s, f) = semiprime_near(target).unwrap();
            assert_eq!(least_prime_factor(s), f, "semiprime {} near {}", s, target);
        }
    }

    #[test]
    fn is_semiprime_test() {
        for n in 0..100 {
            assert_eq!(is_semiprime(n).is_some(), SEMIPRIMES100.contains(&n), "{}", n);
        }
        assert_eq!(is_semiprime(1147), Some(31));
        assert_eq!(is_semiprime(1000003 * 1000033), Some(1000003));
        assert_eq!(is_semiprime(999983 * 999983), Some(999983));
        assert_eq!(is_semiprime(u64::MAX), None);
    }

    #[test]
    fn next_semiprime_test() {
        assert_eq!(next_semiprime(0), Ok((4, 2)));
        assert_eq!(next_semiprime(4), Ok((4, 2)));
        assert_eq!(next_semiprime(5), Ok((6, 2)));
        assert_eq!(next_semiprime(16), Ok((21, 3)));
        assert_eq!(next_semiprime(96), Ok((106, 2)));
        for w in SEMIPRIMES100.windows(2) {
            assert_eq!(next_semiprime(w[0] + 1).map(|(s, _)| s), Ok(w[1]));
        }
    }
}
