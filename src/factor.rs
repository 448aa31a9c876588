//! Least prime factor engine.
//!
//! Every query is answered by trial division over the 6k±1 wheel, optionally preceded by a
//! deterministic Miller-Rabin test so that primes never pay for the full O(√n) scan.

use crate::nt_funcs::is_prime64;
use crate::traits::FactorizationConfig;
use num_integer::{Integer, Roots};
use tracing::trace;

/// Iterator over 5, 7, 11, 13, 17, 19, ..., i.e. every integer of the form 6k±1 above 3.
/// These are the only candidates that can divide a number coprime to 6.
#[derive(Debug, Clone)]
pub struct Wheel {
    next: Option<u64>,
    step: u64,
}

impl Wheel {
    #[inline]
    pub fn new() -> Self {
        Wheel { next: Some(5), step: 2 }
    }
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Wheel {
    type Item = u64;

    #[inline]
    fn next(&mut self) -> Option<u64> {
        let current = self.next?;
        self.next = current.checked_add(self.step);
        self.step = 6 - self.step;
        Some(current)
    }
}

/// Find the first divisor of `target` among `divisors`, which must be ascending and must
/// cover every prime that could divide `target`.
///
/// Returns `Ok(p)` when the search is conclusive: `p` is the least divisor found, or
/// `target` itself when no candidate up to ⌊√target⌋ divides it. The parameter limit caps
/// the largest candidate tried; `Err(target)` is returned when the cap (or the end of the
/// iterator) stops the search before ⌊√target⌋.
pub fn trial_division<I: Iterator<Item = u64>>(
    divisors: I,
    target: u64,
    limit: Option<u64>,
) -> Result<u64, u64> {
    let tsqrt = Roots::sqrt(&target);
    let bound = limit.map_or(tsqrt, |l| l.min(tsqrt));

    for p in divisors {
        if p > bound {
            return if bound == tsqrt { Ok(target) } else { Err(target) };
        }
        if Integer::is_multiple_of(&target, &p) {
            return Ok(p);
        }
    }
    Err(target)
}

/// Return the smallest prime factor of `target`, `target` itself if it's prime, and 1 for 1.
///
/// 0 is divisible by every integer, so its least prime factor is reported as 2, which keeps
/// 0 from being mistaken for a prime.
#[inline]
pub fn least_prime_factor(target: u64) -> u64 {
    least_prime_factor_with(target, FactorizationConfig::default())
}

/// [least_prime_factor] with control on the probable prime shortcut
pub fn least_prime_factor_with(target: u64, config: FactorizationConfig) -> u64 {
    if target == 1 {
        return 1;
    }
    if target.is_even() {
        return 2;
    }
    if target % 3 == 0 {
        return 3;
    }

    if config.shortcut_applies(target) && is_prime64(target) {
        trace!(value = target, "prime by miller-rabin shortcut");
        return target;
    }

    // The wheel covers every candidate up to √target, so the search is always conclusive
    let factor = match trial_division(Wheel::new(), target, None) {
        Ok(p) | Err(p) => p,
    };
    trace!(value = target, factor, "least prime factor by trial division");
    factor
}

/// An integer paired with its least prime factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Factorization {
    pub value: u64,
    pub factor: u64,
}

impl Factorization {
    #[inline]
    pub fn is_prime(&self) -> bool {
        self.value > 1 && self.factor == self.value
    }

    /// The value divided by its least prime factor
    #[inline]
    pub fn cofactor(&self) -> u64 {
        self.value / self.factor
    }
}

/// Pair `target` with its least prime factor
#[inline]
pub fn factorize(target: u64) -> Factorization {
    factorize_with(target, FactorizationConfig::default())
}

pub fn factorize_with(target: u64, config: FactorizationConfig) -> Factorization {
    Factorization {
        value: target,
        factor: least_prime_factor_with(target, config),
    }
}
