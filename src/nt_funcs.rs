//! Primality oracle and prime neighbor search on u64 integers

use crate::error::{RangeExhausted, RangeUnderflow};
use crate::factor::{least_prime_factor, trial_division, Wheel};
use crate::tables::{SMALL_PRIMES, WITNESS64};
use crate::traits::{PrimalityMethod, PrimalityTestConfig, PrimalityUtils};
use std::convert::TryFrom;
use tracing::{debug, trace};

/// This function does fast primality test on a u64 integer. It's based on
/// deterministic Miller-rabin tests, so the answer is exact over the whole range.
pub fn is_prime64(target: u64) -> bool {
    // shortcuts
    if target < 1 {
        return false;
    }
    if target & 1 == 0 {
        return target == 2;
    }

    // first find in the prime list
    if let Ok(u) = u8::try_from(target) {
        return SMALL_PRIMES.binary_search(&u).is_ok();
    }

    // Then do a deterministic Miller-rabin test
    // The collection of witnesses are from http://miller-rabin.appspot.com/
    if u16::try_from(target).is_ok() {
        // 2, 3 for u16 range
        return target.is_sprp(2) && target.is_sprp(3);
    }
    if u32::try_from(target).is_ok() {
        // 2, 7, 61 for u32 range
        return target.is_sprp(2) && target.is_sprp(7) && target.is_sprp(61);
    }

    WITNESS64.iter().all(|&x| target.is_sprp(x))
}

/// Primality test by trial division with 2, 3 and the 6k±1 wheel, without any probable prime test.
pub fn is_prime_trial(target: u64) -> bool {
    match target {
        0 | 1 => false,
        2 | 3 => true,
        _ if target % 2 == 0 || target % 3 == 0 => false,
        _ => trial_division(Wheel::new(), target, None) == Ok(target),
    }
}

/// Baillie-PSW primality test. There's no pseudoprime to this test under 2^64.
pub fn is_prime_bpsw(target: u64) -> bool {
    if let Ok(u) = u8::try_from(target) {
        return SMALL_PRIMES.binary_search(&u).is_ok();
    }
    if SMALL_PRIMES.iter().any(|&p| target % p as u64 == 0) {
        return false;
    }
    target.is_sprp(2) && target.is_slprp(None, None)
}

/// Test if the target is a prime, with the default deterministic Miller-Rabin test
#[inline]
pub fn is_prime(target: u64) -> bool {
    is_prime_with(target, PrimalityTestConfig::default())
}

/// Test if the target is a prime with the chosen method. All methods agree on every u64,
/// the configuration only trades speed between them.
pub fn is_prime_with(target: u64, config: PrimalityTestConfig) -> bool {
    match config.method {
        PrimalityMethod::LeastFactor => target > 1 && least_prime_factor(target) == target,
        PrimalityMethod::TrialDivision => is_prime_trial(target),
        PrimalityMethod::MillerRabin => is_prime64(target),
        PrimalityMethod::Bpsw => is_prime_bpsw(target),
    }
}

/// Find the smallest prime at or above the target. Returns the target itself if it's a prime.
#[inline]
pub fn next_prime(target: u64) -> Result<u64, RangeExhausted> {
    next_prime_with(target, PrimalityTestConfig::default())
}

pub fn next_prime_with(target: u64, config: PrimalityTestConfig) -> Result<u64, RangeExhausted> {
    if target < 2 {
        return Ok(2);
    }
    if is_prime_with(target, config) {
        return Ok(target);
    }

    // skip even numbers, u64::MAX itself is composite
    let mut i = target | 1;
    while i < u64::MAX {
        if is_prime_with(i, config) {
            trace!(start = target, prime = i, "next prime");
            return Ok(i);
        }
        i += 2;
    }

    debug!(start = target, "no prime at or above start in u64 range");
    Err(RangeExhausted { start: target })
}

/// Find the largest prime at or below the target. Returns the target itself if it's a prime.
#[inline]
pub fn previous_prime(target: u64) -> Result<u64, RangeUnderflow> {
    previous_prime_with(target, PrimalityTestConfig::default())
}

pub fn previous_prime_with(
    target: u64,
    config: PrimalityTestConfig,
) -> Result<u64, RangeUnderflow> {
    if target < 2 {
        debug!(start = target, "no prime below 2");
        return Err(RangeUnderflow { start: target });
    }
    if is_prime_with(target, config) {
        return Ok(target);
    }

    // skip even numbers, 2 is the only even prime and was handled above
    let mut i = if target % 2 == 0 { target - 1 } else { target };
    while i >= 3 {
        if is_prime_with(i, config) {
            trace!(start = target, prime = i, "previous prime");
            return Ok(i);
        }
        i -= 2;
    }

    debug!(start = target, "no prime below 2");
    Err(RangeUnderflow { start: target })
}

/// The primes closest to an integer from both sides
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimeNeighbors {
    /// Largest prime at or below the integer, None if it's smaller than 2
    pub previous: Option<u64>,
    /// Smallest prime at or above the integer, None if it's larger than the largest u64 prime
    pub next: Option<u64>,
}

impl PrimeNeighbors {
    /// Both neighbors collapse onto the integer when it's a prime
    #[inline]
    pub fn is_prime(&self) -> bool {
        self.previous.is_some() && self.previous == self.next
    }
}

/// Find the primes at or below and at or above the target
#[inline]
pub fn prime_neighbors(target: u64) -> PrimeNeighbors {
    prime_neighbors_with(target, PrimalityTestConfig::default())
}

pub fn prime_neighbors_with(target: u64, config: PrimalityTestConfig) -> PrimeNeighbors {
    let previous = previous_prime_with(target, config).ok();
    if previous == Some(target) {
        return PrimeNeighbors { previous, next: previous };
    }
    PrimeNeighbors {
        previous,
        next: next_prime_with(target, config).ok(),
    }
}
