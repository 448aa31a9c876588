//! Precomputed tables

/// All primes below 256
pub const SMALL_PRIMES: [u8; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// The largest prime below 2^64
pub const MAX_U64_PRIME: u64 = 18446744073709551557;

/// Witnesses that make the Miller-Rabin test deterministic for all 64-bit integers,
/// from <http://miller-rabin.appspot.com/>
pub const WITNESS64: [u64; 7] = [2, 325, 9375, 28178, 450775, 9780504, 1795265022];
