//! Exact primality, least prime factor, prime neighbor search and semiprime location
//! over the full range of `u64`.
//!
//! ```
//! use near_prime::{is_prime, next_prime, previous_prime, semiprime_near};
//!
//! assert!(is_prime(5555555555555503));
//! assert_eq!(next_prime(7777), Ok(7789));
//! assert_eq!(previous_prime(22), Ok(19));
//! assert_eq!(semiprime_near(1000), Ok((1147, 31)));
//! ```

mod error;
mod integer;
mod primality;
mod tables;
mod traits;

pub mod factor;
pub mod fixture;
pub mod nt_funcs;
pub mod semiprime;
pub mod sieve;

pub use error::{Error, RangeExhausted, RangeUnderflow, Result};
pub use factor::{factorize, least_prime_factor, Factorization};
pub use nt_funcs::{is_prime, next_prime, prime_neighbors, previous_prime, PrimeNeighbors};
pub use semiprime::{is_semiprime, next_semiprime, semiprime_near};
pub use tables::MAX_U64_PRIME;
pub use traits::{FactorizationConfig, PrimalityMethod, PrimalityTestConfig, PrimalityUtils};

pub mod detail {
    pub use super::primality::LucasUtils;
    pub use super::tables::SMALL_PRIMES;
}
