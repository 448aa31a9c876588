//! Sieve of Eratosthenes over odd numbers, used as a reference list of small primes

use bitvec::bitvec;

/// Returns all primes **below** limit. The primes are sorted.
pub fn primes(limit: u64) -> Vec<u64> {
    if limit <= 2 {
        return Vec::new();
    }

    // bit i stands for 2i+1, set when it's known to be composite
    let mut sieve = bitvec![0; (limit / 2) as usize];
    sieve.set(0, true); // 1 is not a prime

    let mut p = 3u64;
    while p * p < limit {
        if !sieve[(p / 2) as usize] {
            for multi in (p * p..limit).step_by(2 * p as usize) {
                sieve.set((multi / 2) as usize, true);
            }
        }
        p += 2;
    }

    let mut list = Vec::with_capacity(sieve.count_zeros() + 1);
    list.push(2);
    list.extend(sieve.iter_zeros().map(|x| (x as u64) * 2 + 1));
    list
}
