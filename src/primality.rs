use crate::integer::ExactRoots;
use crate::traits::PrimalityUtils;
use num_modular::{ModularCoreOps, ModularPow, ModularUnaryOps};

/// Utilities for the Lucas pseudoprime test
pub trait LucasUtils {
    /// Find Lucas sequence to n with modulo m, i.e. $U_n(P,Q)$ mod m and $V_n(P,Q)$ mod m
    /// Reference: <https://en.wikipedia.org/wiki/Lucas_sequence>
    ///            Peter Hackman, "Elementary Number Theory", section "L.XVII Scalar" <http://hackmat.se/kurser/TATM54/booktot.pdf>
    fn lucasm(p: usize, q: isize, m: Self, n: Self) -> (Self, Self)
    where
        Self: Sized;

    /// Find proper parameters P and Q of Lucas pseudoprime test for n, such that Jacobi(D|n) is -1,
    /// using Selfridge's method (referred as method A by Baillie).
    /// Returns (0, 0) if n is found to be composite along the way.
    fn pq_selfridge(n: &Self) -> (usize, isize);
}

/// Reduce a signed integer into the range [0, m)
#[inline]
fn signed_residue(v: isize, m: &u64) -> u64 {
    if v >= 0 {
        v as u64 % m
    } else {
        (v.unsigned_abs() as u64 % m).negm(m)
    }
}

/// Calculate the Jacobi symbol (a|n) for odd n
pub(crate) fn jacobi(a: u64, n: u64) -> i8 {
    debug_assert!(n % 2 == 1);
    let (mut a, mut n) = (a % n, n);
    let mut t = 1i8;
    while a != 0 {
        while a % 2 == 0 {
            a /= 2;
            if matches!(n % 8, 3 | 5) {
                t = -t;
            }
        }
        std::mem::swap(&mut a, &mut n);
        if a % 4 == 3 && n % 4 == 3 {
            t = -t;
        }
        a %= n;
    }
    if n == 1 {
        t
    } else {
        0
    }
}

impl LucasUtils for u64 {
    fn lucasm(p: usize, q: isize, m: u64, n: u64) -> (u64, u64) {
        let p = p as u64 % m;
        let q = signed_residue(q, &m);

        let mut uk: u64 = 0; // U(k)
        let mut uk1 = 1 % m; // U(k+1)
        let two = 2 % m;

        for i in (0..u64::BITS - n.leading_zeros()).rev() {
            if (n >> i) & 1 == 1 {
                // k' = 2k+1
                // U(k'+1) = U(2k+2) = PU(k+1)² - 2*QU(k+1)U(k)
                let t1 = p.mulm(uk1, &m).mulm(uk1, &m);
                let t2 = two.mulm(q, &m).mulm(uk1, &m).mulm(uk, &m);
                let new_uk1 = t1.subm(t2, &m);
                // U(k') = U(2k+1) = U(k+1)² - QU(k)²
                let t1 = uk1.mulm(uk1, &m);
                let t2 = q.mulm(uk, &m).mulm(uk, &m);
                let new_uk = t1.subm(t2, &m);
                uk1 = new_uk1;
                uk = new_uk;
            } else {
                // k' = 2k
                // U(k'+1) = U(2k+1) = U(k+1)² - QU(k)²
                let t1 = uk1.mulm(uk1, &m);
                let t2 = q.mulm(uk, &m).mulm(uk, &m);
                let new_uk1 = t1.subm(t2, &m);
                // U(k') = U(2k) = 2U(k+1)U(k) - PU(k)²
                let t1 = two.mulm(uk1, &m).mulm(uk, &m);
                let t2 = p.mulm(uk, &m).mulm(uk, &m);
                let new_uk = t1.subm(t2, &m);
                uk1 = new_uk1;
                uk = new_uk;
            }
        }

        let vk = two.mulm(uk1, &m).subm(p.mulm(uk, &m), &m);
        (uk, vk)
    }

    fn pq_selfridge(n: &u64) -> (usize, isize) {
        let mut d: u64 = 5;
        let mut neg = false;
        loop {
            // check if n is a square number after several trials
            if d == 13 && n.is_square() {
                break (0, 0);
            }

            let sd = if neg { (d % n).negm(n) } else { d % n };
            let j = jacobi(sd, *n);
            if j == 0 && d != *n {
                break (0, 0);
            } // modification from Baillie, see https://oeis.org/A217120/a217120_1.txt
            if j == -1 {
                let d = if neg { -(d as isize) } else { d as isize };
                break (1, (1 - d) / 4);
            }

            d += 2;
            neg = !neg;
        }
    }
}

impl PrimalityUtils for u64 {
    fn is_sprp(&self, base: u64) -> bool {
        if *self < 3 {
            return *self == 2;
        }
        if self % 2 == 0 {
            return false;
        }

        // a base divisible by the target carries no information
        let base = base % self;
        if base == 0 {
            return true;
        }

        // find 2^shift*u + 1 = n
        let tm1 = self - 1;
        let shift = tm1.trailing_zeros();
        let u = tm1 >> shift;

        let mut x = base.powm(u, self);
        if x == 1 || x == tm1 {
            return true;
        }

        for _ in 1..shift {
            x = x.mulm(x, self);
            if x == tm1 {
                return true;
            }
        }

        false
    }

    fn is_slprp(&self, p: Option<usize>, q: Option<isize>) -> bool {
        if *self < 3 {
            return *self == 2;
        }
        if self % 2 == 0 {
            return false;
        }

        let (p, q) = match (p, q) {
            (Some(sp), Some(sq)) => (sp, sq),
            (_, _) => {
                let (sp, sq) = LucasUtils::pq_selfridge(self);
                if sp == 0 {
                    return false;
                }; // is a perfect power or has a small factor
                (sp, sq)
            }
        };

        let d = signed_residue((p * p) as isize - 4 * q, self);
        let delta = match jacobi(d, *self) {
            0 => Some(*self),
            -1 => self.checked_add(1),
            _ => Some(self - 1),
        };
        let delta = match delta {
            Some(v) => v,
            None => return false, // only u64::MAX, which is divisible by 3
        };

        let shift = delta.trailing_zeros();
        let base = delta >> shift;

        let (ud, mut vd) = LucasUtils::lucasm(p, q, *self, base);
        if ud == 0 || vd == 0 {
            return true;
        }

        // V(2k) = V(k)² - 2Q^k
        let mut qk = signed_residue(q, self).powm(base, self);
        for _ in 1..shift {
            vd = vd.mulm(vd, self).subm(qk.addm(qk, self), self);
            if vd == 0 {
                return true;
            }
            qk = qk.mulm(qk, self);
        }
        false
    }
}
