//! Square root helpers on u64

use num_integer::Roots;

/// Exact and rounded square roots, computed without going through floating point
pub(crate) trait ExactRoots: Roots + Sized {
    /// Return `Some(r)` if `self == r * r`
    fn sqrt_exact(&self) -> Option<Self>;

    /// Return the square root rounded to the nearest integer
    fn sqrt_round(&self) -> Self;

    #[inline]
    fn is_square(&self) -> bool {
        self.sqrt_exact().is_some()
    }
}

// QUAD_RESIDUAL[N] has a bit i set iff i is a quadratic residue mod N.
const QUAD_RESIDUAL64: u64 = 0x0202021202030213;
const QUAD_RESIDUAL63: u64 = 0x0402483012450293;
const QUAD_RESIDUAL65: u64 = 0x218a019866014613;
const QUAD_RESIDUAL11: u64 = 0x23b;

impl ExactRoots for u64 {
    fn sqrt_exact(&self) -> Option<Self> {
        // eliminate most non-squares by checking legendre symbols.
        // See H. Cohen's "Course in Computational Algebraic Number Theory",
        // algorithm 1.7.3, page 40.
        if (QUAD_RESIDUAL64 >> (self & 63)) & 1 == 0 {
            return None;
        }
        if (QUAD_RESIDUAL63 >> (self % 63)) & 1 == 0 {
            return None;
        }
        if (QUAD_RESIDUAL65 >> ((self % 65) & 63)) & 1 == 0 {
            // Both 0 and 64 are squares mod 65
            return None;
        }
        if (QUAD_RESIDUAL11 >> (self % 11)) & 1 == 0 {
            return None;
        }
        let r = Roots::sqrt(self);
        if r * r == *self { Some(r) } else { None }
    }

    fn sqrt_round(&self) -> Self {
        // r² <= n < (r+1)², and √n >= r + 1/2 iff n > r² + r
        let r = Roots::sqrt(self);
        if self - r * r > r { r + 1 } else { r }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exact_root_test() {
        // some simple tests
        assert!(matches!(ExactRoots::sqrt_exact(&3u64), None));
        assert!(matches!(ExactRoots::sqrt_exact(&4u64), Some(2)));
        assert!(matches!(ExactRoots::sqrt_exact(&9u64), Some(3)));
        assert!(matches!(ExactRoots::sqrt_exact(&18u64), None));
        assert!(matches!(ExactRoots::sqrt_exact(&0u64), Some(0)));

        for _ in 0..100 {
            let x = rand::random::<u32>() as u64;
            assert!(matches!(ExactRoots::sqrt_exact(&(x * x)), Some(v) if v == x));
        }
        for _ in 0..100 {
            let x = rand::random::<u32>() as u64;
            let y = rand::random::<u32>() as u64;
            let r = Roots::sqrt(&(x * y));
            assert_eq!(ExactRoots::sqrt_exact(&(x * y)).is_some(), r * r == x * y);
        }
    }

    #[test]
    fn rounded_root_test() {
        assert_eq!(0u64.sqrt_round(), 0);
        assert_eq!(1u64.sqrt_round(), 1);
        assert_eq!(2u64.sqrt_round(), 1);
        assert_eq!(3u64.sqrt_round(), 2);
        assert_eq!(1000u64.sqrt_round(), 32);
        assert_eq!(255u64.sqrt_round(), 16);
        assert_eq!(u64::MAX.sqrt_round(), 1 << 32);
        assert_eq!(((1u64 << 32) - 1).pow(2).sqrt_round(), (1 << 32) - 1);

        // r² + r rounds down and r² + r + 1 rounds up, even where f64 can't tell them apart
        let r = 4294967279u64;
        assert_eq!((r * r + r).sqrt_round(), r);
        assert_eq!((r * r + r + 1).sqrt_round(), r + 1);

        // f64 is exact for inputs under 2^53
        for _ in 0..1000 {
            let x = rand::random::<u32>() as u64;
            assert_eq!(x.sqrt_round(), (x as f64).sqrt().round() as u64, "sqrt_round({})", x);
        }
    }
}
