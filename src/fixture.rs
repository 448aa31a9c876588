//! Ordered experiment table spanning the u64 range.
//!
//! Each target is surrounded by the prime below it and a semiprime near it, and every row
//! carries the least prime factor of its value, so the table can be checked by any other
//! implementation of the same queries.

use crate::error::Result;
use crate::factor::least_prime_factor;
use crate::nt_funcs::previous_prime;
use crate::semiprime::semiprime_near;
use std::fmt;
use tracing::debug;

/// Distance between consecutive targets
pub const STEP: u64 = u64::MAX / 16;

/// What a row stands for in the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    /// The largest prime below a target
    Prime,
    /// The semiprime near a target
    Semiprime,
    /// A target that is 2^k
    PowerOfTwo(u32),
    /// The closing row, 2^64 - 1
    MaxU64,
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Prime => write!(f, "prime"),
            Label::Semiprime => write!(f, "semiprime"),
            Label::PowerOfTwo(k) => write!(f, "2 ** {}", k),
            Label::MaxU64 => write!(f, "2 ** 64 - 1"),
        }
    }
}

/// A value with its least prime factor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixtureRow {
    pub value: u64,
    pub factor: u64,
    pub label: Option<Label>,
}

impl fmt::Display for FixtureRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Experiment({:>20}, {:>20}),", self.value, self.factor)?;
        if let Some(label) = self.label {
            write!(f, "  # {}", label)?;
        }
        Ok(())
    }
}

/// Label a target when it's a power of two not smaller than 4
fn power_of_two(n: u64) -> Option<Label> {
    if n >= 4 && n.is_power_of_two() {
        Some(Label::PowerOfTwo(n.trailing_zeros()))
    } else {
        None
    }
}

/// The ordered targets: 12, then every multiple of [STEP] that fits in u64
pub fn targets() -> Vec<u64> {
    let mut list = vec![12];
    let mut n = STEP;
    loop {
        list.push(n);
        n = match n.checked_add(STEP) {
            Some(v) => v,
            None => break list,
        };
    }
}

/// Expand the targets into rows sorted by value within each target, followed by the
/// closing row for 2^64 - 1.
pub fn rows() -> Result<Vec<FixtureRow>> {
    rows_for(&targets())
}

/// Expand the given targets, in order, into rows
pub fn rows_for(targets: &[u64]) -> Result<Vec<FixtureRow>> {
    let mut list = Vec::with_capacity(targets.len() * 3 + 1);
    for &n in targets {
        let mut group = Vec::with_capacity(3);

        let prev = previous_prime(n)?;
        if prev != n {
            group.push(FixtureRow { value: prev, factor: prev, label: Some(Label::Prime) });
        }

        group.push(FixtureRow { value: n, factor: least_prime_factor(n), label: power_of_two(n) });

        let (semiprime, factor) = semiprime_near(n)?;
        if semiprime != n {
            group.push(FixtureRow { value: semiprime, factor, label: Some(Label::Semiprime) });
        }

        group.sort_by_key(|row| row.value);
        debug!(value = n, rows = group.len(), "expanded fixture target");
        list.append(&mut group);
    }

    list.push(FixtureRow {
        value: u64::MAX,
        factor: least_prime_factor(u64::MAX),
        label: Some(Label::MaxU64),
    });
    Ok(list)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{Error, RangeUnderflow};
    use crate::nt_funcs::is_prime;

    #[test]
    fn targets_test() {
        let list = targets();
        assert_eq!(list.len(), 17);
        assert_eq!(list[0], 12);
        assert_eq!(list[1], 1152921504606846975);
        assert_eq!(list[16], 18446744073709551600);
        assert!(list.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn row_format_test() {
        let row = FixtureRow {
            value: 17592186044416,
            factor: 2,
            label: power_of_two(17592186044416),
        };
        assert_eq!(
            row.to_string(),
            "Experiment(      17592186044416,                    2),  # 2 ** 44"
        );

        let row = FixtureRow { value: 12, factor: 2, label: None };
        assert_eq!(
            row.to_string(),
            "Experiment(                  12,                    2),"
        );
    }

    #[test]
    fn rows_test() {
        let list = rows_for(&[12, 1024]).unwrap();
        let expect = [
            FixtureRow { value: 9, factor: 3, label: Some(Label::Semiprime) },
            FixtureRow { value: 11, factor: 11, label: Some(Label::Prime) },
            FixtureRow { value: 12, factor: 2, label: None },
            FixtureRow { value: 1021, factor: 1021, label: Some(Label::Prime) },
            FixtureRow { value: 1024, factor: 2, label: Some(Label::PowerOfTwo(10)) },
            FixtureRow { value: 1147, factor: 31, label: Some(Label::Semiprime) },
            FixtureRow { value: u64::MAX, factor: 3, label: Some(Label::MaxU64) },
        ];
        assert_eq!(list, expect);

        assert!(matches!(
            rows_for(&[1]),
            Err(Error::RangeUnderflow(RangeUnderflow { start: 1 }))
        ));
    }

    #[test]
    fn full_table_test() {
        let list = rows().unwrap();
        assert_eq!(list.last().map(|r| r.value), Some(u64::MAX));
        for row in &list {
            assert_eq!(row.value % row.factor, 0);
            match row.label {
                Some(Label::Prime) => assert!(is_prime(row.value)),
                Some(Label::Semiprime) => assert!(is_prime(row.value / row.factor)),
                _ => assert!(is_prime(row.factor)),
            }
        }
    }
}
