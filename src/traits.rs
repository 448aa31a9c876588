/// Method used by the primality oracle. Every method gives the same answer on every `u64`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimalityMethod {
    /// `n > 1` and the least prime factor of `n` is `n` itself
    LeastFactor,
    /// Trial division by 2, 3 and 6k±1 up to √n, with no probable prime shortcut
    TrialDivision,
    /// Miller-Rabin with a witness set that is deterministic for all 64-bit integers
    MillerRabin,
    /// Baillie-PSW: a base 2 strong probable prime test followed by a strong Lucas test
    Bpsw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimalityTestConfig {
    pub method: PrimalityMethod,
}

impl Default for PrimalityTestConfig {
    fn default() -> Self {
        Self { method: PrimalityMethod::MillerRabin }
    }
}

impl PrimalityTestConfig {
    /// Create a configuration for Baillie-PSW test (base 2 SPRP test + SLPRP test)
    pub fn bpsw() -> Self {
        Self { method: PrimalityMethod::Bpsw }
    }

    /// Create a configuration that only relies on division
    pub fn trial_division() -> Self {
        Self { method: PrimalityMethod::TrialDivision }
    }

    /// Create a configuration that defers to the least prime factor engine
    pub fn least_factor() -> Self {
        Self { method: PrimalityMethod::LeastFactor }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FactorizationConfig {
    /// Prove primality with the deterministic Miller-Rabin test before trial division
    pub prime_shortcut: bool,

    /// The shortcut is only applied to targets not larger than this value
    pub shortcut_limit: u64,
}

impl Default for FactorizationConfig {
    fn default() -> Self {
        Self { prime_shortcut: true, shortcut_limit: u64::MAX }
    }
}

impl FactorizationConfig {
    /// Only apply the shortcut to targets below `i64::MAX`
    pub fn signed_range() -> Self {
        Self { prime_shortcut: true, shortcut_limit: i64::MAX as u64 - 1 }
    }

    /// Never shortcut, always find the factor by trial division
    pub fn trial_only() -> Self {
        Self { prime_shortcut: false, shortcut_limit: 0 }
    }

    #[inline]
    pub(crate) fn shortcut_applies(&self, target: u64) -> bool {
        self.prime_shortcut && target <= self.shortcut_limit
    }
}

/// This trait implements various primality tests on an odd integer
pub trait PrimalityUtils {
    /// Test if the integer is a strong probable prime (based on miller-rabin test)
    fn is_sprp(&self, base: Self) -> bool;

    /// Test if the integer is a strong Lucas probable prime, with parameters P and Q
    /// found by Selfridge's method when not given.
    fn is_slprp(&self, p: Option<usize>, q: Option<isize>) -> bool;
}
