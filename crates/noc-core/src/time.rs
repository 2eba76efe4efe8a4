//! Simulation time model.
//!
//! Time is a monotonically increasing `Cycle` counter.  One cycle is the time
//! a packet needs to cross one mesh link, so all latency arithmetic is exact
//! integer arithmetic.

use std::fmt;

/// An absolute simulation cycle counter.
///
/// Stored as `u64`; at a billion cycles per second a run would need ~585
/// years to overflow it.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cycle(pub u64);

impl Cycle {
    pub const ZERO: Cycle = Cycle(0);

    /// Return the cycle `n` steps after `self`.
    #[inline]
    pub fn offset(self, n: u64) -> Cycle {
        Cycle(self.0 + n)
    }

    /// Cycles elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Cycle) -> u64 {
        self.0 - earlier.0
    }

    /// Advance by one cycle in place.
    #[inline]
    pub fn advance(&mut self) {
        self.0 += 1;
    }

    /// `true` every `interval` cycles (never for `interval == 0`).
    #[inline]
    pub fn is_multiple_of(self, interval: u64) -> bool {
        interval > 0 && self.0 % interval == 0
    }
}

impl std::ops::Add<u64> for Cycle {
    type Output = Cycle;
    #[inline]
    fn add(self, rhs: u64) -> Cycle {
        Cycle(self.0 + rhs)
    }
}

impl std::ops::Sub for Cycle {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Cycle) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Cycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "C{}", self.0)
    }
}
