//! Core types shared by the feed generator and its consumers
//!
//! Prices and quantities are raw integer ticks/units. The downstream
//! engine parses plain decimal fields, so `Display` prints the bare
//! integer with no scaling and no separators.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Timestamp in nanoseconds since UNIX epoch
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Ts(pub u64);

impl Ts {
    /// Create from raw nanoseconds
    #[must_use]
    pub const fn from_nanos(nanos: u64) -> Self {
        Self(nanos)
    }

    /// Get raw nanoseconds
    #[must_use]
    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    /// Advance by `delta` nanoseconds, `None` on overflow
    #[must_use]
    pub const fn checked_add_nanos(self, delta: u64) -> Option<Self> {
        match self.0.checked_add(delta) {
            Some(nanos) => Some(Self(nanos)),
            None => None,
        }
    }
}

impl fmt::Display for Ts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Price in integer ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Px(u64);

impl Px {
    /// Zero price, the wire value for kinds that carry no price
    pub const ZERO: Self = Self(0);

    /// Create from raw ticks
    #[must_use]
    pub const fn from_ticks(ticks: u64) -> Self {
        Self(ticks)
    }

    /// Get raw ticks
    #[must_use]
    pub const fn as_ticks(&self) -> u64 {
        self.0
    }

    /// Check if price is the zero sentinel
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Quantity in whole units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Qty(u64);

impl Qty {
    /// Zero quantity, the wire value for kinds that carry no quantity
    pub const ZERO: Self = Self(0);

    /// Create from whole units
    #[must_use]
    pub const fn from_units(units: u64) -> Self {
        Self(units)
    }

    /// Get raw units
    #[must_use]
    pub const fn as_units(&self) -> u64 {
        self.0
    }

    /// Check if quantity is zero
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for Qty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
