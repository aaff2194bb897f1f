//! Type-safe wrappers for simulation units
//!
//! Distances and speeds are in abstract track units (one lap is 1300 units),
//! time is counted in whole simulated seconds.
//!
//! Floating point unit types serialize with 4 decimal places to keep JSON
//! reports compact.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Round f64 to 4 decimal places for compact JSON serialization
fn round4<S: serde::Serializer>(val: &f64, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_f64((*val * 10000.0).round() / 10000.0)
}

/// Track distance units
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Distance(#[serde(serialize_with = "round4")] pub f64);

/// Track distance units covered per simulated second
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct Speed(#[serde(serialize_with = "round4")] pub f64);

/// Whole simulated seconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Seconds(pub u32);

impl fmt::Display for Seconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Tire condition in percent (100.0 = new)
///
/// The value is not clamped: during a run it may drop below zero, and only
/// the reported result is floored with [`TireCondition::clamped`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
pub struct TireCondition(#[serde(serialize_with = "round4")] pub f64);

impl TireCondition {
    /// Condition of a fresh set of tires
    pub const NEW: TireCondition = TireCondition(100.0);

    /// Floor the condition at 0%
    pub fn clamped(self) -> Self {
        Self(self.0.max(0.0))
    }
}

impl fmt::Display for TireCondition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}
