// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Activation range bounds

use serde::{Deserialize, Serialize};

use super::error::{ensure_finite, NetsyError, Result};

/// Default lower activation bound
pub const ACTIVATION_RANGE_LOW: f64 = -1.5;

/// Default upper activation bound
pub const ACTIVATION_RANGE_HIGH: f64 = 2.0;

/// Closed activation interval `[low, high]`
///
/// Serialized as a two-element array so configuration files can write
/// `range = [-0.1, 1.0]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct ActivationRange {
    pub low: f64,
    pub high: f64,
}

impl ActivationRange {
    pub fn new(low: f64, high: f64) -> Self {
        Self { low, high }
    }

    /// Symmetric range `[-magnitude, magnitude]`
    pub fn symmetric(magnitude: f64) -> Self {
        Self::new(-magnitude, magnitude)
    }

    #[inline]
    pub fn clamp(&self, value: f64) -> f64 {
        if value > self.high {
            self.high
        } else if value < self.low {
            self.low
        } else {
            value
        }
    }

    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.low && value <= self.high
    }

    pub fn validate(&self) -> Result<()> {
        ensure_finite("range.low", self.low)?;
        ensure_finite("range.high", self.high)?;
        if self.low > self.high {
            return Err(NetsyError::invalid(
                "range",
                format!("low bound {} exceeds high bound {}", self.low, self.high),
            ));
        }
        Ok(())
    }
}

impl Default for ActivationRange {
    fn default() -> Self {
        Self::new(ACTIVATION_RANGE_LOW, ACTIVATION_RANGE_HIGH)
    }
}

impl From<[f64; 2]> for ActivationRange {
    fn from(bounds: [f64; 2]) -> Self {
        Self::new(bounds[0], bounds[1])
    }
}

impl From<ActivationRange> for [f64; 2] {
    fn from(range: ActivationRange) -> Self {
        [range.low, range.high]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp() {
        let range = ActivationRange::default();
        assert_eq!(range.clamp(5.0), ACTIVATION_RANGE_HIGH);
        assert_eq!(range.clamp(-5.0), ACTIVATION_RANGE_LOW);
        assert_eq!(range.clamp(0.25), 0.25);
    }

    #[test]
    fn test_validate_rejects_inverted_bounds() {
        assert!(ActivationRange::new(1.0, -1.0).validate().is_err());
        assert!(ActivationRange::new(f64::NAN, 1.0).validate().is_err());
        assert!(ActivationRange::new(0.0, 0.0).validate().is_ok());
    }
}
