// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Neural dynamics algorithms
//!
//! Pure functions shared by the neuron models.

/// Exponential-style decay: lose `coefficient` of the current value
///
/// # Formula
/// `V_new = V - V * coefficient`
///
/// # Example
/// ```
/// use netsy_neural::decay;
///
/// assert_eq!(decay(2.0, 0.5), 1.0);
/// assert_eq!(decay(-1.0, 0.0), -1.0);
/// ```
#[inline]
pub fn decay(value: f64, coefficient: f64) -> f64 {
    value - value * coefficient
}

/// One forward-Euler step of `dA/dt = -A + drive`
///
/// # Example
/// ```
/// use netsy_neural::euler_step;
///
/// // Half-way toward the drive with step 0.5
/// assert_eq!(euler_step(0.0, 1.0, 0.5), 0.5);
/// ```
#[inline]
pub fn euler_step(activation: f64, drive: f64, step: f64) -> f64 {
    activation + step * (drive - activation)
}

/// `tanh(beta * x)`, with an infinite gain degenerating to `signum`
///
/// `signum(0)` is taken as 0 so an infinite gain never yields NaN.
#[inline]
pub fn tanh_gain(x: f64, beta: f64) -> f64 {
    if beta.is_infinite() {
        if x == 0.0 {
            0.0
        } else {
            x.signum()
        }
    } else {
        (beta * x).tanh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_reaches_zero_monotonically() {
        let mut v = 3.0;
        for _ in 0..50 {
            let next = decay(v, 0.1);
            assert!(next < v);
            assert!(next > 0.0);
            v = next;
        }
    }

    #[test]
    fn test_euler_step_fixed_point() {
        // Already at the drive value: no movement
        assert_eq!(euler_step(0.7, 0.7, 0.01), 0.7);
    }

    #[test]
    fn test_tanh_gain_infinite() {
        assert_eq!(tanh_gain(0.3, f64::INFINITY), 1.0);
        assert_eq!(tanh_gain(-0.3, f64::INFINITY), -1.0);
        assert_eq!(tanh_gain(0.0, f64::INFINITY), 0.0);
        assert!((tanh_gain(0.5, 2.0) - 1.0f64.tanh()).abs() < 1e-12);
    }
}
