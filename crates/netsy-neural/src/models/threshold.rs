// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Threshold (Integrate-and-Fire) Neuron Model
//!
//! Aggregates input until it reaches `threshold`, then fires a fixed spike
//! and enters a refractory period.
//!
//! ## Model Dynamics
//!
//! ```text
//! Internal process (every live tick):
//!     if A ≥ spike:  enter refractory, A = low
//!     A = A - A × decay_coefficient
//!
//! Input application (deferred while refractory, I keeps accumulating):
//!     A = A + I
//!     if A ≥ threshold:  A = spike
//!     A = clamp(A, low, spike)
//!
//! Emission:
//!     signal = spike  if A == spike
//!            = 0      otherwise
//! ```

use serde::{Deserialize, Serialize};

use super::traits::{ModelParameters, NeuronModel};
use super::ModelKind;
use crate::dynamics::decay;
use crate::state::NeuronState;
use crate::types::error::ensure_finite;
use crate::types::{ActivationRange, NetsyError, Result};

/// Magnitude of an emitted spike
pub const SPIKE_SIZE: f64 = 3.0;

/// Default fraction of activation lost per tick
pub const DEFAULT_DECAY: f64 = 0.1;

pub const DEFAULT_THRESHOLD: f64 = 1.0;

#[derive(Debug, Clone, Copy)]
pub struct ThresholdModel {
    threshold: f64,
    decay_coefficient: f64,
    spike: f64,
}

impl ThresholdModel {
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn spike(&self) -> f64 {
        self.spike
    }
}

/// Threshold model-specific parameters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ThresholdParameters {
    /// Activation at which the unit fires
    pub threshold: f64,

    /// Fraction (0.0-1.0) of activation lost per tick
    pub decay_coefficient: f64,

    /// Emitted magnitude; also pins the upper range bound
    pub spike: f64,
}

impl Default for ThresholdParameters {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            decay_coefficient: DEFAULT_DECAY,
            spike: SPIKE_SIZE,
        }
    }
}

impl ModelParameters for ThresholdParameters {
    fn validate(&self) -> Result<()> {
        ensure_finite("threshold", self.threshold)?;
        ensure_finite("decay_coefficient", self.decay_coefficient)?;
        ensure_finite("spike", self.spike)?;
        if !(0.0..=1.0).contains(&self.decay_coefficient) {
            return Err(NetsyError::invalid(
                "decay_coefficient",
                format!("must be within [0, 1], got {}", self.decay_coefficient),
            ));
        }
        // Above the spike the clamp would emit a spike without ever crossing threshold
        if self.threshold > self.spike {
            return Err(NetsyError::invalid(
                "threshold",
                format!("{} exceeds spike size {}", self.threshold, self.spike),
            ));
        }
        Ok(())
    }

    fn effective_range(&self, requested: ActivationRange) -> ActivationRange {
        ActivationRange::new(requested.low, self.spike)
    }
}

impl NeuronModel for ThresholdModel {
    type Parameters = ThresholdParameters;

    fn from_parameters(params: &ThresholdParameters, _seed: u64) -> Self {
        Self {
            threshold: params.threshold,
            decay_coefficient: params.decay_coefficient,
            spike: params.spike,
        }
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Threshold
    }

    fn internal_process(&mut self, state: &mut NeuronState) {
        if state.activation >= self.spike {
            state.refractory.enter();
            state.activation = state.range.low;
        }
        state.activation = decay(state.activation, self.decay_coefficient);
    }

    fn apply_input(&mut self, state: &mut NeuronState, input: f64) {
        state.activation += input;
        if state.activation >= self.threshold {
            state.activation = self.spike;
        }
    }

    #[inline]
    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        self.current_signal(state)
    }

    #[inline]
    fn current_signal(&self, state: &NeuronState) -> f64 {
        if state.activation == self.spike {
            self.spike
        } else {
            0.0
        }
    }
}
