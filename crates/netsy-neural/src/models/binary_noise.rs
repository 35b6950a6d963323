// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Binary Noise Neuron Model
//!
//! Fires the range maximum with probability `p` each tick, otherwise emits the
//! range minimum. Input is discarded: firing is an independent Bernoulli draw.
//! The default range tops out at the threshold spike size, so an unconfigured
//! noise unit fires full spikes.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::threshold::SPIKE_SIZE;
use super::traits::{ModelParameters, NeuronModel};
use super::ModelKind;
use crate::state::NeuronState;
use crate::types::error::ensure_finite;
use crate::types::{ActivationRange, NetsyError, Result, ACTIVATION_RANGE_LOW};

/// Default firing probability per tick
pub const DEFAULT_FIRING_PROBABILITY: f64 = 0.05;

#[derive(Debug, Clone)]
pub struct BinaryNoiseModel {
    p: f64,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BinaryNoiseParameters {
    /// Probability (0.0-1.0) of firing on a given tick
    pub p: f64,
}

impl Default for BinaryNoiseParameters {
    fn default() -> Self {
        Self {
            p: DEFAULT_FIRING_PROBABILITY,
        }
    }
}

impl ModelParameters for BinaryNoiseParameters {
    fn validate(&self) -> Result<()> {
        ensure_finite("p", self.p)?;
        if !(0.0..=1.0).contains(&self.p) {
            return Err(NetsyError::invalid(
                "p",
                format!("must be within [0, 1], got {}", self.p),
            ));
        }
        Ok(())
    }

    fn default_range(&self) -> ActivationRange {
        ActivationRange::new(ACTIVATION_RANGE_LOW, SPIKE_SIZE)
    }

    fn default_refractory_time(&self) -> u32 {
        0
    }
}

impl NeuronModel for BinaryNoiseModel {
    type Parameters = BinaryNoiseParameters;

    fn from_parameters(params: &BinaryNoiseParameters, seed: u64) -> Self {
        Self {
            p: params.p,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn kind(&self) -> ModelKind {
        ModelKind::BinaryNoise
    }

    #[inline]
    fn apply_input(&mut self, _state: &mut NeuronState, _input: f64) {}

    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        let sample: f64 = self.rng.gen();
        state.activation = if sample < self.p {
            state.range.high
        } else {
            state.range.low
        };
        state.activation
    }
}
