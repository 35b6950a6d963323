// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # White Noise Neuron Model
//!
//! Emits a fresh uniform sample in `[0, 2 × mean)` every tick, saturated to the
//! range. No memory across ticks; input is discarded.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use super::traits::{ModelParameters, NeuronModel};
use super::ModelKind;
use crate::state::NeuronState;
use crate::types::error::ensure_finite;
use crate::types::{NetsyError, Result};

pub const DEFAULT_NOISE_MEAN: f64 = 0.5;

#[derive(Debug, Clone)]
pub struct WhiteNoiseModel {
    mean: f64,
    rng: StdRng,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WhiteNoiseParameters {
    /// Mean of the emitted samples
    pub mean: f64,
}

impl Default for WhiteNoiseParameters {
    fn default() -> Self {
        Self {
            mean: DEFAULT_NOISE_MEAN,
        }
    }
}

impl ModelParameters for WhiteNoiseParameters {
    fn validate(&self) -> Result<()> {
        ensure_finite("mean", self.mean)?;
        if self.mean < 0.0 {
            return Err(NetsyError::invalid(
                "mean",
                format!("must be non-negative, got {}", self.mean),
            ));
        }
        Ok(())
    }
}

impl NeuronModel for WhiteNoiseModel {
    type Parameters = WhiteNoiseParameters;

    fn from_parameters(params: &WhiteNoiseParameters, seed: u64) -> Self {
        Self {
            mean: params.mean,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn kind(&self) -> ModelKind {
        ModelKind::WhiteNoise
    }

    #[inline]
    fn apply_input(&mut self, _state: &mut NeuronState, _input: f64) {}

    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        let sample: f64 = self.rng.gen();
        state.activation = state.range.clamp(sample * self.mean * 2.0);
        state.activation
    }
}
