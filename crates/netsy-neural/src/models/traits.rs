// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Model Contract
//!
//! Every variant implements the model-specific steps of the per-tick
//! contract. The fixed steps (liveness, lifespan, refractory, clamping) are
//! driven by [`crate::Neuron::tick`] in this order:
//!
//! ```text
//! 1. dead?            -> emit 0, stop
//! 2. ticks += 1       -> past lifespan? die, emit 0, stop
//! 3. internal_process (model)
//! 4. refractory       -> suppressed? activation = low, drop input
//! 5. apply_input      (model), clamp if clamps_activation()
//! 6. emit             (model)
//! ```

use super::ModelKind;
use crate::state::NeuronState;
use crate::types::{ActivationRange, Result};

/// Default refractory duration for models that do not override it
pub const DEFAULT_REFRACTORY_TIME: u32 = 10;

/// Typed, validated construction parameters of one model variant
pub trait ModelParameters {
    fn validate(&self) -> Result<()>;

    /// Range used when the neuron configuration does not set one
    fn default_range(&self) -> ActivationRange {
        ActivationRange::default()
    }

    /// Final range given the requested one (models may pin a bound)
    fn effective_range(&self, requested: ActivationRange) -> ActivationRange {
        requested
    }

    fn default_refractory_time(&self) -> u32 {
        DEFAULT_REFRACTORY_TIME
    }

    fn initial_activation(&self, range: &ActivationRange) -> f64 {
        range.low
    }
}

/// Model-specific steps of the per-tick contract
pub trait NeuronModel {
    type Parameters: ModelParameters;

    /// Build the model. `seed` feeds models that draw random samples.
    fn from_parameters(params: &Self::Parameters, seed: u64) -> Self
    where
        Self: Sized;

    fn kind(&self) -> ModelKind;

    /// Whether activation is saturated to the range after input application
    fn clamps_activation(&self) -> bool {
        true
    }

    /// Runs every live tick, before refractory handling
    fn internal_process(&mut self, _state: &mut NeuronState) {}

    /// Combine the tick's input with the current activation
    fn apply_input(&mut self, state: &mut NeuronState, input: f64);

    /// Derive the externally visible signal for this tick
    fn emit(&mut self, state: &mut NeuronState) -> f64;

    /// Signal implied by the current activation, without advancing anything
    fn current_signal(&self, state: &NeuronState) -> f64 {
        state.activation
    }

    /// Signal published before the first tick
    fn initial_signal(&self, _state: &NeuronState) -> f64 {
        0.0
    }
}
