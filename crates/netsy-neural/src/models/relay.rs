// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Relay Neuron Model
//!
//! Baseline pass-through unit: each tick starts from zero, adds the input and
//! saturates to the range.
//!
//! ```text
//! A(t+1) = clamp(I(t), low, high)
//! signal = A(t+1)
//! ```

use serde::{Deserialize, Serialize};

use super::traits::{ModelParameters, NeuronModel};
use super::ModelKind;
use crate::state::NeuronState;
use crate::types::Result;

#[derive(Debug, Clone, Copy, Default)]
pub struct RelayModel;

/// Relay has no parameters of its own
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RelayParameters {}

impl ModelParameters for RelayParameters {
    fn validate(&self) -> Result<()> {
        Ok(())
    }
}

impl NeuronModel for RelayModel {
    type Parameters = RelayParameters;

    fn from_parameters(_params: &RelayParameters, _seed: u64) -> Self {
        RelayModel
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Relay
    }

    #[inline]
    fn internal_process(&mut self, state: &mut NeuronState) {
        state.activation = 0.0;
    }

    #[inline]
    fn apply_input(&mut self, state: &mut NeuronState, input: f64) {
        state.activation += input;
    }

    #[inline]
    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        state.activation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ActivationRange;

    #[test]
    fn test_relay_forgets_previous_activation() {
        let mut model = RelayModel;
        let mut state = NeuronState::new(ActivationRange::default(), 1.0, 10);

        model.internal_process(&mut state);
        model.apply_input(&mut state, 0.25);
        assert_eq!(model.emit(&mut state), 0.25);
    }
}
