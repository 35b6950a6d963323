// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Sigmoid Neuron Models
//!
//! Continuous units integrating toward a `tanh` of their input, used for
//! oscillator and attractor experiments. The range is advisory only: these
//! models never clamp.
//!
//! ## Model Dynamics
//!
//! ```text
//! Sigmoid (every tick):
//!     A(t+1) = A(t) + der_step × (-A(t) + bias + tanh(I + tanh_bias))
//!
//! Limit sigmoid (only on ticks with non-zero input):
//!     A(t+1) = A(t) + der_step × (-A(t) + tanh(tanh_beta × (I + tanh_bias)))
//!     tanh_beta = ∞  ⇒  tanh(∞ × x) = signum(x)
//! ```

use serde::{Deserialize, Serialize};

use super::traits::{ModelParameters, NeuronModel};
use super::ModelKind;
use crate::dynamics::{euler_step, tanh_gain};
use crate::state::NeuronState;
use crate::types::error::ensure_finite;
use crate::types::{ActivationRange, NetsyError, Result};

/// Default half-width of the advisory range
pub const DEFAULT_SIGMOID_MEAN: f64 = 1.0;

/// Default Euler integration step
pub const DEFAULT_DER_STEP: f64 = 0.001;

fn validate_common(mean: f64, tanh_bias: f64, init: Option<f64>, der_step: f64) -> Result<()> {
    ensure_finite("mean", mean)?;
    ensure_finite("tanh_bias", tanh_bias)?;
    ensure_finite("der_step", der_step)?;
    if let Some(init) = init {
        ensure_finite("init", init)?;
    }
    if mean < 0.0 {
        return Err(NetsyError::invalid(
            "mean",
            format!("must be non-negative, got {}", mean),
        ));
    }
    if der_step <= 0.0 {
        return Err(NetsyError::invalid(
            "der_step",
            format!("must be positive, got {}", der_step),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub struct SigmoidModel {
    bias: f64,
    tanh_bias: f64,
    der_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SigmoidParameters {
    /// Half-width of the default range `[-mean, mean]`
    pub mean: f64,
    /// Added outside the `tanh`
    pub bias: f64,
    /// Added to the input inside the `tanh`
    pub tanh_bias: f64,
    /// Initial activation; defaults to the range minimum
    pub init: Option<f64>,
    pub der_step: f64,
}

impl Default for SigmoidParameters {
    fn default() -> Self {
        Self {
            mean: DEFAULT_SIGMOID_MEAN,
            bias: 0.0,
            tanh_bias: 0.0,
            init: None,
            der_step: DEFAULT_DER_STEP,
        }
    }
}

impl ModelParameters for SigmoidParameters {
    fn validate(&self) -> Result<()> {
        ensure_finite("bias", self.bias)?;
        validate_common(self.mean, self.tanh_bias, self.init, self.der_step)
    }

    fn default_range(&self) -> ActivationRange {
        ActivationRange::symmetric(self.mean)
    }

    fn initial_activation(&self, range: &ActivationRange) -> f64 {
        self.init.unwrap_or(range.low)
    }
}

impl NeuronModel for SigmoidModel {
    type Parameters = SigmoidParameters;

    fn from_parameters(params: &SigmoidParameters, _seed: u64) -> Self {
        Self {
            bias: params.bias,
            tanh_bias: params.tanh_bias,
            der_step: params.der_step,
        }
    }

    fn kind(&self) -> ModelKind {
        ModelKind::Sigmoid
    }

    fn clamps_activation(&self) -> bool {
        false
    }

    #[inline]
    fn apply_input(&mut self, state: &mut NeuronState, input: f64) {
        let drive = self.bias + (input + self.tanh_bias).tanh();
        state.activation = euler_step(state.activation, drive, self.der_step);
    }

    #[inline]
    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        state.activation
    }

    fn initial_signal(&self, state: &NeuronState) -> f64 {
        state.activation
    }
}

#[derive(Debug, Clone, Copy)]
pub struct LimitSigmoidModel {
    tanh_bias: f64,
    tanh_beta: f64,
    der_step: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LimitSigmoidParameters {
    pub mean: f64,
    pub tanh_bias: f64,
    /// Gain inside the `tanh`; infinity turns it into a sign function
    pub tanh_beta: f64,
    pub init: Option<f64>,
    pub der_step: f64,
}

impl Default for LimitSigmoidParameters {
    fn default() -> Self {
        Self {
            mean: DEFAULT_SIGMOID_MEAN,
            tanh_bias: 0.0,
            tanh_beta: f64::INFINITY,
            init: None,
            der_step: DEFAULT_DER_STEP,
        }
    }
}

impl ModelParameters for LimitSigmoidParameters {
    fn validate(&self) -> Result<()> {
        validate_common(self.mean, self.tanh_bias, self.init, self.der_step)?;
        if self.tanh_beta.is_nan() || self.tanh_beta <= 0.0 {
            return Err(NetsyError::invalid(
                "tanh_beta",
                format!("must be positive, got {}", self.tanh_beta),
            ));
        }
        Ok(())
    }

    fn default_range(&self) -> ActivationRange {
        ActivationRange::symmetric(self.mean)
    }

    fn initial_activation(&self, range: &ActivationRange) -> f64 {
        self.init.unwrap_or(range.low)
    }
}

impl NeuronModel for LimitSigmoidModel {
    type Parameters = LimitSigmoidParameters;

    fn from_parameters(params: &LimitSigmoidParameters, _seed: u64) -> Self {
        Self {
            tanh_bias: params.tanh_bias,
            tanh_beta: params.tanh_beta,
            der_step: params.der_step,
        }
    }

    fn kind(&self) -> ModelKind {
        ModelKind::LimitSigmoid
    }

    fn clamps_activation(&self) -> bool {
        false
    }

    fn apply_input(&mut self, state: &mut NeuronState, input: f64) {
        if input != 0.0 {
            let drive = tanh_gain(input + self.tanh_bias, self.tanh_beta);
            state.activation = euler_step(state.activation, drive, self.der_step);
        }
    }

    #[inline]
    fn emit(&mut self, state: &mut NeuronState) -> f64 {
        state.activation
    }

    fn initial_signal(&self, state: &NeuronState) -> f64 {
        state.activation
    }
}
