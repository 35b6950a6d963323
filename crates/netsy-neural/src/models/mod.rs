// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neuron Model Architecture
//!
//! Each variant is an independent type implementing [`NeuronModel`]; a neuron
//! holds one of them inside the [`Model`] enum and dispatches statically.
//!
//! ## Adding a New Neuron Model
//!
//! 1. Create `src/models/your_model.rs` with a model and a parameters type
//! 2. Implement `NeuronModel` and `ModelParameters`
//! 3. Add a variant to `ModelKind`, `ModelConfig` and `Model`
//! 4. Add tests

pub mod binary_noise;
pub mod relay;
pub mod sigmoid;
pub mod threshold;
pub mod traits;
pub mod white_noise;

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::state::NeuronState;
use crate::types::{NetsyError, Result};

pub use binary_noise::{BinaryNoiseModel, BinaryNoiseParameters};
pub use relay::{RelayModel, RelayParameters};
pub use sigmoid::{LimitSigmoidModel, LimitSigmoidParameters, SigmoidModel, SigmoidParameters};
pub use threshold::{ThresholdModel, ThresholdParameters, SPIKE_SIZE};
pub use traits::{ModelParameters, NeuronModel};
pub use white_noise::{WhiteNoiseModel, WhiteNoiseParameters};

/// Symbolic name of a model variant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ModelKind {
    Relay,
    Threshold,
    BinaryNoise,
    WhiteNoise,
    Sigmoid,
    LimitSigmoid,
}

impl ModelKind {
    pub const ALL: [ModelKind; 6] = [
        ModelKind::Relay,
        ModelKind::Threshold,
        ModelKind::BinaryNoise,
        ModelKind::WhiteNoise,
        ModelKind::Sigmoid,
        ModelKind::LimitSigmoid,
    ];

    /// Lookup name, as accepted by [`ModelKind::from_str`]
    pub fn name(self) -> &'static str {
        match self {
            ModelKind::Relay => "relay",
            ModelKind::Threshold => "threshold",
            ModelKind::BinaryNoise => "binarynoise",
            ModelKind::WhiteNoise => "whitenoise",
            ModelKind::Sigmoid => "sigmoid",
            ModelKind::LimitSigmoid => "limsigmoid",
        }
    }

    /// Short tag prefixed to display names, e.g. `[TH] top`
    pub fn type_identifier(self) -> &'static str {
        match self {
            ModelKind::Relay => "N",
            ModelKind::Threshold => "TH",
            ModelKind::BinaryNoise => "BN",
            ModelKind::WhiteNoise => "WN",
            ModelKind::Sigmoid => "SIG",
            ModelKind::LimitSigmoid => "LSIG",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ModelKind {
    type Err = NetsyError;

    /// Case-insensitive; `_` and `-` separators are ignored
    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "relay" => Ok(ModelKind::Relay),
            "threshold" => Ok(ModelKind::Threshold),
            "binarynoise" => Ok(ModelKind::BinaryNoise),
            "whitenoise" => Ok(ModelKind::WhiteNoise),
            "sigmoid" => Ok(ModelKind::Sigmoid),
            "limsigmoid" | "limitsigmoid" => Ok(ModelKind::LimitSigmoid),
            _ => Err(NetsyError::UnknownModel(s.to_string())),
        }
    }
}

/// Model variant plus its typed parameters
///
/// Deserializes from `{ type = "threshold", params = { threshold = 2.0 } }`;
/// unknown parameter names are rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "params", rename_all = "lowercase")]
pub enum ModelConfig {
    Relay(RelayParameters),
    Threshold(ThresholdParameters),
    BinaryNoise(BinaryNoiseParameters),
    WhiteNoise(WhiteNoiseParameters),
    Sigmoid(SigmoidParameters),
    #[serde(rename = "limsigmoid")]
    LimitSigmoid(LimitSigmoidParameters),
}

impl ModelConfig {
    /// Default parameters for a model kind
    pub fn defaults(kind: ModelKind) -> Self {
        match kind {
            ModelKind::Relay => ModelConfig::Relay(RelayParameters::default()),
            ModelKind::Threshold => ModelConfig::Threshold(ThresholdParameters::default()),
            ModelKind::BinaryNoise => ModelConfig::BinaryNoise(BinaryNoiseParameters::default()),
            ModelKind::WhiteNoise => ModelConfig::WhiteNoise(WhiteNoiseParameters::default()),
            ModelKind::Sigmoid => ModelConfig::Sigmoid(SigmoidParameters::default()),
            ModelKind::LimitSigmoid => {
                ModelConfig::LimitSigmoid(LimitSigmoidParameters::default())
            }
        }
    }

    pub fn kind(&self) -> ModelKind {
        match self {
            ModelConfig::Relay(_) => ModelKind::Relay,
            ModelConfig::Threshold(_) => ModelKind::Threshold,
            ModelConfig::BinaryNoise(_) => ModelKind::BinaryNoise,
            ModelConfig::WhiteNoise(_) => ModelKind::WhiteNoise,
            ModelConfig::Sigmoid(_) => ModelKind::Sigmoid,
            ModelConfig::LimitSigmoid(_) => ModelKind::LimitSigmoid,
        }
    }

    pub fn parameters(&self) -> &dyn ModelParameters {
        match self {
            ModelConfig::Relay(p) => p,
            ModelConfig::Threshold(p) => p,
            ModelConfig::BinaryNoise(p) => p,
            ModelConfig::WhiteNoise(p) => p,
            ModelConfig::Sigmoid(p) => p,
            ModelConfig::LimitSigmoid(p) => p,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        ModelConfig::Relay(RelayParameters::default())
    }
}

impl From<ModelKind> for ModelConfig {
    fn from(kind: ModelKind) -> Self {
        ModelConfig::defaults(kind)
    }
}

impl From<ThresholdParameters> for ModelConfig {
    fn from(params: ThresholdParameters) -> Self {
        ModelConfig::Threshold(params)
    }
}

impl From<BinaryNoiseParameters> for ModelConfig {
    fn from(params: BinaryNoiseParameters) -> Self {
        ModelConfig::BinaryNoise(params)
    }
}

impl From<WhiteNoiseParameters> for ModelConfig {
    fn from(params: WhiteNoiseParameters) -> Self {
        ModelConfig::WhiteNoise(params)
    }
}

impl From<SigmoidParameters> for ModelConfig {
    fn from(params: SigmoidParameters) -> Self {
        ModelConfig::Sigmoid(params)
    }
}

impl From<LimitSigmoidParameters> for ModelConfig {
    fn from(params: LimitSigmoidParameters) -> Self {
        ModelConfig::LimitSigmoid(params)
    }
}

/// A constructed model variant (enum dispatch over [`NeuronModel`])
#[derive(Debug, Clone)]
pub enum Model {
    Relay(RelayModel),
    Threshold(ThresholdModel),
    BinaryNoise(BinaryNoiseModel),
    WhiteNoise(WhiteNoiseModel),
    Sigmoid(SigmoidModel),
    LimitSigmoid(LimitSigmoidModel),
}

macro_rules! dispatch {
    ($self:expr, $model:ident => $body:expr) => {
        match $self {
            Model::Relay($model) => $body,
            Model::Threshold($model) => $body,
            Model::BinaryNoise($model) => $body,
            Model::WhiteNoise($model) => $body,
            Model::Sigmoid($model) => $body,
            Model::LimitSigmoid($model) => $body,
        }
    };
}

impl Model {
    pub fn from_config(config: &ModelConfig, seed: u64) -> Self {
        match config {
            ModelConfig::Relay(p) => Model::Relay(RelayModel::from_parameters(p, seed)),
            ModelConfig::Threshold(p) => Model::Threshold(ThresholdModel::from_parameters(p, seed)),
            ModelConfig::BinaryNoise(p) => {
                Model::BinaryNoise(BinaryNoiseModel::from_parameters(p, seed))
            }
            ModelConfig::WhiteNoise(p) => {
                Model::WhiteNoise(WhiteNoiseModel::from_parameters(p, seed))
            }
            ModelConfig::Sigmoid(p) => Model::Sigmoid(SigmoidModel::from_parameters(p, seed)),
            ModelConfig::LimitSigmoid(p) => {
                Model::LimitSigmoid(LimitSigmoidModel::from_parameters(p, seed))
            }
        }
    }

    pub fn kind(&self) -> ModelKind {
        dispatch!(self, m => m.kind())
    }

    pub fn clamps_activation(&self) -> bool {
        dispatch!(self, m => m.clamps_activation())
    }

    #[inline]
    pub fn internal_process(&mut self, state: &mut NeuronState) {
        dispatch!(self, m => m.internal_process(state))
    }

    #[inline]
    pub fn apply_input(&mut self, state: &mut NeuronState, input: f64) {
        dispatch!(self, m => m.apply_input(state, input))
    }

    #[inline]
    pub fn emit(&mut self, state: &mut NeuronState) -> f64 {
        dispatch!(self, m => m.emit(state))
    }

    pub fn current_signal(&self, state: &NeuronState) -> f64 {
        dispatch!(self, m => m.current_signal(state))
    }

    pub fn initial_signal(&self, state: &NeuronState) -> f64 {
        dispatch!(self, m => m.initial_signal(state))
    }
}
