// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Construction-time neuron configuration
//!
//! Unset options fall back to the defaults of the chosen model, so a template
//! like `NeuronConfig::new(ModelKind::Threshold)` picks up the threshold
//! model's refractory time and spike-pinned range.
//!
//! ```text
//! name            "anonymous neuron"
//! range           model default ([-1.5, 2] for most, [-1.5, 3] for threshold
//!                 and binary noise, [-mean, mean] for sigmoids)
//! lifespan        off
//! refractory_time model default (10, binary noise 0)
//! log             false
//! ```

use serde::{Deserialize, Serialize};

use crate::models::{ModelConfig, ModelKind};
use crate::types::{ActivationRange, Result};

pub const DEFAULT_NEURON_NAME: &str = "anonymous neuron";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NeuronConfig {
    pub name: Option<String>,
    pub range: Option<ActivationRange>,
    /// Ticks after which the unit permanently deactivates
    pub lifespan: Option<u64>,
    pub refractory_time: Option<u32>,
    /// Per-tick diagnostics for this neuron
    pub log: bool,
    pub model: ModelConfig,
}

impl NeuronConfig {
    pub fn new(model: impl Into<ModelConfig>) -> Self {
        Self {
            model: model.into(),
            ..Default::default()
        }
    }

    /// Default configuration of a model looked up by name
    pub fn by_name(model: &str) -> Result<Self> {
        let kind: ModelKind = model.parse()?;
        Ok(Self::new(kind))
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_range(mut self, low: f64, high: f64) -> Self {
        self.range = Some(ActivationRange::new(low, high));
        self
    }

    pub fn with_lifespan(mut self, lifespan: u64) -> Self {
        self.lifespan = Some(lifespan);
        self
    }

    pub fn with_refractory_time(mut self, ticks: u32) -> Self {
        self.refractory_time = Some(ticks);
        self
    }

    pub fn with_log(mut self, log: bool) -> Self {
        self.log = log;
        self
    }

    pub fn kind(&self) -> ModelKind {
        self.model.kind()
    }

    /// Range after model defaults and model-specific pinning
    pub fn effective_range(&self) -> ActivationRange {
        let params = self.model.parameters();
        let requested = self.range.unwrap_or_else(|| params.default_range());
        params.effective_range(requested)
    }

    pub fn effective_refractory_time(&self) -> u32 {
        self.refractory_time
            .unwrap_or_else(|| self.model.parameters().default_refractory_time())
    }

    pub fn validate(&self) -> Result<()> {
        self.model.parameters().validate()?;
        self.effective_range().validate()
    }
}

impl From<ModelKind> for NeuronConfig {
    fn from(kind: ModelKind) -> Self {
        NeuronConfig::new(kind)
    }
}
