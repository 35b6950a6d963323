// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Configuration type definitions
//!
//! Each struct maps to one section of `netsy.toml`. Every field has a
//! default, so an empty file is a valid configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NetsyConfig {
    pub simulation: SimulationConfig,
    pub logging: LoggingConfig,
    pub scenario: ScenarioConfig,
    pub phase_space: PhaseSpaceConfig,
    pub hopfield: HopfieldConfig,
    pub noise_cascade: NoiseCascadeConfig,
    pub output: OutputConfig,
}

impl NetsyConfig {
    /// Configured tick count, or the scenario's own default
    pub fn effective_steps(&self) -> usize {
        self.simulation
            .steps
            .unwrap_or_else(|| self.scenario.kind.default_steps())
    }
}

/// Tick loop settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Ticks to run; unset means the scenario default
    pub steps: Option<usize>,
    /// Network RNG seed; unset means OS entropy
    pub seed: Option<u64>,
    /// Metric sampling interval in ticks
    pub sample_every: usize,
    /// Tick neurons on the rayon pool
    pub parallel: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            steps: None,
            seed: None,
            sample_every: 1,
            parallel: false,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// trace, debug, info, warn or error
    pub level: String,
    /// text or json
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioKind {
    /// Two coupled sigmoid units spiralling around their fixed point
    #[default]
    PhaseSpace,
    /// Sigmoid attractor network recalling stored patterns
    Hopfield,
    /// Mortal white-noise layer driving threshold layers
    NoiseCascade,
}

impl ScenarioKind {
    pub fn name(self) -> &'static str {
        match self {
            ScenarioKind::PhaseSpace => "phase_space",
            ScenarioKind::Hopfield => "hopfield",
            ScenarioKind::NoiseCascade => "noise_cascade",
        }
    }

    pub fn default_steps(self) -> usize {
        match self {
            ScenarioKind::PhaseSpace => 50_000,
            ScenarioKind::Hopfield => 140,
            ScenarioKind::NoiseCascade => 80,
        }
    }
}

impl fmt::Display for ScenarioKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ScenarioKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "phase_space" => Ok(ScenarioKind::PhaseSpace),
            "hopfield" => Ok(ScenarioKind::Hopfield),
            "noise_cascade" => Ok(ScenarioKind::NoiseCascade),
            _ => Err(ConfigError::InvalidValue(format!("unknown scenario '{}'", s))),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub kind: ScenarioKind,
}

/// Excitatory/inhibitory sigmoid pair
///
/// Tanh biases default to `thee = -10 (jee - j)` and `thei = -10 j`, which
/// places the fixed point at `(bias, bias)`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PhaseSpaceConfig {
    /// Excitatory self-coupling
    pub jee: f64,
    /// Cross coupling magnitude (E -> I positive, I -> E negative)
    pub j: f64,
    pub thee: f64,
    pub thei: f64,
    pub bias: f64,
    pub init: f64,
    pub der_step: f64,
}

impl Default for PhaseSpaceConfig {
    fn default() -> Self {
        let (jee, j) = (2.02, 1.2);
        Self {
            jee,
            j,
            thee: -10.0 * (jee - j),
            thei: -10.0 * j,
            bias: 10.0,
            init: 10.00001,
            der_step: 0.002,
        }
    }
}

/// Hopfield recall experiment
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct HopfieldConfig {
    pub neurons: usize,
    pub patterns: usize,
    /// Chance that a neuron belongs to a pattern
    pub pattern_probability: f64,
    pub der_step: f64,
    /// Pattern used to cue the network; unset starts from noise alone
    pub cue_pattern: Option<usize>,
    pub cue_magnitude: f64,
    /// Scale of the initial uniform perturbation
    pub noise: f64,
}

impl Default for HopfieldConfig {
    fn default() -> Self {
        Self {
            neurons: 150,
            patterns: 3,
            pattern_probability: 0.3,
            der_step: 0.01,
            cue_pattern: Some(2),
            cue_magnitude: 0.5,
            noise: 0.1,
        }
    }
}

/// White noise -> threshold layer -> threshold top unit
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct NoiseCascadeConfig {
    pub noise_size: usize,
    pub noise_mean: f64,
    pub noise_range: [f64; 2],
    pub noise_lifespan: Option<u64>,
    pub layer_size: usize,
    pub layer_lifespan: Option<u64>,
    pub top_threshold: f64,
    /// Layer -> top weight
    pub top_weight: f64,
}

impl Default for NoiseCascadeConfig {
    fn default() -> Self {
        Self {
            noise_size: 7,
            noise_mean: 0.1,
            noise_range: [-0.1, 1.0],
            noise_lifespan: Some(50),
            layer_size: 20,
            layer_lifespan: None,
            top_threshold: 2.0,
            top_weight: 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Header of neuron names, one line per tick
    #[default]
    Csv,
    /// `{"names": [...], "activations": [[...], ...], "metrics": [...]}`
    Json,
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(ConfigError::InvalidValue(format!("unknown output format '{}'", s))),
        }
    }
}

/// Where the recorded activations go
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Unset writes to stdout
    pub path: Option<PathBuf>,
    pub format: OutputFormat,
}
