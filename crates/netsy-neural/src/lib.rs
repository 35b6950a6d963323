// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # netsy Neuron Models
//!
//! Self-contained neuron state machines sharing one per-tick contract:
//! - **Types**: ids, neuron selections, activation ranges, errors
//! - **Dynamics**: decay and integration helpers
//! - **Models**: relay, threshold, binary noise, white noise, sigmoid, limit sigmoid
//! - **Neuron**: identity + state + model, driven by `receive` / `tick`
//!
//! ## Example
//!
//! ```
//! use netsy_neural::{ModelKind, Neuron, NeuronConfig, NeuronId};
//!
//! let config = NeuronConfig::new(ModelKind::Relay).named("relay");
//! let mut neuron = Neuron::new(NeuronId(0), &config, 0).unwrap();
//!
//! neuron.receive(0.5);
//! assert_eq!(neuron.tick(), 0.5);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod config;
pub mod dynamics;
pub mod models;
pub mod neuron;
pub mod state;
pub mod types;

pub use dynamics::*;

pub use config::{NeuronConfig, DEFAULT_NEURON_NAME};
pub use models::{
    BinaryNoiseParameters, LimitSigmoidParameters, Model, ModelConfig, ModelKind,
    ModelParameters, NeuronModel, RelayParameters, SigmoidParameters, ThresholdParameters,
    WhiteNoiseParameters, SPIKE_SIZE,
};
pub use neuron::Neuron;
pub use state::{NeuronState, Refractory};
pub use types::{
    ActivationRange, Error, NetsyError, NeuronId, NeuronSet, Result, ACTIVATION_RANGE_HIGH,
    ACTIVATION_RANGE_LOW,
};
