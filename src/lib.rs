// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # netsy - Discrete-Time Neuron Network Simulator
//!
//! Builds networks of heterogeneous artificial neurons connected by weighted
//! synapses and advances them in synchronous ticks, for exploring attractor
//! convergence, oscillation and noise-driven activity.
//!
//! ## Quick Start
//!
//! ```rust
//! use netsy::prelude::*;
//!
//! let mut network = Network::with_seed(42);
//! let noise = network
//!     .create_neuron_array(5, NeuronConfig::new(ModelKind::BinaryNoise).named("noise"))
//!     .unwrap();
//! let top = network
//!     .create_neuron(NeuronConfig::new(ModelKind::Threshold).named("top"))
//!     .unwrap();
//! network.listen_to(top, noise, ConnectionWeight::Random).unwrap();
//!
//! let series = network.run(100).unwrap();
//! assert_eq!(series.len(), 100);
//! assert_eq!(series.neuron_count(), 6);
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  Models: netsy-neural                                   │
//! │  (NeuronModel contract, six variants, Neuron)           │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Substrate: netsy-network                               │
//! │  (Connectivity, synchronous tick loop, recording)       │
//! └─────────────────────────────────────────────────────────┘
//!                         ↓
//! ┌─────────────────────────────────────────────────────────┐
//! │  Runs: scenarios + netsy-run                            │
//! │  (netsy-config, netsy-observability)                    │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Feature Flags
//!
//! - **`parallel`** (default): rayon-parallel per-neuron tick phase
//! - **`file-logging`**: JSON run log files for `netsy-run`

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use netsy_config as config;
pub use netsy_network as network;
pub use netsy_neural as neural;
pub use netsy_observability as observability;

pub mod scenarios;

/// Prelude - commonly used types and traits
pub mod prelude {
    pub use crate::network::{
        imprint_pattern, pattern_similarity, similarity_to_all, ActivationSeries,
        ConnectionWeight, Connectivity, Network,
    };
    pub use crate::neural::{
        ActivationRange, BinaryNoiseParameters, LimitSigmoidParameters, ModelConfig, ModelKind,
        NetsyError, Neuron, NeuronConfig, NeuronId, NeuronSet, RelayParameters, Result,
        SigmoidParameters, ThresholdParameters, WhiteNoiseParameters,
    };
}
