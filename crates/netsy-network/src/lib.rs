// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

/*
 * Copyright 2025 Neuraville Inc.
 *
 * Licensed under the Apache License, Version 2.0 (the "License");
 * you may not use this file except in compliance with the License.
 */

//! # netsy Network Substrate
//!
//! Connects [`netsy_neural`] neurons with a dense weight matrix and advances
//! them in lock-step.
//!
//! ## Architecture
//! - **Connectivity**: square `W[source, target]` matrix, grown with the population
//! - **Network**: neuron factory, wiring helpers, synchronous step/run loop
//! - **Recording**: tick-major activation series with neuron-major views
//! - **Patterns**: Hebbian imprinting and recall similarity
//!
//! ## Example
//!
//! ```
//! use netsy_network::Network;
//! use netsy_neural::{ModelKind, NeuronConfig};
//!
//! let mut network = Network::with_seed(7);
//! let inputs = network
//!     .create_neuron_array(2, NeuronConfig::new(ModelKind::Relay).named("in"))
//!     .unwrap();
//! let out = network.create_neuron(ModelKind::Relay).unwrap();
//! network.listen_to(out, inputs.clone(), 0.5).unwrap();
//!
//! network.set_activation(inputs[0], 1.0).unwrap();
//! let series = network.run(1).unwrap();
//! assert_eq!(series.tick(0).unwrap()[out.index()], 0.5);
//! ```

/// Crate version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod connectivity;
pub mod network;
pub mod patterns;
pub mod recording;

pub use connectivity::Connectivity;
pub use network::{ConnectionWeight, Network};
pub use patterns::{imprint_pattern, pattern_similarity, similarity_to_all};
pub use recording::ActivationSeries;

pub use netsy_neural::{NetsyError, NeuronId, NeuronSet, Result};
