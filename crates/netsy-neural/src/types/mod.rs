// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! # Neural Types Module
//!
//! Core type definitions shared by the neuron models and the network substrate.

pub mod error;
pub mod ids;
pub mod range;

pub use error::{Error, NetsyError, Result};
pub use ids::{NeuronId, NeuronSet};
pub use range::{ActivationRange, ACTIVATION_RANGE_HIGH, ACTIVATION_RANGE_LOW};
